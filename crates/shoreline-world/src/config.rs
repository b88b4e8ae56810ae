use serde::{Deserialize, Serialize};
use shoreline_geom::Vec2;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::{CHUNK_SIZE, ChunkCoord, Classifier, SampleMode, TILE_SIZE};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {}", path.display(), source)]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
    #[error("invalid terrain config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TerrainConfig {
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    #[serde(default = "default_tile_size")]
    pub tile_size: f32,
    #[serde(default)]
    pub sea_level: f32,
    #[serde(default = "default_draw_distance")]
    pub draw_distance: f32,
    #[serde(default)]
    pub mode: SampleMode,
    /// Seed for cosmetic tile variation only. Entropy-seeded when absent.
    #[serde(default)]
    pub cosmetic_seed: Option<u64>,
    #[serde(default)]
    pub noise: NoiseConfig,
}

fn default_chunk_size() -> usize {
    CHUNK_SIZE
}
fn default_tile_size() -> f32 {
    TILE_SIZE
}
fn default_draw_distance() -> f32 {
    3500.0
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            tile_size: default_tile_size(),
            sea_level: 0.0,
            draw_distance: default_draw_distance(),
            mode: SampleMode::default(),
            cosmetic_seed: None,
            noise: NoiseConfig::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseKind {
    /// OpenSimplex2 layered as fractal Brownian motion.
    #[default]
    SimplexFractal,
    /// Cellular noise returning the per-cell value (flat Voronoi patches).
    Cellular,
    OpenSimplex2,
    Perlin,
    Value,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoiseConfig {
    #[serde(default)]
    pub kind: NoiseKind,
    #[serde(default = "default_seed")]
    pub seed: i32,
    #[serde(default = "default_frequency")]
    pub frequency: f32,
    #[serde(default)]
    pub fractal: Fractal,
}

fn default_seed() -> i32 {
    1337
}
fn default_frequency() -> f32 {
    0.01
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            kind: NoiseKind::default(),
            seed: default_seed(),
            frequency: default_frequency(),
            fractal: Fractal::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fractal {
    #[serde(default = "d_oct")]
    pub octaves: i32,
    #[serde(default = "d_lac")]
    pub lacunarity: f32,
    #[serde(default = "d_gain")]
    pub gain: f32,
}
fn d_oct() -> i32 {
    3
}
fn d_lac() -> f32 {
    2.0
}
fn d_gain() -> f32 {
    0.5
}
impl Default for Fractal {
    fn default() -> Self {
        Self {
            octaves: d_oct(),
            lacunarity: d_lac(),
            gain: d_gain(),
        }
    }
}

impl TerrainConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: TerrainConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::Invalid("chunk_size must be at least 1".into()));
        }
        if !(self.tile_size.is_finite() && self.tile_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "tile_size must be positive, got {}",
                self.tile_size
            )));
        }
        if !(self.draw_distance.is_finite() && self.draw_distance > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "draw_distance must be positive, got {}",
                self.draw_distance
            )));
        }
        if !self.sea_level.is_finite() {
            return Err(ConfigError::Invalid("sea_level must be finite".into()));
        }
        if !(self.noise.frequency.is_finite() && self.noise.frequency > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "noise.frequency must be positive, got {}",
                self.noise.frequency
            )));
        }
        if self.noise.fractal.octaves < 1 {
            return Err(ConfigError::Invalid("noise.fractal.octaves must be at least 1".into()));
        }
        Ok(())
    }

    /// Edge length of one chunk in world units.
    #[inline]
    pub fn chunk_world_size(&self) -> f32 {
        self.chunk_size as f32 * self.tile_size
    }

    #[inline]
    pub fn classifier(&self) -> Classifier {
        Classifier::new(self.mode, self.sea_level)
    }

    #[inline]
    pub fn chunk_at(&self, pos: Vec2) -> ChunkCoord {
        ChunkCoord::from_world(pos, self.chunk_world_size())
    }

    #[inline]
    pub fn chunk_origin(&self, coord: ChunkCoord) -> Vec2 {
        coord.world_origin(self.chunk_size, self.tile_size)
    }
}

pub fn load_terrain_config(path: &Path) -> Result<TerrainConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: TerrainConfig = toml::from_str(&s).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    cfg.validate()?;
    log::info!("terrain config loaded from {}", path.display());
    Ok(cfg)
}
