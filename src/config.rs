use serde::{Deserialize, Serialize};
use shoreline_world::{ConfigError, TerrainConfig};
use std::fs;
use std::path::Path;

use crate::route::Route;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub terrain: TerrainConfig,
    #[serde(default)]
    pub sim: SimConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    #[serde(default = "default_ticks")]
    pub ticks: u64,
    /// Seconds per tick.
    #[serde(default = "default_dt")]
    pub dt: f32,
    /// Player speed in world units per second.
    #[serde(default = "default_speed")]
    pub speed: f32,
    #[serde(default)]
    pub route: Route,
    #[serde(default = "default_radius")]
    pub radius: f32,
}

fn default_ticks() -> u64 {
    600
}
fn default_dt() -> f32 {
    1.0 / 60.0
}
fn default_speed() -> f32 {
    // 16 units (one tile) per input step at 60 steps/s
    960.0
}
fn default_radius() -> f32 {
    4096.0
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ticks: default_ticks(),
            dt: default_dt(),
            speed: default_speed(),
            route: Route::default(),
            radius: default_radius(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.terrain.validate()?;
        let sim = &self.sim;
        if !(sim.dt.is_finite() && sim.dt > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "sim.dt must be positive, got {}",
                sim.dt
            )));
        }
        if !(sim.speed.is_finite() && sim.speed >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "sim.speed must be non-negative, got {}",
                sim.speed
            )));
        }
        if !(sim.radius.is_finite() && sim.radius > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "sim.radius must be positive, got {}",
                sim.radius
            )));
        }
        Ok(())
    }
}

pub fn load_app_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: AppConfig = toml::from_str(&s).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    cfg.validate()?;
    Ok(cfg)
}
