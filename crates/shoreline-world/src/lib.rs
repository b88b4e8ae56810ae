//! World sizing, noise sampling, tile classification and terrain config.
#![forbid(unsafe_code)]

mod chunk_coord;
mod classify;
pub mod config;
mod noise;

pub use chunk_coord::ChunkCoord;
pub use classify::{Classifier, SampleMode, TileKind};
pub use config::{
    ConfigError, Fractal, NoiseConfig, NoiseKind, TerrainConfig, load_terrain_config,
};
pub use noise::{NoiseField, TileSampler};

/// Tiles per chunk edge when no config overrides it.
pub const CHUNK_SIZE: usize = 64;
/// World units per tile when no config overrides it.
pub const TILE_SIZE: f32 = 16.0;
