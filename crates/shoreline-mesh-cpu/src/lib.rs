//! CPU tile meshing: neighbor-aware tile selection and quad emission (engine-only).
#![forbid(unsafe_code)]

pub mod atlas;
pub mod blend;
mod build;
mod chunk;
pub mod constants;
mod emit;
mod mesh_build;
mod neighbors;

pub use atlas::{AtlasRect, AtlasRef, AtlasTile, TERRAIN_ATLAS};
pub use blend::{BLEND_TABLE, BaseTile, BlendRule, Patch, PatchRegion, blend_rule, unmapped_masks};
pub use build::{NeighborView, build_chunk_mesh};
pub use chunk::{ChunkMesh, MeshStats};
pub use mesh_build::{TileMesh, Vertex};
pub use neighbors::{NEIGHBOR_OFFSETS, NeighborMask};
