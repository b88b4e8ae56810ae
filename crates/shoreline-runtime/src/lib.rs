//! Chunk streaming around a viewer: entity storage, live chunk set, draw list.
#![forbid(unsafe_code)]

mod arena;
mod draw_list;
mod store;
mod streamer;

use shoreline_geom::Vec2;
use shoreline_mesh_cpu::{AtlasRef, ChunkMesh};

pub use arena::{EntityStore, Handle, SlotArena, SlotIter};
pub use draw_list::DrawList;
pub use store::ChunkStore;
pub use streamer::{StreamStats, TerrainStreamer, TickReport};

/// Supplies the world position chunks are streamed around. Queried once per tick.
pub trait ViewerPosition {
    fn viewer_world_position(&self) -> Vec2;
}

impl ViewerPosition for Vec2 {
    #[inline]
    fn viewer_world_position(&self) -> Vec2 {
        *self
    }
}

/// Receives every live mesh once per frame. Drawing is up to the implementor.
pub trait RenderTarget {
    fn draw_chunk(&mut self, mesh: &ChunkMesh, atlas: AtlasRef);
}
