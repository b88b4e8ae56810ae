use hashbrown::HashMap;
use shoreline_chunk::Chunk;
use shoreline_world::ChunkCoord;

use crate::arena::{EntityStore, Handle, SlotArena};

/// Live chunks, reachable by handle through the entity store and by coordinate
/// through an index kept in lockstep with it.
#[derive(Debug)]
pub struct ChunkStore<S: EntityStore<Chunk> = SlotArena<Chunk>> {
    entities: S,
    by_coord: HashMap<ChunkCoord, Handle>,
}

impl Default for ChunkStore<SlotArena<Chunk>> {
    fn default() -> Self {
        Self::with_store(SlotArena::new())
    }
}

impl ChunkStore<SlotArena<Chunk>> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: EntityStore<Chunk>> ChunkStore<S> {
    pub fn with_store(entities: S) -> Self {
        Self {
            entities,
            by_coord: HashMap::new(),
        }
    }

    /// Adds `chunk`. A coordinate is live at most once: if it already is, the
    /// existing handle is returned and `chunk` is dropped.
    pub fn insert(&mut self, chunk: Chunk) -> Handle {
        let coord = chunk.index();
        if let Some(&h) = self.by_coord.get(&coord) {
            log::debug!(target: "streaming", "chunk {} already live; keeping existing", coord);
            return h;
        }
        let h = self.entities.create(chunk);
        self.by_coord.insert(coord, h);
        h
    }

    pub fn remove(&mut self, coord: ChunkCoord) -> Option<(Handle, Chunk)> {
        let h = self.by_coord.remove(&coord)?;
        self.entities.destroy(h).map(|c| (h, c))
    }

    #[inline]
    pub fn contains(&self, coord: ChunkCoord) -> bool {
        self.by_coord.contains_key(&coord)
    }

    #[inline]
    pub fn handle_of(&self, coord: ChunkCoord) -> Option<Handle> {
        self.by_coord.get(&coord).copied()
    }

    pub fn get(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.handle_of(coord).and_then(|h| self.entities.get(h))
    }

    #[inline]
    pub fn get_by_handle(&self, handle: Handle) -> Option<&Chunk> {
        self.entities.get(handle)
    }

    /// Live chunks in store order.
    pub fn iter(&self) -> S::Iter<'_> {
        self.entities.iter()
    }

    pub fn coords(&self) -> impl Iterator<Item = ChunkCoord> + '_ {
        self.entities.iter().map(|(_, c)| c.index())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
