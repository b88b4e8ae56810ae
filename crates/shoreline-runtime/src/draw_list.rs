use hashbrown::HashMap;
use shoreline_mesh_cpu::ChunkMesh;

use crate::arena::Handle;

/// Built meshes keyed by the owning chunk's handle.
#[derive(Default, Debug)]
pub struct DrawList {
    meshes: HashMap<Handle, ChunkMesh>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, handle: Handle, mesh: ChunkMesh) -> Option<ChunkMesh> {
        self.meshes.insert(handle, mesh)
    }

    pub fn remove(&mut self, handle: Handle) -> Option<ChunkMesh> {
        self.meshes.remove(&handle)
    }

    #[inline]
    pub fn get(&self, handle: Handle) -> Option<&ChunkMesh> {
        self.meshes.get(&handle)
    }

    #[inline]
    pub fn contains(&self, handle: Handle) -> bool {
        self.meshes.contains_key(&handle)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Handle, &ChunkMesh)> {
        self.meshes.iter().map(|(h, m)| (*h, m))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    pub fn total_quads(&self) -> usize {
        self.meshes.values().map(|m| m.quad_count()).sum()
    }
}
