use shoreline_geom::Rect;
use shoreline_world::ChunkCoord;

use crate::constants::MASK_COUNT;
use crate::mesh_build::TileMesh;

/// Built mesh for one live chunk plus its cached world bounds.
#[derive(Clone, Debug)]
pub struct ChunkMesh {
    pub coord: ChunkCoord,
    pub bounds: Rect,
    pub mesh: TileMesh,
    pub stats: MeshStats,
}

impl ChunkMesh {
    #[inline]
    pub fn quad_count(&self) -> usize {
        self.mesh.quad_count()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeshStats {
    pub land_cells: u32,
    pub sea_cells: u32,
    pub patch_quads: u32,
    /// Sea cells whose neighbor mask had no base rule.
    pub unmapped_cells: u32,
    /// Sea cells per neighbor mask.
    pub mask_counts: [u32; MASK_COUNT],
}

impl Default for MeshStats {
    fn default() -> Self {
        Self {
            land_cells: 0,
            sea_cells: 0,
            patch_quads: 0,
            unmapped_cells: 0,
            mask_counts: [0; MASK_COUNT],
        }
    }
}

impl MeshStats {
    /// Masks seen at least once, most frequent first.
    pub fn top_masks(&self, n: usize) -> Vec<(u8, u32)> {
        let mut seen: Vec<(u8, u32)> = self
            .mask_counts
            .iter()
            .enumerate()
            .filter(|(_, c)| **c > 0)
            .map(|(m, c)| (m as u8, *c))
            .collect();
        seen.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        seen.truncate(n);
        seen
    }
}
