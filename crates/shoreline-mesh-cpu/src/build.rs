use rand::Rng;
use shoreline_chunk::Chunk;
use shoreline_geom::Vec2;
use shoreline_world::{Classifier, TileSampler};

use crate::atlas::land_tiles;
use crate::blend::blend_rule;
use crate::chunk::{ChunkMesh, MeshStats};
use crate::emit::{emit_sea_cell, emit_tile, pick_variant};
use crate::mesh_build::TileMesh;
use crate::neighbors::NeighborMask;

/// Land/sea lookup around a chunk. Cells inside the chunk come from its tiles;
/// cells outside are sampled from the field directly, so neighbor chunks never
/// need to be loaded.
pub struct NeighborView<'a, S: TileSampler + ?Sized> {
    chunk: &'a Chunk,
    sampler: &'a S,
    classifier: &'a Classifier,
    base_x: i32,
    base_y: i32,
}

impl<'a, S: TileSampler + ?Sized> NeighborView<'a, S> {
    pub fn new(chunk: &'a Chunk, sampler: &'a S, classifier: &'a Classifier) -> Self {
        let (base_x, base_y) = chunk.index().base_tile(chunk.size());
        Self {
            chunk,
            sampler,
            classifier,
            base_x,
            base_y,
        }
    }

    /// Land test for a local coordinate that may lie outside `[0, size)`.
    #[inline]
    pub fn is_land(&self, lx: i32, ly: i32) -> bool {
        let s = self.chunk.size() as i32;
        if lx >= 0 && lx < s && ly >= 0 && ly < s {
            self.chunk
                .is_land_local(lx as usize, ly as usize, self.classifier)
        } else {
            self.classifier
                .is_land(self.sampler.sample(self.base_x + lx, self.base_y + ly))
        }
    }

    #[inline]
    pub fn mask_at(&self, x: usize, y: usize) -> NeighborMask {
        let (x, y) = (x as i32, y as i32);
        NeighborMask::from_fn(|dx, dy| self.is_land(x + dx, y + dy))
    }
}

/// Builds the tile mesh for `chunk` with its top-left corner at `origin`.
///
/// Pure apart from `rng`, which only selects among cosmetic texture variants.
/// Every cell emits at least one quad.
pub fn build_chunk_mesh<S, R>(
    chunk: &Chunk,
    origin: Vec2,
    sampler: &S,
    classifier: &Classifier,
    tile_size: f32,
    rng: &mut R,
) -> ChunkMesh
where
    S: TileSampler + ?Sized,
    R: Rng + ?Sized,
{
    let size = chunk.size();
    let view = NeighborView::new(chunk, sampler, classifier);
    let mut mesh = TileMesh::default();
    mesh.reserve_quads(size * size);
    let mut stats = MeshStats::default();

    for y in 0..size {
        for x in 0..size {
            let cell_origin = origin + Vec2::new(x as f32, y as f32) * tile_size;
            let sample = chunk.get_local(x, y);
            if sample.is_land(classifier) {
                let tile = pick_variant(rng, land_tiles(sample.land_kind(classifier)));
                emit_tile(&mut mesh, cell_origin, tile_size, tile);
                stats.land_cells += 1;
                continue;
            }
            let mask = view.mask_at(x, y);
            let rule = blend_rule(mask);
            emit_sea_cell(&mut mesh, cell_origin, tile_size, rule, rng);
            stats.sea_cells += 1;
            stats.patch_quads += rule.patches.len() as u32;
            stats.mask_counts[mask.bits() as usize] += 1;
            if !rule.mapped {
                stats.unmapped_cells += 1;
            }
        }
    }

    if stats.unmapped_cells > 0 {
        log::debug!(
            target: "mesh",
            "chunk {} has {} sea cell(s) with unmapped neighbor masks",
            chunk.index(),
            stats.unmapped_cells
        );
    }

    let bounds = mesh
        .bounds()
        .unwrap_or_else(|| chunk.world_bounds(tile_size));
    ChunkMesh {
        coord: chunk.index(),
        bounds,
        mesh,
        stats,
    }
}
