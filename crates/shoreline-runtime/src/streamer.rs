use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use shoreline_chunk::generate_chunk;
use shoreline_geom::Vec2;
use shoreline_mesh_cpu::{ChunkMesh, TERRAIN_ATLAS, build_chunk_mesh};
use shoreline_world::{ChunkCoord, Classifier, NoiseField, TerrainConfig};

use crate::arena::Handle;
use crate::draw_list::DrawList;
use crate::store::ChunkStore;
use crate::{RenderTarget, ViewerPosition};

/// What one streaming tick did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    pub viewer: Vec2,
    /// Chunk the viewer was resolved inside, `None` on the tick that created it.
    pub current: Option<ChunkCoord>,
    pub transitioned: bool,
    pub spawned: Vec<ChunkCoord>,
    pub evicted: Vec<ChunkCoord>,
}

/// Running totals since the streamer was created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreamStats {
    pub ticks: u64,
    pub spawned: u64,
    pub evicted: u64,
    pub transitions: u64,
    pub quads_built: u64,
    pub unmapped_cells: u64,
}

/// Keeps the chunks around a moving viewer live and meshed.
///
/// Every live chunk has exactly one mesh in the draw list; both are created in
/// [`TerrainStreamer::tick`] and dropped together when the chunk falls out of range.
pub struct TerrainStreamer {
    config: TerrainConfig,
    classifier: Classifier,
    field: NoiseField,
    store: ChunkStore,
    draw_list: DrawList,
    current: Option<ChunkCoord>,
    // Cosmetic tile variation only.
    rng: ChaCha12Rng,
    stats: StreamStats,
}

impl TerrainStreamer {
    pub fn new(config: TerrainConfig) -> Self {
        let rng = match config.cosmetic_seed {
            Some(seed) => ChaCha12Rng::seed_from_u64(seed),
            None => ChaCha12Rng::from_entropy(),
        };
        let field = NoiseField::new(&config.noise);
        log::info!(
            target: "streaming",
            "terrain streamer: chunk {}x{} tiles of {} units, draw distance {}, {:?} mode, noise {:?} seed {}",
            config.chunk_size,
            config.chunk_size,
            config.tile_size,
            config.draw_distance,
            config.mode,
            config.noise.kind,
            config.noise.seed
        );
        Self {
            classifier: config.classifier(),
            field,
            store: ChunkStore::new(),
            draw_list: DrawList::new(),
            current: None,
            rng,
            stats: StreamStats::default(),
            config,
        }
    }

    /// One streaming step: resolve the viewer's chunk, fill neighbors on a
    /// transition, then evict chunks beyond the draw distance.
    pub fn tick<V: ViewerPosition + ?Sized>(&mut self, viewer: &V) -> TickReport {
        let pos = viewer.viewer_world_position();
        let mut report = TickReport {
            viewer: pos,
            ..TickReport::default()
        };

        match self.resolve_current(pos) {
            Some(coord) => {
                if self.current != Some(coord) {
                    for n in coord.neighbors8() {
                        if !self.store.contains(n) {
                            self.spawn(n);
                            report.spawned.push(n);
                        }
                    }
                    report.transitioned = true;
                    self.stats.transitions += 1;
                    log::info!(
                        target: "streaming",
                        "viewer entered chunk {} ({} neighbor(s) spawned, {} live)",
                        coord,
                        report.spawned.len(),
                        self.store.len()
                    );
                }
                self.current = Some(coord);
            }
            None => {
                let coord = self.config.chunk_at(pos);
                if !self.store.contains(coord) {
                    self.spawn(coord);
                    report.spawned.push(coord);
                }
                self.current = None;
            }
        }
        report.current = self.current;
        report.evicted = self.evict_beyond(pos);
        self.stats.ticks += 1;
        report
    }

    /// Hands every live mesh to `target`, in store order.
    pub fn render<T: RenderTarget + ?Sized>(&self, target: &mut T) {
        for (h, _) in self.store.iter() {
            if let Some(mesh) = self.draw_list.get(h) {
                target.draw_chunk(mesh, TERRAIN_ATLAS);
            }
        }
    }

    // First live chunk (store order) whose mesh bounds contain `pos`. Vertex
    // bounds can miss `pos` by an ulp near a chunk edge; the floor-divided
    // chunk then counts if it is live.
    fn resolve_current(&self, pos: Vec2) -> Option<ChunkCoord> {
        self.store
            .iter()
            .find_map(|(h, c)| {
                self.draw_list
                    .get(h)
                    .filter(|m| m.bounds.contains(pos))
                    .map(|_| c.index())
            })
            .or_else(|| {
                let coord = self.config.chunk_at(pos);
                self.store.contains(coord).then_some(coord)
            })
    }

    fn spawn(&mut self, coord: ChunkCoord) -> Handle {
        let size = self.config.chunk_size;
        let generated = generate_chunk(&self.field, coord, size, &self.classifier);
        let origin = self.config.chunk_origin(coord);
        let mesh = build_chunk_mesh(
            &generated.chunk,
            origin,
            &self.field,
            &self.classifier,
            self.config.tile_size,
            &mut self.rng,
        );
        log::debug!(
            target: "streaming",
            "spawned chunk {}: {} land / {} sea tiles, {} quads",
            coord,
            generated.coverage.land_tiles,
            generated.coverage.sea_tiles,
            mesh.quad_count()
        );
        self.stats.spawned += 1;
        self.stats.quads_built += mesh.quad_count() as u64;
        self.stats.unmapped_cells += u64::from(mesh.stats.unmapped_cells);
        let h = self.store.insert(generated.chunk);
        self.draw_list.insert(h, mesh);
        h
    }

    fn evict_beyond(&mut self, pos: Vec2) -> Vec<ChunkCoord> {
        let limit = self.config.draw_distance;
        let far: Vec<ChunkCoord> = self
            .store
            .iter()
            .filter(|(h, _)| {
                self.draw_list
                    .get(*h)
                    .is_none_or(|m| m.bounds.center().distance(pos) > limit)
            })
            .map(|(_, c)| c.index())
            .collect();
        for &coord in &far {
            if let Some((h, _)) = self.store.remove(coord) {
                self.draw_list.remove(h);
            }
            if self.current == Some(coord) {
                self.current = None;
            }
            log::debug!(target: "streaming", "evicted chunk {}", coord);
        }
        self.stats.evicted += far.len() as u64;
        far
    }

    #[inline]
    pub fn current(&self) -> Option<ChunkCoord> {
        self.current
    }

    #[inline]
    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    #[inline]
    pub fn store(&self) -> &ChunkStore {
        &self.store
    }

    #[inline]
    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    #[inline]
    pub fn stats(&self) -> StreamStats {
        self.stats
    }

    pub fn mesh_for(&self, coord: ChunkCoord) -> Option<&ChunkMesh> {
        self.store
            .handle_of(coord)
            .and_then(|h| self.draw_list.get(h))
    }

    /// Builds a mesh for `coord` without touching the live set.
    pub fn build_detached(&mut self, coord: ChunkCoord) -> ChunkMesh {
        let generated = generate_chunk(
            &self.field,
            coord,
            self.config.chunk_size,
            &self.classifier,
        );
        build_chunk_mesh(
            &generated.chunk,
            self.config.chunk_origin(coord),
            &self.field,
            &self.classifier,
            self.config.tile_size,
            &mut self.rng,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TerrainConfig {
        TerrainConfig {
            cosmetic_seed: Some(3),
            ..TerrainConfig::default()
        }
    }

    #[test]
    fn first_tick_on_empty_store_creates_one_chunk() {
        let mut s = TerrainStreamer::new(config());
        let r = s.tick(&Vec2::ZERO);
        assert_eq!(r.spawned, vec![ChunkCoord::new(0, 0)]);
        assert_eq!(r.current, None);
        assert!(!r.transitioned);
        assert_eq!(s.store().len(), 1);
        let m = s.mesh_for(ChunkCoord::new(0, 0)).unwrap();
        assert_eq!(m.bounds.min, Vec2::ZERO);
        assert_eq!(m.bounds.max(), Vec2::splat(1024.0));
    }

    #[test]
    fn second_tick_fills_neighbors() {
        let mut s = TerrainStreamer::new(config());
        s.tick(&Vec2::new(10.0, 10.0));
        let r = s.tick(&Vec2::new(10.0, 10.0));
        assert!(r.transitioned);
        assert_eq!(r.current, Some(ChunkCoord::new(0, 0)));
        assert_eq!(r.spawned.len(), 8);
        assert_eq!(s.store().len(), 9);
        // staying put is not a transition
        let r = s.tick(&Vec2::new(20.0, 10.0));
        assert!(!r.transitioned);
        assert!(r.spawned.is_empty());
        assert_eq!(s.stats().transitions, 1);
    }

    #[test]
    fn negative_positions_floor() {
        let mut s = TerrainStreamer::new(config());
        let r = s.tick(&Vec2::new(-0.5, -1024.0));
        assert_eq!(r.spawned, vec![ChunkCoord::new(-1, -1)]);
    }

    // With a tile size of 0.1 the vertex bounds and floor division disagree
    // by an ulp just below some negative chunk edges.
    #[test]
    fn viewer_on_edge_sliver_still_resolves_its_chunk() {
        let cfg = TerrainConfig {
            chunk_size: 64,
            tile_size: 0.1,
            ..config()
        };
        let span = cfg.chunk_world_size();
        for cx in -50..-1 {
            let edge = (cx + 1) as f32 * span;
            // one ulp further from zero, so just below the edge
            let p = Vec2::new(f32::from_bits(edge.to_bits() + 1), 0.5);
            let floor = cfg.chunk_at(p);
            let mut s = TerrainStreamer::new(cfg.clone());
            let first = s.tick(&p);
            assert_eq!(first.spawned, vec![floor]);
            let second = s.tick(&p);
            assert_eq!(second.current, Some(floor), "x = {}", p.x);
            assert!(second.transitioned);
            for n in floor.neighbors8() {
                assert!(s.store().contains(n), "x = {}: missing {}", p.x, n);
            }
            assert!(s.tick(&p).current.is_some());
        }
    }

    #[test]
    fn small_draw_distance_evicts_the_fresh_chunk() {
        let mut s = TerrainStreamer::new(TerrainConfig {
            draw_distance: 10.0,
            ..config()
        });
        let r = s.tick(&Vec2::ZERO);
        assert_eq!(r.evicted, vec![ChunkCoord::new(0, 0)]);
        assert!(s.store().is_empty());
        assert!(s.draw_list().is_empty());
    }
}
