//! Chunk tile buffer and generation from a noise field.
#![forbid(unsafe_code)]

use shoreline_geom::{Rect, Vec2};
use shoreline_world::{ChunkCoord, Classifier, SampleMode, TileKind, TileSampler};

/// Per-chunk tile storage. One representation per engine configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum TileData {
    Heights(Vec<f32>),
    Kinds(Vec<TileKind>),
}

impl TileData {
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            TileData::Heights(v) => v.len(),
            TileData::Kinds(v) => v.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn mode(&self) -> SampleMode {
        match self {
            TileData::Heights(_) => SampleMode::Height,
            TileData::Kinds(_) => SampleMode::Discrete,
        }
    }
}

/// A single stored tile sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TileSample {
    Height(f32),
    Kind(TileKind),
}

impl TileSample {
    #[inline]
    pub fn is_land(self, classifier: &Classifier) -> bool {
        match self {
            TileSample::Height(h) => classifier.is_land(h),
            TileSample::Kind(k) => k.is_land(),
        }
    }

    /// Kind used to texture the tile when it is land.
    #[inline]
    pub fn land_kind(self, classifier: &Classifier) -> TileKind {
        match self {
            TileSample::Height(h) => classifier.land_kind(h),
            TileSample::Kind(k) => k.max(TileKind::Sand),
        }
    }
}

/// Square block of `size × size` tiles, stored y-major (`idx = y * size + x`).
/// Immutable once generated.
#[derive(Clone, Debug)]
pub struct Chunk {
    coord: ChunkCoord,
    size: usize,
    tiles: TileData,
}

impl Chunk {
    /// Build a chunk from explicit samples, padding with sea or truncating to `size²`.
    pub fn from_samples(coord: ChunkCoord, size: usize, tiles: TileData) -> Self {
        let expect = size * size;
        let tiles = match tiles {
            TileData::Heights(mut v) => {
                v.resize(expect, -1.0);
                TileData::Heights(v)
            }
            TileData::Kinds(mut v) => {
                v.resize(expect, TileKind::Sea);
                TileData::Kinds(v)
            }
        };
        Self { coord, size, tiles }
    }

    #[inline]
    pub fn index(&self) -> ChunkCoord {
        self.coord
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn tiles(&self) -> &TileData {
        &self.tiles
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    #[inline]
    pub fn get_local(&self, x: usize, y: usize) -> TileSample {
        let i = self.idx(x, y);
        match &self.tiles {
            TileData::Heights(v) => TileSample::Height(v[i]),
            TileData::Kinds(v) => TileSample::Kind(v[i]),
        }
    }

    /// Height at a local tile. Discrete chunks report a height inside the stored kind's band.
    #[inline]
    pub fn height_local(&self, x: usize, y: usize) -> f32 {
        match self.get_local(x, y) {
            TileSample::Height(h) => h,
            TileSample::Kind(k) => k.representative_height(),
        }
    }

    #[inline]
    pub fn is_land_local(&self, x: usize, y: usize, classifier: &Classifier) -> bool {
        self.get_local(x, y).is_land(classifier)
    }

    #[inline]
    pub fn contains_world(&self, wx: i32, wy: i32) -> bool {
        let (bx, by) = self.coord.base_tile(self.size);
        let s = self.size as i32;
        wx >= bx && wx < bx + s && wy >= by && wy < by + s
    }

    /// Sample at a global tile coordinate, or `None` if it lies in another chunk.
    #[inline]
    pub fn get_world(&self, wx: i32, wy: i32) -> Option<TileSample> {
        if !self.contains_world(wx, wy) {
            return None;
        }
        let (bx, by) = self.coord.base_tile(self.size);
        Some(self.get_local((wx - bx) as usize, (wy - by) as usize))
    }

    #[inline]
    pub fn world_origin(&self, tile_size: f32) -> Vec2 {
        self.coord.world_origin(self.size, tile_size)
    }

    #[inline]
    pub fn world_bounds(&self, tile_size: f32) -> Rect {
        Rect::new(
            self.world_origin(tile_size),
            Vec2::splat(self.size as f32 * tile_size),
        )
    }

    pub fn coverage(&self, classifier: &Classifier) -> ChunkCoverage {
        let land_tiles = match &self.tiles {
            TileData::Heights(v) => v.iter().filter(|h| classifier.is_land(**h)).count(),
            TileData::Kinds(v) => v.iter().filter(|k| k.is_land()).count(),
        };
        ChunkCoverage {
            land_tiles,
            sea_tiles: self.tiles.len() - land_tiles,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ChunkCoverage {
    pub land_tiles: usize,
    pub sea_tiles: usize,
}

impl ChunkCoverage {
    #[inline]
    pub fn is_all_sea(self) -> bool {
        self.land_tiles == 0
    }

    #[inline]
    pub fn is_all_land(self) -> bool {
        self.sea_tiles == 0
    }
}

#[derive(Clone, Debug)]
pub struct ChunkGenerateResult {
    pub chunk: Chunk,
    pub coverage: ChunkCoverage,
}

/// Evaluate `sampler` over the chunk's tile range. Deterministic for a fixed sampler.
pub fn generate_chunk<S: TileSampler + ?Sized>(
    sampler: &S,
    coord: ChunkCoord,
    size: usize,
    classifier: &Classifier,
) -> ChunkGenerateResult {
    let (bx, by) = coord.base_tile(size);
    let mut heights = Vec::with_capacity(size * size);
    for y in 0..size {
        for x in 0..size {
            heights.push(sampler.sample(bx + x as i32, by + y as i32));
        }
    }
    let tiles = match classifier.mode {
        SampleMode::Height => TileData::Heights(heights),
        SampleMode::Discrete => {
            TileData::Kinds(heights.into_iter().map(TileKind::from_height).collect())
        }
    };
    let chunk = Chunk { coord, size, tiles };
    let coverage = chunk.coverage(classifier);
    ChunkGenerateResult { chunk, coverage }
}
