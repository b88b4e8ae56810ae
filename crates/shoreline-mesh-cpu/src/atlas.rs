//! Fixed texture-atlas layout. Positions are a convention matched to the terrain
//! sheet asset, not configuration.
//!
//! ```text
//! row 0: sand sand grass grass grass snow
//! row 1: sea  sea  sea
//! row 2: shore corners   TL TR BR BL   (land on the two named sides)
//! row 3: shore edges     L  R  T  B
//! row 4: inner corners   TL TR BR BL   (land only on the named diagonal)
//! ```

use shoreline_world::TileKind;

use crate::constants::ATLAS_TILE_PX;

/// Tile position in the atlas grid, in whole tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AtlasTile {
    pub col: u16,
    pub row: u16,
}

impl AtlasTile {
    #[inline]
    pub const fn new(col: u16, row: u16) -> Self {
        Self { col, row }
    }

    /// Pixel footprint of the tile in the atlas image.
    #[inline]
    pub fn px_rect(self) -> AtlasRect {
        AtlasRect {
            x: self.col as f32 * ATLAS_TILE_PX,
            y: self.row as f32 * ATLAS_TILE_PX,
            w: ATLAS_TILE_PX,
            h: ATLAS_TILE_PX,
        }
    }
}

/// Rectangle in atlas pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AtlasRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl AtlasRect {
    /// Sub-rectangle given as fractions of this rect, `(x0, y0)` to `(x1, y1)`.
    #[inline]
    pub fn sub(self, x0: f32, y0: f32, x1: f32, y1: f32) -> AtlasRect {
        AtlasRect {
            x: self.x + self.w * x0,
            y: self.y + self.h * y0,
            w: self.w * (x1 - x0),
            h: self.h * (y1 - y0),
        }
    }
}

/// Handle the render collaborator uses to bind the terrain sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AtlasRef {
    pub name: &'static str,
    pub tile_px: u32,
}

pub const TERRAIN_ATLAS: AtlasRef = AtlasRef {
    name: "terrain",
    tile_px: ATLAS_TILE_PX as u32,
};

pub const SAND_TILES: [AtlasTile; 2] = [AtlasTile::new(0, 0), AtlasTile::new(1, 0)];
pub const GRASS_TILES: [AtlasTile; 3] = [
    AtlasTile::new(2, 0),
    AtlasTile::new(3, 0),
    AtlasTile::new(4, 0),
];
pub const SNOW_TILES: [AtlasTile; 1] = [AtlasTile::new(5, 0)];
pub const SEA_TILES: [AtlasTile; 3] = [
    AtlasTile::new(0, 1),
    AtlasTile::new(1, 1),
    AtlasTile::new(2, 1),
];

/// Position reused by sea cells whose neighbor mask has no base rule.
pub const LAND_DEFAULT: AtlasTile = GRASS_TILES[0];

pub const SHORE_TOP_LEFT: AtlasTile = AtlasTile::new(0, 2);
pub const SHORE_TOP_RIGHT: AtlasTile = AtlasTile::new(1, 2);
pub const SHORE_BOTTOM_RIGHT: AtlasTile = AtlasTile::new(2, 2);
pub const SHORE_BOTTOM_LEFT: AtlasTile = AtlasTile::new(3, 2);

pub const SHORE_LEFT: AtlasTile = AtlasTile::new(0, 3);
pub const SHORE_RIGHT: AtlasTile = AtlasTile::new(1, 3);
pub const SHORE_TOP: AtlasTile = AtlasTile::new(2, 3);
pub const SHORE_BOTTOM: AtlasTile = AtlasTile::new(3, 3);

pub const INNER_TOP_LEFT: AtlasTile = AtlasTile::new(0, 4);
pub const INNER_TOP_RIGHT: AtlasTile = AtlasTile::new(1, 4);
pub const INNER_BOTTOM_RIGHT: AtlasTile = AtlasTile::new(2, 4);
pub const INNER_BOTTOM_LEFT: AtlasTile = AtlasTile::new(3, 4);

/// Cosmetic alternatives for a land kind. Sea maps to sand; callers only ask for land.
pub fn land_tiles(kind: TileKind) -> &'static [AtlasTile] {
    match kind {
        TileKind::Sea | TileKind::Sand => &SAND_TILES,
        TileKind::Grass => &GRASS_TILES,
        TileKind::Snow => &SNOW_TILES,
    }
}
