//! Neighbor-mask → tile lookup for sea cells (simplified marching squares).
//!
//! Every one of the 256 masks has an entry in [`BLEND_TABLE`]. Masks that no base
//! rule covers (only diagonal neighbors are land) are kept as explicit `mapped: false`
//! entries that reuse [`LAND_DEFAULT`]; they are not patched over silently.

use crate::atlas::{
    AtlasTile, INNER_BOTTOM_LEFT, INNER_BOTTOM_RIGHT, INNER_TOP_LEFT, INNER_TOP_RIGHT,
    LAND_DEFAULT, SEA_TILES, SHORE_BOTTOM, SHORE_BOTTOM_LEFT, SHORE_BOTTOM_RIGHT, SHORE_LEFT,
    SHORE_RIGHT, SHORE_TOP, SHORE_TOP_LEFT, SHORE_TOP_RIGHT,
};
use crate::constants::{MASK_COUNT, MAX_PATCHES};
use crate::neighbors::NeighborMask;

/// Full-size tile drawn for a sea cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BaseTile {
    /// Open water, one of several cosmetic variants.
    Sea,
    /// Land on the left and top.
    ShoreTopLeft,
    ShoreTopRight,
    ShoreBottomRight,
    ShoreBottomLeft,
    /// Land on one straight side.
    ShoreLeft,
    ShoreRight,
    ShoreTop,
    ShoreBottom,
    /// Fall-through for unmapped masks.
    LandDefault,
}

impl BaseTile {
    /// Atlas positions this base may be drawn with. Only `Sea` has alternatives.
    pub fn atlas_choices(self) -> &'static [AtlasTile] {
        match self {
            BaseTile::Sea => &SEA_TILES,
            BaseTile::ShoreTopLeft => &[SHORE_TOP_LEFT],
            BaseTile::ShoreTopRight => &[SHORE_TOP_RIGHT],
            BaseTile::ShoreBottomRight => &[SHORE_BOTTOM_RIGHT],
            BaseTile::ShoreBottomLeft => &[SHORE_BOTTOM_LEFT],
            BaseTile::ShoreLeft => &[SHORE_LEFT],
            BaseTile::ShoreRight => &[SHORE_RIGHT],
            BaseTile::ShoreTop => &[SHORE_TOP],
            BaseTile::ShoreBottom => &[SHORE_BOTTOM],
            BaseTile::LandDefault => &[LAND_DEFAULT],
        }
    }
}

/// Part of a cell covered by a supplementary patch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatchRegion {
    RightHalf,
    BottomHalf,
    TopLeftQuarter,
    TopRightQuarter,
    BottomRightQuarter,
    BottomLeftQuarter,
}

impl PatchRegion {
    /// Covered area as fractions of the cell, `(x0, y0, x1, y1)`.
    #[inline]
    pub const fn fractions(self) -> (f32, f32, f32, f32) {
        match self {
            PatchRegion::RightHalf => (0.5, 0.0, 1.0, 1.0),
            PatchRegion::BottomHalf => (0.0, 0.5, 1.0, 1.0),
            PatchRegion::TopLeftQuarter => (0.0, 0.0, 0.5, 0.5),
            PatchRegion::TopRightQuarter => (0.5, 0.0, 1.0, 0.5),
            PatchRegion::BottomRightQuarter => (0.5, 0.5, 1.0, 1.0),
            PatchRegion::BottomLeftQuarter => (0.0, 0.5, 0.5, 1.0),
        }
    }
}

/// A partial quad layered over the base tile. It samples the same region of `tile`
/// that it covers on the cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Patch {
    pub region: PatchRegion,
    pub tile: AtlasTile,
}

impl Patch {
    // Stand-in for three-sided coasts the atlas has no tile for.
    pub const RIGHT_EDGE_HALF: Patch = Patch {
        region: PatchRegion::RightHalf,
        tile: SHORE_RIGHT,
    };
    pub const BOTTOM_EDGE_HALF: Patch = Patch {
        region: PatchRegion::BottomHalf,
        tile: SHORE_BOTTOM,
    };
    pub const INNER_TL: Patch = Patch {
        region: PatchRegion::TopLeftQuarter,
        tile: INNER_TOP_LEFT,
    };
    pub const INNER_TR: Patch = Patch {
        region: PatchRegion::TopRightQuarter,
        tile: INNER_TOP_RIGHT,
    };
    pub const INNER_BR: Patch = Patch {
        region: PatchRegion::BottomRightQuarter,
        tile: INNER_BOTTOM_RIGHT,
    };
    pub const INNER_BL: Patch = Patch {
        region: PatchRegion::BottomLeftQuarter,
        tile: INNER_BOTTOM_LEFT,
    };
}

/// Fixed-capacity patch list so the whole table can be built in a const context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PatchList {
    items: [Patch; MAX_PATCHES],
    len: u8,
}

impl PatchList {
    pub const EMPTY: PatchList = PatchList {
        items: [Patch::INNER_TL; MAX_PATCHES],
        len: 0,
    };

    const fn push(mut self, p: Patch) -> Self {
        self.items[self.len as usize] = p;
        self.len += 1;
        self
    }

    #[inline]
    pub fn as_slice(&self) -> &[Patch] {
        &self.items[..self.len as usize]
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlendRule {
    pub base: BaseTile,
    pub patches: PatchList,
    /// False when no base rule matched and `base` is the land fall-through.
    pub mapped: bool,
}

impl BlendRule {
    /// Quads this rule emits for one cell.
    #[inline]
    pub const fn quad_count(&self) -> usize {
        1 + self.patches.len()
    }
}

const fn rule_for(bits: u8) -> BlendRule {
    let m = NeighborMask(bits);
    let (l, t, r, b) = (
        m.has(NeighborMask::L),
        m.has(NeighborMask::T),
        m.has(NeighborMask::R),
        m.has(NeighborMask::B),
    );

    // First match wins.
    let (base, mapped) = if bits == 0 {
        (BaseTile::Sea, true)
    } else if l && t {
        (BaseTile::ShoreTopLeft, true)
    } else if r && t {
        (BaseTile::ShoreTopRight, true)
    } else if r && b {
        (BaseTile::ShoreBottomRight, true)
    } else if l && b {
        (BaseTile::ShoreBottomLeft, true)
    } else if l {
        (BaseTile::ShoreLeft, true)
    } else if r {
        (BaseTile::ShoreRight, true)
    } else if t {
        (BaseTile::ShoreTop, true)
    } else if b {
        (BaseTile::ShoreBottom, true)
    } else {
        (BaseTile::LandDefault, false)
    };

    let mut patches = PatchList::EMPTY;
    // Only these two three-sided coasts are patched; R+T+B and L+B+R are not.
    if l && t && r {
        patches = patches.push(Patch::RIGHT_EDGE_HALF);
    }
    if l && t && b {
        patches = patches.push(Patch::BOTTOM_EDGE_HALF);
    }
    if m.has(NeighborMask::TL) && !t && !l {
        patches = patches.push(Patch::INNER_TL);
    }
    if m.has(NeighborMask::TR) && !t && !r {
        patches = patches.push(Patch::INNER_TR);
    }
    if m.has(NeighborMask::BR) && !b && !r {
        patches = patches.push(Patch::INNER_BR);
    }
    if m.has(NeighborMask::BL) && !b && !l {
        patches = patches.push(Patch::INNER_BL);
    }

    BlendRule {
        base,
        patches,
        mapped,
    }
}

pub const fn build_blend_table() -> [BlendRule; MASK_COUNT] {
    let mut table = [rule_for(0); MASK_COUNT];
    let mut i = 0;
    while i < MASK_COUNT {
        table[i] = rule_for(i as u8);
        i += 1;
    }
    table
}

pub static BLEND_TABLE: [BlendRule; MASK_COUNT] = build_blend_table();

#[inline]
pub fn blend_rule(mask: NeighborMask) -> &'static BlendRule {
    &BLEND_TABLE[mask.bits() as usize]
}

/// Masks that fall through every base rule.
pub fn unmapped_masks() -> impl Iterator<Item = NeighborMask> {
    (0..=u8::MAX)
        .map(NeighborMask)
        .filter(|m| !blend_rule(*m).mapped)
}
