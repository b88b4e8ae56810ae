//! Shared constants for shoreline-mesh-cpu. Centralizes common magic numbers.

/// Edge length of one atlas tile in pixels.
pub const ATLAS_TILE_PX: f32 = 16.0;

pub(crate) const VERTS_PER_QUAD: usize = 4;

/// Number of distinct 8-neighbor land/sea configurations.
pub const MASK_COUNT: usize = 256;

// At most four quarter patches fit on one cell; half patches exclude quarters.
pub(crate) const MAX_PATCHES: usize = 4;
