use rand::Rng;
use shoreline_geom::Vec2;

use crate::atlas::AtlasTile;
use crate::blend::{BlendRule, Patch};
use crate::mesh_build::TileMesh;

/// Pick one of `choices`. The draw is cosmetic only: it never feeds back into
/// terrain data, and single-entry lists leave the rng untouched.
#[inline]
pub(crate) fn pick_variant<R: Rng + ?Sized>(rng: &mut R, choices: &[AtlasTile]) -> AtlasTile {
    match choices {
        [only] => *only,
        _ => choices[rng.gen_range(0..choices.len())],
    }
}

/// Emits a full-cell quad for `tile` at `cell_origin`.
#[inline]
pub(crate) fn emit_tile(mesh: &mut TileMesh, cell_origin: Vec2, tile_size: f32, tile: AtlasTile) {
    mesh.add_quad(cell_origin, Vec2::splat(tile_size), tile.px_rect());
}

/// Emits the covered fraction of a cell, sampling the same fraction of the patch tile.
#[inline]
pub(crate) fn emit_patch(mesh: &mut TileMesh, cell_origin: Vec2, tile_size: f32, patch: Patch) {
    let (x0, y0, x1, y1) = patch.region.fractions();
    let origin = cell_origin + Vec2::new(x0, y0) * tile_size;
    let size = Vec2::new(x1 - x0, y1 - y0) * tile_size;
    mesh.add_quad(origin, size, patch.tile.px_rect().sub(x0, y0, x1, y1));
}

/// Emits a sea cell: the base quad first, then every patch on top of it.
pub(crate) fn emit_sea_cell<R: Rng + ?Sized>(
    mesh: &mut TileMesh,
    cell_origin: Vec2,
    tile_size: f32,
    rule: &BlendRule,
    rng: &mut R,
) {
    let base = pick_variant(rng, rule.base.atlas_choices());
    emit_tile(mesh, cell_origin, tile_size, base);
    for patch in rule.patches.as_slice() {
        emit_patch(mesh, cell_origin, tile_size, *patch);
    }
}
