use shoreline_mesh_cpu::{BLEND_TABLE, BaseTile, NeighborMask, Patch, blend_rule, unmapped_masks};

const TL: u8 = NeighborMask::TL;
const T: u8 = NeighborMask::T;
const TR: u8 = NeighborMask::TR;
const R: u8 = NeighborMask::R;
const BR: u8 = NeighborMask::BR;
const B: u8 = NeighborMask::B;
const BL: u8 = NeighborMask::BL;
const L: u8 = NeighborMask::L;

fn rule(bits: u8) -> &'static shoreline_mesh_cpu::BlendRule {
    blend_rule(NeighborMask(bits))
}

#[test]
fn empty_mask_is_plain_sea() {
    let r = rule(0);
    assert_eq!(r.base, BaseTile::Sea);
    assert!(r.mapped);
    assert!(r.patches.is_empty());
}

#[test]
fn corners_take_precedence_in_order() {
    assert_eq!(rule(L | T).base, BaseTile::ShoreTopLeft);
    assert_eq!(rule(R | T).base, BaseTile::ShoreTopRight);
    assert_eq!(rule(R | B).base, BaseTile::ShoreBottomRight);
    assert_eq!(rule(L | B).base, BaseTile::ShoreBottomLeft);
    // L&T is checked before R&T and R&B
    assert_eq!(rule(L | T | R | B).base, BaseTile::ShoreTopLeft);
    // R&T before L&B
    assert_eq!(rule(R | T | B).base, BaseTile::ShoreTopRight);
    assert_eq!(rule(R | B | L).base, BaseTile::ShoreBottomRight);
}

#[test]
fn single_edges_checked_left_right_top_bottom() {
    assert_eq!(rule(L).base, BaseTile::ShoreLeft);
    assert_eq!(rule(R).base, BaseTile::ShoreRight);
    assert_eq!(rule(T).base, BaseTile::ShoreTop);
    assert_eq!(rule(B).base, BaseTile::ShoreBottom);
    // Opposite sides are ambiguous; only one straight edge wins
    assert_eq!(rule(L | R).base, BaseTile::ShoreLeft);
    assert_eq!(rule(T | B).base, BaseTile::ShoreTop);
}

#[test]
fn three_sided_coasts_add_half_patches() {
    assert_eq!(rule(L | T | R).patches.as_slice(), &[Patch::RIGHT_EDGE_HALF]);
    assert_eq!(rule(L | T | B).patches.as_slice(), &[Patch::BOTTOM_EDGE_HALF]);
    assert_eq!(
        rule(L | T | R | B).patches.as_slice(),
        &[Patch::RIGHT_EDGE_HALF, Patch::BOTTOM_EDGE_HALF]
    );
    // The other three-sided coasts have no stand-in tile
    assert!(rule(R | T | B).patches.is_empty());
    assert!(rule(L | B | R).patches.is_empty());
}

#[test]
fn isolated_diagonals_add_quarter_patches() {
    assert_eq!(rule(TL).patches.as_slice(), &[Patch::INNER_TL]);
    assert_eq!(rule(TR).patches.as_slice(), &[Patch::INNER_TR]);
    assert_eq!(rule(BR).patches.as_slice(), &[Patch::INNER_BR]);
    assert_eq!(rule(BL).patches.as_slice(), &[Patch::INNER_BL]);
    // A diagonal next to a set straight edge is not isolated
    assert!(rule(TL | T).patches.is_empty());
    assert!(rule(TL | L).patches.is_empty());
    // Isolated diagonal on the far side of an edge still gets its quarter
    let r = rule(L | BR);
    assert_eq!(r.base, BaseTile::ShoreLeft);
    assert_eq!(r.patches.as_slice(), &[Patch::INNER_BR]);
}

// Masks with only diagonal land match no base rule. They are kept visible as
// unmapped entries that fall through to the land default tile.
#[test]
fn unmapped_masks_are_exactly_the_diagonal_only_masks() {
    let unmapped: Vec<u8> = unmapped_masks().map(|m| m.bits()).collect();
    let expected: Vec<u8> = (1..=u8::MAX)
        .filter(|m| m & NeighborMask::STRAIGHT == 0)
        .collect();
    assert_eq!(unmapped.len(), 15);
    assert_eq!(unmapped, expected);
    for bits in unmapped {
        let r = rule(bits);
        assert_eq!(r.base, BaseTile::LandDefault);
        // every diagonal neighbor becomes a quarter patch
        assert_eq!(r.patches.len(), bits.count_ones() as usize);
    }
}

#[test]
fn every_entry_emits_at_least_the_base_quad() {
    for (i, r) in BLEND_TABLE.iter().enumerate() {
        assert!(r.quad_count() >= 1, "mask {i:#010b}");
        assert!(!r.base.atlas_choices().is_empty(), "mask {i:#010b}");
        // half and quarter patches never mix on one cell
        let halves = r
            .patches
            .as_slice()
            .iter()
            .filter(|p| **p == Patch::RIGHT_EDGE_HALF || **p == Patch::BOTTOM_EDGE_HALF)
            .count();
        assert!(halves == 0 || halves == r.patches.len(), "mask {i:#010b}");
    }
}

#[test]
fn only_plain_sea_has_variants() {
    for r in BLEND_TABLE.iter() {
        let n = r.base.atlas_choices().len();
        if r.base == BaseTile::Sea {
            assert!(n > 1);
        } else {
            assert_eq!(n, 1);
        }
    }
}
