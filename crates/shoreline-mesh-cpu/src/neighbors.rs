/// Land flags of a cell's 8 neighbors. Bit `i` belongs to `NEIGHBOR_OFFSETS[i]`,
/// in the fixed order TL, T, TR, R, BR, B, BL, L.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NeighborMask(pub u8);

/// `(dx, dy)` per mask bit. +y is down, so T is `(0, -1)`.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
];

impl NeighborMask {
    pub const TL: u8 = 1 << 0;
    pub const T: u8 = 1 << 1;
    pub const TR: u8 = 1 << 2;
    pub const R: u8 = 1 << 3;
    pub const BR: u8 = 1 << 4;
    pub const B: u8 = 1 << 5;
    pub const BL: u8 = 1 << 6;
    pub const L: u8 = 1 << 7;

    pub const STRAIGHT: u8 = Self::T | Self::R | Self::B | Self::L;
    pub const DIAGONAL: u8 = Self::TL | Self::TR | Self::BR | Self::BL;

    pub const EMPTY: NeighborMask = NeighborMask(0);

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn has(self, bit: u8) -> bool {
        self.0 & bit != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Build a mask by asking `is_land` about each neighbor offset.
    #[inline]
    pub fn from_fn(mut is_land: impl FnMut(i32, i32) -> bool) -> Self {
        let mut m = 0u8;
        for (i, &(dx, dy)) in NEIGHBOR_OFFSETS.iter().enumerate() {
            if is_land(dx, dy) {
                m |= 1 << i;
            }
        }
        NeighborMask(m)
    }
}
