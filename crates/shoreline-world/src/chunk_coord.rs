use serde::{Deserialize, Serialize};
use shoreline_geom::Vec2;

/// Integer grid index of a chunk. The world is unbounded on both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkCoord {
    pub cx: i32,
    pub cy: i32,
}

/// Offsets of the 8-connected neighborhood, row by row from the top-left.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

impl ChunkCoord {
    #[inline]
    pub const fn new(cx: i32, cy: i32) -> Self {
        Self { cx, cy }
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            cx: self.cx + dx,
            cy: self.cy + dy,
        }
    }

    /// Chunk containing world position `pos`, for chunks `chunk_world_size` units wide.
    #[inline]
    pub fn from_world(pos: Vec2, chunk_world_size: f32) -> Self {
        Self {
            cx: (pos.x / chunk_world_size).floor() as i32,
            cy: (pos.y / chunk_world_size).floor() as i32,
        }
    }

    /// World-space top-left corner of this chunk.
    #[inline]
    pub fn world_origin(self, chunk_size: usize, tile_size: f32) -> Vec2 {
        let span = chunk_size as f32 * tile_size;
        Vec2::new(self.cx as f32 * span, self.cy as f32 * span)
    }

    /// Global tile coordinate of this chunk's local cell `(0, 0)`.
    #[inline]
    pub fn base_tile(self, chunk_size: usize) -> (i32, i32) {
        (self.cx * chunk_size as i32, self.cy * chunk_size as i32)
    }

    pub fn neighbors8(self) -> [ChunkCoord; 8] {
        NEIGHBOR_OFFSETS.map(|(dx, dy)| self.offset(dx, dy))
    }

    #[inline]
    pub fn is_adjacent8(self, other: ChunkCoord) -> bool {
        self != other && (self.cx - other.cx).abs() <= 1 && (self.cy - other.cy).abs() <= 1
    }
}

impl From<(i32, i32)> for ChunkCoord {
    fn from(value: (i32, i32)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl From<ChunkCoord> for (i32, i32) {
    fn from(value: ChunkCoord) -> Self {
        (value.cx, value.cy)
    }
}

impl std::fmt::Display for ChunkCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.cx, self.cy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_world_floors_negative_positions() {
        assert_eq!(ChunkCoord::from_world(Vec2::new(0.0, 0.0), 1024.0), ChunkCoord::new(0, 0));
        assert_eq!(ChunkCoord::from_world(Vec2::new(1023.9, 5.0), 1024.0), ChunkCoord::new(0, 0));
        assert_eq!(ChunkCoord::from_world(Vec2::new(1024.0, 5.0), 1024.0), ChunkCoord::new(1, 0));
        assert_eq!(ChunkCoord::from_world(Vec2::new(-0.5, -1024.5), 1024.0), ChunkCoord::new(-1, -2));
    }

    #[test]
    fn neighbors_are_distinct_and_adjacent() {
        let c = ChunkCoord::new(3, -7);
        let n = c.neighbors8();
        for (i, a) in n.iter().enumerate() {
            assert!(c.is_adjacent8(*a));
            for b in &n[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(!n.contains(&c));
    }

    #[test]
    fn origin_scales_by_chunk_span() {
        let o = ChunkCoord::new(-1, 2).world_origin(64, 16.0);
        assert_eq!(o, Vec2::new(-1024.0, 2048.0));
        assert_eq!(ChunkCoord::new(-1, 2).base_tile(64), (-64, 128));
    }
}
