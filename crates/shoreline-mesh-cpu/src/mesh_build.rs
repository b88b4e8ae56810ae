use shoreline_geom::{Rect, Vec2};

use crate::atlas::AtlasRect;
use crate::constants::VERTS_PER_QUAD;

/// One corner of a quad: world position and atlas pixel coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub pos: Vec2,
    pub uv: Vec2,
}

/// Flat vertex list of axis-aligned quads, implicitly grouped in fours
/// (top-left, top-right, bottom-right, bottom-left).
#[derive(Default, Clone, Debug)]
pub struct TileMesh {
    pub verts: Vec<Vertex>,
}

impl TileMesh {
    /// Clears the vertex list but retains capacity for reuse.
    #[inline]
    pub fn clear_keep_capacity(&mut self) {
        self.verts.clear();
    }

    /// Pre-reserve capacity for approximately `n_quads` quads.
    #[inline]
    pub fn reserve_quads(&mut self, n_quads: usize) {
        self.verts.reserve(n_quads * VERTS_PER_QUAD);
    }

    /// Appends an axis-aligned quad covering `origin..origin + size`, textured with `tex`.
    pub fn add_quad(&mut self, origin: Vec2, size: Vec2, tex: AtlasRect) {
        let (x0, y0) = (origin.x, origin.y);
        let (x1, y1) = (origin.x + size.x, origin.y + size.y);
        let (u0, v0) = (tex.x, tex.y);
        let (u1, v1) = (tex.x + tex.w, tex.y + tex.h);
        self.verts.extend_from_slice(&[
            Vertex {
                pos: Vec2::new(x0, y0),
                uv: Vec2::new(u0, v0),
            },
            Vertex {
                pos: Vec2::new(x1, y0),
                uv: Vec2::new(u1, v0),
            },
            Vertex {
                pos: Vec2::new(x1, y1),
                uv: Vec2::new(u1, v1),
            },
            Vertex {
                pos: Vec2::new(x0, y1),
                uv: Vec2::new(u0, v1),
            },
        ]);
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.verts.len() / VERTS_PER_QUAD
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.verts
    }

    pub fn quads(&self) -> impl Iterator<Item = &[Vertex]> {
        self.verts.chunks_exact(VERTS_PER_QUAD)
    }

    /// Bounds of every vertex; `None` for an empty mesh.
    pub fn bounds(&self) -> Option<Rect> {
        Rect::enclosing(self.verts.iter().map(|v| v.pos))
    }
}
