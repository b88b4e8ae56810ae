use shoreline_mesh_cpu::{AtlasRef, ChunkMesh};
use shoreline_runtime::RenderTarget;

/// Render target that only counts what it is handed.
#[derive(Debug, Default)]
pub struct HeadlessTarget {
    pub frames: u64,
    pub chunks_this_frame: usize,
    pub quads_this_frame: usize,
    pub total_quads: u64,
    pub atlas: Option<AtlasRef>,
}

impl HeadlessTarget {
    pub fn begin_frame(&mut self) {
        self.frames += 1;
        self.chunks_this_frame = 0;
        self.quads_this_frame = 0;
    }
}

impl RenderTarget for HeadlessTarget {
    fn draw_chunk(&mut self, mesh: &ChunkMesh, atlas: AtlasRef) {
        self.chunks_this_frame += 1;
        self.quads_this_frame += mesh.quad_count();
        self.total_quads += mesh.quad_count() as u64;
        self.atlas = Some(atlas);
    }
}
