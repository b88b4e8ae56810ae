use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use shoreline_chunk::generate_chunk;
use shoreline_mesh_cpu::build_chunk_mesh;
use shoreline_world::{ChunkCoord, Classifier, NoiseConfig, NoiseField};
use std::hint::black_box;

fn bench_build_chunk_mesh(c: &mut Criterion) {
    let field = NoiseField::new(&NoiseConfig::default());
    let cls = Classifier::default();
    let coord = ChunkCoord::new(3, -1);
    let chunk = generate_chunk(&field, coord, 64, &cls).chunk;
    let origin = coord.world_origin(64, 16.0);

    c.bench_function("generate_chunk_64", |b| {
        b.iter(|| generate_chunk(&field, black_box(coord), 64, &cls))
    });
    c.bench_function("build_chunk_mesh_64", |b| {
        let mut rng = ChaCha12Rng::seed_from_u64(1);
        b.iter(|| build_chunk_mesh(black_box(&chunk), origin, &field, &cls, 16.0, &mut rng))
    });
}

criterion_group!(benches, bench_build_chunk_mesh);
criterion_main!(benches);
