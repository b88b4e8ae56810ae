use proptest::prelude::*;
use shoreline_chunk::{Chunk, TileData, TileSample, generate_chunk};
use shoreline_world::{ChunkCoord, Classifier, NoiseConfig, NoiseField, SampleMode};

fn dim() -> impl Strategy<Value = usize> {
    1usize..=16
}

fn small_i32() -> impl Strategy<Value = i32> {
    -100_000i32..=100_000
}

proptest! {
    // idx maps each (x,y) within bounds to unique in-range indices
    #[test]
    fn idx_is_unique_and_in_range(cx in small_i32(), cy in small_i32(), s in dim()) {
        let chunk = Chunk::from_samples(ChunkCoord::new(cx, cy), s, TileData::Heights(Vec::new()));
        let expect = s * s;
        let mut seen = vec![false; expect];
        for y in 0..s { for x in 0..s {
            let i = chunk.idx(x, y);
            prop_assert!(i < expect);
            prop_assert!(!seen[i]);
            seen[i] = true;
        }}
        prop_assert!(seen.into_iter().all(|b| b));
    }

    // contains_world and get_world agree with the chunk's tile range
    #[test]
    fn contains_world_and_get_world_agree(cx in small_i32(), cy in small_i32(), s in dim()) {
        let heights: Vec<f32> = (0..s * s).map(|i| i as f32).collect();
        let chunk = Chunk::from_samples(ChunkCoord::new(cx, cy), s, TileData::Heights(heights));
        let x0 = cx * s as i32;
        let y0 = cy * s as i32;
        let si = s as i32;
        let candidates = [
            (x0, y0),
            (x0 + si - 1, y0 + si - 1),
            (x0 - 1, y0),
            (x0 + si, y0),
            (x0, y0 - 1),
            (x0, y0 + si),
        ];
        for (wx, wy) in candidates {
            let inside = wx >= x0 && wx < x0 + si && wy >= y0 && wy < y0 + si;
            prop_assert_eq!(chunk.contains_world(wx, wy), inside);
            match chunk.get_world(wx, wy) {
                None => prop_assert!(!inside),
                Some(v) => {
                    prop_assert!(inside);
                    let (lx, ly) = ((wx - x0) as usize, (wy - y0) as usize);
                    prop_assert_eq!(v, chunk.get_local(lx, ly));
                }
            }
        }
    }

    // Generating the same chunk twice with the same noise configuration is idempotent
    #[test]
    fn generation_is_deterministic(cx in -500i32..=500, cy in -500i32..=500, seed in any::<i32>(), discrete in any::<bool>()) {
        let noise_cfg = NoiseConfig { seed, ..NoiseConfig::default() };
        let mode = if discrete { SampleMode::Discrete } else { SampleMode::Height };
        let cls = Classifier::new(mode, 0.0);
        let a = generate_chunk(&NoiseField::new(&noise_cfg), ChunkCoord::new(cx, cy), 16, &cls);
        let b = generate_chunk(&NoiseField::new(&noise_cfg), ChunkCoord::new(cx, cy), 16, &cls);
        prop_assert_eq!(a.chunk.tiles(), b.chunk.tiles());
        prop_assert_eq!(a.coverage, b.coverage);
    }

    // A tile's classification from the chunk equals classifying the raw noise sample,
    // which is what the mesher does for tiles across a chunk border
    #[test]
    fn stored_classification_matches_direct_sampling(cx in -200i32..=200, cy in -200i32..=200, sea in -0.3f32..0.3, discrete in any::<bool>()) {
        let field = NoiseField::new(&NoiseConfig::default());
        let mode = if discrete { SampleMode::Discrete } else { SampleMode::Height };
        let cls = Classifier::new(mode, sea);
        let chunk = generate_chunk(&field, ChunkCoord::new(cx, cy), 8, &cls).chunk;
        for y in 0..8 { for x in 0..8 {
            let (wx, wy) = (cx * 8 + x as i32, cy * 8 + y as i32);
            prop_assert_eq!(chunk.is_land_local(x, y, &cls), cls.is_land(field.sample(wx, wy)));
        }}
    }

    // Padding keeps exact length and pads with sea
    #[test]
    fn from_samples_pads_with_sea(s in dim(), n in 0usize..300) {
        let chunk = Chunk::from_samples(ChunkCoord::new(0, 0), s, TileData::Heights(vec![0.9; n]));
        prop_assert_eq!(chunk.tiles().len(), s * s);
        let last = chunk.get_local(s - 1, s - 1);
        if n < s * s {
            prop_assert_eq!(last, TileSample::Height(-1.0));
        } else {
            prop_assert_eq!(last, TileSample::Height(0.9));
        }
    }
}
