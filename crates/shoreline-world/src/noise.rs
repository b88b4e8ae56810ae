use fastnoise_lite::{
    CellularDistanceFunction, CellularReturnType, FastNoiseLite, FractalType, NoiseType,
};

use crate::config::{NoiseConfig, NoiseKind};

/// Anything that can produce a height for a global tile coordinate.
///
/// Chunk generation and the mesher's cross-chunk neighbor lookups both go through
/// this seam, so tests can swap in synthetic fields.
pub trait TileSampler {
    fn sample(&self, wx: i32, wy: i32) -> f32;
}

impl<F> TileSampler for F
where
    F: Fn(i32, i32) -> f32,
{
    #[inline]
    fn sample(&self, wx: i32, wy: i32) -> f32 {
        self(wx, wy)
    }
}

/// Deterministic 2D noise over global tile coordinates. Values are nominally in [-1, 1].
///
/// Stateless apart from configuration: any coordinate may be sampled at any time,
/// including tiles of chunks that are not loaded.
pub struct NoiseField {
    config: NoiseConfig,
    noise: FastNoiseLite,
}

impl NoiseField {
    pub fn new(config: &NoiseConfig) -> Self {
        let mut noise = FastNoiseLite::with_seed(config.seed);
        noise.set_frequency(Some(config.frequency));
        match config.kind {
            NoiseKind::SimplexFractal => {
                noise.set_noise_type(Some(NoiseType::OpenSimplex2));
                noise.set_fractal_type(Some(FractalType::FBm));
                noise.set_fractal_octaves(Some(config.fractal.octaves));
                noise.set_fractal_lacunarity(Some(config.fractal.lacunarity));
                noise.set_fractal_gain(Some(config.fractal.gain));
            }
            NoiseKind::Cellular => {
                noise.set_noise_type(Some(NoiseType::Cellular));
                noise.set_cellular_distance_function(Some(CellularDistanceFunction::Euclidean));
                noise.set_cellular_return_type(Some(CellularReturnType::CellValue));
            }
            NoiseKind::OpenSimplex2 => noise.set_noise_type(Some(NoiseType::OpenSimplex2)),
            NoiseKind::Perlin => noise.set_noise_type(Some(NoiseType::Perlin)),
            NoiseKind::Value => noise.set_noise_type(Some(NoiseType::Value)),
        }
        Self {
            config: config.clone(),
            noise,
        }
    }

    #[inline]
    pub fn sample(&self, wx: i32, wy: i32) -> f32 {
        self.noise.get_noise_2d(wx as f32, wy as f32)
    }
}

impl TileSampler for NoiseField {
    #[inline]
    fn sample(&self, wx: i32, wy: i32) -> f32 {
        NoiseField::sample(self, wx, wy)
    }
}

impl Clone for NoiseField {
    fn clone(&self) -> Self {
        NoiseField::new(&self.config)
    }
}

impl std::fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseField")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_config_same_values() {
        let cfg = NoiseConfig::default();
        let a = NoiseField::new(&cfg);
        let b = a.clone();
        for (x, y) in [(0, 0), (17, -3), (-4096, 9000), (123_456, -654_321)] {
            assert_eq!(a.sample(x, y), b.sample(x, y));
        }
    }

    #[test]
    fn different_seed_changes_the_field() {
        let a = NoiseField::new(&NoiseConfig::default());
        let b = NoiseField::new(&NoiseConfig {
            seed: 9001,
            ..NoiseConfig::default()
        });
        let differs = (0..64).any(|i| a.sample(i * 7, i * 13) != b.sample(i * 7, i * 13));
        assert!(differs);
    }

    #[test]
    fn every_kind_stays_in_nominal_range() {
        for kind in [
            NoiseKind::SimplexFractal,
            NoiseKind::Cellular,
            NoiseKind::OpenSimplex2,
            NoiseKind::Perlin,
            NoiseKind::Value,
        ] {
            let field = NoiseField::new(&NoiseConfig {
                kind,
                ..NoiseConfig::default()
            });
            for y in -20..20 {
                for x in -20..20 {
                    let v = field.sample(x * 31, y * 17);
                    assert!(v.is_finite());
                    assert!((-1.5..=1.5).contains(&v), "{kind:?} produced {v}");
                }
            }
        }
    }

    #[test]
    fn closures_are_samplers() {
        let flat = |_x: i32, _y: i32| -0.5f32;
        assert_eq!(TileSampler::sample(&flat, 10, 10), -0.5);
    }
}
