use serde::{Deserialize, Serialize};

/// How a chunk stores its tile samples. A given engine configuration uses one of these.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleMode {
    /// Raw noise height; land iff `height > sea_level`.
    #[default]
    Height,
    /// Height bucketed into [`TileKind`] codes at generation time.
    Discrete,
}

/// Discretized terrain type. The discriminant is the on-chunk type code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TileKind {
    Sea = 0,
    Sand = 1,
    Grass = 2,
    Snow = 3,
}

impl TileKind {
    pub const ALL: [TileKind; 4] = [TileKind::Sea, TileKind::Sand, TileKind::Grass, TileKind::Snow];

    #[inline]
    pub fn from_height(h: f32) -> TileKind {
        if h > 0.5 {
            TileKind::Snow
        } else if h > 0.2 {
            TileKind::Grass
        } else if h > 0.0 {
            TileKind::Sand
        } else {
            TileKind::Sea
        }
    }

    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn from_code(code: u8) -> Option<TileKind> {
        match code {
            0 => Some(TileKind::Sea),
            1 => Some(TileKind::Sand),
            2 => Some(TileKind::Grass),
            3 => Some(TileKind::Snow),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_land(self) -> bool {
        !matches!(self, TileKind::Sea)
    }

    /// A height inside this kind's threshold band.
    #[inline]
    pub const fn representative_height(self) -> f32 {
        match self {
            TileKind::Sea => -0.5,
            TileKind::Sand => 0.1,
            TileKind::Grass => 0.35,
            TileKind::Snow => 0.75,
        }
    }
}

/// Land/sea decision shared by chunk lookups and out-of-chunk noise samples,
/// so both paths always agree for the same tile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classifier {
    pub mode: SampleMode,
    pub sea_level: f32,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            mode: SampleMode::Height,
            sea_level: 0.0,
        }
    }
}

impl Classifier {
    #[inline]
    pub const fn new(mode: SampleMode, sea_level: f32) -> Self {
        Self { mode, sea_level }
    }

    /// Classify a raw noise sample. In discrete mode `sea_level` does not apply;
    /// the type-code thresholds decide.
    #[inline]
    pub fn is_land(&self, height: f32) -> bool {
        match self.mode {
            SampleMode::Height => height > self.sea_level,
            SampleMode::Discrete => TileKind::from_height(height).is_land(),
        }
    }

    /// Kind used to texture a land cell. Heights between a negative sea level and 0
    /// still count as land, so they are lifted to sand.
    #[inline]
    pub fn land_kind(&self, height: f32) -> TileKind {
        TileKind::from_height(height).max(TileKind::Sand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_match_type_codes() {
        assert_eq!(TileKind::from_height(0.9), TileKind::Snow);
        assert_eq!(TileKind::from_height(0.5), TileKind::Grass);
        assert_eq!(TileKind::from_height(0.21), TileKind::Grass);
        assert_eq!(TileKind::from_height(0.2), TileKind::Sand);
        assert_eq!(TileKind::from_height(0.01), TileKind::Sand);
        assert_eq!(TileKind::from_height(0.0), TileKind::Sea);
        assert_eq!(TileKind::from_height(-0.7), TileKind::Sea);
    }

    #[test]
    fn codes_round_trip() {
        for k in TileKind::ALL {
            assert_eq!(TileKind::from_code(k.code()), Some(k));
        }
        assert_eq!(TileKind::from_code(4), None);
    }

    #[test]
    fn representative_heights_stay_in_band() {
        for k in TileKind::ALL {
            assert_eq!(TileKind::from_height(k.representative_height()), k);
        }
    }

    #[test]
    fn height_mode_honours_sea_level() {
        let c = Classifier::new(SampleMode::Height, 0.25);
        assert!(!c.is_land(0.25));
        assert!(c.is_land(0.26));
        let low = Classifier::new(SampleMode::Height, -0.3);
        assert!(low.is_land(-0.1));
        assert_eq!(low.land_kind(-0.1), TileKind::Sand);
    }

    #[test]
    fn discrete_mode_ignores_sea_level() {
        let c = Classifier::new(SampleMode::Discrete, 0.8);
        assert!(c.is_land(0.1));
        assert!(!c.is_land(0.0));
    }
}
