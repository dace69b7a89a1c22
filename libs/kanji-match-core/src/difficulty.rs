//! Difficulty bands.
//!
//! Words carry a continuous 0-10 level; gameplay works in integer bands
//! 1-10. Band 10 covers levels 9 through 10 inclusive, so the hardest
//! band is a catch-all.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer difficulty band, always within 1-10.
///
/// Out-of-range numbers are clamped on construction and on deserialization
/// rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    /// Easiest band, also the default.
    pub const MIN: Difficulty = Difficulty(1);
    /// Hardest band.
    pub const MAX: Difficulty = Difficulty(10);

    /// All bands in ascending order.
    pub const ALL: [Difficulty; 10] = [
        Difficulty(1),
        Difficulty(2),
        Difficulty(3),
        Difficulty(4),
        Difficulty(5),
        Difficulty(6),
        Difficulty(7),
        Difficulty(8),
        Difficulty(9),
        Difficulty(10),
    ];

    /// Build a band from an integer, clamping into 1-10.
    pub fn new(band: u8) -> Self {
        Self(band.clamp(1, 10))
    }

    /// The band number, 1-10.
    pub fn band(self) -> u8 {
        self.0
    }

    /// Map a word level to its band.
    ///
    /// The level is clamped to [0, 10] first; non-finite levels count as
    /// hardest. Any clamped level >= 9 lands in band 10, so band 10 spans
    /// [9, 10] while every other band has width 1.
    pub fn classify(level: f64) -> Self {
        let clamped = if level.is_finite() {
            level.clamp(0.0, 10.0)
        } else {
            10.0
        };

        if clamped >= 9.0 {
            Self(10)
        } else {
            Self(clamped as u8 + 1)
        }
    }

    /// The word-level range covered by this band as
    /// `(min_inclusive, max_exclusive)`.
    ///
    /// Band 10 widens its upper bound past 10.0 so a level of exactly 10
    /// stays inside despite the half-open convention.
    pub fn level_range(self) -> (f64, f64) {
        let min_inclusive = f64::from(self.0 - 1);

        if self.0 >= 10 {
            (min_inclusive, 10.0001)
        } else {
            (min_inclusive, f64::from(self.0))
        }
    }

    /// Whether a word level falls inside this band's range.
    pub fn contains_level(self, level: f64) -> bool {
        let (min_inclusive, max_exclusive) = self.level_range();
        level >= min_inclusive && level < max_exclusive
    }

    /// Normalize an arbitrary number to a valid band: round to nearest,
    /// clamp into 1-10. Non-finite input maps to the default band.
    pub fn normalize(value: f64) -> Self {
        if !value.is_finite() {
            return Self::MIN;
        }

        Self((value.round().clamp(1.0, 10.0)) as u8)
    }

    /// Short display label for the band.
    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "starter",
            2 => "basic",
            3 => "everyday",
            4..=6 => "intermediate",
            7 | 8 => "challenge",
            9 => "hard",
            _ => "expert",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::MIN
    }
}

impl From<u8> for Difficulty {
    fn from(band: u8) -> Self {
        Self::new(band)
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lv.{} ({})", self.0, self.label())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn classify_maps_unit_ranges_to_bands() {
        assert_eq!(Difficulty::classify(0.0), Difficulty::new(1));
        assert_eq!(Difficulty::classify(0.99), Difficulty::new(1));
        assert_eq!(Difficulty::classify(1.0), Difficulty::new(2));
        assert_eq!(Difficulty::classify(8.5), Difficulty::new(9));
    }

    #[test]
    fn classify_collapses_top_two_units_into_band_ten() {
        assert_eq!(Difficulty::classify(9.0), Difficulty::MAX);
        assert_eq!(Difficulty::classify(9.7), Difficulty::MAX);
        assert_eq!(Difficulty::classify(10.0), Difficulty::MAX);
    }

    #[test]
    fn classify_absorbs_out_of_range_and_non_finite_levels() {
        assert_eq!(Difficulty::classify(-3.0), Difficulty::MIN);
        assert_eq!(Difficulty::classify(42.0), Difficulty::MAX);
        assert_eq!(Difficulty::classify(f64::NAN), Difficulty::MAX);
        assert_eq!(Difficulty::classify(f64::INFINITY), Difficulty::MAX);
    }

    #[test]
    fn level_range_inverts_classify_for_every_band() {
        for band in Difficulty::ALL {
            let (min_inclusive, max_exclusive) = band.level_range();
            assert_eq!(Difficulty::classify(min_inclusive), band);
            // Probe just inside the upper bound.
            assert_eq!(Difficulty::classify(max_exclusive - 0.0001), band);
        }
    }

    #[test]
    fn band_ten_range_includes_level_ten() {
        assert!(Difficulty::MAX.contains_level(10.0));
        assert!(!Difficulty::new(9).contains_level(9.0));
        assert!(Difficulty::MAX.contains_level(9.0));
    }

    #[test]
    fn normalize_rounds_and_clamps() {
        assert_eq!(Difficulty::normalize(3.4), Difficulty::new(3));
        assert_eq!(Difficulty::normalize(3.6), Difficulty::new(4));
        assert_eq!(Difficulty::normalize(-5.0), Difficulty::MIN);
        assert_eq!(Difficulty::normalize(99.0), Difficulty::MAX);
        assert_eq!(Difficulty::normalize(f64::NAN), Difficulty::MIN);
    }

    #[test]
    fn serde_clamps_out_of_range_bands() {
        let low: Difficulty = serde_json::from_str("0").unwrap();
        let high: Difficulty = serde_json::from_str("200").unwrap();
        assert_eq!(low, Difficulty::MIN);
        assert_eq!(high, Difficulty::MAX);
        assert_eq!(serde_json::to_string(&Difficulty::new(7)).unwrap(), "7");
    }
}
