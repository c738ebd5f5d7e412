//! Saffir-Simpson hurricane wind scale, sustained winds in m/s.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    errors::FormulaResult,
    formulas::utils::{check_finite, check_non_negative, round_half_up},
    lookup::{Band, BandTable},
};

/// One hurricane category
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct HurricaneCategory {
    /// Lowest sustained wind (m/s)
    pub min: f64,
    /// Highest sustained wind (m/s)
    pub max: f64,
    /// Category 1-5
    pub category: u8,
}

impl Band for HurricaneCategory {
    fn lower(&self) -> f64 {
        self.min
    }

    fn upper(&self) -> f64 {
        self.max
    }
}

const HURRICANE_CATEGORIES: &[HurricaneCategory] = &[
    HurricaneCategory { min: 33.0, max: 42.0, category: 1 },
    HurricaneCategory { min: 43.0, max: 49.0, category: 2 },
    HurricaneCategory { min: 50.0, max: 58.0, category: 3 },
    HurricaneCategory { min: 59.0, max: 69.0, category: 4 },
    HurricaneCategory { min: 70.0, max: f64::INFINITY, category: 5 },
];

/// Categories 1-5 in ascending order
pub const SAFFIR_SIMPSON_TABLE: BandTable<HurricaneCategory> =
    BandTable::new("saffir-simpson", HURRICANE_CATEGORIES);

/// Hurricane category for a wind speed (m/s), rounded to whole m/s.
///
/// `None` below hurricane strength; negative speeds are rejected.
pub fn get_saffir_simpson_scale_by_wind_speed(wind_speed: f64) -> FormulaResult<Option<&'static HurricaneCategory>> {
    check_finite(wind_speed)?;
    check_non_negative("Wind speed", wind_speed)?;
    Ok(SAFFIR_SIMPSON_TABLE.find(round_half_up(wind_speed)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FormulaError;

    fn category_of(wind_speed: f64) -> Option<u8> {
        get_saffir_simpson_scale_by_wind_speed(wind_speed).unwrap().map(|c| c.category)
    }

    #[test]
    fn categories() {
        let cases = [
            (30.0, None),
            (32.0, None),
            (33.0, Some(1)),
            (42.0, Some(1)),
            (43.0, Some(2)),
            (49.0, Some(2)),
            (50.0, Some(3)),
            (58.0, Some(3)),
            (59.0, Some(4)),
            (69.0, Some(4)),
            (70.0, Some(5)),
            (150.0, Some(5)),
        ];
        for (speed, expected) in cases {
            assert_eq!(category_of(speed), expected, "{} m/s", speed);
        }
    }

    #[test]
    fn rounds_to_whole_metres_per_second() {
        assert_eq!(category_of(32.5), Some(1));
        assert_eq!(category_of(32.49), None);
        assert_eq!(category_of(42.6), Some(2));
    }

    #[test]
    fn negative_speed_is_rejected() {
        assert!(matches!(
            get_saffir_simpson_scale_by_wind_speed(-10.0),
            Err(FormulaError::Negative { .. })
        ));
    }

    #[test]
    fn unreadable_speed_is_rejected() {
        assert_eq!(get_saffir_simpson_scale_by_wind_speed(f64::NAN), Err(FormulaError::InvalidValue));
        assert_eq!(get_saffir_simpson_scale_by_wind_speed(f64::INFINITY), Err(FormulaError::InvalidValue));
    }
}
