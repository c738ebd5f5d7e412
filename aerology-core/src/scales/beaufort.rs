//! Beaufort Wind Force Scale
//!
//! ## Bands
//!
//! Bands are published at 0.1 m/s precision, so the wind speed is rounded to
//! one decimal before lookup. The official scale ends at force 12; forces
//! 13-17 are the extended typhoon scale.
//!
//! ```text
//! Force | m/s          | Category
//! ------|--------------|-------------------
//!   0   |  0.0 -  0.2  | Calm
//!   6   | 10.8 - 13.8  | Strong Breeze
//!  12   | 32.7 - 37.1  | Hurricane Force
//!  17   | 56.0 -   ∞   | Supreme Cyclone
//! ```
//!
//! ## Pressure Lookups
//!
//! A dynamic pressure is turned into a wind speed with Bernoulli's
//! relation `v = √(2·ΔP/ρ)` before the band lookup.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    errors::{FormulaError, FormulaResult},
    formulas::{
        utils::{check_finite, check_non_negative, round_to_decimals},
        wind::wind_speed_from_pressure_difference,
    },
    lookup::{Band, BandTable},
};

/// Name reported by the pressure lookups when no band matches
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// One Beaufort force
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BeaufortForce {
    /// Lowest wind speed (m/s)
    pub min: f64,
    /// Highest wind speed (m/s)
    pub max: f64,
    /// Descriptive name
    pub category: &'static str,
    /// Force number, 0-17
    pub force: u8,
}

impl Band for BeaufortForce {
    fn lower(&self) -> f64 {
        self.min
    }

    fn upper(&self) -> f64 {
        self.max
    }
}

const fn force(min: f64, max: f64, category: &'static str, force: u8) -> BeaufortForce {
    BeaufortForce { min, max, category, force }
}

const BEAUFORT_FORCES: &[BeaufortForce] = &[
    force(0.0, 0.2, "Calm", 0),
    force(0.3, 1.5, "Light Air", 1),
    force(1.6, 3.3, "Light Breeze", 2),
    force(3.4, 5.4, "Gentle Breeze", 3),
    force(5.5, 7.9, "Moderate Breeze", 4),
    force(8.0, 10.7, "Fresh Breeze", 5),
    force(10.8, 13.8, "Strong Breeze", 6),
    force(13.9, 17.1, "Near Gale", 7),
    force(17.2, 20.7, "Gale", 8),
    force(20.8, 24.4, "Strong Gale", 9),
    force(24.5, 28.4, "Storm", 10),
    force(28.5, 32.6, "Violent Storm", 11),
    force(32.7, 37.1, "Hurricane Force", 12),
    force(37.2, 41.4, "Strong Cyclonic Storm", 13),
    force(41.5, 46.1, "Severe Cyclonic Storm", 14),
    force(46.2, 50.9, "Violent Cyclone", 15),
    force(51.0, 55.9, "Extreme Cyclone", 16),
    force(56.0, f64::INFINITY, "Supreme Cyclone", 17),
];

/// Beaufort forces 0-17 in ascending order
pub const BEAUFORT_TABLE: BandTable<BeaufortForce> = BandTable::new("beaufort", BEAUFORT_FORCES);

/// Beaufort force for a wind speed (m/s).
///
/// Negative speeds are rejected. NaN has no force.
pub fn get_beaufort_scale_by_wind_speed(wind_speed: f64) -> FormulaResult<Option<&'static BeaufortForce>> {
    check_finite(wind_speed)?;
    check_non_negative("Wind speed", wind_speed)?;
    Ok(BEAUFORT_TABLE.find(round_to_decimals(wind_speed, 1)))
}

fn category_or_unknown(wind_speed: f64) -> &'static str {
    match get_beaufort_scale_by_wind_speed(wind_speed) {
        Ok(Some(band)) => band.category,
        _ => UNKNOWN_CATEGORY,
    }
}

/// Beaufort category for a dynamic pressure (Pa) in air of density ρ.
///
/// Negative pressure differences report [`UNKNOWN_CATEGORY`].
pub fn get_beaufort_scale_by_pressure(pressure_difference: f64, air_density: f64) -> &'static str {
    category_or_unknown(wind_speed_from_pressure_difference(pressure_difference, air_density))
}

/// Beaufort category for a static-to-total pressure ratio.
///
/// The density cancels out of the Bernoulli relation here; ratios above
/// one report [`UNKNOWN_CATEGORY`].
pub fn get_beaufort_scale_by_pressure_ratio(pressure_ratio: f64, air_density: f64) -> FormulaResult<&'static str> {
    if pressure_ratio <= 0.0 {
        return Err(FormulaError::DomainViolation {
            reason: "Pressure ratio must be greater than 0.",
        });
    }

    let wind_speed = libm::sqrt((2.0 * air_density * (1.0 - pressure_ratio)) / air_density);
    Ok(category_or_unknown(wind_speed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulas::wind::DEFAULT_AIR_DENSITY;

    fn force_of(wind_speed: f64) -> Option<u8> {
        get_beaufort_scale_by_wind_speed(wind_speed).unwrap().map(|band| band.force)
    }

    #[test]
    fn lower_band_edges() {
        let speeds = [
            0.0, 0.3, 1.6, 3.4, 5.5, 8.0, 10.8, 13.9, 17.2, 20.8, 24.5, 28.5, 32.7, 37.2, 41.5, 46.2, 51.0, 56.0,
        ];
        for (expected, speed) in speeds.into_iter().enumerate() {
            assert_eq!(force_of(speed), Some(expected as u8), "{} m/s", speed);
        }
    }

    #[test]
    fn rounds_to_one_decimal() {
        assert_eq!(force_of(5.44), Some(3));
        assert_eq!(force_of(5.45), Some(4));
        assert_eq!(force_of(0.25), Some(1));
        assert_eq!(force_of(500.0), Some(17));
    }

    #[test]
    fn negative_speed_is_rejected() {
        assert_eq!(
            get_beaufort_scale_by_wind_speed(-1.0),
            Err(FormulaError::Negative { quantity: "Wind speed", value: -1.0 })
        );
    }

    #[test]
    fn unreadable_speed_is_rejected() {
        assert_eq!(get_beaufort_scale_by_wind_speed(f64::NAN), Err(FormulaError::InvalidValue));
        assert_eq!(get_beaufort_scale_by_wind_speed(f64::INFINITY), Err(FormulaError::InvalidValue));
        assert_eq!(get_beaufort_scale_by_pressure(f64::NAN, DEFAULT_AIR_DENSITY), UNKNOWN_CATEGORY);
    }

    #[test]
    fn pressure_lookup() {
        // 10 m/s at sea-level density
        assert_eq!(get_beaufort_scale_by_pressure(61.25, DEFAULT_AIR_DENSITY), "Fresh Breeze");
        assert_eq!(get_beaufort_scale_by_pressure(0.0, DEFAULT_AIR_DENSITY), "Calm");
        assert_eq!(get_beaufort_scale_by_pressure(-5.0, DEFAULT_AIR_DENSITY), UNKNOWN_CATEGORY);
    }

    #[test]
    fn pressure_ratio_lookup() {
        assert_eq!(get_beaufort_scale_by_pressure_ratio(1.0, DEFAULT_AIR_DENSITY), Ok("Calm"));
        // √(2·0.5) = 1 m/s
        assert_eq!(get_beaufort_scale_by_pressure_ratio(0.5, DEFAULT_AIR_DENSITY), Ok("Light Air"));
        assert_eq!(get_beaufort_scale_by_pressure_ratio(1.5, DEFAULT_AIR_DENSITY), Ok(UNKNOWN_CATEGORY));
        assert!(matches!(
            get_beaufort_scale_by_pressure_ratio(0.0, DEFAULT_AIR_DENSITY),
            Err(FormulaError::DomainViolation { .. })
        ));
    }
}
