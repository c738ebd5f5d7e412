//! Altitude Formulas
//!
//! ## Hypsometric Equation
//!
//! The thickness of the layer between two pressure levels is
//!
//! ```text
//! Δh = (R_d · T_eff / g) · ln(P_ref / P_obs)
//! ```
//!
//! Moist air is handled through the virtual temperature, which folds the
//! lower density of water vapor into `T_eff`. How `T_eff` is found depends on
//! which humidity observations are available; see [`HumidityMode`].

use crate::{
    constants::physics::{DRY_AIR_GAS_CONSTANT, STANDARD_GRAVITY, STANDARD_LAPSE_RATE, STANDARD_TEMPERATURE_K, KELVIN},
    errors::{FormulaError, FormulaResult},
    reading::{sort_by_timestamp, Reading},
};

use super::{
    humidity::{actual_vapor_pressure, mixing_ratio, saturation_vapor_pressure},
    temperature::virtual_temperature,
    utils::round_to_two_decimals,
};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Default layer temperature for [`altitude_from_pressure_difference`] (K)
pub const DEFAULT_LAYER_TEMPERATURE: f64 = STANDARD_TEMPERATURE_K;

/// Altitude (m) where the temperature reaches 0 °C.
///
/// `None` when the surface is already at or below freezing.
pub fn freezing_level_altitude(surface_temperature: f64, surface_altitude: f64, lapse_rate: f64) -> Option<f64> {
    if surface_temperature <= KELVIN {
        return None;
    }
    Some(surface_altitude + (surface_temperature - KELVIN) / lapse_rate)
}

/// [`freezing_level_altitude`] from sea level with the standard lapse rate.
pub fn standard_freezing_level_altitude(surface_temperature: f64) -> Option<f64> {
    freezing_level_altitude(surface_temperature, 0.0, STANDARD_LAPSE_RATE)
}

/// Which humidity correction the hypsometric equation applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HumidityMode {
    /// Dry air: the layer temperature is used as is
    Dry,
    /// One relative humidity (%) for the whole layer
    Single {
        /// Relative humidity in percent
        humidity: f64,
    },
    /// Relative humidity (%) measured at both levels
    Paired {
        /// Humidity at the reference level
        reference: f64,
        /// Humidity at the observed level
        observed: f64,
    },
}

impl HumidityMode {
    /// Picks the mode from whichever humidity observations are present.
    ///
    /// A complete pair wins over a single layer humidity. A lone level
    /// humidity without its partner is ignored.
    pub fn resolve(relative: Option<f64>, reference: Option<f64>, observed: Option<f64>) -> Self {
        match (relative, reference, observed) {
            (_, Some(reference), Some(observed)) => Self::Paired { reference, observed },
            (Some(humidity), _, _) => Self::Single { humidity },
            (None, Some(_), None) | (None, None, Some(_)) => {
                log_debug!("humidity mode: lone level humidity without its pair, treating layer as dry");
                Self::Dry
            }
            (None, None, None) => Self::Dry,
        }
    }

    /// Effective layer temperature (K) between two pressure levels (Pa).
    pub fn effective_temperature(self, temperature: f64, reference_pressure: f64, observed_pressure: f64) -> FormulaResult<f64> {
        match self {
            Self::Dry => Ok(temperature),
            Self::Single { humidity } => {
                let mean_pressure = libm::sqrt(reference_pressure * observed_pressure);
                moist_virtual_temperature(temperature, humidity, mean_pressure)
            }
            Self::Paired { reference, observed } => {
                let lower = moist_virtual_temperature(temperature, reference, reference_pressure)?;
                let upper = moist_virtual_temperature(temperature, observed, observed_pressure)?;
                Ok((lower + upper) / 2.0)
            }
        }
    }
}

impl Default for HumidityMode {
    fn default() -> Self {
        Self::Dry
    }
}

fn moist_virtual_temperature(temperature: f64, humidity: f64, pressure: f64) -> FormulaResult<f64> {
    let vapor = actual_vapor_pressure(saturation_vapor_pressure(temperature), humidity);
    Ok(virtual_temperature(temperature, mixing_ratio(vapor, pressure)?))
}

/// Altitude (m) of the observed pressure level by the hypsometric equation.
///
/// Equal pressures return `reference_altitude` unchanged. Non-positive
/// pressures are rejected.
pub fn altitude_from_pressure_difference(
    reference_pressure: f64,
    observed_pressure: f64,
    reference_altitude: f64,
    temperature: f64,
    humidity: HumidityMode,
) -> FormulaResult<f64> {
    if reference_pressure <= 0.0 || observed_pressure <= 0.0 {
        return Err(FormulaError::DomainViolation {
            reason: "Pressures must be greater than zero.",
        });
    }

    if reference_pressure == observed_pressure {
        return Ok(reference_altitude);
    }

    let effective = humidity.effective_temperature(temperature, reference_pressure, observed_pressure)?;
    let scale_height = DRY_AIR_GAS_CONSTANT * effective / STANDARD_GRAVITY;

    Ok(reference_altitude + scale_height * libm::log(reference_pressure / observed_pressure))
}

/// Rebuilds an altitude track from a pressure series.
///
/// Readings are ordered by timestamp. The first keeps `start_altitude`, and
/// every later reading is placed relative to its predecessor using the mean
/// temperature of the pair. A reading without a usable temperature counts as
/// `default_temperature`. Altitudes are rounded to 0.01 m.
pub fn calculate_altitudes_from_pressure_series(
    readings: &[Reading],
    start_altitude: f64,
    default_temperature: f64,
) -> FormulaResult<Vec<Reading>> {
    let sorted = sort_by_timestamp(readings);
    let temperature_of = |reading: &Reading| reading.usable_temperature().unwrap_or(default_temperature);

    let mut track: Vec<Reading> = Vec::with_capacity(sorted.len());
    for reading in sorted {
        let altitude = match track.last() {
            None => start_altitude,
            Some(previous) => round_to_two_decimals(altitude_from_pressure_difference(
                previous.pressure,
                reading.pressure,
                previous.altitude,
                (temperature_of(previous) + temperature_of(&reading)) / 2.0,
                HumidityMode::Dry,
            )?),
        };
        track.push(reading.with_altitude(altitude));
    }

    Ok(track)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: f64, expected: f64, tolerance: f64) -> bool {
        (actual - expected).abs() < tolerance
    }

    fn dry(reference: f64, observed: f64, altitude: f64) -> f64 {
        altitude_from_pressure_difference(reference, observed, altitude, DEFAULT_LAYER_TEMPERATURE, HumidityMode::Dry).unwrap()
    }

    #[test]
    fn freezing_level() {
        assert!(close(standard_freezing_level_altitude(283.15).unwrap(), 1538.46, 0.01));
        assert!(close(freezing_level_altitude(283.15, 500.0, 0.0065).unwrap(), 2038.46, 0.01));
        assert!(close(freezing_level_altitude(283.15, 0.0, 0.01).unwrap(), 1000.0, 1e-9));
        assert_eq!(standard_freezing_level_altitude(273.15), None);
        assert_eq!(standard_freezing_level_altitude(273.14), None);
    }

    #[test]
    fn hypsometric_dry() {
        assert!(close(dry(101_325.0, 89_874.0, 0.0), 1011.494, 0.01));
        assert!(close(dry(101_325.0, 95_461.0, 0.0), 502.8, 0.05));
        assert!(close(dry(99_000.0, 90_000.0, 200.0), 1003.9, 0.05));
    }

    #[test]
    fn lower_observed_pressure_means_higher_altitude() {
        assert!(dry(101_325.0, 90_000.0, 0.0) > dry(101_325.0, 95_000.0, 0.0));
        assert!(dry(90_000.0, 101_325.0, 0.0) < 0.0);
    }

    #[test]
    fn equal_pressures_keep_reference_altitude() {
        for mode in [
            HumidityMode::Dry,
            HumidityMode::Single { humidity: 80.0 },
            HumidityMode::Paired { reference: 90.0, observed: 40.0 },
        ] {
            assert_eq!(altitude_from_pressure_difference(95_000.0, 95_000.0, 321.0, 300.0, mode), Ok(321.0));
        }
    }

    #[test]
    fn non_positive_pressure_is_rejected() {
        assert!(altitude_from_pressure_difference(0.0, 90_000.0, 0.0, 288.15, HumidityMode::Dry).is_err());
        assert!(altitude_from_pressure_difference(101_325.0, -1.0, 0.0, 288.15, HumidityMode::Dry).is_err());
    }

    #[test]
    fn humidity_mode_priority() {
        assert_eq!(
            HumidityMode::resolve(Some(50.0), Some(60.0), Some(70.0)),
            HumidityMode::Paired { reference: 60.0, observed: 70.0 }
        );
        assert_eq!(HumidityMode::resolve(Some(50.0), Some(60.0), None), HumidityMode::Single { humidity: 50.0 });
        assert_eq!(HumidityMode::resolve(Some(50.0), None, None), HumidityMode::Single { humidity: 50.0 });
        assert_eq!(HumidityMode::resolve(None, Some(60.0), None), HumidityMode::Dry);
        assert_eq!(HumidityMode::resolve(None, None, Some(70.0)), HumidityMode::Dry);
        assert_eq!(HumidityMode::resolve(None, None, None), HumidityMode::Dry);
    }

    #[test]
    fn moist_air_layers_are_thicker() {
        let dry_height = dry(101_325.0, 90_000.0, 0.0);
        let single = altitude_from_pressure_difference(
            101_325.0,
            90_000.0,
            0.0,
            DEFAULT_LAYER_TEMPERATURE,
            HumidityMode::Single { humidity: 80.0 },
        )
        .unwrap();
        let paired = altitude_from_pressure_difference(
            101_325.0,
            90_000.0,
            0.0,
            DEFAULT_LAYER_TEMPERATURE,
            HumidityMode::Paired { reference: 80.0, observed: 80.0 },
        )
        .unwrap();

        assert!(single > dry_height);
        assert!(paired > dry_height);
        // same humidity at both levels lands close to the single-humidity estimate
        assert!(close(single, paired, 0.5));
    }

    #[test]
    fn zero_humidity_matches_dry_air() {
        let dry_height = dry(101_325.0, 90_000.0, 0.0);
        let single = altitude_from_pressure_difference(
            101_325.0,
            90_000.0,
            0.0,
            DEFAULT_LAYER_TEMPERATURE,
            HumidityMode::Single { humidity: 0.0 },
        )
        .unwrap();
        assert!(close(single, dry_height, 1e-9));
    }

    #[test]
    fn pressure_series_to_altitudes() {
        let readings = [
            Reading::new(3_000, 288.15, 89_874.0, 0.0, 50.0),
            Reading::new(1_000, 288.15, 101_325.0, 0.0, 50.0),
            Reading::new(2_000, 288.15, 95_461.0, 0.0, 50.0),
        ];

        let track = calculate_altitudes_from_pressure_series(&readings, 0.0, DEFAULT_LAYER_TEMPERATURE).unwrap();
        assert_eq!(track.len(), 3);
        assert_eq!(track[0].timestamp, 1_000);
        assert_eq!(track[0].altitude, 0.0);
        assert!(close(track[1].altitude, 502.8, 0.05));
        assert!(close(track[2].altitude, 1011.49, 0.05));
    }

    #[test]
    fn pressure_series_falls_back_to_default_temperature() {
        let readings = [
            Reading::new(1_000, f64::NAN, 101_325.0, 0.0, 50.0),
            Reading::new(2_000, 0.0, 89_874.0, 0.0, 50.0),
        ];
        let track = calculate_altitudes_from_pressure_series(&readings, 100.0, 288.15).unwrap();
        assert!(close(track[1].altitude, 1111.49, 0.05));

        let mixed = [
            Reading::new(1_000, f64::NAN, 101_325.0, 0.0, 50.0),
            Reading::new(2_000, 298.15, 89_874.0, 0.0, 50.0),
        ];
        let track = calculate_altitudes_from_pressure_series(&mixed, 0.0, 288.15).unwrap();
        assert!(close(track[1].altitude, 1029.05, 0.01));
    }

    #[test]
    fn pressure_series_uses_pair_temperature() {
        // 293.15 K and 283.15 K average to the standard 288.15 K
        let readings = [
            Reading::new(1_000, 293.15, 101_325.0, 0.0, 50.0),
            Reading::new(2_000, 283.15, 89_874.0, 0.0, 50.0),
        ];
        let track = calculate_altitudes_from_pressure_series(&readings, 0.0, DEFAULT_LAYER_TEMPERATURE).unwrap();
        assert!(close(track[1].altitude, 1011.49, 0.01));
    }

    #[test]
    fn empty_series() {
        assert_eq!(calculate_altitudes_from_pressure_series(&[], 0.0, 288.15), Ok(Vec::new()));
    }
}
