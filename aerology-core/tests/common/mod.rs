//! Shared fixtures for integration tests
//!
//! - Standard-atmosphere sounding: readings stacked in altitude
//! - Hiking series: one station climbing through a standard atmosphere
//! - Night series: a cooling, saturating evening at a valley station

#![allow(dead_code)]

use aerology_core::{
    constants::{atmosphere::AtmosphericConstants, physics::STANDARD_LAPSE_RATE},
    pressure::barometric_formula,
    Reading, Timestamp,
};

/// 2024-01-15T00:00Z
pub const START: Timestamp = 1_705_276_800_000;

/// One hour in milliseconds
pub const HOUR: u64 = 3_600_000;

/// Sea-level temperature of the fixtures (K)
pub const SEA_LEVEL_TEMPERATURE: f64 = 288.15;

/// Altitudes (m) visited by the hiking series
pub const HIKE_ALTITUDES: [f64; 7] = [0.0, 250.0, 500.0, 750.0, 1000.0, 1250.0, 1500.0];

/// Standard-atmosphere temperature (K) at an altitude
pub fn standard_temperature(altitude: f64) -> f64 {
    SEA_LEVEL_TEMPERATURE - STANDARD_LAPSE_RATE * altitude
}

/// Standard-atmosphere pressure (Pa) at an altitude
pub fn standard_pressure(altitude: f64) -> f64 {
    barometric_formula(altitude, 101_325.0, 0.0, SEA_LEVEL_TEMPERATURE, AtmosphericConstants::DRY_AIR)
}

/// Readings every 1000 m up to 4000 m, one hour apart, newest at the top.
pub fn standard_sounding() -> Vec<Reading> {
    (0..5u64)
        .map(|i| {
            let altitude = i as f64 * 1000.0;
            Reading::new(START + i * HOUR, standard_temperature(altitude), standard_pressure(altitude), altitude, 50.0)
        })
        .collect()
}

/// A station carried uphill, one reading per hour.
///
/// The recorded altitude is left at zero so callers can rebuild it from
/// pressure.
pub fn hiking_series() -> Vec<Reading> {
    HIKE_ALTITUDES
        .iter()
        .enumerate()
        .map(|(i, &altitude)| {
            Reading::new(START + i as u64 * HOUR, standard_temperature(altitude), standard_pressure(altitude), 0.0, 55.0)
        })
        .collect()
}

/// Valley station from dusk to midnight: cooling, moistening, wind dying.
pub fn night_series() -> Vec<Reading> {
    let profile = [(284.0, 80.0, 3.0), (283.0, 86.0, 2.0), (282.0, 92.0, 1.0), (281.2, 97.0, 0.5)];
    profile
        .iter()
        .enumerate()
        .map(|(i, &(temperature, humidity, wind))| {
            Reading::new(START + i as u64 * 2 * HOUR, temperature, 99_800.0, 120.0, humidity).with_wind_speed(wind)
        })
        .collect()
}

/// Panics unless `actual` is within `tolerance` of `expected`.
#[macro_export]
macro_rules! assert_close {
    ($actual:expr, $expected:expr, $tolerance:expr) => {{
        let (actual, expected, tolerance): (f64, f64, f64) = ($actual, $expected, $tolerance);
        let diff = (actual - expected).abs();
        if !(diff <= tolerance) {
            panic!(
                "Value {} not within tolerance {} of expected {} (diff: {})",
                actual, tolerance, expected, diff
            );
        }
    }};
}
