//! Pressure Formulas
//!
//! ## Barometric Formula
//!
//! Inside a layer with a constant lapse rate `L`, pressure follows
//!
//! ```text
//! P = P_ref · (1 - L·Δh / T_ref) ^ (g·M / (R·L))     L ≠ 0
//! P = P_ref · exp(-g·M·Δh / (R·T_ref))               L = 0
//! ```
//!
//! When `L·Δh >= T_ref` the layer would need a negative absolute
//! temperature. [`barometric_formula`] returns `0.0` in that case instead of
//! failing.
//!
//! ## Sea-Level Reduction
//!
//! Station pressure is reduced to mean sea level by running the barometric
//! formula backwards from the station. Four variants exist:
//!
//! ```text
//! Variant          | Lapse rate               | Exponent / form
//! -----------------|--------------------------|--------------------------
//! simple           | 0.0065 K/m               | 5.257 (fixed)
//! advanced         | from constants           | g·M/(R·L)
//! dynamic          | measured gradient        | power law or inversion form
//! historical       | measured from readings   | dynamic + weighted mean T
//! ```
//!
//! A positive measured gradient (temperature rising with height) is an
//! inversion: the air column below the station is colder than a standard
//! atmosphere would be, and the reduction uses the mean column temperature
//! in an exponential form.

use crate::{
    constants::{
        atmosphere::AtmosphericConstants,
        physics::{STANDARD_LAPSE_RATE, STANDARD_PRESSURE_PA, STANDARD_TEMPERATURE_K},
    },
    reading::Reading,
    time::WindowAnchor,
};

use super::{
    temperature::{calculate_dynamic_lapse_rate, calculate_weighted_average_temperature},
    utils::{round_half_up, round_to_two_decimals},
};

/// Fixed exponent used by the simple sea-level reduction
pub const SIMPLE_REDUCTION_EXPONENT: f64 = 5.257;

/// Default look-back for the historical sea-level reduction (hours)
pub const DEFAULT_HISTORY_HOURS: f64 = 24.0;

/// Pressure altitude (m) in the standard atmosphere. Pressure in Pa.
pub fn pressure_altitude(pressure: f64) -> f64 {
    (1.0 - libm::pow(pressure / STANDARD_PRESSURE_PA, 0.190284)) * 145_366.45 * 0.3048
}

/// Density altitude (m) from pressure altitude (m) and temperature (K).
pub fn density_altitude(pressure_altitude: f64, temperature: f64) -> f64 {
    pressure_altitude + 120.0 * (temperature - STANDARD_TEMPERATURE_K)
}

/// Pressure (Pa) at `altitude`, given a reference level. Rounded to 0.01 Pa.
///
/// Returns `0.0` when the altitude change implies a non-positive absolute
/// temperature.
pub fn barometric_formula(
    altitude: f64,
    reference_pressure: f64,
    reference_altitude: f64,
    reference_temperature: f64,
    constants: AtmosphericConstants,
) -> f64 {
    let delta = altitude - reference_altitude;

    if constants.lapse_rate == 0.0 {
        let exponent = -constants.hydrostatic_factor() * delta / reference_temperature;
        return round_to_two_decimals(reference_pressure * libm::exp(exponent));
    }

    let base = 1.0 - (constants.lapse_rate * delta) / reference_temperature;
    if base <= 0.0 {
        log_warn!(
            "barometric formula: {} m above reference leaves no positive temperature, returning 0",
            delta
        );
        return 0.0;
    }

    round_to_two_decimals(reference_pressure * libm::pow(base, constants.barometric_exponent()))
}

fn sea_level_ratio(altitude: f64, temperature: f64, lapse_rate: f64) -> f64 {
    1.0 - (lapse_rate * altitude) / (temperature + lapse_rate * altitude)
}

/// Sea-level pressure (Pa) with fixed standard constants. Rounded to 0.01 Pa.
///
/// `temperature` is the station temperature (K); 288.15 K is customary when
/// unknown.
pub fn adjust_pressure_to_sea_level_simple(pressure: f64, altitude: f64, temperature: f64) -> f64 {
    let ratio = sea_level_ratio(altitude, temperature, STANDARD_LAPSE_RATE);
    round_to_two_decimals(pressure * libm::pow(ratio, -SIMPLE_REDUCTION_EXPONENT))
}

/// Sea-level pressure (Pa) with configurable constants. Rounded to 0.01 Pa.
pub fn adjust_pressure_to_sea_level_advanced(
    pressure: f64,
    altitude: f64,
    temperature: f64,
    constants: AtmosphericConstants,
) -> f64 {
    if constants.lapse_rate == 0.0 {
        let exponent = constants.hydrostatic_factor() * altitude / temperature;
        return round_to_two_decimals(pressure * libm::exp(exponent));
    }

    let ratio = sea_level_ratio(altitude, temperature, constants.lapse_rate);
    round_to_two_decimals(pressure * libm::pow(ratio, -constants.barometric_exponent()))
}

/// Sea-level pressure (Pa) for a measured temperature gradient (K/m).
///
/// Positive gradients are inversions and use the mean column temperature.
/// Zero and negative gradients use the power law with `L = -gradient`.
pub fn adjust_pressure_to_sea_level_by_dynamic_lapse_rate(
    pressure: f64,
    altitude: f64,
    temperature: f64,
    lapse_rate: f64,
) -> f64 {
    let constants = AtmosphericConstants::STANDARD;
    let factor = constants.hydrostatic_factor();

    if lapse_rate > 0.0 {
        let sea_level_temperature = temperature - lapse_rate * altitude;
        let mean_temperature = (temperature + sea_level_temperature) / 2.0;
        return pressure * libm::exp(factor * altitude / mean_temperature);
    }

    let lapse = -lapse_rate;
    if lapse == 0.0 {
        return pressure * libm::exp(factor * altitude / temperature);
    }

    let sea_level_temperature = temperature + lapse * altitude;
    pressure * libm::pow(sea_level_temperature / temperature, factor / lapse)
}

/// Sea-level pressure (Pa) using the gradient and mean temperature measured
/// over the recent readings. Rounded to whole pascals.
///
/// Falls back to standard values when the readings do not cover enough
/// altitude; see [`calculate_dynamic_lapse_rate`].
pub fn adjust_pressure_to_sea_level_by_historical_data(
    pressure: f64,
    altitude: f64,
    readings: &[Reading],
    hours: f64,
    anchor: WindowAnchor,
) -> f64 {
    let lapse_rate = calculate_dynamic_lapse_rate(readings, hours, anchor);
    let temperature = calculate_weighted_average_temperature(readings, hours, anchor);

    log_debug!(
        "historical reduction: gradient {} K/m, mean temperature {} K",
        lapse_rate,
        temperature
    );

    round_half_up(adjust_pressure_to_sea_level_by_dynamic_lapse_rate(pressure, altitude, temperature, lapse_rate))
}
