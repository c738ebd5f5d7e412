//! Temperature Formulas
//!
//! ## Overview
//!
//! Conversions between temperature scales, dew point inversion of the
//! saturation curve, thermodynamic temperatures (potential, virtual,
//! equivalent), perceived temperatures (wind chill, apparent temperature),
//! the Stull wet bulb approximation and lapse-rate helpers over reading
//! series.
//!
//! All inputs and outputs are Kelvin unless a function name says otherwise.
//! Converters are plain linear maps and do not round.
//!
//! ## Dew Point
//!
//! Both dew point functions invert the Magnus-form saturation curve:
//!
//! ```text
//! γ(T, RH) = ln(RH/100) + b·T/(c + T)              (Magnus)
//! γ(T, RH) = ln(RH/100 · exp((b - T/d)·T/(c + T)))  (Arden Buck)
//! Td = c·γ / (b - γ)
//! ```
//!
//! The coefficient set defaults to the one most accurate at the air
//! temperature; see [`crate::constants::valuations`].
//!
//! ## Lapse Rates
//!
//! Measured gradients are signed: `(T2 - T1) / (alt2 - alt1)`, so a normal
//! atmosphere gives a negative value and an inversion a positive one.
//!
//! ```rust
//! use aerology_core::temperature::calculate_lapse_rate;
//!
//! let gradient = calculate_lapse_rate(1000.0, 290.0, 2000.0, 280.0).unwrap();
//! assert!((gradient + 0.01).abs() < 1e-12);
//! ```

use crate::{
    constants::{
        physics::{
            KELVIN, POISSON_EXPONENT, POTENTIAL_TEMPERATURE_REFERENCE_PA, STANDARD_LAPSE_RATE,
            STANDARD_TEMPERATURE_GRADIENT, STANDARD_TEMPERATURE_K, VIRTUAL_TEMPERATURE_COEFFICIENT,
        },
        valuations::{valuation_for_temperature, ValuationSet},
        ThermodynamicConstants,
    },
    errors::{FormulaError, FormulaResult},
    reading::{filter_by_window, sort_by_timestamp, Reading},
    time::WindowAnchor,
};

// ===== UNIT CONVERSIONS =====

/// Kelvin to Celsius
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN
}

/// Celsius to Kelvin
pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + KELVIN
}

/// Celsius to Fahrenheit
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Fahrenheit to Celsius
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Kelvin to Fahrenheit
pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    celsius_to_fahrenheit(kelvin_to_celsius(kelvin))
}

/// Fahrenheit to Kelvin
pub fn fahrenheit_to_kelvin(fahrenheit: f64) -> f64 {
    celsius_to_kelvin(fahrenheit_to_celsius(fahrenheit))
}

/// Metres per second to kilometres per hour
pub fn meters_per_second_to_kilometers_per_hour(mps: f64) -> f64 {
    mps * 3.6
}

// ===== DEW POINT =====

fn resolve_valuation(temperature_c: f64, valuation: Option<ValuationSet>) -> ValuationSet {
    valuation.unwrap_or_else(|| valuation_for_temperature(temperature_c))
}

/// Dew point (K) by the Magnus formula.
///
/// `valuation` overrides the temperature-dependent coefficient set.
pub fn dew_point_magnus_formula(temperature: f64, humidity: f64, valuation: Option<ValuationSet>) -> f64 {
    let t = kelvin_to_celsius(temperature);
    let set = resolve_valuation(t, valuation);

    let gamma = libm::log(humidity / 100.0) + (set.b * t) / (set.c + t);
    let dew_point = (set.c * gamma) / (set.b - gamma);

    celsius_to_kelvin(dew_point)
}

/// Dew point (K) by the Arden Buck equation.
pub fn dew_point_arden_buck_equation(temperature: f64, humidity: f64, valuation: Option<ValuationSet>) -> f64 {
    let t = kelvin_to_celsius(temperature);
    let set = resolve_valuation(t, valuation);

    let gamma = libm::log((humidity / 100.0) * libm::exp((set.b - t / set.d) * (t / (set.c + t))));
    let dew_point = (set.c * gamma) / (set.b - gamma);

    celsius_to_kelvin(dew_point)
}

// ===== THERMODYNAMIC TEMPERATURES =====

/// Potential temperature (K) relative to 1000 hPa. Pressure in Pa.
pub fn potential_temperature(temperature: f64, pressure: f64) -> f64 {
    temperature * libm::pow(POTENTIAL_TEMPERATURE_REFERENCE_PA / pressure, POISSON_EXPONENT)
}

/// Virtual temperature (K). Mixing ratio in g/kg.
pub fn virtual_temperature(temperature: f64, mixing_ratio: f64) -> f64 {
    temperature * (1.0 + VIRTUAL_TEMPERATURE_COEFFICIENT * (mixing_ratio / 1000.0))
}

/// Equivalent temperature (K). Mixing ratio in kg/kg.
pub fn equivalent_temperature(temperature: f64, mixing_ratio: f64, constants: ThermodynamicConstants) -> f64 {
    temperature + (constants.latent_heat * mixing_ratio) / constants.specific_heat
}

// ===== PERCEIVED TEMPERATURES =====

/// North American wind chill index (K). Wind speed in m/s.
pub fn wind_chill_index(temperature: f64, wind_speed: f64) -> f64 {
    let v = meters_per_second_to_kilometers_per_hour(wind_speed);
    let ta = kelvin_to_celsius(temperature);
    let v_exp = libm::pow(v, 0.16);

    let twc = 13.12 + 0.6215 * ta - 11.37 * v_exp + 0.3965 * ta * v_exp;
    celsius_to_kelvin(twc)
}

/// Australian Bureau of Meteorology apparent temperature (K), shade version.
pub fn australian_apparent_temperature(temperature: f64, humidity: f64, wind_speed: f64) -> f64 {
    let ta = kelvin_to_celsius(temperature);

    let e = (humidity / 100.0) * 6.105 * libm::exp((17.27 * ta) / (237.7 + ta));
    let at = ta + 0.33 * e - 0.70 * wind_speed - 4.00;

    celsius_to_kelvin(at)
}

// ===== WET BULB =====

fn stull_wet_bulb_celsius(t: f64, rh: f64) -> f64 {
    t * libm::atan(0.151977 * libm::sqrt(rh + 8.313659))
        + libm::atan(t + rh)
        - libm::atan(rh - 1.676331)
        + 0.00391838 * libm::pow(rh, 1.5) * libm::atan(0.023101 * rh)
        - 4.686035
}

/// Wet bulb temperature (K) by Stull (2011).
///
/// Valid roughly for 5-99 % RH and -20..50 °C.
pub fn wet_bulb_temperature(temperature: f64, humidity: f64) -> f64 {
    celsius_to_kelvin(stull_wet_bulb_celsius(kelvin_to_celsius(temperature), humidity))
}

/// Grid resolution of the dry bulb search (°C)
const DRY_BULB_STEP_C: f64 = 0.01;
/// Number of grid steps covering 0..60 °C
const DRY_BULB_STEPS: u32 = 6000;

/// Dry bulb temperature (K) that produces `wet_bulb` at `humidity`.
///
/// Searches 0-60 °C in 0.01 °C steps and returns the grid point whose Stull
/// wet bulb is closest. NaN when no grid point compares, which is the case
/// for a NaN or infinite `wet_bulb` or a NaN `humidity`.
pub fn estimate_dry_bulb_temperature(wet_bulb: f64, humidity: f64) -> f64 {
    let target = kelvin_to_celsius(wet_bulb);
    let mut best_t = 0.0;
    let mut best_error = f64::INFINITY;

    for step in 0..=DRY_BULB_STEPS {
        let t = step as f64 * DRY_BULB_STEP_C;
        let error = libm::fabs(stull_wet_bulb_celsius(t, humidity) - target);
        if error < best_error {
            best_error = error;
            best_t = t;
        }
    }

    if best_error.is_infinite() {
        return f64::NAN;
    }
    celsius_to_kelvin(best_t)
}

// ===== LAPSE RATES =====

/// Temperature gradient (K/m) between two levels.
///
/// Fails when both altitudes are equal.
pub fn calculate_lapse_rate(altitude1: f64, temperature1: f64, altitude2: f64, temperature2: f64) -> FormulaResult<f64> {
    let rise = altitude2 - altitude1;
    if rise == 0.0 {
        return Err(FormulaError::DomainViolation {
            reason: "Lapse rate needs two different altitudes.",
        });
    }
    Ok((temperature2 - temperature1) / rise)
}

/// Whether temperature rises with height between the two levels.
pub fn is_temperature_inversion(altitude1: f64, temperature1: f64, altitude2: f64, temperature2: f64) -> FormulaResult<bool> {
    calculate_lapse_rate(altitude1, temperature1, altitude2, temperature2).map(|gradient| gradient > 0.0)
}

/// Temperature (K) after moving `altitude` metres with a linear lapse rate.
///
/// The lapse rate is added as given: pass [`STANDARD_LAPSE_RATE`] to walk
/// down to a lower station, or a negative value to walk up.
pub fn adjust_temperature_by_lapse_rate(altitude: f64, temperature: f64, lapse_rate: f64) -> f64 {
    temperature + altitude * lapse_rate
}

/// [`adjust_temperature_by_lapse_rate`] with the standard 0.0065 K/m.
pub fn adjust_temperature_by_standard_lapse_rate(altitude: f64, temperature: f64) -> f64 {
    adjust_temperature_by_lapse_rate(altitude, temperature, STANDARD_LAPSE_RATE)
}

/// Mean temperature gradient (K/m) over the readings inside the window.
///
/// Consecutive readings (by time) at different altitudes form one pair each.
/// With fewer than two usable pairs the standard gradient of -0.0065 K/m is
/// returned.
pub fn calculate_dynamic_lapse_rate(readings: &[Reading], hours: f64, anchor: WindowAnchor) -> f64 {
    let window = filter_by_window(readings, hours, anchor);

    let (sum, pairs) = window
        .windows(2)
        .filter_map(|pair| {
            calculate_lapse_rate(pair[0].altitude, pair[0].temperature, pair[1].altitude, pair[1].temperature).ok()
        })
        .filter(|gradient| gradient.is_finite())
        .fold((0.0, 0usize), |(sum, count), gradient| (sum + gradient, count + 1));

    if pairs < 2 {
        log_warn!(
            "dynamic lapse rate: {} usable pairs in {} readings, using standard gradient",
            pairs,
            window.len()
        );
        return STANDARD_TEMPERATURE_GRADIENT;
    }

    sum / pairs as f64
}

/// Altitude-weighted mean temperature (K) over the readings inside the window.
///
/// Each consecutive pair contributes its mean temperature weighted by the
/// altitude difference it spans. An empty window falls back to the oldest
/// reading overall, or 288.15 K without readings. A window spanning no
/// altitude uses the plain mean.
pub fn calculate_weighted_average_temperature(readings: &[Reading], hours: f64, anchor: WindowAnchor) -> f64 {
    let window = filter_by_window(readings, hours, anchor);

    if window.is_empty() {
        let fallback = sort_by_timestamp(readings)
            .first()
            .map(|reading| reading.temperature)
            .unwrap_or(STANDARD_TEMPERATURE_K);
        log_warn!("weighted average temperature: empty window, using {} K", fallback);
        return fallback;
    }

    let (weighted, total_weight) = window.windows(2).fold((0.0, 0.0), |(weighted, total), pair| {
        let weight = libm::fabs(pair[1].altitude - pair[0].altitude);
        let mean = (pair[0].temperature + pair[1].temperature) / 2.0;
        (weighted + mean * weight, total + weight)
    });

    if total_weight > 0.0 {
        weighted / total_weight
    } else {
        window.iter().map(|reading| reading.temperature).sum::<f64>() / window.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::valuations::DAVID_BOLTON;
    use crate::time::{FixedTime, WindowAnchor};

    const HOUR: u64 = 3_600_000;
    const NOW: u64 = 1_700_000_000_000;

    fn close(actual: f64, expected: f64, tolerance: f64) -> bool {
        (actual - expected).abs() < tolerance
    }

    fn standard_series(spacing_hours: u64) -> Vec<Reading> {
        [(0.0, 288.15), (1000.0, 281.65), (2000.0, 275.15), (3000.0, 268.65), (4000.0, 262.15)]
            .iter()
            .enumerate()
            .map(|(i, &(altitude, temperature))| {
                let age = (4 - i as u64) * spacing_hours * HOUR;
                Reading::new(NOW - age, temperature, 101_325.0, altitude, 50.0)
            })
            .collect()
    }

    #[test]
    fn conversions() {
        assert!(close(kelvin_to_celsius(273.15), 0.0, 1e-12));
        assert!(close(celsius_to_kelvin(20.0), 293.15, 1e-12));
        assert!(close(celsius_to_fahrenheit(100.0), 212.0, 1e-12));
        assert!(close(fahrenheit_to_celsius(32.0), 0.0, 1e-12));
        assert!(close(kelvin_to_fahrenheit(273.15), 32.0, 1e-9));
        assert!(close(fahrenheit_to_kelvin(212.0), 373.15, 1e-9));
        assert!(close(meters_per_second_to_kilometers_per_hour(10.0), 36.0, 1e-12));
    }

    #[test]
    fn magnus_dew_point() {
        let default = dew_point_magnus_formula(300.0, 40.0, None);
        assert!(close(default, 285.72, 0.01));

        let bolton = dew_point_magnus_formula(300.0, 40.0, Some(DAVID_BOLTON));
        assert!(close(bolton, 285.72, 0.01));

        let custom = dew_point_magnus_formula(300.0, 40.0, Some(ValuationSet::new(6.0, 17.0, 250.0, 234.5)));
        assert!(close(custom, 284.41, 0.01));
    }

    #[test]
    fn saturated_air_dew_point_equals_temperature() {
        let dew_point = dew_point_magnus_formula(290.0, 100.0, None);
        assert!(close(dew_point, 290.0, 1e-9));
    }

    #[test]
    fn arden_buck_dew_point() {
        let default = dew_point_arden_buck_equation(300.0, 40.0, None);
        assert!(close(default, 285.5478, 0.001));

        let bolton = dew_point_arden_buck_equation(300.0, 40.0, Some(DAVID_BOLTON));
        assert!(close(bolton, 285.55, 0.01));
    }

    #[test]
    fn thermodynamic_temperatures() {
        assert!(close(potential_temperature(293.15, 90_000.0), 302.117_958_111_694, 1e-6));
        assert!(close(virtual_temperature(293.15, 14.84), 295.803_711_06, 1e-6));
        assert!(close(equivalent_temperature(293.15, 0.01, ThermodynamicConstants::STANDARD), 318.050_398_4, 1e-6));
        assert!(close(equivalent_temperature(293.15, 0.0, ThermodynamicConstants::STANDARD), 293.15, 1e-12));
    }

    #[test]
    fn perceived_temperatures() {
        assert!(close(wind_chill_index(273.15, 12.0), 265.50, 0.01));
        assert!(close(australian_apparent_temperature(283.15, 40.0, 10.0), 273.768_288_5, 0.01));
    }

    #[test]
    fn wet_bulb_and_inverse() {
        let wet_bulb = wet_bulb_temperature(298.15, 60.0);
        assert!(close(wet_bulb, 292.65, 0.01));

        let dry_bulb = estimate_dry_bulb_temperature(wet_bulb, 60.0);
        assert!(close(dry_bulb, 298.15, 0.02));
    }

    #[test]
    fn dry_bulb_search_stays_on_grid() {
        // wet bulb far below the grid clamps to 0 °C
        let dry_bulb = estimate_dry_bulb_temperature(200.0, 50.0);
        assert!(close(dry_bulb, 273.15, 1e-9));

        assert!(estimate_dry_bulb_temperature(f64::NAN, 50.0).is_nan());
        assert!(estimate_dry_bulb_temperature(f64::INFINITY, 50.0).is_nan());
        assert!(estimate_dry_bulb_temperature(290.0, f64::NAN).is_nan());
    }

    #[test]
    fn lapse_rate_and_inversion() {
        assert!(close(calculate_lapse_rate(1000.0, 290.0, 2000.0, 280.0).unwrap(), -0.01, 1e-12));
        assert!(!is_temperature_inversion(1000.0, 290.0, 2000.0, 280.0).unwrap());
        assert!(is_temperature_inversion(2000.0, 290.0, 1000.0, 280.0).unwrap());
        assert!(matches!(
            calculate_lapse_rate(500.0, 290.0, 500.0, 280.0),
            Err(FormulaError::DomainViolation { .. })
        ));
    }

    #[test]
    fn lapse_rate_adjustment() {
        assert!(close(adjust_temperature_by_standard_lapse_rate(1000.0, 20.0), 26.5, 1e-9));
        assert!(close(adjust_temperature_by_lapse_rate(1000.0, 20.0, 0.005), 25.0, 1e-9));
    }

    #[test]
    fn dynamic_lapse_rate_pairwise_mean() {
        let readings: Vec<Reading> = [(0.0, 25.0), (50.0, 22.0), (100.0, 18.0), (200.0, 15.0), (300.0, 12.0)]
            .iter()
            .enumerate()
            .map(|(i, &(altitude, temperature))| Reading::new(NOW - (5 - i as u64) * HOUR, temperature, 101_325.0, altitude, 50.0))
            .collect();

        let gradient = calculate_dynamic_lapse_rate(&readings, 12.0, WindowAnchor::At(NOW));
        assert!(close(gradient, -0.05, 1e-9));
    }

    #[test]
    fn dynamic_lapse_rate_standard_atmosphere() {
        let clock = FixedTime::new(NOW);
        let gradient = calculate_dynamic_lapse_rate(&standard_series(1), 24.0, WindowAnchor::from_source(&clock));
        assert!(close(gradient, -0.0065, 1e-9));
    }

    #[test]
    fn dynamic_lapse_rate_window_cutoff() {
        // readings 4h..0h old, window keeps the newest three
        let gradient = calculate_dynamic_lapse_rate(&standard_series(1), 2.0, WindowAnchor::At(NOW));
        assert!(close(gradient, -0.0065, 1e-9));
    }

    #[test]
    fn dynamic_lapse_rate_falls_back() {
        assert_eq!(calculate_dynamic_lapse_rate(&[], 24.0, WindowAnchor::At(NOW)), STANDARD_TEMPERATURE_GRADIENT);

        // one usable pair is not enough
        let series = standard_series(1);
        assert_eq!(calculate_dynamic_lapse_rate(&series[3..], 24.0, WindowAnchor::At(NOW)), STANDARD_TEMPERATURE_GRADIENT);

        // same altitude everywhere
        let flat: Vec<Reading> = (0..4).map(|i| Reading::new(NOW - i * HOUR, 280.0 + i as f64, 90_000.0, 800.0, 50.0)).collect();
        assert_eq!(calculate_dynamic_lapse_rate(&flat, 24.0, WindowAnchor::At(NOW)), STANDARD_TEMPERATURE_GRADIENT);
    }

    #[test]
    fn dynamic_lapse_rate_anchored_on_last_reading() {
        // archived data far in the past still works when anchored on itself
        let archived: Vec<Reading> = standard_series(1)
            .into_iter()
            .map(|r| Reading { timestamp: r.timestamp - 1000 * HOUR, ..r })
            .collect();
        assert_eq!(calculate_dynamic_lapse_rate(&archived, 6.0, WindowAnchor::At(NOW)), STANDARD_TEMPERATURE_GRADIENT);
        assert!(close(calculate_dynamic_lapse_rate(&archived, 6.0, WindowAnchor::LastReading), -0.0065, 1e-9));
    }

    #[test]
    fn weighted_average_temperature() {
        let average = calculate_weighted_average_temperature(&standard_series(1), 6.0, WindowAnchor::At(NOW));
        assert!(close(average, 275.15, 1e-9));
    }

    #[test]
    fn weighted_average_fallbacks() {
        assert_eq!(calculate_weighted_average_temperature(&[], 6.0, WindowAnchor::At(NOW)), STANDARD_TEMPERATURE_K);

        let old = standard_series(1);
        let far_future = NOW + 100 * HOUR;
        assert_eq!(calculate_weighted_average_temperature(&old, 6.0, WindowAnchor::At(far_future)), 288.15);

        let flat = [
            Reading::new(NOW - HOUR, 280.0, 90_000.0, 800.0, 50.0),
            Reading::new(NOW, 284.0, 90_000.0, 800.0, 50.0),
        ];
        assert!(close(calculate_weighted_average_temperature(&flat, 6.0, WindowAnchor::At(NOW)), 282.0, 1e-9));
    }
}
