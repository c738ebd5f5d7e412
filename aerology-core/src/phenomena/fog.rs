//! Fog Visibility and Likelihood
//!
//! ## Visibility
//!
//! Koschmieder's law relates meteorological visibility to the extinction
//! coefficient β of the air: `V = 3.912 / β`.
//!
//! ## Likelihood Model
//!
//! Radiation fog forms in near-saturated, calm air that is cooling. The
//! heuristic combines three factors in [0, 1]:
//!
//! ```text
//! Factor      | Formula                       | Meaning
//! ------------|-------------------------------|----------------------------
//! saturation  | clamp((RH - 85) / 15)         | 0 below 85 %, 1 at 100 %
//! calm        | clamp(1 - v / 5)              | 0 from 5 m/s; 0.5 unknown
//! cooling     | clamp(1 - ΔT / 2)             | 0 when warming by 2 K
//!
//! p = saturation · (0.4 + 0.6 · (0.6·calm + 0.4·cooling))
//! ```
//!
//! Without saturation there is no fog whatever the wind does.
//!
//! ## Trend
//!
//! [`fog_trend_probability`] fits straight lines through temperature and
//! humidity over time, projects them forward and scores every step. With a
//! position the score is damped once the sun climbs above the horizon.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use crate::{
    constants::physics::KOSCHMIEDER_CONSTANT,
    formulas::{
        temperature::dew_point_magnus_formula,
        utils::{clamp_unit, linear_regression},
    },
    reading::{sort_by_timestamp, Reading},
    time::{hours_between, hours_to_ms, Timestamp},
};

use super::solar::{solar_elevation, GeoPosition};

/// Calm factor used when no wind speed is known
pub const UNKNOWN_WIND_CALM_FACTOR: f64 = 0.5;

/// Wind speed (m/s) at which fog is considered dispersed
const DISPERSING_WIND_SPEED: f64 = 5.0;

/// Solar elevation (°) at which daylight fully suppresses fog formation
const FULL_DAYLIGHT_ELEVATION: f64 = 10.0;

/// Visibility (m) for an extinction coefficient (1/m).
///
/// Zero extinction gives infinite visibility.
pub fn fog_visibility(extinction_coefficient: f64) -> f64 {
    KOSCHMIEDER_CONSTANT / extinction_coefficient
}

/// Temperature (K) at which the air would fog: its dew point.
pub fn fog_point_temperature(temperature: f64, humidity: f64) -> f64 {
    dew_point_magnus_formula(temperature, humidity, None)
}

fn fog_likelihood(humidity: f64, wind_speed: Option<f64>, warming: f64) -> f64 {
    let saturation = clamp_unit((humidity - 85.0) / 15.0);
    let calm = wind_speed.map_or(UNKNOWN_WIND_CALM_FACTOR, |v| clamp_unit(1.0 - v / DISPERSING_WIND_SPEED));
    let cooling = clamp_unit(1.0 - warming / 2.0);

    saturation * (0.4 + 0.6 * (0.6 * calm + 0.4 * cooling))
}

/// Fog likelihood in [0, 1] from the two newest readings.
///
/// Fewer than two readings give 0.
pub fn fog_probability(readings: &[Reading]) -> f64 {
    let sorted = sort_by_timestamp(readings);
    match sorted.as_slice() {
        [.., previous, latest] => fog_likelihood(
            latest.relative_humidity,
            latest.wind_speed,
            latest.temperature - previous.temperature,
        ),
        _ => 0.0,
    }
}

fn daylight_factor(timestamp: Timestamp, position: GeoPosition) -> f64 {
    solar_elevation(timestamp, position).map_or(1.0, |elevation| {
        1.0 - clamp_unit(elevation / FULL_DAYLIGHT_ELEVATION)
    })
}

/// Fog likelihood for each of the next `hours_ahead` steps.
///
/// Step `i` (from 1) lies `i · step_hours` after the newest reading. Wind is
/// held at the last reported value. Fewer than two readings give zeros.
pub fn fog_trend_probability(
    readings: &[Reading],
    hours_ahead: usize,
    step_hours: f64,
    position: Option<GeoPosition>,
) -> Vec<f64> {
    let sorted = sort_by_timestamp(readings);
    let (first, latest) = match sorted.as_slice() {
        [first, .., latest] => (*first, *latest),
        _ => return vec![0.0; hours_ahead],
    };

    let elapsed = |reading: &Reading| hours_between(first.timestamp, reading.timestamp);
    let temperature_points = sorted.iter().map(|r| (elapsed(r), r.temperature));
    let humidity_points = sorted.iter().map(|r| (elapsed(r), r.relative_humidity));

    let (Some(temperature_trend), Some(humidity_trend)) =
        (linear_regression(temperature_points), linear_regression(humidity_points))
    else {
        return vec![0.0; hours_ahead];
    };

    let wind_speed = sorted.iter().rev().find_map(|r| r.wind_speed);
    let project = |(slope, intercept): (f64, f64), hours: f64| slope * hours + intercept;
    let origin = elapsed(&latest);

    let mut previous_temperature = project(temperature_trend, origin);
    (1..=hours_ahead)
        .map(|step| {
            let offset = step as f64 * step_hours;
            let temperature = project(temperature_trend, origin + offset);
            let humidity = project(humidity_trend, origin + offset).clamp(0.0, 100.0);

            let mut probability = fog_likelihood(humidity, wind_speed, temperature - previous_temperature);
            previous_temperature = temperature;

            if let Some(position) = position {
                probability *= daylight_factor(latest.timestamp + hours_to_ms(offset), position);
            }
            probability
        })
        .collect()
}
