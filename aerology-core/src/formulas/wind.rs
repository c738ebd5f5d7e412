//! Wind Formulas
//!
//! Directions follow the meteorological convention: a wind direction is the
//! bearing the wind blows *from*, measured clockwise from north. An observer
//! heading is the bearing the observer moves *to*.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::constants::physics::{STANDARD_AIR_DENSITY, WIND_FORCE_GRAVITY};

use super::air_density::air_density_at_altitude;

/// Air density assumed when none is given (kg/m³)
pub const DEFAULT_AIR_DENSITY: f64 = STANDARD_AIR_DENSITY;

/// One of the sixteen compass points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CompassPoint {
    /// Short form, e.g. "NNE"
    pub abbr: &'static str,
    /// Long form, e.g. "North-Northeast"
    pub full: &'static str,
}

const fn point(abbr: &'static str, full: &'static str) -> CompassPoint {
    CompassPoint { abbr, full }
}

/// Compass rose, clockwise from north in 22.5° steps
pub const COMPASS_POINTS: [CompassPoint; 16] = [
    point("N", "North"),
    point("NNE", "North-Northeast"),
    point("NE", "Northeast"),
    point("ENE", "East-Northeast"),
    point("E", "East"),
    point("ESE", "East-Southeast"),
    point("SE", "Southeast"),
    point("SSE", "South-Southeast"),
    point("S", "South"),
    point("SSW", "South-Southwest"),
    point("SW", "Southwest"),
    point("WSW", "West-Southwest"),
    point("W", "West"),
    point("WNW", "West-Northwest"),
    point("NW", "Northwest"),
    point("NNW", "North-Northwest"),
];

/// Wrap any bearing into [0, 360).
pub fn normalize_degrees(degree: f64) -> f64 {
    ((degree % 360.0) + 360.0) % 360.0
}

/// Compass point for a bearing in degrees; any real bearing is accepted.
///
/// NaN maps to north.
pub fn get_wind_direction_by_degree(degree: f64) -> CompassPoint {
    let degree = normalize_degrees(degree);
    let index = libm::floor((degree + 11.25) / 22.5) as usize % COMPASS_POINTS.len();
    COMPASS_POINTS[index]
}

/// Kinetic power (W/m²) carried through a unit area.
pub fn wind_power_density(wind_speed: f64, air_density: f64) -> f64 {
    0.5 * air_density * wind_speed * wind_speed * wind_speed
}

/// Dynamic pressure expressed as a load (kg/m²).
pub fn wind_force(wind_speed: f64, air_density: f64) -> f64 {
    0.5 * air_density * wind_speed * wind_speed / WIND_FORCE_GRAVITY
}

/// Rescale a wind speed measured at one altitude to another.
///
/// Both densities are derived from `measured_density` at
/// `measurement_altitude`; the speed scales with the cube root of their
/// ratio, which keeps the power density constant.
pub fn adjust_wind_speed_for_altitude(
    wind_speed: f64,
    measurement_altitude: f64,
    measured_density: f64,
    reference_altitude: f64,
    target_altitude: f64,
) -> f64 {
    let reference = air_density_at_altitude(measured_density, reference_altitude - measurement_altitude);
    let target = air_density_at_altitude(measured_density, target_altitude - measurement_altitude);
    wind_speed * libm::cbrt(reference / target)
}

/// Wind speed (m/s) and "from" bearing (degrees)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct WindVector {
    /// Speed in m/s
    pub speed: f64,
    /// Bearing the wind comes from, in [0, 360)
    pub direction: f64,
}

/// Wind felt by a moving observer.
///
/// `true_direction` is where the wind comes from and `observer_heading`
/// where the observer is going. Calm apparent wind reports north.
pub fn apparent_wind(true_speed: f64, true_direction: f64, observer_speed: f64, observer_heading: f64) -> WindVector {
    let wind = true_direction.to_radians();
    let heading = observer_heading.to_radians();

    // air moves opposite to the "from" bearing
    let wind_x = -true_speed * libm::sin(wind);
    let wind_y = -true_speed * libm::cos(wind);

    let apparent_x = wind_x - observer_speed * libm::sin(heading);
    let apparent_y = wind_y - observer_speed * libm::cos(heading);

    let speed = libm::hypot(apparent_x, apparent_y);
    let direction = normalize_degrees(libm::atan2(-apparent_x, -apparent_y).to_degrees());

    WindVector { speed, direction }
}

/// Bernoulli speed (m/s) for a dynamic pressure (Pa).
///
/// Negative differences yield NaN.
pub fn wind_speed_from_pressure_difference(pressure_difference: f64, air_density: f64) -> f64 {
    libm::sqrt(2.0 * pressure_difference / air_density)
}
