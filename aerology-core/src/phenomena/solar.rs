//! Solar Position
//!
//! Low-precision solar elevation from the NOAA general solar position
//! equations. The fractional year γ drives Fourier series for the solar
//! declination and the equation of time:
//!
//! ```text
//! γ    = 2π/365 · (day - 1 + (hour - 12)/24)
//! tst  = 60·hour + eqtime + 4·longitude          true solar time (min)
//! ha   = tst/4 - 180                             hour angle (°)
//! sin e = sin φ·sin δ + cos φ·cos δ·cos ha
//! ```
//!
//! Accuracy is a few tenths of a degree, which is plenty for daylight
//! weighting. Refraction is ignored.

use core::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::time::{day_and_hour_of, Timestamp};

/// Observer position in degrees, north and east positive
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPosition {
    /// Latitude (-90 to 90)
    pub latitude: f64,
    /// Longitude (-180 to 180)
    pub longitude: f64,
}

impl GeoPosition {
    /// Position from latitude and longitude in degrees
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

fn fractional_year(day_of_year: u32, hour: f64) -> f64 {
    2.0 * PI / 365.0 * (day_of_year as f64 - 1.0 + (hour - 12.0) / 24.0)
}

/// Solar declination (radians)
fn declination(gamma: f64) -> f64 {
    0.006_918 - 0.399_912 * libm::cos(gamma) + 0.070_257 * libm::sin(gamma)
        - 0.006_758 * libm::cos(2.0 * gamma)
        + 0.000_907 * libm::sin(2.0 * gamma)
        - 0.002_697 * libm::cos(3.0 * gamma)
        + 0.001_48 * libm::sin(3.0 * gamma)
}

/// Equation of time (minutes)
fn equation_of_time(gamma: f64) -> f64 {
    229.18
        * (0.000_075 + 0.001_868 * libm::cos(gamma)
            - 0.032_077 * libm::sin(gamma)
            - 0.014_615 * libm::cos(2.0 * gamma)
            - 0.040_849 * libm::sin(2.0 * gamma))
}

/// Elevation of the sun above the horizon (degrees) at a UTC instant.
///
/// `None` when the timestamp is outside the calendar range.
pub fn solar_elevation(timestamp: Timestamp, position: GeoPosition) -> Option<f64> {
    let (day_of_year, hour) = day_and_hour_of(timestamp)?;
    let gamma = fractional_year(day_of_year, hour);

    let true_solar_time = hour * 60.0 + equation_of_time(gamma) + 4.0 * position.longitude;
    let hour_angle = (true_solar_time / 4.0 - 180.0).to_radians();

    let latitude = position.latitude.to_radians();
    let delta = declination(gamma);
    let sin_elevation = libm::sin(latitude) * libm::sin(delta)
        + libm::cos(latitude) * libm::cos(delta) * libm::cos(hour_angle);

    Some(libm::asin(sin_elevation.clamp(-1.0, 1.0)).to_degrees())
}
