//! Station readings and time-series helpers
//!
//! A [`Reading`] is an immutable observation. Series helpers never mutate
//! their input; they return new vectors.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::time::{hours_to_ms, Timestamp, WindowAnchor};

/// One observation from a weather station or sensor feed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Reading {
    /// Air temperature (K)
    pub temperature: f64,
    /// Station pressure (Pa)
    pub pressure: f64,
    /// Station altitude (m)
    pub altitude: f64,
    /// Relative humidity (%), expected in [0, 100]
    pub relative_humidity: f64,
    /// Observation time (ms since Unix epoch)
    pub timestamp: Timestamp,
    /// Wind speed (m/s) when the station reports one
    #[cfg_attr(feature = "serde", serde(default))]
    pub wind_speed: Option<f64>,
}

impl Reading {
    /// Reading without wind information
    pub fn new(
        timestamp: Timestamp,
        temperature: f64,
        pressure: f64,
        altitude: f64,
        relative_humidity: f64,
    ) -> Self {
        Self {
            temperature,
            pressure,
            altitude,
            relative_humidity,
            timestamp,
            wind_speed: None,
        }
    }

    /// Same reading with a wind speed attached
    pub fn with_wind_speed(self, wind_speed: f64) -> Self {
        Self { wind_speed: Some(wind_speed), ..self }
    }

    /// Same reading at a different altitude
    pub fn with_altitude(self, altitude: f64) -> Self {
        Self { altitude, ..self }
    }

    /// Temperature if it is usable as an absolute temperature
    pub fn usable_temperature(&self) -> Option<f64> {
        (self.temperature.is_finite() && self.temperature > 0.0).then_some(self.temperature)
    }
}

/// Copy of `readings` ordered oldest to newest. Stable for equal timestamps.
pub fn sort_by_timestamp(readings: &[Reading]) -> Vec<Reading> {
    let mut sorted = readings.to_vec();
    sorted.sort_by_key(|reading| reading.timestamp);
    sorted
}

/// Readings no older than `hours` before the anchor, oldest first.
///
/// The window is inclusive at both ends. Readings newer than an explicit
/// anchor are dropped.
pub fn filter_by_window(readings: &[Reading], hours: f64, anchor: WindowAnchor) -> Vec<Reading> {
    let sorted = sort_by_timestamp(readings);
    let end = match anchor {
        WindowAnchor::At(ts) => ts,
        WindowAnchor::LastReading => match sorted.last() {
            Some(last) => last.timestamp,
            None => return sorted,
        },
    };
    let start = end.saturating_sub(hours_to_ms(hours));

    sorted
        .into_iter()
        .filter(|reading| reading.timestamp >= start && reading.timestamp <= end)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: u64 = 3_600_000;

    fn at(ts: u64, altitude: f64) -> Reading {
        Reading::new(ts, 288.15, 101_325.0, altitude, 50.0)
    }

    #[test]
    fn sorting_is_stable() {
        let input = [at(3, 0.0), at(1, 10.0), at(1, 20.0), at(2, 30.0)];
        let sorted = sort_by_timestamp(&input);
        let altitudes: Vec<f64> = sorted.iter().map(|r| r.altitude).collect();
        assert_eq!(altitudes, vec![10.0, 20.0, 30.0, 0.0]);
        // input untouched
        assert_eq!(input[0].timestamp, 3);
    }

    #[test]
    fn window_at_fixed_instant() {
        let now = 10 * HOUR;
        let input = [at(now - 5 * HOUR, 0.0), at(now - 3 * HOUR, 1.0), at(now - HOUR, 2.0)];
        let window = filter_by_window(&input, 3.0, WindowAnchor::At(now));
        assert_eq!(window.len(), 2);
        assert_eq!(window[0].altitude, 1.0);
    }

    #[test]
    fn window_anchored_on_last_reading() {
        let input = [at(HOUR, 0.0), at(20 * HOUR, 1.0), at(22 * HOUR, 2.0)];
        let window = filter_by_window(&input, 4.0, WindowAnchor::LastReading);
        assert_eq!(window.len(), 2);
        assert!(filter_by_window(&[], 4.0, WindowAnchor::LastReading).is_empty());
    }

    #[test]
    fn builder_helpers() {
        let reading = at(0, 0.0).with_wind_speed(3.0).with_altitude(120.0);
        assert_eq!(reading.wind_speed, Some(3.0));
        assert_eq!(reading.altitude, 120.0);
        assert_eq!(reading.usable_temperature(), Some(288.15));

        let broken = Reading::new(0, f64::NAN, 101_325.0, 0.0, 50.0);
        assert_eq!(broken.usable_temperature(), None);
    }
}
