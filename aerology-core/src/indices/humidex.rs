//! Canadian humidex.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    constants::physics::{KELVIN, WATER_TRIPLE_POINT_K},
    formulas::temperature::{celsius_to_kelvin, dew_point_magnus_formula, kelvin_to_celsius},
    lookup::{Band, BandTable},
};

/// Humidex (K) from air temperature (K) and relative humidity (%).
pub fn humidex(temperature: f64, humidity: f64) -> f64 {
    let air = kelvin_to_celsius(temperature);
    let dew_point = dew_point_magnus_formula(temperature, humidity, None);

    // vapor pressure in hPa from the dew point
    let e = 6.11 * libm::exp(5417.7530 * ((1.0 / WATER_TRIPLE_POINT_K) - (1.0 / dew_point)));

    celsius_to_kelvin(air + 0.5555 * (e - 10.0))
}

/// Humidex comfort level
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct HumidexCategory {
    /// Lowest humidex (°C) of the level
    pub lower_limit: f64,
    /// Description
    pub text: &'static str,
}

impl Band for HumidexCategory {
    fn lower(&self) -> f64 {
        self.lower_limit + KELVIN
    }

    fn upper(&self) -> f64 {
        f64::INFINITY
    }
}

const HUMIDEX_CATEGORIES: &[HumidexCategory] = &[
    HumidexCategory { lower_limit: 46.0, text: "Dangerous" },
    HumidexCategory { lower_limit: 40.0, text: "Great discomfort" },
    HumidexCategory { lower_limit: 30.0, text: "Some discomfort" },
];

/// Humidex comfort levels, most severe first
pub const HUMIDEX_TABLE: BandTable<HumidexCategory> = BandTable::new("humidex", HUMIDEX_CATEGORIES);

/// Comfort level for a humidex (K); `None` below 30 °C.
pub fn humidex_text(humidex: f64) -> Option<&'static HumidexCategory> {
    HUMIDEX_TABLE.find(humidex)
}
