//! Heat index (Rothfusz regression, metric coefficients).

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    constants::physics::KELVIN,
    errors::FormulaResult,
    formulas::{
        temperature::{celsius_to_kelvin, kelvin_to_celsius},
        utils::{check_finite, check_range},
    },
    lookup::{Band, BandTable},
};

const C1: f64 = -8.784_694_755_56;
const C2: f64 = 1.611_394_11;
const C3: f64 = 2.338_548_838_89;
const C4: f64 = -0.146_116_05;
const C5: f64 = -0.012_308_094;
const C6: f64 = -0.016_424_827_777_8;
const C7: f64 = 0.002_211_732;
const C8: f64 = 0.000_725_46;
const C9: f64 = -0.000_003_582;

/// Heat index (K) from air temperature (K) and relative humidity (%).
///
/// NaN or infinite inputs and humidity outside [0, 100] are rejected. The
/// regression is only meaningful above roughly 27 °C.
pub fn heat_index(temperature: f64, humidity: f64) -> FormulaResult<f64> {
    check_finite(temperature)?;
    check_finite(humidity)?;
    check_range(humidity, 0.0, 100.0)?;

    let t = kelvin_to_celsius(temperature);
    let r = humidity;
    let t2 = t * t;
    let r2 = r * r;

    let index = C1
        + C2 * t
        + C3 * r
        + C4 * t * r
        + C5 * t2
        + C6 * r2
        + C7 * t2 * r
        + C8 * t * r2
        + C9 * t2 * r2;

    Ok(celsius_to_kelvin(index))
}

/// Heat index warning level
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct HeatIndexCategory {
    /// Lowest heat index (°C) of the level
    pub lower_limit: f64,
    /// Short name
    pub text: &'static str,
    /// Health warning
    pub warning: &'static str,
}

impl Band for HeatIndexCategory {
    fn lower(&self) -> f64 {
        self.lower_limit + KELVIN
    }

    fn upper(&self) -> f64 {
        f64::INFINITY
    }
}

const HEAT_INDEX_CATEGORIES: &[HeatIndexCategory] = &[
    HeatIndexCategory {
        lower_limit: 52.0,
        text: "Extreme danger",
        warning: "Heat stroke is imminent.",
    },
    HeatIndexCategory {
        lower_limit: 40.0,
        text: "Danger",
        warning: "Heat cramps and heat exhaustion are likely; heat stroke is probable with continued activity.",
    },
    HeatIndexCategory {
        lower_limit: 33.0,
        text: "Extreme caution",
        warning: "Heat cramps and heat exhaustion are possible. Continuing activity could result in heat stroke.",
    },
    HeatIndexCategory {
        lower_limit: 26.0,
        text: "Caution",
        warning: "Fatigue is possible with prolonged exposure and activity. Continuing activity could result in heat cramps.",
    },
];

/// Heat index warning levels, most severe first
pub const HEAT_INDEX_TABLE: BandTable<HeatIndexCategory> = BandTable::new("heat index", HEAT_INDEX_CATEGORIES);

/// Warning level for a heat index (K); `None` below 26 °C.
pub fn heat_index_text(heat_index: f64) -> Option<&'static HeatIndexCategory> {
    HEAT_INDEX_TABLE.find(heat_index)
}
