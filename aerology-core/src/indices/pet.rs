//! Physiological Equivalent Temperature (PET)
//!
//! PET is the air temperature of a reference indoor climate in which the
//! human heat balance matches the assessed outdoor conditions. The full
//! Munich energy-balance model is iterative; this module uses a regression
//! approximation built from four terms:
//!
//! ```text
//! PET = ½·Ta + ½·Tmrt                                  radiation
//!     - 0.006·RH·(1 + 0.008·max(0, Ta-20))              humidity
//!     - 0.4·√v·(1 + 0.015·max(0, Ta-15))                wind
//!     - 0.015·e·max(0, Ta-15)                           vapor pressure (hPa)
//! ```
//!
//! All terms are in °C. Without a mean radiant temperature the air
//! temperature stands in for it.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    constants::physics::KELVIN,
    errors::FormulaResult,
    formulas::{
        humidity::{actual_vapor_pressure, saturation_vapor_pressure},
        temperature::{celsius_to_kelvin, kelvin_to_celsius},
        utils::{check_finite, check_non_negative, check_range},
    },
    lookup::{Band, BandTable},
};

/// PET (K) from air temperature (K), humidity (%), wind (m/s) and an
/// optional mean radiant temperature (K).
pub fn calculate_pet(
    temperature: f64,
    humidity: f64,
    wind_speed: f64,
    mean_radiant_temperature: Option<f64>,
) -> FormulaResult<f64> {
    check_finite(temperature)?;
    check_finite(humidity)?;
    check_finite(wind_speed)?;
    check_range(humidity, 0.0, 100.0)?;
    check_non_negative("Wind speed", wind_speed)?;

    let ta = kelvin_to_celsius(temperature);
    let tmrt = mean_radiant_temperature.map_or(ta, kelvin_to_celsius);
    let vapor_hpa = actual_vapor_pressure(saturation_vapor_pressure(temperature), humidity) / 100.0;

    let radiation = 0.5 * ta + 0.5 * tmrt;
    let humidity_effect = -0.006 * humidity * (1.0 + 0.008 * (ta - 20.0).max(0.0));
    let wind_effect = -0.4 * libm::sqrt(wind_speed) * (1.0 + 0.015 * (ta - 15.0).max(0.0));
    let vapor_effect = -0.015 * vapor_hpa * (ta - 15.0).max(0.0);

    Ok(celsius_to_kelvin(radiation + humidity_effect + wind_effect + vapor_effect))
}

/// [`calculate_pet`] without radiation data.
pub fn simple_pet(temperature: f64, humidity: f64, wind_speed: f64) -> FormulaResult<f64> {
    calculate_pet(temperature, humidity, wind_speed, None)
}

/// Thermal perception and stress grade for central European subjects
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PetCategory {
    /// Lowest PET (°C) of the grade
    pub lower_limit: f64,
    /// Thermal perception
    pub perception: &'static str,
    /// Grade of physiological stress
    pub stress: &'static str,
}

impl Band for PetCategory {
    fn lower(&self) -> f64 {
        self.lower_limit + KELVIN
    }

    fn upper(&self) -> f64 {
        f64::INFINITY
    }
}

const fn grade(lower_limit: f64, perception: &'static str, stress: &'static str) -> PetCategory {
    PetCategory { lower_limit, perception, stress }
}

const PET_CATEGORIES: &[PetCategory] = &[
    grade(41.0, "Very hot", "Extreme heat stress"),
    grade(35.0, "Hot", "Strong heat stress"),
    grade(29.0, "Warm", "Moderate heat stress"),
    grade(23.0, "Slightly warm", "Slight heat stress"),
    grade(18.0, "Comfortable", "No thermal stress"),
    grade(13.0, "Slightly cool", "Slight cold stress"),
    grade(8.0, "Cool", "Moderate cold stress"),
    grade(4.0, "Cold", "Strong cold stress"),
    grade(f64::NEG_INFINITY, "Very cold", "Extreme cold stress"),
];

/// PET grades, warmest first
pub const PET_TABLE: BandTable<PetCategory> = BandTable::new("PET", PET_CATEGORIES);

/// Grade for a PET value (K). Only NaN has no grade.
pub fn pet_category(pet: f64) -> Option<&'static PetCategory> {
    PET_TABLE.find(pet)
}
