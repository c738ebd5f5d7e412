//! Air density from the ideal gas law, dry or corrected for moisture.
//!
//! Moist air is lighter than dry air at the same pressure and temperature.
//! The moist path follows the humidity chain:
//!
//! ```text
//! T ──► e_s ──► e = e_s·RH ──► r = 0.622·e/(P-e) ──► R_moist ──► ρ = P/(R_moist·T)
//! ```

use crate::{
    constants::physics::{AIR_DENSITY_DECAY_PER_METER, DRY_AIR_GAS_CONSTANT},
    errors::FormulaResult,
};

use super::humidity::{actual_vapor_pressure, mixing_ratio, saturation_vapor_pressure, specific_gas_constant_for_moist_air};

/// How to treat water vapor in [`calculate_air_density`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AirComposition {
    /// Dry air with the given specific gas constant (J/(kg·K))
    Dry {
        /// Specific gas constant of the gas mixture
        gas_constant: f64,
    },
    /// Moist air at the given relative humidity (%)
    Moist {
        /// Relative humidity in percent
        humidity: f64,
    },
}

impl AirComposition {
    /// Dry air with R = 287.05 J/(kg·K)
    pub const DRY: Self = Self::Dry { gas_constant: DRY_AIR_GAS_CONSTANT };
}

/// Air density (kg/m³) at pressure (Pa) and temperature (K).
///
/// The moist path fails when the vapor pressure reaches the total pressure.
pub fn calculate_air_density(pressure: f64, temperature: f64, composition: AirComposition) -> FormulaResult<f64> {
    match composition {
        AirComposition::Dry { gas_constant } => Ok(pressure / (gas_constant * temperature)),
        AirComposition::Moist { humidity } => {
            let vapor = actual_vapor_pressure(saturation_vapor_pressure(temperature), humidity);
            let ratio = mixing_ratio(vapor, pressure)? / 1000.0;
            let gas_constant = specific_gas_constant_for_moist_air(ratio);
            Ok(pressure / (gas_constant * temperature))
        }
    }
}

/// Density (kg/m³) after climbing `altitude_difference` metres from a reference.
pub fn air_density_at_altitude(reference_density: f64, altitude_difference: f64) -> f64 {
    reference_density * libm::exp(-AIR_DENSITY_DECAY_PER_METER * altitude_difference)
}
