//! Barometric formula parameter sets.

use super::physics::{DRY_AIR_MOLAR_MASS, STANDARD_GRAVITY, STANDARD_LAPSE_RATE, UNIVERSAL_GAS_CONSTANT};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters of the barometric formula.
///
/// Both presets are `const` and never change at runtime. Callers that model
/// a different atmosphere build their own value and pass it per call.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AtmosphericConstants {
    /// Temperature lapse rate (K/m), positive when temperature falls with height
    pub lapse_rate: f64,
    /// Gravitational acceleration (m/s²)
    pub gravity: f64,
    /// Molar mass of the air column (kg/mol)
    pub molar_mass: f64,
    /// Universal gas constant (J/(mol·K))
    pub gas_constant: f64,
}

impl AtmosphericConstants {
    /// International Standard Atmosphere troposphere.
    pub const STANDARD: Self = Self {
        lapse_rate: STANDARD_LAPSE_RATE,
        gravity: STANDARD_GRAVITY,
        molar_mass: DRY_AIR_MOLAR_MASS,
        gas_constant: UNIVERSAL_GAS_CONSTANT,
    };

    /// Dry air with the CODATA 2018 gas constant and a 28.9652 g/mol molar mass.
    pub const DRY_AIR: Self = Self {
        lapse_rate: STANDARD_LAPSE_RATE,
        gravity: STANDARD_GRAVITY,
        molar_mass: 0.028_965_2,
        gas_constant: 8.314_462_618,
    };

    /// Exponent g·M/(R·L) of the power-law barometric formula.
    ///
    /// Infinite when the lapse rate is zero; use the isothermal branch then.
    pub fn barometric_exponent(&self) -> f64 {
        (self.gravity * self.molar_mass) / (self.gas_constant * self.lapse_rate)
    }

    /// Isothermal scale factor g·M/R (K/m).
    pub fn hydrostatic_factor(&self) -> f64 {
        (self.gravity * self.molar_mass) / self.gas_constant
    }
}

impl Default for AtmosphericConstants {
    fn default() -> Self {
        Self::STANDARD
    }
}
