//! Constants for Aerology Core
//!
//! Centralised, documented physical constants and coefficient tables used by
//! every formula module. Everything here is `const`: read-only configuration
//! shared by the whole process, with nothing to initialise.
//!
//! ## Organization
//!
//! - **Physics**: fundamental constants, gas constants, standard atmosphere
//! - **Atmosphere**: barometric formula parameter sets
//! - **Valuations**: dew point regression sets and Magnus coefficients
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Include the source of a value when adding one
//! 3. Use descriptive names that include units where ambiguous

/// Physical constants and standard atmosphere values.
pub mod physics;

/// Barometric formula parameter records.
pub mod atmosphere;

/// Dew point valuation sets and saturation curve coefficients.
pub mod valuations;

// Re-export commonly used constants for convenience
pub use physics::{
    KELVIN, STANDARD_PRESSURE_PA, STANDARD_TEMPERATURE_K,
    STANDARD_LAPSE_RATE, STANDARD_GRAVITY, DRY_AIR_GAS_CONSTANT, STANDARD_AIR_DENSITY,
};

pub use atmosphere::AtmosphericConstants;

pub use valuations::{
    ValuationSet, MagnusCoefficients, DEW_POINT_VALUATIONS,
    ARDENBUCK_DEFAULT, DAVID_BOLTON, SONNTAG1990, PAROSCIENTIFIC, ARDENBUCK_PLUS, ARDENBUCK_MINUS,
};

/// Latent heat and heat capacity pair used by equivalent temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThermodynamicConstants {
    /// Latent heat of vaporization (J/kg)
    pub latent_heat: f64,
    /// Specific heat of dry air at constant pressure (J/(kg·K))
    pub specific_heat: f64,
}

impl ThermodynamicConstants {
    /// Values at 0 °C for dry air.
    pub const STANDARD: Self = Self {
        latent_heat: physics::LATENT_HEAT_VAPORIZATION,
        specific_heat: physics::SPECIFIC_HEAT_DRY_AIR,
    };
}

impl Default for ThermodynamicConstants {
    fn default() -> Self {
        Self::STANDARD
    }
}
