//! Physical Constants for Atmospheric Formulas
//!
//! Fundamental and empirically standardised values shared by every formula
//! module. Temperatures are Kelvin, pressures Pascal, lengths metres.

// ===== TEMPERATURE =====

/// Offset between the Celsius and Kelvin scales (K).
///
/// Source: SI Brochure, 9th edition (2019)
pub const KELVIN: f64 = 273.15;

/// Triple point of water (K), used as the reference in the humidex
/// Clausius-Clapeyron term.
pub const WATER_TRIPLE_POINT_K: f64 = 273.16;

/// Standard sea-level temperature, 15 °C (K).
///
/// Source: International Standard Atmosphere (ISA)
pub const STANDARD_TEMPERATURE_K: f64 = 288.15;

// ===== PRESSURE =====

/// Standard atmospheric pressure at sea level (Pa).
///
/// Source: International Standard Atmosphere (ISA)
pub const STANDARD_PRESSURE_PA: f64 = 101_325.0;

/// Reference pressure for potential temperature (Pa).
pub const POTENTIAL_TEMPERATURE_REFERENCE_PA: f64 = 100_000.0;

/// Poisson exponent R/cp used for potential temperature.
pub const POISSON_EXPONENT: f64 = 0.286;

// ===== GAS CONSTANTS =====

/// Universal gas constant (J/(mol·K)).
///
/// Value used by the U.S. Standard Atmosphere 1976 tables.
pub const UNIVERSAL_GAS_CONSTANT: f64 = 8.31447;

/// Specific gas constant for dry air (J/(kg·K)) used by density and
/// hypsometric calculations.
pub const DRY_AIR_GAS_CONSTANT: f64 = 287.05;

/// Higher-precision dry air gas constant (J/(kg·K)) used when correcting for
/// moisture.
pub const DRY_AIR_GAS_CONSTANT_PRECISE: f64 = 287.058;

/// Ratio of molar masses of water vapor and dry air (epsilon ≈ 0.622).
pub const MOLAR_MASS_RATIO: f64 = 0.622;

/// Empirical virtual temperature coefficient (1/epsilon - 1, rounded).
pub const VIRTUAL_TEMPERATURE_COEFFICIENT: f64 = 0.61;

/// Molar mass of dry air (kg/mol).
///
/// Source: U.S. Standard Atmosphere 1976
pub const DRY_AIR_MOLAR_MASS: f64 = 0.028_964_4;

/// Molar mass of water (kg/mol).
pub const WATER_MOLAR_MASS: f64 = 0.018_015;

// ===== GRAVITY =====

/// Standard gravitational acceleration (m/s²).
///
/// Source: CGPM 1901, conventional value
pub const STANDARD_GRAVITY: f64 = 9.806_65;

/// Rounded gravity used by the wind force formula (m/s²).
pub const WIND_FORCE_GRAVITY: f64 = 9.81;

// ===== THERMODYNAMICS =====

/// Latent heat of vaporization of water near 0 °C (J/kg).
pub const LATENT_HEAT_VAPORIZATION: f64 = 2.5e6;

/// Specific heat of dry air at constant pressure (J/(kg·K)).
pub const SPECIFIC_HEAT_DRY_AIR: f64 = 1004.0;

// ===== LAPSE RATES AND DECAY =====

/// Standard environmental lapse rate (K/m), as a positive magnitude.
///
/// Source: International Standard Atmosphere, troposphere layer
pub const STANDARD_LAPSE_RATE: f64 = 0.0065;

/// Standard temperature change per metre of ascent (K/m).
///
/// Same magnitude as [`STANDARD_LAPSE_RATE`], signed like a measured
/// gradient: negative because temperature falls with height.
pub const STANDARD_TEMPERATURE_GRADIENT: f64 = -STANDARD_LAPSE_RATE;

/// Metres of cloud base per kelvin of dew point depression.
///
/// Empirical Espy relationship for the lifting condensation level.
pub const LCL_METERS_PER_KELVIN: f64 = 124.7;

/// Exponential air density decay per metre (1/m), scale height ≈ 8434 m.
pub const AIR_DENSITY_DECAY_PER_METER: f64 = 0.000_118_56;

/// Sea-level standard air density (kg/m³).
pub const STANDARD_AIR_DENSITY: f64 = 1.225;

// ===== OPTICS =====

/// Koschmieder constant, -ln(0.02) for a 2 % contrast threshold.
pub const KOSCHMIEDER_CONSTANT: f64 = 3.912;
