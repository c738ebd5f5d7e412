//! Humidity Formulas
//!
//! ## Physical Background
//!
//! Water vapor content can be expressed many ways, and the formulas in this
//! module convert between them:
//!
//! ```text
//! Quantity                | Unit      | Depends on
//! ------------------------|-----------|--------------------------
//! saturation vapor press. | Pa        | T
//! actual vapor pressure   | Pa        | e_s, RH
//! mixing ratio            | g/kg      | e, P
//! specific humidity       | kg/kg     | r
//! absolute humidity       | g/m³      | RH, T
//! moist gas constant      | J/(kg·K)  | r
//! ```
//!
//! The saturation curve uses the Magnus form
//! `e_s = E0 · exp(b·Tc / (c + Tc))` with `Tc` in °C.
//!
//! ### Mixing Ratio
//!
//! `r = 0.622 · e / (P - e)` diverges as the vapor pressure approaches the
//! total pressure. Inputs with `P <= e` are rejected instead of producing a
//! negative or infinite ratio.
//!
//! ### Lifting Condensation Level
//!
//! Espy's rule puts the cloud base 124.7 m above the surface for every
//! kelvin of dew point depression. A dew point above the air temperature is
//! physically impossible and rejected.

use crate::{
    constants::{
        physics::{
            DRY_AIR_GAS_CONSTANT_PRECISE, LCL_METERS_PER_KELVIN, MOLAR_MASS_RATIO, UNIVERSAL_GAS_CONSTANT,
            VIRTUAL_TEMPERATURE_COEFFICIENT, WATER_MOLAR_MASS,
        },
        valuations::MagnusCoefficients,
    },
    errors::{FormulaError, FormulaResult},
};

use super::temperature::kelvin_to_celsius;

/// Saturation vapor pressure (Pa) with the Sonntag coefficients.
pub fn saturation_vapor_pressure(temperature: f64) -> f64 {
    saturation_vapor_pressure_with(temperature, MagnusCoefficients::SONNTAG)
}

/// Saturation vapor pressure (Pa) with explicit Magnus coefficients.
pub fn saturation_vapor_pressure_with(temperature: f64, coefficients: MagnusCoefficients) -> f64 {
    let t = kelvin_to_celsius(temperature);
    coefficients.reference_pressure * libm::exp((coefficients.b * t) / (coefficients.c + t))
}

/// Vapor pressure (Pa) over water by Bolton (1980).
pub fn vapor_pressure(temperature: f64) -> f64 {
    saturation_vapor_pressure_with(temperature, MagnusCoefficients::BOLTON)
}

/// Actual vapor pressure (Pa) from saturation pressure and RH (%).
///
/// Not validated: RH outside [0, 100] passes through.
pub fn actual_vapor_pressure(saturation_vapor_pressure: f64, humidity: f64) -> f64 {
    saturation_vapor_pressure * humidity / 100.0
}

/// Mixing ratio (g/kg) of vapor pressure `e` in total pressure `P`, both Pa.
pub fn mixing_ratio(vapor_pressure: f64, pressure: f64) -> FormulaResult<f64> {
    if pressure <= vapor_pressure {
        return Err(FormulaError::DomainViolation {
            reason: "Total pressure must exceed vapor pressure.",
        });
    }
    Ok((MOLAR_MASS_RATIO * vapor_pressure) / (pressure - vapor_pressure) * 1000.0)
}

/// Specific humidity from a mixing ratio, in the mixing ratio's mass units.
pub fn specific_humidity(mixing_ratio: f64) -> f64 {
    mixing_ratio / (1.0 + mixing_ratio)
}

/// Specific gas constant (J/(kg·K)) of moist air. Mixing ratio in kg/kg.
pub fn specific_gas_constant_for_moist_air(mixing_ratio: f64) -> f64 {
    DRY_AIR_GAS_CONSTANT_PRECISE / (1.0 + VIRTUAL_TEMPERATURE_COEFFICIENT * mixing_ratio)
}

/// Absolute humidity as vapor mass over air volume.
///
/// Units follow the inputs (g and m³ give g/m³).
pub fn absolute_humidity(mass: f64, volume: f64) -> FormulaResult<f64> {
    if volume <= 0.0 {
        return Err(FormulaError::DomainViolation {
            reason: "Volume must be greater than zero.",
        });
    }
    Ok(mass / volume)
}

/// Absolute humidity (g/m³) from RH (%) and temperature (K).
///
/// Ideal gas law applied to the water vapor partial pressure.
pub fn absolute_humidity_by_relative_humidity(humidity: f64, temperature: f64) -> f64 {
    let vapor = actual_vapor_pressure(saturation_vapor_pressure(temperature), humidity);
    vapor * WATER_MOLAR_MASS / (UNIVERSAL_GAS_CONSTANT * temperature) * 1000.0
}

/// Relative humidity (%) from temperature and dew point (K).
pub fn relative_humidity(temperature: f64, dew_point: f64) -> f64 {
    let MagnusCoefficients { b, c, .. } = MagnusCoefficients::ALDUCHOV_ESKRIDGE;
    let t = kelvin_to_celsius(temperature);
    let td = kelvin_to_celsius(dew_point);

    100.0 * libm::exp((b * td) / (c + td)) / libm::exp((b * t) / (c + t))
}

/// Dew point depression (K). Not validated.
pub fn dew_point_depression(temperature: f64, dew_point: f64) -> f64 {
    temperature - dew_point
}

/// Height (m) of the lifting condensation level above the surface.
pub fn lifting_condensation_level(temperature: f64, dew_point: f64) -> FormulaResult<f64> {
    if dew_point > temperature {
        return Err(FormulaError::DomainViolation {
            reason: "Dew point cannot be greater than temperature.",
        });
    }
    Ok(dew_point_depression(temperature, dew_point) * LCL_METERS_PER_KELVIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: f64, expected: f64, tolerance: f64) -> bool {
        (actual - expected).abs() < tolerance
    }

    #[test]
    fn vapor_pressures() {
        assert!(close(saturation_vapor_pressure(293.15), 2332.60, 0.01));
        assert!(close(vapor_pressure(293.15), 2336.95, 0.01));
        assert!(close(actual_vapor_pressure(2338.0, 50.0), 1169.0, 1e-9));

        let custom = MagnusCoefficients { reference_pressure: 600.0, ..MagnusCoefficients::SONNTAG };
        assert!(close(saturation_vapor_pressure_with(273.15, custom), 600.0, 1e-9));
    }

    #[test]
    fn actual_vapor_pressure_passes_through() {
        assert!(actual_vapor_pressure(2000.0, -10.0) < 0.0);
    }

    #[test]
    fn mixing_ratio_and_guard() {
        let ratio = mixing_ratio(2339.21, 101_325.0).unwrap();
        assert!(close(ratio, 14.698_964_568_550_7, 1e-9));

        assert!(matches!(mixing_ratio(1000.0, 1000.0), Err(FormulaError::DomainViolation { .. })));
        assert!(mixing_ratio(2000.0, 1000.0).is_err());
    }

    #[test]
    fn specific_humidity_and_gas_constant() {
        assert!(close(specific_humidity(14.84), 0.9369, 1e-4));
        assert!(close(specific_gas_constant_for_moist_air(0.01), 285.32, 0.005));
        assert!(close(specific_gas_constant_for_moist_air(0.0), 287.06, 0.005));
    }

    #[test]
    fn absolute_humidity_values() {
        assert!(close(absolute_humidity(10.0, 2.0).unwrap(), 5.0, 1e-12));
        assert!(absolute_humidity(10.0, 0.0).is_err());
        assert!(absolute_humidity(10.0, -1.0).is_err());

        let ah = absolute_humidity_by_relative_humidity(50.0, 298.15);
        assert!(close(ah, 11.48, 0.005));
    }

    #[test]
    fn relative_humidity_from_dew_point() {
        assert!(close(relative_humidity(293.15, 283.15), 52.54, 0.01));
        assert!(close(relative_humidity(290.0, 290.0), 100.0, 1e-9));
    }

    #[test]
    fn lifting_condensation() {
        assert!(close(lifting_condensation_level(293.15, 283.15).unwrap(), 1247.0, 1e-6));
        assert!(close(lifting_condensation_level(283.15, 283.15).unwrap(), 0.0, 1e-12));
        assert_eq!(
            lifting_condensation_level(288.15, 293.15),
            Err(FormulaError::DomainViolation {
                reason: "Dew point cannot be greater than temperature."
            })
        );
        assert!(close(dew_point_depression(293.15, 283.15), 10.0, 1e-9));
    }
}
