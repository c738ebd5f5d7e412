//! Convective cloud base from the surface dew point spread.

use crate::{errors::FormulaResult, formulas::humidity::lifting_condensation_level};

/// Cloud base altitude (m): station altitude plus the condensation level.
pub fn cloud_base_height(temperature: f64, dew_point: f64, altitude: f64) -> FormulaResult<f64> {
    Ok(altitude + lifting_condensation_level(temperature, dew_point)?)
}

/// Air temperature (K) at the cloud base for a lapse rate (K/m).
pub fn cloud_temperature(temperature: f64, dew_point: f64, lapse_rate: f64) -> FormulaResult<f64> {
    Ok(temperature - lapse_rate * lifting_condensation_level(temperature, dew_point)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{constants::physics::STANDARD_LAPSE_RATE, errors::FormulaError};

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 0.005
    }

    #[test]
    fn base_height() {
        assert!(close(cloud_base_height(293.15, 283.15, 0.0).unwrap(), 1247.0));
        assert!(close(cloud_base_height(293.15, 283.15, 500.0).unwrap(), 1747.0));
        assert!(close(cloud_base_height(288.15, 286.15, 0.0).unwrap(), 249.4));
        assert!(close(cloud_base_height(303.15, 283.15, 0.0).unwrap(), 2494.0));
        assert!(close(cloud_base_height(293.15, 293.15, 0.0).unwrap(), 0.0));
        assert!(close(cloud_base_height(298.15, 291.15, 100.0).unwrap(), 972.9));
    }

    #[test]
    fn base_temperature() {
        let standard = |t, td| cloud_temperature(t, td, STANDARD_LAPSE_RATE).unwrap();
        assert!(close(standard(293.15, 283.15), 285.0445));
        assert!(close(standard(288.15, 286.15), 286.5289));
        assert!(close(standard(293.15, 293.15), 293.15));
        assert!(close(standard(273.15, 268.15), 269.097));
        assert!(close(cloud_temperature(293.15, 283.15, 0.008).unwrap(), 283.174));
        assert!(close(cloud_temperature(283.15, 281.15, 0.0098).unwrap(), 280.706));
    }

    #[test]
    fn dew_point_above_temperature() {
        let expected = Err(FormulaError::DomainViolation {
            reason: "Dew point cannot be greater than temperature.",
        });
        assert_eq!(cloud_base_height(288.15, 293.15, 0.0), expected);
        assert_eq!(cloud_temperature(288.15, 293.15, STANDARD_LAPSE_RATE), expected);
    }
}
