//! Snow-to-Liquid Ratios
//!
//! Colder snow is drier and fluffier, so the same water equivalent yields
//! more depth. Two ratio curves are offered:
//!
//! ```text
//! °C            | stepped | continuous
//! --------------|---------|------------------
//!  ≥ 0          |    5    |  5
//!  -5 ..  0     |   10    |  5 - 1.25·T
//! -10 .. -5     |   15    |  5 - 1.25·T
//! -15 .. -10    |   20    |  5 - 1.25·T
//! -20 .. -15    |   30    |  5 - 1.25·T
//!  ≤ -20        |   30    | 30
//! ```
//!
//! Stepped band edges belong to the warmer band. Both curves are
//! non-increasing in temperature.

use crate::formulas::temperature::kelvin_to_celsius;

/// Stepped snow-to-liquid ratio for a temperature (K).
pub fn snow_to_liquid_ratio(temperature: f64) -> f64 {
    let t = kelvin_to_celsius(temperature);
    if t >= 0.0 {
        5.0
    } else if t >= -5.0 {
        10.0
    } else if t >= -10.0 {
        15.0
    } else if t >= -15.0 {
        20.0
    } else {
        30.0
    }
}

/// Linear snow-to-liquid ratio, 5 at 0 °C rising to 30 at -20 °C.
pub fn snow_to_liquid_ratio_continuous(temperature: f64) -> f64 {
    let t = kelvin_to_celsius(temperature);
    if t >= 0.0 {
        5.0
    } else if t > -20.0 {
        5.0 - 1.25 * t
    } else {
        30.0
    }
}

/// Snow depth from liquid precipitation, stepped ratio. Units follow the input.
pub fn snowfall_equivalent(liquid_precipitation: f64, temperature: f64) -> f64 {
    liquid_precipitation * snow_to_liquid_ratio(temperature)
}

/// Snow depth from liquid precipitation, continuous ratio.
pub fn snowfall_equivalent_continuous(liquid_precipitation: f64, temperature: f64) -> f64 {
    liquid_precipitation * snow_to_liquid_ratio_continuous(temperature)
}

/// Liquid equivalent of a snow depth, stepped ratio.
pub fn snow_to_liquid_equivalent(snow_depth: f64, temperature: f64) -> f64 {
    snow_depth / snow_to_liquid_ratio(temperature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulas::temperature::celsius_to_kelvin;

    fn c(celsius: f64) -> f64 {
        celsius_to_kelvin(celsius)
    }

    #[test]
    fn stepped_bands() {
        assert_eq!(snow_to_liquid_ratio(273.15), 5.0);
        assert_eq!(snow_to_liquid_ratio(280.0), 5.0);
        assert_eq!(snow_to_liquid_ratio(c(-2.0)), 10.0);
        assert_eq!(snow_to_liquid_ratio(c(-7.0)), 15.0);
        assert_eq!(snow_to_liquid_ratio(c(-12.0)), 20.0);
        assert_eq!(snow_to_liquid_ratio(c(-18.0)), 30.0);
        assert_eq!(snow_to_liquid_ratio(c(-30.0)), 30.0);
    }

    #[test]
    fn continuous_curve() {
        assert_eq!(snow_to_liquid_ratio_continuous(273.15), 5.0);
        assert!((snow_to_liquid_ratio_continuous(c(-2.0)) - 7.5).abs() < 1e-9);
        assert!((snow_to_liquid_ratio_continuous(c(-10.0)) - 17.5).abs() < 1e-9);
        assert!((snow_to_liquid_ratio_continuous(c(-20.0)) - 30.0).abs() < 1e-9);
        assert_eq!(snow_to_liquid_ratio_continuous(c(-35.0)), 30.0);
    }

    #[test]
    fn colder_means_fluffier() {
        let temperatures = [c(-2.0), c(-7.0), c(-12.0), c(-17.0)];
        for pair in temperatures.windows(2) {
            assert!(snow_to_liquid_ratio(pair[1]) > snow_to_liquid_ratio(pair[0]));
            assert!(snow_to_liquid_ratio_continuous(pair[1]) > snow_to_liquid_ratio_continuous(pair[0]));
        }
    }

    #[test]
    fn snowfall_depth() {
        assert_eq!(snowfall_equivalent(10.0, 273.15), 50.0);
        assert_eq!(snowfall_equivalent(10.0, c(-8.0)), 150.0);
        assert_eq!(snowfall_equivalent(0.0, 260.0), 0.0);
        assert!((snowfall_equivalent_continuous(10.0, c(-3.0)) - 87.5).abs() < 1e-9);
        assert!((snowfall_equivalent_continuous(100.0, c(-10.0)) - 1750.0).abs() < 1e-6);
    }

    #[test]
    fn liquid_from_depth() {
        assert_eq!(snow_to_liquid_equivalent(50.0, 273.15), 10.0);
        assert_eq!(snow_to_liquid_equivalent(0.0, 270.0), 0.0);

        let depth = snowfall_equivalent(12.5, c(-11.0));
        assert!((snow_to_liquid_equivalent(depth, c(-11.0)) - 12.5).abs() < 1e-10);
    }
}
