//! Common Formula Utilities
//!
//! ## Overview
//!
//! Shared helpers used by every formula module: input checks that turn
//! non-physical arguments into [`FormulaError`]s, rounding with the
//! conventions meteorological tables are published in, and small numeric
//! routines (clamping, least-squares slope) used by the series helpers.
//!
//! ## Rounding
//!
//! Published reference values round half up (towards positive infinity),
//! so `round_half_up(2.5) == 3` and `round_half_up(-2.5) == -2`. This differs
//! from `f64::round`, which rounds half away from zero.
//!
//! ## Validation Helpers
//!
//! ```rust
//! use aerology_core::formulas::utils::check_range;
//!
//! // Relative humidity is a percentage
//! assert!(check_range(55.0, 0.0, 100.0).is_ok());
//! assert!(check_range(120.0, 0.0, 100.0).is_err());
//! ```

use crate::errors::{FormulaError, FormulaResult};

/// Check if a value is within the specified closed range
pub fn check_range(value: f64, min: f64, max: f64) -> FormulaResult<()> {
    if value < min || value > max {
        Err(FormulaError::OutOfRange { value, min, max })
    } else {
        Ok(())
    }
}

/// Reject negative values of a named quantity
pub fn check_non_negative(quantity: &'static str, value: f64) -> FormulaResult<()> {
    if value < 0.0 {
        Err(FormulaError::Negative { quantity, value })
    } else {
        Ok(())
    }
}

/// Reject NaN and infinities
pub fn check_finite(value: f64) -> FormulaResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FormulaError::InvalidValue)
    }
}

/// Round to the nearest integer, halves towards positive infinity
pub fn round_half_up(value: f64) -> f64 {
    libm::floor(value + 0.5)
}

/// Round half up to `decimals` places
pub fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let factor = libm::pow(10.0, decimals as f64);
    round_half_up(value * factor) / factor
}

/// Round half up to two decimal places
pub fn round_to_two_decimals(value: f64) -> f64 {
    round_to_decimals(value, 2)
}

/// Clamp to [0, 1]; NaN maps to 0
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Least-squares slope and intercept of `y` against `x`.
///
/// Returns a zero slope and the mean of `y` when the `x` values have no
/// spread. `None` for empty input.
pub fn linear_regression(points: impl Iterator<Item = (f64, f64)> + Clone) -> Option<(f64, f64)> {
    let mut n = 0.0;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    for (x, y) in points.clone() {
        n += 1.0;
        sum_x += x;
        sum_y += y;
    }
    if n == 0.0 {
        return None;
    }

    let mean_x = sum_x / n;
    let mean_y = sum_y / n;
    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (x, y) in points {
        sxx += (x - mean_x) * (x - mean_x);
        sxy += (x - mean_x) * (y - mean_y);
    }

    if sxx <= f64::EPSILON {
        return Some((0.0, mean_y));
    }
    let slope = sxy / sxx;
    Some((slope, mean_y - slope * mean_x))
}
