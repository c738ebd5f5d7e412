//! Error Types for Atmospheric Formula Domain Violations
//!
//! ## Design Philosophy
//!
//! Formulas in this crate are pure arithmetic, so an error never means "try
//! again later". It means the caller asked a question that has no physical
//! answer: a dew point above the air temperature, a negative wind speed, a
//! vapor pressure larger than the total pressure.
//!
//! 1. **Copy Semantics**: Errors implement Copy and carry only numbers and
//!    `&'static str` reasons, so they cost nothing to return from hot loops
//!    such as altitude series reconstruction.
//!
//! 2. **No Heap Allocation**: The enum works identically with and without
//!    `std`.
//!
//! ## Three Kinds of Behavior
//!
//! Not every non-physical input produces an error. Functions fall into one
//! of three groups and callers should know which one they are calling:
//!
//! ### Hard Domain Violations (return `Err`)
//! - `Negative`: negative wind speed into Beaufort, Saffir-Simpson or PET
//! - `OutOfRange`: relative humidity outside [0, 100] into heat index or PET
//! - `DomainViolation`: dew point above temperature, non-positive volume,
//!   total pressure not exceeding vapor pressure, and similar
//!
//! ### Guarded Sentinels (return a documented value)
//! - `barometric_formula` returns `0.0` when the temperature ratio turns negative
//! - `freezing_level_altitude` returns `None` at or below 273.15 K
//! - Saffir-Simpson returns `None` below the lowest band
//! - Lapse-rate and average-temperature helpers fall back to standard values
//!
//! These are logged at `warn` level when the `log` feature is enabled, never
//! turned into errors. Composed helpers such as the historical sea-level
//! reduction depend on the fallbacks.
//!
//! ### Pass-Through (no validation)
//! - `actual_vapor_pressure`, `dew_point_depression` and the unit converters
//!
//! ## Handling Example
//!
//! ```rust
//! use aerology_core::{FormulaError, humidity::lifting_condensation_level};
//!
//! match lifting_condensation_level(288.15, 293.15) {
//!     Ok(height) => println!("cloud base {height} m above station"),
//!     Err(FormulaError::DomainViolation { reason }) => println!("rejected: {reason}"),
//!     Err(other) => println!("unexpected: {other}"),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for formula evaluation
pub type FormulaResult<T> = Result<T, FormulaError>;

/// Formula errors - kept small and `Copy`
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum FormulaError {
    /// Input outside the range the formula is defined on
    #[error("Value {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// The rejected input
        value: f64,
        /// Lowest accepted value
        min: f64,
        /// Highest accepted value
        max: f64,
    },

    /// Quantity that cannot be negative was negative
    #[error("{quantity} cannot be negative (got {value})")]
    Negative {
        /// Human readable name of the quantity
        quantity: &'static str,
        /// The rejected input
        value: f64,
    },

    /// Inputs are individually valid but physically inconsistent
    #[error("Domain violation: {reason}")]
    DomainViolation {
        /// Which physical constraint failed
        reason: &'static str,
    },

    /// Value makes no numerical sense (NaN, infinity)
    #[error("Invalid value: not a valid number")]
    InvalidValue,

    /// Too few samples for a statistical fit
    #[error("Insufficient data: need {required}, have {available}")]
    InsufficientData {
        /// Minimum number of samples needed
        required: usize,
        /// Actual number of samples supplied
        available: usize,
    },

    /// Samples do not cover enough time for a statistical fit
    #[error("Insufficient span: need {required_hours} h, have {available_hours} h")]
    InsufficientSpan {
        /// Minimum time covered, in hours
        required_hours: f64,
        /// Time actually covered, in hours
        available_hours: f64,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for FormulaError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::OutOfRange { value, min, max } =>
                defmt::write!(fmt, "Value {} outside [{}, {}]", value, min, max),
            Self::Negative { quantity, value } =>
                defmt::write!(fmt, "{} negative: {}", quantity, value),
            Self::DomainViolation { reason } =>
                defmt::write!(fmt, "Domain: {}", reason),
            Self::InvalidValue =>
                defmt::write!(fmt, "Invalid value"),
            Self::InsufficientData { required, available } =>
                defmt::write!(fmt, "Need {} samples, have {}", required, available),
            Self::InsufficientSpan { required_hours, available_hours } =>
                defmt::write!(fmt, "Need {} h, have {} h", required_hours, available_hours),
        }
    }
}
