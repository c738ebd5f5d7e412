//! Atmospheric formulas for weather stations and flight tools
//!
//! Converts between meteorological quantities with the usual physical
//! relationships: saturation curves, dew point approximations, the
//! barometric and hypsometric equations, perceived-temperature regressions
//! and categorical wind scales.
//!
//! Key properties:
//! - Pure functions: no state, no I/O
//! - SI units throughout (K, Pa, m, m/s); humidity in percent
//! - Works without `std` (enable `default-features = false`)
//!
//! ```
//! use aerology_core::{altitude::{altitude_from_pressure_difference, HumidityMode}, temperature};
//!
//! let dew_point = temperature::dew_point_magnus_formula(293.15, 60.0, None);
//! assert!(dew_point < 293.15);
//!
//! // Layer thickness between sea level and the 900 hPa surface
//! let humidity = HumidityMode::resolve(Some(60.0), None, None);
//! let height = altitude_from_pressure_difference(101_325.0, 90_000.0, 0.0, 288.15, humidity)?;
//! assert!(height > 1000.0);
//! # Ok::<(), aerology_core::FormulaError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[macro_use]
mod macros;

pub mod constants;
pub mod errors;
pub mod formulas;
pub mod indices;
pub mod lookup;
pub mod phenomena;
pub mod reading;
pub mod scales;
pub mod time;

// Public API
pub use errors::{FormulaError, FormulaResult};
pub use formulas::{air_density, altitude, humidity, pressure, temperature, wind};
pub use reading::Reading;
pub use time::{Timestamp, WindowAnchor};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
