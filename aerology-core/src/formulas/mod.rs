//! Physical formulas grouped by the quantity they produce.
//!
//! The modules depend on each other bottom-up:
//!
//! ```text
//! temperature ◄── humidity ◄── air_density ◄── wind
//!      ▲              ▲
//!      └── pressure   └── altitude
//! ```
//!
//! Temperatures are in kelvin, pressures in pascals, altitudes in metres and
//! relative humidity in percent unless a function says otherwise.

pub mod air_density;
pub mod altitude;
pub mod humidity;
pub mod pressure;
pub mod temperature;
pub mod utils;
pub mod wind;
