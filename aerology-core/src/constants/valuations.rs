//! Dew Point Regression Coefficients
//!
//! The Magnus and Arden Buck approximations of the saturation curve share one
//! algebraic shape and differ only in their fitted coefficients. Each named
//! set below is accurate over its own temperature range:
//!
//! ```text
//! Set              | Range          | Error
//! -----------------|----------------|-----------------
//! DAVID_BOLTON     | -30 .. 35 °C   | ≤ 0.1 %
//! SONNTAG1990      | -45 .. 60 °C   | ±0.35 °C
//! PAROSCIENTIFIC   |   0 .. 60 °C   | ±0.4 °C
//! ARDENBUCK_PLUS   |   0 .. 50 °C   | ≤ 0.05 %
//! ARDENBUCK_MINUS  | -40 .. 0 °C    | ≤ 0.06 %
//! ```
//!
//! When a caller does not pick a set, [`valuation_for_temperature`] picks
//! the most accurate set for the air temperature:
//!
//! ```text
//! T < -30 °C          SONNTAG1990
//! -30 °C ≤ T ≤ 35 °C  DAVID_BOLTON
//! 35 °C < T ≤ 60 °C   PAROSCIENTIFIC
//! T > 60 °C           SONNTAG1990 (widest documented range)
//! ```

use crate::lookup::{Band, BandTable};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Coefficient tuple of a dew point regression.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValuationSet {
    /// Saturation vapor pressure at 0 °C (hPa)
    pub a: f64,
    /// Dimensionless slope constant
    pub b: f64,
    /// Temperature offset (°C)
    pub c: f64,
    /// Arden Buck curvature temperature (°C)
    pub d: f64,
}

impl ValuationSet {
    /// Build a custom set
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }
}

/// Arden Buck (1981) general-purpose set.
pub const ARDENBUCK_DEFAULT: ValuationSet = ValuationSet::new(6.1121, 18.678, 257.14, 234.5);
/// Bolton (1980) set.
pub const DAVID_BOLTON: ValuationSet = ValuationSet::new(6.112, 17.67, 234.5, 234.5);
/// Sonntag (1990) set.
pub const SONNTAG1990: ValuationSet = ValuationSet::new(6.112, 17.62, 243.12, 234.5);
/// Paroscientific application note set.
pub const PAROSCIENTIFIC: ValuationSet = ValuationSet::new(6.105, 17.27, 237.7, 234.5);
/// Arden Buck set for temperatures above freezing.
pub const ARDENBUCK_PLUS: ValuationSet = ValuationSet::new(6.1121, 17.368, 238.88, 234.5);
/// Arden Buck set for temperatures below freezing.
pub const ARDENBUCK_MINUS: ValuationSet = ValuationSet::new(6.1121, 17.966, 247.15, 234.5);

/// Every named set, for iteration and display.
pub const DEW_POINT_VALUATIONS: [(&str, ValuationSet); 6] = [
    ("ARDENBUCK_DEFAULT", ARDENBUCK_DEFAULT),
    ("DAVID_BOLTON", DAVID_BOLTON),
    ("SONNTAG1990", SONNTAG1990),
    ("PAROSCIENTIFIC", PAROSCIENTIFIC),
    ("ARDENBUCK_PLUS", ARDENBUCK_PLUS),
    ("ARDENBUCK_MINUS", ARDENBUCK_MINUS),
];

/// Temperature range (°C) served by one valuation set.
#[derive(Debug, Clone, Copy)]
pub struct ValuationRange {
    /// Inclusive lower bound (°C)
    pub min_c: f64,
    /// Inclusive upper bound (°C)
    pub max_c: f64,
    /// Set applied inside the range
    pub set: ValuationSet,
}

impl Band for ValuationRange {
    fn lower(&self) -> f64 {
        self.min_c
    }

    fn upper(&self) -> f64 {
        self.max_c
    }
}

/// Breakpoint table, searched in order. The last entry catches everything.
pub const VALUATION_RANGES: BandTable<ValuationRange> = BandTable::new(
    "dew point valuation",
    &[
        ValuationRange { min_c: -30.0, max_c: 35.0, set: DAVID_BOLTON },
        ValuationRange { min_c: 35.0, max_c: 60.0, set: PAROSCIENTIFIC },
        ValuationRange { min_c: f64::NEG_INFINITY, max_c: f64::INFINITY, set: SONNTAG1990 },
    ],
);

/// Pick the valuation set for an air temperature in °C.
pub fn valuation_for_temperature(temperature_c: f64) -> ValuationSet {
    VALUATION_RANGES.find_or_first(temperature_c).set
}

/// Coefficients of a Magnus-form saturation vapor pressure curve
/// `e_s = reference_pressure · exp(b·T / (c + T))`, T in °C.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MagnusCoefficients {
    /// Saturation vapor pressure at 0 °C (Pa)
    pub reference_pressure: f64,
    /// Dimensionless slope constant
    pub b: f64,
    /// Temperature offset (°C)
    pub c: f64,
}

impl MagnusCoefficients {
    /// Sonntag (1990), the default for saturation vapor pressure.
    pub const SONNTAG: Self = Self { reference_pressure: 611.2, b: 17.62, c: 243.12 };

    /// Bolton (1980), used for plain vapor pressure.
    pub const BOLTON: Self = Self { reference_pressure: 611.2, b: 17.67, c: 243.5 };

    /// August-Roche-Magnus (Alduchov and Eskridge 1996).
    pub const ALDUCHOV_ESKRIDGE: Self = Self { reference_pressure: 610.94, b: 17.625, c: 243.04 };
}

impl Default for MagnusCoefficients {
    fn default() -> Self {
        Self::SONNTAG
    }
}
