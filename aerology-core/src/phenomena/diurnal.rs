//! Diurnal Pressure Cycle
//!
//! ## Cosinor Model
//!
//! Surface pressure carries a daily tide. It is modelled as a single
//! 24-hour cosine:
//!
//! ```text
//! P(h) = mesor + amplitude · cos(ω · (h - acrophase))      ω = 2π/24
//! ```
//!
//! with `h` the UTC hour of day. Expanding the cosine gives a model linear
//! in three unknowns, `P = M + β·cos ωh + γ·sin ωh`, fitted by ordinary least
//! squares:
//!
//! ```text
//! ┌ n    Σc    Σs  ┐ ┌ M ┐   ┌ ΣP  ┐
//! │ Σc   Σcc   Σcs │ │ β │ = │ ΣcP │
//! └ Σs   Σcs   Σss ┘ └ γ ┘   └ ΣsP ┘
//! ```
//!
//! then `amplitude = √(β² + γ²)` and `acrophase = atan2(γ, β) / ω`.
//!
//! A fit needs at least three readings spread over at least one full day;
//! shorter series cannot separate the cycle from a trend.

#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeMap, vec::Vec};
#[cfg(feature = "std")]
use std::collections::BTreeMap;

use core::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    errors::{FormulaError, FormulaResult},
    reading::{sort_by_timestamp, Reading},
    time::{hours_between, month_of, Timestamp, MS_PER_HOUR},
};

/// Period of the fitted cycle (hours)
pub const DIURNAL_PERIOD_HOURS: f64 = 24.0;

/// Fewest readings accepted by [`fit_cosinor_model`]
pub const MIN_COSINOR_SAMPLES: usize = 3;

/// Default number of extremes kept by [`detect_prominent_extremes`]
pub const DEFAULT_EXTREME_COUNT: usize = 2;

const OMEGA: f64 = 2.0 * PI / DIURNAL_PERIOD_HOURS;
const MS_PER_DAY: Timestamp = 86_400_000;

/// Fitted daily pressure cycle
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CosinorParameters {
    /// Mean level (Pa)
    pub mesor: f64,
    /// Half the peak-to-trough swing (Pa)
    pub amplitude: f64,
    /// UTC hour of the daily maximum, in [0, 24)
    pub acrophase: f64,
}

fn utc_hour(timestamp: Timestamp) -> f64 {
    (timestamp % MS_PER_DAY) as f64 / MS_PER_HOUR
}

fn determinant(m: &[[f64; 3]; 3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1]) - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// Cramer's rule for a 3×3 system; `None` when singular.
fn solve3(matrix: [[f64; 3]; 3], rhs: [f64; 3]) -> Option<[f64; 3]> {
    let det = determinant(&matrix);
    if libm::fabs(det) < 1e-9 * libm::fabs(matrix[0][0]) {
        return None;
    }

    let mut solution = [0.0; 3];
    for (column, value) in solution.iter_mut().enumerate() {
        let mut replaced = matrix;
        for (row, b) in rhs.iter().enumerate() {
            replaced[row][column] = *b;
        }
        *value = determinant(&replaced) / det;
    }
    Some(solution)
}

/// Least-squares fit of the 24-hour pressure cycle.
///
/// Fails with fewer than three readings, with less than a day between the
/// oldest and newest reading, or when every reading falls at the same hour of
/// day.
pub fn fit_cosinor_model(readings: &[Reading]) -> FormulaResult<CosinorParameters> {
    if readings.len() < MIN_COSINOR_SAMPLES {
        return Err(FormulaError::InsufficientData {
            required: MIN_COSINOR_SAMPLES,
            available: readings.len(),
        });
    }

    let (oldest, newest) = readings
        .iter()
        .fold((Timestamp::MAX, Timestamp::MIN), |(lo, hi), r| (lo.min(r.timestamp), hi.max(r.timestamp)));
    let span = hours_between(oldest, newest);
    if span < DIURNAL_PERIOD_HOURS {
        log_warn!("cosinor fit refused: readings span {} h", span);
        return Err(FormulaError::InsufficientSpan {
            required_hours: DIURNAL_PERIOD_HOURS,
            available_hours: span,
        });
    }

    let mut normal = [[0.0; 3]; 3];
    let mut rhs = [0.0; 3];
    for reading in readings {
        let angle = OMEGA * utc_hour(reading.timestamp);
        let basis = [1.0, libm::cos(angle), libm::sin(angle)];
        for (i, bi) in basis.iter().enumerate() {
            for (j, bj) in basis.iter().enumerate() {
                normal[i][j] += bi * bj;
            }
            rhs[i] += bi * reading.pressure;
        }
    }

    let [mesor, beta, gamma] = solve3(normal, rhs).ok_or(FormulaError::DomainViolation {
        reason: "Readings do not cover enough hours of the day.",
    })?;

    let acrophase = libm::atan2(gamma, beta) / OMEGA;
    Ok(CosinorParameters {
        mesor,
        amplitude: libm::sqrt(beta * beta + gamma * gamma),
        acrophase: (acrophase + DIURNAL_PERIOD_HOURS) % DIURNAL_PERIOD_HOURS,
    })
}

/// Modelled pressure (Pa) at a UTC hour of day.
pub fn evaluate_diurnal_at_hour(hour: f64, parameters: &CosinorParameters) -> f64 {
    parameters.mesor + parameters.amplitude * libm::cos(OMEGA * (hour - parameters.acrophase))
}

/// Strict local pressure maxima and minima of a series
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extremes {
    /// Highest local maxima, highest first
    pub peaks: Vec<Reading>,
    /// Lowest local minima, lowest first
    pub valleys: Vec<Reading>,
}

/// The `top_n` most pronounced pressure peaks and valleys.
///
/// Readings are taken in time order; the first and last reading are never
/// extremes.
pub fn detect_prominent_extremes(readings: &[Reading], top_n: usize) -> Extremes {
    let sorted = sort_by_timestamp(readings);
    let mut extremes = Extremes::default();

    for window in sorted.windows(3) {
        let (prev, curr, next) = (window[0].pressure, window[1].pressure, window[2].pressure);
        if curr > prev && curr > next {
            extremes.peaks.push(window[1]);
        } else if curr < prev && curr < next {
            extremes.valleys.push(window[1]);
        }
    }

    extremes.peaks.sort_by(|a, b| b.pressure.total_cmp(&a.pressure));
    extremes.valleys.sort_by(|a, b| a.pressure.total_cmp(&b.pressure));
    extremes.peaks.truncate(top_n);
    extremes.valleys.truncate(top_n);
    extremes
}

/// Readings keyed by UTC month (0 = January), input order kept per month.
pub fn group_readings_by_month(readings: &[Reading]) -> BTreeMap<u32, Vec<Reading>> {
    let mut grouped: BTreeMap<u32, Vec<Reading>> = BTreeMap::new();
    for reading in readings {
        match month_of(reading.timestamp) {
            Some(month) => grouped.entry(month).or_default().push(*reading),
            None => log_debug!("skipping reading with out-of-range timestamp {}", reading.timestamp),
        }
    }
    grouped
}
