//! Ordered Band Tables for Categorical Lookups
//!
//! ## Motivation
//!
//! Many meteorological quantities are reported as categories rather than
//! numbers: Beaufort force, Saffir-Simpson category, UV index risk, heat
//! stress warnings. Each of these is a short, sorted list of closed
//! intervals, and every one of them is resolved the same way: walk the list
//! and return the first band whose interval contains the value.
//!
//! Keeping that walk in one place means each scale only declares data.
//!
//! ## Table Layout
//!
//! ```text
//! Band      | lower | upper | payload
//! ----------|-------|-------|---------------------
//! force 3   |  3.4  |  5.4  | "Gentle Breeze"
//! force 4   |  5.5  |  7.9  | "Moderate Breeze"
//! ```
//!
//! Intervals are closed on both ends. Gaps between bands are allowed and
//! intentional for scales reported at fixed precision (Beaufort bands are
//! defined at 0.1 m/s steps and the caller rounds first).
//!
//! Threshold tables ("at least 40 °C means Danger") are bands whose upper
//! bound is `f64::INFINITY`, listed from the highest threshold down so the
//! first match is the most severe one.
//!
//! ## Memory
//!
//! Tables are `&'static` slices built in `const` context; lookups do not
//! allocate and return `&'static` references into the table.

/// A closed interval `[lower, upper]` carrying a payload.
pub trait Band {
    /// Inclusive lower bound
    fn lower(&self) -> f64;

    /// Inclusive upper bound
    fn upper(&self) -> f64;

    /// Whether `value` lies inside the band
    fn contains(&self, value: f64) -> bool {
        value >= self.lower() && value <= self.upper()
    }
}

/// Ordered, immutable list of bands searched front to back.
#[derive(Debug, Clone, Copy)]
pub struct BandTable<B: 'static> {
    name: &'static str,
    bands: &'static [B],
}

impl<B: Band> BandTable<B> {
    /// Build a table. Panics at compile time when `bands` is empty.
    pub const fn new(name: &'static str, bands: &'static [B]) -> Self {
        assert!(!bands.is_empty(), "band table must not be empty");
        Self { name, bands }
    }

    /// First band containing `value`, if any.
    ///
    /// NaN never matches.
    pub fn find(&self, value: f64) -> Option<&'static B> {
        self.bands.iter().find(|band| band.contains(value))
    }

    /// First band containing `value`, or the first band of the table.
    pub fn find_or_first(&self, value: f64) -> &'static B {
        match self.find(value) {
            Some(band) => band,
            None => {
                log_warn!("{}: no band contains {}, using first band", self.name, value);
                &self.bands[0]
            }
        }
    }

    /// All bands in search order
    pub fn bands(&self) -> &'static [B] {
        self.bands
    }

    /// Table name used in log output
    pub fn name(&self) -> &'static str {
        self.name
    }
}
