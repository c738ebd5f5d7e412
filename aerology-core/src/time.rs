//! Time handling for reading series
//!
//! Window-based helpers (dynamic lapse rate, weighted average temperature,
//! fog trends) need a notion of "now". Rather than read the wall clock deep
//! inside a formula, they take a [`WindowAnchor`] which callers resolve from
//! a [`TimeSource`]:
//! - System clock (when `std` is available)
//! - Fixed clock (tests, replaying archived data)
//! - The newest reading itself

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Timestamp in milliseconds since the Unix epoch
pub type Timestamp = u64;

/// Milliseconds in one hour
pub const MS_PER_HOUR: f64 = 3_600_000.0;

/// Source of time for window anchoring
pub trait TimeSource {
    /// Get current timestamp in milliseconds
    fn now(&self) -> Timestamp;
}

/// System time source (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTime;

#[cfg(feature = "std")]
impl TimeSource for SystemTime {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime as StdSystemTime, UNIX_EPOCH};

        StdSystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }
}

/// Fixed time source for testing and replay
#[derive(Debug, Clone, Copy)]
pub struct FixedTime {
    timestamp: Timestamp,
}

impl FixedTime {
    /// Clock frozen at `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Move the clock to `timestamp`
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Move the clock forward by `ms`
    pub fn advance(&mut self, ms: u64) {
        self.timestamp = self.timestamp.saturating_add(ms);
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp
    }
}

/// End point of a look-back window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowAnchor {
    /// Window ends at this instant
    At(Timestamp),
    /// Window ends at the newest reading in the series
    LastReading,
}

impl WindowAnchor {
    /// Anchor at the current time of `source`
    pub fn from_source<S: TimeSource + ?Sized>(source: &S) -> Self {
        Self::At(source.now())
    }

    /// Anchor at the system clock
    #[cfg(feature = "std")]
    pub fn now() -> Self {
        Self::from_source(&SystemTime)
    }
}

/// Convert an hour count into whole milliseconds, saturating at zero.
pub fn hours_to_ms(hours: f64) -> u64 {
    if hours.is_nan() || hours <= 0.0 {
        0
    } else {
        libm::round(hours * MS_PER_HOUR) as u64
    }
}

/// Elapsed hours from `earlier` to `later` (negative when reversed).
pub fn hours_between(earlier: Timestamp, later: Timestamp) -> f64 {
    (later as f64 - earlier as f64) / MS_PER_HOUR
}

/// Calendar view of a timestamp, UTC.
pub(crate) fn utc_datetime(timestamp: Timestamp) -> Option<DateTime<Utc>> {
    let millis = i64::try_from(timestamp).ok()?;
    DateTime::from_timestamp_millis(millis)
}

/// Zero-based month (0 = January) of a timestamp, UTC.
pub fn month_of(timestamp: Timestamp) -> Option<u32> {
    utc_datetime(timestamp).map(|dt| dt.month0())
}

/// Day of year (1-366) and fractional UTC hour of a timestamp.
pub fn day_and_hour_of(timestamp: Timestamp) -> Option<(u32, f64)> {
    utc_datetime(timestamp).map(|dt| {
        let hour = dt.hour() as f64
            + dt.minute() as f64 / 60.0
            + dt.second() as f64 / 3600.0;
        (dt.ordinal(), hour)
    })
}
