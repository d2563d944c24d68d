//! Epoch-millisecond instants with civil-field views.
//!
//! [`Instant`] is the absolute-point-in-time value the rest of the crate
//! operates on: a count of milliseconds since 1970-01-01T00:00:00Z. Civil
//! fields (year, month, day, hour, minute, ...) are read through the
//! [`Instant::datetime_utc`] and [`Instant::datetime_local`] views rather
//! than stored.
//!
//! The underlying integer has no "invalid timestamp" concept, so the crate
//! defines one explicitly: [`Instant::INVALID`], a dedicated sentinel
//! produced by failed parses and out-of-range arithmetic. The sentinel is
//! equal to itself, orders before every valid instant, has no civil views,
//! and renders as `invalid`.

use std::fmt;

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Milliseconds either side of the epoch an [`Instant`] can represent
/// (100,000,000 days).
pub const MAX_EPOCH_MILLIS: i64 = 8_640_000_000_000_000;

/// An absolute point in time with millisecond resolution.
///
/// Ordering and equality follow the raw millisecond value, so instants sort
/// chronologically and [`Instant::INVALID`] sorts before every valid one.
/// Serializes transparently as the raw millisecond count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Instant(i64);

impl Instant {
    /// The invalid-timestamp sentinel.
    pub const INVALID: Instant = Instant(i64::MIN);

    /// Builds an instant from epoch milliseconds.
    ///
    /// Values outside `±`[`MAX_EPOCH_MILLIS`] yield [`Instant::INVALID`].
    pub fn from_millis(millis: i64) -> Instant {
        if (-MAX_EPOCH_MILLIS..=MAX_EPOCH_MILLIS).contains(&millis) {
            Instant(millis)
        } else {
            Instant::INVALID
        }
    }

    /// Builds an instant from a possibly fractional epoch-millisecond count.
    ///
    /// Fractional milliseconds truncate toward zero; non-finite or
    /// out-of-range values yield [`Instant::INVALID`].
    pub fn from_millis_f64(millis: f64) -> Instant {
        if !millis.is_finite() {
            return Instant::INVALID;
        }
        let truncated = millis.trunc();
        if truncated.abs() > MAX_EPOCH_MILLIS as f64 {
            return Instant::INVALID;
        }
        Instant(truncated as i64)
    }

    /// Builds an instant from any chrono datetime.
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Instant {
        Instant::from_millis(datetime.timestamp_millis())
    }

    /// The raw epoch-millisecond value; the invalid sentinel reports
    /// `i64::MIN`.
    pub fn epoch_millis(&self) -> i64 {
        self.0
    }

    /// False only for [`Instant::INVALID`].
    pub fn is_valid(&self) -> bool {
        self.0 != i64::MIN
    }

    /// The UTC civil view, or `None` for the invalid sentinel and for
    /// instants beyond chrono's civil-field range.
    pub fn datetime_utc(&self) -> Option<DateTime<Utc>> {
        if !self.is_valid() {
            return None;
        }
        Utc.timestamp_millis_opt(self.0).single()
    }

    /// The civil view in the ambient local timezone, under the same rules as
    /// [`Instant::datetime_utc`].
    pub fn datetime_local(&self) -> Option<DateTime<Local>> {
        if !self.is_valid() {
            return None;
        }
        Local.timestamp_millis_opt(self.0).single()
    }

    /// ISO-8601 rendering in UTC (`YYYY-MM-DDTHH:MM:SS.mmmZ`, year padded to
    /// four digits), or `None` when no civil view exists.
    pub fn to_iso(&self) -> Option<String> {
        self.datetime_utc()
            .map(|dt| dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_iso() {
            Some(iso) => f.write_str(&iso),
            None => f.write_str("invalid"),
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
