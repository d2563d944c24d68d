//! Calendar arithmetic, formatting, parsing, and truncation over
//! [`Instant`]s.
//!
//! Every function in this module is a pure computation over its value
//! inputs; the single exception is [`now`], which samples the
//! [`SystemClock`]. Durations are plain millisecond counts — build them with
//! the re-exported unit constructors ([`seconds`] through [`weeks`]) so all
//! callers share one namespace.
//!
//! # Functions
//!
//! - [`now`] — current instant from the system clock
//! - [`add`] — shift an instant by a millisecond duration
//! - [`add_months`] / [`add_years`] — civil-calendar field arithmetic
//! - [`compare`] / [`before`] / [`after`] — chronological ordering
//! - [`format`] — render civil fields in a fixed layout set
//! - [`parse`] — ISO-8601 text to an instant
//! - [`truncate`] — round an instant down to a multiple of a duration

use chrono::{
    DateTime, Datelike, Local, Months, NaiveDate, NaiveDateTime, TimeZone, Timelike,
};

use crate::clock::{Clock, SystemClock};
use crate::instant::Instant;

pub use crate::duration::{days, hours, minutes, seconds, weeks};

/// Day-month-year layout (`"dd/MM/yyyy"`), the default for [`format`].
pub const LAYOUT_DATE: &str = "dd/MM/yyyy";

/// Hour-minute layout (`"HH:mm"`).
pub const LAYOUT_TIME: &str = "HH:mm";

// ── now ─────────────────────────────────────────────────────────────────────

/// Returns the current instant as read from the system clock.
///
/// This is the only clock read in the crate. Callers that need a
/// deterministic "now" implement [`Clock`] and call their own provider;
/// every other function here takes explicit instants.
pub fn now() -> Instant {
    SystemClock.now()
}

// ── add ─────────────────────────────────────────────────────────────────────

/// Shifts an instant by a duration in milliseconds.
///
/// Pure epoch-millisecond addition with no calendar-aware adjustment; a
/// negative duration subtracts. Fractional milliseconds truncate toward
/// zero, and a result outside the representable range is
/// [`Instant::INVALID`], as is the result for an invalid input.
///
/// # Examples
///
/// ```
/// use chronokit::time;
///
/// let start = time::parse("2024-01-01T00:00:00.000Z");
/// let end = time::add(start, time::hours(10.0));
/// assert_eq!(end.to_iso().as_deref(), Some("2024-01-01T10:00:00.000Z"));
/// ```
pub fn add(instant: Instant, duration_ms: f64) -> Instant {
    if !instant.is_valid() {
        return instant;
    }
    Instant::from_millis_f64(instant.epoch_millis() as f64 + duration_ms)
}

// ── add_months / add_years ──────────────────────────────────────────────────

/// Adds a number of months to the instant's UTC civil representation.
///
/// Day-of-month normalization follows chrono's civil-date increment: a
/// day-of-month past the end of the target month clamps to that month's last
/// day (2024-01-31 plus one month is 2024-02-29). A negative amount
/// subtracts; zero returns the instant unchanged. An instant with no civil
/// view yields [`Instant::INVALID`].
pub fn add_months(instant: Instant, amount: i32) -> Instant {
    shift_months(instant, amount)
}

/// Adds a number of years to the instant's UTC civil representation.
///
/// Same normalization contract as [`add_months`]; Feb 29 clamps to Feb 28
/// when the target year is not a leap year.
pub fn add_years(instant: Instant, amount: i32) -> Instant {
    match amount.checked_mul(12) {
        Some(months) => shift_months(instant, months),
        None => Instant::INVALID,
    }
}

fn shift_months(instant: Instant, months: i32) -> Instant {
    let Some(dt) = instant.datetime_utc() else {
        return Instant::INVALID;
    };
    let shifted = if months >= 0 {
        dt.checked_add_months(Months::new(months as u32))
    } else {
        dt.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.map_or(Instant::INVALID, |dt| Instant::from_datetime(&dt))
}

// ── compare / before / after ────────────────────────────────────────────────

/// Compares two instants chronologically.
///
/// Returns the saturating difference of the epoch-millisecond values:
/// negative when `a` precedes `b`, zero when both denote the same
/// millisecond, positive when `a` follows `b`. This is a total order; the
/// invalid sentinel orders before every valid instant.
pub fn compare(a: Instant, b: Instant) -> i64 {
    a.epoch_millis().saturating_sub(b.epoch_millis())
}

/// True when `a` is strictly before `b`.
pub fn before(a: Instant, b: Instant) -> bool {
    compare(a, b) < 0
}

/// True when `a` is strictly after `b`; equal instants are neither before
/// nor after.
pub fn after(a: Instant, b: Instant) -> bool {
    compare(a, b) > 0
}

// ── format ──────────────────────────────────────────────────────────────────

/// Renders an instant's civil fields in one of two fixed layouts.
///
/// [`LAYOUT_DATE`] (`"dd/MM/yyyy"`) renders zero-padded day and month with a
/// four-digit year; [`LAYOUT_TIME`] (`"HH:mm"`) renders a zero-padded
/// 24-hour clock. Any other layout string falls back to the date layout
/// rather than failing. `use_utc` selects the UTC civil view over the
/// ambient local one. An instant with no civil view renders as `"invalid"`.
///
/// # Examples
///
/// ```
/// use chronokit::time;
///
/// let x = time::parse("2024-01-02T00:00:00Z");
/// assert_eq!(time::format(x, time::LAYOUT_DATE, true), "02/01/2024");
///
/// let y = time::parse("2024-01-01T13:05:00Z");
/// assert_eq!(time::format(y, time::LAYOUT_TIME, true), "13:05");
/// ```
pub fn format(instant: Instant, layout: &str, use_utc: bool) -> String {
    let fields = if use_utc {
        instant.datetime_utc().map(|dt| civil_fields(&dt))
    } else {
        instant.datetime_local().map(|dt| civil_fields(&dt))
    };
    let Some((year, month, day, hour, minute)) = fields else {
        return "invalid".to_string();
    };
    match layout {
        LAYOUT_TIME => format!("{hour:02}:{minute:02}"),
        _ => format!("{day:02}/{month:02}/{year:04}"),
    }
}

/// (year, month, day, hour, minute) of a civil view.
fn civil_fields<Tz: TimeZone>(dt: &DateTime<Tz>) -> (i32, u32, u32, u32, u32) {
    (dt.year(), dt.month(), dt.day(), dt.hour(), dt.minute())
}

// ── parse ───────────────────────────────────────────────────────────────────

/// Parses an ISO-8601 string into an [`Instant`].
///
/// Accepted shapes, tried in order:
///
/// - RFC 3339 with `Z` or a numeric offset (`"2024-01-01T00:00:00.000Z"`)
/// - datetime without offset, interpreted as local civil time
///   (`"2024-01-01T13:05:00"`); an ambiguous or nonexistent local time falls
///   back to the UTC interpretation
/// - date only, interpreted as UTC midnight (`"2024-01-01"`)
///
/// Malformed input yields [`Instant::INVALID`] rather than an error; callers
/// validate the result with [`Instant::is_valid`].
pub fn parse(text: &str) -> Instant {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Instant::from_datetime(&dt);
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
            let local = Local
                .from_local_datetime(&naive)
                .single()
                .unwrap_or_else(|| Local.from_utc_datetime(&naive));
            return Instant::from_datetime(&local);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Instant::from_datetime(&naive.and_utc());
        }
    }

    Instant::INVALID
}

// ── truncate ────────────────────────────────────────────────────────────────

/// Rounds an instant down to the nearest multiple of `duration_ms` counted
/// from the epoch.
///
/// The general rule is `truncated = ms - (ms % duration_ms)`, with `%`
/// taking the dividend's sign. A non-positive duration returns the instant
/// unchanged, as does an invalid input. Two exact duration values re-base
/// the civil result after the modulo step:
///
/// - exactly 60 minutes: the UTC year/month/day are reset to year 1,
///   January 1, keeping the truncated time-of-day
/// - exactly 24 hours: the UTC time-of-day is reset to 00:00:00.000,
///   leaving a clean UTC midnight for that day
///
/// Every other duration applies the raw modulo subtraction only.
///
/// # Examples
///
/// ```
/// use chronokit::time;
///
/// let x = time::parse("2024-02-03T01:10:00.000Z");
/// let hour = time::truncate(x, time::minutes(60.0));
/// assert_eq!(hour.to_iso().as_deref(), Some("0001-01-01T01:00:00.000Z"));
///
/// let day = time::truncate(x, time::hours(24.0));
/// assert_eq!(day.to_iso().as_deref(), Some("2024-02-03T00:00:00.000Z"));
/// ```
pub fn truncate(instant: Instant, duration_ms: f64) -> Instant {
    if !instant.is_valid() || duration_ms <= 0.0 {
        return instant;
    }
    let ms = instant.epoch_millis() as f64;
    let truncated = Instant::from_millis_f64(ms - (ms % duration_ms));

    // Exact literal matches only; nearby durations do not re-base.
    if duration_ms == minutes(60.0) {
        rebase_to_year_one(truncated)
    } else if duration_ms == days(1.0) {
        rebase_to_utc_midnight(truncated)
    } else {
        truncated
    }
}

/// Rewrites the UTC date to 0001-01-01, keeping the time-of-day.
fn rebase_to_year_one(instant: Instant) -> Instant {
    let Some(dt) = instant.datetime_utc() else {
        return instant;
    };
    NaiveDate::from_ymd_opt(1, 1, 1)
        .map(|date| Instant::from_datetime(&date.and_time(dt.time()).and_utc()))
        .unwrap_or(instant)
}

/// Rewrites the UTC time-of-day to 00:00:00.000, keeping the date.
fn rebase_to_utc_midnight(instant: Instant) -> Instant {
    let Some(dt) = instant.datetime_utc() else {
        return instant;
    };
    dt.date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|naive| Instant::from_datetime(&naive.and_utc()))
        .unwrap_or(instant)
}

// ── Tests ───────────────────────────────────────────────────────────────────
