//! Unit constructors for millisecond durations.
//!
//! A duration here is nothing more than an `f64` count of milliseconds —
//! elapsed time, not anchored to any instant. Each constructor is defined in
//! terms of the next-smaller unit, so the conversion factors cannot drift
//! apart.

/// Milliseconds in `amount` seconds.
///
/// Accepts any finite amount, including fractional and negative values, and
/// returns a proportional (possibly negative) millisecond count. Never fails.
///
/// # Examples
///
/// ```
/// assert_eq!(chronokit::duration::seconds(1.0), 1000.0);
/// assert_eq!(chronokit::duration::seconds(-0.5), -500.0);
/// ```
pub fn seconds(amount: f64) -> f64 {
    amount * 1000.0
}

/// Milliseconds in `amount` minutes.
pub fn minutes(amount: f64) -> f64 {
    amount * 60.0 * seconds(1.0)
}

/// Milliseconds in `amount` hours.
pub fn hours(amount: f64) -> f64 {
    amount * 60.0 * minutes(1.0)
}

/// Milliseconds in `amount` days.
pub fn days(amount: f64) -> f64 {
    amount * 24.0 * hours(1.0)
}

/// Milliseconds in `amount` weeks.
pub fn weeks(amount: f64) -> f64 {
    amount * 7.0 * days(1.0)
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_seconds() {
        assert_eq!(seconds(1.0), 1000.0);
        assert_eq!(seconds(2.0), 2000.0);
    }

    #[test]
    fn test_minutes() {
        assert_eq!(minutes(1.0), 60_000.0);
        assert_eq!(minutes(2.0), 120_000.0);
    }

    #[test]
    fn test_hours() {
        assert_eq!(hours(1.0), 3_600_000.0);
        assert_eq!(hours(2.0), 7_200_000.0);
    }

    #[test]
    fn test_days() {
        assert_eq!(days(1.0), 86_400_000.0);
        assert_eq!(days(2.0), 172_800_000.0);
    }

    #[test]
    fn test_weeks() {
        assert_eq!(weeks(1.0), 604_800_000.0);
        assert_eq!(weeks(2.0), 1_209_600_000.0);
    }

    #[test]
    fn test_zero_amount_is_zero() {
        assert_eq!(seconds(0.0), 0.0);
        assert_eq!(weeks(0.0), 0.0);
    }

    #[test]
    fn test_negative_amounts_are_proportional() {
        assert_eq!(seconds(-2.0), -2000.0);
        assert_eq!(days(-1.0), -86_400_000.0);
    }

    #[test]
    fn test_fractional_amounts() {
        assert_eq!(seconds(0.5), 500.0);
        assert_eq!(minutes(1.5), 90_000.0);
        assert_eq!(hours(0.25), 900_000.0);
    }

    proptest! {
        #[test]
        fn prop_unit_chain_is_exact(n in -1.0e9f64..1.0e9) {
            prop_assert_eq!(minutes(n), n * 60.0 * seconds(1.0));
            prop_assert_eq!(hours(n), n * 60.0 * minutes(1.0));
            prop_assert_eq!(days(n), n * 24.0 * hours(1.0));
            prop_assert_eq!(weeks(n), n * 7.0 * days(1.0));
        }
    }
}
