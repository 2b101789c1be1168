//! Day and night counts derived from the event date range.
//!
//! Counts are always derived from the start/end dates and clamped to the
//! supported event length; they are never stored independently.

use chrono::NaiveDate;

/// The longest supported event, in days.
pub const MAX_EVENT_DAYS: u32 = 15;

/// Returns the inclusive day count of the range, clamped to [1, 15].
///
/// A one-day event (same start and end date) counts as 1 day. Callers are
/// expected to validate `end >= start` first; reversed ranges clamp to the
/// minimum rather than panicking.
///
/// # Examples
///
/// ```
/// use quote_engine::calculation::day_count;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2026, 6, 12).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 6, 14).unwrap();
/// assert_eq!(day_count(start, end), 3);
/// ```
pub fn day_count(start: NaiveDate, end: NaiveDate) -> u32 {
    let days = (end - start).num_days() + 1;
    days.clamp(1, MAX_EVENT_DAYS as i64) as u32
}

/// Returns the night count of the range, clamped to [0, 15].
///
/// The night count is the whole-day difference: a 3-day event has 2 nights,
/// and a same-day event has 0 nights. It is deliberately distinct from
/// [`day_count`]; per-night pricing uses this value (with a minimum of one
/// night applied at quantity resolution, not here).
pub fn night_count(start: NaiveDate, end: NaiveDate) -> u32 {
    let nights = (end - start).num_days();
    nights.clamp(0, MAX_EVENT_DAYS as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    /// DC-001: 3-day span has 3 days and 2 nights
    #[test]
    fn test_three_day_span() {
        let start = make_date("2026-06-12");
        let end = make_date("2026-06-14");
        assert_eq!(day_count(start, end), 3);
        assert_eq!(night_count(start, end), 2);
    }

    /// DC-002: same-day event has 1 day and 0 nights
    #[test]
    fn test_same_day_event() {
        let date = make_date("2026-06-12");
        assert_eq!(day_count(date, date), 1);
        assert_eq!(night_count(date, date), 0);
    }

    /// DC-003: long ranges clamp to 15 days / 15 nights
    #[test]
    fn test_long_range_clamps() {
        let start = make_date("2026-06-01");
        let end = make_date("2026-07-20");
        assert_eq!(day_count(start, end), MAX_EVENT_DAYS);
        assert_eq!(night_count(start, end), MAX_EVENT_DAYS);
    }

    /// DC-004: reversed range clamps to the minimum instead of panicking
    #[test]
    fn test_reversed_range_clamps_to_minimum() {
        let start = make_date("2026-06-14");
        let end = make_date("2026-06-12");
        assert_eq!(day_count(start, end), 1);
        assert_eq!(night_count(start, end), 0);
    }

    /// DC-005: counts ignore month and year boundaries
    #[test]
    fn test_counts_across_month_boundary() {
        let start = make_date("2026-01-30");
        let end = make_date("2026-02-02");
        assert_eq!(day_count(start, end), 4);
        assert_eq!(night_count(start, end), 3);
    }

    #[test]
    fn test_night_count_never_exceeds_day_count() {
        let start = make_date("2026-06-01");
        for offset in 0..30 {
            let end = start + chrono::Days::new(offset);
            assert!(night_count(start, end) <= day_count(start, end));
        }
    }
}
