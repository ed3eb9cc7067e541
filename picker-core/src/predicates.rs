//! # Date Predicate Engine
//!
//! Answers the per-day questions every widget asks while building its grid:
//! is the day selectable, does a custom entry apply, is it part of the
//! committed range or of the hover preview.

use chrono::Datelike;
use shared::{CalendarDate, CustomDayEntry};

use crate::config::PickerConfig;

/// Compare year, month and day only; any time-of-day component is ignored
pub fn is_same_day<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

/// First custom entry for `date`, in list order
pub fn find_custom_day<'a>(date: CalendarDate, entries: &'a [CustomDayEntry]) -> Option<&'a CustomDayEntry> {
    entries.iter().find(|entry| is_same_day(&entry.date, &date))
}

/// A day is disabled when it falls outside `[min_date, max_date]` or its
/// custom entry forces it off. Both bounds are inclusive.
pub fn is_disabled(date: CalendarDate, config: &PickerConfig) -> bool {
    if config.min_date.is_some_and(|min| date < min) {
        return true;
    }
    if config.max_date.is_some_and(|max| date > max) {
        return true;
    }
    find_custom_day(date, &config.custom_days).is_some_and(|entry| entry.disabled)
}

/// Membership in a committed range; needs both endpoints
pub fn in_range(date: CalendarDate, start: Option<CalendarDate>, end: Option<CalendarDate>) -> bool {
    match (start, end) {
        (Some(start), Some(end)) => start <= date && date <= end,
        _ => false,
    }
}

/// Membership in the hover preview.
///
/// Only defined while the anchor is committed, the end is not, and a hover
/// date exists. Hovering before the anchor previews the reversed span.
pub fn in_hover_range(
    date: CalendarDate,
    anchor: Option<CalendarDate>,
    end: Option<CalendarDate>,
    hover: Option<CalendarDate>,
) -> bool {
    match (anchor, end, hover) {
        (Some(anchor), None, Some(hover)) => {
            let low = anchor.min(hover);
            let high = anchor.max(hover);
            low <= date && date <= high
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bounded_config() -> PickerConfig {
        PickerConfig::default().with_bounds(Some(date(2024, 1, 10)), Some(date(2024, 1, 20)))
    }

    #[test]
    fn test_is_same_day_ignores_time() {
        let morning = date(2024, 1, 15).and_hms_opt(10, 0, 0).unwrap();
        let evening = date(2024, 1, 15).and_hms_opt(15, 0, 0).unwrap();
        let day = date(2024, 1, 15);

        assert!(is_same_day(&morning, &evening));
        assert!(is_same_day(&morning, &day));
        assert!(is_same_day(&day, &morning));
        assert!(is_same_day(&day, &day));
        assert!(!is_same_day(&day, &date(2024, 1, 16)));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let config = bounded_config();
        assert!(!is_disabled(date(2024, 1, 10), &config));
        assert!(!is_disabled(date(2024, 1, 15), &config));
        assert!(!is_disabled(date(2024, 1, 20), &config));
        assert!(is_disabled(date(2024, 1, 9), &config));
        assert!(is_disabled(date(2024, 1, 21), &config));
    }

    #[test]
    fn test_min_bound_with_time_keeps_its_own_day() {
        let min = date(2024, 1, 10).and_hms_opt(18, 45, 0).unwrap();
        let config = PickerConfig::default().with_min_datetime(min);
        assert!(!is_disabled(date(2024, 1, 10), &config));
        assert!(is_disabled(date(2024, 1, 9), &config));
    }

    #[test]
    fn test_max_bound_with_time_keeps_its_own_day() {
        let max = date(2024, 1, 20).and_hms_opt(0, 5, 0).unwrap();
        let config = PickerConfig::default().with_max_datetime(max);
        assert_eq!(config.max_date, Some(date(2024, 1, 20)));
        assert!(!is_disabled(date(2024, 1, 20), &config));
        assert!(!is_disabled(date(2024, 1, 19), &config));
        assert!(is_disabled(date(2024, 1, 21), &config));
    }

    #[test]
    fn test_inverted_bounds_disable_everything() {
        let config = PickerConfig::default().with_bounds(Some(date(2024, 2, 1)), Some(date(2024, 1, 1)));
        assert!(is_disabled(date(2024, 1, 15), &config));
        assert!(is_disabled(date(2024, 2, 1), &config));
        assert!(is_disabled(date(2024, 1, 1), &config));
    }

    #[test]
    fn test_custom_day_can_disable_and_first_match_wins() {
        let config = PickerConfig::default().with_custom_days(vec![
            CustomDayEntry::new(date(2024, 1, 12)).with_label("$140"),
            CustomDayEntry::new(date(2024, 1, 13)).disabled(),
            CustomDayEntry::new(date(2024, 1, 12)).disabled(),
        ]);

        assert!(!is_disabled(date(2024, 1, 12), &config));
        assert!(is_disabled(date(2024, 1, 13), &config));

        let found = find_custom_day(date(2024, 1, 12), &config.custom_days).unwrap();
        assert_eq!(found.label.as_deref(), Some("$140"));
        assert!(find_custom_day(date(2024, 1, 14), &config.custom_days).is_none());
    }

    #[test]
    fn test_in_range_requires_both_endpoints() {
        let start = Some(date(2024, 1, 10));
        let end = Some(date(2024, 1, 15));
        assert!(in_range(date(2024, 1, 10), start, end));
        assert!(in_range(date(2024, 1, 15), start, end));
        assert!(!in_range(date(2024, 1, 16), start, end));
        assert!(!in_range(date(2024, 1, 12), start, None));
        assert!(!in_range(date(2024, 1, 12), None, end));
    }

    #[test]
    fn test_hover_range_previews_backwards() {
        let anchor = Some(date(2024, 1, 15));
        let hover = Some(date(2024, 1, 11));

        assert!(in_hover_range(date(2024, 1, 12), anchor, None, hover));
        assert!(in_hover_range(date(2024, 1, 11), anchor, None, hover));
        assert!(!in_hover_range(date(2024, 1, 16), anchor, None, hover));
        // A committed end or a missing hover switches the preview off
        assert!(!in_hover_range(date(2024, 1, 12), anchor, Some(date(2024, 1, 20)), hover));
        assert!(!in_hover_range(date(2024, 1, 12), anchor, None, None));
    }
}
