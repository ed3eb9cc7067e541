//! # Calendar Math
//!
//! Pure date arithmetic shared by every picker: month lengths, weekday offsets,
//! ISO-8601 week numbers and the Monday-first month grid.
//!
//! Nothing in here looks at the clock or at picker configuration; the
//! predicate engine and the controllers layer those concerns on top.

use chrono::{Datelike, Days, Months, NaiveDate};
use shared::{CalendarDate, DisplayedMonth, GridCell, MonthGrid};

/// Check if a year is a leap year (proleptic Gregorian)
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in a month, taken from the day before the 1st of the next month.
///
/// Returns 0 for a month outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    if !(1..=12).contains(&month) {
        return 0;
    }

    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(0)
}

/// Offset of day 1 in a Monday-first week (Monday = 0 .. Sunday = 6)
pub fn first_weekday_offset(year: i32, month: u32) -> u32 {
    match NaiveDate::from_ymd_opt(year, month, 1) {
        // chrono counts from Sunday = 0; rotate so the week starts on Monday
        Some(first) => (first.weekday().num_days_from_sunday() + 6) % 7,
        None => 0,
    }
}

/// ISO-8601 week number (1..=53).
///
/// Shifts to the Thursday of the containing week and counts weeks in that
/// Thursday's year, so early January can land in week 52/53 of the previous
/// year and late December in week 1 of the next.
pub fn iso_week_number(date: CalendarDate) -> u32 {
    let from_monday = date.weekday().num_days_from_monday() as i64;
    let thursday = add_days(date, 3 - from_monday);
    let days_since_year_start = thursday.ordinal0();
    (days_since_year_start + 1).div_ceil(7)
}

/// Build the Monday-first grid for a month.
///
/// Leading padding equals [`first_weekday_offset`]; trailing padding completes
/// the last week so the cell count is always a multiple of seven.
pub fn build_month_grid(year: i32, month: u32) -> MonthGrid {
    let leading = first_weekday_offset(year, month);
    let day_count = days_in_month(year, month);

    let mut cells: Vec<GridCell> = Vec::with_capacity(42);
    cells.extend((0..leading).map(|_| GridCell::Empty));
    cells.extend((1..=day_count).map(GridCell::Day));
    while cells.len() % 7 != 0 {
        cells.push(GridCell::Empty);
    }

    log::debug!(
        "🗓️ Built grid for {}/{}: {} leading, {} days, {} cells",
        month,
        year,
        leading,
        day_count,
        cells.len()
    );

    MonthGrid { year, month, cells }
}

/// Last day of the month containing `month`
pub fn last_day_of(month: DisplayedMonth) -> Option<CalendarDate> {
    NaiveDate::from_ymd_opt(month.year, month.month, days_in_month(month.year, month.month))
}

/// Shift by a signed number of days; saturates at chrono's representable range
pub fn add_days(date: CalendarDate, days: i64) -> CalendarDate {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days as u64))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}

/// Shift by a signed number of months, clamping the day to the target month's length
pub fn add_months(date: CalendarDate, months: i32) -> CalendarDate {
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(months as u32))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}

/// Monday of the week containing `date`
pub fn start_of_week(date: CalendarDate) -> CalendarDate {
    add_days(date, -(date.weekday().num_days_from_monday() as i64))
}

/// First day of the month containing `date`
pub fn start_of_month(date: CalendarDate) -> CalendarDate {
    date.with_day(1).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 13), 0);
    }

    #[test]
    fn test_is_leap_year() {
        assert!(!is_leap_year(2025));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
    }

    #[test]
    fn test_first_weekday_offset() {
        // January 2024 starts on a Monday, September 2024 on a Sunday
        assert_eq!(first_weekday_offset(2024, 1), 0);
        assert_eq!(first_weekday_offset(2024, 9), 6);
        // February 2024 starts on a Thursday
        assert_eq!(first_weekday_offset(2024, 2), 3);
    }

    #[test]
    fn test_iso_week_number_known_dates() {
        assert_eq!(iso_week_number(date(2024, 1, 1)), 1);
        assert_eq!(iso_week_number(date(2024, 1, 15)), 3);
        // 2024-12-31 is a Tuesday in ISO week 1 of 2025
        assert_eq!(iso_week_number(date(2024, 12, 31)), 1);
        // 2021-01-01 is a Friday in week 53 of 2020
        assert_eq!(iso_week_number(date(2021, 1, 1)), 53);
        // 2023-01-01 is a Sunday in week 52 of 2022
        assert_eq!(iso_week_number(date(2023, 1, 1)), 52);
    }

    #[test]
    fn test_iso_week_number_matches_chrono_for_a_decade() {
        let mut day = date(2015, 1, 1);
        while day < date(2026, 1, 1) {
            assert_eq!(iso_week_number(day), day.iso_week().week(), "mismatch on {}", day);
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_grid_invariant_for_every_month() {
        for year in 1999..=2030 {
            for month in 1..=12 {
                let grid = build_month_grid(year, month);
                assert_eq!(grid.cells.len() % 7, 0, "{}/{}", month, year);
                assert!(grid.leading_empty_count() <= 6);
                assert_eq!(grid.leading_empty_count() as u32, first_weekday_offset(year, month));
                assert_eq!(grid.day_count() as u32, days_in_month(year, month));
            }
        }
    }

    #[test]
    fn test_grid_cells_resolve_to_dates() {
        let grid = build_month_grid(2024, 2);
        assert_eq!(grid.cells[3], GridCell::Day(1));
        assert_eq!(grid.date_of(grid.cells[3]), Some(date(2024, 2, 1)));
        assert_eq!(grid.date_of(GridCell::Empty), None);
        assert_eq!(grid.weeks().count(), 5);
    }

    #[test]
    fn test_relative_date_helpers() {
        assert_eq!(add_days(date(2024, 3, 1), -1), date(2024, 2, 29));
        assert_eq!(add_months(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(add_months(date(2024, 3, 31), -1), date(2024, 2, 29));
        assert_eq!(start_of_week(date(2024, 1, 14)), date(2024, 1, 8));
        assert_eq!(start_of_month(date(2024, 1, 14)), date(2024, 1, 1));
        assert_eq!(last_day_of(DisplayedMonth::new(2023, 2)), Some(date(2023, 2, 28)));
    }
}
