//! Turning committed values into the text shown in a picker's input.

use chrono::{Datelike, NaiveDate};
use shared::{CalendarDate, DateFormat, DateRange, Language, SelectedDate};

use crate::error::{PickerError, Result};

/// Shown in place of the unset side of a half-selected range
pub const RANGE_PLACEHOLDER: &str = "...";

/// Format a date with one of the fixed patterns, or the language's short format
pub fn format_date(date: CalendarDate, format: DateFormat, language: Language) -> String {
    let (y, m, d) = (date.year(), date.month(), date.day());
    match format {
        DateFormat::DayMonthYear => format!("{:02}/{:02}/{:04}", d, m, y),
        DateFormat::MonthDayYear => format!("{:02}/{:02}/{:04}", m, d, y),
        DateFormat::Iso => format!("{:04}-{:02}-{:02}", y, m, d),
        DateFormat::DottedDayMonthYear => format!("{:02}.{:02}.{:04}", d, m, y),
        DateFormat::LocaleDefault => locale_short_date(date, language),
    }
}

fn locale_short_date(date: CalendarDate, language: Language) -> String {
    let (y, m, d) = (date.year(), date.month(), date.day());
    match language {
        Language::En => format!("{}/{}/{}", m, d, y),
        Language::De => format!("{}.{}.{}", d, m, y),
        Language::Ru | Language::Tr => format!("{:02}.{:02}.{}", d, m, y),
        Language::Fr | Language::Pt => format!("{:02}/{:02}/{}", d, m, y),
        Language::Es | Language::It | Language::Ar => format!("{}/{}/{}", d, m, y),
        Language::Ja | Language::Zh => format!("{}/{}/{}", y, m, d),
    }
}

/// Text for a single-date picker; empty when nothing is selected.
///
/// With time selection on, `" HH:MM"` is appended (midnight if no time is set).
pub fn format_selected(
    value: Option<&SelectedDate>,
    format: DateFormat,
    language: Language,
    show_time: bool,
) -> String {
    let Some(value) = value else {
        return String::new();
    };

    let date_text = format_date(value.date, format, language);
    if show_time {
        format!("{} {}", date_text, value.time.unwrap_or_default())
    } else {
        date_text
    }
}

/// `"<start> - <end>"`, using [`RANGE_PLACEHOLDER`] for an unset side.
/// An entirely empty range formats as an empty string.
pub fn format_range(range: &DateRange, format: DateFormat, language: Language) -> String {
    if range.start.is_none() && range.end.is_none() {
        return String::new();
    }

    let side = |date: Option<CalendarDate>| {
        date.map(|d| format_date(d, format, language))
            .unwrap_or_else(|| RANGE_PLACEHOLDER.to_string())
    };
    format!("{} - {}", side(range.start), side(range.end))
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_iso_date(value: &str) -> Result<CalendarDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| PickerError::InvalidDate(value.to_string()))
}
