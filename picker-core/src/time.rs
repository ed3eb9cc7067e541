//! Parsing and listing helpers for `HH:MM` time values.

use chrono::NaiveTime;
use shared::TimeOfDay;

use crate::error::{PickerError, Result};

/// Strict `HH:MM` parser (24-hour clock)
pub fn parse_time(value: &str) -> Result<TimeOfDay> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map(TimeOfDay::from)
        .map_err(|_| PickerError::InvalidTime(value.to_string()))
}

/// Lenient parser used when syncing a caller-owned value into a widget.
///
/// Missing values and unparseable components become zero; numeric
/// components outside their range are clamped.
pub fn parse_time_lenient(value: Option<&str>) -> TimeOfDay {
    let Some(value) = value else {
        return TimeOfDay::midnight();
    };
    if let Ok(time) = parse_time(value) {
        return time;
    }

    let mut parts = value.trim().splitn(2, ':');
    let hours = parts.next().and_then(|h| h.trim().parse::<u32>().ok()).unwrap_or(0);
    let minutes = parts.next().and_then(|m| m.trim().parse::<u32>().ok()).unwrap_or(0);
    log::debug!("Lenient time parse of '{}' -> {:02}:{:02}", value, hours.min(23), minutes.min(59));
    TimeOfDay::new(hours, minutes)
}

/// Values for the hours column
pub fn hour_options() -> impl Iterator<Item = u32> {
    0..24
}

/// Values for the minutes column
pub fn minute_options() -> impl Iterator<Item = u32> {
    0..60
}
