//! # Focus & Keyboard Navigator
//!
//! Maps keys to moves of the focused date. The focused date is a cursor,
//! independent of the committed selection; only Enter/Space turn it into a
//! selection, and only through the same transition a click would use.

use shared::{CalendarDate, DisplayedMonth, PickerKey};

use crate::calendar::{add_days, last_day_of};

/// Result of feeding one key to the navigator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    /// Focus moves to a new date (the controller repaginates if needed)
    Moved(CalendarDate),
    /// Treat the focused date as clicked
    Activate(CalendarDate),
    /// Close without touching the selection
    Dismiss,
    Ignored,
}

/// Where a key takes the focus.
///
/// `current_month` is the displayed month Home/End jump within.
pub fn navigate(focused: CalendarDate, key: PickerKey, current_month: DisplayedMonth) -> FocusMove {
    match key {
        PickerKey::ArrowLeft => FocusMove::Moved(add_days(focused, -1)),
        PickerKey::ArrowRight => FocusMove::Moved(add_days(focused, 1)),
        PickerKey::ArrowUp => FocusMove::Moved(add_days(focused, -7)),
        PickerKey::ArrowDown => FocusMove::Moved(add_days(focused, 7)),
        PickerKey::Home => current_month
            .first_day()
            .map(FocusMove::Moved)
            .unwrap_or(FocusMove::Ignored),
        PickerKey::End => last_day_of(current_month)
            .map(FocusMove::Moved)
            .unwrap_or(FocusMove::Ignored),
        PickerKey::Enter | PickerKey::Space => FocusMove::Activate(focused),
        PickerKey::Escape => FocusMove::Dismiss,
    }
}

/// Focus on open: the selection if any, else a future `min_date`, else today
pub fn initial_focus(
    selected: Option<CalendarDate>,
    min_date: Option<CalendarDate>,
    today: CalendarDate,
) -> CalendarDate {
    if let Some(selected) = selected {
        return selected;
    }
    match min_date {
        Some(min) if min > today => min,
        _ => today,
    }
}
