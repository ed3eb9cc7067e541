//! Resolution of quick-select shortcuts to concrete dates.
//!
//! Week shortcuts land on the Monday of the target week and month shortcuts on
//! the first of the target month. Resolution happens at invocation time, so
//! callers pass the current day in.

use shared::{CalendarDate, QuickSelect};

use crate::calendar::{add_days, add_months, start_of_month, start_of_week};

/// The date a shortcut points at, relative to `today`
pub fn resolve(shortcut: QuickSelect, today: CalendarDate) -> CalendarDate {
    match shortcut {
        QuickSelect::Today => today,
        QuickSelect::Tomorrow => add_days(today, 1),
        QuickSelect::Yesterday => add_days(today, -1),
        QuickSelect::ThisWeek => start_of_week(today),
        QuickSelect::LastWeek => add_days(start_of_week(today), -7),
        QuickSelect::NextWeek => add_days(start_of_week(today), 7),
        QuickSelect::ThisMonth => start_of_month(today),
        QuickSelect::LastMonth => add_months(start_of_month(today), -1),
        QuickSelect::NextMonth => add_months(start_of_month(today), 1),
        QuickSelect::In7Days => add_days(today, 7),
        QuickSelect::In30Days => add_days(today, 30),
    }
}
