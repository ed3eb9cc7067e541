//! # Widget Controllers
//!
//! The three pickers a host application embeds. Each controller owns its
//! transient session state, takes the committed value in from the caller and
//! hands every change back through exactly one callback.
//!
//! - [`DatePicker`]: single date, optionally with a time of day
//! - [`DateRangePicker`]: start/end pair over two month panes
//! - [`TimePicker`]: `"HH:MM"` only, no calendar
//!
//! Controllers are plain single-threaded state machines. Two instances never
//! share state; a check-in/check-out pair coordinates by calling `open()` on
//! one picker from the other's change callback.

mod date_picker;
mod date_range_picker;
mod time_picker;

pub use date_picker::DatePicker;
pub use date_range_picker::DateRangePicker;
pub use time_picker::TimePicker;

use shared::{CalendarDate, DisplayedMonth, MonthView, QuickSelect};

use crate::annotate::{build_month_view, AnnotationContext};
use crate::config::PickerConfig;
use crate::i18n::{translations, Translations};
use crate::navigation::initial_focus;
use crate::selection::SelectionView;

/// Change callback for the single-date picker
pub type DateCallback = Box<dyn FnMut(Option<shared::SelectedDate>)>;
/// Change callback for the range picker: `(start, end)`
pub type RangeCallback = Box<dyn FnMut(Option<CalendarDate>, Option<CalendarDate>)>;
/// Change callback for the time picker: zero-padded `"HH:MM"` or `None`
pub type TimeCallback = Box<dyn FnMut(Option<String>)>;

fn translations_for(config: &PickerConfig) -> &'static Translations {
    translations(config.language())
}

/// Caller override, else the localised default
fn placeholder_or(config: &PickerConfig, default: &str) -> String {
    config
        .placeholder
        .clone()
        .unwrap_or_else(|| default.to_string())
}

/// Short weekday headers, Monday first
fn weekday_labels(config: &PickerConfig) -> [&'static str; 7] {
    translations_for(config).weekdays_short
}

/// Shortcuts offered by a picker, with their localised labels
fn quick_select_options(config: &PickerConfig) -> Vec<(QuickSelect, &'static str)> {
    if !config.show_quick_select {
        return Vec::new();
    }
    let t = translations_for(config);
    QuickSelect::all()
        .into_iter()
        .map(|shortcut| (shortcut, t.quick_select_label(shortcut)))
        .collect()
}

/// Focus and (left) displayed month for a picker being opened.
///
/// The committed value wins, then `initial_month`, then the month of the
/// initial focus.
fn opening_position(
    config: &PickerConfig,
    committed: Option<CalendarDate>,
    today: CalendarDate,
) -> (CalendarDate, DisplayedMonth) {
    let focus = initial_focus(committed, config.min_date, today);
    let displayed = match (committed, config.initial_month) {
        (Some(date), _) => DisplayedMonth::of(date),
        (None, Some(initial)) => DisplayedMonth::of(initial),
        (None, None) => DisplayedMonth::of(focus),
    };
    (focus, displayed)
}

fn month_views(
    months: &[DisplayedMonth],
    config: &PickerConfig,
    today: CalendarDate,
    selection: SelectionView,
    focused: Option<CalendarDate>,
) -> Vec<MonthView> {
    let ctx = AnnotationContext {
        config,
        today,
        selection,
        focused,
    };
    let t = translations_for(config);
    months
        .iter()
        .map(|&month| build_month_view(month, &ctx, t))
        .collect()
}
