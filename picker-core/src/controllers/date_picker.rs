//! Single-date picker, optionally with a time of day.

use shared::{CalendarDate, DisplayedMonth, MonthView, PickerKey, QuickSelect, SelectedDate, TimeOfDay};

use super::{opening_position, placeholder_or, quick_select_options, translations_for, weekday_labels, DateCallback};
use crate::annotate::{build_month_view, month_title, AnnotationContext};
use crate::clock::{Clock, SystemClock};
use crate::config::PickerConfig;
use crate::format::format_selected;
use crate::navigation::{navigate, FocusMove};
use crate::predicates::is_disabled;
use crate::quick_select;
use crate::selection::{Effect, SingleSelection};
use crate::session::{PaneLayout, PickerSession};

/// Controller for a single-date picker
pub struct DatePicker {
    config: PickerConfig,
    clock: Box<dyn Clock>,
    selection: SingleSelection,
    session: PickerSession,
    on_change: Option<DateCallback>,
}

impl DatePicker {
    pub fn new(config: PickerConfig, value: Option<SelectedDate>) -> Self {
        Self::with_clock(config, value, SystemClock)
    }

    pub fn with_clock(config: PickerConfig, value: Option<SelectedDate>, clock: impl Clock + 'static) -> Self {
        let today = clock.today();
        let (_, displayed) = opening_position(&config, value.map(|v| v.date), today);
        Self {
            config,
            clock: Box::new(clock),
            selection: SingleSelection::new(value),
            session: PickerSession::new(PaneLayout::Single, displayed),
            on_change: None,
        }
    }

    /// Register the change callback; it replaces any previous one
    pub fn on_change(mut self, callback: impl FnMut(Option<SelectedDate>) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn value(&self) -> Option<SelectedDate> {
        self.selection.value()
    }

    /// Push a caller-owned value in; never invokes the callback
    pub fn set_value(&mut self, value: Option<SelectedDate>) {
        self.selection.sync(value);
        if let Some(value) = value {
            if !self.session.is_open() {
                self.session.show_month(DisplayedMonth::of(value.date));
            }
        }
    }

    pub fn time(&self) -> TimeOfDay {
        self.selection.time()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_open()
    }

    pub fn focused_date(&self) -> Option<CalendarDate> {
        self.session.focused_date()
    }

    pub fn displayed_month(&self) -> DisplayedMonth {
        self.session.displayed_month()
    }

    pub fn open(&mut self) {
        if self.config.disabled {
            log::debug!("DatePicker is disabled; not opening");
            return;
        }
        if self.session.is_open() {
            return;
        }
        let (focus, displayed) = opening_position(&self.config, self.selection.selected_date(), self.clock.today());
        self.session.open(focus, displayed);
    }

    pub fn close(&mut self) {
        self.session.close();
    }

    pub fn toggle(&mut self) {
        if self.session.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// The host detected an interaction outside the open picker
    pub fn request_close(&mut self) {
        log::debug!("DatePicker close requested by host");
        self.close();
    }

    pub fn previous_month(&mut self) {
        self.session.navigate_to_previous_month();
    }

    pub fn next_month(&mut self) {
        self.session.navigate_to_next_month();
    }

    /// Click on a date; disabled dates are a no-op
    pub fn select_date(&mut self, date: CalendarDate) {
        if self.is_locked() {
            return;
        }
        let effect = self.selection.select(date, &self.config);
        self.apply(effect);
    }

    /// Click on a day number of the displayed month
    pub fn click_day(&mut self, day: u32) {
        let month = self.session.displayed_month();
        match CalendarDate::from_ymd_opt(month.year, month.month, day) {
            Some(date) => self.select_date(date),
            None => log::debug!("No day {} in {}/{}", day, month.month, month.year),
        }
    }

    pub fn set_hours(&mut self, hours: u32) {
        if self.is_locked() {
            return;
        }
        let effect = self.selection.set_hours(hours);
        self.apply(effect);
    }

    pub fn set_minutes(&mut self, minutes: u32) {
        if self.is_locked() {
            return;
        }
        let effect = self.selection.set_minutes(minutes);
        self.apply(effect);
    }

    /// "Today" button: select today and show its month, unless today is disabled
    pub fn select_today(&mut self) {
        if self.is_locked() {
            return;
        }
        let today = self.clock.today();
        if is_disabled(today, &self.config) {
            log::warn!("Today ({}) is disabled; ignoring", today);
            return;
        }
        self.session.show_month(DisplayedMonth::of(today));
        self.select_date(today);
    }

    /// Resolve a shortcut against the clock and select it like a click
    pub fn quick_select(&mut self, shortcut: QuickSelect) {
        if self.is_locked() {
            return;
        }
        let target = quick_select::resolve(shortcut, self.clock.today());
        if is_disabled(target, &self.config) {
            log::warn!("Quick select {} resolved to disabled {}; ignoring", shortcut.token(), target);
            return;
        }
        self.session.show_month(DisplayedMonth::of(target));
        self.select_date(target);
    }

    /// Drop the selection and emit `None`; the picker stays open
    pub fn clear(&mut self) {
        if self.is_locked() {
            return;
        }
        let effect = self.selection.clear();
        self.apply(effect);
    }

    /// OK button of the time columns
    pub fn confirm(&mut self) {
        self.close();
    }

    /// Feed a key press. Returns whether the picker consumed it.
    pub fn handle_key(&mut self, key: PickerKey) -> bool {
        if !self.session.is_open() {
            return false;
        }
        let Some(focused) = self.session.focused_date() else {
            return false;
        };

        match navigate(focused, key, self.session.home_end_month()) {
            FocusMove::Moved(date) => {
                log::debug!("📅 Focus {} -> {}", focused, date);
                self.session.set_focus(date);
            }
            FocusMove::Activate(date) => self.select_date(date),
            FocusMove::Dismiss => self.close(),
            FocusMove::Ignored => return false,
        }
        true
    }

    pub fn take_focus_request(&mut self) -> Option<CalendarDate> {
        self.session.take_focus_request()
    }

    /// Text for the input field; empty when nothing is selected
    pub fn formatted_value(&self) -> String {
        format_selected(
            self.selection.value().as_ref(),
            self.config.format,
            self.config.language(),
            self.config.show_time,
        )
    }

    pub fn placeholder(&self) -> String {
        let t = translations_for(&self.config);
        let default = if self.config.show_time { t.select_time } else { t.select_date };
        placeholder_or(&self.config, default)
    }

    pub fn month_title(&self) -> String {
        month_title(self.session.displayed_month(), translations_for(&self.config))
    }

    pub fn weekday_labels(&self) -> [&'static str; 7] {
        weekday_labels(&self.config)
    }

    pub fn quick_select_options(&self) -> Vec<(QuickSelect, &'static str)> {
        quick_select_options(&self.config)
    }

    /// Day-state stream for the displayed month
    pub fn month_view(&self) -> MonthView {
        let ctx = AnnotationContext {
            config: &self.config,
            today: self.clock.today(),
            selection: self.selection.view(),
            focused: self.session.focused_date(),
        };
        build_month_view(self.session.displayed_month(), &ctx, translations_for(&self.config))
    }

    /// A disabled widget keeps its value; every change is dropped
    fn is_locked(&self) -> bool {
        if self.config.disabled {
            log::warn!("DatePicker is disabled; ignoring value change");
        }
        self.config.disabled
    }

    fn apply(&mut self, effect: Effect) {
        if effect.emits() {
            let value = self.selection.value();
            log::info!("📅 DatePicker committed {:?}", value.map(|v| v.to_naive_datetime()));
            if let Some(callback) = self.on_change.as_mut() {
                callback(value);
            }
        }
        if effect.closes() {
            self.close();
        }
    }
}
