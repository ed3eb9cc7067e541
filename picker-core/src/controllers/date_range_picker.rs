//! Start/end range picker with two month panes side by side.

use shared::{CalendarDate, DateRange, DisplayedMonth, MonthView, PickerKey, QuickSelect};

use super::{
    month_views, opening_position, placeholder_or, quick_select_options, translations_for, weekday_labels,
    RangeCallback,
};
use crate::annotate::month_title;
use crate::clock::{Clock, SystemClock};
use crate::config::PickerConfig;
use crate::format::format_range;
use crate::navigation::{navigate, FocusMove};
use crate::predicates::is_disabled;
use crate::quick_select;
use crate::selection::{Effect, RangeSelection, RangeState};
use crate::session::{Pane, PaneLayout, PickerSession};

/// Controller for a date-range picker
pub struct DateRangePicker {
    config: PickerConfig,
    clock: Box<dyn Clock>,
    state: RangeState,
    session: PickerSession,
    on_change: Option<RangeCallback>,
}

impl DateRangePicker {
    pub fn new(config: PickerConfig, start: Option<CalendarDate>, end: Option<CalendarDate>) -> Self {
        Self::with_clock(config, start, end, SystemClock)
    }

    pub fn with_clock(
        config: PickerConfig,
        start: Option<CalendarDate>,
        end: Option<CalendarDate>,
        clock: impl Clock + 'static,
    ) -> Self {
        let state = RangeState::new(start, end);
        let (_, displayed) = opening_position(&config, state.value().start, clock.today());
        Self {
            config,
            clock: Box::new(clock),
            state,
            session: PickerSession::new(PaneLayout::Double, displayed),
            on_change: None,
        }
    }

    /// Register the change callback; it receives `(start, end)`
    pub fn on_change(mut self, callback: impl FnMut(Option<CalendarDate>, Option<CalendarDate>) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn value(&self) -> DateRange {
        self.state.value()
    }

    pub fn selection(&self) -> RangeSelection {
        self.state.selection()
    }

    pub fn hover_date(&self) -> Option<CalendarDate> {
        self.state.hover()
    }

    /// Push caller-owned endpoints in; never invokes the callback
    pub fn set_range(&mut self, start: Option<CalendarDate>, end: Option<CalendarDate>) {
        self.state.sync(start, end);
        if let (Some(start), false) = (self.state.value().start, self.session.is_open()) {
            self.session.show_month(DisplayedMonth::of(start));
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.is_open()
    }

    pub fn focused_date(&self) -> Option<CalendarDate> {
        self.session.focused_date()
    }

    /// Left and right pane months
    pub fn displayed_months(&self) -> (DisplayedMonth, DisplayedMonth) {
        let left = self.session.displayed_month();
        (left, left.next())
    }

    pub fn open(&mut self) {
        if self.config.disabled {
            log::debug!("DateRangePicker is disabled; not opening");
            return;
        }
        if self.session.is_open() {
            return;
        }
        let (focus, displayed) = opening_position(&self.config, self.state.value().start, self.clock.today());
        self.session.open(focus, displayed);
    }

    pub fn close(&mut self) {
        self.state.leave();
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
        log::debug!("DateRangePicker close requested by host");
        self.close();
    }

    /// Both panes back one month
    pub fn previous_month(&mut self) {
        self.session.navigate_to_previous_month();
    }

    /// Both panes forward one month
    pub fn next_month(&mut self) {
        self.session.navigate_to_next_month();
    }

    /// Page arrow on one pane; the other pane follows in lockstep
    pub fn shift_pane(&mut self, pane: Pane, forward: bool) {
        self.session.shift_pane(pane, forward);
    }

    pub fn select_date(&mut self, date: CalendarDate) {
        if self.is_locked() {
            return;
        }
        let effect = self.state.select(date, &self.config);
        self.apply(effect);
    }

    /// Click on a day number of one pane
    pub fn click_day(&mut self, pane: Pane, day: u32) {
        let (left, right) = self.displayed_months();
        let month = match pane {
            Pane::Left => left,
            Pane::Right => right,
        };
        match CalendarDate::from_ymd_opt(month.year, month.month, day) {
            Some(date) => self.select_date(date),
            None => log::debug!("No day {} in {}/{}", day, month.month, month.year),
        }
    }

    /// Pointer entered a day cell
    pub fn hover(&mut self, date: CalendarDate) {
        self.state.hover_over(date);
    }

    /// Pointer left the grid
    pub fn leave(&mut self) {
        self.state.leave();
    }

    /// Resolve a shortcut and feed it through the same transition as a click
    pub fn quick_select(&mut self, shortcut: QuickSelect) {
        if self.is_locked() {
            return;
        }
        let target = quick_select::resolve(shortcut, self.clock.today());
        if is_disabled(target, &self.config) {
            log::warn!("Quick select {} resolved to disabled {}; ignoring", shortcut.token(), target);
            return;
        }
        self.session.reveal(target);
        self.select_date(target);
    }

    /// Drop both endpoints and emit `(None, None)`; the picker stays open
    pub fn clear(&mut self) {
        if self.is_locked() {
            return;
        }
        let effect = self.state.clear();
        self.apply(effect);
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
                log::debug!("📅 Range focus {} -> {}", focused, date);
                self.session.set_focus(date);
                self.state.hover_over(date);
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

    /// `"<start> - <end>"` with `...` for an unset side
    pub fn formatted_value(&self) -> String {
        format_range(&self.state.value(), self.config.format, self.config.language())
    }

    pub fn placeholder(&self) -> String {
        placeholder_or(&self.config, translations_for(&self.config).select_range)
    }

    /// Localised labels for the start and end inputs
    pub fn endpoint_labels(&self) -> (&'static str, &'static str) {
        let t = translations_for(&self.config);
        (t.start_date, t.end_date)
    }

    /// Headers of the left and right panes
    pub fn month_titles(&self) -> (String, String) {
        let t = translations_for(&self.config);
        let (left, right) = self.displayed_months();
        (month_title(left, t), month_title(right, t))
    }

    pub fn weekday_labels(&self) -> [&'static str; 7] {
        weekday_labels(&self.config)
    }

    pub fn quick_select_options(&self) -> Vec<(QuickSelect, &'static str)> {
        quick_select_options(&self.config)
    }

    /// Day-state stream for both panes, left first
    pub fn month_views(&self) -> Vec<MonthView> {
        month_views(
            &self.session.displayed_months(),
            &self.config,
            self.clock.today(),
            self.state.view(),
            self.session.focused_date(),
        )
    }

    /// A disabled widget keeps its endpoints; every change is dropped
    fn is_locked(&self) -> bool {
        if self.config.disabled {
            log::warn!("DateRangePicker is disabled; ignoring value change");
        }
        self.config.disabled
    }

    fn apply(&mut self, effect: Effect) {
        if effect.emits() {
            let range = self.state.value();
            log::info!("📅 DateRangePicker committed {:?} - {:?}", range.start, range.end);
            if let Some(callback) = self.on_change.as_mut() {
                callback(range.start, range.end);
            }
        }
        if effect.closes() {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;
    use shared::DaySlot;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Events = Rc<RefCell<Vec<(Option<NaiveDate>, Option<NaiveDate>)>>>;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn recording_picker(config: PickerConfig) -> (DateRangePicker, Events) {
        let events: Events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let picker = DateRangePicker::with_clock(config, None, None, FixedClock::on(date(2024, 1, 8)))
            .on_change(move |start, end| sink.borrow_mut().push((start, end)));
        (picker, events)
    }

    #[test]
    fn test_two_panes_follow_each_other() {
        let (mut picker, _) = recording_picker(PickerConfig::default());
        picker.open();
        assert_eq!(picker.displayed_months(), (DisplayedMonth::new(2024, 1), DisplayedMonth::new(2024, 2)));

        picker.shift_pane(Pane::Right, true);
        assert_eq!(picker.displayed_months(), (DisplayedMonth::new(2024, 2), DisplayedMonth::new(2024, 3)));

        picker.shift_pane(Pane::Left, false);
        picker.previous_month();
        assert_eq!(picker.displayed_months(), (DisplayedMonth::new(2023, 12), DisplayedMonth::new(2024, 1)));
        assert_eq!(picker.month_titles().0, "December 2023");
    }

    #[test]
    fn test_click_in_right_pane_completes_range() {
        let (mut picker, events) = recording_picker(PickerConfig::default());
        picker.open();
        picker.click_day(Pane::Left, 28);
        assert_eq!(picker.formatted_value(), "28/01/2024 - ...");

        picker.click_day(Pane::Right, 3);
        assert!(!picker.is_open());
        assert_eq!(
            events.borrow().as_slice(),
            &[(Some(date(2024, 1, 28)), None), (Some(date(2024, 1, 28)), Some(date(2024, 2, 3)))]
        );
        assert_eq!(picker.formatted_value(), "28/01/2024 - 03/02/2024");
    }

    #[test]
    fn test_disabled_picker_keeps_endpoints() {
        let events: Events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let mut picker = DateRangePicker::with_clock(
            PickerConfig::default().disabled(true),
            Some(date(2024, 1, 2)),
            Some(date(2024, 1, 4)),
            FixedClock::on(date(2024, 1, 8)),
        )
        .on_change(move |start, end| sink.borrow_mut().push((start, end)));

        picker.open();
        picker.click_day(Pane::Left, 11);
        picker.select_date(date(2024, 1, 15));
        picker.quick_select(QuickSelect::Tomorrow);
        picker.clear();

        assert!(events.borrow().is_empty());
        assert!(!picker.is_open());
        assert_eq!(picker.value(), DateRange::new(Some(date(2024, 1, 2)), Some(date(2024, 1, 4))));
    }

    #[test]
    fn test_hover_preview_in_views() {
        let (mut picker, _) = recording_picker(PickerConfig::default());
        picker.open();
        picker.select_date(date(2024, 1, 10));
        picker.hover(date(2024, 1, 13));

        let views = picker.month_views();
        assert_eq!(views.len(), 2);
        let cell = views[0].cell_for(date(2024, 1, 12)).unwrap();
        assert_eq!(cell.slot(), DaySlot::HoverPreview);

        picker.leave();
        let views = picker.month_views();
        assert_eq!(views[0].cell_for(date(2024, 1, 12)).unwrap().slot(), DaySlot::Normal);
    }

    #[test]
    fn test_keyboard_range_selection() {
        let (mut picker, events) = recording_picker(PickerConfig::default());
        picker.open();
        assert_eq!(picker.focused_date(), Some(date(2024, 1, 8)));

        picker.handle_key(PickerKey::Enter);
        for _ in 0..4 {
            picker.handle_key(PickerKey::ArrowDown);
        }
        // Jan 8 + 28 days lands in the right pane: no repagination
        assert_eq!(picker.focused_date(), Some(date(2024, 2, 5)));
        assert_eq!(picker.displayed_months().0, DisplayedMonth::new(2024, 1));

        for _ in 0..3 {
            picker.handle_key(PickerKey::ArrowDown);
        }
        assert_eq!(picker.focused_date(), Some(date(2024, 2, 26)));
        assert_eq!(picker.displayed_months(), (DisplayedMonth::new(2024, 1), DisplayedMonth::new(2024, 2)));

        // Leaving the right pane forwards brings March in on the right
        picker.handle_key(PickerKey::ArrowDown);
        assert_eq!(picker.displayed_months(), (DisplayedMonth::new(2024, 2), DisplayedMonth::new(2024, 3)));

        picker.handle_key(PickerKey::Space);
        assert!(!picker.is_open());
        assert_eq!(events.borrow().last(), Some(&(Some(date(2024, 1, 8)), Some(date(2024, 3, 4)))));
    }

    #[test]
    fn test_clear_emits_empty_pair_and_stays_open() {
        let (mut picker, events) = recording_picker(PickerConfig::default());
        picker.open();
        picker.clear();
        picker.clear();
        assert!(picker.is_open());
        assert_eq!(events.borrow().as_slice(), &[(None, None), (None, None)]);
        assert_eq!(picker.formatted_value(), "");
    }

    #[test]
    fn test_set_range_is_silent() {
        let (mut picker, events) = recording_picker(PickerConfig::default().with_language("fr"));
        picker.set_range(Some(date(2024, 5, 1)), Some(date(2024, 5, 4)));
        assert!(events.borrow().is_empty());
        assert_eq!(picker.displayed_months().0, DisplayedMonth::new(2024, 5));
        assert_eq!(picker.placeholder(), translations_for(picker.config()).select_range);
    }
}
