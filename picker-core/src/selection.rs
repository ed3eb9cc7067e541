//! # Selection State Machine
//!
//! What a click (or Enter) does to the current selection, for the two
//! calendar modes:
//!
//! - **Single**: `Empty` / `Has(date[, time])`. Without time selection a pick
//!   commits and closes; with time selection the picker stays open until the
//!   user confirms.
//! - **Range**: `NoAnchor` / `AnchorOnly(anchor)` / `Complete(start, end)`.
//!   The second endpoint commits and closes; a second click before the anchor
//!   re-anchors instead of forming a reversed range.
//!
//! Transitions return an [`Effect`] telling the controller whether to emit the
//! new value and whether to close. Disabled days are rejected here so every
//! entry point (mouse, keyboard, shortcut) shares the same rule.

use shared::{CalendarDate, DateRange, SelectedDate, TimeOfDay};

use crate::config::PickerConfig;
use crate::predicates::is_disabled;

/// What the controller must do after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed; no callback
    Ignored,
    /// Emit the new value, keep the picker open
    Emit,
    /// Emit the new value, then close the picker
    EmitAndClose,
}

impl Effect {
    pub fn emits(&self) -> bool {
        !matches!(self, Effect::Ignored)
    }

    pub fn closes(&self) -> bool {
        matches!(self, Effect::EmitAndClose)
    }
}

/// Read-only view of the selection, tagged by widget mode, used for annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionView {
    Single(Option<CalendarDate>),
    Range {
        anchor: Option<CalendarDate>,
        end: Option<CalendarDate>,
        hover: Option<CalendarDate>,
    },
    TimeOnly,
}

/// Single-date selection plus the value of the time columns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SingleSelection {
    selected: Option<SelectedDate>,
    /// Current value of the hour/minute columns, applied to the next pick
    time: TimeOfDay,
}

impl SingleSelection {
    pub fn new(value: Option<SelectedDate>) -> Self {
        let mut selection = Self::default();
        selection.sync(value);
        selection
    }

    /// Replace the committed value from the caller; never emits
    pub fn sync(&mut self, value: Option<SelectedDate>) {
        if let Some(time) = value.and_then(|v| v.time) {
            self.time = time;
        }
        self.selected = value;
    }

    pub fn value(&self) -> Option<SelectedDate> {
        self.selected
    }

    pub fn selected_date(&self) -> Option<CalendarDate> {
        self.selected.map(|value| value.date)
    }

    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    pub fn view(&self) -> SelectionView {
        SelectionView::Single(self.selected_date())
    }

    /// Pick a day. With `show_time` the current time columns are attached and
    /// the picker stays open; otherwise the pick commits and closes.
    pub fn select(&mut self, date: CalendarDate, config: &PickerConfig) -> Effect {
        if is_disabled(date, config) {
            log::warn!("Ignoring selection of disabled day {}", date);
            return Effect::Ignored;
        }

        if config.show_time {
            self.selected = Some(SelectedDate::with_time(date, self.time));
            log::debug!("📅 Selected {} at {}", date, self.time);
            Effect::Emit
        } else {
            self.selected = Some(SelectedDate::date_only(date));
            log::debug!("📅 Selected {}", date);
            Effect::EmitAndClose
        }
    }

    /// Change the hour column; re-emits only when a date is already selected
    pub fn set_hours(&mut self, hours: u32) -> Effect {
        let time = self.time.with_hours(hours);
        self.apply_time(time)
    }

    /// Change the minute column; re-emits only when a date is already selected
    pub fn set_minutes(&mut self, minutes: u32) -> Effect {
        let time = self.time.with_minutes(minutes);
        self.apply_time(time)
    }

    fn apply_time(&mut self, time: TimeOfDay) -> Effect {
        self.time = time;
        match self.selected.as_mut() {
            Some(selected) => {
                selected.time = Some(time);
                Effect::Emit
            }
            None => Effect::Ignored,
        }
    }

    /// Drop the selection; always emits so repeated clears re-send `None`
    pub fn clear(&mut self) -> Effect {
        self.selected = None;
        Effect::Emit
    }
}

/// The committed part of a range selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RangeSelection {
    #[default]
    NoAnchor,
    /// Awaiting the second endpoint
    AnchorOnly(CalendarDate),
    Complete(CalendarDate, CalendarDate),
}

impl RangeSelection {
    /// Build from caller-owned endpoints. An end before its start keeps only the start.
    pub fn from_endpoints(start: Option<CalendarDate>, end: Option<CalendarDate>) -> Self {
        match (start, end) {
            (Some(start), Some(end)) if start <= end => RangeSelection::Complete(start, end),
            (Some(start), Some(end)) => {
                log::warn!("Range end {} is before start {}; keeping only the start", end, start);
                RangeSelection::AnchorOnly(start)
            }
            (Some(start), None) => RangeSelection::AnchorOnly(start),
            (None, _) => RangeSelection::NoAnchor,
        }
    }

    pub fn value(&self) -> DateRange {
        match *self {
            RangeSelection::NoAnchor => DateRange::default(),
            RangeSelection::AnchorOnly(anchor) => DateRange::new(Some(anchor), None),
            RangeSelection::Complete(start, end) => DateRange::new(Some(start), Some(end)),
        }
    }
}

/// Range selection plus the ephemeral hover endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeState {
    selection: RangeSelection,
    hover: Option<CalendarDate>,
}

impl RangeState {
    pub fn new(start: Option<CalendarDate>, end: Option<CalendarDate>) -> Self {
        Self {
            selection: RangeSelection::from_endpoints(start, end),
            hover: None,
        }
    }

    /// Replace the committed endpoints from the caller; never emits
    pub fn sync(&mut self, start: Option<CalendarDate>, end: Option<CalendarDate>) {
        self.selection = RangeSelection::from_endpoints(start, end);
        self.hover = None;
    }

    pub fn selection(&self) -> RangeSelection {
        self.selection
    }

    pub fn value(&self) -> DateRange {
        self.selection.value()
    }

    pub fn hover(&self) -> Option<CalendarDate> {
        self.hover
    }

    pub fn view(&self) -> SelectionView {
        let range = self.value();
        SelectionView::Range {
            anchor: range.start,
            end: range.end,
            hover: self.hover,
        }
    }

    /// Apply a click on `date`
    pub fn select(&mut self, date: CalendarDate, config: &PickerConfig) -> Effect {
        if is_disabled(date, config) {
            log::warn!("Ignoring range click on disabled day {}", date);
            return Effect::Ignored;
        }

        self.hover = None;
        match self.selection {
            RangeSelection::NoAnchor | RangeSelection::Complete(_, _) => {
                self.selection = RangeSelection::AnchorOnly(date);
                log::debug!("📅 Range anchored at {}", date);
                Effect::Emit
            }
            RangeSelection::AnchorOnly(anchor) if date >= anchor => {
                self.selection = RangeSelection::Complete(anchor, date);
                log::debug!("📅 Range completed {} - {}", anchor, date);
                Effect::EmitAndClose
            }
            RangeSelection::AnchorOnly(anchor) => {
                self.selection = RangeSelection::AnchorOnly(date);
                log::debug!("📅 Range re-anchored from {} to {}", anchor, date);
                Effect::Emit
            }
        }
    }

    /// Track the pointer while awaiting the second endpoint
    pub fn hover_over(&mut self, date: CalendarDate) {
        if matches!(self.selection, RangeSelection::AnchorOnly(_)) {
            self.hover = Some(date);
        }
    }

    pub fn leave(&mut self) {
        self.hover = None;
    }

    /// Drop both endpoints; always emits
    pub fn clear(&mut self) -> Effect {
        self.selection = RangeSelection::NoAnchor;
        self.hover = None;
        Effect::Emit
    }
}
