//! # Picker Session
//!
//! Transient state of an open picker.
//!
//! ## Responsibilities:
//! - Open/closed flag
//! - Keyboard focus cursor (cleared on close)
//! - Displayed month(s), one pane or two panes kept exactly one month apart
//! - The one-shot focus transfer requested right after opening
//!
//! ## Purpose:
//! Keeps pagination and focus bookkeeping out of the widget controllers so the
//! single and range pickers share one implementation.

use shared::{CalendarDate, DisplayedMonth};

/// How many month grids the picker shows side by side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneLayout {
    Single,
    /// Left and right panes, always consecutive months
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Left,
    Right,
}

/// Session state for one picker instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerSession {
    is_open: bool,
    focused_date: Option<CalendarDate>,
    /// Month of the (left) pane; the right pane is always the month after
    displayed: DisplayedMonth,
    layout: PaneLayout,
    focus_request: Option<CalendarDate>,
}

impl PickerSession {
    pub fn new(layout: PaneLayout, displayed: DisplayedMonth) -> Self {
        Self {
            is_open: false,
            focused_date: None,
            displayed,
            layout,
            focus_request: None,
        }
    }

    /// Start a session focused on `focus` and showing `displayed` in the (left)
    /// pane. The focus may start off-screen; the first move repaginates.
    pub fn open(&mut self, focus: CalendarDate, displayed: DisplayedMonth) {
        self.is_open = true;
        self.displayed = displayed;
        self.focused_date = Some(focus);
        self.focus_request = Some(focus);
        log::info!("📅 Picker opened on {}/{} focused at {}", self.displayed.month, self.displayed.year, focus);
    }

    /// End the session; the focus cursor does not survive
    pub fn close(&mut self) {
        if self.is_open {
            log::info!("📅 Picker closed");
        }
        self.is_open = false;
        self.focused_date = None;
        self.focus_request = None;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn focused_date(&self) -> Option<CalendarDate> {
        self.focused_date
    }

    pub fn layout(&self) -> PaneLayout {
        self.layout
    }

    /// Month shown in the (left) pane
    pub fn displayed_month(&self) -> DisplayedMonth {
        self.displayed
    }

    /// All displayed months, left to right
    pub fn displayed_months(&self) -> Vec<DisplayedMonth> {
        match self.layout {
            PaneLayout::Single => vec![self.displayed],
            PaneLayout::Double => vec![self.displayed, self.displayed.next()],
        }
    }

    pub fn show_month(&mut self, month: DisplayedMonth) {
        self.displayed = month;
    }

    /// Navigate to the previous month (both panes move together)
    pub fn navigate_to_previous_month(&mut self) {
        self.displayed = self.displayed.previous();
        log::debug!("📅 Navigated to previous month: {}/{}", self.displayed.month, self.displayed.year);
    }

    /// Navigate to the next month (both panes move together)
    pub fn navigate_to_next_month(&mut self) {
        self.displayed = self.displayed.next();
        log::debug!("📅 Navigated to next month: {}/{}", self.displayed.month, self.displayed.year);
    }

    /// Page one pane; the other pane follows so the two never overlap or invert
    pub fn shift_pane(&mut self, pane: Pane, forward: bool) {
        // The right pane is derived from the left, so either pane's arrow
        // moves the pair by one month.
        self.displayed = if forward {
            self.displayed.next()
        } else {
            self.displayed.previous()
        };
        log::debug!(
            "📅 Shifted {:?} pane {}: showing {}/{}",
            pane,
            if forward { "forward" } else { "back" },
            self.displayed.month,
            self.displayed.year
        );
    }

    pub fn is_visible(&self, date: CalendarDate) -> bool {
        self.displayed_months().iter().any(|month| month.contains(date))
    }

    /// Repaginate so `date` is on screen. Moving backwards puts it in the left
    /// pane, moving forwards puts it in the rightmost pane.
    pub fn reveal(&mut self, date: CalendarDate) {
        if self.is_visible(date) {
            return;
        }

        let target = DisplayedMonth::of(date);
        self.displayed = if target < self.displayed || self.layout == PaneLayout::Single {
            target
        } else {
            target.previous()
        };
        log::debug!("📅 Repaginated to {}/{} to show {}", self.displayed.month, self.displayed.year, date);
    }

    /// Move the focus cursor, repaginating when it leaves the visible months
    pub fn set_focus(&mut self, date: CalendarDate) {
        self.focused_date = Some(date);
        self.reveal(date);
    }

    /// Month Home/End jump within: the focused date's month when visible,
    /// otherwise the (left) displayed month
    pub fn home_end_month(&self) -> DisplayedMonth {
        match self.focused_date {
            Some(focused) if self.is_visible(focused) => DisplayedMonth::of(focused),
            _ => self.displayed,
        }
    }

    /// Take the deferred focus transfer queued by `open`. Yields nothing once
    /// the picker has closed or the request was already taken.
    pub fn take_focus_request(&mut self) -> Option<CalendarDate> {
        let request = self.focus_request.take();
        if self.is_open {
            request
        } else {
            None
        }
    }
}
