//! Time-only picker: an hours column, a minutes column, confirm and clear.

use shared::{PickerKey, TimeOfDay};

use super::{placeholder_or, translations_for, TimeCallback};
use crate::config::PickerConfig;
use crate::time::{hour_options, minute_options, parse_time_lenient};

/// Controller for a time picker. The committed value is a zero-padded
/// `"HH:MM"` string owned by the caller.
pub struct TimePicker {
    config: PickerConfig,
    value: Option<String>,
    /// Current position of the two columns
    time: TimeOfDay,
    is_open: bool,
    on_change: Option<TimeCallback>,
}

impl TimePicker {
    pub fn new(config: PickerConfig, value: Option<&str>) -> Self {
        Self {
            config,
            value: value.map(str::to_string),
            time: parse_time_lenient(value),
            is_open: false,
            on_change: None,
        }
    }

    pub fn on_change(mut self, callback: impl FnMut(Option<String>) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Push the caller-owned value in; never invokes the callback
    pub fn set_time(&mut self, value: Option<&str>) {
        self.value = value.map(str::to_string);
        self.time = parse_time_lenient(value);
    }

    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Open the columns at the committed value
    pub fn open(&mut self) {
        if self.config.disabled {
            log::debug!("TimePicker is disabled; not opening");
            return;
        }
        self.time = parse_time_lenient(self.value.as_deref());
        self.is_open = true;
        log::info!("🕐 TimePicker opened at {}", self.time);
    }

    pub fn close(&mut self) {
        if self.is_open {
            log::info!("🕐 TimePicker closed");
        }
        self.is_open = false;
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn request_close(&mut self) {
        self.close();
    }

    /// Move the hours column (clamped to 0-23); nothing is emitted until confirm
    pub fn set_hours(&mut self, hours: u32) {
        if self.is_locked() {
            return;
        }
        self.time = self.time.with_hours(hours);
    }

    /// Move the minutes column (clamped to 0-59)
    pub fn set_minutes(&mut self, minutes: u32) {
        if self.is_locked() {
            return;
        }
        self.time = self.time.with_minutes(minutes);
    }

    /// Commit the columns as `"HH:MM"` and close
    pub fn confirm(&mut self) {
        if self.is_locked() {
            return;
        }
        let formatted = self.time.to_string();
        log::info!("🕐 TimePicker committed {}", formatted);
        self.value = Some(formatted.clone());
        self.emit(Some(formatted));
        self.close();
    }

    /// Commit `None`, reset the columns and close
    pub fn clear(&mut self) {
        if self.is_locked() {
            return;
        }
        log::info!("🕐 TimePicker cleared");
        self.value = None;
        self.time = TimeOfDay::midnight();
        self.emit(None);
        self.close();
    }

    /// Enter or Space confirms, Escape closes without committing
    pub fn handle_key(&mut self, key: PickerKey) -> bool {
        if !self.is_open {
            return false;
        }
        match key {
            _ if key.is_activation() => self.confirm(),
            PickerKey::Escape => self.close(),
            _ => return false,
        }
        true
    }

    /// Text for the input field; empty when nothing is committed
    pub fn formatted_value(&self) -> String {
        self.value
            .as_deref()
            .map(|value| parse_time_lenient(Some(value)).to_string())
            .unwrap_or_default()
    }

    pub fn placeholder(&self) -> String {
        placeholder_or(&self.config, translations_for(&self.config).select_time)
    }

    /// Localised headers of the hours and minutes columns
    pub fn column_labels(&self) -> (&'static str, &'static str) {
        let t = translations_for(&self.config);
        (t.hours, t.minutes)
    }

    pub fn hour_options(&self) -> Vec<u32> {
        hour_options().collect()
    }

    pub fn minute_options(&self) -> Vec<u32> {
        minute_options().collect()
    }

    fn is_locked(&self) -> bool {
        if self.config.disabled {
            log::warn!("TimePicker is disabled; ignoring value change");
        }
        self.config.disabled
    }

    fn emit(&mut self, value: Option<String>) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_picker(value: Option<&str>) -> (TimePicker, Rc<RefCell<Vec<Option<String>>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let picker = TimePicker::new(PickerConfig::default(), value).on_change(move |v| sink.borrow_mut().push(v));
        (picker, events)
    }

    #[test]
    fn test_confirm_emits_padded_time_and_closes() {
        let (mut picker, events) = recording_picker(None);
        picker.open();
        picker.set_hours(7);
        picker.set_minutes(5);
        assert!(events.borrow().is_empty());

        picker.confirm();
        assert!(!picker.is_open());
        assert_eq!(events.borrow().as_slice(), &[Some("07:05".to_string())]);
        assert_eq!(picker.value(), Some("07:05"));
    }

    #[test]
    fn test_clear_emits_none_and_closes() {
        let (mut picker, events) = recording_picker(Some("10:30"));
        picker.open();
        picker.clear();
        assert!(!picker.is_open());
        assert_eq!(events.borrow().as_slice(), &[None]);
        assert_eq!(picker.formatted_value(), "");
        assert_eq!(picker.time(), TimeOfDay::midnight());
    }

    #[test]
    fn test_open_rereads_committed_value() {
        let (mut picker, _) = recording_picker(Some("9:7"));
        picker.open();
        assert_eq!(picker.time(), TimeOfDay::new(9, 7));

        picker.set_hours(30);
        assert_eq!(picker.time().hours, 23);
        picker.close();

        picker.open();
        assert_eq!(picker.time(), TimeOfDay::new(9, 7));
        assert_eq!(picker.formatted_value(), "09:07");
    }

    #[test]
    fn test_malformed_value_falls_back_to_midnight() {
        let (mut picker, _) = recording_picker(Some("soon"));
        picker.open();
        assert_eq!(picker.time(), TimeOfDay::midnight());
    }

    #[test]
    fn test_disabled_never_opens() {
        let mut picker = TimePicker::new(PickerConfig::default().disabled(true), Some("12:00"));
        picker.toggle();
        assert!(!picker.is_open());
        assert!(!picker.handle_key(PickerKey::Enter));
    }

    #[test]
    fn test_disabled_never_commits() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let mut picker = TimePicker::new(PickerConfig::default().disabled(true), Some("12:00"))
            .on_change(move |v| sink.borrow_mut().push(v));

        picker.set_hours(3);
        picker.set_minutes(20);
        picker.confirm();
        picker.clear();

        assert!(events.borrow().is_empty());
        assert_eq!(picker.value(), Some("12:00"));
        assert_eq!(picker.time(), TimeOfDay::new(12, 0));
    }

    #[test]
    fn test_space_confirms() {
        let (mut picker, events) = recording_picker(Some("06:40"));
        picker.open();
        assert!(picker.handle_key(PickerKey::Space));
        assert!(!picker.is_open());
        assert_eq!(events.borrow().as_slice(), &[Some("06:40".to_string())]);
        assert!(!picker.handle_key(PickerKey::Space));
    }

    #[test]
    fn test_columns() {
        let (picker, _) = recording_picker(None);
        assert_eq!(picker.hour_options().len(), 24);
        assert_eq!(picker.minute_options().last(), Some(&59));
        assert_eq!(picker.column_labels(), ("Hours", "Minutes"));
    }
}
