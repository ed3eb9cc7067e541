use serde::{Deserialize, Serialize};
use std::fmt;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

/// A calendar day with no time-of-day attached.
///
/// Equality is structural (same year/month/day) and ordering is chronological,
/// which is exactly what `chrono::NaiveDate` provides.
pub type CalendarDate = NaiveDate;

/// Hours (0-23) and minutes (0-59) attached to a date when time selection is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hours: u32,
    pub minutes: u32,
}

impl TimeOfDay {
    /// Create a time of day, clamping out-of-range components instead of rejecting them
    pub fn new(hours: u32, minutes: u32) -> Self {
        Self {
            hours: hours.min(23),
            minutes: minutes.min(59),
        }
    }

    pub fn midnight() -> Self {
        Self::default()
    }

    /// Replace the hour component (clamped to 0-23)
    pub fn with_hours(self, hours: u32) -> Self {
        Self::new(hours, self.minutes)
    }

    /// Replace the minute component (clamped to 0-59)
    pub fn with_minutes(self, minutes: u32) -> Self {
        Self::new(self.hours, minutes)
    }

    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hours, self.minutes, 0).unwrap_or(NaiveTime::MIN)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        use chrono::Timelike;
        Self::new(time.hour(), time.minute())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

/// Committed value of a single-date picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedDate {
    pub date: CalendarDate,
    /// Only present when the picker runs with time selection enabled
    pub time: Option<TimeOfDay>,
}

impl SelectedDate {
    pub fn date_only(date: CalendarDate) -> Self {
        Self { date, time: None }
    }

    pub fn with_time(date: CalendarDate, time: TimeOfDay) -> Self {
        Self { date, time: Some(time) }
    }

    /// Combine date and time; a missing time is treated as midnight
    pub fn to_naive_datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.time.unwrap_or_default().to_naive_time())
    }
}

impl From<NaiveDateTime> for SelectedDate {
    fn from(value: NaiveDateTime) -> Self {
        Self::with_time(value.date(), value.time().into())
    }
}

/// Committed value of a range picker; either side may be unset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<CalendarDate>,
    pub end: Option<CalendarDate>,
}

impl DateRange {
    pub fn new(start: Option<CalendarDate>, end: Option<CalendarDate>) -> Self {
        Self { start, end }
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

/// One cell of a Monday-first month grid
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GridCell {
    /// Padding before day 1 or after the last day of the month
    Empty,
    /// Day of the month, 1-based
    Day(u32),
}

impl GridCell {
    pub fn day(&self) -> Option<u32> {
        match self {
            GridCell::Empty => None,
            GridCell::Day(day) => Some(*day),
        }
    }
}

/// Layout of one month, Monday-first, always a whole number of weeks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<GridCell>,
}

impl MonthGrid {
    /// Number of padding cells before day 1
    pub fn leading_empty_count(&self) -> usize {
        self.cells
            .iter()
            .take_while(|cell| matches!(cell, GridCell::Empty))
            .count()
    }

    pub fn day_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.day().is_some()).count()
    }

    /// Resolve a grid cell to its date; `None` for padding
    pub fn date_of(&self, cell: GridCell) -> Option<CalendarDate> {
        cell.day()
            .and_then(|day| NaiveDate::from_ymd_opt(self.year, self.month, day))
    }

    pub fn weeks(&self) -> std::slice::Chunks<'_, GridCell> {
        self.cells.chunks(7)
    }
}

/// Caller-supplied override bound to a single date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomDayEntry {
    pub date: CalendarDate,
    /// Short text rendered under the day number (e.g. a price)
    #[serde(default)]
    pub label: Option<String>,
    /// Opaque style token handed through to the rendering layer
    #[serde(default)]
    pub style: Option<String>,
    /// Forces the day to be disabled regardless of min/max bounds
    #[serde(default)]
    pub disabled: bool,
}

impl CustomDayEntry {
    pub fn new(date: CalendarDate) -> Self {
        Self {
            date,
            label: None,
            style: None,
            disabled: false,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Logical style slot a rendering layer maps to concrete theme tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DaySlot {
    Empty,
    Normal,
    Today,
    Selected,
    RangeEdge,
    RangeMember,
    HoverPreview,
    Custom,
    Disabled,
}

/// Derived state of one day, computed on demand for the current configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAnnotation {
    pub disabled: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub is_focused: bool,
    pub is_range_start: bool,
    pub is_range_end: bool,
    pub is_range_member: bool,
    /// Inside the hover preview while only the range anchor is committed
    pub is_hover_preview: bool,
    pub custom: Option<CustomDayEntry>,
}

impl DayAnnotation {
    /// Pick the single style slot that wins for this day
    pub fn slot(&self) -> DaySlot {
        if self.is_selected {
            DaySlot::Selected
        } else if self.is_range_start || self.is_range_end {
            DaySlot::RangeEdge
        } else if self.is_range_member {
            DaySlot::RangeMember
        } else if self.is_hover_preview {
            DaySlot::HoverPreview
        } else if self.custom.as_ref().is_some_and(|c| c.style.is_some()) {
            DaySlot::Custom
        } else if self.disabled {
            DaySlot::Disabled
        } else if self.is_today {
            DaySlot::Today
        } else {
            DaySlot::Normal
        }
    }
}

/// One annotated cell of the day-state stream handed to renderers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub cell: GridCell,
    pub date: Option<CalendarDate>,
    pub annotation: DayAnnotation,
}

impl DayCell {
    pub fn empty() -> Self {
        Self {
            cell: GridCell::Empty,
            date: None,
            annotation: DayAnnotation::default(),
        }
    }

    pub fn slot(&self) -> DaySlot {
        match self.cell {
            GridCell::Empty => DaySlot::Empty,
            GridCell::Day(_) => self.annotation.slot(),
        }
    }
}

/// Seven annotated cells plus the ISO week number when week numbers are shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRow {
    pub week_number: Option<u32>,
    pub cells: Vec<DayCell>,
}

/// Annotated view of one displayed month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    /// Localised header, e.g. "January 2024"
    pub title: String,
    pub weeks: Vec<WeekRow>,
}

impl MonthView {
    /// All cells in display order
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flat_map(|week| week.cells.iter())
    }

    pub fn cell_for(&self, date: CalendarDate) -> Option<&DayCell> {
        self.cells().find(|cell| cell.date == Some(date))
    }
}

/// The month a calendar pane is currently showing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DisplayedMonth {
    pub year: i32,
    pub month: u32,
}

impl DisplayedMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
        }
    }

    pub fn of(date: CalendarDate) -> Self {
        Self::new(date.year(), date.month())
    }

    /// Previous calendar month, wrapping into the previous year
    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    /// Next calendar month, wrapping into the next year
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn first_day(&self) -> Option<CalendarDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl Default for DisplayedMonth {
    fn default() -> Self {
        Self::of(chrono::Local::now().date_naive())
    }
}

/// Display pattern for committed dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DateFormat {
    /// `DD/MM/YYYY`
    #[default]
    DayMonthYear,
    /// `MM/DD/YYYY`
    MonthDayYear,
    /// `YYYY-MM-DD`
    Iso,
    /// `DD.MM.YYYY`
    DottedDayMonthYear,
    /// Whatever the language's conventional short format is
    LocaleDefault,
}

impl DateFormat {
    /// Recognise a known pattern; unknown patterns yield `None`
    pub fn from_pattern(pattern: &str) -> Option<Self> {
        match pattern.trim() {
            "DD/MM/YYYY" => Some(Self::DayMonthYear),
            "MM/DD/YYYY" => Some(Self::MonthDayYear),
            "YYYY-MM-DD" => Some(Self::Iso),
            "DD.MM.YYYY" => Some(Self::DottedDayMonthYear),
            "locale" | "" => Some(Self::LocaleDefault),
            _ => None,
        }
    }

    pub fn pattern(&self) -> &'static str {
        match self {
            Self::DayMonthYear => "DD/MM/YYYY",
            Self::MonthDayYear => "MM/DD/YYYY",
            Self::Iso => "YYYY-MM-DD",
            Self::DottedDayMonthYear => "DD.MM.YYYY",
            Self::LocaleDefault => "locale",
        }
    }
}

impl From<String> for DateFormat {
    fn from(pattern: String) -> Self {
        Self::from_pattern(&pattern).unwrap_or(Self::LocaleDefault)
    }
}

impl From<DateFormat> for String {
    fn from(format: DateFormat) -> Self {
        format.pattern().to_string()
    }
}

/// Named shortcut resolved to a concrete date at invocation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuickSelect {
    Today,
    Tomorrow,
    Yesterday,
    ThisWeek,
    LastWeek,
    NextWeek,
    ThisMonth,
    LastMonth,
    NextMonth,
    In7Days,
    In30Days,
}

impl QuickSelect {
    /// All shortcuts in the order they are offered to the user
    pub fn all() -> [QuickSelect; 11] {
        [
            QuickSelect::Today,
            QuickSelect::Tomorrow,
            QuickSelect::Yesterday,
            QuickSelect::ThisWeek,
            QuickSelect::LastWeek,
            QuickSelect::NextWeek,
            QuickSelect::ThisMonth,
            QuickSelect::LastMonth,
            QuickSelect::NextMonth,
            QuickSelect::In7Days,
            QuickSelect::In30Days,
        ]
    }

    pub fn token(&self) -> &'static str {
        match self {
            QuickSelect::Today => "today",
            QuickSelect::Tomorrow => "tomorrow",
            QuickSelect::Yesterday => "yesterday",
            QuickSelect::ThisWeek => "thisWeek",
            QuickSelect::LastWeek => "lastWeek",
            QuickSelect::NextWeek => "nextWeek",
            QuickSelect::ThisMonth => "thisMonth",
            QuickSelect::LastMonth => "lastMonth",
            QuickSelect::NextMonth => "nextMonth",
            QuickSelect::In7Days => "in7Days",
            QuickSelect::In30Days => "in30Days",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::all().into_iter().find(|q| q.token() == token)
    }
}

/// Supported translation tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Tr,
    De,
    Fr,
    Es,
    It,
    Pt,
    Ru,
    Ja,
    Zh,
    Ar,
}

impl Language {
    pub fn all() -> [Language; 11] {
        [
            Language::En,
            Language::Tr,
            Language::De,
            Language::Fr,
            Language::Es,
            Language::It,
            Language::Pt,
            Language::Ru,
            Language::Ja,
            Language::Zh,
            Language::Ar,
        ]
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Tr => "tr",
            Language::De => "de",
            Language::Fr => "fr",
            Language::Es => "es",
            Language::It => "it",
            Language::Pt => "pt",
            Language::Ru => "ru",
            Language::Ja => "ja",
            Language::Zh => "zh",
            Language::Ar => "ar",
        }
    }

    /// Match a language tag such as `"de"` or `"pt-BR"`; case-insensitive
    pub fn parse_tag(tag: &str) -> Option<Self> {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        Self::all().into_iter().find(|lang| lang.tag() == primary)
    }
}

/// Keys the focus navigator understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickerKey {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    Enter,
    Space,
    Escape,
}

impl PickerKey {
    /// Map a DOM-style key name (`"ArrowLeft"`, `" "`, `"Escape"` ...) to a picker key
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "Left" => Some(PickerKey::ArrowLeft),
            "ArrowRight" | "Right" => Some(PickerKey::ArrowRight),
            "ArrowUp" | "Up" => Some(PickerKey::ArrowUp),
            "ArrowDown" | "Down" => Some(PickerKey::ArrowDown),
            "Home" => Some(PickerKey::Home),
            "End" => Some(PickerKey::End),
            "Enter" => Some(PickerKey::Enter),
            " " | "Space" | "Spacebar" => Some(PickerKey::Space),
            "Escape" | "Esc" => Some(PickerKey::Escape),
            _ => None,
        }
    }

    pub fn is_activation(&self) -> bool {
        matches!(self, PickerKey::Enter | PickerKey::Space)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_time_of_day_clamps_components() {
        let time = TimeOfDay::new(27, 75);
        assert_eq!(time, TimeOfDay { hours: 23, minutes: 59 });
        assert_eq!(time.with_hours(7).to_string(), "07:59");
    }

    #[test]
    fn test_displayed_month_wraps_years() {
        let december = DisplayedMonth::new(2023, 12);
        assert_eq!(december.next(), DisplayedMonth::new(2024, 1));
        assert_eq!(DisplayedMonth::new(2024, 1).previous(), december);
        assert!(december.contains(date(2023, 12, 31)));
        assert!(!december.contains(date(2024, 12, 31)));
    }

    #[test]
    fn test_unknown_format_pattern_falls_back_to_locale_default() {
        assert_eq!(DateFormat::from("DD.MM.YYYY".to_string()), DateFormat::DottedDayMonthYear);
        assert_eq!(DateFormat::from("YYYY/DD".to_string()), DateFormat::LocaleDefault);

        let parsed: DateFormat = serde_json::from_str("\"MM/DD/YYYY\"").unwrap();
        assert_eq!(parsed, DateFormat::MonthDayYear);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(PickerKey::from_key_name("ArrowLeft"), Some(PickerKey::ArrowLeft));
        assert_eq!(PickerKey::from_key_name("Esc"), Some(PickerKey::Escape));
        assert_eq!(PickerKey::from_key_name(" "), Some(PickerKey::Space));
        assert_eq!(PickerKey::from_key_name("PageUp"), None);

        assert!(PickerKey::Enter.is_activation());
        assert!(PickerKey::Space.is_activation());
        assert!(!PickerKey::Escape.is_activation());
    }

    #[test]
    fn test_quick_select_tokens() {
        assert_eq!(QuickSelect::from_token("in30Days"), Some(QuickSelect::In30Days));
        assert_eq!(serde_json::to_string(&QuickSelect::ThisWeek).unwrap(), "\"thisWeek\"");
        assert_eq!(QuickSelect::from_token("fortnight"), None);
    }

    #[test]
    fn test_language_tag_parsing() {
        assert_eq!(Language::parse_tag("pt-BR"), Some(Language::Pt));
        assert_eq!(Language::parse_tag("DE"), Some(Language::De));
        assert_eq!(Language::parse_tag("xx"), None);
    }

    #[test]
    fn test_annotation_slot_priority() {
        let mut annotation = DayAnnotation {
            is_today: true,
            ..Default::default()
        };
        assert_eq!(annotation.slot(), DaySlot::Today);

        annotation.disabled = true;
        assert_eq!(annotation.slot(), DaySlot::Disabled);

        annotation.custom = Some(CustomDayEntry::new(date(2024, 1, 1)).with_style("booked"));
        assert_eq!(annotation.slot(), DaySlot::Custom);

        annotation.is_range_member = true;
        assert_eq!(annotation.slot(), DaySlot::RangeMember);

        annotation.is_selected = true;
        assert_eq!(annotation.slot(), DaySlot::Selected);
        assert_eq!(DayCell::empty().slot(), DaySlot::Empty);
    }
}
