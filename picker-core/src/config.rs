//! # Picker Configuration
//!
//! Per-instance settings the caller hands to a widget controller. The same
//! structure serves all three widgets; fields a widget has no use for are
//! simply ignored (the time picker only looks at `disabled`, `language` and
//! `placeholder`).
//!
//! Configuration can be built in code or loaded from YAML:
//!
//! ```yaml
//! min_date: 2024-01-01
//! max_date: 2024-12-31
//! format: DD/MM/YYYY
//! language: de
//! show_week_numbers: true
//! custom_days:
//!   - date: 2024-02-14
//!     label: "$120"
//!   - date: 2024-02-15
//!     disabled: true
//!     style: booked
//! ```
//!
//! Invalid combinations are never rejected: `max_date < min_date` yields an
//! always-disabled grid, an unknown format falls back to the locale default and
//! an unknown language falls back to English. [`PickerConfig::validate`]
//! reports these as warnings for callers that want to surface them.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use shared::{CustomDayEntry, DateFormat, Language};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Caller-supplied configuration for one picker instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Earliest selectable day (inclusive)
    pub min_date: Option<NaiveDate>,
    /// Latest selectable day (inclusive)
    pub max_date: Option<NaiveDate>,
    /// Disabled widgets never open and never change their value
    pub disabled: bool,
    /// Per-day overrides; first match wins when a date appears twice
    pub custom_days: Vec<CustomDayEntry>,
    pub format: DateFormat,
    /// Language tag such as `en` or `pt-BR`
    pub language: String,
    pub placeholder: Option<String>,
    pub show_time: bool,
    pub show_quick_select: bool,
    pub show_week_numbers: bool,
    /// Month shown when the picker opens without a committed value
    pub initial_month: Option<NaiveDate>,
    /// Cosmetic only; carried for the rendering layer
    pub animation_duration_ms: u32,
    /// Pattern that did not match any known format, kept for `validate`
    #[serde(skip)]
    unrecognised_format: Option<String>,
}

/// The raw `format` key, read alongside the typed config
#[derive(Deserialize)]
struct FormatPattern {
    format: Option<String>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            min_date: None,
            max_date: None,
            disabled: false,
            custom_days: Vec::new(),
            format: DateFormat::default(),
            language: Language::En.tag().to_string(),
            placeholder: None,
            show_time: false,
            show_quick_select: false,
            show_week_numbers: false,
            initial_month: None,
            animation_duration_ms: 200,
            unrecognised_format: None,
        }
    }
}

/// Soft problems found in a configuration; none of them stop a picker from working
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigWarning {
    #[error("max_date {max} is before min_date {min}; every day will be disabled")]
    InvertedBounds { min: NaiveDate, max: NaiveDate },
    #[error("Unsupported language '{0}', falling back to English")]
    UnknownLanguage(String),
    #[error("Custom day {0} appears more than once; the first entry wins")]
    DuplicateCustomDay(NaiveDate),
    #[error("Unknown date format '{0}', falling back to the locale default")]
    UnknownFormat(String),
}

impl PickerConfig {
    /// Parse a YAML document; missing keys take their defaults
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let mut config: PickerConfig = serde_yaml::from_str(yaml)?;
        if let Ok(FormatPattern { format: Some(pattern) }) = serde_yaml::from_str(yaml) {
            config.note_format_pattern(&pattern);
        }
        Ok(config)
    }

    /// Load a YAML configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        log::debug!("Loaded picker config from {:?}", path);
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Set the lower bound from a date-time; only the calendar day is kept so
    /// the bound's own day stays selectable
    pub fn with_min_datetime(mut self, min: NaiveDateTime) -> Self {
        self.min_date = Some(min.date());
        self
    }

    /// Set the upper bound from a date-time; the whole day stays selectable
    pub fn with_max_datetime(mut self, max: NaiveDateTime) -> Self {
        self.max_date = Some(max.date());
        self
    }

    pub fn with_bounds(mut self, min: Option<NaiveDate>, max: Option<NaiveDate>) -> Self {
        self.min_date = min;
        self.max_date = max;
        self
    }

    pub fn with_custom_days(mut self, custom_days: Vec<CustomDayEntry>) -> Self {
        self.custom_days = custom_days;
        self
    }

    pub fn with_format(mut self, format: DateFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the format from a pattern string such as `DD.MM.YYYY`; unknown
    /// patterns fall back to the locale default
    pub fn with_format_pattern(mut self, pattern: &str) -> Self {
        self.format = DateFormat::from(pattern.to_string());
        self.note_format_pattern(pattern);
        self
    }

    fn note_format_pattern(&mut self, pattern: &str) {
        if DateFormat::from_pattern(pattern).is_some() {
            self.unrecognised_format = None;
        } else {
            log::warn!("Unknown date format '{}'; using the locale default", pattern);
            self.unrecognised_format = Some(pattern.to_string());
        }
    }

    pub fn with_language(mut self, tag: impl Into<String>) -> Self {
        self.language = tag.into();
        self
    }

    pub fn with_time(mut self, show_time: bool) -> Self {
        self.show_time = show_time;
        self
    }

    pub fn with_week_numbers(mut self, show_week_numbers: bool) -> Self {
        self.show_week_numbers = show_week_numbers;
        self
    }

    pub fn with_quick_select(mut self, show_quick_select: bool) -> Self {
        self.show_quick_select = show_quick_select;
        self
    }

    pub fn with_initial_month(mut self, month: NaiveDate) -> Self {
        self.initial_month = Some(month);
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Resolve the language tag, falling back to English
    pub fn language(&self) -> Language {
        Language::parse_tag(&self.language).unwrap_or_default()
    }

    /// Report soft configuration problems without changing behaviour
    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if let (Some(min), Some(max)) = (self.min_date, self.max_date) {
            if max < min {
                warnings.push(ConfigWarning::InvertedBounds { min, max });
            }
        }

        if Language::parse_tag(&self.language).is_none() {
            warnings.push(ConfigWarning::UnknownLanguage(self.language.clone()));
        }

        if let Some(pattern) = &self.unrecognised_format {
            warnings.push(ConfigWarning::UnknownFormat(pattern.clone()));
        }

        let mut seen: Vec<NaiveDate> = Vec::new();
        for entry in &self.custom_days {
            if seen.contains(&entry.date) {
                if !warnings.contains(&ConfigWarning::DuplicateCustomDay(entry.date)) {
                    warnings.push(ConfigWarning::DuplicateCustomDay(entry.date));
                }
            } else {
                seen.push(entry.date);
            }
        }

        for warning in &warnings {
            log::warn!("⚠️ {}", warning);
        }

        warnings
    }
}
