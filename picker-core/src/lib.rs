//! # Picker Core
//!
//! Calendar arithmetic and selection-state engine shared by the date, date-range
//! and time pickers. Nothing here draws anything: controllers take clicks, key
//! presses and hover events in, and hand back committed values plus a
//! day-state stream ([`shared::MonthView`]) for a rendering layer.
//!
//! - Pure date math and predicates (`calendar`, `predicates`)
//! - Selection and focus state machines (`selection`, `navigation`, `session`)
//! - Widget controllers composing them (`controllers`)
//! - Ambient pieces: YAML configuration, translations, themes, formatting

// Engine
pub mod annotate;
pub mod calendar;
pub mod navigation;
pub mod predicates;
pub mod quick_select;
pub mod selection;
pub mod session;

// Widgets
pub mod controllers;

// Supporting modules
pub mod clock;
pub mod config;
pub mod error;
pub mod format;
pub mod i18n;
pub mod theme;
pub mod time;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigWarning, PickerConfig};
pub use controllers::{DatePicker, DateRangePicker, TimePicker};
pub use error::{PickerError, Result};
pub use session::Pane;
pub use theme::{Theme, ThemePreset};
