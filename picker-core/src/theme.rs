//! # Theme Configuration
//!
//! Named colour, spacing, radius, shadow and font tokens for the pickers.
//! The engine never reads these itself; a rendering layer asks the theme for
//! the style of a logical [`DaySlot`] and draws with whatever it gets back.
//!
//! ## Presets
//! `default`, `material`, `minimal` and `glassmorphism` are built in. Custom
//! themes deserialize from the same structure.
//!
//! ## Usage
//! ```rust
//! use picker_core::theme::Theme;
//! use shared::DaySlot;
//!
//! let theme = Theme::material();
//! let selected = theme.slot_style(DaySlot::Selected);
//! assert_eq!(selected.background, "#1976d2");
//! ```

use serde::{Deserialize, Serialize};
use shared::DaySlot;

/// Main theme configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
    pub spacing: ThemeScale,
    pub radius: ThemeRadius,
    pub shadows: ThemeShadows,
    pub fonts: ThemeFonts,
}

/// Colour tokens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    /// Accent colour used for selection and the today marker
    pub primary: String,
    pub background: String,
    pub surface: String,
    pub text: String,
    pub text_secondary: String,
    pub border: String,
    pub hover: String,
    /// Soft accent used for range members
    pub selected: String,
    pub disabled: String,
    pub error: String,
    pub success: String,
}

/// Five-step size scale (spacing and font sizes)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeScale {
    pub xs: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeRadius {
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeShadows {
    pub sm: String,
    pub md: String,
    pub lg: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeFonts {
    pub family: String,
    pub size: ThemeScale,
    pub weight: FontWeights,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontWeights {
    pub normal: u16,
    pub medium: u16,
    pub semibold: u16,
    pub bold: u16,
}

/// Built-in theme names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    #[default]
    Default,
    Material,
    Minimal,
    Glassmorphism,
}

impl ThemePreset {
    pub fn all() -> [ThemePreset; 4] {
        [
            ThemePreset::Default,
            ThemePreset::Material,
            ThemePreset::Minimal,
            ThemePreset::Glassmorphism,
        ]
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemePreset::Default => Theme::default_theme(),
            ThemePreset::Material => Theme::material(),
            ThemePreset::Minimal => Theme::minimal(),
            ThemePreset::Glassmorphism => Theme::glassmorphism(),
        }
    }
}

/// Concrete tokens for one logical day slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotStyle {
    pub background: String,
    pub text: String,
    pub border: Option<String>,
}

impl SlotStyle {
    fn new(background: &str, text: &str) -> Self {
        Self {
            background: background.to_string(),
            text: text.to_string(),
            border: None,
        }
    }

    fn with_border(mut self, border: &str) -> Self {
        self.border = Some(border.to_string());
        self
    }
}

fn scale(xs: &str, sm: &str, md: &str, lg: &str, xl: &str) -> ThemeScale {
    ThemeScale {
        xs: xs.to_string(),
        sm: sm.to_string(),
        md: md.to_string(),
        lg: lg.to_string(),
        xl: xl.to_string(),
    }
}

fn radius(sm: &str, md: &str, lg: &str, xl: &str) -> ThemeRadius {
    ThemeRadius {
        sm: sm.to_string(),
        md: md.to_string(),
        lg: lg.to_string(),
        xl: xl.to_string(),
    }
}

fn shadows(sm: &str, md: &str, lg: &str) -> ThemeShadows {
    ThemeShadows {
        sm: sm.to_string(),
        md: md.to_string(),
        lg: lg.to_string(),
    }
}

/// Colours in declaration order: primary, background, surface, text,
/// text_secondary, border, hover, selected, disabled, error, success
fn colors(values: [&str; 11]) -> ThemeColors {
    let [primary, background, surface, text, text_secondary, border, hover, selected, disabled, error, success] =
        values.map(str::to_string);
    ThemeColors {
        primary,
        background,
        surface,
        text,
        text_secondary,
        border,
        hover,
        selected,
        disabled,
        error,
        success,
    }
}

const STANDARD_WEIGHTS: FontWeights = FontWeights {
    normal: 400,
    medium: 500,
    semibold: 600,
    bold: 700,
};

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    /// Blue accent on white
    pub fn default_theme() -> Self {
        Self {
            name: "Default".to_string(),
            colors: colors([
                "#3b82f6", "#ffffff", "#f9fafb", "#111827", "#6b7280", "#e5e7eb", "#f3f4f6", "#dbeafe", "#d1d5db",
                "#ef4444", "#10b981",
            ]),
            spacing: scale("0.25rem", "0.5rem", "1rem", "1.5rem", "2rem"),
            radius: radius("0.25rem", "0.5rem", "0.75rem", "1rem"),
            shadows: shadows(
                "0 1px 2px 0 rgb(0 0 0 / 0.05)",
                "0 4px 6px -1px rgb(0 0 0 / 0.1)",
                "0 10px 15px -3px rgb(0 0 0 / 0.1)",
            ),
            fonts: ThemeFonts {
                family: r#"-apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif"#
                    .to_string(),
                size: scale("0.75rem", "0.875rem", "1rem", "1.125rem", "1.25rem"),
                weight: STANDARD_WEIGHTS,
            },
        }
    }

    pub fn material() -> Self {
        Self {
            name: "Material".to_string(),
            colors: colors([
                "#1976d2", "#ffffff", "#fafafa", "#212121", "#757575", "#e0e0e0", "#f5f5f5", "#bbdefb", "#bdbdbd",
                "#d32f2f", "#388e3c",
            ]),
            spacing: scale("4px", "8px", "16px", "24px", "32px"),
            radius: radius("2px", "4px", "8px", "12px"),
            shadows: shadows(
                "0 2px 1px -1px rgba(0,0,0,.2), 0 1px 1px 0 rgba(0,0,0,.14), 0 1px 3px 0 rgba(0,0,0,.12)",
                "0 3px 3px -2px rgba(0,0,0,.2), 0 3px 4px 0 rgba(0,0,0,.14), 0 1px 8px 0 rgba(0,0,0,.12)",
                "0 5px 5px -3px rgba(0,0,0,.2), 0 8px 10px 1px rgba(0,0,0,.14), 0 3px 14px 2px rgba(0,0,0,.12)",
            ),
            fonts: ThemeFonts {
                family: r#"Roboto, "Helvetica Neue", Arial, sans-serif"#.to_string(),
                size: scale("0.75rem", "0.875rem", "1rem", "1.25rem", "1.5rem"),
                weight: STANDARD_WEIGHTS,
            },
        }
    }

    /// Black and white, square corners, no shadows
    pub fn minimal() -> Self {
        Self {
            name: "Minimal".to_string(),
            colors: colors([
                "#000000", "#ffffff", "#ffffff", "#000000", "#666666", "#e0e0e0", "#f5f5f5", "#f0f0f0", "#cccccc",
                "#ff0000", "#00ff00",
            ]),
            spacing: scale("0.25rem", "0.5rem", "1rem", "1.5rem", "2rem"),
            radius: radius("0", "0", "0", "0"),
            shadows: shadows("none", "none", "none"),
            fonts: ThemeFonts {
                family: r#""Helvetica Neue", Arial, sans-serif"#.to_string(),
                size: scale("0.75rem", "0.875rem", "1rem", "1.125rem", "1.25rem"),
                weight: FontWeights {
                    medium: 400,
                    ..STANDARD_WEIGHTS
                },
            },
        }
    }

    /// Translucent surfaces with a violet accent
    pub fn glassmorphism() -> Self {
        Self {
            name: "Glassmorphism".to_string(),
            colors: colors([
                "#8b5cf6",
                "rgba(255, 255, 255, 0.7)",
                "rgba(255, 255, 255, 0.5)",
                "#1f2937",
                "#6b7280",
                "rgba(255, 255, 255, 0.3)",
                "rgba(255, 255, 255, 0.6)",
                "rgba(139, 92, 246, 0.2)",
                "rgba(156, 163, 175, 0.5)",
                "#ef4444",
                "#10b981",
            ]),
            spacing: scale("0.25rem", "0.5rem", "1rem", "1.5rem", "2rem"),
            radius: radius("0.5rem", "0.75rem", "1rem", "1.5rem"),
            shadows: shadows(
                "0 4px 6px rgba(0, 0, 0, 0.1)",
                "0 8px 16px rgba(0, 0, 0, 0.1)",
                "0 20px 25px rgba(0, 0, 0, 0.1)",
            ),
            fonts: ThemeFonts {
                family: r#"Inter, -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif"#.to_string(),
                size: scale("0.75rem", "0.875rem", "1rem", "1.125rem", "1.25rem"),
                weight: STANDARD_WEIGHTS,
            },
        }
    }

    /// Map a logical day slot to concrete colour tokens
    pub fn slot_style(&self, slot: DaySlot) -> SlotStyle {
        let c = &self.colors;
        match slot {
            DaySlot::Empty => SlotStyle::new("transparent", "transparent"),
            DaySlot::Normal => SlotStyle::new(&c.background, &c.text),
            DaySlot::Today => SlotStyle::new(&c.background, &c.primary).with_border(&c.primary),
            DaySlot::Selected | DaySlot::RangeEdge => SlotStyle::new(&c.primary, "#ffffff"),
            DaySlot::RangeMember => SlotStyle::new(&c.selected, &c.text),
            DaySlot::HoverPreview => SlotStyle::new(&c.hover, &c.text).with_border(&c.selected),
            DaySlot::Custom => SlotStyle::new(&c.surface, &c.text).with_border(&c.border),
            DaySlot::Disabled => SlotStyle::new(&c.background, &c.disabled),
        }
    }

    /// The full slot table, in a fixed order
    pub fn slot_styles(&self) -> Vec<(DaySlot, SlotStyle)> {
        [
            DaySlot::Empty,
            DaySlot::Normal,
            DaySlot::Today,
            DaySlot::Selected,
            DaySlot::RangeEdge,
            DaySlot::RangeMember,
            DaySlot::HoverPreview,
            DaySlot::Custom,
            DaySlot::Disabled,
        ]
        .into_iter()
        .map(|slot| (slot, self.slot_style(slot)))
        .collect()
    }

    /// `--dp-*` custom properties for hosts that style through CSS variables
    pub fn css_variables(&self) -> Vec<(String, String)> {
        let c = &self.colors;
        let sizes = &self.fonts.size;
        let tokens: [(&str, &str); 29] = [
            ("--dp-color-primary", c.primary.as_str()),
            ("--dp-color-background", c.background.as_str()),
            ("--dp-color-surface", c.surface.as_str()),
            ("--dp-color-text", c.text.as_str()),
            ("--dp-color-text-secondary", c.text_secondary.as_str()),
            ("--dp-color-border", c.border.as_str()),
            ("--dp-color-hover", c.hover.as_str()),
            ("--dp-color-selected", c.selected.as_str()),
            ("--dp-color-disabled", c.disabled.as_str()),
            ("--dp-color-error", c.error.as_str()),
            ("--dp-color-success", c.success.as_str()),
            ("--dp-spacing-xs", self.spacing.xs.as_str()),
            ("--dp-spacing-sm", self.spacing.sm.as_str()),
            ("--dp-spacing-md", self.spacing.md.as_str()),
            ("--dp-spacing-lg", self.spacing.lg.as_str()),
            ("--dp-spacing-xl", self.spacing.xl.as_str()),
            ("--dp-radius-sm", self.radius.sm.as_str()),
            ("--dp-radius-md", self.radius.md.as_str()),
            ("--dp-radius-lg", self.radius.lg.as_str()),
            ("--dp-radius-xl", self.radius.xl.as_str()),
            ("--dp-shadow-sm", self.shadows.sm.as_str()),
            ("--dp-shadow-md", self.shadows.md.as_str()),
            ("--dp-shadow-lg", self.shadows.lg.as_str()),
            ("--dp-font-family", self.fonts.family.as_str()),
            ("--dp-font-size-xs", sizes.xs.as_str()),
            ("--dp-font-size-sm", sizes.sm.as_str()),
            ("--dp-font-size-md", sizes.md.as_str()),
            ("--dp-font-size-lg", sizes.lg.as_str()),
            ("--dp-font-size-xl", sizes.xl.as_str()),
        ];

        let weights = self.fonts.weight;
        let weight_tokens = [
            ("--dp-font-weight-normal", weights.normal),
            ("--dp-font-weight-medium", weights.medium),
            ("--dp-font-weight-semibold", weights.semibold),
            ("--dp-font-weight-bold", weights.bold),
        ];

        tokens
            .into_iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .chain(weight_tokens.into_iter().map(|(name, weight)| (name.to_string(), weight.to_string())))
            .collect()
    }
}
