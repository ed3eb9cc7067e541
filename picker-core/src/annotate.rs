//! # Day Annotation
//!
//! Turns a bare month grid into the day-state stream a rendering layer draws:
//! every cell carries its disabled/today/selected/focused/range flags and the
//! custom entry that applies to it. Annotations are derived on demand and never
//! stored, so they always reflect the current configuration and selection.

use shared::{CalendarDate, DayAnnotation, DayCell, DisplayedMonth, GridCell, MonthView, WeekRow};

use crate::calendar::{build_month_grid, iso_week_number};
use crate::config::PickerConfig;
use crate::i18n::Translations;
use crate::predicates::{find_custom_day, in_hover_range, in_range, is_disabled, is_same_day};
use crate::selection::SelectionView;

/// Everything needed to annotate a day besides the day itself
#[derive(Debug, Clone, Copy)]
pub struct AnnotationContext<'a> {
    pub config: &'a PickerConfig,
    pub today: CalendarDate,
    pub selection: SelectionView,
    pub focused: Option<CalendarDate>,
}

/// Derive the state of a single day
pub fn annotate_day(date: CalendarDate, ctx: &AnnotationContext<'_>) -> DayAnnotation {
    let mut annotation = DayAnnotation {
        disabled: is_disabled(date, ctx.config),
        is_today: is_same_day(&date, &ctx.today),
        is_focused: ctx.focused.is_some_and(|focused| is_same_day(&date, &focused)),
        custom: find_custom_day(date, &ctx.config.custom_days).cloned(),
        ..Default::default()
    };

    match ctx.selection {
        SelectionView::Single(selected) => {
            annotation.is_selected = selected.is_some_and(|selected| is_same_day(&date, &selected));
        }
        SelectionView::Range { anchor, end, hover } => {
            annotation.is_range_start = anchor.is_some_and(|start| is_same_day(&date, &start));
            annotation.is_range_end = end.is_some_and(|end| is_same_day(&date, &end));
            annotation.is_range_member = in_range(date, anchor, end);
            annotation.is_hover_preview = in_hover_range(date, anchor, end, hover);
        }
        SelectionView::TimeOnly => {}
    }

    annotation
}

/// Localised header for a month pane, e.g. "January 2024"
pub fn month_title(month: DisplayedMonth, translations: &Translations) -> String {
    format!("{} {}", translations.month_name(month.month), month.year)
}

/// Build the annotated, week-split view of one displayed month
pub fn build_month_view(month: DisplayedMonth, ctx: &AnnotationContext<'_>, translations: &Translations) -> MonthView {
    let grid = build_month_grid(month.year, month.month);

    let weeks: Vec<WeekRow> = grid
        .weeks()
        .map(|week| {
            let cells: Vec<DayCell> = week
                .iter()
                .map(|&cell| match grid.date_of(cell) {
                    Some(date) => DayCell {
                        cell,
                        date: Some(date),
                        annotation: annotate_day(date, ctx),
                    },
                    None => DayCell::empty(),
                })
                .collect();

            let week_number = if ctx.config.show_week_numbers {
                cells.iter().find_map(|cell| cell.date).map(iso_week_number)
            } else {
                None
            };

            WeekRow { week_number, cells }
        })
        .collect();

    log::debug!(
        "🗓️ Built view for {}/{}: {} weeks, {} days",
        month.month,
        month.year,
        weeks.len(),
        grid.cells.iter().filter(|cell| matches!(cell, GridCell::Day(_))).count()
    );

    MonthView {
        year: month.year,
        month: month.month,
        title: month_title(month, translations),
        weeks,
    }
}
