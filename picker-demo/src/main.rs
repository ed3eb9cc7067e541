//! Console walkthrough of a check-in / check-out pair.
//!
//! ```text
//! picker-demo [CONFIG.yaml] [--today YYYY-MM-DD] [--json]
//! ```
//!
//! Picking a check-in date opens the check-out picker, the same way a booking
//! form would chain the two widgets. Set `RUST_LOG=debug` to watch the state
//! transitions.

use anyhow::{Context, Result};
use log::info;
use std::cell::RefCell;
use std::rc::Rc;

use picker_core::format::parse_iso_date;
use picker_core::{Clock, DatePicker, DateRangePicker, FixedClock, PickerConfig, SystemClock, Theme};
use shared::{CalendarDate, MonthView, PickerKey, QuickSelect};

struct Args {
    config_path: Option<String>,
    today: Option<CalendarDate>,
    json: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        config_path: None,
        today: None,
        json: false,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => args.json = true,
            "--today" => {
                let value = iter.next().context("--today needs a YYYY-MM-DD value")?;
                args.today = Some(parse_iso_date(&value)?);
            }
            _ => args.config_path = Some(arg),
        }
    }
    Ok(args)
}

fn render(view: &MonthView, weekdays: [&str; 7]) -> String {
    let mut out = format!("{:^28}\n", view.title);
    out.push_str(&weekdays.map(|w| format!("{:>3}", w.chars().take(3).collect::<String>())).join(" "));
    out.push('\n');
    for week in &view.weeks {
        let row: Vec<String> = week
            .cells
            .iter()
            .map(|cell| match cell.date {
                None => "   ".to_string(),
                Some(date) => {
                    let marker = if cell.annotation.disabled {
                        '-'
                    } else if cell.annotation.is_selected || cell.annotation.is_range_start || cell.annotation.is_range_end {
                        '*'
                    } else if cell.annotation.is_today {
                        '!'
                    } else {
                        ' '
                    };
                    format!("{:>2}{}", chrono::Datelike::day(&date), marker)
                }
            })
            .collect();
        let week_number = week.week_number.map(|w| format!("  W{:02}", w)).unwrap_or_default();
        out.push_str(&format!("{}{}\n", row.join(" "), week_number));
    }
    out
}

fn main() -> Result<()> {
    env_logger::init();
    let args = parse_args()?;

    let config = match &args.config_path {
        Some(path) => PickerConfig::load(path).with_context(|| format!("loading {}", path))?,
        None => PickerConfig::default().with_week_numbers(true).with_quick_select(true),
    };
    for warning in config.validate() {
        println!("config warning: {}", warning);
    }

    let today = match args.today {
        Some(today) => today,
        None => SystemClock.today(),
    };
    let clock = FixedClock::on(today);
    info!("🗓️ Demo running with today = {}", today);

    // Check-out opens as soon as check-in commits
    let check_out = Rc::new(RefCell::new(
        DatePicker::with_clock(config.clone().with_placeholder("Check-out"), None, clock)
            .on_change(|value| println!("check-out -> {:?}", value.map(|v| v.date))),
    ));
    let opener = Rc::clone(&check_out);
    let mut check_in = DatePicker::with_clock(config.clone().with_placeholder("Check-in"), None, clock).on_change(
        move |value| {
            println!("check-in  -> {:?}", value.map(|v| v.date));
            if value.is_some() {
                opener.borrow_mut().open();
            }
        },
    );

    check_in.open();
    println!("{}", render(&check_in.month_view(), check_in.weekday_labels()));
    check_in.quick_select(QuickSelect::Tomorrow);

    {
        let mut check_out = check_out.borrow_mut();
        println!("check-out open: {}", check_out.is_open());
        for name in ["ArrowDown", "ArrowRight", "ArrowRight", "Enter"] {
            if let Some(key) = PickerKey::from_key_name(name) {
                check_out.handle_key(key);
            }
        }
        println!(
            "{}: {} / {}: {}",
            check_in.placeholder(),
            check_in.formatted_value(),
            check_out.placeholder(),
            check_out.formatted_value()
        );
    }

    let mut stay = DateRangePicker::with_clock(config, None, None, clock)
        .on_change(|start, end| println!("stay -> {:?} .. {:?}", start, end));
    stay.open();
    stay.quick_select(QuickSelect::NextWeek);
    stay.hover(stay.value().start.map_or(today, |start| picker_core::calendar::add_days(start, 4)));
    let views = stay.month_views();
    for view in &views {
        println!("{}", render(view, stay.weekday_labels()));
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&views)?);
        println!("{}", serde_json::to_string_pretty(&Theme::default().slot_styles())?);
    }

    Ok(())
}
