//! End-to-end scenarios driven through the public controller API.

use chrono::NaiveDate;
use picker_core::{DatePicker, DateRangePicker, FixedClock, Pane, PickerConfig, TimePicker};
use shared::{DateFormat, DaySlot, PickerKey, QuickSelect, SelectedDate};
use std::cell::RefCell;
use std::rc::Rc;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_single_date_day_month_year_format() {
    let committed = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&committed);

    let config = PickerConfig::default().with_format(DateFormat::DayMonthYear);
    let mut picker = DatePicker::with_clock(config, None, FixedClock::on(date(2024, 1, 2)))
        .on_change(move |value| *sink.borrow_mut() = value);

    picker.open();
    picker.click_day(5);

    assert_eq!(*committed.borrow(), Some(SelectedDate::date_only(date(2024, 1, 5))));
    assert_eq!(picker.formatted_value(), "05/01/2024");
    assert!(!picker.is_open());
}

#[test]
fn test_range_auto_commit_closes_after_second_emission() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);

    let mut picker = DateRangePicker::with_clock(PickerConfig::default(), None, None, FixedClock::on(date(2024, 1, 1)))
        .on_change(move |start, end| sink.borrow_mut().push((start, end)));

    picker.open();
    picker.select_date(date(2024, 1, 10));
    assert!(picker.is_open());
    picker.select_date(date(2024, 1, 15));

    assert_eq!(
        events.borrow().as_slice(),
        &[(Some(date(2024, 1, 10)), None), (Some(date(2024, 1, 10)), Some(date(2024, 1, 15)))]
    );
    assert!(!picker.is_open());
}

#[test]
fn test_range_second_click_before_anchor_reanchors() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);

    let mut picker = DateRangePicker::with_clock(PickerConfig::default(), None, None, FixedClock::on(date(2024, 1, 1)))
        .on_change(move |start, end| sink.borrow_mut().push((start, end)));

    picker.open();
    picker.select_date(date(2024, 1, 20));
    picker.select_date(date(2024, 1, 12));

    assert!(picker.is_open());
    assert_eq!(events.borrow().last(), Some(&(Some(date(2024, 1, 12)), None)));
    assert_eq!(picker.value().end, None);
}

#[test]
fn test_disabled_quick_select_is_a_silent_noop() {
    let today = date(2024, 3, 14);
    let calls = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&calls);

    let config = PickerConfig::default().with_bounds(Some(date(2024, 3, 15)), None);
    let mut picker =
        DatePicker::with_clock(config, None, FixedClock::on(today)).on_change(move |_| *sink.borrow_mut() += 1);

    picker.open();
    picker.quick_select(QuickSelect::Yesterday);

    assert_eq!(*calls.borrow(), 0);
    assert_eq!(picker.value(), None);
    assert!(picker.is_open());

    // An enabled target goes through the normal click transition
    picker.quick_select(QuickSelect::In7Days);
    assert_eq!(*calls.borrow(), 1);
    assert_eq!(picker.value().map(|v| v.date), Some(date(2024, 3, 21)));
}

#[test]
fn test_keyboard_crossover_repaginates() {
    let mut picker = DatePicker::with_clock(
        PickerConfig::default(),
        Some(SelectedDate::date_only(date(2024, 3, 1))),
        FixedClock::on(date(2024, 3, 10)),
    );

    picker.open();
    assert_eq!(picker.focused_date(), Some(date(2024, 3, 1)));

    assert!(picker.handle_key(PickerKey::ArrowLeft));
    assert_eq!(picker.focused_date(), Some(date(2024, 2, 29)));
    assert_eq!(picker.month_title(), "February 2024");

    assert!(picker.handle_key(PickerKey::Home));
    assert_eq!(picker.focused_date(), Some(date(2024, 2, 1)));
    assert!(picker.handle_key(PickerKey::End));
    assert_eq!(picker.focused_date(), Some(date(2024, 2, 29)));

    let view = picker.month_view();
    assert!(view.cell_for(date(2024, 2, 29)).unwrap().annotation.is_focused);
}

#[test]
fn test_escape_closes_without_touching_selection() {
    let calls = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&calls);
    let initial = SelectedDate::date_only(date(2024, 5, 5));

    let mut picker = DatePicker::with_clock(PickerConfig::default(), Some(initial), FixedClock::on(date(2024, 5, 1)))
        .on_change(move |_| *sink.borrow_mut() += 1);

    picker.open();
    picker.handle_key(PickerKey::ArrowDown);
    picker.handle_key(PickerKey::Escape);

    assert!(!picker.is_open());
    assert_eq!(picker.focused_date(), None);
    assert_eq!(picker.value(), Some(initial));
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn test_enter_on_disabled_focus_is_ignored() {
    let calls = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&calls);

    let config = PickerConfig::default().with_bounds(None, Some(date(2024, 5, 10)));
    let mut picker =
        DatePicker::with_clock(config, None, FixedClock::on(date(2024, 5, 10))).on_change(move |_| *sink.borrow_mut() += 1);

    picker.open();
    picker.handle_key(PickerKey::ArrowRight);
    picker.handle_key(PickerKey::Enter);

    assert_eq!(*calls.borrow(), 0);
    assert!(picker.is_open());
    let view = picker.month_view();
    assert_eq!(view.cell_for(date(2024, 5, 11)).unwrap().slot(), DaySlot::Disabled);
}

#[test]
fn test_repeated_clear_emits_each_time() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);

    let mut picker = DatePicker::with_clock(PickerConfig::default(), None, FixedClock::on(date(2024, 1, 1)))
        .on_change(move |value| sink.borrow_mut().push(value));

    picker.clear();
    picker.clear();
    assert_eq!(events.borrow().as_slice(), &[None, None]);
}

#[test]
fn test_check_in_opens_check_out() {
    let clock = FixedClock::on(date(2024, 7, 1));

    let check_out = Rc::new(RefCell::new(DatePicker::with_clock(
        PickerConfig::default().with_placeholder("Check-out"),
        None,
        clock,
    )));

    let opener = Rc::clone(&check_out);
    let mut check_in = DatePicker::with_clock(PickerConfig::default().with_placeholder("Check-in"), None, clock)
        .on_change(move |value| {
            if value.is_some() {
                opener.borrow_mut().open();
            }
        });

    check_in.open();
    check_in.click_day(12);

    assert!(!check_in.is_open());
    let mut check_out = check_out.borrow_mut();
    assert!(check_out.is_open());
    assert_eq!(check_out.take_focus_request(), Some(date(2024, 7, 1)));
    assert_eq!(check_out.placeholder(), "Check-out");
    assert_eq!(check_out.value(), None);
}

#[test]
fn test_range_right_pane_lockstep_and_views() {
    let mut picker = DateRangePicker::with_clock(
        PickerConfig::default().with_week_numbers(true),
        Some(date(2024, 12, 30)),
        Some(date(2025, 1, 2)),
        FixedClock::on(date(2024, 12, 1)),
    );

    picker.open();
    picker.shift_pane(Pane::Right, false);
    let (left, right) = picker.displayed_months();
    assert_eq!(right, left.next());

    picker.shift_pane(Pane::Left, true);
    let views = picker.month_views();
    assert_eq!((views[0].year, views[0].month), (2024, 12));
    assert_eq!((views[1].year, views[1].month), (2025, 1));

    let start = views[0].cell_for(date(2024, 12, 30)).unwrap();
    assert_eq!(start.slot(), DaySlot::RangeEdge);
    let member = views[1].cell_for(date(2025, 1, 1)).unwrap();
    assert_eq!(member.slot(), DaySlot::RangeMember);
    // Dec 30 2024 sits in ISO week 1 of 2025
    assert_eq!(views[0].weeks.last().and_then(|w| w.week_number), Some(1));
}

#[test]
fn test_time_picker_round_trip_through_callback() {
    let committed = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&committed);

    let mut picker = TimePicker::new(PickerConfig::default(), Some("08:15"))
        .on_change(move |value| *sink.borrow_mut() = value);

    picker.open();
    picker.set_minutes(45);
    picker.handle_key(PickerKey::Enter);

    assert_eq!(committed.borrow().as_deref(), Some("08:45"));
    assert!(!picker.is_open());
}
