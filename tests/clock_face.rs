mod common;

use std::error::Error;
use std::time::Duration;

use alarmclock::clock::face::PlacedText;
use alarmclock::clock::{
    compose_frame, date_text, ordinalize, time_text, Dimmer, FaceStyle, HorizontalRef, Placement,
    Size, VerticalRef,
};
use alarmclock::config::loader::load_and_validate;
use alarmclock::config::schema::default_document;
use alarmclock::config::{ClockConfig, FontRole};
use alarmclock::engine::{ApproxMetrics, ClockSurface, ConsoleSurface};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use common::seeded_fs;

type TestResult = Result<(), Box<dyn Error>>;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, s))
        .expect("valid test timestamp")
}

fn style() -> FaceStyle {
    FaceStyle {
        title: "Alarm clock".into(),
        bright: 200,
        dim: 30,
    }
}

#[test]
fn ordinals() {
    let cases = [
        (1, "1st"),
        (2, "2nd"),
        (3, "3rd"),
        (4, "4th"),
        (11, "11th"),
        (12, "12th"),
        (13, "13th"),
        (21, "21st"),
        (22, "22nd"),
        (23, "23rd"),
        (30, "30th"),
        (101, "101st"),
        (111, "111th"),
    ];
    for (n, expected) in cases {
        assert_eq!(ordinalize(n), expected, "ordinalize({n})");
    }
}

#[test]
fn time_and_date_text() {
    let now = at(2024, 3, 3, 5, 50, 12);
    assert_eq!(time_text(now), "05:50");
    assert_eq!(date_text(now), "3rd March, 2024");
    assert_eq!(date_text(at(2023, 12, 22, 23, 0, 0)), "22nd December, 2023");
}

#[test]
fn placement_follows_reference_edges() {
    let screen = Size::new(1024, 600);
    let text = Size::new(100, 50);

    let centred = Placement::new(HorizontalRef::Centre, VerticalRef::Middle, 0, -30);
    assert_eq!(centred.position(screen, text), (462, 245));

    let top_left = Placement::new(HorizontalRef::Left, VerticalRef::Top, 5, 7);
    assert_eq!(top_left.position(screen, text), (5, 7));

    let bottom_right = Placement::new(HorizontalRef::Right, VerticalRef::Bottom, 10, 20);
    assert_eq!(bottom_right.position(screen, text), (914, 530));
}

#[test]
fn placement_saturates_on_extreme_sizes() {
    let text = Size::new(600, 240);

    let bottom = Placement::new(HorizontalRef::Right, VerticalRef::Bottom, 0, 0);
    assert_eq!(bottom.position(Size::new(i64::MIN, i64::MIN), text), (i64::MIN, i64::MIN));

    let middle = Placement::new(HorizontalRef::Centre, VerticalRef::Middle, i64::MAX, -30);
    assert_eq!(
        middle.position(Size::new(i64::MAX, i64::MIN), Size::new(i64::MIN, 0)),
        (i64::MAX, i64::MIN / 2 - 30)
    );
}

#[test]
fn extreme_screen_size_from_config_still_renders() -> TestResult {
    let fs = seeded_fs();
    fs.add_file(
        "config.toml",
        "[settings]\nscreen_height = -9223372036854775808\n\n[settings.fonts.large]\nsize = 9223372036854775807\n",
    );
    let loaded = load_and_validate(&fs, "config.toml")?;
    assert_eq!(loaded.config.screen_height(), i64::MIN);

    let style = FaceStyle::from_config(&loaded.config);
    let mut surface = ConsoleSurface::new(loaded.config.clone(), Vec::new());
    surface.present(&compose_frame(at(2024, 1, 1, 5, 0, 0), false, &style, Some("05:50 Mon")))?;
    surface.present(&compose_frame(at(2024, 1, 1, 5, 1, 0), true, &style, None))?;

    let out = String::from_utf8(surface.into_inner())?;
    assert!(out.contains("1st January, 2024"));
    assert!(out.contains("dimmed"));
    Ok(())
}

#[test]
fn bright_frame_has_time_date_title_and_alarm() {
    let frame = compose_frame(at(2024, 1, 1, 5, 0, 0), false, &style(), Some("05:50 Mon"));

    assert!(!frame.faded);
    assert_eq!(
        frame.texts(),
        vec!["05:00", "1st January, 2024", "Alarm clock", "Alarm 05:50 Mon"]
    );
    assert!(frame.items.iter().all(|i| i.density == 200));
    assert_eq!(frame.items[0].role, FontRole::Large);
    assert_eq!(frame.items[0].placement.voff, -30);
    assert_eq!(frame.items[1].role, FontRole::Medium);
    assert_eq!(frame.items[1].placement.voff, 100);
    assert_eq!(frame.items[3].placement.vref, VerticalRef::Bottom);
}

#[test]
fn faded_frame_shows_only_dim_time() {
    let frame = compose_frame(at(2024, 1, 1, 23, 15, 0), true, &style(), Some("05:50 Mon"));

    assert!(frame.faded);
    assert_eq!(frame.texts(), vec!["23:15"]);
    assert_eq!(frame.items[0].density, 30);
    assert_eq!(frame.items[0].placement.voff, 0);
}

#[test]
fn frames_are_placed_with_font_metrics() -> TestResult {
    let config = ClockConfig::from_validated(&default_document())?;
    let frame = compose_frame(at(2024, 1, 1, 5, 0, 0), false, &FaceStyle::from_config(&config), None);

    let placed: Vec<PlacedText<'_>> = frame.place(Size::new(1024, 600), &config, &ApproxMetrics);
    assert_eq!(placed.len(), 3);

    // "05:00" in the 240pt font: 5 chars * 120px wide, 240px tall.
    assert_eq!(placed[0].size, Size::new(600, 240));
    assert_eq!((placed[0].x, placed[0].y), (212, 150));
    // Title sits in the top-left corner.
    assert_eq!((placed[2].x, placed[2].y), (0, 0));
    Ok(())
}

#[test]
fn dimmer_fades_after_delay_and_wakes_on_touch() {
    let start = at(2024, 1, 1, 22, 0, 0);
    let mut dimmer = Dimmer::new(Duration::from_secs(60), start);

    assert!(!dimmer.update(start + TimeDelta::seconds(60)));
    assert!(dimmer.update(start + TimeDelta::seconds(61)));
    assert!(dimmer.is_faded());

    let touched = start + TimeDelta::seconds(90);
    dimmer.touch(touched);
    assert!(!dimmer.is_faded());
    assert!(!dimmer.update(touched + TimeDelta::seconds(30)));
    assert!(dimmer.update(touched + TimeDelta::seconds(120)));
}

#[test]
fn dimmer_ignores_clock_going_backwards() {
    let start = at(2024, 1, 1, 22, 0, 0);
    let mut dimmer = Dimmer::new(Duration::from_secs(5), start);
    assert!(!dimmer.update(start - TimeDelta::seconds(3600)));
}
