// src/clock/face.rs

use chrono::{Datelike, NaiveDateTime};

use crate::clock::layout::{HorizontalRef, Placement, Size, VerticalRef};
use crate::config::model::{ClockConfig, FontRole, FontSpec};

/// Vertical offset of the time while bright, leaving room for the date.
const TIME_OFFSET_BRIGHT: i64 = -30;
/// Vertical offset of the date below the time.
const DATE_OFFSET: i64 = 100;

/// `1st`, `2nd`, `3rd`, `4th`, ..., `11th`, `12th`, `13th`, ..., `21st`.
pub fn ordinalize(number: u32) -> String {
    let suffix = match number % 100 {
        11..=13 => "th",
        _ => match number % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{number}{suffix}")
}

/// Time as shown on the face, e.g. `05:50`.
pub fn time_text(now: NaiveDateTime) -> String {
    now.format("%H:%M").to_string()
}

/// Date as shown on the face, e.g. `3rd March, 2025`.
pub fn date_text(now: NaiveDateTime) -> String {
    format!("{} {}", ordinalize(now.day()), now.format("%B, %Y"))
}

/// The parts of the configuration the face needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceStyle {
    pub title: String,
    pub bright: u8,
    pub dim: u8,
}

impl FaceStyle {
    pub fn from_config(config: &ClockConfig) -> Self {
        Self {
            title: config.title().to_string(),
            bright: config.bright(),
            dim: config.dim(),
        }
    }
}

/// One string to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextItem {
    pub text: String,
    pub role: FontRole,
    pub placement: Placement,
    /// Grey level, 0 (black) to 255 (white).
    pub density: u8,
}

/// Everything on screen at one moment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    pub items: Vec<TextItem>,
    pub faded: bool,
}

/// Measures rendered text; supplied by whatever draws the frame.
pub trait TextMeasure {
    fn measure(&self, text: &str, font: &FontSpec) -> Size;
}

/// A text item resolved to a screen position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedText<'a> {
    pub item: &'a TextItem,
    pub x: i64,
    pub y: i64,
    pub size: Size,
}

impl Frame {
    /// Resolve every item's position on a screen of `screen` size.
    pub fn place<'a>(
        &'a self,
        screen: Size,
        config: &ClockConfig,
        measure: &dyn TextMeasure,
    ) -> Vec<PlacedText<'a>> {
        self.items
            .iter()
            .map(|item| {
                let size = measure.measure(&item.text, config.font(item.role));
                let (x, y) = item.placement.position(screen, size);
                PlacedText { item, x, y, size }
            })
            .collect()
    }

    /// Just the strings, top to bottom as composed.
    pub fn texts(&self) -> Vec<&str> {
        self.items.iter().map(|i| i.text.as_str()).collect()
    }
}

/// Compose the face for `now`.
///
/// Faded: only the time, centred, at the dim density. Bright: the time
/// slightly raised, the date below it, the title in the top-left corner and
/// the next alarm (if any) in the bottom-left corner.
pub fn compose_frame(
    now: NaiveDateTime,
    faded: bool,
    style: &FaceStyle,
    next_alarm: Option<&str>,
) -> Frame {
    let centred = |voff| Placement::new(HorizontalRef::Centre, VerticalRef::Middle, 0, voff);

    if faded {
        return Frame {
            items: vec![TextItem {
                text: time_text(now),
                role: FontRole::Large,
                placement: centred(0),
                density: style.dim,
            }],
            faded: true,
        };
    }

    let mut items = vec![
        TextItem {
            text: time_text(now),
            role: FontRole::Large,
            placement: centred(TIME_OFFSET_BRIGHT),
            density: style.bright,
        },
        TextItem {
            text: date_text(now),
            role: FontRole::Medium,
            placement: centred(DATE_OFFSET),
            density: style.bright,
        },
        TextItem {
            text: style.title.clone(),
            role: FontRole::Small,
            placement: Placement::new(HorizontalRef::Left, VerticalRef::Top, 0, 0),
            density: style.bright,
        },
    ];

    if let Some(alarm) = next_alarm {
        items.push(TextItem {
            text: format!("Alarm {alarm}"),
            role: FontRole::Small,
            placement: Placement::new(HorizontalRef::Left, VerticalRef::Bottom, 0, 0),
            density: style.bright,
        });
    }

    Frame { items, faded: false }
}
