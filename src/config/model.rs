// src/config/model.rs

use std::time::Duration;

use serde::{Deserialize, Serialize};
use toml::{Table, Value};

use crate::clock::schedule::Alarm;
use crate::config::days::parse_days;
use crate::errors::{ClockError, Result};

/// Typed view of a validated configuration document.
///
/// Built with [`ClockConfig::from_validated`]; the document must already have
/// passed through the validator, which guarantees every field below is
/// present with the right type.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClockConfig {
    pub settings: Settings,

    /// Alarm records, kept in the order they were written.
    pub alarms: Vec<AlarmEntry>,
}

/// `[settings]` section.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    /// Window title.
    pub title: String,
    pub screen_width: i64,
    pub screen_height: i64,
    /// Sound played when an alarm goes off.
    pub alarm_sound_file: String,
    /// Seconds without a touch before the display dims.
    pub dim_delay: i64,
    /// Text density when bright.
    pub bright: i64,
    /// Text density when dimmed.
    pub dim: i64,
    pub fonts: Fonts,
}

/// `[settings.fonts]`: one font per text role.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Fonts {
    pub large: FontSpec,
    pub medium: FontSpec,
    pub small: FontSpec,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FontSpec {
    /// Path to a TrueType file.
    pub file: String,
    /// Point size.
    pub size: i64,
}

/// Which font a piece of text is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    Large,
    Medium,
    Small,
}

/// `[[alarms]]` entry as stored.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AlarmEntry {
    /// Seconds since midnight.
    pub time: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<Vec<String>>,
}

impl ClockConfig {
    /// Deserialize a validated document.
    pub fn from_validated(document: &Table) -> Result<Self> {
        Value::Table(document.clone())
            .try_into()
            .map_err(|e: toml::de::Error| {
                ClockError::ConfigError(format!("validated document does not match model: {e}"))
            })
    }

    pub fn title(&self) -> &str {
        &self.settings.title
    }

    pub fn screen_width(&self) -> i64 {
        self.settings.screen_width
    }

    pub fn screen_height(&self) -> i64 {
        self.settings.screen_height
    }

    /// Dim delay as a duration; negative values mean "dim immediately".
    pub fn dim_delay(&self) -> Duration {
        Duration::from_secs(u64::try_from(self.settings.dim_delay).unwrap_or(0))
    }

    /// Bright text density, clamped to a colour channel.
    pub fn bright(&self) -> u8 {
        clamp_density(self.settings.bright)
    }

    /// Dimmed text density, clamped to a colour channel.
    pub fn dim(&self) -> u8 {
        clamp_density(self.settings.dim)
    }

    pub fn alarm_sound_file(&self) -> &str {
        &self.settings.alarm_sound_file
    }

    pub fn fonts(&self) -> &Fonts {
        &self.settings.fonts
    }

    pub fn font(&self, role: FontRole) -> &FontSpec {
        let fonts = &self.settings.fonts;
        match role {
            FontRole::Large => &fonts.large,
            FontRole::Medium => &fonts.medium,
            FontRole::Small => &fonts.small,
        }
    }

    /// Alarms with their day lists parsed.
    ///
    /// Entries that cannot be interpreted are skipped; after validation
    /// there are none.
    pub fn alarms(&self) -> Vec<Alarm> {
        self.alarms.iter().filter_map(AlarmEntry::to_alarm).collect()
    }
}

impl AlarmEntry {
    pub fn to_alarm(&self) -> Option<Alarm> {
        let time = u32::try_from(self.time).ok()?;
        let days = match &self.days {
            Some(tokens) => Some(parse_days(tokens)?),
            None => None,
        };
        Some(Alarm { time, days })
    }
}

fn clamp_density(value: i64) -> u8 {
    value.clamp(0, i64::from(u8::MAX)) as u8
}
