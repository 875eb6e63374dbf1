// src/config/days.rs

//! Weekday tokens used by alarm records.
//!
//! Tokens are free-form: anything containing `Sun`, `Mon`, `Tue`, `Wed`,
//! `Thu`, `Fri` or `Sat` (case-sensitive) names that day, so `"Tuesday"`
//! and `"Tue"` are equivalent. The first abbreviation found, in Sunday-first
//! order, wins.

use std::fmt;

use chrono::Weekday;

/// Abbreviations in slot order (Sunday first).
pub const DAY_ABBREVIATIONS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A set of weekdays, stored positionally with Sunday in slot 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WeekdaySet([bool; 7]);

impl WeekdaySet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_slots(slots: [bool; 7]) -> Self {
        Self(slots)
    }

    pub fn slots(&self) -> [bool; 7] {
        self.0
    }

    pub fn insert(&mut self, day: Weekday) {
        self.0[day.num_days_from_sunday() as usize] = true;
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.0[day.num_days_from_sunday() as usize]
    }

    pub fn is_empty(&self) -> bool {
        !self.0.iter().any(|d| *d)
    }

    /// Days in the set, Sunday first.
    pub fn days(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, set)| **set)
            .map(|(slot, _)| weekday_from_slot(slot))
    }
}

impl fmt::Display for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self
            .0
            .iter()
            .zip(DAY_ABBREVIATIONS)
            .filter(|(set, _)| **set)
            .map(|(_, name)| name)
            .collect();
        write!(f, "{}", names.join(" "))
    }
}

fn weekday_from_slot(slot: usize) -> Weekday {
    match slot {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}

/// Slot index of the day a single token names, if any.
pub fn identify_day(token: &str) -> Option<usize> {
    DAY_ABBREVIATIONS
        .iter()
        .position(|abbrev| token.contains(abbrev))
}

/// Parse a list of tokens into a set.
///
/// Returns `None` if any token names no day; a single bad token makes the
/// whole list unusable.
pub fn parse_days<I, S>(tokens: I) -> Option<WeekdaySet>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut slots = [false; 7];
    for token in tokens {
        let slot = identify_day(token.as_ref())?;
        slots[slot] = true;
    }
    Some(WeekdaySet(slots))
}
