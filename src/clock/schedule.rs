// src/clock/schedule.rs

use std::fmt;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, TimeDelta, Weekday};

use crate::config::days::WeekdaySet;

/// One configured alarm.
///
/// `days == None` means every day. An empty set means no day at all, i.e.
/// the alarm is parked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alarm {
    /// Seconds since midnight, `0..=86400`.
    pub time: u32,
    pub days: Option<WeekdaySet>,
}

impl Alarm {
    pub fn fires_on(&self, day: Weekday) -> bool {
        self.days.is_none_or(|set| set.contains(day))
    }

    /// When this alarm would go off if it fires on `date`.
    ///
    /// `time == 86400` lands on the following midnight.
    pub fn occurrence_on(&self, date: NaiveDate) -> Option<NaiveDateTime> {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        midnight.checked_add_signed(TimeDelta::seconds(i64::from(self.time)))
    }

    /// The first occurrence strictly after `now`, looking at most a week ahead.
    pub fn next_after(&self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        let today = now.date();
        // Start a day early: a 24:00 alarm belongs to the previous date.
        let start = today.checked_sub_days(Days::new(1)).unwrap_or(today);
        (0..=8u64)
            .filter_map(|offset| start.checked_add_days(Days::new(offset)))
            .filter(|date| self.fires_on(date.weekday()))
            .filter_map(|date| self.occurrence_on(date))
            .find(|at| *at > now)
    }

    /// Whether an occurrence falls in `(after, until]`.
    pub fn due_between(&self, after: NaiveDateTime, until: NaiveDateTime) -> bool {
        if until <= after {
            return false;
        }
        self.next_after(after).is_some_and(|at| at <= until)
    }

    /// `HH:MM` of the alarm time.
    pub fn time_text(&self) -> String {
        let minutes = self.time / 60;
        format!("{:02}:{:02}", minutes / 60, minutes % 60)
    }
}

impl fmt::Display for Alarm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.days {
            None => write!(f, "{} daily", self.time_text()),
            Some(days) if days.is_empty() => write!(f, "{} never", self.time_text()),
            Some(days) => write!(f, "{} {}", self.time_text(), days),
        }
    }
}

/// All configured alarms.
#[derive(Debug, Clone, Default)]
pub struct AlarmSchedule {
    alarms: Vec<Alarm>,
}

impl AlarmSchedule {
    pub fn new(alarms: Vec<Alarm>) -> Self {
        Self { alarms }
    }

    pub fn alarms(&self) -> &[Alarm] {
        &self.alarms
    }

    pub fn is_empty(&self) -> bool {
        self.alarms.is_empty()
    }

    /// The soonest upcoming alarm and when it goes off.
    pub fn next_after(&self, now: NaiveDateTime) -> Option<(NaiveDateTime, &Alarm)> {
        self.alarms
            .iter()
            .filter_map(|alarm| alarm.next_after(now).map(|at| (at, alarm)))
            .min_by_key(|(at, _)| *at)
    }

    /// The first alarm (in configured order) that went off in `(after, until]`.
    pub fn due_between(&self, after: NaiveDateTime, until: NaiveDateTime) -> Option<&Alarm> {
        self.alarms
            .iter()
            .find(|alarm| alarm.due_between(after, until))
    }
}
