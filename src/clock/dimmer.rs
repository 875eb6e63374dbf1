// src/clock/dimmer.rs

use std::time::Duration;

use chrono::NaiveDateTime;
use tracing::debug;

/// Tracks whether the display should be dimmed.
///
/// The display fades once more than `delay` has passed since the last touch
/// and comes back on the next touch.
#[derive(Debug, Clone)]
pub struct Dimmer {
    delay: Duration,
    last_touched: NaiveDateTime,
    faded: bool,
}

impl Dimmer {
    pub fn new(delay: Duration, now: NaiveDateTime) -> Self {
        Self {
            delay,
            last_touched: now,
            faded: false,
        }
    }

    pub fn touch(&mut self, now: NaiveDateTime) {
        if self.faded {
            debug!("touch received, restoring brightness");
        }
        self.last_touched = now;
        self.faded = false;
    }

    /// Re-evaluate at `now` and return whether the display is faded.
    pub fn update(&mut self, now: NaiveDateTime) -> bool {
        // A clock that went backwards counts as no time elapsed.
        let idle = (now - self.last_touched).to_std().unwrap_or_default();
        if !self.faded && idle > self.delay {
            debug!(idle_secs = idle.as_secs(), "dim delay elapsed, fading display");
            self.faded = true;
        }
        self.faded
    }

    pub fn is_faded(&self) -> bool {
        self.faded
    }
}
