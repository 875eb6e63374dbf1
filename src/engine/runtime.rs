// src/engine/runtime.rs

use std::path::PathBuf;

use chrono::NaiveDateTime;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::clock::dimmer::Dimmer;
use crate::clock::face::{compose_frame, FaceStyle};
use crate::clock::schedule::AlarmSchedule;
use crate::config::model::ClockConfig;
use crate::engine::surface::ClockSurface;
use crate::errors::Result;

/// Key that stops the clock.
pub const QUIT_KEY: char = 'q';

/// Events sent into the runtime from the ticker, input, or signal handler.
///
/// Every event except shutdown carries the wall-clock time it happened at,
/// so the runtime itself never reads the clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockEvent {
    Tick { at: NaiveDateTime },
    Touch { at: NaiveDateTime },
    Key { at: NaiveDateTime, key: char },
    ShutdownRequested,
}

/// Options that influence how the runtime behaves.
#[derive(Debug, Clone, Default)]
pub struct RuntimeOptions {
    /// Stop after the first tick has been rendered (`--once`).
    pub exit_after_first_frame: bool,
}

/// The clock's event loop.
///
/// Responsibilities:
/// - Consume `ClockEvent`s.
/// - Fade the display after the dim delay; restore it on touch.
/// - Start the alarm sound when an alarm time passes; stop it on touch.
/// - Redraw the face on every event.
pub struct Runtime {
    dimmer: Dimmer,
    schedule: AlarmSchedule,
    style: FaceStyle,
    sound_file: PathBuf,
    options: RuntimeOptions,

    surface: Box<dyn ClockSurface>,
    events_rx: mpsc::Receiver<ClockEvent>,

    /// Time of the previous tick; alarms are due if they fall after it.
    last_tick: NaiveDateTime,
    sounding: bool,
}

impl Runtime {
    pub fn new(
        config: &ClockConfig,
        surface: Box<dyn ClockSurface>,
        options: RuntimeOptions,
        events_rx: mpsc::Receiver<ClockEvent>,
        started_at: NaiveDateTime,
    ) -> Self {
        Self {
            dimmer: Dimmer::new(config.dim_delay(), started_at),
            schedule: AlarmSchedule::new(config.alarms()),
            style: FaceStyle::from_config(config),
            sound_file: PathBuf::from(config.alarm_sound_file()),
            options,
            surface,
            events_rx,
            last_tick: started_at,
            sounding: false,
        }
    }

    /// Main event loop. Returns when shutdown is requested, the quit key is
    /// pressed, or every sender has gone away.
    pub async fn run(mut self) -> Result<()> {
        info!(alarms = self.schedule.alarms().len(), "clock runtime started");

        while let Some(event) = self.events_rx.recv().await {
            debug!(?event, "runtime received event");

            let keep_running = match event {
                ClockEvent::Tick { at } => self.handle_tick(at)?,
                ClockEvent::Touch { at } => self.handle_touch(at)?,
                ClockEvent::Key { at, key } => self.handle_key(at, key)?,
                ClockEvent::ShutdownRequested => {
                    info!("shutdown requested, stopping runtime");
                    false
                }
            };

            if !keep_running {
                break;
            }
        }

        info!("clock runtime exiting");
        Ok(())
    }

    fn handle_tick(&mut self, at: NaiveDateTime) -> Result<bool> {
        if let Some(alarm) = self.schedule.due_between(self.last_tick, at) {
            info!(alarm = %alarm, "alarm due");
            self.start_sounding()?;
        }
        self.last_tick = at;
        self.render(at)?;

        if self.options.exit_after_first_frame {
            info!("first frame rendered and exit_after_first_frame=true, stopping");
            return Ok(false);
        }
        Ok(true)
    }

    fn handle_touch(&mut self, at: NaiveDateTime) -> Result<bool> {
        self.dimmer.touch(at);
        if self.sounding {
            self.surface.silence()?;
            self.sounding = false;
        }
        self.render(at)?;
        Ok(true)
    }

    fn handle_key(&mut self, at: NaiveDateTime, key: char) -> Result<bool> {
        if key == QUIT_KEY {
            info!("quit key pressed");
            return Ok(false);
        }
        debug!(%key, "ignoring key");
        self.render(at)?;
        Ok(true)
    }

    fn start_sounding(&mut self) -> Result<()> {
        if self.sounding {
            debug!("alarm already sounding");
            return Ok(());
        }
        self.surface.sound_alarm(&self.sound_file)?;
        self.sounding = true;
        Ok(())
    }

    fn render(&mut self, at: NaiveDateTime) -> Result<()> {
        let faded = self.dimmer.update(at);
        let next_alarm = self
            .schedule
            .next_after(at)
            .map(|(_, alarm)| alarm.to_string());
        let frame = compose_frame(at, faded, &self.style, next_alarm.as_deref());
        self.surface.present(&frame)
    }
}
