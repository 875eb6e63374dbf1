// src/engine/mod.rs

//! Event loop for the alarm clock.
//!
//! This module ties together:
//! - the event sources (ticker, console input, Ctrl-C)
//! - the runtime that reacts to:
//!   - ticks (redraw, dim, alarms going off)
//!   - touches (wake the display, silence the alarm)
//!   - keys (quit)
//!   - shutdown signals
//! - the surface the runtime draws on

pub mod runtime;
pub mod sources;
pub mod surface;

pub use runtime::{ClockEvent, Runtime, RuntimeOptions, QUIT_KEY};
pub use sources::{event_for_line, spawn_console_input, spawn_ctrl_c, spawn_ticker, TICK_PERIOD};
pub use surface::{ApproxMetrics, ClockSurface, ConsoleSurface};
