// src/clock/mod.rs

//! The clock face and the state behind it.
//!
//! - `face`: date/time text and frame composition
//! - `layout`: placing text relative to screen edges
//! - `dimmer`: fade after a period without touches
//! - `schedule`: when configured alarms go off

pub mod dimmer;
pub mod face;
pub mod layout;
pub mod schedule;

pub use dimmer::Dimmer;
pub use face::{compose_frame, date_text, ordinalize, time_text, FaceStyle, Frame, TextItem, TextMeasure};
pub use layout::{HorizontalRef, Placement, Size, VerticalRef};
pub use schedule::{Alarm, AlarmSchedule};
