// src/engine/surface.rs

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::clock::face::{Frame, TextMeasure};
use crate::clock::layout::Size;
use crate::config::model::{ClockConfig, FontSpec};
use crate::errors::Result;

/// Where frames are drawn and alarms are sounded.
///
/// A graphical backend implements this over its window and mixer; the
/// runtime only ever talks to the trait.
pub trait ClockSurface: Send {
    fn present(&mut self, frame: &Frame) -> Result<()>;
    fn sound_alarm(&mut self, sound_file: &Path) -> Result<()>;
    fn silence(&mut self) -> Result<()>;
}

/// Rough metrics for a proportional font: half an em per character.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproxMetrics;

impl TextMeasure for ApproxMetrics {
    fn measure(&self, text: &str, font: &FontSpec) -> Size {
        let chars = i64::try_from(text.chars().count()).unwrap_or(i64::MAX);
        Size::new(chars.saturating_mul(font.size) / 2, font.size)
    }
}

/// Headless surface that prints each new frame to stdout.
///
/// Identical consecutive frames are printed once.
pub struct ConsoleSurface<W: Write + Send = std::io::Stdout> {
    config: ClockConfig,
    out: W,
    last: Option<Frame>,
}

impl ConsoleSurface {
    pub fn stdout(config: ClockConfig) -> Self {
        Self::new(config, std::io::stdout())
    }
}

impl<W: Write + Send> ConsoleSurface<W> {
    pub fn new(config: ClockConfig, out: W) -> Self {
        Self { config, out, last: None }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> ClockSurface for ConsoleSurface<W> {
    fn present(&mut self, frame: &Frame) -> Result<()> {
        if self.last.as_ref() == Some(frame) {
            return Ok(());
        }

        let screen = Size::new(self.config.screen_width(), self.config.screen_height());
        writeln!(
            self.out,
            "--- {} ({}x{}){}",
            self.config.title(),
            screen.width,
            screen.height,
            if frame.faded { " dimmed" } else { "" }
        )?;
        for placed in frame.place(screen, &self.config, &ApproxMetrics) {
            writeln!(
                self.out,
                "{:>6},{:<6} {:>3} {:?} {}",
                placed.x, placed.y, placed.item.density, placed.item.role, placed.item.text
            )?;
        }
        self.out.flush()?;

        self.last = Some(frame.clone());
        Ok(())
    }

    fn sound_alarm(&mut self, sound_file: &Path) -> Result<()> {
        info!(file = %sound_file.display(), "alarm sounding");
        writeln!(self.out, "*** ALARM ({}) ***", sound_file.display())?;
        Ok(())
    }

    fn silence(&mut self) -> Result<()> {
        info!("alarm silenced");
        writeln!(self.out, "*** alarm off ***")?;
        Ok(())
    }
}
