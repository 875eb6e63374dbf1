// src/lib.rs

pub mod cli;
pub mod clock;
pub mod config;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod logging;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::config::loader::{load_and_validate, persist_if_modified, LoadedConfig};
use crate::engine::sources::local_now;
use crate::engine::{
    spawn_console_input, spawn_ctrl_c, spawn_ticker, ClockEvent, ConsoleSurface, Runtime,
    RuntimeOptions, TICK_PERIOD,
};
use crate::fs::RealFileSystem;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading, repair and write-back
/// - the ticker, console input and Ctrl-C handling
/// - the runtime and its surface
pub async fn run(args: CliArgs) -> Result<()> {
    let fs = RealFileSystem;
    let config_path = args.config.clone();
    let loaded = load_and_validate(&fs, &config_path)?;

    // A config that can't be saved is still a usable config.
    if let Err(err) = persist_if_modified(&fs, &config_path, &loaded) {
        warn!(path = %config_path.display(), error = %err, "failed to save corrected config");
    }

    if args.check {
        print_summary(&loaded);
        return Ok(());
    }

    let (tx, rx) = mpsc::channel::<ClockEvent>(64);

    let _ticker = spawn_ticker(tx.clone(), TICK_PERIOD);
    if !args.once {
        let _input = spawn_console_input(tx.clone());
    }
    let _ctrl_c = spawn_ctrl_c(tx.clone());
    drop(tx);

    let options = RuntimeOptions {
        exit_after_first_frame: args.once,
    };
    let surface = ConsoleSurface::stdout(loaded.config.clone());
    let runtime = Runtime::new(&loaded.config, Box::new(surface), options, rx, local_now());

    info!(config = %config_path.display(), "starting clock");
    runtime.run().await?;
    Ok(())
}

/// Simple summary output: the effective settings and alarms.
fn print_summary(loaded: &LoadedConfig) {
    let cfg = &loaded.config;
    println!("alarmclock config check");
    println!(
        "  status = {}",
        if loaded.modified { "corrected" } else { "ok" }
    );
    println!("  title = {}", cfg.title());
    println!("  screen = {}x{}", cfg.screen_width(), cfg.screen_height());
    println!("  dim_delay = {}s", cfg.dim_delay().as_secs());
    println!("  bright/dim = {}/{}", cfg.bright(), cfg.dim());
    println!("  alarm_sound_file = {}", cfg.alarm_sound_file());
    for (name, font) in [
        ("large", &cfg.fonts().large),
        ("medium", &cfg.fonts().medium),
        ("small", &cfg.fonts().small),
    ] {
        println!("  font.{name} = {} @ {}pt", font.file, font.size);
    }
    println!();

    let alarms = cfg.alarms();
    println!("alarms ({}):", alarms.len());
    for alarm in &alarms {
        println!("  - {alarm}");
    }

    debug!("config check complete");
}
