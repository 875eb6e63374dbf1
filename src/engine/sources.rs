// src/engine/sources.rs

//! Producers of [`ClockEvent`]s.

use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::engine::runtime::{ClockEvent, QUIT_KEY};

/// How often the face is refreshed.
pub const TICK_PERIOD: Duration = Duration::from_millis(100);

/// Current local wall-clock time.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Send a `Tick` every `period` until the runtime goes away.
pub fn spawn_ticker(tx: mpsc::Sender<ClockEvent>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            if tx.send(ClockEvent::Tick { at: local_now() }).await.is_err() {
                debug!("runtime gone, ticker stopping");
                break;
            }
        }
    })
}

/// Turn console lines into events: `q` quits, anything else is a touch.
pub fn spawn_console_input(tx: mpsc::Sender<ClockEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if tx.send(event_for_line(&line, local_now())).await.is_err() {
                        break;
                    }
                }
                Ok(None) => {
                    debug!("console input closed");
                    break;
                }
                Err(err) => {
                    warn!(error = %err, "failed to read console input");
                    break;
                }
            }
        }
    })
}

/// Ctrl-C → graceful shutdown.
pub fn spawn_ctrl_c(tx: mpsc::Sender<ClockEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("failed to listen for Ctrl+C: {e}");
            return;
        }
        let _ = tx.send(ClockEvent::ShutdownRequested).await;
    })
}

/// Map one line of console input to an event.
pub fn event_for_line(line: &str, at: NaiveDateTime) -> ClockEvent {
    let mut chars = line.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(key), None) if key == QUIT_KEY => ClockEvent::Key { at, key },
        _ => ClockEvent::Touch { at },
    }
}
