// src/errors.rs

//! Crate-wide error aliases and helpers.
//!
//! Configuration *validation* never produces one of these: malformed input
//! degrades to defaults. These cover the I/O around it (reading, persisting)
//! and the engine.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClockError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, ClockError>;
