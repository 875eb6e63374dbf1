// src/config/mod.rs

//! Configuration loading and validation for the alarm clock.
//!
//! Responsibilities:
//! - Describe the expected document and its defaults (`schema.rs`).
//! - Repair a proposed document against the schema (`validate.rs`).
//! - Interpret weekday tokens in alarm records (`days.rs`).
//! - Give the rest of the program typed access (`model.rs`).
//! - Read the file from disk and write corrections back (`loader.rs`).

pub mod days;
pub mod loader;
pub mod model;
pub mod schema;
pub mod validate;

pub use days::{parse_days, WeekdaySet};
pub use loader::{load_and_validate, load_from_path, persist_if_modified, save_document, LoadedConfig};
pub use model::{AlarmEntry, ClockConfig, FontRole, FontSpec, Fonts, Settings};
pub use schema::{clock_schema, default_document, Constraint, FieldKind, FieldSpec, Schema};
pub use validate::{validate_config, Validation, Validator};
