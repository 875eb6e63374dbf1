// src/config/loader.rs

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use toml::{Table, Value};
use tracing::{debug, info, warn};

use crate::config::model::ClockConfig;
use crate::config::schema::clock_schema;
use crate::config::validate::Validator;
use crate::errors::Result;
use crate::fs::FileSystem;

/// A validated configuration together with the document it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: ClockConfig,
    /// The validated document; this is what gets written back.
    pub document: Table,
    /// True if validation had to correct anything.
    pub modified: bool,
}

/// Read the config file at `path` as a TOML document.
///
/// A missing or unparseable file yields `None` ("nothing proposed"); the
/// validator then falls back to defaults. This never fails.
pub fn load_from_path(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Option<Value> {
    let path = path.as_ref();
    if !fs.exists(path) {
        info!(path = %path.display(), "no existing config file");
        return None;
    }

    let contents = match fs.read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to read config file");
            return None;
        }
    };

    match toml::from_str::<Table>(&contents) {
        Ok(table) => {
            debug!(path = %path.display(), keys = table.len(), "read config file");
            Some(Value::Table(table))
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "config file is not valid TOML");
            None
        }
    }
}

/// Load the config file from `path` and validate it.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML (a missing/broken file counts as empty).
/// - Validates against the schema, substituting defaults where needed.
/// - Builds the typed [`ClockConfig`].
///
/// Persisting corrections is left to [`persist_if_modified`].
pub fn load_and_validate(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<LoadedConfig> {
    let proposed = load_from_path(fs, &path);
    let validation = Validator::new(clock_schema(), fs).validate(proposed.as_ref());
    let config = ClockConfig::from_validated(&validation.document)?;

    if validation.modified {
        info!(path = %path.as_ref().display(), "config corrected during validation");
    }

    Ok(LoadedConfig {
        config,
        document: validation.document,
        modified: validation.modified,
    })
}

/// Write `document` to `path`, moving any existing file to its backup name
/// first. An older backup is replaced.
pub fn save_document(fs: &dyn FileSystem, path: impl AsRef<Path>, document: &Table) -> Result<()> {
    let path = path.as_ref();
    let contents = toml::to_string(document)?;

    if fs.exists(path) {
        let backup = backup_path(path);
        if fs.exists(&backup) {
            fs.remove_file(&backup)?;
        }
        fs.rename(path, &backup)?;
        debug!(path = %path.display(), backup = %backup.display(), "moved previous config to backup");
    }

    fs.write(path, contents.as_bytes())?;
    Ok(())
}

/// Write the validated document back if validation changed anything.
///
/// Returns whether a write happened.
pub fn persist_if_modified(
    fs: &dyn FileSystem,
    path: impl AsRef<Path>,
    loaded: &LoadedConfig,
) -> Result<bool> {
    if !loaded.modified {
        return Ok(false);
    }
    save_document(fs, &path, &loaded.document)?;
    info!(path = %path.as_ref().display(), "config file created/modified");
    Ok(true)
}

/// `<path>.org`, where a superseded config file is kept.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".org");
    PathBuf::from(name)
}

/// Helper to resolve a default config path.
///
/// Currently `config.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("config.toml")
}
