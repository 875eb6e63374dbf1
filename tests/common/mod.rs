#![allow(dead_code)]

use std::sync::Once;

use alarmclock::config::schema::{clock_schema, default_file_paths};
use alarmclock::fs::mock::MockFileSystem;
use toml::{Table, Value};
use tracing_subscriber::fmt;

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// Uses `with_test_writer()`, so output only shows for failing tests
/// (unless run with `-- --nocapture`).
pub fn init_tracing() {
    INIT.call_once(|| {
        fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// A mock filesystem containing every file the defaults point at.
pub fn seeded_fs() -> MockFileSystem {
    let fs = MockFileSystem::new();
    for (_, path) in default_file_paths(clock_schema()) {
        fs.add_file(path, "");
    }
    fs
}

/// Parse a TOML snippet into a proposed document.
pub fn doc(src: &str) -> Value {
    Value::Table(toml::from_str::<Table>(src).expect("test TOML must parse"))
}

/// Follow a dotted path through nested tables.
pub fn lookup<'a>(table: &'a Table, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = table.get(segments.next()?)?;
    for segment in segments {
        current = current.as_table()?.get(segment)?;
    }
    Some(current)
}
