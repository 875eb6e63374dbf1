mod common;

use std::error::Error;
use std::fs;

use alarmclock::config::loader::{
    backup_path, load_and_validate, load_from_path, persist_if_modified, save_document,
};
use alarmclock::config::schema::default_document;
use alarmclock::fs::RealFileSystem;
use tempfile::TempDir;
use toml::{Table, Value};

use common::{init_tracing, seeded_fs};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn missing_file_is_created_from_defaults() -> TestResult {
    init_tracing();
    let fs = seeded_fs();

    let loaded = load_and_validate(&fs, "config.toml")?;
    assert!(loaded.modified);
    assert_eq!(loaded.document, default_document());

    assert!(persist_if_modified(&fs, "config.toml", &loaded)?);
    let written = fs.contents("config.toml").expect("config written");
    assert_eq!(toml::from_str::<Table>(&written)?, default_document());
    assert!(fs.contents("config.toml.org").is_none());

    // Second start: nothing to correct, nothing to write.
    let reloaded = load_and_validate(&fs, "config.toml")?;
    assert!(!reloaded.modified);
    assert!(!persist_if_modified(&fs, "config.toml", &reloaded)?);
    Ok(())
}

#[test]
fn broken_file_is_backed_up_and_replaced() -> TestResult {
    let fs = seeded_fs();
    fs.add_file("config.toml", "[settings\ntitle = ");

    assert!(load_from_path(&fs, "config.toml").is_none());

    let loaded = load_and_validate(&fs, "config.toml")?;
    assert!(loaded.modified);
    persist_if_modified(&fs, "config.toml", &loaded)?;

    assert_eq!(
        fs.contents("config.toml.org").as_deref(),
        Some("[settings\ntitle = ")
    );
    Ok(())
}

#[test]
fn partial_file_keeps_user_values() -> TestResult {
    let fs = seeded_fs();
    fs.add_file(
        "config.toml",
        r#"
[settings]
title = "Bedroom"
dim_delay = 15
"#,
    );

    let loaded = load_and_validate(&fs, "config.toml")?;
    assert!(loaded.modified);
    assert_eq!(loaded.config.title(), "Bedroom");
    assert_eq!(loaded.config.dim_delay().as_secs(), 15);
    assert_eq!(loaded.config.screen_height(), 600);
    assert_eq!(loaded.config.alarms().len(), 2);
    Ok(())
}

#[test]
fn saving_on_disk_rotates_the_backup() -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("config.toml");
    let real = RealFileSystem;

    fs::write(&path, "first = 1\n")?;
    fs::write(backup_path(&path), "ancient = 0\n")?;

    let mut document = default_document();
    save_document(&real, &path, &document)?;
    assert_eq!(fs::read_to_string(backup_path(&path))?, "first = 1\n");
    assert_eq!(toml::from_str::<Table>(&fs::read_to_string(&path)?)?, document);

    document.insert("alarms".into(), Value::Array(vec![]));
    save_document(&real, &path, &document)?;
    let backup: Table = toml::from_str(&fs::read_to_string(backup_path(&path))?)?;
    assert_eq!(backup, default_document());
    assert_eq!(toml::from_str::<Table>(&fs::read_to_string(&path)?)?, document);
    Ok(())
}

#[test]
fn missing_file_on_disk_counts_as_nothing_proposed() -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("absent.toml");

    assert!(load_from_path(&RealFileSystem, &path).is_none());
    let loaded = load_and_validate(&RealFileSystem, &path)?;
    assert!(loaded.modified);
    assert_eq!(loaded.config.title(), "Alarm clock");
    Ok(())
}

#[test]
fn backup_name_appends_org() {
    assert_eq!(
        backup_path(std::path::Path::new("/etc/clock/config.toml")),
        std::path::PathBuf::from("/etc/clock/config.toml.org")
    );
}
