// src/config/schema.rs

//! Per-path configuration schema.
//!
//! The schema is a tree of [`FieldSpec`] nodes. Each node pairs a key with a
//! [`FieldKind`], which carries both the constraint the validator applies at
//! that position and the default value substituted when the check fails.
//! The default document is derived from the tree, so the two can never drift
//! apart.
//!
//! ```toml
//! [settings]
//! title = "Alarm clock"
//! screen_width = 1024
//! ...
//! [settings.fonts.large]
//! file = "/usr/share/fonts/truetype/freefont/FreeSerifBoldItalic.ttf"
//! size = 240
//!
//! [[alarms]]
//! time = 21000
//! days = ["Monday"]
//! ```

use std::sync::LazyLock;

use toml::{Table, Value};

/// Upper bound (inclusive) for an alarm's `time`, in seconds since midnight.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Key of the time-of-day field inside an alarm record.
pub const ALARM_TIME_KEY: &str = "time";

/// Key of the optional weekday list inside an alarm record.
pub const ALARM_DAYS_KEY: &str = "days";

/// The validation rule attached to a schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    String,
    Mapping,
    Integer,
    ExistingFile,
    AlarmList,
    Time,
    Array,
}

/// Constraint plus default for one schema node.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    String(&'static str),
    Integer(i64),
    /// A path that must exist on disk.
    ExistingFile(&'static str),
    Mapping(Vec<FieldSpec>),
    AlarmList(Vec<DefaultAlarm>),
    /// Seconds since midnight. Only understood inside alarm records.
    Time(i64),
    /// List of strings. Only understood inside alarm records.
    Array(Vec<&'static str>),
}

/// An alarm entry of the default document.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultAlarm {
    pub time: i64,
    pub days: Vec<&'static str>,
}

impl DefaultAlarm {
    fn to_value(&self) -> Value {
        let mut record = Table::new();
        record.insert(ALARM_TIME_KEY.to_string(), Value::Integer(self.time));
        record.insert(ALARM_DAYS_KEY.to_string(), string_array(&self.days));
        Value::Table(record)
    }
}

/// A named node of the schema tree.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub fn string(name: &'static str, default: &'static str) -> Self {
        Self { name, kind: FieldKind::String(default) }
    }

    pub fn integer(name: &'static str, default: i64) -> Self {
        Self { name, kind: FieldKind::Integer(default) }
    }

    pub fn existing_file(name: &'static str, default: &'static str) -> Self {
        Self { name, kind: FieldKind::ExistingFile(default) }
    }

    pub fn mapping(name: &'static str, fields: Vec<FieldSpec>) -> Self {
        Self { name, kind: FieldKind::Mapping(fields) }
    }

    pub fn alarm_list(name: &'static str, defaults: Vec<DefaultAlarm>) -> Self {
        Self { name, kind: FieldKind::AlarmList(defaults) }
    }

    pub fn time(name: &'static str, default: i64) -> Self {
        Self { name, kind: FieldKind::Time(default) }
    }

    pub fn array(name: &'static str, default: Vec<&'static str>) -> Self {
        Self { name, kind: FieldKind::Array(default) }
    }

    pub fn constraint(&self) -> Constraint {
        match self.kind {
            FieldKind::String(_) => Constraint::String,
            FieldKind::Integer(_) => Constraint::Integer,
            FieldKind::ExistingFile(_) => Constraint::ExistingFile,
            FieldKind::Mapping(_) => Constraint::Mapping,
            FieldKind::AlarmList(_) => Constraint::AlarmList,
            FieldKind::Time(_) => Constraint::Time,
            FieldKind::Array(_) => Constraint::Array,
        }
    }

    /// The default value of this node, fully expanded for mappings.
    pub fn default_value(&self) -> Value {
        match &self.kind {
            FieldKind::String(s) | FieldKind::ExistingFile(s) => Value::String(s.to_string()),
            FieldKind::Integer(n) | FieldKind::Time(n) => Value::Integer(*n),
            FieldKind::Mapping(fields) => Value::Table(default_table(fields)),
            FieldKind::AlarmList(alarms) => {
                Value::Array(alarms.iter().map(DefaultAlarm::to_value).collect())
            }
            FieldKind::Array(items) => string_array(items),
        }
    }

    /// Child nodes, if this is a mapping.
    pub fn children(&self) -> Option<&[FieldSpec]> {
        match &self.kind {
            FieldKind::Mapping(fields) => Some(fields),
            _ => None,
        }
    }
}

/// Root of a schema tree. The root itself is always a mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Look up a node by dotted path, e.g. `"settings.fonts.large.size"`.
    pub fn field(&self, path: &str) -> Option<&FieldSpec> {
        let mut level = self.fields.as_slice();
        let mut found = None;
        for segment in path.split('.') {
            let spec = level.iter().find(|f| f.name == segment)?;
            level = spec.children().unwrap_or(&[]);
            found = Some(spec);
        }
        found
    }

    /// The complete default document.
    pub fn default_document(&self) -> Table {
        default_table(&self.fields)
    }
}

fn default_table(fields: &[FieldSpec]) -> Table {
    fields
        .iter()
        .map(|f| (f.name.to_string(), f.default_value()))
        .collect()
}

fn string_array(items: &[&str]) -> Value {
    Value::Array(items.iter().map(|s| Value::String(s.to_string())).collect())
}

fn font(name: &'static str, file: &'static str, size: i64) -> FieldSpec {
    FieldSpec::mapping(
        name,
        vec![
            FieldSpec::existing_file("file", file),
            FieldSpec::integer("size", size),
        ],
    )
}

static CLOCK_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new(vec![
        FieldSpec::mapping(
            "settings",
            vec![
                FieldSpec::string("title", "Alarm clock"),
                FieldSpec::integer("screen_width", 1024),
                FieldSpec::integer("screen_height", 600),
                FieldSpec::existing_file("alarm_sound_file", "Alarm_Classic.ogg"),
                FieldSpec::integer("dim_delay", 60),
                FieldSpec::integer("bright", 200),
                FieldSpec::integer("dim", 30),
                FieldSpec::mapping(
                    "fonts",
                    vec![
                        font(
                            "large",
                            "/usr/share/fonts/truetype/freefont/FreeSerifBoldItalic.ttf",
                            240,
                        ),
                        font(
                            "medium",
                            "/usr/share/fonts/truetype/freefont/FreeSerif.ttf",
                            50,
                        ),
                        font(
                            "small",
                            "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
                            32,
                        ),
                    ],
                ),
            ],
        ),
        FieldSpec::alarm_list(
            "alarms",
            vec![
                // 05:50
                DefaultAlarm { time: 21_000, days: vec!["Monday"] },
                // 06:00
                DefaultAlarm { time: 21_600, days: vec!["Monday", "Tuesday"] },
            ],
        ),
    ])
});

/// The alarm clock's schema, built once per process.
pub fn clock_schema() -> &'static Schema {
    &CLOCK_SCHEMA
}

/// Convenience: the alarm clock's default document.
pub fn default_document() -> Table {
    clock_schema().default_document()
}

/// Every `ExistingFile` default in the schema, with its dotted path.
///
/// Handy for seeding a mock filesystem or for reporting which assets the
/// defaults expect to find.
pub fn default_file_paths(schema: &Schema) -> Vec<(String, &'static str)> {
    let mut out = Vec::new();
    collect_files(schema.fields(), "", &mut out);
    out
}

fn collect_files(fields: &[FieldSpec], prefix: &str, out: &mut Vec<(String, &'static str)>) {
    for field in fields {
        let path = if prefix.is_empty() {
            field.name.to_string()
        } else {
            format!("{prefix}.{}", field.name)
        };
        match &field.kind {
            FieldKind::ExistingFile(default) => out.push((path, *default)),
            FieldKind::Mapping(children) => collect_files(children, &path, out),
            _ => {}
        }
    }
}
