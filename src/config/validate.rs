// src/config/validate.rs

//! Self-healing validation of a proposed configuration document.
//!
//! Validation never fails. Whatever is proposed (nothing at all, the wrong
//! shape, extra keys, wrongly-typed values) is mapped onto the schema:
//!
//! - scalars and files fall back field by field,
//! - alarm records that fail their checks are dropped one by one,
//! - a mapping that isn't a mapping is replaced wholesale.
//!
//! The returned [`Validation::modified`] flag tells the caller whether any
//! substitution happened, so it can write the corrected document back.

use std::path::Path;

use toml::{Table, Value};
use tracing::{debug, trace};

use crate::config::days::{parse_days, WeekdaySet};
use crate::config::schema::{
    clock_schema, Constraint, FieldKind, FieldSpec, Schema, ALARM_DAYS_KEY, ALARM_TIME_KEY,
    SECONDS_PER_DAY,
};
use crate::fs::{FileSystem, RealFileSystem};

/// Outcome of one validation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Validation {
    /// A document with exactly the schema's shape.
    pub document: Table,
    /// True if anything had to be defaulted or dropped.
    pub modified: bool,
}

/// Validates documents against a [`Schema`].
///
/// File-existence checks go through the supplied [`FileSystem`]; nothing
/// else touches the outside world, and the validator holds no state between
/// calls.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    schema: &'a Schema,
    fs: &'a dyn FileSystem,
}

impl<'a> Validator<'a> {
    pub fn new(schema: &'a Schema, fs: &'a dyn FileSystem) -> Self {
        Self { schema, fs }
    }

    /// Validate a proposed document. `None` means nothing was proposed.
    pub fn validate(&self, proposed: Option<&Value>) -> Validation {
        match proposed {
            Some(Value::Table(table)) => {
                let (document, modified) = self.validate_mapping(table, self.schema.fields(), "");
                Validation { document, modified }
            }
            Some(other) => {
                debug!(found = other.type_str(), "proposed config is not a table; using defaults");
                self.defaults()
            }
            None => {
                debug!("no proposed config; using defaults");
                self.defaults()
            }
        }
    }

    fn defaults(&self) -> Validation {
        Validation {
            document: self.schema.default_document(),
            modified: true,
        }
    }

    /// Walk the schema's keys (never the proposed ones) so the result always
    /// has the schema's shape and unknown keys are dropped.
    fn validate_mapping(&self, proposed: &Table, fields: &[FieldSpec], path: &str) -> (Table, bool) {
        let mut result = Table::new();
        let mut modified = false;

        for field in fields {
            let field_path = join_path(path, field.name);
            let (value, field_modified) =
                self.validate_field(proposed.get(field.name), field, &field_path);
            result.insert(field.name.to_string(), value);
            modified |= field_modified;
        }

        for key in proposed.keys() {
            if !fields.iter().any(|f| f.name == key) {
                trace!(path = %join_path(path, key), "ignoring unknown key");
            }
        }

        (result, modified)
    }

    fn validate_field(&self, proposed: Option<&Value>, field: &FieldSpec, path: &str) -> (Value, bool) {
        let accepted = match (&field.kind, proposed) {
            (FieldKind::String(_), Some(v @ Value::String(_))) => Some(v.clone()),
            (FieldKind::Integer(_), Some(v @ Value::Integer(_))) => Some(v.clone()),
            (FieldKind::ExistingFile(_), Some(v @ Value::String(p))) => {
                if self.fs.exists(Path::new(p)) {
                    Some(v.clone())
                } else {
                    debug!(path, file = %p, "configured file does not exist");
                    None
                }
            }
            (FieldKind::Mapping(children), Some(Value::Table(table))) => {
                return self.validate_mapping_field(table, children, path);
            }
            (FieldKind::AlarmList(_), Some(Value::Array(entries))) => {
                return validate_alarm_list(entries, path);
            }
            // Time and Array are only meaningful inside alarm records; at
            // mapping level they always fall back.
            (FieldKind::Time(_) | FieldKind::Array(_), _) => {
                debug!(path, constraint = ?field.constraint(), "no mapping-level rule for constraint");
                None
            }
            _ => None,
        };

        match accepted {
            Some(value) => (value, false),
            None => {
                debug!(
                    path,
                    constraint = ?field.constraint(),
                    found = proposed.map(|v| v.type_str()).unwrap_or("nothing"),
                    "substituting default"
                );
                (field.default_value(), true)
            }
        }
    }

    fn validate_mapping_field(&self, table: &Table, children: &[FieldSpec], path: &str) -> (Value, bool) {
        let (validated, modified) = self.validate_mapping(table, children, path);
        (Value::Table(validated), modified)
    }
}

/// Keep every valid record, in order. Only a non-list value brings the
/// default list back; an emptied list is still the user's list.
fn validate_alarm_list(entries: &[Value], path: &str) -> (Value, bool) {
    let mut kept = Vec::with_capacity(entries.len());
    let mut modified = false;

    for (idx, entry) in entries.iter().enumerate() {
        if is_valid_alarm(entry) {
            kept.push(entry.clone());
        } else {
            debug!(path, index = idx, "dropping invalid alarm record");
            modified = true;
        }
    }

    (Value::Array(kept), modified)
}

/// An alarm record needs an in-range integer `time`; `days`, if present,
/// must be a list of recognisable weekday tokens.
pub fn is_valid_alarm(entry: &Value) -> bool {
    let Value::Table(record) = entry else {
        return false;
    };

    let time_ok = matches!(
        record.get(ALARM_TIME_KEY),
        Some(Value::Integer(t)) if (0..=SECONDS_PER_DAY).contains(t)
    );
    if !time_ok {
        return false;
    }

    match record.get(ALARM_DAYS_KEY) {
        None => true,
        Some(Value::Array(tokens)) => parse_day_values(tokens).is_some(),
        Some(_) => false,
    }
}

/// Parse a TOML array of weekday tokens. Non-string tokens are unparseable.
pub fn parse_day_values(tokens: &[Value]) -> Option<WeekdaySet> {
    let names = tokens
        .iter()
        .map(Value::as_str)
        .collect::<Option<Vec<&str>>>()?;
    parse_days(names)
}

/// Validate against the alarm clock's schema using the real filesystem.
pub fn validate_config(proposed: Option<&Value>) -> Validation {
    Validator::new(clock_schema(), &RealFileSystem).validate(proposed)
}

/// Constraint at a dotted path of the alarm clock's schema, if any.
pub fn constraint_at(path: &str) -> Option<Constraint> {
    clock_schema().field(path).map(FieldSpec::constraint)
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}
