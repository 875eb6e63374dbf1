mod common;

use alarmclock::config::schema::{clock_schema, default_document, FieldKind, FieldSpec};
use alarmclock::config::validate::Validator;
use proptest::prelude::*;
use toml::{Table, Value};

use common::seeded_fs;

const KEYS: &[&str] = &[
    "settings", "title", "screen_width", "screen_height", "alarm_sound_file", "dim_delay",
    "bright", "dim", "fonts", "large", "medium", "small", "file", "size", "alarms", "time",
    "days", "colour",
];

const TOKENS: &[&str] = &["Mon", "Tuesday", "Sat", "Sunday", "Frog", ""];

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Integer),
        (-10i64..100_000).prop_map(Value::Integer),
        "[a-zA-Z_./]{0,12}".prop_map(Value::String),
        Just(Value::String("Alarm_Classic.ogg".into())),
        any::<bool>().prop_map(Value::Boolean),
    ]
}

/// Something that looks like an alarm record, valid or not.
fn alarm_like() -> impl Strategy<Value = Value> {
    (
        -100i64..90_000,
        proptest::option::of(proptest::collection::vec(
            proptest::sample::select(TOKENS),
            0..4,
        )),
    )
        .prop_map(|(time, days)| {
            let mut record = Table::new();
            record.insert("time".into(), Value::Integer(time));
            if let Some(days) = days {
                record.insert(
                    "days".into(),
                    Value::Array(days.into_iter().map(|d| Value::String(d.into())).collect()),
                );
            }
            Value::Table(record)
        })
}

fn value_tree() -> impl Strategy<Value = Value> {
    let leaves = prop_oneof![leaf(), alarm_like()];
    leaves.prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
            proptest::collection::vec((proptest::sample::select(KEYS), inner), 0..6).prop_map(
                |pairs| {
                    Value::Table(
                        pairs
                            .into_iter()
                            .map(|(k, v)| (k.to_string(), v))
                            .collect(),
                    )
                }
            ),
        ]
    })
}

/// True if `doc` has exactly the keys of `fields`, recursively through mappings.
fn has_schema_shape(doc: &Table, fields: &[FieldSpec]) -> bool {
    if doc.len() != fields.len() {
        return false;
    }
    fields.iter().all(|field| match (&field.kind, doc.get(field.name)) {
        (FieldKind::Mapping(children), Some(Value::Table(sub))) => has_schema_shape(sub, children),
        (FieldKind::Mapping(_), _) => false,
        (FieldKind::AlarmList(_), Some(Value::Array(_))) => true,
        (_, Some(_)) => true,
        (_, None) => false,
    })
}

proptest! {
    #[test]
    fn validated_documents_have_the_schema_shape(proposed in value_tree()) {
        let fs = seeded_fs();
        let validation = Validator::new(clock_schema(), &fs).validate(Some(&proposed));
        prop_assert!(has_schema_shape(&validation.document, clock_schema().fields()));
    }

    #[test]
    fn validation_is_idempotent(proposed in value_tree()) {
        let fs = seeded_fs();
        let validator = Validator::new(clock_schema(), &fs);

        let first = validator.validate(Some(&proposed));
        let second = validator.validate(Some(&Value::Table(first.document.clone())));

        prop_assert!(!second.modified);
        prop_assert_eq!(second.document, first.document);
    }

    #[test]
    fn extra_top_level_keys_never_leak(key in "[a-z]{3,10}", value in leaf()) {
        prop_assume!(key != "settings" && key != "alarms");
        let fs = seeded_fs();
        let mut table = default_document();
        table.insert(key.clone(), value);

        let validation = Validator::new(clock_schema(), &fs).validate(Some(&Value::Table(table)));

        prop_assert!(validation.document.get(&key).is_none());
        prop_assert!(!validation.modified);
    }
}
