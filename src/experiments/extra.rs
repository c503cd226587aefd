//! Extra-field policies
//!
//! - allow: undeclared keys are kept, no error
//! - ignore: undeclared keys are dropped, no error
//! - forbid: undeclared keys are a validation error

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::probe::{expect_eq, expect_failure, Experiment, Probe, ProbeResult};
use crate::schema::{ErrorClass, ExtraPolicy, FieldDef, ModelConfig, Schema};

fn my_schema(extra: ExtraPolicy) -> Arc<Schema> {
    let name = match extra {
        ExtraPolicy::Allow => "MySchemaAllow",
        ExtraPolicy::Ignore => "MySchemaIgnore",
        ExtraPolicy::Forbid => "MySchemaForbid",
    };

    let mut fields = BTreeMap::new();
    fields.insert("a".into(), FieldDef::required_string());
    Arc::new(Schema::new(name, fields, ModelConfig::default().with_extra(extra)))
}

fn data() -> Value {
    json!({ "a": "first field", "b": "ignore me or don't" })
}

pub fn allow_serializes_unknown_attributes() -> ProbeResult {
    let s = my_schema(ExtraPolicy::Allow).validate(&data())?;
    expect_eq("allow output", &data(), &s.to_value())
}

pub fn ignore_drops_unknown_attributes() -> ProbeResult {
    let s = my_schema(ExtraPolicy::Ignore).validate(&data())?;
    expect_eq("ignore output", &json!({ "a": "first field" }), &s.to_value())
}

pub fn forbid_crashes_on_unknown_attributes() -> ProbeResult {
    let err = expect_failure(my_schema(ExtraPolicy::Forbid).validate(&data()), ErrorClass::Validation)?;
    let fields: Vec<&str> = err.details().iter().map(|d| d.field.as_str()).collect();
    expect_eq("rejected fields", &["b"][..], &fields[..])
}

pub fn experiment() -> Experiment {
    Experiment {
        name: "extra",
        description: "How each extra-field policy treats undeclared keys",
        probes: vec![
            Probe::new(
                "allow_serializes_unknown_attributes",
                "extra=allow keeps undeclared keys in the output",
                allow_serializes_unknown_attributes,
            ),
            Probe::new(
                "ignore_drops_unknown_attributes",
                "extra=ignore drops undeclared keys from the output",
                ignore_drops_unknown_attributes,
            ),
            Probe::new(
                "forbid_crashes_on_unknown_attributes",
                "extra=forbid rejects the document with a validation error",
                forbid_crashes_on_unknown_attributes,
            ),
        ],
    }
}
