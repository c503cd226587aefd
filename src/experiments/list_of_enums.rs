//! Null inside a list of enum members is rejected, even though the
//! members themselves are plain strings.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::json;

use crate::probe::{expect_eq, expect_failure, Experiment, Probe, ProbeResult};
use crate::schema::{ErrorClass, FieldDef, FieldType, ModelConfig, Schema, ValidationDetails};

const CHOICES: [&str; 3] = ["CHOICE_1", "CHOICE_2", "CHOICE_3"];

fn multiple_choices() -> Arc<Schema> {
    let mut fields = BTreeMap::new();
    fields.insert(
        "choices".into(),
        FieldDef::required_array(FieldType::enumeration("Choice", CHOICES)),
    );
    Arc::new(Schema::new("MultipleChoices", fields, ModelConfig::default()))
}

pub fn list_without_none_works() -> ProbeResult {
    multiple_choices().validate(&json!({ "choices": ["CHOICE_1", "CHOICE_2"] }))?;
    Ok(())
}

pub fn list_with_none_crashes() -> ProbeResult {
    let err = expect_failure(
        multiple_choices().validate(&json!({ "choices": ["CHOICE_1", null] })),
        ErrorClass::Validation,
    )?;
    expect_eq(
        "violation",
        &[ValidationDetails::null_value("choices[1]")][..],
        err.details(),
    )
}

pub fn list_with_unknown_member_crashes() -> ProbeResult {
    expect_failure(
        multiple_choices().validate(&json!({ "choices": ["CHOICE_1", "CHOICE_4"] })),
        ErrorClass::Validation,
    )?;
    Ok(())
}

pub fn experiment() -> Experiment {
    Experiment {
        name: "list_of_enums",
        description: "Whether a list of string enum members accepts null",
        probes: vec![
            Probe::new(
                "list_without_none_works",
                "a list of valid members is accepted",
                list_without_none_works,
            ),
            Probe::new(
                "list_with_none_crashes",
                "a null element is a validation error",
                list_with_none_crashes,
            ),
            Probe::new(
                "list_with_unknown_member_crashes",
                "a token outside the enum is a validation error",
                list_with_unknown_member_crashes,
            ),
        ],
    }
}
