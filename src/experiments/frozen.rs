//! Frozen instances
//!
//! `frozen` makes instances immutable, and hashable when every field can
//! hash:
//! - frozen, scalar fields: hashable and immutable
//! - not frozen: neither hashable nor immutable
//! - frozen with a list field: immutable, but not hashable

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::model::{Instance, InstanceSet};
use crate::probe::{expect_eq, expect_failure, Experiment, Probe, ProbeResult};
use crate::schema::{ErrorClass, FieldDef, FieldType, ModelConfig, Schema, SchemaError};

fn scalar_model(name: &str, frozen: bool) -> Arc<Schema> {
    let mut fields = BTreeMap::new();
    fields.insert("x".into(), FieldDef::required_int());
    fields.insert("y".into(), FieldDef::required_string());
    Arc::new(Schema::new(name, fields, ModelConfig::default().with_frozen(frozen)))
}

fn frozen_model() -> Arc<Schema> {
    scalar_model("FrozenModel", true)
}

fn not_frozen_model() -> Arc<Schema> {
    scalar_model("NotFrozenModel", false)
}

fn frozen_with_non_hashable_fields_model() -> Arc<Schema> {
    let mut fields = BTreeMap::new();
    fields.insert("x".into(), FieldDef::required_int());
    fields.insert("y".into(), FieldDef::required_array(FieldType::Int));
    Arc::new(Schema::new(
        "FrozenWithNonHashableFieldsModel",
        fields,
        ModelConfig::default().with_frozen(true),
    ))
}

/// Two structurally equal instances of the scalar models.
fn scalar_pair(schema: &Arc<Schema>) -> Result<(Instance, Instance), SchemaError> {
    let doc = json!({ "x": 1, "y": "b" });
    Ok((schema.validate(&doc)?, schema.validate(&doc)?))
}

fn non_hashable_pair() -> Result<(Instance, Instance), SchemaError> {
    let schema = frozen_with_non_hashable_fields_model();
    let doc = json!({ "x": 1, "y": [1, 2, 3] });
    Ok((schema.validate(&doc)?, schema.validate(&doc)?))
}

/// Every assignment must fail as immutable and leave the values unchanged.
fn assert_assignments_refused(instance: &mut Instance, assignments: &[(&str, Value)]) -> ProbeResult {
    let before = instance.dict();
    for (field, value) in assignments {
        expect_failure(instance.set(field, value.clone()), ErrorClass::ImmutabilityOrType)?;
    }
    expect_eq("values after refused assignment", &before, &instance.dict())
}

pub fn frozen_hashes_object() -> ProbeResult {
    let (frozen_1, frozen_2) = scalar_pair(&frozen_model())?;
    let set = InstanceSet::from_instances([&frozen_1, &frozen_2])?;
    expect_eq("distinct members", &1, &set.len())
}

pub fn frozen_crashes_when_mutating_instance() -> ProbeResult {
    let (mut frozen_1, _) = scalar_pair(&frozen_model())?;
    assert_assignments_refused(&mut frozen_1, &[("y", json!("a")), ("x", json!(2))])
}

pub fn not_frozen_crashes_on_hashing() -> ProbeResult {
    let (not_frozen_1, not_frozen_2) = scalar_pair(&not_frozen_model())?;
    expect_failure(
        InstanceSet::from_instances([&not_frozen_1, &not_frozen_2]),
        ErrorClass::ImmutabilityOrType,
    )?;
    Ok(())
}

pub fn not_frozen_allows_mutating_instance() -> ProbeResult {
    let (mut not_frozen_1, _) = scalar_pair(&not_frozen_model())?;
    not_frozen_1.set("y", json!("a"))?;
    not_frozen_1.set("x", json!(2))?;
    expect_eq(
        "values after assignment",
        &json!({ "x": 2, "y": "a" }),
        &not_frozen_1.to_value(),
    )
}

pub fn frozen_with_non_hashable_fields_crashes_on_hashing() -> ProbeResult {
    let (first, second) = non_hashable_pair()?;
    expect_failure(
        InstanceSet::from_instances([&first, &second]),
        ErrorClass::ImmutabilityOrType,
    )?;
    Ok(())
}

pub fn frozen_with_non_hashable_fields_crashes_when_mutating_instance() -> ProbeResult {
    let (mut first, _) = non_hashable_pair()?;
    assert_assignments_refused(&mut first, &[("y", json!([1, 2, 3, 4])), ("x", json!(2))])
}

pub fn experiment() -> Experiment {
    Experiment {
        name: "frozen",
        description: "Immutability and hashability of frozen and mutable instances",
        probes: vec![
            Probe::new(
                "frozen_hashes_object",
                "frozen instances with scalar fields can be put in a set",
                frozen_hashes_object,
            ),
            Probe::new(
                "frozen_crashes_when_mutating_instance",
                "frozen instances refuse assignment",
                frozen_crashes_when_mutating_instance,
            ),
            Probe::new(
                "not_frozen_crashes_on_hashing",
                "mutable instances cannot be put in a set",
                not_frozen_crashes_on_hashing,
            ),
            Probe::new(
                "not_frozen_allows_mutating_instance",
                "mutable instances accept assignment",
                not_frozen_allows_mutating_instance,
            ),
            Probe::new(
                "frozen_with_non_hashable_fields_crashes_on_hashing",
                "a list field keeps frozen instances out of sets",
                frozen_with_non_hashable_fields_crashes_on_hashing,
            ),
            Probe::new(
                "frozen_with_non_hashable_fields_crashes_when_mutating_instance",
                "frozen instances refuse assignment whatever their field types",
                frozen_with_non_hashable_fields_crashes_when_mutating_instance,
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaErrorCode;

    #[test]
    fn test_probes_hold() {
        for probe in experiment().probes {
            if let Err(failure) = (probe.check)() {
                panic!("{} failed: {}", probe.name, failure);
            }
        }
    }

    #[test]
    fn test_non_hashable_error_names_list_type() {
        let (first, _) = non_hashable_pair().unwrap();
        let err = first.hash_key().unwrap_err();
        assert_eq!(err.code(), SchemaErrorCode::Unhashable);
        assert_eq!(err.message(), "unhashable type: 'list'");
    }
}
