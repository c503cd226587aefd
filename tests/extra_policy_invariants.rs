//! Extra-Field Policy Invariant Tests
//!
//! - allow keeps every input key
//! - ignore never keeps an undeclared key
//! - forbid rejects any undeclared key and builds nothing

use modelprobe::schema::{ErrorClass, ExtraPolicy, FieldDef, ModelConfig, Schema};
use proptest::prelude::*;
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;

// =============================================================================
// Helper Functions
// =============================================================================

fn schema_with(extra: ExtraPolicy) -> Arc<Schema> {
    let mut fields = BTreeMap::new();
    fields.insert("a".to_string(), FieldDef::required_string());
    Arc::new(Schema::new(
        "MySchema",
        fields,
        ModelConfig::default().with_extra(extra),
    ))
}

fn data() -> Value {
    json!({ "a": "first field", "b": "ignore me or don't" })
}

/// Documents with the declared key plus arbitrary undeclared string keys.
fn document_with_extras() -> impl Strategy<Value = Map<String, Value>> {
    (
        "[a-z ]{0,20}",
        prop::collection::btree_map("[b-z][a-z0-9_]{0,8}", "[a-zA-Z0-9 ]{0,12}", 0..6),
    )
        .prop_map(|(a, extras)| {
            let mut doc = Map::new();
            doc.insert("a".to_string(), Value::String(a));
            for (key, value) in extras {
                doc.insert(key, Value::String(value));
            }
            doc
        })
}

// =============================================================================
// Concrete Scenario
// =============================================================================

#[test]
fn test_allow_output_equals_input() {
    let instance = schema_with(ExtraPolicy::Allow).validate(&data()).unwrap();
    assert_eq!(instance.to_value(), data());
}

#[test]
fn test_ignore_output_is_filtered() {
    let instance = schema_with(ExtraPolicy::Ignore).validate(&data()).unwrap();
    assert_eq!(instance.to_value(), json!({ "a": "first field" }));
}

#[test]
fn test_forbid_rejects() {
    let err = schema_with(ExtraPolicy::Forbid)
        .validate(&data())
        .unwrap_err();
    assert_eq!(err.class(), ErrorClass::Validation);
    assert_eq!(err.details().len(), 1);
    assert_eq!(err.details()[0].field, "b");
}

#[test]
fn test_default_policy_is_ignore() {
    let mut fields = BTreeMap::new();
    fields.insert("a".to_string(), FieldDef::required_string());
    let schema = Arc::new(Schema::new("Plain", fields, ModelConfig::default()));

    let instance = schema.validate(&data()).unwrap();
    assert!(instance.get("b").is_none());
}

#[test]
fn test_allow_keeps_extras_unvalidated() {
    let doc = json!({ "a": "x", "b": null, "c": [1, "two"] });
    let instance = schema_with(ExtraPolicy::Allow).validate(&doc).unwrap();
    assert_eq!(instance.to_value(), doc);
}

#[test]
fn test_declared_fields_still_validated_under_allow() {
    let err = schema_with(ExtraPolicy::Allow)
        .validate(&json!({ "a": 1, "b": "fine" }))
        .unwrap_err();
    assert_eq!(err.details()[0].field, "a");
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_allow_retains_all_keys(doc in document_with_extras()) {
        let input = Value::Object(doc);
        let instance = schema_with(ExtraPolicy::Allow).validate(&input).unwrap();
        prop_assert_eq!(instance.to_value(), input);
    }

    #[test]
    fn prop_ignore_retains_only_declared(doc in document_with_extras()) {
        let input = Value::Object(doc.clone());
        let instance = schema_with(ExtraPolicy::Ignore).validate(&input).unwrap();
        let keys: Vec<&str> = instance.as_map().keys().map(String::as_str).collect();
        prop_assert_eq!(keys, vec!["a"]);
        prop_assert_eq!(instance.get("a"), doc.get("a"));
    }

    #[test]
    fn prop_forbid_fails_iff_extras(doc in document_with_extras()) {
        let extras = doc.len() - 1;
        let result = schema_with(ExtraPolicy::Forbid).validate(&Value::Object(doc));
        if extras == 0 {
            prop_assert!(result.is_ok());
        } else {
            let err = result.unwrap_err();
            prop_assert_eq!(err.class(), ErrorClass::Validation);
            prop_assert_eq!(err.details().len(), extras);
        }
    }
}
