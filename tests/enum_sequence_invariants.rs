//! Enum Sequence Invariant Tests
//!
//! - Sequences of valid tokens are accepted as given
//! - A null element anywhere is a validation error
//! - A token outside the enum is a validation error

use modelprobe::schema::{ErrorClass, FieldDef, FieldType, ModelConfig, Schema, ValidationDetails};
use proptest::prelude::*;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::Arc;

const CHOICES: [&str; 3] = ["CHOICE_1", "CHOICE_2", "CHOICE_3"];

fn multiple_choices() -> Arc<Schema> {
    let mut fields = BTreeMap::new();
    fields.insert(
        "choices".to_string(),
        FieldDef::required_array(FieldType::enumeration("Choice", CHOICES)),
    );
    Arc::new(Schema::new("MultipleChoices", fields, ModelConfig::default()))
}

fn tokens() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(prop::sample::select(CHOICES.to_vec()), 0..8)
        .prop_map(|tokens| tokens.into_iter().map(|t| json!(t)).collect())
}

#[test]
fn test_valid_list_accepted() {
    let instance = multiple_choices()
        .validate(&json!({ "choices": ["CHOICE_1", "CHOICE_2"] }))
        .unwrap();
    assert_eq!(instance.get("choices"), Some(&json!(["CHOICE_1", "CHOICE_2"])));
}

#[test]
fn test_null_element_rejected() {
    let err = multiple_choices()
        .validate(&json!({ "choices": ["CHOICE_1", null] }))
        .unwrap_err();
    assert_eq!(err.class(), ErrorClass::Validation);
    assert_eq!(err.details(), &[ValidationDetails::null_value("choices[1]")]);
}

#[test]
fn test_null_list_rejected() {
    let err = multiple_choices()
        .validate(&json!({ "choices": null }))
        .unwrap_err();
    assert_eq!(err.details()[0].actual, "null");
}

#[test]
fn test_lowercase_token_rejected() {
    let err = multiple_choices()
        .validate(&json!({ "choices": ["choice_1"] }))
        .unwrap_err();
    assert!(err.details()[0].expected.starts_with("Choice member"));
}

proptest! {
    #[test]
    fn prop_valid_tokens_accepted(choices in tokens()) {
        let doc = json!({ "choices": choices });
        let instance = multiple_choices().validate(&doc).unwrap();
        prop_assert_eq!(instance.to_value(), doc);
    }

    #[test]
    fn prop_any_null_rejected(choices in tokens(), at in any::<prop::sample::Index>()) {
        let mut choices = choices;
        let position = at.index(choices.len() + 1);
        choices.insert(position, Value::Null);

        let err = multiple_choices()
            .validate(&json!({ "choices": choices }))
            .unwrap_err();
        prop_assert_eq!(err.class(), ErrorClass::Validation);
        prop_assert_eq!(
            err.details(),
            &[ValidationDetails::null_value(format!("choices[{}]", position))][..]
        );
    }
}
