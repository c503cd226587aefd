//! Schema validator for documents
//!
//! Validation semantics:
//! - All required fields are present
//! - Undeclared fields are kept, dropped, or rejected per the extra policy
//! - Field types exactly match schema types (int accepted for float)
//! - Enum fields hold one of the declared tokens
//! - Null is never accepted, at any depth
//!
//! Every violation in a document is collected before failing, so one
//! error reports all of them. Nothing is produced on failure.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::errors::{SchemaError, SchemaResult, ValidationDetails};
use super::types::{ExtraPolicy, FieldDef, FieldType, Schema};

/// Validator that enforces one schema on documents.
///
/// Validator does not mutate its input; it returns the accepted mapping.
pub struct SchemaValidator<'a> {
    schema: &'a Schema,
}

impl<'a> SchemaValidator<'a> {
    /// Creates a validator for the given schema.
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Validates a document against the schema.
    ///
    /// Returns the accepted field mapping: declared fields, plus undeclared
    /// ones when the schema allows extras.
    ///
    /// # Errors
    ///
    /// Returns a `PROBE_VALIDATION_FAILED` error listing every violation.
    pub fn validate_document(&self, document: &Value) -> SchemaResult<Map<String, Value>> {
        let doc_obj = document.as_object().ok_or_else(|| {
            SchemaError::validation_failed(
                self.schema.name(),
                vec![ValidationDetails::type_mismatch(
                    "$root",
                    "object",
                    json_type_name(document),
                )],
            )
        })?;

        let mut violations = Vec::new();
        let accepted = self.validate_object(doc_obj, self.schema.fields(), "", &mut violations);

        if violations.is_empty() {
            Ok(accepted)
        } else {
            Err(SchemaError::validation_failed(self.schema.name(), violations))
        }
    }

    /// Validates a single value about to be assigned to `field`.
    ///
    /// Undeclared fields are accepted as-is only when extras are allowed.
    pub fn validate_assignment(&self, field: &str, value: &Value) -> SchemaResult<Value> {
        let mut violations = Vec::new();

        let accepted = match self.schema.field(field) {
            Some(def) => self.validate_value(value, &def.field_type, field, &mut violations),
            None if self.schema.config().extra == ExtraPolicy::Allow => Some(value.clone()),
            None => {
                violations.push(ValidationDetails::extra_field(field));
                None
            }
        };

        match accepted {
            Some(value) if violations.is_empty() => Ok(value),
            _ => Err(SchemaError::validation_failed(self.schema.name(), violations)),
        }
    }

    /// Validates an object against field definitions.
    fn validate_object(
        &self,
        obj: &Map<String, Value>,
        fields: &BTreeMap<String, FieldDef>,
        path_prefix: &str,
        violations: &mut Vec<ValidationDetails>,
    ) -> Map<String, Value> {
        let mut accepted = Map::new();

        for (key, value) in obj {
            if fields.contains_key(key) {
                continue;
            }
            match self.schema.config().extra {
                ExtraPolicy::Allow => {
                    accepted.insert(key.clone(), value.clone());
                }
                ExtraPolicy::Ignore => {}
                ExtraPolicy::Forbid => {
                    violations.push(ValidationDetails::extra_field(make_path(path_prefix, key)));
                }
            }
        }

        for (field_name, field_def) in fields {
            let field_path = make_path(path_prefix, field_name);

            match obj.get(field_name) {
                Some(value) => {
                    if let Some(value) =
                        self.validate_value(value, &field_def.field_type, &field_path, violations)
                    {
                        accepted.insert(field_name.clone(), value);
                    }
                }
                None if field_def.required => {
                    violations.push(ValidationDetails::missing_field(field_path));
                }
                None => {}
            }
        }

        accepted
    }

    /// Validates a value against a field type, returning the accepted value.
    fn validate_value(
        &self,
        value: &Value,
        expected_type: &FieldType,
        field_path: &str,
        violations: &mut Vec<ValidationDetails>,
    ) -> Option<Value> {
        if value.is_null() {
            violations.push(ValidationDetails::null_value(field_path));
            return None;
        }

        let matches = match expected_type {
            FieldType::String => value.is_string(),
            FieldType::Int => value.is_i64() || value.is_u64(),
            FieldType::Bool => value.is_boolean(),
            FieldType::Float => value.is_number(),
            FieldType::Enum { name, values } => {
                return match value.as_str() {
                    Some(token) if values.iter().any(|v| v == token) => Some(value.clone()),
                    Some(token) => {
                        violations.push(ValidationDetails::invalid_enum(
                            field_path, name, values, token,
                        ));
                        None
                    }
                    None => {
                        violations.push(type_mismatch(field_path, name, value));
                        None
                    }
                };
            }
            FieldType::Object { fields } => {
                return match value.as_object() {
                    Some(obj) => Some(Value::Object(
                        self.validate_object(obj, fields, field_path, violations),
                    )),
                    None => {
                        violations.push(type_mismatch(field_path, "object", value));
                        None
                    }
                };
            }
            FieldType::Array { element_type } => {
                return match value.as_array() {
                    Some(arr) => {
                        let elements = arr
                            .iter()
                            .enumerate()
                            .filter_map(|(i, elem)| {
                                let elem_path = format!("{}[{}]", field_path, i);
                                self.validate_value(elem, element_type, &elem_path, violations)
                            })
                            .collect();
                        Some(Value::Array(elements))
                    }
                    None => {
                        violations.push(type_mismatch(field_path, "array", value));
                        None
                    }
                };
            }
        };

        if matches {
            Some(value.clone())
        } else {
            violations.push(type_mismatch(field_path, expected_type.type_name(), value));
            None
        }
    }
}

/// Returns the JSON type name for error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Creates a field path from prefix and field name.
fn make_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}

fn type_mismatch(field_path: &str, expected: &str, actual: &Value) -> ValidationDetails {
    ValidationDetails::type_mismatch(field_path, expected, json_type_name(actual))
}
