//! Validated instances of a schema.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::schema::{HashCapability, Schema, SchemaError, SchemaResult, SchemaValidator};

use super::hash::HashKey;

/// A document accepted by a schema.
///
/// Holds the accepted field mapping with extras already resolved per the
/// schema's policy. Frozen instances never change after construction.
#[derive(Debug, Clone)]
pub struct Instance {
    schema: Arc<Schema>,
    values: Map<String, Value>,
}

impl Schema {
    /// Validates `document` and builds an instance bound to this schema.
    pub fn validate(self: &Arc<Self>, document: &Value) -> SchemaResult<Instance> {
        let values = SchemaValidator::new(self).validate_document(document)?;
        Ok(Instance {
            schema: Arc::clone(self),
            values,
        })
    }
}

impl Instance {
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns the field mapping, as it would be serialized.
    pub fn dict(&self) -> Map<String, Value> {
        self.values.clone()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.values.clone())
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Assigns a field.
    ///
    /// # Errors
    ///
    /// - `PROBE_INSTANCE_IMMUTABLE` when the schema is frozen; the instance
    ///   is left untouched.
    /// - `PROBE_VALIDATION_FAILED` when the value does not fit the declared
    ///   type, or the field is undeclared and extras are not allowed.
    pub fn set(&mut self, field: &str, value: Value) -> SchemaResult<()> {
        if self.schema.is_frozen() {
            return Err(SchemaError::instance_immutable(self.schema.name(), field));
        }

        let accepted = SchemaValidator::new(&self.schema).validate_assignment(field, &value)?;
        self.values.insert(field.to_string(), accepted);
        Ok(())
    }

    /// Derives the hash key used for set membership.
    ///
    /// # Errors
    ///
    /// `PROBE_UNHASHABLE` when the schema is not frozen, declares a
    /// container field, or the instance holds a container value kept as
    /// an allowed extra.
    pub fn hash_key(&self) -> SchemaResult<HashKey> {
        match self.schema.hash_capability() {
            HashCapability::Derived => HashKey::derive(self.schema.name(), &self.values),
            HashCapability::NotFrozen => Err(SchemaError::unhashable(
                self.schema.name(),
                self.schema.name(),
            )),
            HashCapability::UnhashableField { type_name, .. } => {
                Err(SchemaError::unhashable_container(self.schema.name(), type_name))
            }
        }
    }
}

/// Instances are equal when built from the same schema with equal values.
impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        self.schema.name() == other.schema.name() && self.values == other.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ErrorClass, ExtraPolicy, FieldDef, FieldType, ModelConfig, SchemaErrorCode};
    use serde_json::json;
    use std::collections::BTreeMap;

    fn point_schema(config: ModelConfig) -> Arc<Schema> {
        let mut fields = BTreeMap::new();
        fields.insert("x".into(), FieldDef::required_int());
        fields.insert("y".into(), FieldDef::required_string());
        Arc::new(Schema::new("Point", fields, config))
    }

    #[test]
    fn test_validate_binds_schema() {
        let schema = point_schema(ModelConfig::default());
        let instance = schema.validate(&json!({ "x": 1, "y": "b" })).unwrap();
        assert_eq!(instance.schema().name(), "Point");
        assert_eq!(instance.get("x"), Some(&json!(1)));
        assert_eq!(instance.to_value(), json!({ "x": 1, "y": "b" }));
    }

    #[test]
    fn test_frozen_set_fails_and_leaves_values() {
        let schema = point_schema(ModelConfig::default().with_frozen(true));
        let mut instance = schema.validate(&json!({ "x": 1, "y": "b" })).unwrap();

        let err = instance.set("y", json!("a")).unwrap_err();
        assert_eq!(err.code(), SchemaErrorCode::InstanceImmutable);
        assert!(err.message().contains("\"Point\" is immutable"));
        assert_eq!(instance.get("y"), Some(&json!("b")));
    }

    #[test]
    fn test_mutable_set_is_observable() {
        let schema = point_schema(ModelConfig::default());
        let mut instance = schema.validate(&json!({ "x": 1, "y": "b" })).unwrap();

        instance.set("x", json!(2)).unwrap();
        assert_eq!(instance.get("x"), Some(&json!(2)));
    }

    #[test]
    fn test_mutable_set_rejects_bad_type() {
        let schema = point_schema(ModelConfig::default());
        let mut instance = schema.validate(&json!({ "x": 1, "y": "b" })).unwrap();

        let err = instance.set("x", json!("two")).unwrap_err();
        assert_eq!(err.class(), ErrorClass::Validation);
        assert_eq!(instance.get("x"), Some(&json!(1)));
    }

    #[test]
    fn test_mutable_hash_names_model() {
        let schema = point_schema(ModelConfig::default());
        let instance = schema.validate(&json!({ "x": 1, "y": "b" })).unwrap();

        let err = instance.hash_key().unwrap_err();
        assert_eq!(err.message(), "unhashable type: 'Point'");
    }

    #[test]
    fn test_frozen_allow_with_container_extra_cannot_hash() {
        let schema = point_schema(
            ModelConfig::default()
                .with_frozen(true)
                .with_extra(ExtraPolicy::Allow),
        );
        let scalar = schema.validate(&json!({ "x": 1, "y": "b", "z": 3 })).unwrap();
        assert!(scalar.hash_key().is_ok());

        let container = schema
            .validate(&json!({ "x": 1, "y": "b", "z": [3] }))
            .unwrap();
        let err = container.hash_key().unwrap_err();
        assert_eq!(err.message(), "unhashable type: 'list'");
    }

    #[test]
    fn test_equality_requires_same_schema_name() {
        let mut fields = BTreeMap::new();
        fields.insert("x".into(), FieldDef::required(FieldType::Int));
        let a = Arc::new(Schema::new("A", fields.clone(), ModelConfig::default()));
        let b = Arc::new(Schema::new("B", fields, ModelConfig::default()));

        let doc = json!({ "x": 1 });
        assert_eq!(a.validate(&doc).unwrap(), a.validate(&doc).unwrap());
        assert_ne!(a.validate(&doc).unwrap(), b.validate(&doc).unwrap());
    }
}
