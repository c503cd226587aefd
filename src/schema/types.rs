//! Schema type definitions
//!
//! Supported field types:
//! - string: UTF-8 string
//! - int: 64-bit integer
//! - bool: Boolean
//! - float: 64-bit floating point (integers accepted)
//! - enum: one of a fixed set of string tokens
//! - object: Nested object with field schema
//! - array: Homogeneous array with element type
//!
//! A schema carries a [`ModelConfig`] selecting its extra-field policy and
//! whether instances are frozen. Hash capability is derived once, when the
//! schema is constructed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Supported field types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// 64-bit integer
    Int,
    /// Boolean
    Bool,
    /// 64-bit floating point
    Float,
    /// Enumerated string tokens
    Enum {
        /// Enumeration name, used in error messages
        name: String,
        /// Accepted tokens
        values: Vec<String>,
    },
    /// Nested object with its own field schema
    Object {
        /// Nested field definitions
        fields: BTreeMap<String, FieldDef>,
    },
    /// Homogeneous array with single element type
    Array {
        /// Element type (boxed to allow recursive types)
        element_type: Box<FieldType>,
    },
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int => "int",
            FieldType::Bool => "bool",
            FieldType::Float => "float",
            FieldType::Enum { .. } => "enum",
            FieldType::Object { .. } => "object",
            FieldType::Array { .. } => "array",
        }
    }

    /// Whether values of this type can take part in a hash key.
    ///
    /// Containers are never hash-eligible, whatever their contents.
    pub fn is_hashable(&self) -> bool {
        !matches!(self, FieldType::Object { .. } | FieldType::Array { .. })
    }

    /// Builds an enum type from a name and its tokens
    pub fn enumeration<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldType::Enum {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds an array type over the given element type
    pub fn array_of(element_type: FieldType) -> Self {
        FieldType::Array {
            element_type: Box::new(element_type),
        }
    }
}

/// Field definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field data type
    #[serde(flatten)]
    pub field_type: FieldType,
    /// Whether field must be present
    pub required: bool,
}

impl FieldDef {
    /// Create a required field of any type
    pub fn required(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: true,
        }
    }

    /// Create an optional field of any type
    pub fn optional(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: false,
        }
    }

    /// Create a required string field
    pub fn required_string() -> Self {
        Self::required(FieldType::String)
    }

    /// Create an optional string field
    pub fn optional_string() -> Self {
        Self::optional(FieldType::String)
    }

    /// Create a required int field
    pub fn required_int() -> Self {
        Self::required(FieldType::Int)
    }

    /// Create an optional int field
    pub fn optional_int() -> Self {
        Self::optional(FieldType::Int)
    }

    /// Create a required bool field
    pub fn required_bool() -> Self {
        Self::required(FieldType::Bool)
    }

    /// Create a required float field
    pub fn required_float() -> Self {
        Self::required(FieldType::Float)
    }

    /// Create a required enum field
    pub fn required_enum<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::required(FieldType::enumeration(name, values))
    }

    /// Create a required object field
    pub fn required_object(fields: BTreeMap<String, FieldDef>) -> Self {
        Self::required(FieldType::Object { fields })
    }

    /// Create a required array field
    pub fn required_array(element_type: FieldType) -> Self {
        Self::required(FieldType::array_of(element_type))
    }

    /// Create an optional array field
    pub fn optional_array(element_type: FieldType) -> Self {
        Self::optional(FieldType::array_of(element_type))
    }
}

/// What happens to input keys a schema does not declare
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtraPolicy {
    /// Keep undeclared keys as given
    Allow,
    /// Drop undeclared keys silently
    #[default]
    Ignore,
    /// Reject documents with undeclared keys
    Forbid,
}

impl ExtraPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtraPolicy::Allow => "allow",
            ExtraPolicy::Ignore => "ignore",
            ExtraPolicy::Forbid => "forbid",
        }
    }
}

impl fmt::Display for ExtraPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-schema policy configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Extra-field handling
    pub extra: ExtraPolicy,
    /// Instances are immutable once constructed
    pub frozen: bool,
}

impl ModelConfig {
    /// Returns a copy with the given extra-field policy
    pub fn with_extra(mut self, extra: ExtraPolicy) -> Self {
        self.extra = extra;
        self
    }

    /// Returns a copy with the given frozen setting
    pub fn with_frozen(mut self, frozen: bool) -> Self {
        self.frozen = frozen;
        self
    }
}

/// Whether instances of a schema can produce hash keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashCapability {
    /// Frozen with only hash-eligible field types
    Derived,
    /// Mutable instances never hash
    NotFrozen,
    /// Frozen, but this declared field can never hash
    UnhashableField {
        field: String,
        type_name: &'static str,
    },
}

impl HashCapability {
    fn derive(fields: &BTreeMap<String, FieldDef>, config: &ModelConfig) -> Self {
        if !config.frozen {
            return HashCapability::NotFrozen;
        }

        // BTreeMap order makes the reported field deterministic
        match fields
            .iter()
            .find(|(_, def)| !def.field_type.is_hashable())
        {
            Some((name, def)) => HashCapability::UnhashableField {
                field: name.clone(),
                type_name: def.field_type.type_name(),
            },
            None => HashCapability::Derived,
        }
    }

    pub fn is_derived(&self) -> bool {
        matches!(self, HashCapability::Derived)
    }
}

/// On-disk form of a schema, without derived state
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SchemaFile {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    fields: BTreeMap<String, FieldDef>,
    #[serde(default)]
    config: ModelConfig,
}

/// Complete schema definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SchemaFile", into = "SchemaFile")]
pub struct Schema {
    name: String,
    description: Option<String>,
    fields: BTreeMap<String, FieldDef>,
    config: ModelConfig,
    hash_capability: HashCapability,
}

impl From<SchemaFile> for Schema {
    fn from(file: SchemaFile) -> Self {
        let mut schema = Schema::new(file.name, file.fields, file.config);
        schema.description = file.description;
        schema
    }
}

impl From<Schema> for SchemaFile {
    fn from(schema: Schema) -> Self {
        Self {
            name: schema.name,
            description: schema.description,
            fields: schema.fields,
            config: schema.config,
        }
    }
}

impl Schema {
    /// Create a new schema
    pub fn new(
        name: impl Into<String>,
        fields: BTreeMap<String, FieldDef>,
        config: ModelConfig,
    ) -> Self {
        let hash_capability = HashCapability::derive(&fields, &config);
        Self {
            name: name.into(),
            description: None,
            fields,
            config,
            hash_capability,
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn fields(&self) -> &BTreeMap<String, FieldDef> {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.get(name)
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn is_frozen(&self) -> bool {
        self.config.frozen
    }

    pub fn hash_capability(&self) -> &HashCapability {
        &self.hash_capability
    }

    /// Validates the schema structure itself (not a document)
    pub fn validate_structure(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Schema name must not be empty".into());
        }
        if self.fields.is_empty() {
            return Err(format!("Schema '{}' must declare at least one field", self.name));
        }
        validate_fields(&self.fields, "")
    }
}

fn validate_fields(fields: &BTreeMap<String, FieldDef>, prefix: &str) -> Result<(), String> {
    for (name, def) in fields {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", prefix, name)
        };
        validate_field_type(&def.field_type, &path)?;
    }
    Ok(())
}

fn validate_field_type(field_type: &FieldType, path: &str) -> Result<(), String> {
    match field_type {
        FieldType::Enum { name, values } => {
            if values.is_empty() {
                return Err(format!("Enum '{}' at '{}' declares no values", name, path));
            }
            let mut seen = std::collections::BTreeSet::new();
            for value in values {
                if !seen.insert(value) {
                    return Err(format!(
                        "Enum '{}' at '{}' declares '{}' twice",
                        name, path, value
                    ));
                }
            }
            Ok(())
        }
        FieldType::Object { fields } => validate_fields(fields, path),
        FieldType::Array { element_type } => validate_field_type(element_type, &format!("{}[]", path)),
        _ => Ok(()),
    }
}
