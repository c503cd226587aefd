//! Schema error types
//!
//! Error codes:
//! - PROBE_VALIDATION_FAILED (document violates schema)
//! - PROBE_INSTANCE_IMMUTABLE (assignment on a frozen instance)
//! - PROBE_UNHASHABLE (hash key requested from an unhashable instance)
//! - PROBE_SCHEMA_MALFORMED (schema file unreadable or structurally invalid)

use std::fmt;

use serde::Serialize;

/// Coarse classification callers match on.
///
/// Probes declare the class they expect; the code carries the detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorClass {
    /// Document content violates the schema
    Validation,
    /// Mutation of a frozen instance, or hashing of an unhashable value
    ImmutabilityOrType,
    /// The schema definition itself is unusable
    Definition,
}

impl ErrorClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorClass::Validation => "validation",
            ErrorClass::ImmutabilityOrType => "immutability/type",
            ErrorClass::Definition => "definition",
        }
    }
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Schema-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorCode {
    /// Document violates schema
    ValidationFailed,
    /// Attempt to assign a field of a frozen instance
    InstanceImmutable,
    /// Attempt to hash an instance or value that cannot hash
    Unhashable,
    /// Schema file missing, unparsable, or structurally invalid
    SchemaMalformed,
}

impl SchemaErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaErrorCode::ValidationFailed => "PROBE_VALIDATION_FAILED",
            SchemaErrorCode::InstanceImmutable => "PROBE_INSTANCE_IMMUTABLE",
            SchemaErrorCode::Unhashable => "PROBE_UNHASHABLE",
            SchemaErrorCode::SchemaMalformed => "PROBE_SCHEMA_MALFORMED",
        }
    }

    /// Returns the class probes match on
    pub fn class(&self) -> ErrorClass {
        match self {
            SchemaErrorCode::ValidationFailed => ErrorClass::Validation,
            SchemaErrorCode::InstanceImmutable | SchemaErrorCode::Unhashable => {
                ErrorClass::ImmutabilityOrType
            }
            SchemaErrorCode::SchemaMalformed => ErrorClass::Definition,
        }
    }
}

impl fmt::Display for SchemaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Validation failure details
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationDetails {
    /// Field path (e.g., "address.city", "choices[1]")
    pub field: String,
    /// Expected type or condition
    pub expected: String,
    /// Actual value or type found
    pub actual: String,
}

impl ValidationDetails {
    pub fn new(field: impl Into<String>, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::new(field, "field to be present", "missing")
    }

    pub fn extra_field(field: impl Into<String>) -> Self {
        Self::new(field, "no undeclared fields", "extra field present")
    }

    pub fn type_mismatch(field: impl Into<String>, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::new(field, expected, actual)
    }

    pub fn null_value(field: impl Into<String>) -> Self {
        Self::new(field, "non-null value", "null")
    }

    pub fn invalid_enum(field: impl Into<String>, enum_name: &str, values: &[String], actual: &str) -> Self {
        let choices = values
            .iter()
            .map(|v| format!("'{}'", v))
            .collect::<Vec<_>>()
            .join(", ");
        Self::new(
            field,
            format!("{} member (one of {})", enum_name, choices),
            format!("'{}'", actual),
        )
    }
}

impl fmt::Display for ValidationDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field '{}': expected {}, got {}", self.field, self.expected, self.actual)
    }
}

/// Schema error type with full context
#[derive(Debug, Clone)]
pub struct SchemaError {
    /// Error code
    code: SchemaErrorCode,
    /// Human-readable message
    message: String,
    /// Model (schema) name if applicable
    model: Option<String>,
    /// Validation details, one per violation
    details: Vec<ValidationDetails>,
}

impl SchemaError {
    /// Create a validation failed error carrying every violation found
    pub fn validation_failed(model: impl Into<String>, details: Vec<ValidationDetails>) -> Self {
        let model = model.into();
        let noun = if details.len() == 1 { "error" } else { "errors" };
        let listed = details
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Self {
            code: SchemaErrorCode::ValidationFailed,
            message: format!("{} validation {} for {}: {}", details.len(), noun, model, listed),
            model: Some(model),
            details,
        }
    }

    /// Create an immutable instance error
    pub fn instance_immutable(model: impl Into<String>, field: impl Into<String>) -> Self {
        let model = model.into();
        let field = field.into();
        Self {
            code: SchemaErrorCode::InstanceImmutable,
            message: format!(
                "\"{}\" is immutable and does not support assignment to '{}'",
                model, field
            ),
            model: Some(model),
            details: Vec::new(),
        }
    }

    /// Create an unhashable error naming the offending type
    pub fn unhashable(model: impl Into<String>, type_name: &str) -> Self {
        Self {
            code: SchemaErrorCode::Unhashable,
            message: format!("unhashable type: '{}'", type_name),
            model: Some(model.into()),
            details: Vec::new(),
        }
    }

    /// Create an unhashable error for a container value or field.
    ///
    /// Sequences are reported as `list` and mappings as `dict`.
    pub fn unhashable_container(model: impl Into<String>, type_name: &str) -> Self {
        let container = match type_name {
            "array" => "list",
            "object" => "dict",
            other => other,
        };
        Self::unhashable(model, container)
    }

    /// Create an error for a malformed schema file
    pub fn malformed_schema(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            code: SchemaErrorCode::SchemaMalformed,
            message: format!("Malformed schema '{}': {}", path.into(), reason.into()),
            model: None,
            details: Vec::new(),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> SchemaErrorCode {
        self.code
    }

    /// Returns the error class
    pub fn class(&self) -> ErrorClass {
        self.code.class()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the model name if applicable
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// Returns validation details (empty unless validation failed)
    pub fn details(&self) -> &[ValidationDetails] {
        &self.details
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for SchemaError {}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;
