//! Schema subsystem
//!
//! Schemas are explicit values: a named field set plus a [`ModelConfig`]
//! choosing the extra-field policy and immutability.
//!
//! # Design Principles
//!
//! - No nulls and no coercion (int is accepted where float is declared)
//! - Every violation reported at once; nothing built on failure
//! - Hash capability derived when the schema is constructed
//! - Deterministic validation and error ordering

mod errors;
mod loader;
mod types;
mod validator;

pub use errors::{ErrorClass, SchemaError, SchemaErrorCode, SchemaResult, ValidationDetails};
pub use loader::{load_schema_file, parse_schema};
pub use types::{ExtraPolicy, FieldDef, FieldType, HashCapability, ModelConfig, Schema};
pub use validator::SchemaValidator;

pub(crate) use validator::json_type_name;
