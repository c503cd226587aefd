//! Schema loading from JSON files
//!
//! A schema file holds `name`, optional `description`, `fields`, and an
//! optional `config` block. Hash capability is re-derived on load.

use std::fs;
use std::path::Path;

use super::errors::{SchemaError, SchemaResult};
use super::types::Schema;

/// Loads and structurally validates a single schema file.
pub fn load_schema_file(path: &Path) -> SchemaResult<Schema> {
    let content = fs::read_to_string(path).map_err(|e| {
        SchemaError::malformed_schema(
            path.display().to_string(),
            format!("Failed to read file: {}", e),
        )
    })?;

    parse_schema(&content, &path.display().to_string())
}

/// Parses a schema from JSON text. `origin` names the source in errors.
pub fn parse_schema(content: &str, origin: &str) -> SchemaResult<Schema> {
    let schema: Schema = serde_json::from_str(content)
        .map_err(|e| SchemaError::malformed_schema(origin, format!("Invalid JSON: {}", e)))?;

    schema
        .validate_structure()
        .map_err(|e| SchemaError::malformed_schema(origin, e))?;

    Ok(schema)
}
