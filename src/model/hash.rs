//! Hash keys for frozen instances.
//!
//! A key is the model name plus every field value reduced to a scalar
//! atom. Containers have no atom, so any container value makes the whole
//! key underivable.

use serde_json::{Map, Number, Value};

use crate::schema::{json_type_name, SchemaError, SchemaResult};

/// A scalar value in a form that implements `Eq + Hash`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HashAtom {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    /// IEEE bits; `-0.0` is folded into `0.0`
    Float(u64),
    Str(String),
}

impl HashAtom {
    /// Reduces a value to an atom, or returns the unhashable type name.
    fn from_value(value: &Value) -> Result<Self, &'static str> {
        match value {
            Value::Null => Ok(HashAtom::Null),
            Value::Bool(b) => Ok(HashAtom::Bool(*b)),
            Value::Number(n) => Ok(Self::from_number(n)),
            Value::String(s) => Ok(HashAtom::Str(s.clone())),
            Value::Array(_) | Value::Object(_) => Err(json_type_name(value)),
        }
    }

    fn from_number(n: &Number) -> Self {
        if let Some(i) = n.as_i64() {
            HashAtom::Int(i)
        } else if let Some(u) = n.as_u64() {
            HashAtom::UInt(u)
        } else {
            let f = n.as_f64().unwrap_or_default();
            let f = if f == 0.0 { 0.0 } else { f };
            HashAtom::Float(f.to_bits())
        }
    }
}

/// Set-membership key of a frozen instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HashKey {
    model: String,
    values: Vec<(String, HashAtom)>,
}

impl HashKey {
    pub(crate) fn derive(model: &str, values: &Map<String, Value>) -> SchemaResult<Self> {
        let values = values
            .iter()
            .map(|(name, value)| {
                HashAtom::from_value(value)
                    .map(|atom| (name.clone(), atom))
                    .map_err(|type_name| SchemaError::unhashable_container(model, type_name))
            })
            .collect::<SchemaResult<Vec<_>>>()?;

        Ok(Self {
            model: model.to_string(),
            values,
        })
    }
}
