//! Shared envelope for the two config documents.
//!
//! JSON shape (same for the mixture config and the path mapping):
//! {
//!   "variables": { "root": "/data" },   // optional substitution table
//!   "comment": "free-form text",         // stripped, any nesting level
//!   "wiki": 1.0,                          // payload entries, order kept
//!   "books": 3.0
//! }
//!
//! Loading pops `variables`, strips `comment` keys from the payload, then
//! substitutes `$name` / `${name}` placeholders in every string value.
//! Schema checks on the payload happen later, per document kind.

use crate::config::preprocess::{interpolate, strip_comments, variable_table};
use crate::error::MixtureError;

use serde::Deserialize;
use serde_json::{Map, Value};

/// Raw document as it appears on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDocument {
    /// Substitution table applied to string values in the payload.
    #[serde(default)]
    pub variables: Map<String, Value>,

    /// Payload entries in file order.
    #[serde(flatten)]
    pub entries: Map<String, Value>,
}

/// Parse one config document into its comment-free, interpolated payload.
pub fn parse_document(text: &str) -> Result<Map<String, Value>, MixtureError> {
    let raw: RawDocument = serde_json::from_str(text)?;
    let vars = variable_table(&raw.variables)?;

    let mut entries = raw.entries;
    strip_comments(&mut entries);
    interpolate(&mut entries, &vars)?;
    Ok(entries)
}

/// JSON type name for schema error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
