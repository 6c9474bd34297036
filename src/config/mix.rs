//! Mixture config: dataset names and their relative sampling weights.

use crate::config::document::json_type_name;
use crate::error::MixtureError;

use serde_json::{Map, Value};

/// One dataset row of the mixture, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct MixEntry {
    pub dataset: String,
    pub weight: f64,
}

/// Validated mixture config. Entry order follows the source document,
/// and that order carries through to the resolved output.
#[derive(Debug, Clone, PartialEq)]
pub struct MixSpec {
    pub entries: Vec<MixEntry>,
}

impl MixSpec {
    /// Type-check the payload. Weight signs are a resolution-time concern;
    /// here only the shape (dataset -> number) is enforced.
    pub fn from_entries(entries: Map<String, Value>) -> Result<Self, MixtureError> {
        if entries.is_empty() {
            return Err(MixtureError::Schema(
                "mixture config contained no datasets".to_string(),
            ));
        }

        let mut out = Vec::with_capacity(entries.len());
        for (dataset, value) in entries {
            let weight = value.as_f64().ok_or_else(|| {
                MixtureError::Schema(format!(
                    "expected numeric weight for \"{}\", got {}",
                    dataset,
                    json_type_name(&value)
                ))
            })?;
            out.push(MixEntry { dataset, weight });
        }
        Ok(MixSpec { entries: out })
    }

    /// True if the mixture samples from `dataset`.
    pub fn contains(&self, dataset: &str) -> bool {
        self.entries.iter().any(|entry| entry.dataset == dataset)
    }
}
