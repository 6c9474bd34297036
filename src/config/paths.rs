//! Path mapping: dataset names to physical storage locations.

use crate::config::document::json_type_name;
use crate::error::MixtureError;

use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Validated path mapping.
///
/// Lookup order does not matter here; the resolved output is ordered by the
/// mixture config. Duplicate locations are rejected because two datasets
/// sharing a path means the launch argument would sample it twice.
#[derive(Debug, Clone, PartialEq)]
pub struct PathMap {
    paths: BTreeMap<String, String>,
}

impl PathMap {
    pub fn from_entries(entries: Map<String, Value>) -> Result<Self, MixtureError> {
        let mut paths = BTreeMap::new();
        // location -> first dataset that claimed it, in document order
        let mut owner: BTreeMap<String, String> = BTreeMap::new();
        for (dataset, value) in entries {
            let path = match value {
                Value::String(s) => s,
                other => {
                    return Err(MixtureError::Schema(format!(
                        "expected string path for \"{}\", got {}",
                        dataset,
                        json_type_name(&other)
                    )));
                }
            };
            if let Some(first) = owner.get(&path) {
                return Err(MixtureError::DuplicatePath {
                    path,
                    first: first.clone(),
                    second: dataset,
                });
            }
            owner.insert(path.clone(), dataset.clone());
            paths.insert(dataset, path);
        }
        Ok(PathMap { paths })
    }

    pub fn get(&self, dataset: &str) -> Option<&str> {
        self.paths.get(dataset).map(String::as_str)
    }

    /// Dataset names known to the mapping, sorted.
    pub fn datasets(&self) -> impl Iterator<Item = &str> {
        self.paths.keys().map(String::as_str)
    }
}
