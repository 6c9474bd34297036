//! Error taxonomy for config loading and mixture resolution.
//!
//! Every variant is fatal: the tool is a one-shot computation and never
//! retries or writes partial output. The binary wraps these in anyhow
//! context to attach the offending file path.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MixtureError {
    /// A config document was not valid JSON.
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A config document parsed but does not match the expected shape.
    #[error("config parse error: {0}")]
    Schema(String),

    /// A string value referenced a variable missing from the table.
    #[error("undefined variable \"{0}\"")]
    UndefinedVariable(String),

    /// Datasets named in the mixture with no entry in the path mapping.
    #[error("no path mapping for dataset(s): {}", .0.join(", "))]
    MissingPath(Vec<String>),

    /// A weight was negative or not a finite number.
    #[error("invalid weight {weight} for dataset \"{dataset}\"")]
    InvalidWeight { dataset: String, weight: f64 },

    /// Every weight in the mixture is zero, so there is nothing to sample.
    #[error("mixture weights sum to zero")]
    DegenerateMixture,

    /// Two datasets in the path mapping point at the same location.
    #[error("duplicate path \"{path}\" shared by \"{first}\" and \"{second}\"")]
    DuplicatePath {
        path: String,
        first: String,
        second: String,
    },
}
