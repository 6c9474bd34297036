//! Mixture resolution: merge the two configs into normalized (weight, path)
//! pairs, ready for rendering.

use crate::config::{MixSpec, PathMap};
use crate::error::MixtureError;

/// One output row: normalized weight plus storage location.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEntry {
    pub weight: f64,
    pub path: String,
}

/// Normalized mixture, ordered like the mixture config.
pub type ResolvedMixture = Vec<ResolvedEntry>;

/// Resolve a mixture against the path mapping.
///
/// Validation phases:
/// 1) every dataset must have a mapped path (all absentees reported at once)
/// 2) weights must be finite and non-negative
/// 3) the weight total must be positive
///
/// Weights are divided by their total, so the output sums to 1.0 and the
/// input weights do not have to. Pure function; no side effects.
pub fn resolve(mix: &MixSpec, paths: &PathMap) -> Result<ResolvedMixture, MixtureError> {
    // 1) Locate every dataset, collecting all misses before failing.
    let mut located: Vec<&str> = Vec::with_capacity(mix.entries.len());
    let mut missing: Vec<String> = Vec::new();
    for entry in &mix.entries {
        match paths.get(&entry.dataset) {
            Some(path) => located.push(path),
            None => missing.push(entry.dataset.clone()),
        }
    }
    if !missing.is_empty() {
        return Err(MixtureError::MissingPath(missing));
    }

    // 2) Weight sanity.
    for entry in &mix.entries {
        if !entry.weight.is_finite() || entry.weight < 0.0 {
            return Err(MixtureError::InvalidWeight {
                dataset: entry.dataset.clone(),
                weight: entry.weight,
            });
        }
    }

    // 3) The total must be positive for normalization to be well-defined.
    let total: f64 = mix.entries.iter().map(|entry| entry.weight).sum();
    if total <= 0.0 {
        return Err(MixtureError::DegenerateMixture);
    }

    // 4) Emit in mixture order.
    Ok(mix
        .entries
        .iter()
        .zip(located)
        .map(|(entry, path)| ResolvedEntry {
            weight: entry.weight / total,
            path: path.to_string(),
        })
        .collect())
}
