//! Single-line rendering of the resolved mixture: the launch argument
//! string handed to the training framework.

use crate::resolve::ResolvedMixture;

/// Decimal places used for every weight token.
pub const WEIGHT_PRECISION: usize = 6;

/// Integer units per 1.0 at [`WEIGHT_PRECISION`] decimals.
const UNIT_SCALE: u64 = 1_000_000;

/// Render `<w1> <path1> <w2> <path2> ...`, space-separated, each weight
/// with exactly [`WEIGHT_PRECISION`] decimals.
///
/// Largest remainder method: weights are floored to 1e-6 units, and the
/// units lost to flooring go back one each to the entries with the largest
/// fractional remainders (lower index wins ties). The printed weights
/// therefore sum to exactly 1.000000 instead of drifting a unit short.
/// Entry order is never changed by the correction.
pub fn format_data_path(resolved: &ResolvedMixture) -> String {
    let mut units: Vec<u64> = Vec::with_capacity(resolved.len());
    let mut remainders: Vec<f64> = Vec::with_capacity(resolved.len());
    for entry in resolved {
        let exact = entry.weight * UNIT_SCALE as f64;
        let floored = exact.floor();
        units.push(floored as u64);
        remainders.push(exact - floored);
    }

    let assigned: u64 = units.iter().sum();
    let shortfall = UNIT_SCALE.saturating_sub(assigned);

    let mut by_remainder: Vec<usize> = (0..units.len()).collect();
    by_remainder.sort_by(|&a, &b| {
        remainders[b]
            .partial_cmp(&remainders[a])
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.cmp(&b))
    });
    for &idx in by_remainder.iter().take(shortfall as usize) {
        units[idx] += 1;
    }

    let parts: Vec<String> = resolved
        .iter()
        .zip(&units)
        .map(|(entry, &unit)| {
            format!(
                "{:.*} {}",
                WEIGHT_PRECISION,
                unit as f64 / UNIT_SCALE as f64,
                entry.path
            )
        })
        .collect();
    parts.join(" ")
}
