//! Threshold scoring of a single row

use crate::rows::Row;

/// Dot product of `weights` with the bits of `row`
///
/// Accumulates in `i128` so no combination of `i64` weights up to 63 inputs can
/// overflow, keeping the sign exact at zero.
///
/// # Panics
///
/// Panics if `weights.len()` differs from the row width.
pub fn score(weights: &[i64], row: &Row) -> i128 {
    assert_eq!(
        weights.len(),
        row.width(),
        "weight vector length must equal row width"
    );
    weights
        .iter()
        .zip(row.bits())
        .filter(|(_, bit)| *bit)
        .map(|(&w, _)| i128::from(w))
        .sum()
}

/// Threshold output for a score: `true` only for strictly positive scores
#[inline]
pub fn output_bit(score: i128) -> bool {
    score > 0
}
