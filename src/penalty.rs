//! Builders for common pairwise smoothness tables.
//!
//! Each builder returns a square `CostTable` of side `labels` where entry
//! `[a][b]` is the cost of moving from label `a` to label `b` between adjacent
//! positions. Parameters must be finite and non-negative.

use crate::table::CostTable;
use crate::util::{TrellisError, TrellisResult};

fn check_param(name: &'static str, value: f64) -> TrellisResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(TrellisError::InvalidParameter { name, value });
    }
    Ok(value)
}

#[inline]
fn label_distance(a: usize, b: usize) -> f64 {
    a.abs_diff(b) as f64
}

/// Zero on the diagonal, `penalty` for any label change.
pub fn potts(labels: usize, penalty: f64) -> TrellisResult<CostTable> {
    let penalty = check_param("penalty", penalty)?;
    CostTable::from_fn(labels, labels, |a, b| if a == b { 0.0 } else { penalty })
}

/// `slope * |a - b|`.
pub fn linear(labels: usize, slope: f64) -> TrellisResult<CostTable> {
    let slope = check_param("slope", slope)?;
    CostTable::from_fn(labels, labels, |a, b| slope * label_distance(a, b))
}

/// `min(slope * |a - b|, cap)`.
pub fn truncated_linear(labels: usize, slope: f64, cap: f64) -> TrellisResult<CostTable> {
    let slope = check_param("slope", slope)?;
    let cap = check_param("cap", cap)?;
    CostTable::from_fn(labels, labels, |a, b| (slope * label_distance(a, b)).min(cap))
}

/// Zero for equal labels, `small` for neighbours, `large` for larger jumps.
///
/// This is the P1/P2 scheme of semi-global matching.
pub fn two_level(labels: usize, small: f64, large: f64) -> TrellisResult<CostTable> {
    let small = check_param("small", small)?;
    let large = check_param("large", large)?;
    CostTable::from_fn(labels, labels, |a, b| match a.abs_diff(b) {
        0 => 0.0,
        1 => small,
        _ => large,
    })
}
