//! Argmin helpers shared by every solver variant.

use crate::solver::TieBreak;

/// Returns true when `candidate` replaces the running minimum `best`.
///
/// Candidates are visited in ascending index order, so a strict comparison
/// keeps the first minimizer and a non-strict one keeps the last.
#[inline]
pub(crate) fn improves(candidate: f64, best: f64, tie_break: TieBreak) -> bool {
    match tie_break {
        TieBreak::First => candidate < best,
        TieBreak::Last => candidate <= best,
    }
}

/// Returns the index and value of the minimum of `values` under `tie_break`.
///
/// Returns `None` for an empty slice.
pub fn argmin_with(values: &[f64], tie_break: TieBreak) -> Option<(usize, f64)> {
    let (&first, rest) = values.split_first()?;
    let mut best_idx = 0usize;
    let mut best = first;
    for (offset, &value) in rest.iter().enumerate() {
        if improves(value, best, tie_break) {
            best = value;
            best_idx = offset + 1;
        }
    }
    Some((best_idx, best))
}

/// Returns the lowest index holding the minimum of `values`.
pub fn argmin_first(values: &[f64]) -> Option<usize> {
    argmin_with(values, TieBreak::First).map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::{argmin_first, argmin_with, improves};
    use crate::solver::TieBreak;

    #[test]
    fn argmin_first_prefers_lowest_index() {
        assert_eq!(argmin_first(&[3.0, 1.0, 1.0, 2.0]), Some(1));
        assert_eq!(argmin_first(&[0.5]), Some(0));
        assert_eq!(argmin_first(&[]), None);
    }

    #[test]
    fn argmin_last_prefers_highest_index() {
        let values = [1.0, 4.0, 1.0, 1.0, 9.0];
        assert_eq!(argmin_with(&values, TieBreak::Last), Some((3, 1.0)));
        assert_eq!(argmin_with(&values, TieBreak::First), Some((0, 1.0)));
    }

    #[test]
    fn improves_handles_negative_costs() {
        assert!(improves(-2.0, -1.0, TieBreak::First));
        assert!(!improves(-1.0, -1.0, TieBreak::First));
        assert!(improves(-1.0, -1.0, TieBreak::Last));
    }
}
