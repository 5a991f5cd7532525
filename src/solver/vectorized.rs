//! Batched solver: whole transition rows per previous label.
//!
//! For every position the `(previous label x current label)` total-cost matrix
//! `broadcast(cost[:, p-1]) + pairwise + broadcast(unary[:, p])` is
//! materialized one previous-label row at a time and folded into running
//! `(min, argmin)` columns. The fold visits rows in ascending order, which is
//! the reduction order of the scalar loop.

use crate::solver::{SolverConfig, TrellisSolver};
use crate::table::{AccumulatedCosts, CostView, ParentTable};
use crate::util::math::improves;

#[cfg(feature = "simd")]
use crate::solver::simd::combine_row;

/// Row-batched solver; returns the same tables and path as the scalar one.
#[derive(Clone, Copy, Debug, Default)]
pub struct VectorizedTrellisSolver {
    config: SolverConfig,
}

impl VectorizedTrellisSolver {
    /// Creates a solver with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the solver configuration.
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }
}

/// Writes `out[l] = prev_cost + pairwise_row[l] + unary_col[l]`.
#[cfg(not(feature = "simd"))]
#[inline]
fn combine_row(prev_cost: f64, pairwise_row: &[f64], unary_col: &[f64], out: &mut [f64]) {
    for ((dst, &pw), &un) in out.iter_mut().zip(pairwise_row).zip(unary_col) {
        *dst = prev_cost + pw + un;
    }
}

/// Folds one materialized row into the running minimum columns.
#[inline]
fn fold_row(
    row: &[f64],
    prev_label: usize,
    best_col: &mut [f64],
    argmin_col: &mut [usize],
    config: SolverConfig,
) {
    for ((&total, best), arg) in row.iter().zip(best_col.iter_mut()).zip(argmin_col.iter_mut()) {
        if improves(total, *best, config.tie_break) {
            *best = total;
            *arg = prev_label;
        }
    }
}

impl TrellisSolver for VectorizedTrellisSolver {
    fn name(&self) -> &'static str {
        "vectorized"
    }

    fn config(&self) -> SolverConfig {
        self.config
    }

    fn forward(
        &self,
        unary: CostView<'_>,
        pairwise: CostView<'_>,
        costs: &mut AccumulatedCosts,
        parents: &mut ParentTable,
    ) {
        let labels = unary.rows();
        let mut unary_col = vec![0.0f64; labels];
        let mut total_row = vec![0.0f64; labels];

        for p in 1..unary.cols() {
            unary.gather_column(p, &mut unary_col);
            let (prev, cur) = costs.step_columns_mut(p);
            let parent_col = parents.column_mut(p);

            // Row 0 seeds the reduction.
            combine_row(prev[0], pairwise.row_at(0), &unary_col, cur);
            parent_col.fill(0);

            for (a, &prev_cost) in prev.iter().enumerate().skip(1) {
                combine_row(prev_cost, pairwise.row_at(a), &unary_col, &mut total_row);
                fold_row(&total_row, a, cur, parent_col, self.config);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::VectorizedTrellisSolver;
    use crate::solver::{ScalarTrellisSolver, TrellisSolver};
    use crate::table::CostTable;

    #[test]
    fn vectorized_matches_scalar_on_asymmetric_pairwise() {
        let unary = CostTable::from_fn(5, 9, |l, p| ((l * 7 + p * 3) % 11) as f64 * 0.5).unwrap();
        let pairwise = CostTable::from_fn(5, 5, |a, b| {
            if a == b {
                0.0
            } else {
                (a as f64 - 2.0 * b as f64).abs() * 0.75
            }
        })
        .unwrap();

        let scalar = ScalarTrellisSolver::new()
            .solve_full(unary.view(), pairwise.view())
            .unwrap();
        let vectorized = VectorizedTrellisSolver::new()
            .solve_full(unary.view(), pairwise.view())
            .unwrap();
        assert_eq!(scalar, vectorized);
    }

    #[test]
    fn single_label_path_is_constant() {
        let unary = CostTable::from_rows(&[[3.0, 1.0, 4.0, 1.0]]).unwrap();
        let pairwise = CostTable::from_rows(&[[2.0]]).unwrap();
        let solution = VectorizedTrellisSolver::new()
            .solve_full(unary.view(), pairwise.view())
            .unwrap();
        assert_eq!(solution.path, vec![0, 0, 0, 0]);
        assert_eq!(solution.total_cost, 15.0);
    }
}
