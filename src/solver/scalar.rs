//! Scalar reference solver.

use crate::solver::{SolverConfig, TrellisSolver};
use crate::table::{AccumulatedCosts, CostView, ParentTable};
use crate::util::math::improves;

/// Reference solver: position x current label x previous label loops.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalarTrellisSolver {
    config: SolverConfig,
}

impl ScalarTrellisSolver {
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

/// Scans every previous label for the cheapest way into `label`.
///
/// Returns the minimum candidate cost and the previous label attaining it.
#[inline]
pub(crate) fn best_predecessor(
    prev: &[f64],
    pairwise: CostView<'_>,
    label: usize,
    unary_cost: f64,
    config: SolverConfig,
) -> (f64, usize) {
    let mut best = f64::INFINITY;
    let mut best_prev = 0usize;
    for (a, &prev_cost) in prev.iter().enumerate() {
        let candidate = prev_cost + pairwise.at(a, label) + unary_cost;
        if a == 0 || improves(candidate, best, config.tie_break) {
            best = candidate;
            best_prev = a;
        }
    }
    (best, best_prev)
}

impl TrellisSolver for ScalarTrellisSolver {
    fn name(&self) -> &'static str {
        "scalar"
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
        for p in 1..unary.cols() {
            let (prev, cur) = costs.step_columns_mut(p);
            let parent_col = parents.column_mut(p);
            for (label, (cost, parent)) in cur.iter_mut().zip(parent_col.iter_mut()).enumerate() {
                let (best, best_prev) =
                    best_predecessor(prev, pairwise, label, unary.at(label, p), self.config);
                *cost = best;
                *parent = best_prev;
            }
        }
    }
}
