//! Rayon-parallel solvers and batch helpers (feature-gated).
//!
//! Positions depend on each other and are always swept left to right. Within
//! a position every label reads only the finalized previous column, so the
//! label axis is split across the pool. Independent scanlines are solved as
//! separate tasks.

use crate::solver::scalar::best_predecessor;
use crate::solver::{SolverConfig, TrellisSolver};
use crate::table::{AccumulatedCosts, CostView, ParentTable};
use crate::trace::{trace_event, trace_span};
use crate::util::TrellisResult;
use rayon::prelude::*;

/// Solver that evaluates the labels of each position in parallel.
#[derive(Clone, Copy, Debug, Default)]
pub struct LabelParallelTrellisSolver {
    config: SolverConfig,
}

impl LabelParallelTrellisSolver {
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

impl TrellisSolver for LabelParallelTrellisSolver {
    fn name(&self) -> &'static str {
        "label_parallel"
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
        let config = self.config;
        for p in 1..unary.cols() {
            let (prev, cur) = costs.step_columns_mut(p);
            let parent_col = parents.column_mut(p);
            cur.par_iter_mut()
                .zip(parent_col.par_iter_mut())
                .enumerate()
                .for_each(|(label, (cost, parent))| {
                    let (best, best_prev) =
                        best_predecessor(prev, pairwise, label, unary.at(label, p), config);
                    *cost = best;
                    *parent = best_prev;
                });
        }
    }
}

/// Solves independent scanlines in parallel, one rayon task per scanline.
///
/// Output order matches `scanlines`. When several scanlines fail, the error
/// of the lowest-indexed one is returned, as in the sequential batch.
pub fn solve_scanlines_par<S: TrellisSolver + Sync + ?Sized>(
    solver: &S,
    scanlines: &[CostView<'_>],
    pairwise: CostView<'_>,
) -> TrellisResult<Vec<Vec<usize>>> {
    let _span = trace_span!("scanline_batch", scanlines = scanlines.len(), parallel = true).entered();

    let results: Vec<_> = scanlines
        .par_iter()
        .map(|&unary| solver.solve(unary, pairwise))
        .collect();

    let mut paths = Vec::with_capacity(results.len());
    for result in results {
        paths.push(result?);
    }

    trace_event!("scanline_batch_solved", count = paths.len());
    Ok(paths)
}
