//! Trellis solvers for scanline label assignment.
//!
//! Every solver runs the same minimum-cost recurrence over a layered graph of
//! `(label, position)` nodes:
//!
//! ```text
//! cost[l][0] = unary[l][0]
//! cost[l][p] = min_a (cost[a][p-1] + pairwise[a][l]) + unary[l][p]
//! ```
//!
//! followed by a traceback from the cheapest terminal node. Variants differ
//! only in how the forward step is batched; candidates are always summed in
//! the order above and scanned in ascending previous-label order, so every
//! variant returns bit-identical tables and the same path.

use crate::table::{AccumulatedCosts, CostView, ParentTable};
use crate::trace::{trace_event, trace_span};
use crate::util::math::argmin_with;
use crate::util::{TrellisError, TrellisResult};

pub(crate) mod batch;
pub(crate) mod scalar;
pub(crate) mod vectorized;

#[cfg(feature = "simd")]
pub(crate) mod simd;

#[cfg(feature = "rayon")]
pub mod rayon;

pub use batch::solve_scanlines;
pub use scalar::ScalarTrellisSolver;
pub use vectorized::VectorizedTrellisSolver;

/// Rule for choosing among equal-cost minimizers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TieBreak {
    /// Lowest index wins.
    #[default]
    First,
    /// Highest index wins.
    Last,
}

/// Solver configuration shared by all variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolverConfig {
    /// Tie-break applied to parent selection and to the terminal label.
    pub tie_break: TieBreak,
}

/// Shape of a validated trellis problem.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrellisShape {
    /// Candidate labels per position.
    pub labels: usize,
    /// Number of positions along the scanline.
    pub positions: usize,
}

/// Full result of a solve, including the DP tables.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// Optimal label per position.
    pub path: Vec<usize>,
    /// Total cost of `path` (the terminal accumulated cost).
    pub total_cost: f64,
    /// Accumulated-cost table.
    pub costs: AccumulatedCosts,
    /// Back-pointer table.
    pub parents: ParentTable,
}

/// A strategy for the forward pass of the trellis DP.
///
/// Implementors only provide [`TrellisSolver::forward`]; validation, table
/// allocation and traceback are shared.
pub trait TrellisSolver {
    /// Short identifier used in traces and by the CLI.
    fn name(&self) -> &'static str;

    /// Returns the solver configuration.
    fn config(&self) -> SolverConfig;

    /// Fills columns `1..positions` of `costs` and `parents`.
    ///
    /// Inputs are validated and column 0 of `costs` already holds
    /// `unary[:, 0]`.
    fn forward(
        &self,
        unary: CostView<'_>,
        pairwise: CostView<'_>,
        costs: &mut AccumulatedCosts,
        parents: &mut ParentTable,
    );

    /// Solves the problem and returns the path together with the DP tables.
    fn solve_full(&self, unary: CostView<'_>, pairwise: CostView<'_>) -> TrellisResult<Solution> {
        let shape = validate(unary, pairwise)?;
        let _span = trace_span!(
            "trellis_solve",
            solver = self.name(),
            labels = shape.labels,
            positions = shape.positions
        )
        .entered();

        let mut costs = AccumulatedCosts::with_shape(shape.labels, shape.positions);
        let mut parents = ParentTable::with_shape(shape.labels, shape.positions);
        unary.gather_column(0, costs.column_mut(0));
        self.forward(unary, pairwise, &mut costs, &mut parents);

        let (path, total_cost) = traceback(&costs, &parents, self.config().tie_break)?;
        trace_event!("trellis_solved", total_cost = total_cost);
        Ok(Solution {
            path,
            total_cost,
            costs,
            parents,
        })
    }

    /// Solves the problem and returns only the optimal path.
    fn solve(&self, unary: CostView<'_>, pairwise: CostView<'_>) -> TrellisResult<Vec<usize>> {
        self.solve_full(unary, pairwise).map(|solution| solution.path)
    }
}

/// Checks shapes and values of a problem before any table is allocated.
///
/// Errors are reported in order: empty tables, pairwise shape, then the first
/// non-finite entry (unary before pairwise, row-major).
pub fn validate(unary: CostView<'_>, pairwise: CostView<'_>) -> TrellisResult<TrellisShape> {
    let labels = unary.rows();
    let positions = unary.cols();
    if labels == 0 || positions == 0 {
        return Err(TrellisError::EmptyInput { labels, positions });
    }
    if pairwise.rows() != labels || pairwise.cols() != labels {
        return Err(TrellisError::DimensionMismatch {
            expected_rows: labels,
            expected_cols: labels,
            rows: pairwise.rows(),
            cols: pairwise.cols(),
            context: "pairwise",
        });
    }
    for (table, view) in [("unary", unary), ("pairwise", pairwise)] {
        if let Some((row, col, value)) = view.find_non_finite() {
            return Err(TrellisError::InvalidCostValue {
                table,
                row,
                col,
                value,
            });
        }
    }
    Ok(TrellisShape { labels, positions })
}

/// Reconstructs the optimal path from filled DP tables.
///
/// Returns the path and its total cost.
pub fn traceback(
    costs: &AccumulatedCosts,
    parents: &ParentTable,
    tie_break: TieBreak,
) -> TrellisResult<(Vec<usize>, f64)> {
    let labels = costs.labels();
    let positions = costs.positions();
    if parents.labels() != labels || parents.positions() != positions {
        return Err(TrellisError::DimensionMismatch {
            expected_rows: labels,
            expected_cols: positions,
            rows: parents.labels(),
            cols: parents.positions(),
            context: "parent table",
        });
    }

    let (terminal, total_cost) = positions
        .checked_sub(1)
        .and_then(|last| costs.column(last))
        .and_then(|column| argmin_with(column, tie_break))
        .ok_or(TrellisError::EmptyInput { labels, positions })?;

    let mut path = vec![0usize; positions];
    path[positions - 1] = terminal;
    for p in (1..positions).rev() {
        let label = path[p];
        path[p - 1] = parents
            .get(label, p)
            .ok_or(TrellisError::LabelOutOfRange {
                position: p,
                label,
                labels,
            })?;
    }
    Ok((path, total_cost))
}

/// Returns the total cost of an arbitrary labelling.
///
/// Terms are accumulated in the same order as the forward pass, so the cost
/// of an optimal path equals the solver's `total_cost` exactly.
pub fn path_cost(
    unary: CostView<'_>,
    pairwise: CostView<'_>,
    path: &[usize],
) -> TrellisResult<f64> {
    let shape = validate(unary, pairwise)?;
    if path.len() != shape.positions {
        return Err(TrellisError::DimensionMismatch {
            expected_rows: 1,
            expected_cols: shape.positions,
            rows: 1,
            cols: path.len(),
            context: "path",
        });
    }
    if let Some((position, &label)) = path
        .iter()
        .enumerate()
        .find(|&(_, &label)| label >= shape.labels)
    {
        return Err(TrellisError::LabelOutOfRange {
            position,
            label,
            labels: shape.labels,
        });
    }

    let mut total = unary.at(path[0], 0);
    for (p, pair) in path.windows(2).enumerate() {
        total = total + pairwise.at(pair[0], pair[1]) + unary.at(pair[1], p + 1);
    }
    Ok(total)
}
