//! Batches of independent scanlines sharing one pairwise table.

use crate::solver::TrellisSolver;
use crate::table::CostView;
use crate::trace::{trace_event, trace_span};
use crate::util::TrellisResult;

/// Solves each scanline in order and returns one path per scanline.
///
/// The first failing scanline aborts the batch; no partial results are
/// returned.
pub fn solve_scanlines<S: TrellisSolver + ?Sized>(
    solver: &S,
    scanlines: &[CostView<'_>],
    pairwise: CostView<'_>,
) -> TrellisResult<Vec<Vec<usize>>> {
    let _span = trace_span!("scanline_batch", scanlines = scanlines.len()).entered();

    let paths = scanlines
        .iter()
        .map(|&unary| solver.solve(unary, pairwise))
        .collect::<TrellisResult<Vec<_>>>()?;

    trace_event!("scanline_batch_solved", count = paths.len());
    Ok(paths)
}
