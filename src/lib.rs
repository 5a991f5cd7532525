//! scanline-dp finds minimum-cost label sequences along 1-D scanlines.
//!
//! Each position of a scanline carries a set of candidate labels (for stereo
//! matching: disparities). A unary table prices every `(label, position)`
//! pair and a stationary pairwise table prices every label transition between
//! neighbouring positions. The solvers run the Viterbi / trellis shortest-path
//! recurrence forward and trace the optimal labelling back.
//!
//! Two interchangeable strategies are provided: a scalar reference solver and
//! a row-batched vectorized solver, with optional SIMD row materialization via
//! the `simd` feature and label- or scanline-level parallelism via `rayon`.
//!
//! ```
//! use scanline_dp::{CostTable, ScalarTrellisSolver, TrellisSolver};
//!
//! let unary = CostTable::from_rows(&[[0.0, 5.0, 0.0], [5.0, 0.0, 5.0]]).unwrap();
//! let pairwise = CostTable::from_rows(&[[0.0, 10.0], [10.0, 0.0]]).unwrap();
//! let path = ScalarTrellisSolver::new()
//!     .solve(unary.view(), pairwise.view())
//!     .unwrap();
//! assert_eq!(path, vec![0, 0, 0]);
//! ```

pub mod lowlevel;
pub mod penalty;
pub mod solver;
pub mod table;
mod trace;
pub mod util;

pub use solver::{
    solve_scanlines, ScalarTrellisSolver, Solution, SolverConfig, TieBreak, TrellisSolver,
    VectorizedTrellisSolver,
};
pub use table::{AccumulatedCosts, CostTable, CostView, ParentTable};
pub use util::{TrellisError, TrellisResult};

#[cfg(feature = "rayon")]
pub use solver::rayon::{solve_scanlines_par, LabelParallelTrellisSolver};
