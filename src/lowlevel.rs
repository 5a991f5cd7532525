//! Building blocks for custom solvers and diagnostics.
//!
//! Most users only need a [`TrellisSolver`](crate::TrellisSolver); these items
//! expose validation, traceback and argmin rules so that alternative forward
//! passes can reuse the shared pieces.

pub use crate::solver::{path_cost, traceback, validate, TrellisShape};
pub use crate::table::{AccumulatedCosts, ParentTable};
pub use crate::util::math::{argmin_first, argmin_with};
