//! Sudoku solving for the nanpure project.
//!
//! This crate drives [`nanpure_core`]'s propagation engine with a bounded
//! recursive search. Propagation handles everything deducible from singles
//! and box-line interactions; the [`Solver`] adds guessing on top, capped by
//! a recursion depth and a global [`SearchBudget`] of search nodes so a run
//! always terminates.
//!
//! Every attempt ends in a [`SearchOutcome`] rather than an error, and the
//! distinct completed grids found along the way accumulate in
//! [`Solver::solutions`].
//!
//! # Examples
//!
//! ```
//! use nanpure_core::{Board, Grid};
//! use nanpure_solver::Solver;
//!
//! let grid: Grid = "
//!     __4 7__ __3
//!     _3_ _6_ _9_
//!     9__ __1 8__
//!     8__ __2 5__
//!     _2_ _7_ _8_
//!     __1 4__ __7
//!     __9 5__ __1
//!     _5_ _1_ _3_
//!     2__ __6 7__
//! ".parse().unwrap();
//! let mut solver = Solver::new(Board::from_grid(&grid));
//! assert!(solver.solve().is_completed());
//! assert_eq!(solver.solutions().len(), 1);
//! ```

mod budget;
mod outcome;
mod progress;
mod solver;

pub use self::{
    budget::SearchBudget,
    outcome::SearchOutcome,
    progress::{NoProgress, ProgressSink},
    solver::Solver,
};
