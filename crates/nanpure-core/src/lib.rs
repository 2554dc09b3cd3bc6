//! Core data model and propagation engine for number-place (Sudoku) puzzles.
//!
//! This crate provides the solving substrate shared by the search solver and
//! any presentation layer:
//!
//! - [`digit`]: type-safe digits 1-9, with defensive normalization of
//!   external values
//! - [`candidates`]: the per-cell candidate bitset
//! - [`position`]: cell positions and the compile-time interaction index
//! - [`group`]: rows, columns, and boxes as index lists, with the static
//!   cross-group escalation table
//! - [`grid`]: plain 9x9 digit tables, the external input/output surface
//! - [`cell`]: per-cell solving state and presentation snapshots
//! - [`board`]: the 81-cell arena and the fixpoint propagation engine
//!
//! The engine enforces two group deductions: fixing a digit held by a single
//! cell of a group, and box-line reductions (a digit confined to one
//! row/column within a box, or one box within a row/column, is eliminated
//! from the rest of the crossing group). Everything beyond that — guessing,
//! branching, budgets — lives in the solver crate.
//!
//! # Examples
//!
//! ```
//! use nanpure_core::{Board, Grid, Position};
//!
//! let grid: Grid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()?;
//!
//! let mut board = Board::from_grid(&grid);
//! board.update();
//! // This puzzle falls to propagation alone.
//! assert!(board.completed());
//! # Ok::<(), nanpure_core::ParseGridError>(())
//! ```

pub mod board;
pub mod candidates;
pub mod cell;
pub mod digit;
pub mod grid;
pub mod group;
pub mod position;

pub use self::{
    board::{Board, BoardSnapshot},
    candidates::Candidates,
    cell::{Cell, CellState},
    digit::Digit,
    grid::{Grid, ParseGridError},
    group::{Group, GroupKind},
    position::Position,
};
