//! Progress reporting hooks.

use nanpure_core::BoardSnapshot;

/// Receiver for intermediate board states during a solving run.
///
/// The solver takes a snapshot before each node it expands and hands it to
/// the sink. Snapshots are cheap but not free, so a sink that does not care
/// can opt out via [`wants_snapshots`](Self::wants_snapshots).
///
/// Any `FnMut(&BoardSnapshot)` closure is a sink:
///
/// ```
/// use nanpure_core::{Board, Grid};
/// use nanpure_solver::{SearchBudget, Solver};
///
/// let grid: Grid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// ".parse().unwrap();
/// let mut nodes = 0;
/// let mut solver = Solver::new(Board::from_grid(&grid));
/// let outcome = solver.solve_with(&mut SearchBudget::default(), &mut |_snapshot: &_| {
///     nodes += 1;
/// });
/// assert!(outcome.is_completed());
/// assert!(nodes > 0);
/// ```
pub trait ProgressSink {
    /// Returns whether snapshots should be produced at all.
    ///
    /// When this returns `false` the solver skips snapshot construction and
    /// never calls [`on_snapshot`](Self::on_snapshot).
    fn wants_snapshots(&self) -> bool {
        true
    }

    /// Called with the board state before each node expansion.
    fn on_snapshot(&mut self, snapshot: &BoardSnapshot);
}

impl<F> ProgressSink for F
where
    F: FnMut(&BoardSnapshot),
{
    fn on_snapshot(&mut self, snapshot: &BoardSnapshot) {
        self(snapshot);
    }
}

/// A sink that discards everything and suppresses snapshot construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn wants_snapshots(&self) -> bool {
        false
    }

    fn on_snapshot(&mut self, _snapshot: &BoardSnapshot) {}
}
