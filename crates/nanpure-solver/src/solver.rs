//! Bounded recursive search on top of candidate propagation.

use log::{debug, trace};
use nanpure_core::{Board, Grid};

use crate::{NoProgress, ProgressSink, SearchBudget, SearchOutcome};

/// A solving run over one [`Board`].
///
/// Propagation alone settles easy puzzles. When it stalls, the solver picks
/// the cell with the fewest remaining candidates, tries each candidate on a
/// forked board, and recurses with one less level of depth. A branch that
/// comes back [`Broken`](SearchOutcome::Broken) proves its guess wrong, so
/// the guess is eliminated on the parent board and the node is retried with
/// the strengthened state.
///
/// Recursion depth and total node count are both bounded, so a run always
/// terminates even on an empty board.
///
/// # Examples
///
/// ```
/// use nanpure_core::{Board, Grid};
/// use nanpure_solver::Solver;
///
/// let grid: Grid = "
///     __4 7__ __3
///     _3_ _6_ _9_
///     9__ __1 8__
///     8__ __2 5__
///     _2_ _7_ _8_
///     __1 4__ __7
///     __9 5__ __1
///     _5_ _1_ _3_
///     2__ __6 7__
/// ".parse().unwrap();
/// let mut solver = Solver::new(Board::from_grid(&grid));
/// assert!(solver.solve().is_completed());
/// assert_eq!(solver.solutions().len(), 1);
/// ```
#[derive(Debug)]
pub struct Solver {
    board: Board,
    brute_force: bool,
    allowed_depth: u32,
    solutions: Vec<Grid>,
}

impl Solver {
    /// Default recursion depth limit.
    pub const DEFAULT_DEPTH: u32 = 5;

    /// Creates a solver for `board` with brute force enabled and the
    /// default depth limit.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            brute_force: true,
            allowed_depth: Self::DEFAULT_DEPTH,
            solutions: Vec::new(),
        }
    }

    /// Sets the recursion depth limit.
    ///
    /// Depth `0` refuses to expand any node at all, so
    /// [`solve`](Self::solve) returns
    /// [`Incompleted`](SearchOutcome::Incompleted) immediately.
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.allowed_depth = depth;
        self
    }

    /// Enables or disables guessing.
    ///
    /// With brute force off, [`solve`](Self::solve) runs propagation once
    /// and stops, leaving whatever it deduced on the board.
    #[must_use]
    pub fn with_brute_force(mut self, brute_force: bool) -> Self {
        self.brute_force = brute_force;
        self
    }

    /// Returns the board in its current state.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Consumes the solver and returns the board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Returns the distinct solutions found so far.
    #[must_use]
    pub fn solutions(&self) -> &[Grid] {
        &self.solutions
    }

    /// Consumes the solver and returns the distinct solutions found.
    #[must_use]
    pub fn into_solutions(self) -> Vec<Grid> {
        self.solutions
    }

    /// Runs the search with a default node budget and no progress
    /// reporting.
    pub fn solve(&mut self) -> SearchOutcome {
        self.solve_with(&mut SearchBudget::default(), &mut NoProgress)
    }

    /// Runs the search against an explicit node budget, reporting each
    /// expanded node to `progress`.
    ///
    /// The budget is shared across the whole recursion tree, so it caps the
    /// run globally. A caller can reuse one budget across several boards to
    /// bound a batch.
    pub fn solve_with(
        &mut self,
        budget: &mut SearchBudget,
        progress: &mut dyn ProgressSink,
    ) -> SearchOutcome {
        if self.allowed_depth == 0 {
            return SearchOutcome::Incompleted;
        }
        if !self.brute_force {
            self.board.update();
            return SearchOutcome::Incompleted;
        }
        loop {
            if budget.is_exhausted() {
                return SearchOutcome::Incompleted;
            }
            if progress.wants_snapshots() {
                progress.on_snapshot(&self.board.snapshot());
            }
            match self.step(budget, progress) {
                // a contradicted guess was eliminated; rerun on the
                // strengthened board
                SearchOutcome::Incompleted => {}
                outcome => return outcome,
            }
        }
    }

    fn step(&mut self, budget: &mut SearchBudget, progress: &mut dyn ProgressSink) -> SearchOutcome {
        if !budget.consume() {
            return SearchOutcome::Incompleted;
        }
        self.board.update();
        if self.board.completed() {
            self.record_solution(self.board.to_grid());
            return SearchOutcome::Completed;
        }
        if !self.board.valid() {
            return SearchOutcome::Broken;
        }
        let Some(position) = self.board.most_constrained() else {
            return SearchOutcome::Stuck;
        };
        let candidates = self.board.cell(position).candidates();
        let mut dead_end = true;
        for digit in candidates {
            trace!(
                "guess {digit} at {position} (depth left {})",
                self.allowed_depth - 1
            );
            let mut branch = self.board.fork();
            branch.fix(position, digit);
            let mut child = Self {
                board: branch,
                brute_force: true,
                allowed_depth: self.allowed_depth - 1,
                solutions: Vec::new(),
            };
            match child.solve_with(budget, progress) {
                SearchOutcome::Broken => {
                    debug!("guess {digit} at {position} is contradictory, eliminating");
                    self.board.eliminate(position, digit);
                    return SearchOutcome::Incompleted;
                }
                SearchOutcome::Completed => {
                    for solution in child.solutions {
                        self.record_solution(solution);
                    }
                    dead_end = false;
                }
                SearchOutcome::Incompleted | SearchOutcome::Stuck => dead_end = false,
            }
        }
        if dead_end {
            SearchOutcome::Broken
        } else {
            SearchOutcome::Completed
        }
    }

    fn record_solution(&mut self, solution: Grid) {
        if !self.solutions.contains(&solution) {
            self.solutions.push(solution);
        }
    }
}

impl From<Board> for Solver {
    fn from(board: Board) -> Self {
        Self::new(board)
    }
}

impl From<Grid> for Solver {
    fn from(grid: Grid) -> Self {
        Self::new(Board::from_grid(&grid))
    }
}
