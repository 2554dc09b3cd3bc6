//! Search outcomes.

/// The result of a solving attempt.
///
/// The core never raises errors: every abnormal condition is one of these
/// outcomes, so callers can tell "proven impossible" apart from "gave up".
///
/// # Examples
///
/// ```
/// use nanpure_core::Board;
/// use nanpure_solver::{SearchOutcome, Solver};
///
/// let mut solver = Solver::new(Board::new()).with_depth(0);
/// let outcome = solver.solve();
/// assert!(outcome.is_incompleted());
/// assert_eq!(outcome.to_string(), "incompleted");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum SearchOutcome {
    /// The board (or every reachable completion) was fully determined.
    ///
    /// The accumulated solution list may hold more than one grid, or none at
    /// all when the search budget died before any branch finished.
    #[display("completed")]
    Completed,
    /// Still ambiguous, but not provably broken: a budget ran out, brute
    /// force was disabled, or a retry of the same node is warranted.
    ///
    /// Never mistake this for "unsolvable" — it means "didn't try further".
    #[display("incompleted")]
    Incompleted,
    /// A contradiction: some cell lost its last candidate.
    ///
    /// Inside the search this is recovered one level up by eliminating the
    /// guess that caused it; it surfaces only when the input itself is
    /// impossible.
    #[display("broken")]
    Broken,
    /// Terminal ambiguity not otherwise classified: the board is valid and
    /// incomplete yet offers nothing to branch on.
    ///
    /// This does not occur on well-formed puzzles, but the solver must
    /// classify the state rather than loop forever.
    #[display("stuck")]
    Stuck,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(SearchOutcome::Completed.to_string(), "completed");
        assert_eq!(SearchOutcome::Incompleted.to_string(), "incompleted");
        assert_eq!(SearchOutcome::Broken.to_string(), "broken");
        assert_eq!(SearchOutcome::Stuck.to_string(), "stuck");
    }

    #[test]
    fn test_is_variant() {
        assert!(SearchOutcome::Completed.is_completed());
        assert!(SearchOutcome::Broken.is_broken());
        assert!(!SearchOutcome::Stuck.is_completed());
    }
}
