//! Per-cell solving state.

use crate::{candidates::Candidates, digit::Digit, position::Position};

/// One cell of the board: its position, remaining candidates, and flags.
///
/// `given` records that the cell's value came from the original puzzle rather
/// than from deduction or search; it affects presentation only, never
/// solving. `dirty` means the cell has changed since its last propagation
/// pass and the owning [`Board`](crate::Board) must re-examine it.
///
/// A cell never reports an error: an emptied candidate set is a
/// contradiction, surfaced by the board-level validity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    candidates: Candidates,
    given: bool,
    dirty: bool,
}

impl Cell {
    /// Creates an open cell with all nine candidates, marked dirty so the
    /// first propagation pass visits it.
    #[must_use]
    pub const fn new(position: Position) -> Self {
        Self {
            position,
            candidates: Candidates::FULL,
            given: false,
            dirty: true,
        }
    }

    /// Returns the cell's position.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Returns the remaining candidate set.
    #[must_use]
    pub const fn candidates(&self) -> Candidates {
        self.candidates
    }

    /// Returns `true` if the value came from the original puzzle.
    #[must_use]
    pub const fn is_given(&self) -> bool {
        self.given
    }

    /// Returns `true` if the cell needs another propagation pass.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Marks the cell as needing propagation.
    pub const fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Marks the cell as propagated.
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Collapses the candidates to a single digit.
    ///
    /// A fixed cell cannot be re-fixed, not even to the same value: the call
    /// is a no-op returning `false`. On success the candidates become exactly
    /// `{digit}`, the `given` flag is set when requested, and the caller is
    /// responsible for scheduling propagation.
    pub const fn fix_to(&mut self, digit: Digit, given: bool) -> bool {
        if self.is_fixed() {
            return false;
        }
        self.candidates = Candidates::EMPTY;
        self.candidates.insert(digit);
        if given {
            self.given = true;
        }
        true
    }

    /// Removes a digit from the candidates, returning whether anything
    /// changed. Idempotent.
    ///
    /// The candidate set may become empty; the cell does not treat that as an
    /// error here.
    pub const fn eliminate(&mut self, digit: Digit) -> bool {
        self.candidates.remove(digit)
    }

    /// Returns the fixed digit, defined iff exactly one candidate remains.
    #[must_use]
    pub const fn fixed_digit(&self) -> Option<Digit> {
        self.candidates.as_single()
    }

    /// Returns `true` if exactly one candidate remains.
    #[must_use]
    pub const fn is_fixed(&self) -> bool {
        self.candidates.len() == 1
    }

    /// Returns the presentation snapshot of this cell.
    #[must_use]
    pub const fn state(&self) -> CellState {
        CellState {
            given: self.given,
            determined: self.fixed_digit(),
            candidates: self.candidates,
        }
    }

    /// Overwrites the candidate set directly.
    ///
    /// Used by [`Board::fork`](crate::Board::fork) to mirror a parent board's
    /// state onto a freshly constructed clone.
    pub(crate) const fn set_candidates(&mut self, candidates: Candidates) {
        self.candidates = candidates;
    }
}

/// Presentation snapshot of one cell, consumed by external renderers.
///
/// Part of the progress interface: it has no effect on solving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellState {
    /// Whether the value came from the original puzzle.
    pub given: bool,
    /// The determined digit, if the cell is fixed.
    pub determined: Option<Digit>,
    /// The remaining candidate set.
    pub candidates: Candidates,
}
