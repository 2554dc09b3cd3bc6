//! The board: 81 cells, 27 groups, and the propagation engine.

use tinyvec::ArrayVec;

use crate::{
    candidates::Candidates,
    cell::{Cell, CellState},
    digit::Digit,
    grid::Grid,
    group::Group,
    position::Position,
};

/// The full solving state: an arena of 81 cells plus one staleness flag per
/// group.
///
/// Cells are indexed by `row*9+column`. Groups own nothing; they are index
/// lists (see [`Group`]), and the board tracks which of them still need a
/// deduction pass in a flat `[bool; 27]` in [`Group::ALL`] order.
///
/// [`update`](Board::update) runs constraint propagation to a fixpoint:
/// fixed digits are eliminated from interacting cells, and each stale group
/// is scanned for digits held by a single cell (which get fixed) and for
/// digits confined to one cross-group instance (box-line reductions). Any
/// change re-dirties the affected cells and groups, so the loop stops only
/// when the board is genuinely stable. Candidate sets never grow, which
/// bounds the whole process.
///
/// # Examples
///
/// ```
/// use nanpure_core::{Board, Digit, Grid, Position};
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
/// "
/// .parse()?;
/// let mut board = Board::from_grid(&grid);
/// board.update();
/// assert!(board.valid());
/// # Ok::<(), nanpure_core::ParseGridError>(())
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; 81],
    stale: [bool; 27],
}

impl Board {
    /// Creates a board with every candidate open and every cell and group
    /// scheduled for the first propagation pass.
    #[must_use]
    pub fn new() -> Self {
        let mut cells = [Cell::new(Position::new(0, 0)); 81];
        for (index, cell) in cells.iter_mut().enumerate() {
            *cell = Cell::new(Position::from_index(index));
        }
        Self {
            cells,
            stale: [true; 27],
        }
    }

    /// Creates a board from a grid of givens.
    ///
    /// Filled cells are fixed and flagged as given; empty cells stay open.
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        let mut board = Self::new();
        for (pos, digit) in grid.iter() {
            if let Some(digit) = digit {
                board.fix_impl(pos, digit, true);
            }
        }
        board
    }

    /// Returns the cell at a position.
    #[must_use]
    pub const fn cell(&self, pos: Position) -> &Cell {
        &self.cells[pos.index()]
    }

    /// Fixes a cell to a digit (as a deduction or a speculative assignment,
    /// never as a given).
    ///
    /// Returns `false` without changing anything when the cell is already
    /// fixed. On success the cell is dirtied and its three groups are marked
    /// stale so the next [`update`](Board::update) propagates the value.
    pub fn fix(&mut self, pos: Position, digit: Digit) -> bool {
        self.fix_impl(pos, digit, false)
    }

    fn fix_impl(&mut self, pos: Position, digit: Digit, given: bool) -> bool {
        if !self.cells[pos.index()].fix_to(digit, given) {
            return false;
        }
        self.cells[pos.index()].mark_dirty();
        self.mark_stale(pos);
        true
    }

    /// Removes a candidate from a cell, returning whether anything changed.
    ///
    /// On success the cell is dirtied and its groups are marked stale. The
    /// candidate set may become empty; that is detected by
    /// [`valid`](Board::valid), not raised here.
    pub fn eliminate(&mut self, pos: Position, digit: Digit) -> bool {
        if !self.cells[pos.index()].eliminate(digit) {
            return false;
        }
        self.cells[pos.index()].mark_dirty();
        self.mark_stale(pos);
        true
    }

    fn mark_stale(&mut self, pos: Position) {
        self.stale[Group::Row { index: pos.row() }.slot()] = true;
        self.stale[Group::Column { index: pos.column() }.slot()] = true;
        self.stale[Group::Box {
            index: pos.box_index(),
        }
        .slot()] = true;
    }

    /// Runs constraint propagation to a fixpoint.
    ///
    /// Each pass flushes dirty cells (eliminating fixed digits from their
    /// peers) and re-scans stale groups. Fixes and eliminations re-dirty the
    /// cells and groups they touch, so the loop repeats until nothing is
    /// dirty and no group is stale. Candidate sets shrink monotonically,
    /// bounding the number of passes.
    pub fn update(&mut self) {
        loop {
            let mut progressed = false;

            for index in 0..81 {
                if !self.cells[index].is_dirty() {
                    continue;
                }
                self.cells[index].mark_clean();
                progressed = true;
                if let Some(digit) = self.cells[index].fixed_digit() {
                    for &peer in &Position::PEERS[index] {
                        self.eliminate(peer, digit);
                    }
                }
            }

            for group in Group::ALL {
                if !self.stale[group.slot()] {
                    continue;
                }
                self.stale[group.slot()] = false;
                progressed = true;
                self.update_group(group);
            }

            if !progressed {
                break;
            }
        }
    }

    /// Runs one group deduction pass.
    ///
    /// For each digit: the cells of the group still holding it are collected;
    /// a lone holder gets fixed, and when every holder falls inside a single
    /// instance of a cross group (see [`GroupKind::cross_kinds`]), the digit
    /// is eliminated from the rest of that instance.
    ///
    /// [`GroupKind::cross_kinds`]: crate::GroupKind::cross_kinds
    fn update_group(&mut self, group: Group) {
        for digit in Digit::ALL {
            let mut holders: ArrayVec<[Position; 9]> = ArrayVec::new();
            for &pos in group.members() {
                if self.cells[pos.index()].candidates().contains(digit) {
                    holders.push(pos);
                }
            }

            if holders.len() == 1 && !self.cells[holders[0].index()].is_fixed() {
                self.fix(holders[0], digit);
            }

            let Some(&first) = holders.first() else {
                continue;
            };
            for &cross_kind in group.kind().cross_kinds() {
                let target = cross_kind.index_of(first);
                if !holders.iter().all(|&pos| cross_kind.index_of(pos) == target) {
                    continue;
                }
                for &pos in cross_kind.group(target).members() {
                    if group.contains(pos) {
                        continue;
                    }
                    self.eliminate(pos, digit);
                }
            }
        }
    }

    /// Returns `true` if no cell has an empty candidate set.
    ///
    /// An empty set is a contradiction: some branch of reasoning (or the
    /// input itself) is impossible.
    #[must_use]
    pub fn valid(&self) -> bool {
        self.cells.iter().all(|cell| !cell.candidates().is_empty())
    }

    /// Returns `true` if every cell is fixed.
    #[must_use]
    pub fn completed(&self) -> bool {
        self.cells.iter().all(Cell::is_fixed)
    }

    /// Returns the unfixed cell with the fewest remaining candidates, ties
    /// broken by encounter order (minimum-remaining-values heuristic).
    ///
    /// Cells with empty candidate sets are skipped; call
    /// [`valid`](Board::valid) first to detect those. Returns `None` when
    /// every cell is fixed or empty.
    #[must_use]
    pub fn most_constrained(&self) -> Option<Position> {
        self.cells
            .iter()
            .filter(|cell| cell.candidates().len() >= 2)
            .min_by_key(|cell| cell.candidates().len())
            .map(Cell::position)
    }

    /// Returns the grid of fixed digits; unfixed cells are left empty.
    #[must_use]
    pub fn to_grid(&self) -> Grid {
        let mut grid = Grid::new();
        for cell in &self.cells {
            grid.set(cell.position(), cell.fixed_digit());
        }
        grid
    }

    /// Clones the board for a speculative branch.
    ///
    /// The clone is rebuilt in two steps: a fresh board is seeded from this
    /// board's given cells only, then every candidate set is overwritten to
    /// mirror this board exactly. The result is a structurally fresh board
    /// whose bookkeeping flags start consistent instead of inheriting a
    /// parent's partially flushed state.
    #[must_use]
    pub fn fork(&self) -> Self {
        let mut fork = Self::new();
        for cell in &self.cells {
            if cell.is_given()
                && let Some(digit) = cell.fixed_digit()
            {
                fork.fix_impl(cell.position(), digit, true);
            }
        }
        for (index, cell) in self.cells.iter().enumerate() {
            fork.cells[index].set_candidates(cell.candidates());
        }
        fork
    }

    /// Returns the presentation snapshot: each of the 9 boxes mapped to the
    /// states of its 9 member cells (box-local row-major order).
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut boxes = [[CellState {
            given: false,
            determined: None,
            candidates: Candidates::EMPTY,
        }; 9]; 9];
        for (box_index, box_states) in boxes.iter_mut().enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            let group = Group::Box {
                index: box_index as u8,
            };
            for (state, pos) in box_states.iter_mut().zip(group.members()) {
                *state = self.cells[pos.index()].state();
            }
        }
        BoardSnapshot { boxes }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Grid> for Board {
    fn from(grid: Grid) -> Self {
        Self::from_grid(&grid)
    }
}

/// Presentation snapshot of the whole board, box by box.
///
/// Consumed by external renderers through the progress interface; producing
/// one has no effect on solving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSnapshot {
    /// `boxes[b]` holds the states of box `b`'s cells in box-local
    /// row-major order.
    pub boxes: [[CellState; 9]; 9],
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    /// The puzzle from the `Grid` examples, with its unique solution.
    const SOLUTION: [[u8; 9]; 9] = [
        [5, 3, 4, 6, 7, 8, 9, 1, 2],
        [6, 7, 2, 1, 9, 5, 3, 4, 8],
        [1, 9, 8, 3, 4, 2, 5, 6, 7],
        [8, 5, 9, 7, 6, 1, 4, 2, 3],
        [4, 2, 6, 8, 5, 3, 7, 9, 1],
        [7, 1, 3, 9, 2, 4, 8, 5, 6],
        [9, 6, 1, 5, 3, 7, 2, 8, 4],
        [2, 8, 7, 4, 1, 9, 6, 3, 5],
        [3, 4, 5, 2, 8, 6, 1, 7, 9],
    ];

    fn candidate_sets(board: &Board) -> Vec<Candidates> {
        (0..81)
            .map(|index| board.cell(Position::from_index(index)).candidates())
            .collect()
    }

    fn is_subset(a: Candidates, b: Candidates) -> bool {
        a & b == a
    }

    #[test]
    fn test_new_board_is_open() {
        let board = Board::new();
        assert!(board.valid());
        assert!(!board.completed());
        for index in 0..81 {
            let cell = board.cell(Position::from_index(index));
            assert_eq!(cell.candidates(), Candidates::FULL);
        }
    }

    #[test]
    fn test_fix_propagates_to_peers() {
        let mut board = Board::new();
        board.fix(Position::new(0, 0), Digit::D5);
        board.update();
        // 5 is gone from every interacting cell.
        for &peer in &Position::PEERS[0] {
            assert!(!board.cell(peer).candidates().contains(Digit::D5));
        }
        // A cell sharing nothing keeps it.
        assert!(board.cell(Position::new(4, 4)).candidates().contains(Digit::D5));
    }

    #[test]
    fn test_lone_holder_gets_fixed() {
        let mut board = Board::new();
        // Make (0, 4) the only cell in row 0 that can hold 5.
        for column in 0..9 {
            if column != 4 {
                board.eliminate(Position::new(0, column), Digit::D5);
            }
        }
        board.update();
        assert_eq!(
            board.cell(Position::new(0, 4)).fixed_digit(),
            Some(Digit::D5)
        );
    }

    #[test]
    fn test_pointing_box_into_row() {
        let mut board = Board::new();
        // Confine 5 within box 0 to its top row.
        for pos in (Group::Box { index: 0 }).members() {
            if pos.row() != 0 {
                board.eliminate(*pos, Digit::D5);
            }
        }
        board.update();
        // 5 is eliminated from the rest of row 0 outside box 0.
        for column in 3..9 {
            assert!(
                !board
                    .cell(Position::new(0, column))
                    .candidates()
                    .contains(Digit::D5),
                "r1c{} should have lost 5",
                column + 1
            );
        }
    }

    #[test]
    fn test_claiming_row_into_box() {
        let mut board = Board::new();
        // Confine 7 within row 0 to the cells of box 0.
        for column in 3..9 {
            board.eliminate(Position::new(0, column), Digit::D7);
        }
        board.update();
        // 7 is eliminated from the rest of box 0 outside row 0.
        for pos in (Group::Box { index: 0 }).members() {
            if pos.row() != 0 {
                assert!(
                    !board.cell(*pos).candidates().contains(Digit::D7),
                    "{pos} should have lost 7"
                );
            }
        }
    }

    #[test]
    fn test_contradictory_givens_invalidate() {
        // The same digit twice in one row.
        let mut values = [[0_u8; 9]; 9];
        values[0][0] = 1;
        values[0][8] = 1;
        let mut board = Board::from_grid(&Grid::from_values(values));
        board.update();
        assert!(!board.valid());
    }

    #[test]
    fn test_update_is_idempotent() {
        let mut values = SOLUTION;
        for (index, row) in values.iter_mut().enumerate() {
            // Keep roughly a third of the givens.
            for (column, value) in row.iter_mut().enumerate() {
                if (index + column) % 3 != 0 {
                    *value = 0;
                }
            }
        }
        let mut board = Board::from_grid(&Grid::from_values(values));
        board.update();
        let before = candidate_sets(&board);
        board.update();
        assert_eq!(candidate_sets(&board), before);
    }

    #[test]
    fn test_most_constrained_prefers_fewest_candidates() {
        let mut board = Board::new();
        for digit in [Digit::D1, Digit::D2, Digit::D3, Digit::D4] {
            board.eliminate(Position::new(4, 4), digit);
        }
        for digit in [Digit::D1, Digit::D2] {
            board.eliminate(Position::new(7, 7), digit);
        }
        assert_eq!(board.most_constrained(), Some(Position::new(4, 4)));
    }

    #[test]
    fn test_most_constrained_ties_break_by_encounter_order() {
        let mut board = Board::new();
        for digit in [Digit::D1, Digit::D2, Digit::D3] {
            board.eliminate(Position::new(6, 6), digit);
            board.eliminate(Position::new(2, 2), digit);
        }
        assert_eq!(board.most_constrained(), Some(Position::new(2, 2)));
    }

    #[test]
    fn test_fork_mirrors_parent_and_is_independent() {
        let mut values = [[0_u8; 9]; 9];
        values[0][0] = 5;
        values[4][4] = 3;
        let mut board = Board::from_grid(&Grid::from_values(values));
        board.update();

        let mut fork = board.fork();
        assert_eq!(candidate_sets(&fork), candidate_sets(&board));
        assert!(fork.cell(Position::new(0, 0)).is_given());
        assert!(!fork.cell(Position::new(1, 1)).is_given());

        fork.fix(Position::new(1, 1), Digit::D9);
        fork.update();
        assert!(
            board
                .cell(Position::new(1, 1))
                .candidates()
                .contains(Digit::D9),
            "parent board must not observe the fork's speculation"
        );
    }

    #[test]
    fn test_to_grid_reports_only_fixed_cells() {
        let mut values = [[0_u8; 9]; 9];
        values[3][3] = 8;
        let board = Board::from_grid(&Grid::from_values(values));
        let grid = board.to_grid();
        assert_eq!(grid.get(Position::new(3, 3)), Some(Digit::D8));
        assert_eq!(grid.get(Position::new(0, 0)), None);
        assert_eq!(grid.given_count(), 1);
    }

    #[test]
    fn test_snapshot_box_layout() {
        let mut values = [[0_u8; 9]; 9];
        values[4][4] = 3; // center of box 4, box-local slot 4
        let board = Board::from_grid(&Grid::from_values(values));
        let snapshot = board.snapshot();
        let state = snapshot.boxes[4][4];
        assert!(state.given);
        assert_eq!(state.determined, Some(Digit::D3));
        assert_eq!(snapshot.boxes[0][0].determined, None);
    }

    proptest! {
        /// Givens drawn from a real solution never lose that solution's
        /// digits: propagation makes no false eliminations.
        #[test]
        fn propagation_is_sound(mask in prop::collection::vec(any::<bool>(), 81)) {
            let mut values = SOLUTION;
            for (index, keep) in mask.iter().enumerate() {
                if !keep {
                    values[index / 9][index % 9] = 0;
                }
            }
            let mut board = Board::from_grid(&Grid::from_values(values));
            board.update();
            prop_assert!(board.valid());
            for index in 0..81 {
                let pos = Position::from_index(index);
                let digit = Digit::from_value(SOLUTION[index / 9][index % 9]).unwrap();
                prop_assert!(
                    board.cell(pos).candidates().contains(digit),
                    "cell {} lost its solution digit {}",
                    pos,
                    digit
                );
            }
        }

        /// Candidate sets only ever shrink across propagation, and a second
        /// update after a fixpoint changes nothing.
        #[test]
        fn propagation_shrinks_monotonically(mask in prop::collection::vec(any::<bool>(), 81)) {
            let mut values = SOLUTION;
            for (index, keep) in mask.iter().enumerate() {
                if !keep {
                    values[index / 9][index % 9] = 0;
                }
            }
            let mut board = Board::from_grid(&Grid::from_values(values));
            let before = candidate_sets(&board);
            board.update();
            let after = candidate_sets(&board);
            for (a, b) in after.iter().zip(&before) {
                prop_assert!(is_subset(*a, *b));
            }
            board.update();
            prop_assert_eq!(candidate_sets(&board), after);
        }
    }
}
