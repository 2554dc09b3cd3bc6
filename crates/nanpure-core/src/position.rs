//! Cell positions and the precomputed interaction index.

use std::fmt::{self, Display};

/// A cell position on the 9x9 board.
///
/// Two positions *interact* when they share a row, a column, or a 3x3 box and
/// are not the same cell. Interaction is the fundamental adjacency relation of
/// the puzzle: a fixed digit at one position eliminates that digit from every
/// interacting position. The relation is computed once, at compile time, into
/// [`Position::PEERS`]; runtime lookups are plain array reads.
///
/// # Examples
///
/// ```
/// use nanpure_core::Position;
///
/// let a = Position::new(0, 0);
/// assert_eq!(a.box_index(), 0);
/// assert!(a.interacts(Position::new(0, 8))); // same row
/// assert!(a.interacts(Position::new(8, 0))); // same column
/// assert!(a.interacts(Position::new(2, 2))); // same box
/// assert!(!a.interacts(a)); // irreflexive
/// assert!(!a.interacts(Position::new(4, 4)));
///
/// assert_eq!(Position::PEERS[a.index()].len(), 20);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    column: u8,
}

impl Position {
    /// Precomputed interaction adjacency: for every cell index (`row*9+column`),
    /// the 20 positions sharing its row, column, or box.
    pub const PEERS: [[Self; 20]; 81] = compute_peers();

    /// Creates a position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, column: u8) -> Self {
        assert!(row < 9 && column < 9);
        Self { row, column }
    }

    /// Creates a position from a row-major cell index (0-80).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < 81);
        #[expect(clippy::cast_possible_truncation)]
        let index = index as u8;
        Self::new(index / 9, index % 9)
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn column(self) -> u8 {
        self.column
    }

    /// Returns the index of the 3x3 box containing this position (0-8,
    /// left to right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row / 3) * 3 + self.column / 3
    }

    /// Returns the row-major cell index (`row*9+column`).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 9 + self.column as usize
    }

    /// Returns `true` if the two positions share a row, column, or box and
    /// are distinct. Symmetric and irreflexive.
    #[must_use]
    pub const fn interacts(self, other: Self) -> bool {
        if self.row == other.row && self.column == other.column {
            return false;
        }
        self.row == other.row
            || self.column == other.column
            || self.box_index() == other.box_index()
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row + 1, self.column + 1)
    }
}

const fn compute_peers() -> [[Position; 20]; 81] {
    let mut table = [[Position { row: 0, column: 0 }; 20]; 81];
    let mut i = 0;
    while i < 81 {
        let a = Position::from_index(i);
        let mut n = 0;
        let mut j = 0;
        while j < 81 {
            let b = Position::from_index(j);
            if a.interacts(b) {
                table[i][n] = b;
                n += 1;
            }
            j += 1;
        }
        assert!(n == 20);
        i += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_index() {
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(0, 8).box_index(), 2);
        assert_eq!(Position::new(4, 4).box_index(), 4);
        assert_eq!(Position::new(8, 0).box_index(), 6);
        assert_eq!(Position::new(8, 8).box_index(), 8);
    }

    #[test]
    fn test_index_round_trip() {
        for index in 0..81 {
            let pos = Position::from_index(index);
            assert_eq!(pos.index(), index);
        }
    }

    #[test]
    fn test_interacts_is_symmetric_and_irreflexive() {
        for i in 0..81 {
            let a = Position::from_index(i);
            assert!(!a.interacts(a));
            for j in 0..81 {
                let b = Position::from_index(j);
                assert_eq!(a.interacts(b), b.interacts(a));
            }
        }
    }

    #[test]
    fn test_peers_match_interaction() {
        for i in 0..81 {
            let a = Position::from_index(i);
            let peers = &Position::PEERS[i];
            assert_eq!(peers.len(), 20);
            for &peer in peers {
                assert!(a.interacts(peer));
            }
            // Every interacting position appears in the table.
            let count = (0..81)
                .map(Position::from_index)
                .filter(|&b| a.interacts(b))
                .count();
            assert_eq!(count, 20);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(0, 0).to_string(), "r1c1");
        assert_eq!(Position::new(5, 7).to_string(), "r6c8");
    }
}
