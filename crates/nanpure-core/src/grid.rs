//! Plain 9x9 digit grids: the external input and output surface.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{digit::Digit, position::Position};

/// A 9x9 table of optional digits.
///
/// This is the boundary type of the crate: callers supply a `Grid` of givens
/// (empty cells for unknowns) and receive completed `Grid`s back. It carries
/// no candidate bookkeeping; that lives in [`Board`](crate::Board).
///
/// # Examples
///
/// ```
/// use nanpure_core::{Digit, Grid, Position};
///
/// // 0 means "no given value"; out-of-range values are treated the same.
/// let grid = Grid::from_values([
///     [5, 3, 0, 0, 7, 0, 0, 0, 0],
///     [6, 0, 0, 1, 9, 5, 0, 0, 0],
///     [0, 9, 8, 0, 0, 0, 0, 6, 0],
///     [8, 0, 0, 0, 6, 0, 0, 0, 3],
///     [4, 0, 0, 8, 0, 3, 0, 0, 1],
///     [7, 0, 0, 0, 2, 0, 0, 0, 6],
///     [0, 6, 0, 0, 0, 0, 2, 8, 0],
///     [0, 0, 0, 4, 1, 9, 0, 0, 5],
///     [0, 0, 0, 0, 8, 0, 0, 7, 9],
/// ]);
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
/// assert_eq!(grid.get(Position::new(0, 2)), None);
/// assert_eq!(grid.given_count(), 30);
/// ```
///
/// Grids can also be parsed from the literal format used in tests, where
/// `_`, `.`, or `0` mark empty cells and whitespace is ignored:
///
/// ```
/// use nanpure_core::Grid;
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
/// assert_eq!(grid.given_count(), 30);
/// # Ok::<(), nanpure_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Grid {
    cells: [[Option<Digit>; 9]; 9],
}

impl Grid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[None; 9]; 9],
        }
    }

    /// Creates a grid from a row-major table of integers.
    ///
    /// `0` means "no given value"; values outside 1-9 are normalized to the
    /// same, never rejected.
    #[must_use]
    pub fn from_values(values: [[u8; 9]; 9]) -> Self {
        let mut grid = Self::new();
        for (row, row_values) in values.iter().enumerate() {
            for (column, &value) in row_values.iter().enumerate() {
                grid.cells[row][column] = Digit::from_value(value);
            }
        }
        grid
    }

    /// Returns the digit at a position, if any.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.row() as usize][pos.column() as usize]
    }

    /// Sets or clears the digit at a position.
    pub const fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.row() as usize][pos.column() as usize] = digit;
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn given_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_some())
            .count()
    }

    /// Returns `true` if all 81 cells are filled.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.given_count() == 81
    }

    /// Returns an iterator over `(Position, Option<Digit>)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Option<Digit>)> + '_ {
        (0..81).map(|index| {
            let pos = Position::from_index(index);
            (pos, self.get(pos))
        })
    }
}

/// Error returned when parsing a grid literal fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// A character that is neither a cell mark nor whitespace.
    #[display("invalid character in grid literal: {character:?}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
    },
    /// The literal did not contain exactly 81 cell marks.
    #[display("grid literal has {count} cells, expected 81")]
    WrongCellCount {
        /// The number of cell marks found.
        count: usize,
    },
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut count = 0;
        for character in s.chars() {
            if character.is_whitespace() {
                continue;
            }
            let digit = match character {
                '_' | '.' | '0' => None,
                '1'..='9' => Digit::from_value(character as u8 - b'0'),
                _ => return Err(ParseGridError::InvalidCharacter { character }),
            };
            if count < 81 {
                grid.cells[count / 9][count % 9] = digit;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::WrongCellCount { count });
        }
        Ok(grid)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, row_cells) in self.cells.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (column, cell) in row_cells.iter().enumerate() {
                if column > 0 && column % 3 == 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, "_")?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_normalizes_out_of_range() {
        let mut values = [[0_u8; 9]; 9];
        values[0][0] = 5;
        values[0][1] = 10;
        values[0][2] = 255;
        let grid = Grid::from_values(values);
        assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
        assert_eq!(grid.get(Position::new(0, 1)), None);
        assert_eq!(grid.get(Position::new(0, 2)), None);
        assert_eq!(grid.given_count(), 1);
    }

    #[test]
    fn test_parse_round_trip() {
        let literal = "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        ";
        let grid: Grid = literal.parse().unwrap();
        assert_eq!(grid.given_count(), 30);
        let reparsed: Grid = grid.to_string().parse().unwrap();
        assert_eq!(grid, reparsed);
    }

    #[test]
    fn test_parse_accepts_zero_and_dot() {
        let zeros: Grid = "0".repeat(81).parse().unwrap();
        let dots: Grid = ".".repeat(81).parse().unwrap();
        assert_eq!(zeros, Grid::new());
        assert_eq!(dots, Grid::new());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "x".repeat(81).parse::<Grid>(),
            Err(ParseGridError::InvalidCharacter { character: 'x' })
        );
        assert_eq!(
            "1".repeat(80).parse::<Grid>(),
            Err(ParseGridError::WrongCellCount { count: 80 })
        );
        assert_eq!(
            "1".repeat(82).parse::<Grid>(),
            Err(ParseGridError::WrongCellCount { count: 82 })
        );
    }

    #[test]
    fn test_set_and_is_full() {
        let mut grid = Grid::new();
        assert!(!grid.is_full());
        for index in 0..81 {
            grid.set(Position::from_index(index), Some(Digit::D1));
        }
        assert!(grid.is_full());
        grid.set(Position::new(4, 4), None);
        assert_eq!(grid.given_count(), 80);
    }
}
