//! Constraint groups (rows, columns, and 3x3 boxes).

use std::fmt::{self, Display};

use crate::position::Position;

/// The three kinds of constraint group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    /// A row of 9 cells.
    Row,
    /// A column of 9 cells.
    Column,
    /// A 3x3 box of 9 cells.
    Box,
}

impl GroupKind {
    /// Returns the group kinds a deduction in this kind escalates into.
    ///
    /// When all candidate cells for a digit within a group fall inside a
    /// single instance of a cross kind, the digit can be eliminated from the
    /// rest of that instance. Rows and columns escalate into boxes
    /// (claiming); boxes escalate into rows and columns (pointing).
    #[must_use]
    pub const fn cross_kinds(self) -> &'static [GroupKind] {
        match self {
            GroupKind::Row | GroupKind::Column => &[GroupKind::Box],
            GroupKind::Box => &[GroupKind::Row, GroupKind::Column],
        }
    }

    /// Returns the index of the group instance of this kind containing `pos`.
    #[must_use]
    pub const fn index_of(self, pos: Position) -> u8 {
        match self {
            GroupKind::Row => pos.row(),
            GroupKind::Column => pos.column(),
            GroupKind::Box => pos.box_index(),
        }
    }

    /// Returns the group of this kind with the given index (0-8).
    #[must_use]
    pub const fn group(self, index: u8) -> Group {
        match self {
            GroupKind::Row => Group::Row { index },
            GroupKind::Column => Group::Column { index },
            GroupKind::Box => Group::Box { index },
        }
    }
}

/// A constraint group: one row, column, or box.
///
/// Groups hold no cells; they are identified by kind and index, and their
/// member positions come from tables computed at compile time. The
/// [`Board`](crate::Board) keeps one staleness flag per group in
/// [`Group::ALL`] order.
///
/// # Examples
///
/// ```
/// use nanpure_core::{Group, Position};
///
/// let row = Group::Row { index: 3 };
/// assert!(row.contains(Position::new(3, 8)));
/// assert_eq!(row.members().len(), 9);
///
/// let box_ = Group::Box { index: 4 };
/// assert!(box_.contains(Position::new(4, 4)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// A row identified by its row index (0-8).
    Row {
        /// Row index (0-8).
        index: u8,
    },
    /// A column identified by its column index (0-8).
    Column {
        /// Column index (0-8).
        index: u8,
    },
    /// A 3x3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl Group {
    /// All 27 groups, in row, column, box order.
    ///
    /// The position of a group in this array is its flag slot on the board.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { index: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { index: i as u8 };
            all[i + 9] = Self::Column { index: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Returns the kind of this group.
    #[must_use]
    pub const fn kind(self) -> GroupKind {
        match self {
            Group::Row { .. } => GroupKind::Row,
            Group::Column { .. } => GroupKind::Column,
            Group::Box { .. } => GroupKind::Box,
        }
    }

    /// Returns this group's index within its kind (0-8).
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Group::Row { index } | Group::Column { index } | Group::Box { index } => index,
        }
    }

    /// Returns this group's slot in [`Group::ALL`] (0-26).
    #[must_use]
    pub const fn slot(self) -> usize {
        match self {
            Group::Row { index } => index as usize,
            Group::Column { index } => index as usize + 9,
            Group::Box { index } => index as usize + 18,
        }
    }

    /// Returns the 9 member positions of this group.
    #[must_use]
    pub const fn members(self) -> &'static [Position; 9] {
        match self {
            Group::Row { index } => &ROW_MEMBERS[index as usize],
            Group::Column { index } => &COLUMN_MEMBERS[index as usize],
            Group::Box { index } => &BOX_MEMBERS[index as usize],
        }
    }

    /// Returns `true` if `pos` belongs to this group.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        self.kind().index_of(pos) == self.index()
    }
}

impl Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::Row { index } => write!(f, "row {}", index + 1),
            Group::Column { index } => write!(f, "column {}", index + 1),
            Group::Box { index } => write!(f, "box {}", index + 1),
        }
    }
}

const ROW_MEMBERS: [[Position; 9]; 9] = compute_members(GroupKind::Row);
const COLUMN_MEMBERS: [[Position; 9]; 9] = compute_members(GroupKind::Column);
const BOX_MEMBERS: [[Position; 9]; 9] = compute_members(GroupKind::Box);

const fn compute_members(kind: GroupKind) -> [[Position; 9]; 9] {
    let mut table = [[Position::new(0, 0); 9]; 9];
    let mut g = 0;
    while g < 9 {
        let mut i = 0;
        while i < 9 {
            #[expect(clippy::cast_possible_truncation)]
            let (gi, ii) = (g as u8, i as u8);
            table[g][i] = match kind {
                GroupKind::Row => Position::new(gi, ii),
                GroupKind::Column => Position::new(ii, gi),
                GroupKind::Box => Position::new((gi / 3) * 3 + ii / 3, (gi % 3) * 3 + ii % 3),
            };
            i += 1;
        }
        g += 1;
    }
    table
}
