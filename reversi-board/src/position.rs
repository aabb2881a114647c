//! Code for working with [`Position`]s and [`Direction`]s on the board.
//!
//! Positions are `(row, col)` pairs: row 0 is the top row, column 0 the left
//! column. Both halves are signed so that walking off an edge still yields a
//! representable (but off-board) position.

use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error, From, Into};
use std::fmt::{self, Formatter, Write};

/// A cell coordinate, possibly off the board.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd, From, Into)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

/// One of the eight compass directions, as a `(row, col)` unit step.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    East = 0,
    SouthEast = 1,
    South = 2,
    SouthWest = 3,
    West = 4,
    NorthWest = 5,
    North = 6,
    NorthEast = 7,
}

impl Direction {
    /// Every direction, clockwise from east.
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
    ];

    /// The `(d_row, d_col)` step for this direction.
    #[inline]
    pub fn offset(self) -> (i8, i8) {
        match self {
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
        }
    }
}

impl Position {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Returns whether both coordinates lie in `[0, 8)`.
    #[inline]
    pub fn is_on_board(self) -> bool {
        let edge = EDGE_LENGTH as i8;
        (0..edge).contains(&self.row) && (0..edge).contains(&self.col)
    }

    /// The neighbouring position one step away in `direction`.
    #[inline]
    pub fn step(self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.offset();
        Self::new(self.row.saturating_add(d_row), self.col.saturating_add(d_col))
    }

    /// Convert from a row-major square index.
    /// Returns None if the index is past the last square.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= NUM_SPACES {
            return None;
        }
        Some(Self::new(
            (index / EDGE_LENGTH) as i8,
            (index % EDGE_LENGTH) as i8,
        ))
    }

    /// Convert into a row-major square index.
    /// Returns None for off-board positions.
    pub fn to_index(self) -> Option<usize> {
        if self.is_on_board() {
            Some(self.row as usize * EDGE_LENGTH + self.col as usize)
        } else {
            None
        }
    }
}

/// Convert this [`Position`] into string notation ("D3"), or "(row, col)"
/// when it is off the board.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if !self.is_on_board() {
            return write!(f, "({}, {})", self.row, self.col);
        }
        let col_str = "ABCDEFGH".chars().nth(self.col as usize).ok_or(fmt::Error)?;
        let row_str = "12345678".chars().nth(self.row as usize).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

#[derive(Debug, PartialEq, Display, Error)]
#[display(fmt = "invalid position string")]
pub struct ParsePositionError;

/// Build a [`Position`] from 1-indexed string notation: a column letter
/// followed by a row digit ("D3", "f5").
impl std::str::FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_str = chars.next().ok_or(ParsePositionError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParsePositionError)?;
        let row = chars
            .next()
            .ok_or(ParsePositionError)?
            .to_digit(10)
            .ok_or(ParsePositionError)? as usize;

        if row == 0 || row > EDGE_LENGTH || chars.next().is_some() {
            return Err(ParsePositionError);
        }

        Ok(Self::new((row - 1) as i8, col as i8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn position_on_board() {
        assert!(Position::new(0, 0).is_on_board());
        assert!(Position::new(7, 7).is_on_board());
        assert!(!Position::new(-1, 0).is_on_board());
        assert!(!Position::new(0, 8).is_on_board());
        assert!(!Position::new(8, 3).is_on_board());
    }

    #[test]
    fn position_step() {
        let pos = Position::new(3, 3);
        assert_eq!(pos.step(Direction::East), Position::new(3, 4));
        assert_eq!(pos.step(Direction::NorthWest), Position::new(2, 2));
        assert_eq!(pos.step(Direction::SouthWest), Position::new(4, 2));
        assert!(!Position::new(0, 0).step(Direction::North).is_on_board());
    }

    #[test]
    fn directions_are_distinct_unit_steps() {
        let offsets: Vec<_> = Direction::ALL.iter().map(|d| d.offset()).collect();
        for (i, a) in offsets.iter().enumerate() {
            assert!(a.0.abs() <= 1 && a.1.abs() <= 1 && *a != (0, 0));
            assert!(!offsets[i + 1..].contains(a));
        }
    }

    #[test]
    fn position_tuple_conversion() {
        assert_eq!(Position::from((2, 3)), Position::new(2, 3));
        let (row, col): (i8, i8) = Position::new(-1, 7).into();
        assert_eq!((row, col), (-1, 7));
    }

    #[test]
    fn direction_discriminants_follow_all() {
        for (index, &direction) in Direction::ALL.iter().enumerate() {
            assert_eq!(direction as usize, index);
        }
    }

    #[test]
    fn position_index() {
        assert_eq!(Position::from_index(0), Some(Position::new(0, 0)));
        assert_eq!(Position::from_index(63), Some(Position::new(7, 7)));
        assert_eq!(Position::from_index(64), None);
        assert_eq!(Position::new(2, 3).to_index(), Some(19));
        assert_eq!(Position::new(-1, 3).to_index(), None);
    }

    #[test]
    fn position_from_str_success() {
        assert_eq!(Position::from_str("A1"), Ok(Position::new(0, 0)));
        assert_eq!(Position::from_str("h8"), Ok(Position::new(7, 7)));
        assert_eq!(Position::from_str("D3"), Ok(Position::new(2, 3)));
    }

    #[test]
    fn position_from_str_fail() {
        assert_eq!(Position::from_str(""), Err(ParsePositionError));
        assert_eq!(Position::from_str("A12"), Err(ParsePositionError));
        assert_eq!(Position::from_str("AA"), Err(ParsePositionError));
        assert_eq!(Position::from_str("A9"), Err(ParsePositionError));
        assert_eq!(Position::from_str("A0"), Err(ParsePositionError));
        assert_eq!(Position::from_str("I5"), Err(ParsePositionError));
    }

    #[test]
    fn position_to_str() {
        assert_eq!(Position::new(0, 0).to_string(), "A1");
        assert_eq!(Position::new(7, 7).to_string(), "H8");
        assert_eq!(Position::new(5, 4).to_string(), "E6");
        assert_eq!(Position::new(-1, 2).to_string(), "(-1, 2)");
        assert_eq!(Position::from_str("F6").unwrap().to_string(), "F6");
    }
}
