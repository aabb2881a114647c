//! Ordered lists of board positions.

use crate::{Position, NUM_SPACES};
use arrayvec::ArrayVec;
use itertools::Itertools;
use std::fmt;

/// A list of positions in the order they were found: row-major for legal
/// moves, scan order for flipped pieces. Holds at most one entry per square.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MoveList(ArrayVec<Position, NUM_SPACES>);

impl MoveList {
    #[inline]
    pub fn new() -> Self {
        Self(ArrayVec::new())
    }

    /// Append `pos` unless it is already present or off the board.
    pub fn push(&mut self, pos: Position) {
        if pos.is_on_board() && !self.contains(pos) {
            self.0.push(pos);
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns whether `pos` is in this list.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[Position] {
        &self.0
    }
}

impl Extend<Position> for MoveList {
    fn extend<T: IntoIterator<Item = Position>>(&mut self, iter: T) {
        for pos in iter {
            self.push(pos);
        }
    }
}

impl std::iter::FromIterator<Position> for MoveList {
    fn from_iter<T: IntoIterator<Item = Position>>(iter: T) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl IntoIterator for MoveList {
    type Item = Position;
    type IntoIter = arrayvec::IntoIter<Position, NUM_SPACES>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_list_skips_duplicates() {
        let list: MoveList = vec![
            Position::new(2, 3),
            Position::new(3, 2),
            Position::new(2, 3),
        ]
        .into_iter()
        .collect();
        assert_eq!(list.len(), 2);
        assert_eq!(list.as_slice(), &[Position::new(2, 3), Position::new(3, 2)]);
    }

    #[test]
    fn move_list_skips_off_board_positions() {
        let list: MoveList = (-1..8i8)
            .flat_map(|row| (-1..8i8).map(move |col| Position::new(row, col)))
            .collect();
        assert_eq!(list.len(), NUM_SPACES);
        assert!(list.iter().all(Position::is_on_board));
        assert_eq!(list.iter().next(), Some(Position::new(0, 0)));
        assert!(!list.contains(Position::new(-1, 0)));
    }

    #[test]
    fn move_list_to_str() {
        let list: MoveList = vec![Position::new(2, 3), Position::new(5, 4)]
            .into_iter()
            .collect();
        assert_eq!(list.to_string(), "[D3, E6]");
        assert_eq!(MoveList::new().to_string(), "[]");
    }
}
