//! A single piece sitting on a board cell.

use crate::Color;

/// A piece on the board. Pieces never move between cells; enclosing
/// placements only change their color.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Piece {
    color: Color,
}

impl Piece {
    #[inline]
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    #[inline]
    pub fn color(self) -> Color {
        self.color
    }

    /// Change this piece to the other color.
    #[inline]
    pub fn flip_to_opposite(&mut self) {
        self.color = !self.color;
    }

    /// The uppercased initial of this piece's color ('B' or 'W').
    pub fn glyph(self) -> char {
        match self.color {
            Color::Black => 'B',
            Color::White => 'W',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_flip_to_opposite() {
        let mut piece = Piece::new(Color::Black);
        piece.flip_to_opposite();
        assert_eq!(piece.color(), Color::White);
        piece.flip_to_opposite();
        assert_eq!(piece.color(), Color::Black);
    }

    #[test]
    fn piece_glyph() {
        assert_eq!(Piece::new(Color::Black).glyph(), 'B');
        assert_eq!(Piece::new(Color::White).glyph(), 'W');
    }
}
