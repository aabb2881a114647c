//! `reversi-board` implements the rules of Reversi (Othello) on a plain 8x8 grid.
//!
//! The crate is organised around a single mutable [`Board`]:
//!
//!  - [`Board::legal_moves`] and [`Board::is_legal_move`] answer which cells a
//!    [`Color`] may play.
//!  - [`Board::apply_move`] places a [`Piece`] and flips every enclosed opponent
//!    piece, or returns a [`MoveError`] and leaves the board untouched.
//!  - [`Board::has_any_legal_move`] is the building block for pass and
//!    game-over handling, which is left to the caller.
//!
//! Coordinates are [`Position`]s in `(row, col)` order, row 0 at the top.

pub mod test_utils;

mod board;
mod color;
mod move_list;
mod piece;
mod position;
mod utils;

pub use board::*;
pub use color::*;
pub use move_list::*;
pub use piece::*;
pub use position::*;

/// The number of cells on one edge of the board.
pub const EDGE_LENGTH: usize = 8;

/// The number of cells on the board.
pub const NUM_SPACES: usize = 64;
