//! The Reversi board: an 8x8 grid of optional [`Piece`]s with move
//! validation, enumeration and application.
//!
//! All coordinates are [`Position`]s in `(row, col)` order and the grid is
//! stored as `grid[row][col]`. Enumeration is row-major.

use crate::{utils, Color, Direction, MoveList, Piece, Position, EDGE_LENGTH, NUM_SPACES};
use arrayvec::ArrayVec;
use derive_more::{Display, Error};
use itertools::iproduct;
use std::fmt;

/// Opponent pieces collected while walking one direction. A walk can pass at
/// most `EDGE_LENGTH - 1` cells before leaving the board.
pub type Run = ArrayVec<Position, { EDGE_LENGTH - 1 }>;

/// The pieces a placement would flip, grouped by direction.
/// Directions that do not end on a friendly piece hold an empty run.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FlipRuns([Run; 8]);

impl FlipRuns {
    /// The run enclosed in `direction`.
    pub fn get(&self, direction: Direction) -> &[Position] {
        &self.0[direction as usize]
    }

    /// Returns true if no direction encloses anything.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|run| run.is_empty())
    }

    /// Total number of enclosed pieces across all directions.
    pub fn len(&self) -> usize {
        self.0.iter().map(|run| run.len()).sum()
    }

    /// Every enclosed position, direction by direction. Runs from one
    /// placement never overlap, so this is their union.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.0.iter().flatten().copied()
    }
}

/// Why a placement was rejected. The board is left untouched in every case.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, Error)]
pub enum MoveError {
    #[display(fmt = "{} is off the board", position)]
    OffBoard { position: Position },
    #[display(fmt = "{} is already occupied", position)]
    Occupied { position: Position },
    #[display(fmt = "{} does not enclose any {} pieces", position, opponent)]
    NoFlips { position: Position, opponent: Color },
}

/// The complete state of a Reversi board.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    grid: [[Option<Piece>; EDGE_LENGTH]; EDGE_LENGTH],
}

impl Default for Board {
    /// Gets the starting position.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Construct the starting position: white on (3,3) and (4,4),
    /// black on (3,4) and (4,3).
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.grid[3][3] = Some(Piece::new(Color::White));
        board.grid[4][4] = Some(Piece::new(Color::White));
        board.grid[3][4] = Some(Piece::new(Color::Black));
        board.grid[4][3] = Some(Piece::new(Color::Black));
        board
    }

    /// A board with no pieces at all.
    pub fn empty() -> Self {
        Self {
            grid: [[None; EDGE_LENGTH]; EDGE_LENGTH],
        }
    }

    /// Returns whether both coordinates of `pos` lie on the board.
    #[inline]
    pub fn is_position_on_board(&self, pos: Position) -> bool {
        pos.is_on_board()
    }

    /// Get the piece at `pos`, or None if the cell is empty or off the board.
    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        if pos.is_on_board() {
            self.grid[pos.row as usize][pos.col as usize]
        } else {
            None
        }
    }

    fn piece_at_mut(&mut self, pos: Position) -> Option<&mut Piece> {
        if pos.is_on_board() {
            self.grid[pos.row as usize][pos.col as usize].as_mut()
        } else {
            None
        }
    }

    /// Returns whether a piece sits at `pos`. Off-board positions are never occupied.
    #[inline]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.piece_at(pos).is_some()
    }

    /// Returns whether a piece of `color` sits at `pos`.
    #[inline]
    pub fn is_owned_by(&self, pos: Position, color: Color) -> bool {
        self.piece_at(pos).map(Piece::color) == Some(color)
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Option<Piece>)> + '_ {
        iproduct!(0..EDGE_LENGTH, 0..EDGE_LENGTH)
            .map(move |(row, col)| (Position::new(row as i8, col as i8), self.grid[row][col]))
    }

    /// Walk from `pos` in `direction`, collecting opponent pieces until a
    /// piece of `color` closes the run. Hitting an empty cell or the edge
    /// first, or closing immediately, yields an empty run.
    fn scan_direction(&self, pos: Position, color: Color, direction: Direction) -> Run {
        let mut run = Run::new();
        let mut next = pos.step(direction);

        loop {
            match self.piece_at(next) {
                None => return Run::new(),
                Some(piece) if piece.color() == color => return run,
                Some(_) => {
                    if run.try_push(next).is_err() {
                        return Run::new();
                    }
                    next = next.step(direction);
                }
            }
        }
    }

    /// Find every opponent run that placing `color` at `pos` would enclose.
    /// Does not check whether `pos` itself is empty or on the board.
    pub fn flip_runs(&self, pos: Position, color: Color) -> FlipRuns {
        let mut runs = FlipRuns::default();
        for &direction in &Direction::ALL {
            runs.0[direction as usize] = self.scan_direction(pos, color, direction);
        }
        runs
    }

    /// Check that `color` may place at `pos`, returning the runs it would flip.
    fn check_move(&self, pos: Position, color: Color) -> Result<FlipRuns, MoveError> {
        if !pos.is_on_board() {
            return Err(MoveError::OffBoard { position: pos });
        }
        if self.is_occupied(pos) {
            return Err(MoveError::Occupied { position: pos });
        }

        let runs = self.flip_runs(pos, color);
        if runs.is_empty() {
            return Err(MoveError::NoFlips {
                position: pos,
                opponent: !color,
            });
        }
        Ok(runs)
    }

    /// Returns whether `color` may place a piece at `pos`: the cell is on the
    /// board, empty, and encloses at least one opponent run.
    #[inline]
    pub fn is_legal_move(&self, pos: Position, color: Color) -> bool {
        self.check_move(pos, color).is_ok()
    }

    /// Get every legal move for `color`, in row-major order.
    pub fn legal_moves(&self, color: Color) -> MoveList {
        self.cells()
            .map(|(pos, _)| pos)
            .filter(|&pos| self.is_legal_move(pos, color))
            .collect()
    }

    /// Returns whether `color` has at least one legal move.
    pub fn has_any_legal_move(&self, color: Color) -> bool {
        self.cells()
            .any(|(pos, _)| self.is_legal_move(pos, color))
    }

    /// Place a piece of `color` at `pos` and flip every enclosed piece.
    /// Returns the flipped positions, or the reason the move is illegal, in
    /// which case the board is unchanged.
    pub fn apply_move(&mut self, pos: Position, color: Color) -> Result<MoveList, MoveError> {
        let runs = self.check_move(pos, color)?;

        self.grid[pos.row as usize][pos.col as usize] = Some(Piece::new(color));
        for flipped in runs.positions() {
            if let Some(piece) = self.piece_at_mut(flipped) {
                piece.flip_to_opposite();
            }
        }

        Ok(runs.positions().collect())
    }

    /// Count the pieces of `color` on the board.
    pub fn count(&self, color: Color) -> u8 {
        self.cells()
            .filter(|(_, piece)| piece.map(Piece::color) == Some(color))
            .count() as u8
    }

    /// Count the empty cells on the board.
    pub fn count_empty(&self) -> u8 {
        self.cells().filter(|(_, piece)| piece.is_none()).count() as u8
    }

    /// A copy of this board with every piece's color swapped.
    pub fn inverted(&self) -> Self {
        let mut board = *self;
        for piece in board.grid.iter_mut().flatten().flatten() {
            piece.flip_to_opposite();
        }
        board
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(
            self.cells()
                .map(|(_, piece)| piece.map_or(utils::EMPTY_GLYPH, Piece::glyph)),
            f,
        )
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, Error)]
pub enum ParseBoardError {
    #[display(fmt = "expected {} cells, found {}", NUM_SPACES, found)]
    WrongCellCount { found: usize },
    #[display(fmt = "unknown cell character {:?}", character)]
    UnknownCell { character: char },
}

/// Build a [`Board`] from 64 cell characters in row-major order, ignoring
/// whitespace: `B`/`X` for black, `W`/`O` for white, `.`/`-`/`_` for empty.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if cells.len() != NUM_SPACES {
            return Err(ParseBoardError::WrongCellCount { found: cells.len() });
        }

        let mut board = Self::empty();
        for (index, &character) in cells.iter().enumerate() {
            let piece = match character.to_ascii_uppercase() {
                'B' | 'X' => Some(Piece::new(Color::Black)),
                'W' | 'O' => Some(Piece::new(Color::White)),
                '.' | '-' | '_' => None,
                _ => return Err(ParseBoardError::UnknownCell { character }),
            };
            board.grid[index / EDGE_LENGTH][index % EDGE_LENGTH] = piece;
        }
        Ok(board)
    }
}
