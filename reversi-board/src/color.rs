//! The two sides of a Reversi game.

use derive_more::{Display, Error};
use std::fmt;

/// The color of a piece, and of the player placing it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Both colors, black first.
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    /// Gets the other color.
    #[inline]
    pub fn opposite(self) -> Self {
        !self
    }
}

impl Default for Color {
    /// Gets the color that moves first (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("black"),
            Color::White => f.write_str("white"),
        }
    }
}

#[derive(Debug, PartialEq, Display, Error)]
#[display(fmt = "invalid color string")]
pub struct ParseColorError;

/// Parse a color from its name ("black", "White") or its initial ("b", "W").
impl std::str::FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "b" => Ok(Color::Black),
            "white" | "w" => Ok(Color::White),
            _ => Err(ParseColorError),
        }
    }
}
