//! Compact text notation for boards.
//!
//! A board is nine glyphs in row-major order: `X`, `O`, and one of
//! `.`, `-`, `_` for an empty square. Whitespace, `|` and `/` are
//! ignored so rows can be separated for readability:
//! `"XO./.X./..O"` and `"XO. .X. ..O"` are the same board.

use super::{Board, Player, Square};
use std::str::FromStr;
use tracing::instrument;

/// Error returned when board notation cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// Notation did not contain exactly nine squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(usize),

    /// A character that is not a square glyph or separator.
    #[display("Unexpected character {:?} in board", _0)]
    InvalidGlyph(char),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for c in s.chars() {
            let square = match c {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '-' | '_' => Square::Empty,
                '|' | '/' => continue,
                c if c.is_whitespace() => continue,
                c => return Err(BoardParseError::InvalidGlyph(c)),
            };
            squares.push(square);
        }

        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|v: Vec<Square>| BoardParseError::WrongLength(v.len()))?;
        Ok(Board::from_squares(squares))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, square) in self.squares().iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                write!(f, "/")?;
            }
            write!(f, "{}", square.glyph())?;
        }
        Ok(())
    }
}
