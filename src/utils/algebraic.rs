//! Square and move conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and `Square`
//! values, and reads coordinate moves such as `e2e4` or `e2-e4`.

use std::str::FromStr;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{ChessMove, Square};

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    Square::new(rank - b'1', file - b'a')
        .ok_or_else(|| ChessErrors::InvalidAlgebraicString(square.to_owned()))
}

#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

/// Parse a coordinate move such as "e2e4" or "e2-e4".
pub fn algebraic_to_move(text: &str) -> Result<ChessMove, ChessErrors> {
    let compact: String = text.trim().chars().filter(|ch| *ch != '-').collect();
    if compact.len() != 4 || !compact.is_ascii() {
        return Err(ChessErrors::InvalidAlgebraicString(text.to_owned()));
    }

    Ok(ChessMove {
        from: algebraic_to_square(&compact[..2])?,
        to: algebraic_to_square(&compact[2..])?,
    })
}

impl FromStr for Square {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_square(s)
    }
}

impl FromStr for ChessMove {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_move(s)
    }
}
