//! Errors used throughout the board model.
//!
//! `ChessErrors` is the single error type of the crate. It covers three
//! families with very different handling:
//! - construction-time configuration errors (malformed FEN layouts, missing
//!   or duplicated kings). These are fatal at startup.
//! - caller input errors that cannot be expressed as an outcome enum
//!   (unparsable coordinates, a rejected move inside a scripted sequence).
//! - `InvariantViolation`, raised when the cell grid and the piece registry
//!   disagree. This means the engine itself is broken; the board must not be
//!   queried any further.
//!
//! Illegal moves, moves from empty squares and undo/redo past the ends of
//! history are *not* errors: they come back as `MoveOutcome` / `HistoryStep`
//! values and leave the game untouched.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, Square};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// An algebraic coordinate or move string failed to parse.
    InvalidAlgebraicString(String),

    /// A FEN field is missing, extra, or has an unusable value.
    ///
    /// Payload: (field name, offending text).
    InvalidFenField((&'static str, String)),

    /// The board layout did not contain exactly eight ranks.
    InvalidFenRankCount(usize),

    /// Unrecognised character inside the board layout.
    InvalidFenToken(char),

    /// A rank of the board layout did not sum to eight files.
    ///
    /// Payload: (rank as written, counted files).
    InvalidFenRankWidth((String, usize)),

    /// The layout has no king for this color.
    MissingKing(Color),

    /// The layout has more than one king for this color.
    DuplicateKing(Color),

    /// A move inside a scripted sequence was refused.
    ///
    /// Payload: the move text and the reason it was refused.
    MoveRejected((String, String)),

    /// Grid and registry are out of sync.
    InvariantViolation(String),
}

impl ChessErrors {
    pub(crate) fn cell_mismatch(square: Square, detail: &str) -> Self {
        ChessErrors::InvariantViolation(format!("cell {square}: {detail}"))
    }
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidAlgebraicString(s) => {
                write!(f, "invalid algebraic string: {s}")
            }
            ChessErrors::InvalidFenField((field, value)) => {
                write!(f, "invalid FEN {field} field: {value:?}")
            }
            ChessErrors::InvalidFenRankCount(n) => {
                write!(f, "board layout must contain 8 ranks, found {n}")
            }
            ChessErrors::InvalidFenToken(ch) => {
                write!(f, "invalid piece character '{ch}' in board layout")
            }
            ChessErrors::InvalidFenRankWidth((rank, files)) => {
                write!(f, "board rank {rank:?} covers {files} files instead of 8")
            }
            ChessErrors::MissingKing(color) => write!(f, "layout has no {color} king"),
            ChessErrors::DuplicateKing(color) => {
                write!(f, "layout has more than one {color} king")
            }
            ChessErrors::MoveRejected((mv, reason)) => write!(f, "move {mv} rejected: {reason}"),
            ChessErrors::InvariantViolation(msg) => {
                write!(f, "board invariant violated: {msg}")
            }
        }
    }
}

impl Error for ChessErrors {}
