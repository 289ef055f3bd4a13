//! Shared value types for the mailbox board model.
//!
//! Colors, piece kinds, board coordinates and the carried-but-inert castling
//! flags live here so every other subsystem can import them from one place.

use std::fmt;

pub use crate::game_state::board::{Board, PieceId};
pub use crate::game_state::game_state::GameState;
pub use crate::game_state::piece::Piece;
pub use crate::game_state::snapshot::PositionSnapshot;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Rank step a pawn of this color advances by.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    #[inline]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::Light => 1,
            Color::Dark => 6,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "white"),
            Color::Dark => write!(f, "black"),
        }
    }
}

/// Piece kind (color is carried separately on the piece record).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// FEN letter, uppercase for Light and lowercase for Dark.
    pub const fn fen_char(self, color: Color) -> char {
        let ch = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match color {
            Color::Light => ch.to_ascii_uppercase(),
            Color::Dark => ch,
        }
    }
}

/// Carried castling flags. Parsed and restored, never updated by moves.
pub type CastlingRights = u8;

pub const CASTLE_LIGHT_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_LIGHT_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_DARK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_DARK_QUEENSIDE: CastlingRights = 1 << 3;

/// A board coordinate. Rank 0 is Light's back rank, file 0 is the a-file.
///
/// Values can only be built through the checked constructors, so a `Square`
/// is always on the board. Captured pieces hold `None` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    rank: u8,
    file: u8,
}

impl Square {
    #[inline]
    pub const fn new(rank: u8, file: u8) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Self { rank, file })
        } else {
            None
        }
    }

    /// Square from a `0..=63` cell index (`rank * 8 + file`).
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < 64 {
            Some(Self {
                rank: (index / 8) as u8,
                file: (index % 8) as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// Step by `(d_rank, d_file)`; `None` when the result leaves the board.
    #[inline]
    pub fn offset(self, d_rank: i8, d_file: i8) -> Option<Self> {
        let rank = self.rank as i8 + d_rank;
        let file = self.file as i8 + d_file;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Self {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).filter_map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            char::from(b'a' + self.file),
            char::from(b'1' + self.rank)
        )
    }
}

/// A from/to pair as chosen by a caller of the legality engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_index_matches_rank_and_file() {
        let e4 = Square::new(3, 4).expect("e4 is on the board");
        assert_eq!(e4.index(), 28);
        assert_eq!(Square::from_index(28), Some(e4));
        assert_eq!(e4.to_string(), "e4");
        assert_eq!(Square::new(8, 0), None);
        assert_eq!(Square::from_index(64), None);
    }

    #[test]
    fn offset_never_wraps_across_edges() {
        let a4 = Square::new(3, 0).expect("a4 is on the board");
        let h4 = Square::new(3, 7).expect("h4 is on the board");
        assert_eq!(a4.offset(0, -1), None);
        assert_eq!(h4.offset(0, 1), None);
        assert_eq!(h4.offset(1, -1).map(|s| s.to_string()), Some("g5".to_owned()));
    }

    #[test]
    fn all_squares_are_distinct() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0].to_string(), "a1");
        assert_eq!(squares[63].to_string(), "h8");
    }

    #[test]
    fn fen_letters_follow_color_case() {
        assert_eq!(PieceKind::Knight.fen_char(Color::Light), 'N');
        assert_eq!(PieceKind::Knight.fen_char(Color::Dark), 'n');
        assert_eq!(Color::Light.opposite(), Color::Dark);
    }
}
