use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

/// One entry of the piece registry.
///
/// Registry entries are never removed. A captured piece keeps its slot with
/// `square == None` so snapshots can address pieces by registry index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub square: Option<Square>,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Self {
            kind,
            color,
            square: Some(square),
        }
    }

    #[inline]
    pub const fn is_captured(&self) -> bool {
        self.square.is_none()
    }

    pub const fn fen_char(&self) -> char {
        self.kind.fen_char(self.color)
    }

    /// Pseudo-legal destinations on `board`. Ignores check entirely.
    pub fn possible_moves(&self, board: &Board) -> Vec<Square> {
        let Some(from) = self.square else {
            return Vec::new();
        };

        match self.kind {
            PieceKind::Pawn => pawn_moves(board, from, self.color),
            PieceKind::Knight => knight_moves(board, from, self.color),
            PieceKind::Bishop => bishop_moves(board, from, self.color),
            PieceKind::Rook => rook_moves(board, from, self.color),
            PieceKind::Queen => queen_moves(board, from, self.color),
            PieceKind::King => king_moves(board, from, self.color),
        }
    }
}
