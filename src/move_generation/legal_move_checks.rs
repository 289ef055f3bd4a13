//! Attack and check detection.
//!
//! A square counts as attacked when any on-board piece of the attacking color
//! has it among its pseudo-legal destinations. Pawns therefore attack only
//! occupied diagonal cells, which is exactly the case that matters for a king.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    board
        .active_pieces(attacker_color)
        .any(|(_, piece)| piece.possible_moves(board).contains(&square))
}

/// Squares of every `attacker_color` piece that reaches `square`.
pub fn attackers_to_square(board: &Board, square: Square, attacker_color: Color) -> Vec<Square> {
    board
        .active_pieces(attacker_color)
        .filter(|(_, piece)| piece.possible_moves(board).contains(&square))
        .filter_map(|(_, piece)| piece.square)
        .collect()
}

/// `false` when the king of `color` is not on the board.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.king_square(color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

impl GameState {
    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.board.king_square(color)
    }

    /// True iff an opposing piece can reach the king of `color`.
    #[inline]
    pub fn in_check(&self, color: Color) -> bool {
        is_king_in_check(&self.board, color)
    }

    /// Squares of the pieces currently giving check to `color`.
    pub fn checkers(&self, color: Color) -> Vec<Square> {
        self.king_square(color)
            .map(|king_sq| attackers_to_square(&self.board, king_sq, color.opposite()))
            .unwrap_or_default()
    }
}
