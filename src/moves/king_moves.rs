use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::ray_moves::step_moves;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

/// Single-step king moves. Castling is never generated.
#[inline]
pub fn king_moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
    step_moves(board, from, color, &KING_OFFSETS)
}
