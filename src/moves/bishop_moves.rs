use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::ray_moves::{ray_moves, DIAGONAL_DIRECTIONS};

#[inline]
pub fn bishop_moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
    ray_moves(board, from, color, &DIAGONAL_DIRECTIONS)
}
