use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::ray_moves::{ray_moves, ORTHOGONAL_DIRECTIONS};

#[inline]
pub fn rook_moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
    ray_moves(board, from, color, &ORTHOGONAL_DIRECTIONS)
}
