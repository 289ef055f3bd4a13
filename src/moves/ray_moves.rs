//! Shared stepping and ray-casting over the mailbox grid.
//!
//! Leapers (knight, king) test a fixed offset list once each; sliders
//! (bishop, rook, queen) walk each direction until they leave the board or
//! run into a piece. Offsets are `(d_rank, d_file)`.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// `target` may be entered by a piece of `color`: empty or enemy-held.
#[inline]
pub fn is_enterable(board: &Board, target: Square, color: Color) -> bool {
    board
        .occupant(target)
        .map_or(true, |occupant| occupant.color != color)
}

pub fn step_moves(board: &Board, from: Square, color: Color, offsets: &[(i8, i8)]) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&(d_rank, d_file)| from.offset(d_rank, d_file))
        .filter(|&target| is_enterable(board, target, color))
        .collect()
}

pub fn ray_moves(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
) -> Vec<Square> {
    let mut moves = Vec::new();

    for &(d_rank, d_file) in directions {
        let mut current = from;
        while let Some(target) = current.offset(d_rank, d_file) {
            match board.occupant(target) {
                None => moves.push(target),
                Some(occupant) => {
                    if occupant.color != color {
                        moves.push(target);
                    }
                    break;
                }
            }
            current = target;
        }
    }

    moves
}
