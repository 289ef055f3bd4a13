use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};

/// Pawn pushes and diagonal captures.
///
/// Single push onto an empty cell, double push from the start rank through
/// two empty cells, and diagonal steps only onto enemy-held cells. No
/// en passant and no promotion: a pawn on its last rank has no moves forward.
pub fn pawn_moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
    let mut moves = Vec::with_capacity(4);
    let forward = color.pawn_direction();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.occupant(one_step).is_none() {
            moves.push(one_step);

            if from.rank() == color.pawn_start_rank() {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if board.occupant(two_step).is_none() {
                        moves.push(two_step);
                    }
                }
            }
        }
    }

    for d_file in [-1, 1] {
        let Some(target) = from.offset(forward, d_file) else {
            continue;
        };
        if board
            .occupant(target)
            .is_some_and(|occupant| occupant.color != color)
        {
            moves.push(target);
        }
    }

    moves
}
