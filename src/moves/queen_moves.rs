use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::ray_moves::{ray_moves, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};

pub fn queen_moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
    let mut moves = ray_moves(board, from, color, &ORTHOGONAL_DIRECTIONS);
    moves.extend(ray_moves(board, from, color, &DIAGONAL_DIRECTIONS));
    moves
}

#[cfg(test)]
mod tests {
    use super::queen_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Square};

    #[test]
    fn queen_is_rook_plus_bishop() {
        let a1 = Square::new(0, 0).expect("a1 is on the board");
        assert_eq!(queen_moves(&Board::empty(), a1, Color::Light).len(), 21);
    }
}
