use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::ray_moves::step_moves;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

#[inline]
pub fn knight_moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
    step_moves(board, from, color, &KNIGHT_OFFSETS)
}

#[cfg(test)]
mod tests {
    use super::knight_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, PieceKind, Square};

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn knight_from_d4_has_eight_targets() {
        assert_eq!(knight_moves(&Board::empty(), sq("d4"), Color::Light).len(), 8);
    }

    #[test]
    fn knight_in_corner_skips_own_pieces_and_captures_enemies() {
        let mut board = Board::empty();
        board
            .place(PieceKind::Pawn, Color::Light, sq("b3"))
            .expect("b3 is empty");
        board
            .place(PieceKind::Pawn, Color::Dark, sq("c2"))
            .expect("c2 is empty");

        assert_eq!(knight_moves(&board, sq("a1"), Color::Light), vec![sq("c2")]);
    }
}
