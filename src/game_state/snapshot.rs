use crate::game_state::board::Cells;
use crate::game_state::chess_types::{CastlingRights, Color, Square};

/// Everything needed to put a `GameState` back exactly as it was.
///
/// Owned values only. `cells` is kept to cross-check a restore; the restore
/// itself rebuilds the grid from `piece_squares`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionSnapshot {
    pub cells: Cells,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
    pub piece_squares: Vec<Option<Square>>,
}
