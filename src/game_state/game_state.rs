//! Core position state.
//!
//! `GameState` owns the mailbox board and piece registry, the side to move,
//! the carried castling and en-passant fields, both move counters, and the
//! linear snapshot history used for undo/redo. `history[ply]` always
//! describes the current position.
//!
//! A `GameState` is not safe to share between threads while a legality query
//! is running: legality checks make and unmake moves on the live board.
//! Callers wanting concurrent access must serialize it (one owner per game).

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::game_state::snapshot::PositionSnapshot;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_square: Option<Square>,
    pub(crate) halfmove_clock: u16,
    pub(crate) fullmove_number: u16,

    pub(crate) history: Vec<PositionSnapshot>,
    /// `move_log[i]` leads from `history[i]` to `history[i + 1]`.
    pub(crate) move_log: Vec<ChessMove>,
    pub(crate) ply: usize,
}

impl GameState {
    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    /// Assemble a position from already parsed fields.
    ///
    /// Requires exactly one king per color and a consistent board, then
    /// records the initial snapshot.
    pub fn from_parts(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_square: Option<Square>,
        halfmove_clock: u16,
        fullmove_number: u16,
    ) -> Result<Self, ChessErrors> {
        for color in [Color::Light, Color::Dark] {
            let kings = board
                .pieces()
                .iter()
                .filter(|piece| piece.kind == PieceKind::King && piece.color == color)
                .count();
            match kings {
                0 => return Err(ChessErrors::MissingKing(color)),
                1 => {}
                _ => return Err(ChessErrors::DuplicateKing(color)),
            }
        }
        board.validate()?;

        let mut game_state = Self {
            board,
            side_to_move,
            castling_rights,
            en_passant_square,
            halfmove_clock,
            fullmove_number,
            history: Vec::new(),
            move_log: Vec::new(),
            ply: 0,
        };
        let initial = game_state.snapshot();
        game_state.history.push(initial);
        Ok(game_state)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.board.occupant(square)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Number of moves between the initial position and the current one.
    #[inline]
    pub fn ply(&self) -> usize {
        self.ply
    }

    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Moves that led from the initial position to the current one.
    #[inline]
    pub fn moves_played(&self) -> &[ChessMove] {
        &self.move_log[..self.ply]
    }

    #[inline]
    pub fn captured_pieces(&self, color: Color) -> Vec<PieceKind> {
        self.board.captured(color)
    }

    pub fn snapshot(&self) -> PositionSnapshot {
        PositionSnapshot {
            cells: *self.board.cells(),
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            en_passant_square: self.en_passant_square,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            piece_squares: self.board.piece_squares(),
        }
    }

    /// Put every registered piece and every counter back as recorded.
    ///
    /// Nothing is changed unless the rebuilt board matches the snapshot.
    pub(crate) fn restore(&mut self, snapshot: &PositionSnapshot) -> Result<(), ChessErrors> {
        let rebuilt = self.board.with_piece_squares(&snapshot.piece_squares)?;
        if rebuilt.cells() != &snapshot.cells {
            return Err(ChessErrors::InvariantViolation(
                "rebuilt cells differ from the recorded cells".to_owned(),
            ));
        }

        self.board = rebuilt;
        self.side_to_move = snapshot.side_to_move;
        self.castling_rights = snapshot.castling_rights;
        self.en_passant_square = snapshot.en_passant_square;
        self.halfmove_clock = snapshot.halfmove_clock;
        self.fullmove_number = snapshot.fullmove_number;
        Ok(())
    }

    /// Validate the board, asserting in debug builds.
    pub(crate) fn check_invariants(&self) -> Result<(), ChessErrors> {
        let result = self.board.validate();
        debug_assert!(result.is_ok(), "{result:?}");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_has_thirty_two_pieces_and_one_snapshot() {
        let game = GameState::new_game();
        assert_eq!(game.board().pieces().len(), 32);
        assert_eq!(game.side_to_move(), Color::Light);
        assert_eq!(game.history_len(), 1);
        assert_eq!(game.ply(), 0);
        assert!(game.moves_played().is_empty());
        assert_eq!(game.snapshot(), game.history[0]);
    }

    #[test]
    fn kings_are_required_and_unique() {
        assert_eq!(
            GameState::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1").err(),
            Some(ChessErrors::MissingKing(Color::Dark))
        );
        assert_eq!(
            GameState::from_fen("k6k/8/8/8/8/8/8/4K3 w - - 0 1").err(),
            Some(ChessErrors::DuplicateKing(Color::Dark))
        );
    }

    #[test]
    fn restore_rejects_a_snapshot_from_another_registry() {
        let mut game = GameState::new_game();
        let foreign = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1")
            .expect("two kings make a valid layout")
            .snapshot();
        assert!(game.restore(&foreign).is_err());
    }

    #[test]
    fn rejected_restore_keeps_the_current_position() {
        let mut game = GameState::new_game();
        let before = game.snapshot();

        // Same registry size, but the recorded cells disagree with the squares.
        let mut tampered = before.clone();
        tampered.cells.swap(0, 1);
        tampered.side_to_move = Color::Dark;

        assert!(matches!(
            game.restore(&tampered),
            Err(ChessErrors::InvariantViolation(_))
        ));
        assert_eq!(game.snapshot(), before);
    }
}
