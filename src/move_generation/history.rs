//! Undo/redo over the snapshot history.
//!
//! The history is append-only until a move is made away from its tip, at
//! which point `move_piece` truncates the redo branch. Restores rebuild the
//! grid from the recorded piece squares.

use crate::chess_errors::ChessErrors;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryStep {
    Applied,
    NothingToUndo,
    NothingToRedo,
}

impl GameState {
    #[inline]
    pub fn can_undo(&self) -> bool {
        self.ply > 0
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        self.ply + 1 < self.history.len()
    }

    /// Step back one move. A no-op at the start of history.
    pub fn undo(&mut self) -> Result<HistoryStep, ChessErrors> {
        if !self.can_undo() {
            return Ok(HistoryStep::NothingToUndo);
        }
        self.restore_ply(self.ply - 1)?;
        Ok(HistoryStep::Applied)
    }

    /// Step forward one move. A no-op at the tip of history.
    pub fn redo(&mut self) -> Result<HistoryStep, ChessErrors> {
        if !self.can_redo() {
            return Ok(HistoryStep::NothingToRedo);
        }
        self.restore_ply(self.ply + 1)?;
        Ok(HistoryStep::Applied)
    }

    fn restore_ply(&mut self, ply: usize) -> Result<(), ChessErrors> {
        let snapshot = self.history[ply].clone();
        let restored = self.restore(&snapshot);
        debug_assert!(restored.is_ok(), "{restored:?}");
        restored?;
        self.ply = ply;
        self.check_invariants()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::seq::IndexedRandom;
    use rand::SeedableRng;

    use super::*;
    use crate::game_state::chess_types::*;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn undo_and_redo_at_the_ends_are_reported_no_ops() {
        let mut game = GameState::new_game();
        assert_eq!(game.undo().expect("no corruption"), HistoryStep::NothingToUndo);
        assert_eq!(game.redo().expect("no corruption"), HistoryStep::NothingToRedo);

        game.play_moves(&["e2e4"]).expect("e2e4 is legal");
        assert_eq!(game.redo().expect("no corruption"), HistoryStep::NothingToRedo);
        assert_eq!(game.ply(), 1);
    }

    #[test]
    fn undo_restores_captured_piece_and_redo_takes_it_again() {
        let mut game = GameState::new_game();
        game.play_moves(&["e2e4", "d7d5"]).expect("opening moves are legal");
        let before_capture = game.snapshot();

        game.play_moves(&["e4d5"]).expect("capture is legal");
        let after_capture = game.snapshot();
        assert_eq!(game.captured_pieces(Color::Dark).len(), 1);

        assert_eq!(game.undo().expect("no corruption"), HistoryStep::Applied);
        assert_eq!(game.snapshot(), before_capture);
        assert!(game.captured_pieces(Color::Dark).is_empty());
        let pawn = game.piece_at(sq("d5")).expect("pawn is back on d5");
        assert_eq!((pawn.kind, pawn.color), (PieceKind::Pawn, Color::Dark));
        assert_eq!(game.side_to_move(), Color::Light);

        assert_eq!(game.redo().expect("no corruption"), HistoryStep::Applied);
        assert_eq!(game.snapshot(), after_capture);
        assert_eq!(game.moves_played().len(), 3);
    }

    #[test]
    fn new_move_after_undo_discards_the_redo_branch() {
        let mut game = GameState::new_game();
        game.play_moves(&["e2e4", "e7e5", "g1f3"]).expect("opening moves are legal");
        game.undo().expect("no corruption");
        game.undo().expect("no corruption");
        assert!(game.can_redo());
        assert_eq!(game.history_len(), 4);

        game.play_moves(&["c7c5"]).expect("c7c5 is legal");
        assert!(!game.can_redo());
        assert_eq!(game.history_len(), 3);
        assert_eq!(game.redo().expect("no corruption"), HistoryStep::NothingToRedo);
        assert_eq!(
            game.moves_played().iter().map(|m| m.to_string()).collect::<Vec<_>>(),
            vec!["e2e4", "c7c5"]
        );
        assert!(game.piece_at(sq("e5")).is_none());
        assert!(game.piece_at(sq("c5")).is_some());
    }

    #[test]
    fn undo_all_the_way_returns_to_the_initial_position() {
        let mut game = GameState::new_game();
        let initial = game.snapshot();
        game.play_moves(&["d2d4", "g8f6", "c2c4", "e7e6", "b1c3", "f8b4"])
            .expect("opening moves are legal");

        while game.can_undo() {
            game.undo().expect("no corruption");
        }
        assert_eq!(game.snapshot(), initial);
        assert_eq!(game.fullmove_number(), 1);
        assert_eq!(game.halfmove_clock(), 0);
        assert_eq!(game.all_legal_moves().expect("move generation succeeds").len(), 20);
    }

    #[test]
    fn random_games_round_trip_through_history() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..6 {
            let mut game = GameState::new_game();
            let mut states = vec![game.snapshot()];

            for _ in 0..40 {
                let moves = game.all_legal_moves().expect("move generation succeeds");
                let Some(mv) = moves.choose(&mut rng).copied() else {
                    break;
                };
                game.move_piece(mv.from, mv.to).expect("legal move executes");
                states.push(game.snapshot());
            }

            for expected in states.iter().rev().skip(1) {
                assert_eq!(game.undo().expect("no corruption"), HistoryStep::Applied);
                assert_eq!(&game.snapshot(), expected);
                game.board().validate().expect("board stays consistent");
            }
            assert_eq!(game.undo().expect("no corruption"), HistoryStep::NothingToUndo);

            for expected in states.iter().skip(1) {
                assert_eq!(game.redo().expect("no corruption"), HistoryStep::Applied);
                assert_eq!(&game.snapshot(), expected);
            }
        }
    }
}
