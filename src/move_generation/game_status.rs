//! Terminal-state queries for the side to move.

use std::fmt;

use crate::chess_errors::ChessErrors;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GameStatus::InProgress => "In Progress",
            GameStatus::Check => "Check",
            GameStatus::Checkmate => "Checkmate",
            GameStatus::Stalemate => "Stalemate",
        };
        f.write_str(label)
    }
}

impl GameState {
    pub fn status(&mut self) -> Result<GameStatus, ChessErrors> {
        let side = self.side_to_move;
        let in_check = self.in_check(side);
        let can_move = self.has_legal_moves(side)?;

        Ok(match (in_check, can_move) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::InProgress,
        })
    }

    #[inline]
    pub fn is_checkmate(&mut self) -> Result<bool, ChessErrors> {
        Ok(self.status()? == GameStatus::Checkmate)
    }

    #[inline]
    pub fn is_stalemate(&mut self) -> Result<bool, ChessErrors> {
        Ok(self.status()? == GameStatus::Stalemate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Color;

    #[test]
    fn back_rank_mate_by_rook_and_queen() {
        let mut game =
            GameState::from_fen("6k1/8/8/8/8/8/5PPP/3qr1K1 w - - 0 1").expect("FEN should parse");
        assert!(game.in_check(Color::Light));
        assert!(!game.has_legal_moves(Color::Light).expect("query succeeds"));
        assert!(game.is_checkmate().expect("query succeeds"));
        assert!(!game.is_stalemate().expect("query succeeds"));
        assert_eq!(game.status().expect("query succeeds"), GameStatus::Checkmate);
    }

    #[test]
    fn back_rank_mate_with_king_on_its_home_square() {
        let mut game =
            GameState::from_fen("4k3/8/8/8/8/8/3PPP2/r2QK1q1 w - - 0 1").expect("FEN should parse");
        assert!(game.in_check(Color::Light));
        assert!(game.all_legal_moves().expect("move generation succeeds").is_empty());
        assert!(game.is_checkmate().expect("query succeeds"));
        assert_eq!(game.status().expect("query succeeds"), GameStatus::Checkmate);
    }

    #[test]
    fn fools_mate_from_the_initial_layout() {
        let mut game = GameState::new_game();
        game.play_moves(&["f2f3", "e7e5", "g2g4"]).expect("opening moves are legal");
        assert_eq!(game.status().expect("query succeeds"), GameStatus::InProgress);

        game.play_moves(&["d8h4"]).expect("queen check is legal");
        assert!(game.is_checkmate().expect("query succeeds"));
        assert!(game.all_legal_moves().expect("move generation succeeds").is_empty());

        game.undo().expect("no corruption");
        assert!(!game.is_checkmate().expect("query succeeds"));
        assert!(!game.in_check(Color::Light));
    }

    #[test]
    fn stalemate_is_not_checkmate() {
        let mut game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        assert!(!game.in_check(Color::Dark));
        assert!(game.is_stalemate().expect("query succeeds"));
        assert!(!game.is_checkmate().expect("query succeeds"));
        assert!(game.status().expect("query succeeds").is_terminal());
    }

    #[test]
    fn check_with_escape_is_not_terminal() {
        let mut game = GameState::from_fen("4k3/8/8/8/8/8/8/r3K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(game.status().expect("query succeeds"), GameStatus::Check);
        assert_eq!(GameStatus::Check.to_string(), "Check");
    }
}
