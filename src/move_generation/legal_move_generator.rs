//! Legality filter over pseudo-legal piece moves.
//!
//! Each candidate destination is made on the live board, the mover's king is
//! tested for attack, and the move is unmade again before the next candidate.
//! The unmake happens in the drop of `SimulatedMove`, so it runs on every
//! exit path.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::MAX_MOVES_HINT;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;

impl GameState {
    /// Apply `from -> to` in place, run `probe` on the resulting board, and
    /// take the move back before returning.
    pub fn with_simulated_move<R>(
        &mut self,
        from: Square,
        to: Square,
        probe: impl FnOnce(&Board) -> R,
    ) -> Result<R, ChessErrors> {
        let simulated = self.board.simulate(from, to)?;
        Ok(probe(&simulated))
    }

    /// Legal destinations of the piece on `square`, judged against the king
    /// of the side to move. Empty for an empty square.
    pub fn legal_moves(&mut self, square: Square) -> Result<Vec<Square>, ChessErrors> {
        self.legal_moves_for_color(square, self.side_to_move)
    }

    /// Legal destinations of the piece on `square`, judged against the king
    /// of `king_color`.
    pub fn legal_moves_for_color(
        &mut self,
        square: Square,
        king_color: Color,
    ) -> Result<Vec<Square>, ChessErrors> {
        let candidates = self.board.possible_moves_from(square);
        if candidates.is_empty() {
            return Ok(candidates);
        }

        #[cfg(debug_assertions)]
        let before = self.board.clone();

        let mut legal = Vec::with_capacity(candidates.len());
        for to in candidates {
            let exposes_king =
                self.with_simulated_move(square, to, |board| is_king_in_check(board, king_color))?;

            #[cfg(debug_assertions)]
            debug_assert_eq!(self.board, before, "simulating {square}{to} did not revert");

            if !exposes_king {
                legal.push(to);
            }
        }

        Ok(legal)
    }

    /// Every legal move of the side to move.
    pub fn all_legal_moves(&mut self) -> Result<Vec<ChessMove>, ChessErrors> {
        let color = self.side_to_move;
        let mut moves = Vec::with_capacity(MAX_MOVES_HINT);
        for from in self.origins(color) {
            for to in self.legal_moves_for_color(from, color)? {
                moves.push(ChessMove { from, to });
            }
        }
        Ok(moves)
    }

    /// True iff any on-board piece of `color` has a legal move.
    pub fn has_legal_moves(&mut self, color: Color) -> Result<bool, ChessErrors> {
        for from in self.origins(color) {
            if !self.legal_moves_for_color(from, color)?.is_empty() {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn origins(&self, color: Color) -> Vec<Square> {
        self.board
            .active_pieces(color)
            .filter_map(|(_, piece)| piece.square)
            .collect()
    }
}
