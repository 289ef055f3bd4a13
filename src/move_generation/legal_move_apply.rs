//! Executing a requested move on a `GameState`.
//!
//! `move_piece` checks the request against the legality filter, moves the
//! piece (parking any captured piece off the board), flips the side to move,
//! advances the counters, and appends a snapshot to history, discarding any
//! redo branch first.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::algebraic_to_move;

/// The piece removed by a capture and where it stood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capture {
    pub kind: PieceKind,
    pub color: Color,
    pub square: Square,
}

/// Result of a move request. Rejections leave the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    RejectedEmptySource,
    RejectedSameSquare,
    RejectedWrongTurn,
    RejectedIllegal,
    Executed { capture: Option<Capture> },
}

impl MoveOutcome {
    #[inline]
    pub fn is_executed(&self) -> bool {
        matches!(self, MoveOutcome::Executed { .. })
    }

    pub fn capture(&self) -> Option<Capture> {
        match self {
            MoveOutcome::Executed { capture } => *capture,
            _ => None,
        }
    }

    pub fn rejection_reason(&self) -> Option<&'static str> {
        match self {
            MoveOutcome::RejectedEmptySource => Some("no piece on the source square"),
            MoveOutcome::RejectedSameSquare => Some("source and destination are the same square"),
            MoveOutcome::RejectedWrongTurn => Some("piece does not belong to the side to move"),
            MoveOutcome::RejectedIllegal => Some("destination is not a legal move"),
            MoveOutcome::Executed { .. } => None,
        }
    }
}

impl GameState {
    /// Move the piece on `from` to `to` if that is a legal move.
    ///
    /// `Err` is returned only when the board is found inconsistent.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<MoveOutcome, ChessErrors> {
        let Some(piece) = self.board.occupant(from).copied() else {
            return Ok(MoveOutcome::RejectedEmptySource);
        };
        if from == to {
            return Ok(MoveOutcome::RejectedSameSquare);
        }
        if piece.color != self.side_to_move {
            return Ok(MoveOutcome::RejectedWrongTurn);
        }
        if !self.legal_moves(from)?.contains(&to) {
            return Ok(MoveOutcome::RejectedIllegal);
        }

        let displacement = self.board.make_move(from, to)?;
        let capture = displacement
            .captured
            .and_then(|id| self.board.piece(id))
            .map(|captured| Capture {
                kind: captured.kind,
                color: captured.color,
                square: to,
            });

        self.side_to_move = self.side_to_move.opposite();
        self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        if self.side_to_move == Color::Light {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.check_invariants()?;

        self.history.truncate(self.ply + 1);
        self.move_log.truncate(self.ply);
        let snapshot = self.snapshot();
        self.history.push(snapshot);
        self.move_log.push(ChessMove { from, to });
        self.ply += 1;

        Ok(MoveOutcome::Executed { capture })
    }

    /// Play coordinate moves such as `"e2e4"` in order, stopping at the first
    /// one that is refused.
    pub fn play_moves(&mut self, moves: &[&str]) -> Result<Vec<MoveOutcome>, ChessErrors> {
        let mut outcomes = Vec::with_capacity(moves.len());
        for text in moves {
            let mv = algebraic_to_move(text)?;
            let outcome = self.move_piece(mv.from, mv.to)?;
            if let Some(reason) = outcome.rejection_reason() {
                return Err(ChessErrors::MoveRejected(((*text).to_owned(), reason.to_owned())));
            }
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }
}
