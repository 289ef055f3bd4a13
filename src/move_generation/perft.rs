//! Move-path counting over the legality engine.
//!
//! Every node is reached through `move_piece` and left through `undo`, so a
//! perft run exercises the simulate/revert filter and the history restore on
//! every edge. Counts match the published tables for positions and depths
//! where castling, en passant and promotion cannot occur.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::ChessMove;
use crate::game_state::game_state::GameState;

/// Number of legal move paths of length `depth` from `game_state`.
///
/// Works on a private clone; the caller's history is untouched.
pub fn perft(game_state: &GameState, depth: u8) -> Result<u64, ChessErrors> {
    let mut scratch = game_state.clone();
    perft_recurse(&mut scratch, depth)
}

/// Per-root-move breakdown of `perft`, in generation order.
pub fn perft_divide(game_state: &GameState, depth: u8) -> Result<Vec<(ChessMove, u64)>, ChessErrors> {
    if depth == 0 {
        return Ok(Vec::new());
    }

    let mut scratch = game_state.clone();
    let mut divide = Vec::new();
    for mv in scratch.all_legal_moves()? {
        play(&mut scratch, mv)?;
        let nodes = perft_recurse(&mut scratch, depth - 1)?;
        scratch.undo()?;
        divide.push((mv, nodes));
    }
    Ok(divide)
}

fn perft_recurse(game_state: &mut GameState, depth: u8) -> Result<u64, ChessErrors> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = game_state.all_legal_moves()?;
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0u64;
    for mv in moves {
        play(game_state, mv)?;
        nodes += perft_recurse(game_state, depth - 1)?;
        game_state.undo()?;
    }
    Ok(nodes)
}

fn play(game_state: &mut GameState, mv: ChessMove) -> Result<(), ChessErrors> {
    let outcome = game_state.move_piece(mv.from, mv.to)?;
    match outcome.rejection_reason() {
        None => Ok(()),
        Some(reason) => Err(ChessErrors::InvariantViolation(format!(
            "generated move {mv} was refused: {reason}"
        ))),
    }
}
