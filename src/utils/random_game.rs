//! Self-play harness for a single engine.
//!
//! Lets one `Engine` choose moves for both sides of a `GameState` until the
//! game ends in checkmate or stalemate, or a ply limit is hit. Every chosen
//! move is checked against the legal move list before it is played.

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::{ChessMove, Color};
use crate::game_state::game_state::GameState;
use crate::move_generation::game_status::GameStatus;
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomGameOutcome {
    LightWinCheckmate,
    DarkWinCheckmate,
    DrawStalemate,
    MaxPlies,
}

impl RandomGameOutcome {
    /// Result token for the move record.
    pub fn result_token(self) -> &'static str {
        match self {
            RandomGameOutcome::LightWinCheckmate => "1-0",
            RandomGameOutcome::DarkWinCheckmate => "0-1",
            RandomGameOutcome::DrawStalemate => "1/2-1/2",
            RandomGameOutcome::MaxPlies => "*",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RandomGameConfig {
    pub max_plies: u16,
    /// Seed for engines built from this config; `None` draws from the OS.
    pub seed: Option<u64>,
    pub verbose: bool,
}

impl Default for RandomGameConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            seed: None,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RandomGameResult {
    pub outcome: RandomGameOutcome,
    pub final_state: GameState,
    pub played_moves: Vec<ChessMove>,
    pub info_lines: Vec<String>,
}

/// Play one game from the standard starting position.
pub fn play_random_game(
    engine: &mut dyn Engine,
    config: &RandomGameConfig,
) -> Result<RandomGameResult, ChessErrors> {
    play_random_game_from_state(engine, GameState::new_game(), config)
}

pub fn play_random_game_from_state(
    engine: &mut dyn Engine,
    mut state: GameState,
    config: &RandomGameConfig,
) -> Result<RandomGameResult, ChessErrors> {
    engine.new_game();

    let mut played_moves = Vec::<ChessMove>::new();
    let mut info_lines = Vec::<String>::new();

    for _ in 0..config.max_plies {
        let status = state.status()?;
        if status.is_terminal() {
            let outcome = match (status, state.side_to_move()) {
                (GameStatus::Checkmate, Color::Light) => RandomGameOutcome::DarkWinCheckmate,
                (GameStatus::Checkmate, Color::Dark) => RandomGameOutcome::LightWinCheckmate,
                _ => RandomGameOutcome::DrawStalemate,
            };
            return Ok(RandomGameResult {
                outcome,
                final_state: state,
                played_moves,
                info_lines,
            });
        }

        let legal_moves = state.all_legal_moves()?;
        let out = engine.choose_move(&mut state)?;
        info_lines.extend(out.info_lines);

        let Some(chosen) = out.best_move else {
            return Err(ChessErrors::MoveRejected((
                "(none)".to_owned(),
                format!(
                    "{} returned no move with {} legal moves available",
                    engine.name(),
                    legal_moves.len()
                ),
            )));
        };
        if !legal_moves.contains(&chosen) {
            return Err(ChessErrors::MoveRejected((
                chosen.to_string(),
                format!("{} returned a move that is not legal", engine.name()),
            )));
        }

        let outcome = state.move_piece(chosen.from, chosen.to)?;
        if let Some(reason) = outcome.rejection_reason() {
            return Err(ChessErrors::MoveRejected((chosen.to_string(), reason.to_owned())));
        }
        played_moves.push(chosen);

        if config.verbose {
            println!("[random_game] ply {} {}", played_moves.len(), chosen);
            println!("{}", render_game_state(&state));
        }
    }

    // The limit can land exactly on a finished game.
    let outcome = match (state.status()?, state.side_to_move()) {
        (GameStatus::Checkmate, Color::Light) => RandomGameOutcome::DarkWinCheckmate,
        (GameStatus::Checkmate, Color::Dark) => RandomGameOutcome::LightWinCheckmate,
        (GameStatus::Stalemate, _) => RandomGameOutcome::DrawStalemate,
        _ => RandomGameOutcome::MaxPlies,
    };

    Ok(RandomGameResult {
        outcome,
        final_state: state,
        played_moves,
        info_lines,
    })
}
