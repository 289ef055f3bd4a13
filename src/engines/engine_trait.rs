//! Move-selection abstraction layered on top of the legality engine.
//!
//! Engines see a mutable `GameState` because legality queries simulate moves
//! in place; an engine must leave the position as it found it.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::ChessMove;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<ChessMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, game_state: &mut GameState) -> Result<EngineOutput, ChessErrors>;
}
