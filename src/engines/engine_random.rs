//! Random-move engine.
//!
//! Selects uniformly from the legal moves of the side to move. Used for
//! diagnostics, randomized testing and the demo driver.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::game_state::GameState;

pub struct RandomEngine {
    rng: StdRng,
    seed: Option<u64>,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            seed: None,
        }
    }

    /// Reproducible engine; `new_game` rewinds it to the same stream.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Mailbox Random"
    }

    fn new_game(&mut self) {
        if let Some(seed) = self.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
    }

    fn choose_move(&mut self, game_state: &mut GameState) -> Result<EngineOutput, ChessErrors> {
        let legal_moves = game_state.all_legal_moves()?;

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        out.best_move = legal_moves.choose(&mut self.rng).copied();
        Ok(out)
    }
}
