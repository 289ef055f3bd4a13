//! Crate root module declarations for the mailbox chess position engine.
//!
//! Exposes the position model (grid, piece registry, snapshots), per-piece
//! move generation, the legality layer with move execution and undo/redo,
//! a random-move engine, and text utilities so the binary, benches and
//! tests can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod piece;
    pub mod snapshot;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod ray_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod game_status;
    pub mod history;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_parser;
    pub mod move_record;
    pub mod random_game;
    pub mod render_game_state;
}
