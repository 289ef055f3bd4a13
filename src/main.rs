use std::env;
use std::process::ExitCode;

use mailbox_chess::chess_errors::ChessErrors;
use mailbox_chess::engines::engine_random::RandomEngine;
use mailbox_chess::engines::engine_trait::Engine;
use mailbox_chess::utils::move_record::render_move_history;
use mailbox_chess::utils::random_game::{play_random_game, RandomGameConfig};
use mailbox_chess::utils::render_game_state::render_game_state;

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<RandomGameConfig, String> {
    let mut config = RandomGameConfig::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--verbose" | "-v" => config.verbose = true,
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                let seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("invalid seed: {value}"))?;
                config.seed = Some(seed);
            }
            "--max-plies" => {
                let value = args.next().ok_or("--max-plies needs a value")?;
                config.max_plies = value
                    .parse::<u16>()
                    .map_err(|_| format!("invalid ply limit: {value}"))?;
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    Ok(config)
}

fn run(config: &RandomGameConfig) -> Result<(), ChessErrors> {
    let mut engine = match config.seed {
        Some(seed) => RandomEngine::with_seed(seed),
        None => RandomEngine::new(),
    };
    println!("{} playing both sides", engine.name());

    let mut result = play_random_game(&mut engine, config)?;
    let status = result.final_state.status()?;

    println!("{}", render_game_state(&result.final_state));
    println!("Status: {status}");
    println!("Plies: {}", result.played_moves.len());
    println!();
    print!(
        "{}",
        render_move_history(&result.final_state, result.outcome.result_token())
    );
    Ok(())
}

fn main() -> ExitCode {
    let config = match parse_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("usage: mailbox_chess [--verbose] [--seed N] [--max-plies N]");
            return ExitCode::from(2);
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
