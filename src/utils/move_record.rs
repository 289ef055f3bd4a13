//! Printable move history.
//!
//! Writes the moves leading to the current position as numbered coordinate
//! movetext (`1. e2e4 e7e5 2. g1f3`), headed by tag lines in the usual
//! `[Key "Value"]` form. Undone moves are not part of the record.

use chrono::Local;

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;

/// Render the move record with today's date in the header.
pub fn render_move_history(game_state: &GameState, result: &str) -> String {
    let date = Local::now().format("%Y.%m.%d").to_string();
    render_move_history_dated(game_state, result, &date)
}

pub fn render_move_history_dated(game_state: &GameState, result: &str, date: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("[Date \"{}\"]\n", escape_tag_value(date)));
    out.push_str(&format!("[Result \"{}\"]\n", normalize_result(result)));
    out.push('\n');

    let moves = game_state.moves_played();
    let mut movetext_parts = Vec::<String>::with_capacity(moves.len() + 2);

    // Counted from the first recorded position, not the current one.
    let (first_side, first_number) = match game_state.history.first() {
        Some(initial) => (initial.side_to_move, initial.fullmove_number),
        None => (Color::Light, 1),
    };
    let mut number = first_number;

    for (ply, mv) in moves.iter().enumerate() {
        let mover = if ply % 2 == 0 {
            first_side
        } else {
            first_side.opposite()
        };
        match mover {
            Color::Light => movetext_parts.push(format!("{number}. {mv}")),
            Color::Dark if ply == 0 => movetext_parts.push(format!("{number}... {mv}")),
            Color::Dark => movetext_parts.push(mv.to_string()),
        }
        if mover == Color::Dark {
            number += 1;
        }
    }

    movetext_parts.push(normalize_result(result).to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');
    out
}

fn is_result_token(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}

fn normalize_result(result: &str) -> &str {
    if is_result_token(result) {
        result
    } else {
        "*"
    }
}

fn escape_tag_value(value: &str) -> String {
    value.replace('"', "\\\"")
}
