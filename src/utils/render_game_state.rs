//! Terminal-oriented Unicode board renderer.
//!
//! Draws the mailbox grid with file and rank labels, followed by the side to
//! move and the captured pieces of each color. Used by the demo driver,
//! tests and diagnostics in text environments.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Render the position to a Unicode string for terminal output.
///
/// Rank 8 is printed first, so Light's pieces end up at the bottom.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        let label = char::from(b'1' + rank);
        out.push(label);
        out.push(' ');

        for file in 0..8u8 {
            let glyph = Square::new(rank, file)
                .and_then(|square| game_state.piece_at(square))
                .map(|piece| piece_to_unicode(piece.color, piece.kind))
                .unwrap_or('·');
            out.push(glyph);

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(label);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h\n");
    out.push_str(&format!("Side to move: {}\n", game_state.side_to_move()));

    for color in [Color::Light, Color::Dark] {
        out.push_str(&format!(
            "Captured {}: {}\n",
            color,
            render_captured(&game_state.captured_pieces(color), color)
        ));
    }

    out
}

fn render_captured(kinds: &[PieceKind], color: Color) -> String {
    if kinds.is_empty() {
        return "-".to_owned();
    }
    kinds
        .iter()
        .map(|kind| piece_to_unicode(color, *kind).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    match (color, piece) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::render_game_state;
    use crate::game_state::game_state::GameState;

    #[test]
    fn start_position_rows_and_footer() {
        let text = render_game_state(&GameState::new_game());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[5], "4 · · · · · · · · 4");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
        assert_eq!(lines[10], "Side to move: white");
        assert_eq!(lines[11], "Captured white: -");
        assert_eq!(lines[12], "Captured black: -");
    }

    #[test]
    fn captures_are_listed_per_color() {
        let mut game = GameState::new_game();
        game.play_moves(&["e2e4", "d7d5", "e4d5", "d8d5"])
            .expect("opening moves are legal");

        let text = render_game_state(&game);
        assert!(text.contains("Side to move: white\n"));
        assert!(text.contains("Captured white: ♙\n"));
        assert!(text.contains("Captured black: ♟\n"));
        assert!(text.contains("5 · · · ♛ · · · · 5"));
    }
}
