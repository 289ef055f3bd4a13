//! FEN-to-GameState parser.
//!
//! Builds the board, piece registry, side to move, carried castling and
//! en-passant fields, and both counters from a six-field Forsyth-Edwards
//! Notation string. The first FEN rank is written to board rank 7.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, ChessErrors> {
    let mut parts = fen.split_whitespace();
    let mut next_field = |name: &'static str| {
        parts
            .next()
            .ok_or_else(|| ChessErrors::InvalidFenField((name, String::new())))
    };

    let board_part = next_field("board")?;
    let side_part = next_field("side-to-move")?;
    let castling_part = next_field("castling")?;
    let en_passant_part = next_field("en-passant")?;
    let halfmove_part = next_field("halfmove")?;
    let fullmove_part = next_field("fullmove")?;

    if let Some(extra) = parts.next() {
        return Err(ChessErrors::InvalidFenField(("trailing", extra.to_owned())));
    }

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let castling_rights = parse_castling_rights(castling_part)?;
    let en_passant_square = parse_en_passant_square(en_passant_part)?;
    let halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| ChessErrors::InvalidFenField(("halfmove", halfmove_part.to_owned())))?;
    let fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| ChessErrors::InvalidFenField(("fullmove", fullmove_part.to_owned())))?;

    GameState::from_parts(
        board,
        side_to_move,
        castling_rights,
        en_passant_square,
        halfmove_clock,
        fullmove_number,
    )
}

fn parse_board(board_part: &str) -> Result<Board, ChessErrors> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidFenRankCount(ranks.len()));
    }

    let mut board = Board::empty();

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = (7 - fen_rank_idx) as u8;
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFenToken(ch));
                }
                file += empty_count as usize;
                continue;
            }

            let (color, piece) = piece_from_fen_char(ch).ok_or(ChessErrors::InvalidFenToken(ch))?;

            if file >= 8 {
                return Err(ChessErrors::InvalidFenRankWidth((
                    (*rank_str).to_owned(),
                    file + 1,
                )));
            }

            let square = Square::new(board_rank, file as u8).ok_or_else(|| {
                ChessErrors::InvalidFenRankWidth(((*rank_str).to_owned(), file + 1))
            })?;
            board.place(piece, color, square)?;
            file += 1;
        }

        if file != 8 {
            return Err(ChessErrors::InvalidFenRankWidth(((*rank_str).to_owned(), file)));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessErrors::InvalidFenField(("side-to-move", side_part.to_owned()))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, ChessErrors> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_LIGHT_KINGSIDE,
            'Q' => rights |= CASTLE_LIGHT_QUEENSIDE,
            'k' => rights |= CASTLE_DARK_KINGSIDE,
            'q' => rights |= CASTLE_DARK_QUEENSIDE,
            _ => {
                return Err(ChessErrors::InvalidFenField((
                    "castling",
                    castling_part.to_owned(),
                )))
            }
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, ChessErrors> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square(en_passant_part)
        .map(Some)
        .map_err(|_| ChessErrors::InvalidFenField(("en-passant", en_passant_part.to_owned())))
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let piece = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, piece))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::utils::render_game_state::render_game_state;

    #[test]
    fn parse_starting_fen_and_render_board() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_game_state(&game_state));

        assert_eq!(game_state.side_to_move(), Color::Light);
        assert_eq!(game_state.fullmove_number(), 1);
        assert_eq!(game_state.halfmove_clock(), 0);
        assert_eq!(
            game_state.castling_rights(),
            CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE | CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE
        );
        assert_eq!(game_state.en_passant_square(), None);

        let e1 = "e1".parse::<Square>().expect("e1 should parse");
        let d8 = "d8".parse::<Square>().expect("d8 should parse");
        let king = game_state.piece_at(e1).expect("white king starts on e1");
        assert_eq!((king.kind, king.color), (PieceKind::King, Color::Light));
        let queen = game_state.piece_at(d8).expect("black queen starts on d8");
        assert_eq!((queen.kind, queen.color), (PieceKind::Queen, Color::Dark));
    }

    #[test]
    fn carried_fields_are_kept() {
        let game_state = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 b - d6 12 40").expect("FEN should parse");
        assert_eq!(game_state.side_to_move(), Color::Dark);
        assert_eq!(game_state.en_passant_square().map(|s| s.to_string()), Some("d6".to_owned()));
        assert_eq!(game_state.halfmove_clock(), 12);
        assert_eq!(game_state.fullmove_number(), 40);
    }

    #[test]
    fn malformed_layouts_are_configuration_errors() {
        assert_eq!(
            parse_fen("8/8/8/8/8/8/4K2k w - - 0 1").err(),
            Some(ChessErrors::InvalidFenRankCount(7))
        );
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4X2K w - - 0 1").err(),
            Some(ChessErrors::InvalidFenToken('X'))
        );
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K2 w - - 0 1"),
            Err(ChessErrors::InvalidFenRankWidth(_))
        ));
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K3R w - - 0 1"),
            Err(ChessErrors::InvalidFenRankWidth(_))
        ));
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 x - - 0 1"),
            Err(ChessErrors::InvalidFenField(("side-to-move", _)))
        ));
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0"),
            Err(ChessErrors::InvalidFenField(("fullmove", _)))
        ));
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w Kx - 0 1"),
            Err(ChessErrors::InvalidFenField(("castling", _)))
        ));
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1 extra"),
            Err(ChessErrors::InvalidFenField(("trailing", _)))
        ));
    }

    #[test]
    fn overlong_rank_is_a_width_error_not_a_board_error() {
        // Enough empty runs to wrap a byte-sized file counter back to a1.
        let fen = format!("4k3/8/8/8/8/8/8/K7{}K w - - 0 1", "8".repeat(31));
        assert!(matches!(
            parse_fen(&fen),
            Err(ChessErrors::InvalidFenRankWidth(_))
        ));

        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/K7Q w - - 0 1"),
            Err(ChessErrors::InvalidFenRankWidth((_, 9)))
        ));
    }
}
