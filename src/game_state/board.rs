//! Mailbox grid plus the piece registry it points into.
//!
//! `cells` maps each of the 64 squares to an optional registry index and
//! `pieces` records every piece ever placed. The two views must agree in both
//! directions after every mutation: an on-board piece sits in the cell its
//! `square` names, every occupied cell points at a piece whose `square` is
//! that cell, and captured pieces appear in no cell.

use std::ops::Deref;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::piece::Piece;

/// Stable registry index of a piece.
pub type PieceId = usize;

/// The cell contents of a whole board.
pub type Cells = [Option<PieceId>; 64];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Cells,
    pieces: Vec<Piece>,
}

/// Bookkeeping needed to take back a `make_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Displacement {
    pub from: Square,
    pub to: Square,
    pub mover: PieceId,
    pub captured: Option<PieceId>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [None; 64],
            pieces: Vec::new(),
        }
    }

    /// Register a new piece on an empty square.
    pub fn place(
        &mut self,
        kind: PieceKind,
        color: Color,
        square: Square,
    ) -> Result<PieceId, ChessErrors> {
        if self.cells[square.index()].is_some() {
            return Err(ChessErrors::cell_mismatch(square, "placing onto an occupied cell"));
        }
        let id = self.pieces.len();
        self.pieces.push(Piece::new(kind, color, square));
        self.cells[square.index()] = Some(id);
        Ok(id)
    }

    #[inline]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    #[inline]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id)
    }

    #[inline]
    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    #[inline]
    pub fn occupant_id(&self, square: Square) -> Option<PieceId> {
        self.cells[square.index()]
    }

    #[inline]
    pub fn occupant(&self, square: Square) -> Option<&Piece> {
        self.occupant_id(square).and_then(|id| self.pieces.get(id))
    }

    /// Pseudo-legal destinations of whatever stands on `square`.
    pub fn possible_moves_from(&self, square: Square) -> Vec<Square> {
        self.occupant(square)
            .map(|piece| piece.possible_moves(self))
            .unwrap_or_default()
    }

    /// On-board pieces of one color with their registry ids.
    pub fn active_pieces(&self, color: Color) -> impl Iterator<Item = (PieceId, &Piece)> + '_ {
        self.pieces
            .iter()
            .enumerate()
            .filter(move |(_, piece)| piece.color == color && !piece.is_captured())
    }

    /// Kinds of the captured pieces of `color`, in registry order.
    pub fn captured(&self, color: Color) -> Vec<PieceKind> {
        self.pieces
            .iter()
            .filter(|piece| piece.color == color && piece.is_captured())
            .map(|piece| piece.kind)
            .collect()
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces
            .iter()
            .find(|piece| piece.kind == PieceKind::King && piece.color == color)
            .and_then(|king| king.square)
    }

    /// Move the occupant of `from` to `to`, parking any occupant of `to`
    /// off the board. No rule checking.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<Displacement, ChessErrors> {
        let mover = self
            .occupant_id(from)
            .ok_or_else(|| ChessErrors::cell_mismatch(from, "make_move from an empty cell"))?;
        let captured = self.occupant_id(to);

        if let Some(captured) = captured {
            self.pieces[captured].square = None;
        }
        self.pieces[mover].square = Some(to);
        self.cells[to.index()] = Some(mover);
        self.cells[from.index()] = None;

        Ok(Displacement {
            from,
            to,
            mover,
            captured,
        })
    }

    /// Exact inverse of `make_move`.
    pub fn unmake_move(&mut self, displacement: Displacement) {
        let Displacement {
            from,
            to,
            mover,
            captured,
        } = displacement;

        self.pieces[mover].square = Some(from);
        self.cells[from.index()] = Some(mover);

        match captured {
            Some(captured) => {
                self.pieces[captured].square = Some(to);
                self.cells[to.index()] = Some(captured);
            }
            None => self.cells[to.index()] = None,
        }
    }

    /// Make a move that is taken back when the returned guard is dropped,
    /// including during unwinding.
    pub fn simulate(&mut self, from: Square, to: Square) -> Result<SimulatedMove<'_>, ChessErrors> {
        let displacement = self.make_move(from, to)?;
        Ok(SimulatedMove {
            board: self,
            displacement,
        })
    }

    pub fn piece_squares(&self) -> Vec<Option<Square>> {
        self.pieces.iter().map(|piece| piece.square).collect()
    }

    /// Reposition every registered piece and rebuild the cells from scratch.
    ///
    /// On `Err` the board is left exactly as it was.
    pub fn restore_piece_squares(&mut self, squares: &[Option<Square>]) -> Result<(), ChessErrors> {
        *self = self.with_piece_squares(squares)?;
        Ok(())
    }

    /// A copy of this board with every registered piece moved to `squares`
    /// and the cells rebuilt from those squares.
    pub fn with_piece_squares(&self, squares: &[Option<Square>]) -> Result<Board, ChessErrors> {
        if squares.len() != self.pieces.len() {
            return Err(ChessErrors::InvariantViolation(format!(
                "snapshot holds {} pieces, registry holds {}",
                squares.len(),
                self.pieces.len()
            )));
        }

        let mut cells: Cells = [None; 64];
        let mut pieces = self.pieces.clone();
        for (id, (piece, square)) in pieces.iter_mut().zip(squares).enumerate() {
            piece.square = *square;
            if let Some(square) = square {
                if cells[square.index()].is_some() {
                    return Err(ChessErrors::cell_mismatch(*square, "two pieces restored onto one cell"));
                }
                cells[square.index()] = Some(id);
            }
        }

        let rebuilt = Board { cells, pieces };
        rebuilt.validate()?;
        Ok(rebuilt)
    }

    /// Check the grid/registry consistency in both directions.
    pub fn validate(&self) -> Result<(), ChessErrors> {
        for (id, piece) in self.pieces.iter().enumerate() {
            if let Some(square) = piece.square {
                if self.cells[square.index()] != Some(id) {
                    return Err(ChessErrors::cell_mismatch(
                        square,
                        &format!("piece #{id} is not stored in its own cell"),
                    ));
                }
            }
        }

        for square in Square::all() {
            let Some(id) = self.cells[square.index()] else {
                continue;
            };
            match self.pieces.get(id) {
                Some(piece) if piece.square == Some(square) => {}
                Some(_) => {
                    return Err(ChessErrors::cell_mismatch(
                        square,
                        &format!("piece #{id} records a different square"),
                    ))
                }
                None => {
                    return Err(ChessErrors::cell_mismatch(
                        square,
                        &format!("piece #{id} is not registered"),
                    ))
                }
            }
        }

        Ok(())
    }
}

/// A board with one move temporarily applied. Read-only while alive.
pub struct SimulatedMove<'a> {
    board: &'a mut Board,
    displacement: Displacement,
}

impl SimulatedMove<'_> {
    pub fn displacement(&self) -> Displacement {
        self.displacement
    }
}

impl Deref for SimulatedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl Drop for SimulatedMove<'_> {
    fn drop(&mut self) {
        self.board.unmake_move(self.displacement);
    }
}
