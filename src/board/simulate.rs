//! Move simulation on an independent board copy.
//!
//! The simulator applies the mechanics of a move (captures, en passant
//! removal, castling rook relocation, move counts) without judging whether the
//! move is allowed. Legality lives in the generator and the legality filter.

use super::{Board, CastleSide, PieceInstance, PieceKind, Square};

/// The outcome of applying a move to a copy of a board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Simulation {
    /// The board after the move. Shares nothing with the source board.
    pub board: Board,
    /// En passant target created by this move (a pawn double step), if any.
    pub en_passant: Option<Square>,
    /// The piece removed from the board by this move, if any.
    pub captured: Option<PieceInstance>,
    /// True when `captured` was taken en passant.
    pub is_en_passant: bool,
    /// Set when the move was a king's two-column castling step.
    pub castling: Option<CastleSide>,
}

impl Board {
    /// Apply `from -> to` for a piece of `kind` to a copy of this board.
    ///
    /// Returns `None` if `from` is empty.
    #[must_use]
    pub fn simulate(
        &self,
        from: Square,
        to: Square,
        kind: PieceKind,
        en_passant: Option<Square>,
    ) -> Option<Simulation> {
        let mut board = self.clone();
        let mut mover = board.take_piece(from)?;
        mover.move_count += 1;

        let mut captured = board.take_piece(to);
        board.set_piece(to, mover);

        let mut new_en_passant = None;
        let mut is_en_passant = false;
        let mut castling = None;

        match kind {
            PieceKind::Pawn => {
                let dir = mover.color.pawn_direction();
                if (to.row() as i8 - from.row() as i8).abs() == 2 {
                    new_en_passant = from.offset(dir, 0);
                }
                if Some(to) == en_passant {
                    // The double-stepped pawn sits one row behind `to`.
                    if let Some(behind) = to.offset(-dir, 0) {
                        captured = board.take_piece(behind);
                        is_en_passant = captured.is_some();
                    }
                }
            }
            PieceKind::King => {
                castling = CastleSide::from_king_step(to.col() as i8 - from.col() as i8);
                if let Some(side) = castling {
                    relocate_castling_rook(&mut board, from, to, side);
                }
            }
            _ => {}
        }

        Some(Simulation {
            board,
            en_passant: new_en_passant,
            captured,
            is_en_passant,
            castling,
        })
    }
}

fn relocate_castling_rook(board: &mut Board, king_from: Square, king_to: Square, side: CastleSide) {
    let (Some(rook_from), Some(rook_to)) = (
        king_from.offset(0, side.rook_offset()),
        king_to.offset(0, side.rook_landing_offset()),
    ) else {
        return;
    };
    if let Some(mut rook) = board.take_piece(rook_from) {
        rook.move_count += 1;
        board.set_piece(rook_to, rook);
    }
}
