//! Check detection and the legality filter.
//!
//! `legal_moves` is the only authority for whether a move is allowed; the
//! game controller and the move cache both route through it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color, PieceKind, Square};

/// The situation of the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PositionStatus {
    /// Not in check, at least one legal move.
    Normal,
    /// In check, at least one legal move.
    Check,
    /// In check, no legal move.
    Checkmate,
    /// Not in check, no legal move.
    Stalemate,
}

impl PositionStatus {
    #[must_use]
    pub const fn is_check(self) -> bool {
        matches!(self, PositionStatus::Check | PositionStatus::Checkmate)
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, PositionStatus::Checkmate | PositionStatus::Stalemate)
    }
}

impl Board {
    /// The square of `color`'s king if an enemy piece attacks it.
    ///
    /// A board without a `color` king is never in check.
    #[must_use]
    pub fn king_square_in_check(&self, color: Color, en_passant: Option<Square>) -> Option<Square> {
        let king = self.find_king(color)?;
        self.is_square_reachable(king, color.opponent(), en_passant)
            .then_some(king)
    }

    /// Pseudo-legal destinations that do not leave `color`'s king attacked.
    #[must_use]
    pub fn legal_moves(
        &self,
        color: Color,
        kind: PieceKind,
        from: Square,
        en_passant: Option<Square>,
    ) -> Vec<Square> {
        self.pseudo_legal_moves(color, kind, from, en_passant)
            .into_iter()
            .filter(|&to| {
                self.simulate(from, to, kind, en_passant).is_some_and(|sim| {
                    sim.board
                        .king_square_in_check(color, sim.en_passant)
                        .is_none()
                })
            })
            .collect()
    }

    /// True if any `color` piece has at least one legal move.
    #[must_use]
    pub fn has_any_legal_move(&self, color: Color, en_passant: Option<Square>) -> bool {
        self.pieces_of(color).any(|(from, piece)| {
            !self
                .legal_moves(color, piece.kind, from, en_passant)
                .is_empty()
        })
    }

    /// Check, checkmate or stalemate for `to_move`.
    #[must_use]
    pub fn position_status(&self, to_move: Color, en_passant: Option<Square>) -> PositionStatus {
        let in_check = self.king_square_in_check(to_move, en_passant).is_some();
        let has_moves = self.has_any_legal_move(to_move, en_passant);
        match (in_check, has_moves) {
            (false, true) => PositionStatus::Normal,
            (true, true) => PositionStatus::Check,
            (true, false) => PositionStatus::Checkmate,
            (false, false) => PositionStatus::Stalemate,
        }
    }
}
