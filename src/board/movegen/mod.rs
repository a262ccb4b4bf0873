//! Pseudo-legal move generation.
//!
//! Destinations obey each piece's movement rules but may leave the mover's
//! own king attacked; see `legality` for the filtered variant.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, PieceKind, Square};

use sliders::SliderType;

impl Board {
    /// Candidate destinations for a `color` `kind` standing on `from`.
    ///
    /// `en_passant` is the square a pawn may capture onto en passant this ply.
    #[must_use]
    pub fn pseudo_legal_moves(
        &self,
        color: Color,
        kind: PieceKind,
        from: Square,
        en_passant: Option<Square>,
    ) -> Vec<Square> {
        match kind {
            PieceKind::Pawn => self.generate_pawn_moves(color, from, en_passant),
            PieceKind::Knight => self.generate_knight_moves(color, from),
            PieceKind::Bishop => self.generate_slider_moves(color, from, SliderType::Bishop),
            PieceKind::Rook => self.generate_slider_moves(color, from, SliderType::Rook),
            PieceKind::Queen => self.generate_slider_moves(color, from, SliderType::Queen),
            PieceKind::King => self.generate_king_moves(color, from),
        }
    }

    /// True if any `attacker` piece has a pseudo-legal move onto `target`.
    ///
    /// Pawn pushes and castling steps count, so this only means "attacked"
    /// for an occupied square such as a king's.
    #[must_use]
    pub(crate) fn is_square_reachable(
        &self,
        target: Square,
        attacker: Color,
        en_passant: Option<Square>,
    ) -> bool {
        self.pieces_of(attacker).any(|(from, piece)| {
            self.pseudo_legal_moves(attacker, piece.kind, from, en_passant)
                .contains(&target)
        })
    }

    /// Push `to` if it is empty or holds an enemy of `color`; returns true if
    /// the square was empty (a slider may continue past it).
    fn push_if_available(&self, color: Color, to: Square, moves: &mut Vec<Square>) -> bool {
        match self.color_of(to) {
            None => {
                moves.push(to);
                true
            }
            Some(c) if c != color => {
                moves.push(to);
                false
            }
            Some(_) => false,
        }
    }
}
