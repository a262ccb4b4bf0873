use super::super::{Board, CastleSide, Color, PieceKind, Square};
use super::sliders::ALL_DIRECTIONS;

impl Board {
    pub(crate) fn generate_king_moves(&self, color: Color, from: Square) -> Vec<Square> {
        let mut moves = Vec::with_capacity(10);
        for (dr, dc) in ALL_DIRECTIONS {
            if let Some(to) = from.offset(dr, dc) {
                self.push_if_available(color, to, &mut moves);
            }
        }

        let unmoved = self
            .piece_at(from)
            .is_some_and(|king| king.kind == PieceKind::King && !king.has_moved());
        if unmoved {
            for side in [CastleSide::Kingside, CastleSide::Queenside] {
                if let Some(to) = self.castling_destination(color, from, side.rook_offset()) {
                    moves.push(to);
                }
            }
        }

        moves
    }

    /// The king's castling destination toward the rook `rook_distance`
    /// columns away, if every square in between is empty and that rook is
    /// an own, unmoved rook.
    ///
    /// Squares the king passes through are not tested for attack.
    fn castling_destination(
        &self,
        color: Color,
        king: Square,
        rook_distance: i8,
    ) -> Option<Square> {
        let step = rook_distance.signum();
        let rook = self.piece_at(king.offset(0, rook_distance)?)?;
        if rook.color != color || rook.kind != PieceKind::Rook || rook.has_moved() {
            return None;
        }
        let mut between = step;
        while between != rook_distance {
            if !self.is_empty(king.offset(0, between)?) {
                return None;
            }
            between += step;
        }
        king.offset(0, 2 * step)
    }
}
