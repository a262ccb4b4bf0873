use super::super::{Board, Color, Square};

impl Board {
    pub(crate) fn generate_pawn_moves(
        &self,
        color: Color,
        from: Square,
        en_passant: Option<Square>,
    ) -> Vec<Square> {
        let mut moves = Vec::with_capacity(4);
        let dir = color.pawn_direction();
        let unmoved = self.piece_at(from).map_or(true, |p| !p.has_moved());

        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty(forward) {
                moves.push(forward);
                if unmoved {
                    if let Some(double) = from.offset(2 * dir, 0) {
                        if self.is_empty(double) {
                            moves.push(double);
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            let Some(target) = from.offset(dir, dc) else {
                continue;
            };
            if self.is_enemy(target, color) {
                moves.push(target);
            } else if Some(target) == en_passant && self.is_empty(target) {
                moves.push(target);
            }
        }

        moves
    }
}
