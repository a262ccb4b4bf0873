use super::super::{Board, Color, Square};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (1, -2),
    (-1, 2),
    (1, 2),
];

impl Board {
    pub(crate) fn generate_knight_moves(&self, color: Color, from: Square) -> Vec<Square> {
        let mut moves = Vec::with_capacity(8);
        for (dr, dc) in KNIGHT_OFFSETS {
            if let Some(to) = from.offset(dr, dc) {
                self.push_if_available(color, to, &mut moves);
            }
        }
        moves
    }
}
