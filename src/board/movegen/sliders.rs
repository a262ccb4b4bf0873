use super::super::{Board, Color, Square};

const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub(super) const ALL_DIRECTIONS: [(i8, i8); 8] = [
    ORTHOGONAL[0],
    ORTHOGONAL[1],
    ORTHOGONAL[2],
    ORTHOGONAL[3],
    DIAGONAL[0],
    DIAGONAL[1],
    DIAGONAL[2],
    DIAGONAL[3],
];

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    fn directions(self) -> &'static [(i8, i8)] {
        match self {
            SliderType::Bishop => &DIAGONAL,
            SliderType::Rook => &ORTHOGONAL,
            SliderType::Queen => &ALL_DIRECTIONS,
        }
    }
}

impl Board {
    /// Walk each ray until the edge, an own piece (excluded) or an enemy
    /// piece (included).
    pub(crate) fn generate_slider_moves(
        &self,
        color: Color,
        from: Square,
        slider: SliderType,
    ) -> Vec<Square> {
        let mut moves = Vec::with_capacity(14);
        for &(dr, dc) in slider.directions() {
            let mut current = from;
            while let Some(next) = current.offset(dr, dc) {
                if !self.push_if_available(color, next, &mut moves) {
                    break;
                }
                current = next;
            }
        }
        moves
    }
}
