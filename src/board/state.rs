//! Board grid and read-only queries.

use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, PieceInstance, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

static STARTING_BOARD: Lazy<Board> = Lazy::new(|| {
    let mut board = Board::empty();
    for (col, kind) in BACK_RANK.iter().enumerate() {
        let col = col as u8;
        for color in Color::BOTH {
            board.set_piece(
                Square::at(color.back_row(), col),
                PieceInstance::new(color, *kind),
            );
            board.set_piece(
                Square::at(color.pawn_start_row(), col),
                PieceInstance::new(color, PieceKind::Pawn),
            );
        }
    }
    board
});

/// An 8x8 grid of optional pieces.
///
/// Boards are plain values: cloning produces a fully independent copy, so a
/// board held from before a simulation never observes the simulated move.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    squares: [[Option<PieceInstance>; 8]; 8],
}

impl Board {
    /// The standard initial placement.
    #[must_use]
    pub fn new() -> Self {
        STARTING_BOARD.clone()
    }

    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<PieceInstance> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    #[inline]
    #[must_use]
    pub fn color_of(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(|p| p.color)
    }

    #[inline]
    #[must_use]
    pub fn kind_of(&self, square: Square) -> Option<PieceKind> {
        self.piece_at(square).map(|p| p.kind)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// True if `square` holds a piece of the opposite color to `color`.
    #[inline]
    #[must_use]
    pub fn is_enemy(&self, square: Square, color: Color) -> bool {
        self.color_of(square).is_some_and(|c| c != color)
    }

    pub(crate) fn set_piece(&mut self, square: Square, piece: PieceInstance) {
        self.squares[square.row() as usize][square.col() as usize] = Some(piece);
    }

    pub(crate) fn take_piece(&mut self, square: Square) -> Option<PieceInstance> {
        self.squares[square.row() as usize][square.col() as usize].take()
    }

    /// Every occupied square with its piece, row-major from row 0.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, PieceInstance)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Every square occupied by `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, PieceInstance)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    /// The first square (row-major) holding `color`'s king.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, p)| p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Number of pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
