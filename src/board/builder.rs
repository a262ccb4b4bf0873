//! Fluent builder for constructing board positions.
//!
//! Allows creating positions piece by piece, including pieces that have
//! already moved, rather than parsing placement text.
//!
//! # Example
//! ```
//! use chess_referee::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let e1: Square = "e1".parse().unwrap();
//! let e8: Square = "e8".parse().unwrap();
//! let a2: Square = "a2".parse().unwrap();
//! let board = BoardBuilder::new()
//!     .piece(e1, Color::White, PieceKind::King)
//!     .piece(e8, Color::Black, PieceKind::King)
//!     .moved_piece(a2, Color::White, PieceKind::Pawn, 3)
//!     .build();
//! assert_eq!(board.piece_count(), 3);
//! ```

use super::{Board, Color, PieceInstance, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, PieceInstance)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            pieces: Board::new().pieces().collect(),
        }
    }

    /// Place an unmoved piece on the board.
    #[must_use]
    pub fn piece(self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.moved_piece(square, color, kind, 0)
    }

    /// Place a piece that has already moved `move_count` times.
    #[must_use]
    pub fn moved_piece(
        mut self,
        square: Square,
        color: Color,
        kind: PieceKind,
        move_count: u32,
    ) -> Self {
        // Remove any existing piece on this square
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((
            square,
            PieceInstance::new(color, kind).with_move_count(move_count),
        ));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, piece) in self.pieces {
            board.set_piece(square, piece);
        }
        board
    }
}
