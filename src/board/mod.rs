//! Board representation and chess rules.
//!
//! An 8x8 grid of optional pieces with move counts. Supports full move rules
//! including castling, en passant, pawn double steps and promotion squares.
//!
//! # Example
//! ```
//! use chess_referee::board::{Board, Color, PieceKind, Square};
//!
//! let board = Board::new();
//! let e2: Square = "e2".parse().unwrap();
//! let moves = board.legal_moves(Color::White, PieceKind::Pawn, e2, None);
//! assert_eq!(moves.len(), 2);
//! ```

mod builder;
mod error;
mod fen;
mod legality;
mod movegen;
mod san;
mod simulate;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{PlacementError, SquareError};
pub use legality::PositionStatus;
pub use san::{encode, MoveFlags, NotatedMove};
pub use simulate::Simulation;
pub use state::Board;
pub use types::{CastleSide, Color, PieceDescriptor, PieceInstance, PieceKind, Square};
