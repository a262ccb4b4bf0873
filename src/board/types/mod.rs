//! Core board types.
//!
//! - `PieceKind`, `Color`, `PieceDescriptor` and `PieceInstance` - piece identity and state
//! - `Square` - (row, col) board coordinate
//! - `CastleSide` - kingside or queenside castling

mod castling;
mod piece;
mod square;

pub use castling::CastleSide;
pub use piece::{Color, PieceDescriptor, PieceInstance, PieceKind};
pub use square::Square;
