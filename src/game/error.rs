//! Error types for game operations and persistence.

use std::fmt;

use super::{GameId, GameStatus};
use crate::board::{Color, PieceKind, Square};

/// Failures reported by a [`GameStore`](super::GameStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No game with this id exists
    NotFound { id: GameId },
    /// The stored snapshot moved on since the committed one was read
    VersionConflict { expected: u64, found: u64 },
    /// The backing store could not complete the call
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound { id } => write!(f, "Game {id} not found in store"),
            StoreError::VersionConflict { expected, found } => {
                write!(f, "Version conflict: expected {expected}, found {found}")
            }
            StoreError::Unavailable(reason) => write!(f, "Store unavailable: {reason}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Failures of controller operations.
///
/// Every variant except `PersistenceFailure` is a validation error: it is
/// detected before anything is written and leaves the game unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    GameNotFound { id: GameId },
    /// The game is not in a state that accepts this operation
    NotInProgress { status: GameStatus },
    NoPieceAtSquare { square: Square },
    NotPlayersTurn { square: Square, turn: Color },
    IllegalMove { from: Square, to: Square },
    NotAwaitingPromotion { status: GameStatus },
    PawnNotAtPromotionSquare { square: Square },
    /// Pawns may only promote to a knight, bishop, rook or queen
    InvalidPromotionPiece { kind: PieceKind },
    /// The store rejected the commit; the game is unchanged
    PersistenceFailure(StoreError),
}

impl GameError {
    /// True if the error was raised before any mutation and the call can be
    /// retried with corrected input.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        !matches!(self, GameError::PersistenceFailure(_))
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::GameNotFound { id } => write!(f, "Game {id} not found"),
            GameError::NotInProgress { status } => {
                write!(f, "Game is not in progress (status: {status})")
            }
            GameError::NoPieceAtSquare { square } => write!(f, "No piece at {square}"),
            GameError::NotPlayersTurn { square, turn } => {
                write!(f, "Piece at {square} cannot move: it is {turn}'s turn")
            }
            GameError::IllegalMove { from, to } => write!(f, "Illegal move {from}-{to}"),
            GameError::NotAwaitingPromotion { status } => {
                write!(f, "No promotion pending (status: {status})")
            }
            GameError::PawnNotAtPromotionSquare { square } => {
                write!(f, "No pawn to promote at {square}")
            }
            GameError::InvalidPromotionPiece { kind } => {
                write!(f, "Cannot promote to {kind}")
            }
            GameError::PersistenceFailure(err) => write!(f, "Persistence failure: {err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::PersistenceFailure(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for GameError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => GameError::GameNotFound { id },
            other => GameError::PersistenceFailure(other),
        }
    }
}
