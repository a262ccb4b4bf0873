//! Game snapshots and their lifecycle types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, PieceDescriptor, PieceInstance, Square};

/// Store-assigned identifier of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameId(pub u64);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle of a game.
///
/// `InProgress -> AwaitingPromotion -> InProgress | Completed`,
/// `InProgress -> Completed`, and any non-terminal state `-> Aborted`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GameStatus {
    InProgress,
    AwaitingPromotion,
    Completed,
    Aborted,
}

impl GameStatus {
    /// Completed and aborted games accept no further moves.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Completed | GameStatus::Aborted)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameStatus::InProgress => "in_progress",
            GameStatus::AwaitingPromotion => "awaiting_promotion",
            GameStatus::Completed => "completed",
            GameStatus::Aborted => "aborted",
        };
        f.write_str(name)
    }
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Winner {
    White,
    Black,
    Stalemate,
}

impl From<Color> for Winner {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Winner::White,
            Color::Black => Winner::Black,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Winner::White => "white",
            Winner::Black => "black",
            Winner::Stalemate => "stalemate",
        };
        f.write_str(name)
    }
}

/// A pawn move that reached the last row and awaits the piece choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PendingPromotion {
    pub from: Square,
    pub to: Square,
    /// The promoting move captured a piece; carried into the final notation.
    pub is_capture: bool,
}

/// One ply of the game history.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub piece: PieceDescriptor,
    pub from: Square,
    pub to: Square,
    pub notation: String,
    pub captured: Option<PieceInstance>,
}

/// An immutable snapshot of one game.
///
/// Snapshots are replaced wholesale by the controller; a value held by a
/// caller never changes underneath it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameState {
    pub id: GameId,
    /// Incremented by the store on every successful commit.
    pub version: u64,
    pub board: Board,
    pub turn: Color,
    pub status: GameStatus,
    pub winner: Option<Winner>,
    pub en_passant: Option<Square>,
    pub pending_promotion: Option<PendingPromotion>,
    pub move_history: Vec<MoveRecord>,
    /// Every captured piece, in capture order.
    pub captured: Vec<PieceInstance>,
}

impl GameState {
    /// A new game in the standard initial position, white to move.
    #[must_use]
    pub fn new(id: GameId) -> Self {
        GameState::from_position(id, Board::new(), Color::White)
    }

    /// A new in-progress game from an arbitrary position.
    #[must_use]
    pub fn from_position(id: GameId, board: Board, turn: Color) -> Self {
        GameState {
            id,
            version: 0,
            board,
            turn,
            status: GameStatus::InProgress,
            winner: None,
            en_passant: None,
            pending_promotion: None,
            move_history: Vec::new(),
            captured: Vec::new(),
        }
    }

    /// The square of the side to move's king if it is attacked.
    ///
    /// Derived from the board on every call, never stored.
    #[must_use]
    pub fn in_check_square(&self) -> Option<Square> {
        self.board.king_square_in_check(self.turn, self.en_passant)
    }

    /// Pieces captured by `color`.
    pub fn captured_by(&self, color: Color) -> impl Iterator<Item = &PieceInstance> + '_ {
        self.captured.iter().filter(move |piece| piece.color != color)
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.move_history.last()
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}
