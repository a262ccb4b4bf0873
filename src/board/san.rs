//! Algebraic notation for resolved moves.
//!
//! Notation is produced from the move and explicit flags rather than by
//! replaying the move on a board. Examples: "e4", "Nf3", "Bxc6+", "O-O",
//! "exd6", "e8=Q#".
//!
//! Two identical pieces able to reach the same square are not disambiguated
//! (no file or rank is added after the piece letter).
//!
//! # Examples
//! ```
//! use chess_referee::board::{encode, MoveFlags, NotatedMove, PieceKind};
//!
//! let mv = NotatedMove {
//!     kind: PieceKind::Queen,
//!     from: "h5".parse().unwrap(),
//!     to: "f7".parse().unwrap(),
//! };
//! let flags = MoveFlags {
//!     is_capture: true,
//!     is_check: true,
//!     is_checkmate: true,
//!     ..MoveFlags::default()
//! };
//! assert_eq!(encode(&mv, &flags), "Qxf7#");
//! ```

use super::{CastleSide, PieceKind, PositionStatus, Simulation, Square};

/// The piece and squares of a move to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotatedMove {
    pub kind: PieceKind,
    pub from: Square,
    pub to: Square,
}

/// Everything notation needs to know about a move beyond its squares.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveFlags {
    pub is_capture: bool,
    pub is_en_passant: bool,
    pub promotion: Option<PieceKind>,
    pub castling: Option<CastleSide>,
    pub is_check: bool,
    pub is_checkmate: bool,
}

impl MoveFlags {
    /// Capture, en passant and castling flags taken from a simulation.
    #[must_use]
    pub fn from_simulation(sim: &Simulation) -> Self {
        MoveFlags {
            is_capture: sim.captured.is_some(),
            is_en_passant: sim.is_en_passant,
            castling: sim.castling,
            ..MoveFlags::default()
        }
    }

    /// Set the check suffix flags from the opponent's resulting status.
    #[must_use]
    pub fn with_status(mut self, status: PositionStatus) -> Self {
        self.is_check = status.is_check();
        self.is_checkmate = status == PositionStatus::Checkmate;
        self
    }

    #[must_use]
    pub fn with_promotion(mut self, kind: PieceKind) -> Self {
        self.promotion = Some(kind);
        self
    }
}

/// Render a move in algebraic notation.
#[must_use]
pub fn encode(mv: &NotatedMove, flags: &MoveFlags) -> String {
    // Castling is rendered bare, without check suffixes.
    match flags.castling {
        Some(CastleSide::Kingside) => return "O-O".to_string(),
        Some(CastleSide::Queenside) => return "O-O-O".to_string(),
        None => {}
    }

    let mut san = String::with_capacity(8);
    match mv.kind.notation_letter() {
        None => {
            if flags.is_capture || flags.is_en_passant {
                san.push(mv.from.file_char());
                san.push('x');
            }
        }
        Some(letter) => {
            san.push(letter);
            if flags.is_capture {
                san.push('x');
            }
        }
    }
    san.push_str(&mv.to.to_string());

    if let Some(letter) = flags.promotion.and_then(PieceKind::notation_letter) {
        san.push('=');
        san.push(letter);
    }

    if flags.is_checkmate {
        san.push('#');
    } else if flags.is_check {
        san.push('+');
    }

    san
}
