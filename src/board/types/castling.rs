//! Castling side type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which rook a castling king moves toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// Side implied by a king's column change, if it is a castling step.
    #[inline]
    #[must_use]
    pub const fn from_king_step(col_delta: i8) -> Option<CastleSide> {
        match col_delta {
            2 => Some(CastleSide::Kingside),
            -2 => Some(CastleSide::Queenside),
            _ => None,
        }
    }

    /// Column offset from the king's start square to its rook.
    #[inline]
    #[must_use]
    pub(crate) const fn rook_offset(self) -> i8 {
        match self {
            CastleSide::Kingside => 3,
            CastleSide::Queenside => -4,
        }
    }

    /// Column offset from the king's destination to where the rook lands.
    #[inline]
    #[must_use]
    pub(crate) const fn rook_landing_offset(self) -> i8 {
        match self {
            CastleSide::Kingside => -1,
            CastleSide::Queenside => 1,
        }
    }
}
