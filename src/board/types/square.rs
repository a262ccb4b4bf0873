//! Square type and algebraic conversions.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board as (row, col).
///
/// Row 0 is the eighth rank (Black's back rank) and row 7 the first rank;
/// column 0 is the a-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SquareRepr"))]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Create a square without bounds checking. Callers pass constants in 0..8.
    #[inline]
    #[must_use]
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Square { row, col }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// The square `(dr, dc)` away, or `None` if that leaves the board
    #[inline]
    #[must_use]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::at(row as u8, col as u8))
        } else {
            None
        }
    }

    /// File letter ('a'..='h')
    #[inline]
    #[must_use]
    pub const fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// Rank digit ('1'..='8')
    #[inline]
    #[must_use]
    pub const fn rank_char(self) -> char {
        (b'8' - self.row) as char
    }

    /// All 64 squares, row-major from row 0
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(|idx| Square::at(idx / 8, idx % 8))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        if row >= 8 {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if col >= 8 {
            return Err(SquareError::ColOutOfBounds { col });
        }
        Ok(Square { row, col })
    }
}

/// Wire form of a square, bounds-checked through `TryFrom` on the way in.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct SquareRepr {
    row: u8,
    col: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<SquareRepr> for Square {
    type Error = SquareError;

    fn try_from(repr: SquareRepr) -> Result<Self, Self::Error> {
        Square::try_from((repr.row, repr.col))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let col = match bytes[0] {
            b'a'..=b'h' => bytes[0] - b'a',
            _ => return Err(invalid()),
        };
        let row = match bytes[1] {
            b'1'..=b'8' => b'8' - bytes[1],
            _ => return Err(invalid()),
        };
        Ok(Square { row, col })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_rank_from_bottom() {
        assert_eq!(Square::at(6, 4).to_string(), "e2");
        assert_eq!(Square::at(4, 4).to_string(), "e4");
        assert_eq!(Square::at(0, 0).to_string(), "a8");
        assert_eq!(Square::at(7, 7).to_string(), "h1");
    }

    #[test]
    fn test_parse() {
        assert_eq!("e4".parse::<Square>(), Ok(Square::at(4, 4)));
        assert_eq!("a8".parse::<Square>(), Ok(Square::at(0, 0)));
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("e".parse::<Square>().is_err());
    }

    #[test]
    fn test_bounds() {
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
        assert_eq!(
            Square::try_from((9, 0)),
            Err(SquareError::RowOutOfBounds { row: 9 })
        );
        assert_eq!(Square::at(0, 0).offset(-1, 0), None);
        assert_eq!(Square::at(0, 0).offset(1, 2), Some(Square::at(1, 2)));
    }

    #[test]
    fn test_all_squares() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::at(0, 0));
        assert_eq!(squares[63], Square::at(7, 7));
    }
}
