//! Error types for board construction and parsing.

use std::fmt;

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: u8 },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: u8 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for piece-placement parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Placement must describe exactly 8 rows
    WrongRowCount { found: usize },
    /// Invalid piece character in a row
    InvalidPiece { char: char },
    /// A row describes more or fewer than 8 columns
    WrongColumnCount { row: usize, cols: usize },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::WrongRowCount { found } => {
                write!(f, "Placement must have 8 rows, found {found}")
            }
            PlacementError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in placement")
            }
            PlacementError::WrongColumnCount { row, cols } => {
                write!(f, "Row {row} describes {cols} columns, expected 8")
            }
        }
    }
}

impl std::error::Error for PlacementError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_error_row_bounds() {
        let err = SquareError::RowOutOfBounds { row: 9 };
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_placement_error_row_count() {
        let err = PlacementError::WrongRowCount { found: 7 };
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn test_placement_error_invalid_piece() {
        let err = PlacementError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_error_clone() {
        let err = PlacementError::WrongColumnCount { row: 2, cols: 9 };
        assert_eq!(err.clone(), err);
    }
}
