//! Piece-placement text (the first field of FEN).
//!
//! Rows are listed from row 0 (the eighth rank) down to row 7, separated by
//! `/`. Move counts are not part of the text: pieces are read back as unmoved,
//! except pawns off their starting row, which must have moved at least once.

use std::str::FromStr;

use super::error::PlacementError;
use super::{Board, Color, PieceInstance, PieceKind, Square};

impl Board {
    /// Parse a board from placement text.
    pub fn from_placement(placement: &str) -> Result<Self, PlacementError> {
        let mut board = Board::empty();
        let rows: Vec<&str> = placement.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(PlacementError::WrongRowCount { found: rows.len() });
        }

        for (row, row_str) in rows.iter().enumerate() {
            let mut col = 0usize;
            for c in row_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let kind = PieceKind::from_char(c).ok_or(PlacementError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if col >= 8 {
                    return Err(PlacementError::WrongColumnCount { row, cols: col + 1 });
                }
                let square = Square::at(row as u8, col as u8);
                let moved = kind == PieceKind::Pawn && square.row() != color.pawn_start_row();
                board.set_piece(
                    square,
                    PieceInstance::new(color, kind).with_move_count(u32::from(moved)),
                );
                col += 1;
            }
            if col != 8 {
                return Err(PlacementError::WrongColumnCount { row, cols: col });
            }
        }

        Ok(board)
    }

    /// Render the board as placement text.
    #[must_use]
    pub fn to_placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for row in 0..8u8 {
            if row > 0 {
                out.push('/');
            }
            let mut empty = 0;
            for col in 0..8u8 {
                match self.piece_at(Square::at(row, col)) {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
        }
        out
    }
}

impl FromStr for Board {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_placement(s)
    }
}
