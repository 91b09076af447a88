use std::fmt;
use std::str::FromStr;

use crate::constants::{BOARD_SIZE, BOARD_SQUARES};

/// A cell coordinate on the 8x8 board.
///
/// Squares are stored as a row-major index 0-63, rows and columns each
/// running 0-7. Algebraic notation maps files `a`-`h` to columns 0-7 and
/// ranks `1`-`8` to rows 0-7, so `a1` is (0, 0) and `h8` is (7, 7):
///
/// ```text
///    a  b  c  d  e  f  g  h
/// 1 00 01 02 03 04 05 06 07
/// 2 08 09 10 11 12 13 14 15
/// 3 16 17 18 19 20 21 22 23
/// 4 24 25 26 27 28 29 30 31
/// 5 32 33 34 35 36 37 38 39
/// 6 40 41 42 43 44 45 46 47
/// 7 48 49 50 51 52 53 54 55
/// 8 56 57 58 59 60 61 62 63
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    /// Creates a `Square` from row and column coordinates.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is >= 8.
    #[inline]
    pub fn new(row: usize, col: usize) -> Square {
        assert!(row < BOARD_SIZE, "Invalid row: {row}");
        assert!(col < BOARD_SIZE, "Invalid column: {col}");
        Square((row * BOARD_SIZE + col) as u8)
    }

    /// Creates a `Square` from a row-major index.
    ///
    /// # Returns
    ///
    /// `Some(Square)` if `index` is in 0-63, `None` otherwise.
    #[inline]
    pub fn from_index(index: usize) -> Option<Square> {
        if index < BOARD_SQUARES {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    /// Returns the row-major index (0-63) of this square.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the row (0-7) of this square.
    #[inline]
    pub fn row(self) -> usize {
        self.index() / BOARD_SIZE
    }

    /// Returns the column (0-7) of this square.
    #[inline]
    pub fn col(self) -> usize {
        self.index() % BOARD_SIZE
    }

    /// Steps one cell in the direction `(dr, dc)`.
    ///
    /// # Returns
    ///
    /// `Some(Square)` for the neighbouring cell, `None` when the step leaves
    /// the board.
    #[inline]
    pub fn step(self, dr: i32, dc: i32) -> Option<Square> {
        let row = self.row() as i32 + dr;
        let col = self.col() as i32 + dc;
        if (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col) {
            Some(Square::new(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Returns an iterator over all 64 squares in row-major order.
    #[inline]
    pub fn iter() -> impl Iterator<Item = Square> {
        (0..BOARD_SQUARES as u8).map(Square)
    }
}

/// Error type for square-related operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Invalid square string format (must be 2 characters)
    InvalidFormat,
    /// Invalid file character (must be a-h or A-H)
    InvalidFile(char),
    /// Invalid rank character (must be 1-8)
    InvalidRank(char),
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidFormat => write!(
                f,
                "Invalid square format: must be 2 characters (e.g., 'a1')"
            ),
            SquareError::InvalidFile(c) => write!(f, "Invalid file '{c}': must be a-h or A-H"),
            SquareError::InvalidRank(c) => write!(f, "Invalid rank '{c}': must be 1-8"),
        }
    }
}

impl std::error::Error for SquareError {}

impl FromStr for Square {
    type Err = SquareError;

    /// Parses algebraic notation (e.g. "a1", "h8") into a `Square`.
    ///
    /// The file letter selects the column and the rank digit selects the
    /// row. Uppercase file letters are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(SquareError::InvalidFormat);
        };

        let file = file_char.to_ascii_lowercase();
        if !('a'..='h').contains(&file) {
            return Err(SquareError::InvalidFile(file_char));
        }
        if !('1'..='8').contains(&rank_char) {
            return Err(SquareError::InvalidRank(rank_char));
        }

        let col = file as usize - 'a' as usize;
        let row = rank_char as usize - '1' as usize;
        Ok(Square::new(row, col))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col() as u8) as char;
        let rank = (b'1' + self.row() as u8) as char;
        write!(f, "{file}{rank}")
    }
}
