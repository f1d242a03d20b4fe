//! Textual coordinates: a row letter `A`..`J` followed by a 1-based column.

use core::fmt;
use core::str::FromStr;

use crate::config::BOARD_SIZE;

const SIZE: usize = BOARD_SIZE as usize;

/// Zero-based cell on the 10×10 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Build a position from zero-based indices.
    pub fn new(row: usize, col: usize) -> Result<Self, CoordinateError> {
        if row >= SIZE {
            return Err(CoordinateError::RowOutOfRange);
        }
        if col >= SIZE {
            return Err(CoordinateError::ColumnOutOfRange);
        }
        Ok(Self { row, col })
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Row label (`'A'` for row 0).
    pub fn row_letter(&self) -> char {
        (b'A' + self.row as u8) as char
    }

    /// All positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Position { row, col }))
    }
}

impl From<Position> for (usize, usize) {
    fn from(p: Position) -> Self {
        (p.row, p.col)
    }
}

/// Reasons a coordinate token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateError {
    /// Nothing to parse.
    Empty,
    /// Row letter missing or outside `A`..`J`.
    RowOutOfRange,
    /// Column part is not one or two decimal digits.
    ColumnNotNumeric,
    /// Column number outside `1`..`10`.
    ColumnOutOfRange,
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateError::Empty => write!(f, "empty coordinate"),
            CoordinateError::RowOutOfRange => write!(f, "row must be a letter A-J"),
            CoordinateError::ColumnNotNumeric => write!(f, "column must be a number"),
            CoordinateError::ColumnOutOfRange => write!(f, "column must be between 1 and 10"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoordinateError {}

impl FromStr for Position {
    type Err = CoordinateError;

    /// Case-insensitive `A1`..`J10`; no surrounding or trailing characters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let row_ch = chars.next().ok_or(CoordinateError::Empty)?.to_ascii_uppercase();
        if !('A'..='J').contains(&row_ch) {
            return Err(CoordinateError::RowOutOfRange);
        }
        let digits = chars.as_str();
        if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoordinateError::ColumnNotNumeric);
        }
        let col: usize = digits
            .parse()
            .map_err(|_| CoordinateError::ColumnNotNumeric)?;
        if col == 0 || col > SIZE {
            return Err(CoordinateError::ColumnOutOfRange);
        }
        Position::new((row_ch as u8 - b'A') as usize, col - 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_letter(), self.col + 1)
    }
}
