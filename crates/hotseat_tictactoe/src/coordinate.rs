//! Validated board coordinates.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the 3x3 board, addressed by zero-based row and column.
///
/// Construction validates the range, so every `Coordinate` in circulation
/// points at a real cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Coordinate {
    row: u8,
    column: u8,
}

impl Coordinate {
    /// Side length of the board.
    pub const SIZE: usize = 3;

    /// All 9 cells in row-major order.
    pub const ALL: [Coordinate; 9] = [
        Coordinate::at(0, 0),
        Coordinate::at(0, 1),
        Coordinate::at(0, 2),
        Coordinate::at(1, 0),
        Coordinate::at(1, 1),
        Coordinate::at(1, 2),
        Coordinate::at(2, 0),
        Coordinate::at(2, 1),
        Coordinate::at(2, 2),
    ];

    /// Creates a coordinate, rejecting anything outside `0..=2`.
    #[instrument]
    pub fn new(row: usize, column: usize) -> Result<Self, EngineError> {
        if row >= Self::SIZE || column >= Self::SIZE {
            return Err(EngineError::InvalidCoordinate { row, column });
        }
        Ok(Self::at(row as u8, column as u8))
    }

    /// Unchecked constructor for compile-time tables.
    pub(crate) const fn at(row: u8, column: u8) -> Self {
        Self { row, column }
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Zero-based column.
    pub fn column(self) -> usize {
        self.column as usize
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row() * Self::SIZE + self.column()
    }

    /// Creates a coordinate from a row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable name of the cell.
    pub fn label(self) -> &'static str {
        match (self.row, self.column) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            _ => "Bottom-right",
        }
    }

    /// Parses user input into a coordinate.
    ///
    /// Accepts a cell number `1`-`9` (row-major), a `row column` pair
    /// separated by whitespace or a comma (zero-based), or a cell label
    /// such as `center`.
    #[instrument]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        let parts: Vec<&str> = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        match parts.as_slice() {
            [single] => {
                if let Ok(number) = single.parse::<usize>() {
                    return number.checked_sub(1).and_then(Self::from_index);
                }
            }
            [row, column] => {
                if let (Ok(row), Ok(column)) = (row.parse::<usize>(), column.parse::<usize>()) {
                    return Self::new(row, column).ok();
                }
            }
            _ => {}
        }

        let wanted = input.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|coordinate| coordinate.label().to_lowercase() == wanted)
    }
}

impl TryFrom<(usize, usize)> for Coordinate {
    type Error = EngineError;

    fn try_from((row, column): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(row, column)
    }
}

impl From<Coordinate> for (usize, usize) {
    fn from(coordinate: Coordinate) -> Self {
        (coordinate.row(), coordinate.column())
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
