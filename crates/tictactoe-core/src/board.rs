//! Game board representation.
//!
//! This module contains:
//! - Marker symbols placed by players
//! - Cell states (empty or marked)
//! - The 3x3 board with its write-once mutation rule
//!
//! Cells are addressed by index in row-major order:
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of cells on the board
pub const CELL_COUNT: usize = 9;

/// Number of cells per row (and per column)
pub const SIDE: usize = 3;

/// A marker string that is not exactly one visible character
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("invalid marker {0:?}: must be a single visible character")]
pub struct InvalidMarker(pub String);

/// A player's marker symbol, e.g. `X` or `O`.
///
/// Always a single character that is not whitespace, a control character or
/// a zero-width formatting character, so a marked cell can never be mistaken
/// for an empty one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Marker(char);

impl Marker {
    /// Marker traditionally used by the first player
    pub const X: Marker = Marker('X');
    /// Marker traditionally used by the second player
    pub const O: Marker = Marker('O');

    /// Create a marker from a character
    pub fn new(symbol: char) -> Result<Self, InvalidMarker> {
        if symbol.is_whitespace() || symbol.is_control() || is_zero_width(symbol) {
            return Err(InvalidMarker(symbol.to_string()));
        }
        Ok(Self(symbol))
    }

    /// The symbol as a character
    pub fn symbol(&self) -> char {
        self.0
    }
}

/// Format characters that render with no width
fn is_zero_width(symbol: char) -> bool {
    matches!(
        symbol,
        '\u{00AD}'
            | '\u{034F}'
            | '\u{061C}'
            | '\u{115F}'
            | '\u{1160}'
            | '\u{180E}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{206F}'
            | '\u{FE00}'..='\u{FE0F}'
            | '\u{FEFF}'
            | '\u{E0000}'..='\u{E007F}'
    )
}

impl FromStr for Marker {
    type Err = InvalidMarker;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Marker::new(symbol),
            _ => Err(InvalidMarker(s.to_string())),
        }
    }
}

impl TryFrom<char> for Marker {
    type Error = InvalidMarker;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Marker::new(symbol)
    }
}

impl From<Marker> for char {
    fn from(marker: Marker) -> Self {
        marker.0
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What occupies a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Cell {
    /// Nothing placed yet
    #[default]
    Empty,
    /// Holds a player's marker
    Marked(Marker),
}

impl Cell {
    /// Whether nothing has been placed here
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The marker in this cell, if any
    pub fn marker(&self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Marked(m) => Some(*m),
        }
    }
}

/// Empty cells display as an empty string, marked cells as their symbol.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Marked(m) => write!(f, "{}", m),
        }
    }
}

/// The 3x3 game board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a marker on a cell.
    ///
    /// Returns `false` without touching the grid if the cell is already
    /// marked or the index is off the board.
    pub fn set_mark(&mut self, index: usize, marker: Marker) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if cell.is_empty() => {
                *cell = Cell::Marked(marker);
                true
            }
            _ => false,
        }
    }

    /// Read-only view of all cells in row-major order
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Get a single cell
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Clear every cell
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Whether every cell holds a marker
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of marked cells
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Indices of unmarked cells, ascending
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// Rows of cells, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(SIDE)
    }
}
