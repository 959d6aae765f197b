use serde::{Deserialize, Serialize};

use crate::cell::{Cell, Marker};
use crate::errors::GameError;

/// Number of rows and columns on the board. Fixed; never changes.
pub const SIZE: usize = 3;

/// Terminal-state evaluation result for a board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Verdict {
    /// No winning line and at least one empty cell remains.
    InProgress,
    /// Three equal markers on a row, column, or diagonal.
    Won(Marker),
    /// Every cell occupied with no winning line.
    Draw,
}

/// A fixed 3x3 grid of [`Cell`]s. Owns its cells exclusively; the only
/// mutation paths are [`Board::place`] and reconstruction via
/// [`Board::default`] on reset.
///
/// # Examples
///
/// ```
/// use noughts_engine::board::{Board, Verdict};
/// use noughts_engine::cell::Marker;
///
/// let mut board = Board::default();
/// board.place(0, 0, Marker::X).unwrap();
/// assert_eq!(board.evaluate(), Verdict::InProgress);
/// assert_eq!(board.snapshot()[0][0], Some(Marker::X));
/// ```
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Place `marker` at (`row`, `col`).
    ///
    /// # Errors
    ///
    /// - [`GameError::OutOfBounds`] if either coordinate is outside
    ///   `[0, 3)`.
    /// - [`GameError::CellOccupied`] if the addressed cell already
    ///   holds a marker.
    ///
    /// On error no cell is mutated; on success exactly one cell is.
    pub fn place(&mut self, row: usize, col: usize, marker: Marker) -> Result<(), GameError> {
        if row >= SIZE || col >= SIZE {
            return Err(GameError::OutOfBounds { row, col });
        }
        if !self.cells[row][col].place(marker) {
            return Err(GameError::CellOccupied { row, col });
        }
        Ok(())
    }

    /// Evaluate the current grid for a terminal state.
    ///
    /// Checks rows, then columns, then the two diagonals for three
    /// equal non-empty markers; if none is found and every cell is
    /// occupied, the game is a draw. Pure read; the check order only
    /// matters for parity, since a legal game produces at most one
    /// winning line.
    pub fn evaluate(&self) -> Verdict {
        let grid = self.snapshot();

        for row in 0..SIZE {
            if let Some(m) = grid[row][0] {
                if grid[row][1] == Some(m) && grid[row][2] == Some(m) {
                    return Verdict::Won(m);
                }
            }
        }

        for col in 0..SIZE {
            if let Some(m) = grid[0][col] {
                if grid[1][col] == Some(m) && grid[2][col] == Some(m) {
                    return Verdict::Won(m);
                }
            }
        }

        if let Some(m) = grid[0][0] {
            if grid[1][1] == Some(m) && grid[2][2] == Some(m) {
                return Verdict::Won(m);
            }
        }
        if let Some(m) = grid[0][2] {
            if grid[1][1] == Some(m) && grid[2][0] == Some(m) {
                return Verdict::Won(m);
            }
        }

        let full = grid.iter().flatten().all(|cell| cell.is_some());
        if full {
            Verdict::Draw
        } else {
            Verdict::InProgress
        }
    }

    /// Read-only projection of the grid's marker values, indexed
    /// `[row][col]`. Intended for rendering and tests.
    pub fn snapshot(&self) -> [[Option<Marker>; SIZE]; SIZE] {
        let mut grid = [[None; SIZE]; SIZE];
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                grid[r][c] = cell.value();
            }
        }
        grid
    }

    /// Plain-text rendering of the grid, one row per line, empty
    /// cells as `.`.
    pub fn render(&self) -> String {
        let mut text = String::new();
        for row in self.snapshot() {
            let line: Vec<&str> = row
                .iter()
                .map(|cell| match cell {
                    Some(Marker::X) => "X",
                    Some(Marker::O) => "O",
                    None => ".",
                })
                .collect();
            text.push_str(&line.join(" "));
            text.push('\n');
        }
        text
    }
}
