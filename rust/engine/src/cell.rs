use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents one of the two fixed symbols a player places in a cell.
/// Player one always holds [`Marker::X`], player two [`Marker::O`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Marker {
    /// Cross marker (player one)
    X,
    /// Nought marker (player two)
    O,
}

impl Marker {
    /// Returns the opposing marker.
    pub fn other(self) -> Marker {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::X => write!(f, "X"),
            Marker::O => write!(f, "O"),
        }
    }
}

/// A single cell on the board. Starts empty and accepts exactly one
/// marker per game; further writes are rejected until the board is
/// reset.
///
/// # Examples
///
/// ```
/// use noughts_engine::cell::{Cell, Marker};
///
/// let mut cell = Cell::default();
/// assert!(cell.place(Marker::X));
/// assert!(!cell.place(Marker::O));
/// assert_eq!(cell.value(), Some(Marker::X));
/// ```
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    value: Option<Marker>,
}

impl Cell {
    /// Write `marker` into the cell if it is empty.
    ///
    /// Returns `true` on success, `false` (and no mutation) if the
    /// cell already holds a marker. This is the sole mutation path,
    /// so a cell changes at most once per game.
    pub fn place(&mut self, marker: Marker) -> bool {
        if self.value.is_some() {
            return false;
        }
        self.value = Some(marker);
        true
    }

    /// Current marker, or `None` while the cell is empty.
    pub fn value(&self) -> Option<Marker> {
        self.value
    }
}
