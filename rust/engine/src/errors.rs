use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },
    #[error("Game is over! Restart to play again.")]
    GameOver,
    #[error("Coordinates ({row}, {col}) are outside the 3x3 board")]
    OutOfBounds { row: usize, col: usize },
}
