use serde::{Deserialize, Serialize};

use crate::board::{Board, Verdict, SIZE};
use crate::cell::Marker;
use crate::errors::GameError;
use crate::player::Player;

/// Outcome of a successfully placed move.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// No terminal state reached; the turn advanced to the other player.
    Continued,
    /// The placed marker completed a winning line.
    Won(Marker),
    /// The placement filled the board with no winning line.
    Draw,
}

/// Orchestrates one game session: a [`Board`], two [`Player`] records,
/// turn order, the game-over flag, and the final-result message.
///
/// The controller is the only externally-driven surface of the engine.
/// A presentation layer calls [`GameController::play_round`] and
/// re-renders from the read accessors after every call.
///
/// # Examples
///
/// ```
/// use noughts_engine::game::{GameController, RoundOutcome};
/// use noughts_engine::cell::Marker;
///
/// let mut game = GameController::new();
/// assert_eq!(game.active_player().marker(), Marker::X);
///
/// let outcome = game.play_round(0, 0).unwrap();
/// assert_eq!(outcome, RoundOutcome::Continued);
/// assert_eq!(game.active_player().marker(), Marker::O);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "GameControllerWire")]
pub struct GameController {
    board: Board,
    players: [Player; 2],
    active_index: usize,
    game_over: bool,
    final_result: Option<String>,
}

/// Wire form of [`GameController`]. Session data arrives from files a
/// user can edit, so the active-player index is validated before the
/// controller is constructed; indexing with it must never panic.
#[derive(Deserialize)]
struct GameControllerWire {
    board: Board,
    players: [Player; 2],
    active_index: usize,
    game_over: bool,
    final_result: Option<String>,
}

impl TryFrom<GameControllerWire> for GameController {
    type Error = String;

    fn try_from(wire: GameControllerWire) -> Result<Self, Self::Error> {
        if wire.active_index > 1 {
            return Err(format!(
                "active player index must be 0 or 1, got {}",
                wire.active_index
            ));
        }
        Ok(Self {
            board: wire.board,
            players: wire.players,
            active_index: wire.active_index,
            game_over: wire.game_over,
            final_result: wire.final_result,
        })
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    /// New session with the default player names.
    pub fn new() -> Self {
        Self::with_names("Player One", "Player Two")
    }

    /// New session with custom names. Player one always holds `X` and
    /// moves first.
    pub fn with_names(player_one: impl Into<String>, player_two: impl Into<String>) -> Self {
        Self {
            board: Board::default(),
            players: [
                Player::new(player_one, Marker::X),
                Player::new(player_two, Marker::O),
            ],
            active_index: 0,
            game_over: false,
            final_result: None,
        }
    }

    /// Play one round at (`row`, `col`) for the active player.
    ///
    /// On a winning move the winner's `wins` counter is incremented,
    /// the result message is set, and the session enters the `Over`
    /// state. On a draw only the message and state change. Otherwise
    /// the turn passes to the other player.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] if a terminal state was already
    ///   reached; call [`GameController::reset_game`] first.
    /// - [`GameError::CellOccupied`] if the cell already holds a
    ///   marker.
    /// - [`GameError::OutOfBounds`] if a coordinate is outside
    ///   `[0, 3)`.
    ///
    /// Every error leaves the board, turn order, and scores untouched.
    pub fn play_round(&mut self, row: usize, col: usize) -> Result<RoundOutcome, GameError> {
        if self.game_over {
            return Err(GameError::GameOver);
        }

        let marker = self.players[self.active_index].marker();
        self.board.place(row, col, marker)?;

        match self.board.evaluate() {
            Verdict::Won(winner) => {
                self.players[self.active_index].record_win();
                let message = format!("{} wins!", self.players[self.active_index].name());
                self.final_result = Some(message);
                self.game_over = true;
                Ok(RoundOutcome::Won(winner))
            }
            Verdict::Draw => {
                self.final_result = Some("It's a draw!".to_string());
                self.game_over = true;
                Ok(RoundOutcome::Draw)
            }
            Verdict::InProgress => {
                self.active_index = 1 - self.active_index;
                Ok(RoundOutcome::Continued)
            }
        }
    }

    /// The player entitled to make the next move.
    pub fn active_player(&self) -> &Player {
        &self.players[self.active_index]
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Final-result message, or `None` while the game is in progress.
    pub fn result(&self) -> Option<&str> {
        self.final_result.as_deref()
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Read-only projection of the grid, indexed `[row][col]`.
    pub fn snapshot(&self) -> [[Option<Marker>; SIZE]; SIZE] {
        self.board.snapshot()
    }

    /// Plain-text rendering of the board for terminal display.
    pub fn render_board(&self) -> String {
        self.board.render()
    }

    /// Rename one player. Permissive on bad input: an index outside
    /// `{0, 1}` or an empty/whitespace name keeps the current name
    /// with no error.
    pub fn set_player_name(&mut self, index: usize, name: &str) {
        if index > 1 || name.trim().is_empty() {
            return;
        }
        self.players[index].set_name(name);
    }

    /// Start a fresh round: empty board, player one active, empty
    /// result, state back to in-progress. Names and win counts
    /// persist across resets.
    pub fn reset_game(&mut self) {
        self.board = Board::default();
        self.active_index = 0;
        self.game_over = false;
        self.final_result = None;
    }
}
