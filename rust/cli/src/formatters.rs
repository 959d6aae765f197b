//! Board and player formatters for terminal display.
//!
//! Pure functions only; all output assembly for the `state` and `move`
//! commands lives here so the handlers stay thin and the formatting is
//! testable without streams.

use noughts_engine::game::GameController;
use noughts_engine::player::Player;

/// One-line player summary: name, marker, and session win count.
///
/// # Example
///
/// ```
/// use noughts_engine::cell::Marker;
/// use noughts_engine::player::Player;
/// use noughts_cli::formatters::format_player;
///
/// let player = Player::new("Ada", Marker::X);
/// assert_eq!(format_player(&player), "Ada (X): 0 wins");
/// ```
pub fn format_player(player: &Player) -> String {
    let noun = if player.wins() == 1 { "win" } else { "wins" };
    format!("{} ({}): {} {}", player.name(), player.marker(), player.wins(), noun)
}

/// Full plain-text state report: grid, players, active player,
/// game-over flag, and the result line when one exists.
pub fn format_state(game: &GameController) -> String {
    let mut text = game.render_board();
    text.push_str("Players:\n");
    for player in game.players() {
        text.push_str("  ");
        text.push_str(&format_player(player));
        text.push('\n');
    }
    text.push_str(&format!("Active: {}\n", format_player(game.active_player())));
    text.push_str(&format!("Game over: {}\n", game.is_over()));
    if let Some(result) = game.result() {
        text.push_str(&format!("Result: {}\n", result));
    }
    text
}

/// The line printed after a non-terminal move.
pub fn format_turn_line(game: &GameController) -> String {
    format!("{}'s turn.", game.active_player().name())
}

/// User-facing message for a locally recovered rejected move.
pub fn rejection_message(error: &noughts_engine::errors::GameError) -> String {
    use noughts_engine::errors::GameError;
    match error {
        GameError::CellOccupied { .. } => "This spot is taken.".to_string(),
        GameError::GameOver => "Game is over! Restart to play again.".to_string(),
        GameError::OutOfBounds { .. } => error.to_string(),
    }
}
