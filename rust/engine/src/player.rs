use serde::{Deserialize, Serialize};

use crate::cell::Marker;

/// A player record: display name, fixed marker, and session win count.
/// Exactly two exist per [`crate::game::GameController`]; they are
/// created at construction and only mutated (name, wins) afterwards.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    marker: Marker,
    wins: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, marker: Marker) -> Self {
        Self {
            name: name.into(),
            marker,
            wins: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Marker assigned at construction; immutable for the session.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Wins accumulated across rounds of the current session.
    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn record_win(&mut self) {
        self.wins += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_starts_with_zero_wins() {
        let player = Player::new("Player One", Marker::X);
        assert_eq!(player.name(), "Player One");
        assert_eq!(player.marker(), Marker::X);
        assert_eq!(player.wins(), 0);
    }

    #[test]
    fn record_win_increments_by_one() {
        let mut player = Player::new("Player Two", Marker::O);
        player.record_win();
        player.record_win();
        assert_eq!(player.wins(), 2);
    }

    #[test]
    fn set_name_replaces_name_only() {
        let mut player = Player::new("Player One", Marker::X);
        player.set_name("Ada");
        assert_eq!(player.name(), "Ada");
        assert_eq!(player.marker(), Marker::X);
    }
}
