//! Player identity.
//!
//! A [`Player`] is an immutable pairing of a display name and a marker.
//! Seats in a game are addressed with [`PlayerId`].

use crate::board::Marker;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two seats a player occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    /// Moves first after every reset ("Player 1")
    First,
    /// "Player 2"
    Second,
}

impl PlayerId {
    /// Both seats in turn order
    pub const ALL: [PlayerId; 2] = [PlayerId::First, PlayerId::Second];

    /// The other seat
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::First => PlayerId::Second,
            PlayerId::Second => PlayerId::First,
        }
    }

    /// Zero-based seat index
    pub fn index(self) -> usize {
        match self {
            PlayerId::First => 0,
            PlayerId::Second => 1,
        }
    }
}

/// A contestant: display name plus marker symbol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    marker: Marker,
}

impl Player {
    /// Create a new player.
    ///
    /// Markers are not checked for uniqueness here; [`crate::Game::new`]
    /// rejects two players sharing one.
    pub fn new(name: impl Into<String>, marker: Marker) -> Self {
        Self {
            name: name.into(),
            marker,
        }
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Marker placed on the board by this player
    pub fn marker(&self) -> Marker {
        self.marker
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_accessors() {
        let player = Player::new("Alice", Marker::X);
        assert_eq!(player.name(), "Alice");
        assert_eq!(player.marker(), Marker::X);
        assert_eq!(player.to_string(), "Alice (X)");
    }

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(PlayerId::First.opponent(), PlayerId::Second);
        assert_eq!(PlayerId::Second.opponent(), PlayerId::First);
        assert_eq!(PlayerId::First.opponent().opponent(), PlayerId::First);
    }

    #[test]
    fn test_seat_indices() {
        let indices: Vec<usize> = PlayerId::ALL.iter().map(|p| p.index()).collect();
        assert_eq!(indices, vec![0, 1]);
    }
}
