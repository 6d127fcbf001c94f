//! Front-end configuration read from the environment.

use thiserror::Error;
use tictactoe_core::{Game, GameError, InvalidMarker, Marker, Player};

pub const PLAYER1_NAME_VAR: &str = "TICTACTOE_PLAYER1_NAME";
pub const PLAYER1_MARKER_VAR: &str = "TICTACTOE_PLAYER1_MARKER";
pub const PLAYER2_NAME_VAR: &str = "TICTACTOE_PLAYER2_NAME";
pub const PLAYER2_MARKER_VAR: &str = "TICTACTOE_PLAYER2_MARKER";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}: {source}")]
    InvalidMarker {
        var: &'static str,
        #[source]
        source: InvalidMarker,
    },

    #[error("{0}")]
    InvalidPlayers(#[from] GameError),
}

/// Player setup for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub player1_name: String,
    pub player1_marker: Marker,
    pub player2_name: String,
    pub player2_marker: Marker,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player1_name: "Player 1".into(),
            player1_marker: Marker::X,
            player2_name: "Player 2".into(),
            player2_marker: Marker::O,
        }
    }
}

impl Config {
    /// Read overrides from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup; unset variables keep defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(name) = lookup(PLAYER1_NAME_VAR) {
            config.player1_name = name;
        }
        if let Some(name) = lookup(PLAYER2_NAME_VAR) {
            config.player2_name = name;
        }
        if let Some(raw) = lookup(PLAYER1_MARKER_VAR) {
            config.player1_marker = parse_marker(PLAYER1_MARKER_VAR, &raw)?;
        }
        if let Some(raw) = lookup(PLAYER2_MARKER_VAR) {
            config.player2_marker = parse_marker(PLAYER2_MARKER_VAR, &raw)?;
        }

        Ok(config)
    }

    /// Create the game these settings describe
    pub fn build_game(&self) -> Result<Game, ConfigError> {
        let game = Game::new(
            Player::new(self.player1_name.clone(), self.player1_marker),
            Player::new(self.player2_name.clone(), self.player2_marker),
        )?;
        Ok(game)
    }
}

fn parse_marker(var: &'static str, raw: &str) -> Result<Marker, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|source| ConfigError::InvalidMarker { var, source })
}
