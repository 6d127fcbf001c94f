//! Results of playing a move.
//!
//! This module defines the structured outcome returned by
//! [`crate::Game::play_move`] and the reasons a move can be rejected.

use crate::game::Line;
use crate::player::PlayerId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a move was refused. Rejected moves never change any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Rejection {
    #[error("Game is over, please restart.")]
    GameOver,

    #[error("Invalid index, choose a number between 0 and 8.")]
    InvalidIndex,

    #[error("Cell already taken, choose another.")]
    CellTaken { index: usize },
}

/// What happened after a call to `play_move`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Move accepted; the other player is up
    Continue { next: PlayerId },

    /// Move refused; nothing changed
    Rejected(Rejection),

    /// Move completed a line
    Won { winner: PlayerId, line: Line },

    /// Move filled the board without completing a line
    Tied,
}

impl MoveOutcome {
    /// Whether the move was applied to the board
    pub fn is_accepted(&self) -> bool {
        !matches!(self, MoveOutcome::Rejected(_))
    }

    /// Whether this move ended the game
    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveOutcome::Won { .. } | MoveOutcome::Tied)
    }

    /// The rejection reason, if the move was refused
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            MoveOutcome::Rejected(r) => Some(*r),
            _ => None,
        }
    }
}

/// Current standing of a game, for display after a reset or a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting on this player
    Turn(PlayerId),
    /// Game ended with this winner
    Won(PlayerId),
    /// Game ended with a full board and no line
    Tied,
}
