//! Player-facing status text.
//!
//! The engine reports results as [`MoveOutcome`] / [`GameStatus`] values;
//! front ends turn them into the lines shown under the board here.

use crate::game::Game;
use crate::outcome::{GameStatus, MoveOutcome};
use crate::player::PlayerId;

/// Text shown for a tied game
pub const TIE_MESSAGE: &str = "It's a tie!";

/// "<name>'s turn"
pub fn turn_message(game: &Game, player: PlayerId) -> String {
    format!("{}'s turn", game.player(player).name())
}

/// "<name> wins!"
pub fn win_message(game: &Game, player: PlayerId) -> String {
    format!("{} wins!", game.player(player).name())
}

/// Text describing the result of a move
pub fn outcome_message(game: &Game, outcome: &MoveOutcome) -> String {
    match outcome {
        MoveOutcome::Continue { next } => turn_message(game, *next),
        MoveOutcome::Rejected(reason) => reason.to_string(),
        MoveOutcome::Won { winner, .. } => win_message(game, *winner),
        MoveOutcome::Tied => TIE_MESSAGE.to_string(),
    }
}

/// Text describing the game's current standing
pub fn status_message(game: &Game) -> String {
    match game.status() {
        GameStatus::Turn(player) => turn_message(game, player),
        GameStatus::Won(player) => win_message(game, player),
        GameStatus::Tied => TIE_MESSAGE.to_string(),
    }
}
