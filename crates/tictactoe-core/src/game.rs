//! Core game state machine.
//!
//! This module contains the [`Game`] struct, which owns the board and both
//! players and drives turns, win detection and tie detection.

use crate::board::{Board, Cell, Marker, CELL_COUNT};
use crate::outcome::{GameStatus, MoveOutcome, Rejection};
use crate::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

/// Three cell indices forming a row, column or diagonal
pub type Line = [usize; 3];

/// Every line that wins the game
pub const WINNING_LINES: [Line; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Errors that can occur when setting up a game
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("Both players use the marker {0}")]
    DuplicateMarker(Marker),
}

/// Game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Moves are being accepted
    InProgress,

    /// A player completed a line
    Won { winner: PlayerId, line: Line },

    /// The board filled up without a line
    Tied,
}

impl GamePhase {
    /// Whether the game has concluded
    pub fn is_over(&self) -> bool {
        !matches!(self, GamePhase::InProgress)
    }
}

/// Unique identifier of a game instance, used to tell games apart in logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(Uuid);

impl GameId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single game of tic-tac-toe between two players.
///
/// Serialize-only: a game is always built through [`Game::new`] or
/// [`Game::standard`] so its players and phase stay consistent.
#[derive(Debug, Clone, Serialize)]
pub struct Game {
    id: GameId,
    board: Board,
    players: [Player; 2],
    active: PlayerId,
    phase: GamePhase,
}

impl Game {
    /// Create a new game, ready for the first player's move
    pub fn new(first: Player, second: Player) -> Result<Self, GameError> {
        if first.marker() == second.marker() {
            return Err(GameError::DuplicateMarker(first.marker()));
        }

        Ok(Self {
            id: GameId::new(),
            board: Board::new(),
            players: [first, second],
            active: PlayerId::First,
            phase: GamePhase::InProgress,
        })
    }

    /// Create a game between "Player 1" (X) and "Player 2" (O)
    pub fn standard() -> Self {
        Self {
            id: GameId::new(),
            board: Board::new(),
            players: [
                Player::new("Player 1", Marker::X),
                Player::new("Player 2", Marker::O),
            ],
            active: PlayerId::First,
            phase: GamePhase::InProgress,
        }
    }

    /// Clear the board and hand the first move back to Player 1.
    ///
    /// Players are kept, so this doubles as "rematch".
    pub fn start_game(&mut self) {
        self.board.reset();
        self.active = PlayerId::First;
        self.phase = GamePhase::InProgress;
        debug!(game = %self.id, "game started");
    }

    /// Play the active player's marker at `index`.
    ///
    /// Rejected moves (game over, index outside 0-8, occupied cell) leave
    /// all state untouched.
    pub fn play_move<I>(&mut self, index: I) -> MoveOutcome
    where
        I: TryInto<usize>,
    {
        if self.phase.is_over() {
            return MoveOutcome::Rejected(Rejection::GameOver);
        }

        let index = match index.try_into() {
            Ok(i) if i < CELL_COUNT => i,
            _ => return MoveOutcome::Rejected(Rejection::InvalidIndex),
        };

        let player = self.active;
        let marker = self.player(player).marker();
        if !self.board.set_mark(index, marker) {
            return MoveOutcome::Rejected(Rejection::CellTaken { index });
        }
        debug!(game = %self.id, ?player, index, "mark placed");

        if let Some(line) = self.completed_line(marker) {
            self.phase = GamePhase::Won {
                winner: player,
                line,
            };
            info!(game = %self.id, ?player, ?line, "game won");
            return MoveOutcome::Won {
                winner: player,
                line,
            };
        }

        if self.board.is_full() {
            self.phase = GamePhase::Tied;
            info!(game = %self.id, "game tied");
            return MoveOutcome::Tied;
        }

        self.active = player.opponent();
        MoveOutcome::Continue { next: self.active }
    }

    /// First line held entirely by `marker`, if any
    fn completed_line(&self, marker: Marker) -> Option<Line> {
        let cells = self.board.cells();
        WINNING_LINES
            .into_iter()
            .find(|line| line.iter().all(|&i| cells[i] == Cell::Marked(marker)))
    }

    /// Unique id of this game instance
    pub fn id(&self) -> GameId {
        self.id
    }

    /// The board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Read-only view of all cells in row-major order
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        self.board.cells()
    }

    /// Get a player by seat
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Both players, first seat first
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Seat whose move it is (or who made the final move, once over)
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    /// Current phase
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Check if the game has concluded
    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    /// Get the winner if the game was won
    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            GamePhase::Won { winner, .. } => Some(winner),
            _ => None,
        }
    }

    /// Get the completed line if the game was won
    pub fn winning_line(&self) -> Option<Line> {
        match self.phase {
            GamePhase::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Current standing, for display
    pub fn status(&self) -> GameStatus {
        match self.phase {
            GamePhase::InProgress => GameStatus::Turn(self.active),
            GamePhase::Won { winner, .. } => GameStatus::Won(winner),
            GamePhase::Tied => GameStatus::Tied,
        }
    }

    /// Indices the active player may play; empty once the game is over
    pub fn valid_moves(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        self.board.empty_cells()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::standard()
    }
}
