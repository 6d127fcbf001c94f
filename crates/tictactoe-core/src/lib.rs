//! Tic-tac-toe game engine
//!
//! This crate provides the core game logic for two-player tic-tac-toe on a
//! 3x3 board, including:
//! - Board representation with write-once cells
//! - Player identity (name and marker)
//! - Game state machine with turn order, win and tie detection
//! - Status text for front ends
//!
//! # Architecture
//!
//! The engine holds no global state: every [`Game`] owns its board and
//! players, so any number of games can run side by side. It can be compiled
//! to:
//! - Native Rust for the terminal front end
//! - WebAssembly for the browser page (feature `wasm`)
//!
//! # Modules
//!
//! - [`board`]: Cells, markers and the 3x3 grid
//! - [`player`]: Players and seats
//! - [`game`]: Game state machine
//! - [`outcome`]: Move results and rejection reasons
//! - [`status`]: Player-facing status text

pub mod board;
pub mod game;
pub mod outcome;
pub mod player;
pub mod status;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use board::{Board, Cell, InvalidMarker, Marker, CELL_COUNT};
pub use game::{Game, GameError, GameId, GamePhase, Line, WINNING_LINES};
pub use outcome::{GameStatus, MoveOutcome, Rejection};
pub use player::{Player, PlayerId};
