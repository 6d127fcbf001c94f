//! WebAssembly bindings for the tic-tac-toe engine.
//!
//! This module exposes the game to the browser page through wasm-bindgen,
//! keeping the page's original calls: `startGame`, `playMove` and `getBoard`.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use crate::board::Marker;
#[cfg(feature = "wasm")]
use crate::game::Game;
#[cfg(feature = "wasm")]
use crate::player::Player;
#[cfg(feature = "wasm")]
use crate::status;

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// WASM-exposed game wrapper
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl WasmGame {
    /// Create a game between "Player 1" (X) and "Player 2" (O)
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmGame {
        WasmGame {
            game: Game::standard(),
        }
    }

    /// Create a game with custom names and markers
    #[wasm_bindgen(js_name = withPlayers)]
    pub fn with_players(
        name1: &str,
        marker1: &str,
        name2: &str,
        marker2: &str,
    ) -> Result<WasmGame, JsValue> {
        let first: Marker = marker1
            .parse()
            .map_err(|e| JsValue::from_str(&format!("Invalid player 1 marker: {}", e)))?;
        let second: Marker = marker2
            .parse()
            .map_err(|e| JsValue::from_str(&format!("Invalid player 2 marker: {}", e)))?;

        let game = Game::new(Player::new(name1, first), Player::new(name2, second))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmGame { game })
    }

    /// Reset the board; returns the status line to show
    #[wasm_bindgen(js_name = startGame)]
    pub fn start_game(&mut self) -> String {
        self.game.start_game();
        status::status_message(&self.game)
    }

    /// Play a move at a cell index, returns the status line to show
    #[wasm_bindgen(js_name = playMove)]
    pub fn play_move(&mut self, index: i32) -> String {
        let outcome = self.game.play_move(index);
        status::outcome_message(&self.game, &outcome)
    }

    /// Get the board as a JSON array of 9 strings ("" for empty cells)
    #[wasm_bindgen(js_name = getBoard)]
    pub fn get_board(&self) -> String {
        let cells: Vec<String> = self.game.cells().iter().map(|c| c.to_string()).collect();
        serde_json::to_string(&cells).unwrap_or_else(|_| "[]".to_string())
    }

    /// Get the current status line
    #[wasm_bindgen(js_name = getStatus)]
    pub fn get_status(&self) -> String {
        status::status_message(&self.game)
    }

    /// Get the full game state as JSON
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> String {
        serde_json::to_string(&self.game).unwrap_or_else(|_| "{}".to_string())
    }

    /// Check if the game is finished
    #[wasm_bindgen(js_name = isOver)]
    pub fn is_over(&self) -> bool {
        self.game.is_over()
    }

    /// Cells of the completed line, for highlighting
    #[wasm_bindgen(js_name = getWinningLine)]
    pub fn get_winning_line(&self) -> Option<Vec<u8>> {
        self.game
            .winning_line()
            .map(|line| line.iter().map(|&i| i as u8).collect())
    }

    /// Cells the active player may still play
    #[wasm_bindgen(js_name = getValidMoves)]
    pub fn get_valid_moves(&self) -> Vec<u8> {
        self.game.valid_moves().into_iter().map(|i| i as u8).collect()
    }
}

#[cfg(feature = "wasm")]
impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}
