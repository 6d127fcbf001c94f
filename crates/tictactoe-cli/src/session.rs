//! Interactive terminal session.
//!
//! Reads one command per line and prints the board plus a status line after
//! each. Generic over the reader and writer so it runs the same against a
//! terminal or in-memory buffers.

use crate::render;
use std::io::{BufRead, Write};
use tictactoe_core::status;
use tictactoe_core::Game;
use tracing::{debug, info};

const HELP: &str = "Enter a cell number (0-8), 'r' to restart or 'q' to quit.";

/// A command typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play at a cell; the engine decides whether the number is usable
    Play(i64),
    Restart,
    Quit,
    Blank,
    Unknown(String),
}

impl Command {
    /// Parse one input line
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "" => Command::Blank,
            "r" | "restart" => Command::Restart,
            "q" | "quit" | "exit" => Command::Quit,
            _ => match line.parse::<i64>() {
                Ok(n) => Command::Play(n),
                Err(_) if is_integer(line) => {
                    // Too long for i64; saturate so it still reads as off the board
                    Command::Play(if line.starts_with('-') { i64::MIN } else { i64::MAX })
                }
                Err(_) => Command::Unknown(line.to_string()),
            },
        }
    }
}

fn is_integer(s: &str) -> bool {
    let digits = s.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(s);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// One player-vs-player session on a single game
pub struct Session<R, W> {
    game: Game,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(game: Game, input: R, output: W) -> Self {
        Self {
            game,
            input,
            output,
        }
    }

    /// Run until the user quits or input ends
    pub fn run(&mut self) -> anyhow::Result<()> {
        info!(game = %self.game.id(), "session started");
        writeln!(self.output, "Cells are numbered:")?;
        write!(self.output, "{}", render::cell_key())?;
        writeln!(self.output, "{}", HELP)?;

        self.game.start_game();
        let message = status::status_message(&self.game);
        self.show(&message)?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            let command = Command::parse(&line);
            debug!(?command, "command read");
            match command {
                Command::Quit => break,
                Command::Blank => continue,
                Command::Unknown(_) => writeln!(self.output, "{}", HELP)?,
                Command::Restart => {
                    self.game.start_game();
                    let message = status::status_message(&self.game);
                    self.show(&message)?;
                }
                Command::Play(index) => {
                    let outcome = self.game.play_move(index);
                    let message = status::outcome_message(&self.game, &outcome);
                    self.show(&message)?;
                }
            }
        }

        writeln!(self.output, "Bye!")?;
        info!(game = %self.game.id(), "session ended");
        Ok(())
    }

    fn show(&mut self, message: &str) -> std::io::Result<()> {
        writeln!(self.output)?;
        write!(self.output, "{}", render::board(self.game.board()))?;
        writeln!(self.output, "{}", message)
    }

    pub fn game(&self) -> &Game {
        &self.game
    }
}
