//! Terminal front end for the tic-tac-toe engine.

use std::io;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod render;
mod session;

use config::Config;
use session::Session;

fn main() -> anyhow::Result<()> {
    // Initialize tracing on stderr so log lines stay out of the board output
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env()?;
    let game = config.build_game()?;
    info!(
        player1 = %game.players()[0],
        player2 = %game.players()[1],
        "Starting tic-tac-toe"
    );

    let stdin = io::stdin();
    let mut session = Session::new(game, stdin.lock(), io::stdout());
    session.run()?;

    info!(status = ?session.game().status(), "Final game status");
    Ok(())
}
