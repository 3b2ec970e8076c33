use std::{io, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tictactoe::{config::Config, term, Game};

/// Terminal tic-tac-toe with time travel through the move history.
#[derive(Parser, Debug)]
#[command(name = "tictactoe", version)]
struct Cli {
    /// RON file with display settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start with the move list newest first
    #[arg(short, long)]
    descending: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("could not load config from {}", path.display()))?,
        None => Config::default(),
    };
    config.descending |= cli.descending;

    info!(?config, "starting game");
    let mut game = Game::with_move_order(config.descending);
    term::run(&mut game, &config, io::stdin().lock(), io::stdout().lock())?;
    info!(moves = game.history_len() - 1, status = ?game.status(), "session over");

    Ok(())
}
