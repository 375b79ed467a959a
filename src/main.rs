use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use gomoku::config::AppConfig;
use gomoku::game::{GameState, Player};
use gomoku::ui::Console;

/// Play Gomoku in the terminal.
#[derive(Parser)]
#[command(name = "gomoku", about = "Two-player Gomoku in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "gomoku.toml")]
    config: PathBuf,

    /// Override board side length
    #[arg(long)]
    board_size: Option<usize>,

    /// Override number of stones in a row needed to win
    #[arg(long)]
    win_length: Option<usize>,

    /// Override who moves first: black or white
    #[arg(long)]
    first_player: Option<Player>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(size) = cli.board_size {
        app_config.game.board_size = size;
    }
    if let Some(win_length) = cli.win_length {
        app_config.game.win_length = win_length;
    }
    if let Some(player) = cli.first_player {
        app_config.play.first_player = player;
    }

    if !app_config.game.win_reachable() {
        warn!(
            board_size = app_config.game.board_size,
            win_length = app_config.game.win_length,
            "win length exceeds board size, nobody can win"
        );
    }

    let game_state = GameState::new(app_config.game, app_config.play.first_player)
        .context("invalid game configuration")?;

    let stdin = io::stdin();
    let mut console = Console::new(game_state, stdin.lock(), io::stdout());
    console.run().context("console I/O failed")?;
    Ok(())
}
