//! Strictly Rewind - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, OutputFormat};
use strictly_rewind::{AppConfig, GameBoard, Report, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Command::Play => run_play(config),
        Command::Replay {
            moves,
            view,
            format,
        } => run_replay(config, &moves, view, format),
    }
}

fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Run the interactive terminal game
fn run_play(config: AppConfig) -> Result<()> {
    // Log to a file so output does not interfere with the TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    run_tui(config)
}

/// Record moves non-interactively and print the board
#[instrument(skip(config))]
fn run_replay(
    config: AppConfig,
    moves: &[usize],
    view: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .with_writer(std::io::stderr)
        .try_init();

    info!(count = moves.len(), "Replaying moves");
    let mut board =
        GameBoard::replay(*config.first_player(), moves).context("Failed to replay moves")?;

    if let Some(position) = view {
        board
            .jump_to(position)
            .with_context(|| format!("Failed to view history position {}", position))?;
    }

    let report = Report::from_board(&board, *config.show_hints());
    match format {
        OutputFormat::Text => println!("{}", report.to_text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
