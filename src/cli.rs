//! Command-line interface for strictly_rewind.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Strictly Rewind - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_rewind")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play,

    /// Record a sequence of moves and print the resulting board
    Replay {
        /// Cell indices (0-8, row-major), comma-separated
        #[arg(short, long, value_delimiter = ',', num_args = 1..)]
        moves: Vec<usize>,

        /// Jump to this history position before printing (0 is the game start)
        #[arg(long)]
        view: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// How `replay` prints its result
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable board
    Text,
    /// JSON report
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::parse_from(["strictly_rewind", "replay", "--moves", "4,0,8", "--view", "2"]);
        match cli.command {
            Command::Replay { moves, view, format } => {
                assert_eq!(moves, vec![4, 0, 8]);
                assert_eq!(view, Some(2));
                assert_eq!(format, OutputFormat::Text);
            }
            Command::Play => panic!("Expected replay"),
        }
    }

    #[test]
    fn test_parse_global_config() {
        let cli = Cli::parse_from(["strictly_rewind", "play", "--config", "game.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
    }
}
