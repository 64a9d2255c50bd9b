//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_minimax::{Board, Player};

/// Strictly Minimax - tic-tac-toe against an exhaustive search engine
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Play tic-tac-toe against a perfect minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./strictly_minimax.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (e.g. "info", "strictly_minimax=debug")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on the terminal
    Play {
        /// Mark played by the human (O or X)
        #[arg(long)]
        human: Option<Player>,

        /// Let the engine make the opening move
        #[arg(long)]
        engine_first: bool,
    },

    /// Evaluate a board: terminality, utility and winning line
    Evaluate {
        /// Board in compact form, e.g. "OO./XX./..."
        board: Board,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Compute the optimal move for the side to move
    BestMove {
        /// Board in compact form, e.g. "OO./XX./..."
        board: Board,

        /// Side to move
        #[arg(long, default_value = "O")]
        to_move: Player,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
