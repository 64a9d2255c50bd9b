//! Strictly Minimax - terminal front end
//!
//! Plays a human against the minimax engine and answers one-shot
//! evaluation and best-move queries.

#![warn(missing_docs)]

mod cli;
mod config;
mod play;
mod report;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::CliConfig;
use strictly_minimax::analyze;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let (human, engine_first) = match &cli.command {
        Command::Play {
            human,
            engine_first,
        } => (*human, *engine_first),
        _ => (None, false),
    };
    let config = CliConfig::load(cli.config.as_deref())?.with_overrides(
        human,
        engine_first,
        cli.log_level.clone(),
    );
    init_tracing(config.log_level());
    debug!(?config, "Configuration resolved");

    match cli.command {
        Command::Play { .. } => run_play(&config),
        Command::Evaluate { board, json } => {
            let evaluation = report::evaluation(&board);
            println!("{}", report::render_evaluation(&evaluation, json)?);
            Ok(())
        }
        Command::BestMove {
            board,
            to_move,
            json,
        } => {
            let analysis = analyze(&board, to_move)?;
            info!(best = %analysis.best, value = %analysis.value, "Best move found");
            println!("{}", report::render_analysis(&board, &analysis, json)?);
            Ok(())
        }
    }
}

/// Installs the stderr subscriber; RUST_LOG takes precedence over config.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the interactive game on stdin/stdout
fn run_play(config: &CliConfig) -> Result<()> {
    info!("Starting interactive game");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    play::run(config, stdin.lock(), stdout.lock())
}
