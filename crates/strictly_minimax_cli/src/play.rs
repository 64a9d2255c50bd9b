//! Interactive terminal game loop.
//!
//! The loop owns the [`Game`] value and threads it through every command;
//! all rules live in the core crate.

use crate::config::CliConfig;
use anyhow::Result;
use std::io::{BufRead, Write};
use strictly_minimax::{Game, GameStatus, MoveError, Player, Position, Turn, Verdict};
use tracing::{debug, info, instrument, warn};

/// One line of user input, interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place the human's mark.
    Cell(Position),
    /// Start a new game.
    NewGame,
    /// Leave the program.
    Quit,
    /// Print the command summary.
    Help,
}

/// Parses a cell number (1-9), a `row,column` pair (0-based) or a label.
#[instrument]
pub fn parse_input(line: &str) -> Option<Input> {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "q" | "quit" | "exit" => return Some(Input::Quit),
        "n" | "new" | "restart" => return Some(Input::NewGame),
        "h" | "help" | "?" => return Some(Input::Help),
        _ => {}
    }

    if let Ok(num) = line.parse::<usize>() {
        return num
            .checked_sub(1)
            .and_then(Position::from_index)
            .map(Input::Cell);
    }

    if let Some((row, column)) = line.split_once(',') {
        let row = row.trim().parse().ok()?;
        let column = column.trim().parse().ok()?;
        return Position::from_coords(row, column).map(Input::Cell);
    }

    Position::from_label(line).map(Input::Cell)
}

const HELP: &str = "Enter a cell number (1-9), a row,column pair (e.g. 0,2) or a label \
(e.g. center). 'new' restarts, 'quit' exits.";

/// Runs games until the input ends or the user quits.
#[instrument(skip_all, fields(human = %config.human()))]
pub fn run<R: BufRead, W: Write>(config: &CliConfig, input: R, mut output: W) -> Result<()> {
    let mut game = new_game(config);
    info!("Game loop started");
    writeln!(
        output,
        "You play {}, the engine plays {}. {}",
        game.human(),
        game.engine(),
        HELP
    )?;
    open_if_engine_first(&mut game, config, &mut output)?;
    show_board(&game, config, &mut output)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_input(&line) {
            Some(Input::Quit) => break,
            Some(Input::Help) => writeln!(output, "{}", HELP)?,
            Some(Input::NewGame) => {
                game.reset();
                writeln!(output, "New game.")?;
                open_if_engine_first(&mut game, config, &mut output)?;
                show_board(&game, config, &mut output)?;
            }
            Some(Input::Cell(position)) => match game.play(position) {
                Ok(turn) => report_turn(&game, &turn, config, &mut output)?,
                Err(MoveError::SquareOccupied(pos)) => {
                    writeln!(output, "Invalid move: {} is already taken.", pos.label())?;
                }
                Err(MoveError::GameOver) => {
                    writeln!(output, "The game is over. Type 'new' to play again.")?;
                }
                Err(err) => {
                    warn!(%err, "Unexpected move failure");
                    return Err(err.into());
                }
            },
            None => {
                debug!(input = %line, "Unrecognized input");
                writeln!(output, "Unrecognized input {:?}. {}", line.trim(), HELP)?;
            }
        }
        output.flush()?;
    }

    info!("Game loop finished");
    Ok(())
}

fn new_game(config: &CliConfig) -> Game {
    let human = *config.human();
    let first = if *config.engine_first() {
        human.opponent()
    } else {
        human
    };
    Game::with_first_player(human, first)
}

fn open_if_engine_first<W: Write>(game: &mut Game, config: &CliConfig, output: &mut W) -> Result<()> {
    if *config.engine_first() {
        let opening = game.engine_turn()?;
        writeln!(output, "Engine plays {}.", opening.position.label())?;
    }
    Ok(())
}

fn show_board<W: Write>(game: &Game, config: &CliConfig, output: &mut W) -> Result<()> {
    writeln!(output, "{}", game.board().render(*config.show_hints()))?;
    Ok(())
}

fn report_turn<W: Write>(game: &Game, turn: &Turn, config: &CliConfig, output: &mut W) -> Result<()> {
    if let Some(reply) = turn.engine_move {
        writeln!(output, "Engine plays {}.", reply.position.label())?;
    }
    show_board(game, config, output)?;
    if let Some(banner) = banner(&turn.verdict, game.human()) {
        writeln!(output, "{}", banner)?;
    }
    Ok(())
}

/// End-of-game message from the human's point of view.
pub fn banner(verdict: &Verdict, human: Player) -> Option<String> {
    let line = verdict
        .line
        .map(|line| format!(" ({})", line))
        .unwrap_or_default();
    match verdict.status {
        GameStatus::InProgress => None,
        GameStatus::Draw => Some("Draw! Type 'new' to play again.".to_string()),
        GameStatus::Won(winner) if winner == human => {
            Some(format!("You win{}! Type 'new' to play again.", line))
        }
        GameStatus::Won(_) => Some(format!("You lose{}. Type 'new' to play again.", line)),
    }
}
