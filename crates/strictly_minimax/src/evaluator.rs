//! Board evaluation: terminality, utility and the winning line.
//!
//! Every query is a pure function of a board snapshot. All of them are
//! answered from the same scan (see [`Line::SCAN_ORDER`]), so the line
//! reported for a win is deterministic.

use super::rules::{completed_line, is_full};
use super::{Board, GameStatus, Line, Player};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Payoff of a terminal position, from O's point of view.
///
/// Variants are declared in ascending order so comparisons follow the
/// numeric value.
#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Utility {
    /// X completed a line (-1).
    #[display("-1")]
    XWins,
    /// Full board without a line (0).
    #[display("0")]
    Draw,
    /// O completed a line (+1).
    #[display("+1")]
    OWins,
}

impl Utility {
    /// Numeric payoff: -1, 0 or +1.
    pub fn value(self) -> i8 {
        match self {
            Utility::XWins => -1,
            Utility::Draw => 0,
            Utility::OWins => 1,
        }
    }

    /// Utility of a win by `player`.
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::O => Utility::OWins,
            Player::X => Utility::XWins,
        }
    }
}

/// Error from an evaluator query whose precondition does not hold.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EvalError {
    /// Utility is only defined for terminal boards.
    #[display("Board {} is not terminal; utility is undefined", _0)]
    NotTerminal(#[error(not(source))] Board),
}

/// What a front end needs to render after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Whether the game continues, and if not, how it ended.
    pub status: GameStatus,
    /// The line to highlight, present only for wins.
    pub line: Option<Line>,
}

impl Verdict {
    /// True once the game has been won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.status.is_over()
    }
}

/// Evaluates the board in a single scan.
#[instrument]
pub fn evaluate(board: &Board) -> Verdict {
    if let Some((player, line)) = completed_line(board) {
        return Verdict {
            status: GameStatus::Won(player),
            line: Some(line),
        };
    }
    let status = if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    };
    Verdict { status, line: None }
}

/// Utility of the board if it is terminal, `None` otherwise.
pub(crate) fn terminal_utility(board: &Board) -> Option<Utility> {
    if let Some((player, _)) = completed_line(board) {
        Some(Utility::win_for(player))
    } else if board.filled() == 9 {
        Some(Utility::Draw)
    } else {
        None
    }
}

/// True iff a line of three is complete or every square is filled.
#[instrument]
pub fn is_terminal(board: &Board) -> bool {
    terminal_utility(board).is_some()
}

/// Payoff of a terminal board: +1 for an O line, -1 for an X line, 0 for a
/// full board without a line.
///
/// Fails with [`EvalError::NotTerminal`] when the game is still open.
#[instrument]
pub fn utility(board: &Board) -> Result<Utility, EvalError> {
    terminal_utility(board).ok_or(EvalError::NotTerminal(*board))
}

/// The line that won the game; `None` for open boards and draws.
#[instrument]
pub fn winning_line(board: &Board) -> Option<Line> {
    super::rules::winning_line(board)
}
