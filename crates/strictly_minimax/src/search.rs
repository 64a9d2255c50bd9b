//! Exhaustive minimax search.
//!
//! The search keeps no state between calls. Every node is a fresh copy of
//! its parent's board, and the whole tree below the root is expanded: there
//! is no pruning, move ordering or caching.
//!
//! Legal actions are enumerated in row-major order, which is also the
//! tie-break order: the root keeps the first action whose value strictly
//! improves on the best seen so far.

use super::evaluator::{self, Utility};
use super::{Board, Player, Position};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace, warn};

/// Error from a search whose precondition does not hold.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SearchError {
    /// The game is already decided; there is no move to choose.
    #[display("Board {} is already terminal", _0)]
    TerminalPosition(#[error(not(source))] Board),

    /// A non-terminal board offered no empty square.
    #[display("Board {} has no legal moves", _0)]
    NoLegalMoves(#[error(not(source))] Board),
}

/// Minimax value of one root action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionScore {
    /// The candidate action.
    pub position: Position,
    /// Value of the position after playing it, under optimal play.
    pub value: Utility,
}

/// Full result of a root search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// Side to move at the root.
    pub to_move: Player,
    /// The chosen action.
    pub best: Position,
    /// Minimax value of the root under optimal play.
    pub value: Utility,
    /// Every legal action with its value, in enumeration order.
    pub scores: Vec<ActionScore>,
    /// Number of positions visited, root included.
    pub nodes: u64,
}

/// True if `candidate` is strictly better than `current` for `player`.
fn improves(player: Player, candidate: Utility, current: Utility) -> bool {
    match player {
        Player::O => candidate > current,
        Player::X => candidate < current,
    }
}

#[derive(Debug, Default)]
struct Search {
    nodes: u64,
}

impl Search {
    /// Minimax value of `board` with `to_move` on turn.
    fn value(&mut self, board: &Board, to_move: Player) -> Result<Utility, SearchError> {
        self.nodes += 1;
        if let Some(utility) = evaluator::terminal_utility(board) {
            return Ok(utility);
        }

        let mut best: Option<Utility> = None;
        for position in board.empty_positions() {
            let child = board.placed(position, to_move);
            let value = self.value(&child, to_move.opponent())?;
            if best.is_none_or(|current| improves(to_move, value, current)) {
                best = Some(value);
            }
        }
        best.ok_or(SearchError::NoLegalMoves(*board))
    }
}

/// Minimax value of `board` with `to_move` on turn.
///
/// A terminal board is its own value.
#[instrument]
pub fn minimax(board: &Board, to_move: Player) -> Result<Utility, SearchError> {
    let mut search = Search::default();
    let value = search.value(board, to_move)?;
    debug!(nodes = search.nodes, %value, "Minimax complete");
    Ok(value)
}

/// Searches every legal action of `to_move` and reports the chosen one.
///
/// Fails with [`SearchError::TerminalPosition`] on a decided board.
#[instrument]
pub fn analyze(board: &Board, to_move: Player) -> Result<Analysis, SearchError> {
    if evaluator::is_terminal(board) {
        warn!(%board, "Search requested on a terminal board");
        return Err(SearchError::TerminalPosition(*board));
    }

    let mut search = Search { nodes: 1 };
    let mut scores = Vec::new();
    let mut best: Option<ActionScore> = None;

    for position in board.empty_positions() {
        let child = board.placed(position, to_move);
        let value = search.value(&child, to_move.opponent())?;
        trace!(%position, %value, "Root action scored");

        let score = ActionScore { position, value };
        if best.is_none_or(|current| improves(to_move, value, current.value)) {
            best = Some(score);
        }
        scores.push(score);
    }

    let best = best.ok_or(SearchError::NoLegalMoves(*board))?;
    debug!(
        best = %best.position,
        value = %best.value,
        nodes = search.nodes,
        "Search complete"
    );

    Ok(Analysis {
        to_move,
        best: best.position,
        value: best.value,
        scores,
        nodes: search.nodes,
    })
}

/// The optimal action for `to_move`, first in row-major order among equals.
#[instrument]
pub fn best_action(board: &Board, to_move: Player) -> Result<Position, SearchError> {
    analyze(board, to_move).map(|analysis| analysis.best)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_completes_winning_row() {
        let b = board("OO./XX./...");
        assert_eq!(best_action(&b, Player::O), Ok(Position::TopRight));
        assert_eq!(minimax(&b, Player::O), Ok(Utility::OWins));
    }

    #[test]
    fn test_first_of_equal_wins_is_kept() {
        // TopCenter, Center and MiddleRight all win at once.
        let b = board("O.O/X../XXO");
        let analysis = analyze(&b, Player::O).unwrap();
        assert_eq!(analysis.best, Position::TopCenter);
        assert!(analysis.scores.iter().all(|s| s.value == Utility::OWins));
        assert_eq!(analysis.scores.len(), 3);
    }

    #[test]
    fn test_later_strict_improvement_replaces_best() {
        // Only MiddleRight wins; the earlier squares let X complete row 2.
        let b = board("..X/OO./XX.");
        let analysis = analyze(&b, Player::O).unwrap();
        assert_eq!(analysis.scores[0].position, Position::TopLeft);
        assert_eq!(analysis.scores[0].value, Utility::XWins);
        assert_eq!(analysis.best, Position::MiddleRight);
        assert_eq!(analysis.value, Utility::OWins);
    }

    #[test]
    fn test_blocks_immediate_threat() {
        // X threatens the left column; every other reply loses.
        let b = board("XO./X../..O");
        assert_eq!(best_action(&b, Player::O), Ok(Position::BottomLeft));
    }

    #[test]
    fn test_minimizer_takes_its_win() {
        let b = board("OO./XX./...");
        let analysis = analyze(&b, Player::X).unwrap();
        assert_eq!(analysis.value, Utility::XWins);
        let after = b.apply_move(analysis.best, Player::X).unwrap();
        assert_eq!(minimax(&after, Player::O), Ok(Utility::XWins));
    }

    #[test]
    fn test_terminal_board_is_rejected() {
        let won = board("OOO/XX./...");
        assert_eq!(
            best_action(&won, Player::X),
            Err(SearchError::TerminalPosition(won))
        );
        assert_eq!(minimax(&won, Player::X), Ok(Utility::OWins));

        let drawn = board("OXO/XOX/XOX");
        assert!(analyze(&drawn, Player::O).is_err());
        assert_eq!(minimax(&drawn, Player::O), Ok(Utility::Draw));
    }

    #[test]
    fn test_single_empty_square() {
        let b = board("OXO/XXO/OO.");
        let analysis = analyze(&b, Player::X).unwrap();
        assert_eq!(analysis.best, Position::BottomRight);
        assert_eq!(analysis.scores.len(), 1);
        assert_eq!(analysis.nodes, 2);
    }
}
