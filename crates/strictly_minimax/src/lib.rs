//! Strictly Minimax - tic-tac-toe solved by exhaustive search
//!
//! Pure game logic with no I/O. Front ends hand the engine a board and
//! get back a verdict or a chosen cell.
//!
//! # Architecture
//!
//! - **Evaluator**: terminal detection, utility and winning line
//! - **Search**: exhaustive minimax with a first-best tie-break
//! - **Game**: explicit session state for a human against the engine
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{best_action, Board, Line, Player, Position, Utility};
//!
//! let board: Board = "OO./XX./...".parse().unwrap();
//! let action = best_action(&board, Player::O).unwrap();
//! assert_eq!(action, Position::TopRight);
//!
//! let after = board.apply_move(action, Player::O).unwrap();
//! assert_eq!(strictly_minimax::utility(&after), Ok(Utility::OWins));
//! assert_eq!(strictly_minimax::winning_line(&after), Some(Line::Horizontal0));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod evaluator;
mod game;
mod line;
mod position;
pub mod rules;
mod search;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{BoardConsistent, GameNotOver, LegalMove, PlayersTurn, SquareIsEmpty};
pub use evaluator::{EvalError, Utility, Verdict, evaluate, is_terminal, utility, winning_line};
pub use game::{Game, Turn};
pub use line::Line;
pub use position::{Action, Position};
pub use search::{ActionScore, Analysis, SearchError, analyze, best_action, minimax};
pub use types::{Board, BoardParseError, GameStatus, ParsePlayerError, Player, Square};
