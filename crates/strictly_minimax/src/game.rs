//! Game session between a human and the engine.
//!
//! The session is an explicit value owned by the front end. It validates
//! moves, replies with the engine's choice and reports a [`Verdict`] after
//! every turn. Evaluation and search underneath stay stateless.

use super::action::{Move, MoveError};
use super::contracts::{BoardConsistent, GameNotOver, LegalMove};
use super::evaluator::{self, Verdict};
use super::search;
use super::{Board, GameStatus, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Outcome of one human move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// The move the human made.
    pub human_move: Move,
    /// The engine's reply; `None` when the human's move ended the game.
    pub engine_move: Option<Move>,
    /// State of the game after the turn.
    pub verdict: Verdict,
}

/// Tic-tac-toe game against the minimax engine.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    human: Player,
    first: Player,
    to_move: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game where the human moves first.
    #[instrument]
    pub fn new(human: Player) -> Self {
        Self::with_first_player(human, human)
    }

    /// Creates a new game where `first` opens.
    ///
    /// When the engine opens, call [`Game::engine_turn`] before the first
    /// [`Game::play`].
    #[instrument]
    pub fn with_first_player(human: Player, first: Player) -> Self {
        Self {
            board: Board::new(),
            human,
            first,
            to_move: first,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark played by the human.
    pub fn human(&self) -> Player {
        self.human
    }

    /// The mark played by the engine.
    pub fn engine(&self) -> Player {
        self.human.opponent()
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Status and winning line of the current board.
    pub fn verdict(&self) -> Verdict {
        evaluator::evaluate(&self.board)
    }

    /// Plays the human's move and, if the game goes on, the engine's reply.
    ///
    /// A rejected move leaves the game untouched.
    #[instrument(skip(self), fields(human = %self.human))]
    pub fn play(&mut self, position: Position) -> Result<Turn, MoveError> {
        let human_move = Move::new(self.human, position);
        self.apply(human_move)?;

        let engine_move = if self.status.is_over() {
            None
        } else {
            Some(self.engine_turn()?)
        };

        Ok(Turn {
            human_move,
            engine_move,
            verdict: self.verdict(),
        })
    }

    /// Lets the engine choose and play its move.
    #[instrument(skip(self), fields(engine = %self.engine()))]
    pub fn engine_turn(&mut self) -> Result<Move, MoveError> {
        GameNotOver::check(self)?;
        let engine = self.engine();
        if self.to_move != engine {
            warn!(to_move = %self.to_move, "Engine asked to move out of turn");
            return Err(MoveError::WrongPlayer(engine));
        }

        let position = search::best_action(&self.board, engine)?;
        let mov = Move::new(engine, position);
        self.apply(mov)?;
        info!(%mov, "Engine moved");
        Ok(mov)
    }

    /// Starts over with an empty board and the same seating.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::with_first_player(self.human, self.first);
        debug!("Game reset");
    }

    fn apply(&mut self, mov: Move) -> Result<(), MoveError> {
        if let Err(err) = LegalMove::check(&mov, self) {
            warn!(%mov, %err, "Move rejected");
            return Err(err);
        }

        self.board = self.board.apply_move(mov.position, mov.player)?;
        self.history.push(mov);
        self.to_move = mov.player.opponent();
        self.status = evaluator::evaluate(&self.board).status;
        debug_assert!(BoardConsistent::holds(&self.board));

        debug!(%mov, board = %self.board, status = ?self.status, "Move applied");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Line, Square};

    #[test]
    fn test_human_move_gets_engine_reply() {
        let mut game = Game::new(Player::X);
        let turn = game.play(Position::Center).unwrap();

        assert_eq!(turn.human_move, Move::new(Player::X, Position::Center));
        let reply = turn.engine_move.unwrap();
        assert_eq!(reply.player, Player::O);
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(turn.verdict.status, GameStatus::InProgress);
    }

    #[test]
    fn test_occupied_square_leaves_game_untouched() {
        let mut game = Game::new(Player::X);
        game.play(Position::Center).unwrap();
        let before_board = *game.board();
        let before_history = game.history().to_vec();

        assert_eq!(
            game.play(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(*game.board(), before_board);
        assert_eq!(game.history(), before_history.as_slice());
    }

    #[test]
    fn test_engine_wins_and_game_is_closed() {
        // X blunders repeatedly; O completes a line.
        let mut game = Game::new(Player::X);
        let mut last = None;
        for _ in 0..5 {
            let Some(pos) = game.board().empty_positions().last() else {
                break;
            };
            let turn = game.play(pos).unwrap();
            last = Some(turn);
            if turn.verdict.is_terminal() {
                break;
            }
        }

        let turn = last.unwrap();
        assert!(turn.verdict.is_terminal());
        assert_ne!(turn.verdict.status, GameStatus::Won(Player::X));
        assert_eq!(game.play(Position::Center), Err(MoveError::GameOver));
        assert_eq!(game.engine_turn(), Err(MoveError::GameOver));
    }

    #[test]
    fn test_engine_opens_when_first() {
        let mut game = Game::with_first_player(Player::X, Player::O);
        assert_eq!(
            game.play(Position::Center),
            Err(MoveError::WrongPlayer(Player::X))
        );

        let opening = game.engine_turn().unwrap();
        assert_eq!(opening, Move::new(Player::O, Position::TopLeft));
        assert_eq!(game.board().get(Position::TopLeft), Square::Occupied(Player::O));
        assert_eq!(game.engine_turn(), Err(MoveError::WrongPlayer(Player::O)));
    }

    #[test]
    fn test_engine_playing_x() {
        let mut game = Game::new(Player::O);
        let turn = game.play(Position::TopLeft).unwrap();
        assert_eq!(turn.engine_move.map(|m| m.player), Some(Player::X));
    }

    #[test]
    fn test_reset_restores_empty_board() {
        let mut game = Game::with_first_player(Player::X, Player::O);
        game.engine_turn().unwrap();
        game.reset();

        assert_eq!(*game.board(), Board::new());
        assert!(game.history().is_empty());
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_engine_completes_anti_diagonal() {
        let mut game = Game::new(Player::X);

        let turn = game.play(Position::BottomRight).unwrap();
        assert_eq!(turn.engine_move.map(|m| m.position), Some(Position::Center));

        let turn = game.play(Position::BottomCenter).unwrap();
        assert_eq!(turn.engine_move.map(|m| m.position), Some(Position::BottomLeft));

        let turn = game.play(Position::MiddleRight).unwrap();
        assert_eq!(turn.engine_move.map(|m| m.position), Some(Position::TopRight));
        assert_eq!(
            turn.verdict,
            Verdict {
                status: GameStatus::Won(Player::O),
                line: Some(Line::AntiDiagonal),
            }
        );
        assert_eq!(game.status(), GameStatus::Won(Player::O));
    }
}
