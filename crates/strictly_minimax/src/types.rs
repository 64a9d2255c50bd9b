//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
///
/// O is the maximizing side of the search, X the minimizing side.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player O (maximizer, utility +1 on a win).
    #[display("O")]
    O,
    /// Player X (minimizer, utility -1 on a win).
    #[display("X")]
    X,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::O => Player::X,
            Player::X => Player::O,
        }
    }

    /// Returns the board character for this player's mark.
    pub fn symbol(self) -> char {
        match self {
            Player::O => 'O',
            Player::X => 'X',
        }
    }
}

/// Error parsing a player name.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unknown player {:?} (expected O or X)", input)]
pub struct ParsePlayerError {
    /// Rejected input.
    #[error(not(source))]
    pub input: String,
}

impl FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "O" | "o" => Ok(Player::O),
            "X" | "x" => Ok(Player::X),
            other => Err(ParsePlayerError {
                input: other.to_string(),
            }),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// `Board` is a plain value: every move produces a fresh copy and the
/// receiver is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Number of occupied squares.
    pub fn filled(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(move |pos| self.is_empty(*pos))
    }

    /// Returns a new board with `player`'s mark placed at `pos`.
    ///
    /// The receiver is never modified.
    #[instrument(skip(self))]
    pub fn apply_move(&self, pos: Position, player: Player) -> Result<Board, MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        Ok(self.placed(pos, player))
    }

    /// Copy of the board with the mark placed, without an occupancy check.
    pub(crate) fn placed(&self, pos: Position, player: Player) -> Board {
        let mut next = *self;
        next.squares[pos.to_index()] = Square::Occupied(player);
        next
    }

    /// Formats the board as a human-readable grid.
    ///
    /// With `show_hints`, empty squares show their 1-based cell number.
    pub fn render(&self, show_hints: bool) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty if show_hints => char::from(b'1' + pos as u8),
                    Square::Empty => ' ',
                    Square::Occupied(player) => player.symbol(),
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Compact form: three rows separated by `/`, `.` for empty squares.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, square) in self.squares.iter().enumerate() {
            if idx > 0 && idx % 3 == 0 {
                write!(f, "/")?;
            }
            let symbol = square.player().map_or('.', Player::symbol);
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

/// Error parsing a board from its compact text form.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// A character that is neither a mark nor an empty marker.
    #[display("Invalid character {:?} at cell {}", character, cell)]
    InvalidCharacter {
        /// Offending character.
        character: char,
        /// Zero-based cell index where it appeared.
        cell: usize,
    },

    /// The input did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(#[error(not(source))] usize),
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses `OO./XX./...` style input. Row separators and whitespace are
    /// optional; `.`, `-` and `_` mark empty squares.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = [Square::Empty; 9];
        let mut cell = 0;
        for character in s.chars().filter(|c| !c.is_whitespace() && *c != '/') {
            let square = match character {
                'O' | 'o' => Square::Occupied(Player::O),
                'X' | 'x' => Square::Occupied(Player::X),
                '.' | '-' | '_' => Square::Empty,
                _ => return Err(BoardParseError::InvalidCharacter { character, cell }),
            };
            if cell < 9 {
                squares[cell] = square;
            }
            cell += 1;
        }
        if cell != 9 {
            return Err(BoardParseError::WrongCellCount(cell));
        }
        Ok(Self { squares })
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// True once the game has been won or drawn.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}
