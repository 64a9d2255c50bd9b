//! Win detection logic for tic-tac-toe.

use super::super::{Board, Line, Player, Square};
use tracing::instrument;

/// Finds the first completed line in scan order, with its owner.
///
/// A line counts only when all three squares are occupied by the same
/// player.
pub fn completed_line(board: &Board) -> Option<(Player, Line)> {
    Line::SCAN_ORDER.into_iter().find_map(|line| {
        let [a, b, c] = line.cells();
        match board.get(a) {
            Square::Occupied(player) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some((player, line))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    completed_line(board).map(|(player, _)| player)
}

/// Identifies the line that won the game, if any.
#[instrument]
pub fn winning_line(board: &Board) -> Option<Line> {
    completed_line(board).map(|(_, line)| line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
        assert_eq!(winning_line(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let b = board("XXX/OO./...");
        assert_eq!(check_winner(&b), Some(Player::X));
        assert_eq!(winning_line(&b), Some(Line::Horizontal0));
    }

    #[test]
    fn test_winner_diagonal() {
        let b = board("OX./XO./..O");
        assert_eq!(check_winner(&b), Some(Player::O));
        assert_eq!(winning_line(&b), Some(Line::MainDiagonal));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(check_winner(&board("XX./O../O..")), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        assert_eq!(winning_line(&board("XOX/.../...")), None);
    }

    #[test]
    fn test_row_reported_before_its_column() {
        // Row 0 and column 0 both complete: row 0 is scanned first.
        let b = board("XXX/X../X..");
        assert_eq!(winning_line(&b), Some(Line::Horizontal0));
    }

    #[test]
    fn test_column_reported_before_next_row() {
        // Column 0 and row 1 both complete: column 0 comes before row 1.
        let b = board("O../OOO/O..");
        assert_eq!(winning_line(&b), Some(Line::Vertical0));
    }

    #[test]
    fn test_columns_reported_before_diagonals() {
        let b = board("X.X/.XX/X.X");
        assert_eq!(winning_line(&b), Some(Line::Vertical2));
    }
}
