//! Exhaustive checks of the board evaluator over every mark assignment.

use strictly_minimax::{
    Board, GameStatus, Line, Player, Position, Utility, evaluate, is_terminal, utility,
    winning_line,
};
use strum::IntoEnumIterator;

/// Every one of the 3^9 boards, reachable or not.
fn all_boards() -> Vec<Board> {
    (0..3usize.pow(9))
        .map(|mut code| {
            let mut board = Board::new();
            for pos in Position::ALL {
                let player = match code % 3 {
                    1 => Some(Player::O),
                    2 => Some(Player::X),
                    _ => None,
                };
                if let Some(player) = player {
                    board = board.apply_move(pos, player).unwrap();
                }
                code /= 3;
            }
            board
        })
        .collect()
}

/// Lines completed by a single mark, found without the evaluator.
fn complete_lines(board: &Board) -> Vec<(Line, Player)> {
    Line::iter()
        .filter_map(|line| {
            let owners: Vec<_> = line.cells().iter().map(|c| board.get(*c).player()).collect();
            match owners.as_slice() {
                [Some(a), Some(b), Some(c)] if a == b && b == c => Some((line, *a)),
                _ => None,
            }
        })
        .collect()
}

#[test]
fn test_open_boards_are_never_terminal() {
    for board in all_boards() {
        if complete_lines(&board).is_empty() && board.filled() < 9 {
            assert!(!is_terminal(&board), "{board}");
            assert!(utility(&board).is_err(), "{board}");
            assert_eq!(winning_line(&board), None, "{board}");
        }
    }
}

#[test]
fn test_single_line_sets_utility() {
    for board in all_boards() {
        let lines = complete_lines(&board);
        if let [(line, owner)] = lines.as_slice() {
            assert!(is_terminal(&board), "{board}");
            let expected = match owner {
                Player::O => Utility::OWins,
                Player::X => Utility::XWins,
            };
            assert_eq!(utility(&board), Ok(expected), "{board}");
            assert_eq!(winning_line(&board), Some(*line), "{board}");
            assert_eq!(evaluate(&board).status, GameStatus::Won(*owner));
        }
    }
}

#[test]
fn test_full_boards_without_line_are_draws() {
    let mut draws = 0;
    for board in all_boards() {
        if board.filled() == 9 && complete_lines(&board).is_empty() {
            assert!(is_terminal(&board), "{board}");
            assert_eq!(utility(&board), Ok(Utility::Draw), "{board}");
            assert_eq!(winning_line(&board), None, "{board}");
            draws += 1;
        }
    }
    assert!(draws > 0);
}

#[test]
fn test_reported_line_is_first_in_scan_order() {
    for board in all_boards() {
        let lines: Vec<Line> = complete_lines(&board).into_iter().map(|(l, _)| l).collect();
        let expected = Line::SCAN_ORDER.into_iter().find(|l| lines.contains(l));
        assert_eq!(winning_line(&board), expected, "{board}");
    }
}

#[test]
fn test_scenario_draw_board() {
    let board: Board = "OXO/XOX/XOX".parse().unwrap();
    assert!(is_terminal(&board));
    assert_eq!(utility(&board).map(Utility::value), Ok(0));
    assert_eq!(winning_line(&board), None);
}

#[test]
fn test_scenario_anti_diagonal() {
    let open: Board = "X../.O./..X".parse().unwrap();
    assert!(!is_terminal(&open));
    assert_eq!(winning_line(&open), None);

    let with_corner = open.apply_move(Position::BottomLeft, Player::X).unwrap();
    assert_eq!(winning_line(&with_corner), None);

    let completed: Board = "X.X/.X./X.O".parse().unwrap();
    assert_eq!(winning_line(&completed), Some(Line::AntiDiagonal));
    assert_eq!(
        winning_line(&completed).map(|l| l.to_string()),
        Some("diagonal_secundaria".to_string())
    );
}
