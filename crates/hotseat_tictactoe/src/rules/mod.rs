//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board. The engine re-runs a full scan
//! after every accepted move; nothing here keeps state between calls.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, find_winning_line};

use crate::outcome::{Outcome, WinningLine};
use crate::types::Board;
use tracing::instrument;

/// Outcome of a board together with the line that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// `None` while the game can continue.
    pub outcome: Option<Outcome>,
    /// Present only for wins.
    pub winning_line: Option<WinningLine>,
}

/// Evaluates a board.
///
/// Lines are checked before fullness so a board that is both full and
/// contains a line is a win, never a tie.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Evaluation {
    if let Some((player, line)) = find_winning_line(board) {
        return Evaluation {
            outcome: Some(Outcome::Win(player)),
            winning_line: Some(line),
        };
    }

    let outcome = is_full(board).then_some(Outcome::Tie);
    Evaluation {
        outcome,
        winning_line: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::Coordinate;
    use crate::outcome::LineKind;
    use crate::types::{Occupant, Player};

    fn board_from(rows: [&str; 3]) -> Board {
        let mut board = Board::new();
        for (row, marks) in rows.iter().enumerate() {
            for (column, mark) in marks.chars().enumerate() {
                let occupant = match mark {
                    'X' => Occupant::Occupied(Player::Player1),
                    'O' => Occupant::Occupied(Player::Player2),
                    _ => Occupant::Empty,
                };
                board.set(Coordinate::new(row, column).unwrap(), occupant);
            }
        }
        board
    }

    #[test]
    fn test_empty_board_in_progress() {
        let evaluation = evaluate(&Board::new());
        assert_eq!(evaluation.outcome, None);
        assert_eq!(evaluation.winning_line, None);
    }

    #[test]
    fn test_full_board_with_line_is_win() {
        let board = board_from(["XXX", "OOX", "XOO"]);
        let evaluation = evaluate(&board);
        assert_eq!(evaluation.outcome, Some(Outcome::Win(Player::Player1)));
        assert_eq!(evaluation.winning_line.map(|l| l.kind()), Some(LineKind::Row(0)));
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        let board = board_from(["XOX", "XOO", "OXX"]);
        let evaluation = evaluate(&board);
        assert_eq!(evaluation.outcome, Some(Outcome::Tie));
        assert_eq!(evaluation.winning_line, None);
    }

    #[test]
    fn test_rows_checked_before_columns() {
        // Not reachable in play, but pins the scan order.
        let board = board_from(["XXX", "XO.", "XO."]);
        let evaluation = evaluate(&board);
        assert_eq!(evaluation.winning_line.map(|l| l.kind()), Some(LineKind::Row(0)));
    }
}
