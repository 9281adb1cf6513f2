//! Win detection logic for tic-tac-toe.

use crate::coordinate::Coordinate;
use crate::outcome::{LineKind, WinningLine};
use crate::types::{Board, Player};
use tracing::instrument;

const fn at(row: u8, column: u8) -> Coordinate {
    Coordinate::at(row, column)
}

/// All 8 lines in scan order: rows, then columns, then the two diagonals.
pub const LINES: [WinningLine; 8] = [
    // Rows
    WinningLine::new(LineKind::Row(0), [at(0, 0), at(0, 1), at(0, 2)]),
    WinningLine::new(LineKind::Row(1), [at(1, 0), at(1, 1), at(1, 2)]),
    WinningLine::new(LineKind::Row(2), [at(2, 0), at(2, 1), at(2, 2)]),
    // Columns
    WinningLine::new(LineKind::Column(0), [at(0, 0), at(1, 0), at(2, 0)]),
    WinningLine::new(LineKind::Column(1), [at(0, 1), at(1, 1), at(2, 1)]),
    WinningLine::new(LineKind::Column(2), [at(0, 2), at(1, 2), at(2, 2)]),
    // Diagonals
    WinningLine::new(LineKind::Diagonal, [at(0, 0), at(1, 1), at(2, 2)]),
    WinningLine::new(LineKind::AntiDiagonal, [at(0, 2), at(1, 1), at(2, 0)]),
];

/// Finds the first complete line on the board.
///
/// Returns the owning player and the line, or `None` if no line is
/// held by a single player.
#[instrument(skip(board))]
pub fn find_winning_line(board: &Board) -> Option<(Player, WinningLine)> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = *line.cells();
        let player = board.get(a).player()?;
        (board.get(b).player() == Some(player) && board.get(c).player() == Some(player))
            .then_some((player, line))
    })
}

/// Checks if there is a winner on the board.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    find_winning_line(board).map(|(player, _)| player)
}
