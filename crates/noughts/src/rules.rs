//! Win detection over board snapshots.

use serde::{Deserialize, Serialize};

use crate::types::{Board, Player, Square};

/// The 8 winning lines in priority order: rows top-to-bottom, columns
/// left-to-right, then the two diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // Rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // Columns
    [0, 4, 8],
    [2, 4, 6], // Diagonals
];

/// A completed winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Win {
    /// The player holding the line.
    pub player: Player,
    /// The three cell indices forming the line.
    pub line: [usize; 3],
}

/// Scans the fixed line table and returns the first fully matched line.
///
/// This is a pure pattern match: any combination of marks is accepted,
/// including boards unreachable in play. A full board with no winner
/// still returns `None`; telling a draw apart from a game in progress
/// is the caller's job.
pub fn evaluate(board: &Board) -> Option<Win> {
    let squares = board.squares();

    for line in WIN_LINES {
        let [a, b, c] = line;
        if let Square::Occupied(player) = squares[a]
            && squares[a] == squares[b]
            && squares[b] == squares[c]
        {
            return Some(Win { player, line });
        }
    }

    None
}
