//! Win detection.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::board::{Board, Player, TileId};

/// Every line of three, rows first, then columns, then diagonals. The first complete line in
/// this order is the one reported.
pub const LINES: [[TileId; 3]; 8] = [
    [TileId::A1, TileId::B1, TileId::C1],
    [TileId::A2, TileId::B2, TileId::C2],
    [TileId::A3, TileId::B3, TileId::C3],
    [TileId::A1, TileId::A2, TileId::A3],
    [TileId::B1, TileId::B2, TileId::B3],
    [TileId::C1, TileId::C2, TileId::C3],
    [TileId::A1, TileId::B2, TileId::C3],
    [TileId::C1, TileId::B2, TileId::A3],
];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct Win {
    pub player: Player,
    pub line: [TileId; 3],
}

pub fn evaluate(board: &Board) -> Option<Win> {
    if board.mark_count() < 3 {
        return None;
    }

    let win = LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        match board[a] {
            Some(player) if board[b] == Some(player) && board[c] == Some(player) => {
                Some(Win { player, line })
            }
            _ => None,
        }
    });
    trace!(?win, "evaluated board");
    win
}
