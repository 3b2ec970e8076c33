use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    board::{Board, Player, TileId},
    error::{JumpError, PlayError},
    rules::{self, Win},
};

/// A board as it stood after one move, with the tile that move marked. The opening snapshot has
/// no tile.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    pub tile: Option<TileId>,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Status {
    InProgress(Player),
    Winner(Player),
    Draw,
}

/// One line of the move list.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct MoveEntry {
    pub number: usize,
    pub tile: Option<TileId>,
}

impl Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.tile {
            None => write!(f, "Go to game start"),
            Some(tile) => write!(
                f,
                "Go to move #{} (column {}, row {})",
                self.number,
                tile.column() + 1,
                tile.row() + 1
            ),
        }
    }
}

/// A game with its full move history.
///
/// `history` is never empty and always starts with the empty board. `current` points at the
/// snapshot being shown; playing from anywhere but the last snapshot drops everything after it.
#[derive(Debug, Clone, Serialize)]
pub struct Game {
    history: Vec<Snapshot>,
    current: usize,
    descending: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::with_move_order(false)
    }

    pub fn with_move_order(descending: bool) -> Self {
        Game {
            history: vec![Snapshot::default()],
            current: 0,
            descending,
        }
    }

    pub fn current_board(&self) -> &Board {
        &self.history[self.current].board
    }

    pub fn current_move(&self) -> usize {
        self.current
    }

    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// X moves on even move numbers, O on odd ones.
    pub fn whos_turn(&self) -> Player {
        if self.current % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    pub fn winner(&self) -> Option<Win> {
        rules::evaluate(self.current_board())
    }

    pub fn winning_line(&self) -> Option<[TileId; 3]> {
        self.winner().map(|win| win.line)
    }

    pub fn status(&self) -> Status {
        if let Some(win) = self.winner() {
            Status::Winner(win.player)
        } else if self.current_board().is_full() {
            Status::Draw
        } else {
            Status::InProgress(self.whos_turn())
        }
    }

    #[instrument(skip(self), fields(current = self.current, len = self.history.len()))]
    pub fn play(&mut self, index: u8) -> Result<(), PlayError> {
        let tile = TileId::new(index).ok_or(PlayError::OutOfBounds(index));
        let result = tile.and_then(|tile| self.check_move(tile));
        let tile = match result {
            Ok(tile) => tile,
            Err(e) => {
                debug!(%e, "move rejected");
                return Err(e);
            }
        };

        let player = self.whos_turn();
        let board = self.current_board().with_mark(tile, player);
        self.history.truncate(self.current + 1);
        self.history.push(Snapshot {
            board,
            tile: Some(tile),
        });
        self.current = self.history.len() - 1;
        debug!(%player, %tile, current = self.current, "move played");
        Ok(())
    }

    fn check_move(&self, tile: TileId) -> Result<TileId, PlayError> {
        if let Some(win) = self.winner() {
            return Err(PlayError::GameOver(win.player));
        }
        if !self.current_board().is_empty(tile) {
            return Err(PlayError::Occupied(tile));
        }
        Ok(tile)
    }

    /// Moves the pointer to `move_index` without touching the history.
    #[instrument(skip(self), fields(current = self.current, len = self.history.len()))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), JumpError> {
        if move_index >= self.history.len() {
            let e = JumpError {
                requested: move_index,
                last: self.history.len() - 1,
            };
            debug!(%e, "jump rejected");
            return Err(e);
        }
        self.current = move_index;
        debug!(current = self.current, "jumped");
        Ok(())
    }

    /// Every snapshot as a move list entry, oldest first. Whether to show it reversed is up to
    /// the caller, see [`Game::moves_descending`].
    pub fn moves(
        &self,
    ) -> impl DoubleEndedIterator<Item = MoveEntry> + ExactSizeIterator + Clone + '_ {
        self.history
            .iter()
            .enumerate()
            .map(|(number, snapshot)| MoveEntry {
                number,
                tile: snapshot.tile,
            })
    }

    pub fn moves_descending(&self) -> bool {
        self.descending
    }

    pub fn toggle_move_order(&mut self) {
        self.descending = !self.descending;
        debug!(descending = self.descending, "move order toggled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played(moves: &[u8]) -> Game {
        let mut game = Game::new();
        for &m in moves {
            game.play(m).unwrap();
        }
        game
    }

    #[test]
    fn new_game_starts_empty_with_x() {
        let game = Game::new();
        assert_eq!(game.history_len(), 1);
        assert_eq!(game.current_move(), 0);
        assert_eq!(game.history()[0], Snapshot::default());
        assert_eq!(game.status(), Status::InProgress(Player::X));
    }

    #[test]
    fn turns_alternate() {
        let mut game = Game::new();
        game.play(4).unwrap();
        assert_eq!(game.current_board()[TileId::B2], Some(Player::X));
        assert_eq!(game.status(), Status::InProgress(Player::O));
        game.play(0).unwrap();
        assert_eq!(game.current_board()[TileId::A1], Some(Player::O));
        assert_eq!(game.whos_turn(), Player::X);
    }

    #[test]
    fn rejects_out_of_bounds() {
        let mut game = played(&[0]);
        assert_eq!(game.play(9), Err(PlayError::OutOfBounds(9)));
        assert_eq!(game.history_len(), 2);
    }

    #[test]
    fn rejects_after_win() {
        let mut game = played(&[0, 4, 1, 5, 2]);
        assert_eq!(game.play(8), Err(PlayError::GameOver(Player::X)));
        assert_eq!(game.history_len(), 6);
        assert_eq!(game.current_move(), 5);
    }

    #[test]
    fn jump_keeps_history() {
        let mut game = played(&[0, 4, 1]);
        game.jump_to(1).unwrap();
        assert_eq!(game.history_len(), 4);
        assert_eq!(game.current_move(), 1);
        assert_eq!(game.whos_turn(), Player::O);
        assert_eq!(game.current_board().mark_count(), 1);

        game.jump_to(3).unwrap();
        assert_eq!(game.current_board().mark_count(), 3);
    }

    #[test]
    fn jump_out_of_range_is_rejected() {
        let mut game = played(&[0, 4]);
        assert_eq!(
            game.jump_to(3),
            Err(JumpError {
                requested: 3,
                last: 2
            })
        );
        assert_eq!(game.current_move(), 2);
    }

    #[test]
    fn jump_back_from_win_resumes_play() {
        let mut game = played(&[0, 4, 1, 5, 2]);
        game.jump_to(4).unwrap();
        assert_eq!(game.status(), Status::InProgress(Player::X));
        assert_eq!(game.winning_line(), None);
    }

    #[test]
    fn moves_list_entries() {
        let game = played(&[5, 0]);
        let moves: Vec<_> = game.moves().collect();
        assert_eq!(
            moves,
            vec![
                MoveEntry {
                    number: 0,
                    tile: None
                },
                MoveEntry {
                    number: 1,
                    tile: Some(TileId::C2)
                },
                MoveEntry {
                    number: 2,
                    tile: Some(TileId::A1)
                },
            ]
        );
        assert_eq!(moves[0].to_string(), "Go to game start");
        assert_eq!(moves[1].to_string(), "Go to move #1 (column 3, row 2)");
        assert_eq!(game.moves().rev().next().map(|m| m.number), Some(2));
    }

    #[test]
    fn toggle_move_order_is_presentation_only() {
        let mut game = played(&[0, 1]);
        let before: Vec<_> = game.history().to_vec();
        assert!(!game.moves_descending());
        game.toggle_move_order();
        assert!(game.moves_descending());
        assert_eq!(game.history(), &before[..]);
        assert_eq!(game.current_move(), 2);
        game.toggle_move_order();
        assert!(!game.moves_descending());
    }
}
