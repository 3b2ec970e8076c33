use thiserror::Error;

use crate::board::{Player, TileId};

/// Why a move was refused. The game is left untouched in every case.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum PlayError {
    #[error("tile index {0} is off the board")]
    OutOfBounds(u8),

    #[error("tile {0} is already marked")]
    Occupied(TileId),

    #[error("the game is over, {0} has already won")]
    GameOver(Player),
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
#[error("no move #{requested}, history only goes up to #{last}")]
pub struct JumpError {
    pub requested: usize,
    pub last: usize,
}
