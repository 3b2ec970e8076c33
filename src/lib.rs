//! Tic-tac-toe with a move history you can step back through and branch from.

pub mod board;
pub mod command;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod term;

pub use board::{Board, Player, TileId};
pub use error::{JumpError, PlayError};
pub use game::{Game, MoveEntry, Snapshot, Status};
pub use rules::{evaluate, Win};
