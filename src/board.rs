use std::{
    fmt::Display,
    ops::{Index, IndexMut, Not},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

pub const NUM_TILES: u8 = 9;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Not for Player {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Player::O => Player::X,
            Player::X => Player::O,
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::O => write!(f, "O"),
            Player::X => write!(f, "X"),
        }
    }
}

//       a b c : column
// row 1: 0 1 2
// row 2: 3 4 5
// row 3: 6 7 8
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TileId(u8);

impl TileId {
    pub const A1: TileId = TileId(0);
    pub const B1: TileId = TileId(1);
    pub const C1: TileId = TileId(2);
    pub const A2: TileId = TileId(3);
    pub const B2: TileId = TileId(4);
    pub const C2: TileId = TileId(5);
    pub const A3: TileId = TileId(6);
    pub const B3: TileId = TileId(7);
    pub const C3: TileId = TileId(8);

    pub const fn new(val: u8) -> Option<Self> {
        if val >= NUM_TILES {
            None
        } else {
            Some(Self(val))
        }
    }

    /// Builds a tile from zero-based row and column.
    pub const fn at(row: u8, column: u8) -> Option<Self> {
        if row >= 3 || column >= 3 {
            None
        } else {
            Some(Self(row * 3 + column))
        }
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn row(self) -> u8 {
        self.0 / 3
    }

    pub const fn column(self) -> u8 {
        self.0 % 3
    }

    pub fn all() -> impl DoubleEndedIterator<Item = TileId> + ExactSizeIterator {
        (0..NUM_TILES).map(TileId)
    }
}

impl TryFrom<u8> for TileId {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        TileId::new(value).ok_or(value)
    }
}

impl From<TileId> for u8 {
    fn from(tile: TileId) -> Self {
        tile.0
    }
}

impl FromStr for TileId {
    type Err = ();

    /// Accepts `a1`..`c3` (column letter, row number) or a raw index `0`..`8`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<u8>() {
            return TileId::new(index).ok_or(());
        }

        let mut chars = s.chars();
        let (Some(column), Some(row), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(());
        };
        let column = match column.to_ascii_lowercase() {
            'a' => 0,
            'b' => 1,
            'c' => 2,
            _ => return Err(()),
        };
        let row = match row {
            '1' => 0,
            '2' => 1,
            '3' => 2,
            _ => return Err(()),
        };
        TileId::at(row, column).ok_or(())
    }
}

impl Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let column = (b'a' + self.column()) as char;
        write!(f, "{column}{}", self.row() + 1)
    }
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct Board {
    tiles: [Option<Player>; 9],
}

impl Board {
    pub fn from_tiles(tiles: [Option<Player>; 9]) -> Self {
        Self { tiles }
    }

    /// Returns a copy of the board with `tile` marked. Boards are never edited in place by the
    /// game, every move produces a new one.
    pub fn with_mark(mut self, tile: TileId, player: Player) -> Self {
        self[tile] = Some(player);
        self
    }

    pub fn mark_count(&self) -> u8 {
        self.tiles.iter().flatten().count() as u8
    }

    pub fn is_full(&self) -> bool {
        self.mark_count() == NUM_TILES
    }

    pub fn is_empty(&self, tile: TileId) -> bool {
        self[tile].is_none()
    }

    pub fn tiles(&self) -> &[Option<Player>; 9] {
        &self.tiles
    }
}

impl Index<TileId> for Board {
    type Output = Option<Player>;

    fn index(&self, tile: TileId) -> &Self::Output {
        &self.tiles[tile.index()]
    }
}

impl IndexMut<TileId> for Board {
    fn index_mut(&mut self, tile: TileId) -> &mut Self::Output {
        &mut self.tiles[tile.index()]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.tiles.chunks_exact(3).enumerate() {
            for tile in row {
                match tile {
                    Some(player) => write!(f, "{player}")?,
                    None => write!(f, "-")?,
                };
            }

            if i < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
