use serde::{Deserialize, Serialize};

use crate::{GameError, Result, TileValue};

/// A single board cell: empty, or a face value that must be a power of two.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tile(TileValue);

impl Tile {
    pub const EMPTY: Tile = Tile(0);
    pub const TWO: Tile = Tile(2);
    pub const FOUR: Tile = Tile(4);

    /// Accepts 0 (empty) or any power of two starting at 2.
    pub fn new(value: TileValue) -> Result<Tile> {
        if value == 0 || (value >= 2 && value.is_power_of_two()) {
            Ok(Tile(value))
        } else {
            Err(GameError::InvalidTileValue)
        }
    }

    pub const fn new_unchecked(value: TileValue) -> Tile {
        Tile(value)
    }

    pub const fn value(self) -> TileValue {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The tile produced when two copies of this one merge.
    pub const fn doubled(self) -> Tile {
        Tile(self.0 * 2)
    }
}
