#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod tile;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub target: Tile,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord, target: Tile) -> Self {
        Self { size, target }
    }

    pub fn new(size: Coord, target: Tile) -> Self {
        let size = size.clamp(2, Coord::MAX);
        Self::new_unchecked(size, target)
    }

    /// The 4x4 board played to 2048.
    pub const fn classic() -> Self {
        Self::new_unchecked(4, Tile::new_unchecked(2048))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}

/// Square grid of tiles. Cells are addressed `(row, col)` from the top-left.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    tiles: Array2<Tile>,
}

impl Board {
    pub fn empty(size: Coord) -> Self {
        let side = usize::from(size);
        Self {
            tiles: Array2::default((side, side)),
        }
    }

    /// Builds a board from row-major face values, validating shape and values.
    pub fn from_values(size: Coord, values: &[TileValue]) -> Result<Self> {
        let side = usize::from(size);
        if values.len() != side * side {
            return Err(GameError::InvalidBoardShape);
        }

        let tiles = values
            .iter()
            .map(|&value| Tile::new(value))
            .collect::<Result<Vec<_>>>()?;
        let tiles =
            Array2::from_shape_vec((side, side), tiles).map_err(|_| GameError::InvalidBoardShape)?;

        Ok(Self { tiles })
    }

    pub fn size(&self) -> Coord {
        self.tiles.dim().0.try_into().unwrap()
    }

    pub fn total_cells(&self) -> CellCount {
        self.tiles.len().try_into().unwrap()
    }

    pub fn empty_count(&self) -> CellCount {
        self.tiles
            .iter()
            .filter(|tile| tile.is_empty())
            .count()
            .try_into()
            .unwrap()
    }

    pub fn is_full(&self) -> bool {
        self.tiles.iter().all(|tile| !tile.is_empty())
    }

    pub fn tile_at(&self, coords: Coord2) -> Tile {
        self.tiles[coords.to_nd_index()]
    }

    pub fn highest_tile(&self) -> Tile {
        self.tiles.iter().copied().max().unwrap_or(Tile::EMPTY)
    }

    /// Row-major face values, for presentation layers and persistence.
    pub fn to_values(&self) -> Vec<TileValue> {
        self.tiles.iter().map(|tile| tile.value()).collect()
    }

    pub fn iter_empty(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.tiles
            .indexed_iter()
            .filter(|(_, tile)| tile.is_empty())
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    /// True when two equal tiles share an edge somewhere on the board.
    pub fn has_adjacent_pair(&self) -> bool {
        self.tiles.indexed_iter().any(|((row, col), &tile)| {
            !tile.is_empty()
                && self
                    .tiles
                    .iter_neighbors((row as Coord, col as Coord))
                    .any(|pos| self.tiles[pos.to_nd_index()] == tile)
        })
    }

    /// A board is playable while it has an empty cell or a mergeable pair.
    pub fn has_moves(&self) -> bool {
        !self.is_full() || self.has_adjacent_pair()
    }

    pub(crate) fn tiles_mut(&mut self) -> &mut Array2<Tile> {
        &mut self.tiles
    }
}

impl Index<Coord2> for Board {
    type Output = Tile;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.tiles[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.tiles[coords.to_nd_index()]
    }
}
