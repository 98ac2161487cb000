use crate::*;
pub use random::*;

mod random;

/// Places new tiles into empty board cells.
///
/// The engine calls this once per effective move and twice when seeding a
/// fresh board, so implementations decide both the cell and the face value.
pub trait TileSpawner {
    /// Puts one tile into an empty cell, returning where it landed, or
    /// `None` when the board has no room.
    fn spawn(&mut self, board: &mut Board) -> Option<Coord2>;
}
