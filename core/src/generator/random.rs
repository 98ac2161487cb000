use rand::rngs::SmallRng;

use super::*;

/// Spawns into a uniformly random empty cell: 2 with probability 0.9, 4 with
/// probability 0.1.
#[derive(Clone, Debug)]
pub struct RandomTileSpawner {
    rng: SmallRng,
}

impl RandomTileSpawner {
    pub fn new(seed: u64) -> Self {
        use rand::prelude::*;

        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl TileSpawner for RandomTileSpawner {
    fn spawn(&mut self, board: &mut Board) -> Option<Coord2> {
        use rand::prelude::*;

        let empty = board.empty_count();
        if empty == 0 {
            log::warn!("Board already full, no tile spawned");
            return None;
        }

        let place = self.rng.random_range(0..empty);
        let tile = if self.rng.random_range(0..10) < 9 {
            Tile::TWO
        } else {
            Tile::FOUR
        };

        let coords = board.iter_empty().nth(place.into())?;
        board[coords] = tile;
        Some(coords)
    }
}
