use alloc::vec::Vec;
use core::num::Saturating;
use ndarray::{Array2, ArrayViewMut1, ArrayViewMut2, Axis};
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - NotStarted -> Playing
/// - Playing -> Won
/// - Playing -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No session has been started yet
    NotStarted,
    /// Session accepts moves
    Playing,
    /// A tile reached the target value
    Won,
    /// No empty cell and no mergeable pair left
    Lost,
}

impl GameStatus {
    pub const fn is_initial(self) -> bool {
        matches!(self, Self::NotStarted)
    }

    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// What a single `shift` call did to the session.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    NoChange,
    Moved,
    Won,
    Lost,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            NoChange => false,
            Moved => true,
            Won => true,
            Lost => true,
        }
    }
}

struct LaneShift {
    moved: bool,
    gain: Score,
}

/// A play session from start to finish: board, score, best score, status.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,
    board: Board,
    score: Saturating<Score>,
    best_score: Saturating<Score>,
    status: GameStatus,
}

impl Game {
    /// Starts a session: an empty board seeded with two spawned tiles.
    pub fn new(config: GameConfig, spawner: &mut impl TileSpawner) -> Self {
        let mut board = Board::empty(config.size);
        seed_board(&mut board, spawner);
        Self {
            config,
            board,
            score: Saturating(0),
            best_score: Saturating(0),
            status: GameStatus::Playing,
        }
    }

    /// Resumes a session from an explicit board. A position that is already
    /// terminal is recognized immediately.
    pub fn from_board(config: GameConfig, board: Board) -> Result<Self> {
        if board.size() != config.size {
            return Err(GameError::InvalidBoardShape);
        }

        let mut game = Self {
            config,
            board,
            score: Saturating(0),
            best_score: Saturating(0),
            status: GameStatus::Playing,
        };
        game.refresh_status();
        Ok(game)
    }

    /// Carries a best score restored by an external store into this session.
    pub fn with_best_score(mut self, best_score: Score) -> Self {
        self.best_score = Saturating(best_score.max(self.score.0));
        self
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> Score {
        self.score.0
    }

    pub fn best_score(&self) -> Score {
        self.best_score.0
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_final()
    }

    /// Applies one directional move: compact and merge every lane toward the
    /// chosen edge, then spawn one tile if anything changed.
    ///
    /// A move that cannot change the board, including any move issued after
    /// the game ended, leaves board, score, and status untouched.
    pub fn shift(&mut self, direction: Direction, spawner: &mut impl TileSpawner) -> MoveOutcome {
        if self.status != GameStatus::Playing {
            return MoveOutcome::NoChange;
        }

        let shift = shift_tiles(self.board.tiles_mut(), direction);
        if !shift.moved {
            return MoveOutcome::NoChange;
        }

        self.score += shift.gain;
        if self.score > self.best_score {
            self.best_score = self.score;
        }
        log::debug!("Shifted {:?}, merge gain {}", direction, shift.gain);

        // a changed board always has at least one empty cell
        if let Some(coords) = spawner.spawn(&mut self.board) {
            log::trace!("Spawned tile at {:?}", coords);
        }

        self.refresh_status()
    }

    /// Whether a move in `direction` would change the board.
    pub fn can_shift(&self, direction: Direction) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }

        let mut probe = self.board.clone();
        shift_tiles(probe.tiles_mut(), direction).moved
    }

    /// Replaces the board wholesale for a new game, keeping the best score.
    pub fn reset(&mut self, spawner: &mut impl TileSpawner) {
        self.board = Board::empty(self.config.size);
        seed_board(&mut self.board, spawner);
        self.score = Saturating(0);
        self.status = GameStatus::Playing;
    }

    fn refresh_status(&mut self) -> MoveOutcome {
        if self.board.highest_tile() >= self.config.target {
            self.status = GameStatus::Won;
            MoveOutcome::Won
        } else if !self.board.has_moves() {
            self.status = GameStatus::Lost;
            MoveOutcome::Lost
        } else {
            MoveOutcome::Moved
        }
    }
}

fn seed_board(board: &mut Board, spawner: &mut impl TileSpawner) {
    for _ in 0..2 {
        spawner.spawn(board);
    }
}

fn shift_tiles(tiles: &mut Array2<Tile>, direction: Direction) -> LaneShift {
    let mut view = oriented(tiles.view_mut(), direction);
    let mut moved = false;
    let mut gain = 0;

    for mut lane in view.rows_mut() {
        let lane_shift = shift_lane(&mut lane);
        moved |= lane_shift.moved;
        gain += lane_shift.gain;
    }

    LaneShift { moved, gain }
}

/// Reorients the board so every direction becomes a leftward slide: `Right`
/// flips the lanes, `Up` transposes, `Down` does both.
fn oriented(mut view: ArrayViewMut2<'_, Tile>, direction: Direction) -> ArrayViewMut2<'_, Tile> {
    match direction {
        Direction::Left => {}
        Direction::Right => view.invert_axis(Axis(1)),
        Direction::Up => view = view.reversed_axes(),
        Direction::Down => {
            view = view.reversed_axes();
            view.invert_axis(Axis(1));
        }
    }
    view
}

/// Compacts a lane toward index 0, then merges equal adjacent pairs in one
/// pass, closest pair to the moved edge first. A merged tile never merges
/// again within the same call.
fn shift_lane(lane: &mut ArrayViewMut1<'_, Tile>) -> LaneShift {
    let mut packed: Vec<Tile> = Vec::with_capacity(lane.len());
    for &tile in lane.iter() {
        if !tile.is_empty() {
            packed.push(tile);
        }
    }

    let mut moved = false;
    let mut gain = 0;
    let mut write = 0;
    let mut read = 0;
    while read < packed.len() {
        let tile = if read + 1 < packed.len() && packed[read] == packed[read + 1] {
            let merged = packed[read].doubled();
            gain += merged.value();
            read += 2;
            merged
        } else {
            read += 1;
            packed[read - 1]
        };

        if lane[write] != tile {
            moved = true;
        }
        lane[write] = tile;
        write += 1;
    }

    for idx in write..lane.len() {
        if !lane[idx].is_empty() {
            moved = true;
        }
        lane[idx] = Tile::EMPTY;
    }

    LaneShift { moved, gain }
}
