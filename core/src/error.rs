use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board data does not match the declared size")]
    InvalidBoardShape,
    #[error("Tile values must be zero or a power of two")]
    InvalidTileValue,
}

pub type Result<T> = core::result::Result<T, GameError>;
