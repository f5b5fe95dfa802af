use thiserror::Error;

use super::state::{GridSize, Position};

/// Errors raised while setting up a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested head position does not lie on the grid
    #[error(
        "head position ({}, {}) is outside the {}x{} grid",
        .position.x, .position.y, .grid.width, .grid.height
    )]
    OutOfBounds { position: Position, grid: GridSize },

    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
