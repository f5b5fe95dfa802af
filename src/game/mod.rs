//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Turns are applied through turning points: a turn recorded at the head's cell is
//! picked up by each following segment when it reaches that cell.

pub mod board;
pub mod config;
pub mod direction;
pub mod engine;
pub mod error;
pub mod rng;
pub mod state;

// Re-export commonly used types
pub use board::BoardDump;
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{Game, TickOutcome};
pub use error::{Error, Result};
pub use rng::RandomSource;
pub use state::{GridSize, Position, Snake};
