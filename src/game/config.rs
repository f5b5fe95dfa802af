use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::state::{GridSize, Position};

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Starting head cell; the grid centre when unset
    pub initial_head: Option<Position>,
    /// Direction the snake starts moving in
    pub initial_direction: Direction,
    /// Requested initial length, clipped to fit behind the head
    pub initial_snake_length: usize,
    /// Milliseconds between ticks
    pub tick_interval_ms: u64,
    /// Seed for item placement; entropy when unset
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 25,
            grid_height: 25,
            initial_head: None,
            initial_direction: Direction::Right,
            initial_snake_length: 10,
            tick_interval_ms: 75,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self {
            initial_snake_length: 3,
            ..Self::new(10, 10)
        }
    }

    /// Create a large grid
    pub fn large() -> Self {
        Self::new(40, 30)
    }

    /// Read a JSON config file. Missing fields fall back to the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig =
            serde_json::from_str(&json).context("Failed to deserialize game config")?;
        Ok(config)
    }

    pub fn grid_size(&self) -> GridSize {
        GridSize::new(self.grid_width, self.grid_height)
    }

    pub fn head_position(&self) -> Position {
        self.initial_head.unwrap_or_else(|| {
            Position::new((self.grid_width / 2) as i32, (self.grid_height / 2) as i32)
        })
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(format!(
                "grid must be at least 1x1, got {}x{}",
                self.grid_width, self.grid_height
            ));
        }

        if self.tick_interval_ms == 0 {
            return Err("tick_interval_ms must be positive".to_string());
        }

        let head = self.head_position();
        if !self.grid_size().contains(head) {
            return Err(format!(
                "initial head ({}, {}) lies outside the {}x{} grid",
                head.x, head.y, self.grid_width, self.grid_height
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 25);
        assert_eq!(config.grid_height, 25);
        assert_eq!(config.initial_snake_length, 10);
        assert_eq!(config.initial_direction, Direction::Right);
        assert_eq!(config.head_position(), Position::new(12, 12));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 12);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 12);
        assert_eq!(config.grid_size(), GridSize::new(15, 12));
    }

    #[test]
    fn test_validation_zero_grid() {
        assert!(GameConfig::new(0, 10).validate().is_err());
        assert!(GameConfig::new(10, 0).validate().is_err());
    }

    #[test]
    fn test_validation_zero_tick_interval() {
        let config = GameConfig {
            tick_interval_ms: 0,
            ..GameConfig::small()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_head_outside_grid() {
        let config = GameConfig {
            initial_head: Some(Position::new(10, 3)),
            ..GameConfig::small()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{"grid_width": 8, "initial_direction": "up"}"#).unwrap();
        assert_eq!(config.grid_width, 8);
        assert_eq!(config.grid_height, 25);
        assert_eq!(config.initial_direction, Direction::Up);
    }

    #[test]
    fn test_initial_head_from_json() {
        let config: GameConfig =
            serde_json::from_str(r#"{"initial_head": {"x": 1, "y": 2}}"#).unwrap();
        assert_eq!(config.initial_head, Some(Position::new(1, 2)));
        assert_eq!(config.head_position(), Position::new(1, 2));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "turning_snake_config_{}.json",
            std::process::id()
        ));
        let original = GameConfig {
            seed: Some(99),
            ..GameConfig::small()
        };
        std::fs::write(&path, serde_json::to_string_pretty(&original).unwrap()).unwrap();

        let loaded = GameConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, original);
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(GameConfig::load("/nonexistent/turning_snake.json").is_err());
    }
}
