use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{
    config::GameConfig,
    direction::Direction,
    error::{Error, Result},
    rng::RandomSource,
    state::{GridSize, Position, Snake},
};

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Whether the snake ate the item this tick
    pub ate_item: bool,
    /// Whether the head now overlaps the body
    pub game_over: bool,
}

/// A running game: the snake, the item it is chasing and the score
pub struct Game<R: RandomSource = StdRng> {
    grid_size: GridSize,
    /// Snake as first built, restored on reset
    initial_snake: Snake,
    snake: Snake,
    item_position: Option<Position>,
    score: u32,
    rng: R,
}

impl Game<StdRng> {
    /// Create a game whose items are placed by an entropy-seeded RNG
    pub fn new(
        head: Position,
        direction: Direction,
        length: usize,
        grid_size: GridSize,
    ) -> Result<Self> {
        Self::with_rng(head, direction, length, grid_size, StdRng::from_entropy())
    }

    /// Create a game from configuration, honouring its seed if one is set
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::from_config_with_rng(config, rng)
    }
}

impl<R: RandomSource> Game<R> {
    /// Create a game with an injected random source
    pub fn with_rng(
        head: Position,
        direction: Direction,
        length: usize,
        grid_size: GridSize,
        rng: R,
    ) -> Result<Self> {
        let snake = Snake::new(head, direction, length, grid_size)?;

        let mut game = Self {
            grid_size,
            initial_snake: snake.clone(),
            snake,
            item_position: None,
            score: 0,
            rng,
        };
        game.item_position = game.place_item();

        tracing::debug!(
            head = ?head,
            direction = ?direction,
            length = game.snake.len(),
            width = grid_size.width,
            height = grid_size.height,
            "game created"
        );

        Ok(game)
    }

    pub fn from_config_with_rng(config: &GameConfig, rng: R) -> Result<Self> {
        config.validate().map_err(Error::InvalidConfig)?;
        Self::with_rng(
            config.head_position(),
            config.initial_direction,
            config.initial_snake_length,
            config.grid_size(),
            rng,
        )
    }

    /// Advance the simulation by one step.
    ///
    /// Order: move, eat and grow, propagate turns, evict the turning point
    /// under the tail.
    pub fn tick(&mut self) -> TickOutcome {
        self.snake.move_body();

        let ate_item = self.has_eaten_item();
        if ate_item {
            self.snake.grow();
            self.score += 1;
            self.item_position = self.place_item();
            tracing::info!(
                score = self.score,
                length = self.snake.len(),
                "item eaten"
            );
        }

        self.snake.update_motion();
        self.snake.update_turning_points();

        let game_over = self.is_game_over();
        if game_over {
            tracing::info!(
                score = self.score,
                head = ?self.snake.head(),
                "snake ran into itself"
            );
        }

        TickOutcome {
            ate_item,
            game_over,
        }
    }

    /// Request a turn for the head; illegal requests are ignored
    pub fn change_direction(&mut self, direction: Direction) {
        self.snake.change_direction(direction);
    }

    /// Put the snake back in its starting layout and clear the score
    pub fn reset(&mut self) {
        self.snake = self.initial_snake.clone();
        self.score = 0;
        self.item_position = self.place_item();
        tracing::info!("game reset");
    }

    /// Pick a uniformly random free cell for the item.
    ///
    /// Returns `None` when the snake covers every cell, since no free cell
    /// exists to sample.
    pub fn place_item(&mut self) -> Option<Position> {
        if self.snake.len() >= self.grid_size.area() {
            tracing::warn!(length = self.snake.len(), "board is full, no item placed");
            return None;
        }

        loop {
            let x = self.rng.next_in_range(self.grid_size.width) as i32;
            let y = self.rng.next_in_range(self.grid_size.height) as i32;
            let pos = Position::new(x, y);

            if !self.snake.occupies(pos) {
                tracing::debug!(x, y, "item placed");
                return Some(pos);
            }
        }
    }

    /// True when the head shares a cell with another segment
    pub fn is_game_over(&self) -> bool {
        self.snake.collides_with_body(self.snake.head())
    }

    pub fn has_eaten_item(&self) -> bool {
        self.item_position == Some(self.snake.head())
    }

    /// True when no item could be placed because the snake fills the grid
    pub fn is_board_full(&self) -> bool {
        self.item_position.is_none()
    }

    /// Place the item by hand. Cells off the grid or under the snake are
    /// refused and leave the item where it was.
    pub fn set_item_position(&mut self, pos: Position) -> bool {
        if !self.grid_size.contains(pos) || self.snake.occupies(pos) {
            return false;
        }
        self.item_position = Some(pos);
        true
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn item_position(&self) -> Option<Position> {
        self.item_position
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn grid_size(&self) -> GridSize {
        self.grid_size
    }
}
