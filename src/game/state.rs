use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::error::{Error, Result};

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta, without wraparound
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction, without wraparound
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// Step one cell in `direction` on a toroidal grid.
    ///
    /// A coordinate that drops below zero lands on the last row/column and one
    /// that reaches the grid size lands on zero. Both axes are checked after
    /// every step.
    pub fn stepped_on(&self, direction: Direction, grid: GridSize) -> Self {
        let mut next = self.moved_in_direction(direction);
        let (width, height) = (grid.width as i32, grid.height as i32);

        if next.x < 0 {
            next.x = width - 1;
        }
        if next.x >= width {
            next.x = 0;
        }
        if next.y < 0 {
            next.y = height - 1;
        }
        if next.y >= height {
            next.y = 0;
        }

        next
    }
}

/// Fixed dimensions of the playing field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    pub width: usize,
    pub height: usize,
}

impl GridSize {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Check if a position is within the grid bounds
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width as i32 && pos.y >= 0 && pos.y < self.height as i32
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

/// The snake: a chain of cells, each with its own pending motion.
///
/// A turn requested at the head is stored as a turning point keyed by the
/// head's cell. Every later segment that arrives on that cell picks up the new
/// direction, so the turn travels down the body one segment per tick. The tail
/// clears the entry once it has passed through.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    grid: GridSize,
    /// Body segments, with head at index 0
    body: Vec<Position>,
    /// Direction each segment takes on the next move; same length as `body`
    motion: Vec<Direction>,
    last_head_motion: Direction,
    turning_points: HashMap<Position, Direction>,
}

impl Snake {
    /// Create a straight snake whose body trails behind `head`.
    ///
    /// The length is clipped so the initial body never wraps across an edge.
    /// A requested length of zero still yields the head.
    pub fn new(
        head: Position,
        direction: Direction,
        requested_length: usize,
        grid: GridSize,
    ) -> Result<Self> {
        if !grid.contains(head) {
            return Err(Error::OutOfBounds {
                position: head,
                grid,
            });
        }

        let body = Self::straight_body(head, direction, requested_length.max(1), grid);
        let motion = vec![direction; body.len()];

        Ok(Self {
            grid,
            body,
            motion,
            last_head_motion: direction,
            turning_points: HashMap::new(),
        })
    }

    fn straight_body(
        head: Position,
        direction: Direction,
        length: usize,
        grid: GridSize,
    ) -> Vec<Position> {
        // Room left between the head and the edge behind it, head included
        let room = match direction {
            Direction::Up => grid.height - head.y as usize,
            Direction::Down => 1 + head.y as usize,
            Direction::Left => grid.width - head.x as usize,
            Direction::Right => 1 + head.x as usize,
        };
        let length = length.min(room);

        let (dx, dy) = direction.opposite().delta();
        (0..length as i32)
            .map(|i| head.moved_by(dx * i, dy * i))
            .collect()
    }

    /// Advance every segment one cell along its own motion, wrapping at edges
    pub fn move_body(&mut self) {
        let grid = self.grid;
        for (pos, dir) in self.body.iter_mut().zip(&self.motion) {
            *pos = pos.stepped_on(*dir, grid);
        }
    }

    /// Apply turning points to the segments now sitting on them.
    ///
    /// Must run right after [`Snake::move_body`].
    pub fn update_motion(&mut self) {
        for (pos, dir) in self.body.iter().zip(self.motion.iter_mut()) {
            if let Some(turn) = self.turning_points.get(pos) {
                *dir = *turn;
            }
        }

        self.last_head_motion = self.motion[0];
    }

    /// Drop the turning point under the tail; nothing behind it can reach it.
    ///
    /// Must run after [`Snake::update_motion`].
    pub fn update_turning_points(&mut self) {
        let tail = self.tail();
        self.turning_points.remove(&tail);
    }

    /// Append one segment on the cell the tail just came from.
    ///
    /// The new cell is not wrapped, so it may lie one step outside the grid
    /// until the next move brings it back.
    pub fn grow(&mut self) {
        let tail = self.tail();
        let tail_motion = self.motion[self.motion.len() - 1];

        self.body.push(tail.moved_in_direction(tail_motion.opposite()));
        self.motion.push(tail_motion);
    }

    /// Queue a turn at the head.
    ///
    /// Requests equal or opposite to the head's last motion are ignored. A
    /// second turn on the same cell replaces the first.
    pub fn change_direction(&mut self, new_direction: Direction) {
        if new_direction == self.last_head_motion
            || self.last_head_motion.is_opposite(new_direction)
        {
            tracing::debug!(
                requested = ?new_direction,
                current = ?self.last_head_motion,
                "ignoring turn request"
            );
            return;
        }

        self.motion[0] = new_direction;
        self.turning_points.insert(self.head(), new_direction);
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn body(&self) -> &[Position] {
        &self.body
    }

    pub fn motion(&self) -> &[Direction] {
        &self.motion
    }

    pub fn last_head_motion(&self) -> Direction {
        self.last_head_motion
    }

    pub fn turning_points(&self) -> &HashMap<Position, Direction> {
        &self.turning_points
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    /// Check if any segment, head included, sits on `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Motion of the first segment found on `pos`
    pub fn motion_at(&self, pos: Position) -> Option<Direction> {
        self.body
            .iter()
            .position(|p| *p == pos)
            .map(|i| self.motion[i])
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
