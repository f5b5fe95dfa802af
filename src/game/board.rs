//! Plain-text dump of the board for debugging.
//!
//! Each cell is two characters wide: `*` for the item, then the motion
//! letter of the segment on it (`u`, `d`, `l`, `r`), upper-cased for the head.
//! Pending turning points follow on their own line.

use std::fmt;

use super::engine::Game;
use super::rng::RandomSource;
use super::state::Position;

/// Read-only text projection of a game
pub struct BoardDump<'a, R: RandomSource>(pub &'a Game<R>);

impl<R: RandomSource> fmt::Display for BoardDump<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let game = self.0;
        let snake = game.snake();
        let grid = game.grid_size();

        for y in 0..grid.height {
            for x in 0..grid.width {
                let pos = Position::new(x as i32, y as i32);
                let mut cell = String::with_capacity(2);

                if game.item_position() == Some(pos) {
                    cell.push('*');
                }
                if let Some(dir) = snake.motion_at(pos) {
                    let marker = dir.marker();
                    cell.push(if pos == snake.head() {
                        marker.to_ascii_uppercase()
                    } else {
                        marker
                    });
                }

                if x > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{:>2}", cell)?;
            }
            writeln!(f)?;
        }

        let mut turns: Vec<_> = snake.turning_points().iter().collect();
        turns.sort_by_key(|(pos, _)| (pos.y, pos.x));

        f.write_str("turning_points: {")?;
        for (i, (pos, dir)) in turns.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({}, {}): {}", pos.x, pos.y, dir.marker())?;
        }
        f.write_str("}")
    }
}
