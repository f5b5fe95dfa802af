use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Game, Position, RandomSource};
use crate::metrics::GameMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render<R: RandomSource>(&self, frame: &mut Frame, game: &Game<R>, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(game, metrics);
        frame.render_widget(stats, chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        if game.is_game_over() {
            frame.render_widget(self.render_game_over(game), game_area);
        } else if game.is_board_full() {
            frame.render_widget(self.render_board_full(game), game_area);
        } else {
            frame.render_widget(self.render_grid(game), game_area);
        }

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid<R: RandomSource>(&self, game: &Game<R>) -> Paragraph<'_> {
        let snake = game.snake();
        let grid = game.grid_size();
        let mut lines = Vec::with_capacity(grid.height);

        for y in 0..grid.height {
            let mut spans = Vec::with_capacity(grid.width);

            for x in 0..grid.width {
                let pos = Position::new(x as i32, y as i32);

                let cell = if pos == snake.head() {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if snake.occupies(pos) {
                    // Segments still waiting to turn are tinted
                    let color = if snake.turning_points().contains_key(&pos) {
                        Color::LightGreen
                    } else {
                        Color::Green
                    };
                    Span::styled("□ ", Style::default().fg(color))
                } else if game.item_position() == Some(pos) {
                    Span::styled(
                        "O ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats<R: RandomSource>(&self, game: &Game<R>, metrics: &GameMetrics) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(
                format!("{:02}", game.score()),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Length: ", label),
            Span::styled(game.snake().len().to_string(), value),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.high_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Longest: ", label),
            Span::styled(metrics.longest_snake.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over<R: RandomSource>(&self, game: &Game<R>) -> Paragraph<'_> {
        self.end_panel("GAME OVER", Color::Red, game.score())
    }

    fn render_board_full<R: RandomSource>(&self, game: &Game<R>) -> Paragraph<'_> {
        self.end_panel("BOARD FULL", Color::Green, game.score())
    }

    fn end_panel(&self, title: &'static str, color: Color, score: u32) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Your score is ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(". Play again?", Style::default().fg(Color::Yellow)),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to turn | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, GridSize};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn small_game() -> Game<StdRng> {
        Game::with_rng(
            Position::new(4, 4),
            Direction::Right,
            3,
            GridSize::new(8, 8),
            StdRng::seed_from_u64(11),
        )
        .unwrap()
    }

    #[test]
    fn test_renders_score_and_grid() {
        let game = small_game();
        let mut metrics = GameMetrics::new();
        metrics.on_game_over(4, 7);
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();

        terminal
            .draw(|frame| Renderer::new().render(frame, &game, &metrics))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Score: 00"));
        assert!(text.contains("Length: 3"));
        assert!(text.contains("Best: 4"));
        assert!(text.contains("Longest: 7"));
        assert!(text.contains("■"));
    }

    #[test]
    fn test_renders_game_over_panel() {
        let mut game = Game::with_rng(
            Position::new(5, 5),
            Direction::Right,
            5,
            GridSize::new(10, 10),
            StdRng::seed_from_u64(11),
        )
        .unwrap();
        assert!(game.set_item_position(Position::new(9, 0)));

        // Down, Left, Up bites the body
        for dir in [Direction::Down, Direction::Left, Direction::Up] {
            game.change_direction(dir);
            game.tick();
        }
        assert!(game.is_game_over());

        let metrics = GameMetrics::new();
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|frame| Renderer::new().render(frame, &game, &metrics))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("Play again?"));
    }
}
