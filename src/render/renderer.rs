use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GameOverReason, GameState, Level, Player, Position};
use crate::metrics::GameMetrics;

const PLAYER_ONE_COLOR: Color = Color::Green;
const PLAYER_TWO_COLOR: Color = Color::Blue;
const FOOD_COLOR: Color = Color::Red;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render_menu(&self, frame: &mut Frame) {
        let area = centered_area(frame.area());

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "SNAKE DUEL",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Choose a level"),
            Line::from(""),
            Line::from(vec![
                Span::styled("1", Style::default().fg(Color::Cyan)),
                Span::raw(". Easy"),
            ]),
            Line::from(vec![
                Span::styled("2", Style::default().fg(Color::Cyan)),
                Span::raw(". Medium"),
            ]),
            Line::from(vec![
                Span::styled("3", Style::default().fg(Color::Cyan)),
                Span::raw(". Hard"),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("WASD", Style::default().fg(PLAYER_ONE_COLOR)),
                Span::raw(" steers player 1, "),
                Span::styled("arrows", Style::default().fg(PLAYER_TWO_COLOR)),
                Span::raw(" steer player 2"),
            ]),
            Line::from(vec![
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
        ];

        let menu = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .title(" Snake Duel "),
        );
        frame.render_widget(menu, area);
    }

    pub fn render_game(
        &self,
        frame: &mut Frame,
        state: &GameState,
        metrics: &GameMetrics,
        level: Level,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(state, metrics, level);
        frame.render_widget(stats, chunks[0]);

        let game_area = centered_area(chunks[1]);
        let grid = self.render_grid(state);
        frame.render_widget(grid, game_area);

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    pub fn render_game_over(&self, frame: &mut Frame, state: &GameState, reason: GameOverReason) {
        let area = centered_area(frame.area());

        let reason_text = match reason {
            GameOverReason::SelfCollision(player) => {
                format!("{} ran into itself", player.label())
            }
            GameOverReason::MutualCollision => "The snakes collided".to_string(),
        };

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(reason_text),
            Line::from(""),
            Line::from(vec![
                Span::styled("Player 1: ", Style::default().fg(PLAYER_ONE_COLOR)),
                Span::styled(
                    state.score_one.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("    "),
                Span::styled("Player 2: ", Style::default().fg(PLAYER_TWO_COLOR)),
                Span::styled(
                    state.score_two.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Back to the menu in a moment",
                Style::default().fg(Color::Gray),
            )),
        ];

        let game_over = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
        frame.render_widget(game_over, area);
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let mut lines = Vec::new();

        for y in 0..state.grid.height {
            let mut spans = Vec::new();

            for x in 0..state.grid.width {
                spans.push(self.cell_span(state, Position::new(x, y)));
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake Duel "),
            )
            .alignment(Alignment::Center)
    }

    /// Heads draw over the food, the food draws over trailing bodies
    fn cell_span(&self, state: &GameState, pos: Position) -> Span<'static> {
        if pos == state.snake_one.head() {
            Span::styled(
                "■ ",
                Style::default()
                    .fg(PLAYER_ONE_COLOR)
                    .add_modifier(Modifier::BOLD),
            )
        } else if pos == state.snake_two.head() {
            Span::styled(
                "■ ",
                Style::default()
                    .fg(PLAYER_TWO_COLOR)
                    .add_modifier(Modifier::BOLD),
            )
        } else if pos == state.food {
            Span::styled(
                "O ",
                Style::default().fg(FOOD_COLOR).add_modifier(Modifier::BOLD),
            )
        } else if state.snake_one.occupies(pos) {
            Span::styled("□ ", Style::default().fg(PLAYER_ONE_COLOR))
        } else if state.snake_two.occupies(pos) {
            Span::styled("□ ", Style::default().fg(PLAYER_TWO_COLOR))
        } else {
            Span::styled(". ", Style::default().fg(Color::DarkGray))
        }
    }

    fn render_stats(
        &self,
        state: &GameState,
        metrics: &GameMetrics,
        level: Level,
    ) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("P1: ", Style::default().fg(PLAYER_ONE_COLOR)),
            Span::styled(
                state.score(Player::One).to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("P2: ", Style::default().fg(PLAYER_TWO_COLOR)),
            Span::styled(
                state.score(Player::Two).to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Level: ", Style::default().fg(Color::Yellow)),
            Span::styled(level.label(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.best_score.to_string(),
                Style::default().fg(Color::White),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("WASD", Style::default().fg(PLAYER_ONE_COLOR)),
            Span::raw(" player 1 | "),
            Span::styled("↑↓←→", Style::default().fg(PLAYER_TWO_COLOR)),
            Span::raw(" player 2 | "),
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

/// Middle 80% of the area, horizontally
fn centered_area(area: Rect) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(10),
            Constraint::Percentage(80),
            Constraint::Percentage(10),
        ])
        .split(area)[1]
}
