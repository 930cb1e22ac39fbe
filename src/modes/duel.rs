use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::info;
use rand::rngs::SmallRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::{Duration, Instant};
use tokio::time::interval;

use crate::game::{Action, Direction, GameConfig, GameEngine, GameOverReason, GameState, Level, Player};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// How long the game-over screen stays up before the menu returns
const GAME_OVER_DWELL: Duration = Duration::from_secs(3);

/// Frames are drawn at 30 FPS regardless of the simulation tick rate
const RENDER_INTERVAL: Duration = Duration::from_millis(33);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Menu,
    Playing,
    GameOver {
        reason: GameOverReason,
        since: Instant,
    },
}

pub struct DuelMode {
    engine: GameEngine<SmallRng>,
    state: GameState,
    level: Level,
    screen: Screen,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
    retime: bool,
    pending_one: Option<Direction>,
    pending_two: Option<Direction>,
}

impl DuelMode {
    /// With a preselected level the duel starts immediately; otherwise the
    /// level-select menu is shown first
    pub fn new(config: GameConfig, level: Option<Level>) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        let mut mode = Self {
            engine,
            state,
            level: Level::Easy,
            screen: Screen::Menu,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
            retime: false,
            pending_one: None,
            pending_two: None,
        };

        if let Some(level) = level {
            mode.start_round(level);
        }

        mode
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick_timer = interval(self.level.tick_interval());
        let mut render_timer = interval(RENDER_INTERVAL);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Simulation tick
                _ = tick_timer.tick() => {
                    self.on_tick();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.render_frame(frame);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                info!("quitting");
                break;
            }

            // A level change takes a new tick cadence
            if self.retime {
                self.retime = false;
                tick_timer = interval(self.level.tick_interval());
            }
        }

        Ok(())
    }

    fn render_frame(&self, frame: &mut ratatui::Frame) {
        match self.screen {
            Screen::Menu => self.renderer.render_menu(frame),
            Screen::Playing => {
                self.renderer
                    .render_game(frame, &self.state, &self.metrics, self.level)
            }
            Screen::GameOver { reason, .. } => {
                self.renderer.render_game_over(frame, &self.state, reason)
            }
        }
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            let action = match self.screen {
                Screen::Menu => self.input_handler.menu_key(key),
                Screen::Playing => self.input_handler.game_key(key),
                Screen::GameOver { .. } => self.input_handler.game_over_key(key),
            };

            match action {
                // Last press before the tick wins
                KeyAction::Steer(Player::One, direction) => {
                    self.pending_one = Some(direction);
                }
                KeyAction::Steer(Player::Two, direction) => {
                    self.pending_two = Some(direction);
                }
                KeyAction::StartLevel(level) => {
                    self.start_round(level);
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn on_tick(&mut self) {
        match self.screen {
            Screen::Menu => {}
            Screen::Playing => self.advance_round(),
            Screen::GameOver { since, .. } => {
                if since.elapsed() >= GAME_OVER_DWELL {
                    self.screen = Screen::Menu;
                }
            }
        }
    }

    fn advance_round(&mut self) {
        let one = self
            .pending_one
            .take()
            .map(Action::Move)
            .unwrap_or(Action::Continue);
        let two = self
            .pending_two
            .take()
            .map(Action::Move)
            .unwrap_or(Action::Continue);

        let result = self.engine.step(&mut self.state, one, two);

        if let Some(reason) = result.info.outcome {
            self.metrics
                .on_round_over(self.state.score_one, self.state.score_two);
            info!(
                "round over after {} ticks: {:?} (p1 {} / p2 {})",
                self.state.ticks, reason, self.state.score_one, self.state.score_two
            );
            self.screen = Screen::GameOver {
                reason,
                since: Instant::now(),
            };
        }
    }

    fn start_round(&mut self, level: Level) {
        self.level = level;
        self.state = self.engine.reset();
        self.pending_one = None;
        self.pending_two = None;
        self.metrics.on_round_start();
        self.retime = true;
        self.screen = Screen::Playing;
        info!(
            "round started at {} ({} ticks/s)",
            level.label(),
            level.ticks_per_second()
        );
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Position, Snake};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_starts_at_the_menu() {
        let mode = DuelMode::new(GameConfig::small(), None);
        assert_eq!(mode.screen, Screen::Menu);
    }

    #[test]
    fn test_preselected_level_skips_the_menu() {
        let mode = DuelMode::new(GameConfig::small(), Some(Level::Hard));
        assert_eq!(mode.screen, Screen::Playing);
        assert_eq!(mode.level, Level::Hard);
    }

    #[test]
    fn test_menu_digit_starts_a_round() {
        let mut mode = DuelMode::new(GameConfig::small(), None);

        mode.handle_event(key(KeyCode::Char('2')));

        assert_eq!(mode.screen, Screen::Playing);
        assert_eq!(mode.level, Level::Medium);
        assert!(mode.retime);
    }

    #[test]
    fn test_last_press_per_snake_wins() {
        let mut mode = DuelMode::new(GameConfig::small(), Some(Level::Easy));

        mode.handle_event(key(KeyCode::Char('w')));
        mode.handle_event(key(KeyCode::Char('s')));
        mode.handle_event(key(KeyCode::Up));

        assert_eq!(mode.pending_one, Some(Direction::Down));
        assert_eq!(mode.pending_two, Some(Direction::Up));

        mode.advance_round();
        assert_eq!(mode.pending_one, None);
        assert_eq!(mode.pending_two, None);
    }

    #[test]
    fn test_round_end_shows_game_over() {
        let mut mode = DuelMode::new(GameConfig::small(), Some(Level::Easy));

        // Put the snakes on a collision course
        mode.state.snake_one = Snake::new(Position::new(5, 4), Direction::Down, 1);
        mode.state.snake_two = Snake::new(Position::new(6, 5), Direction::Right, 3);
        mode.state.food = Position::new(0, 9);

        mode.advance_round();

        assert!(matches!(
            mode.screen,
            Screen::GameOver {
                reason: GameOverReason::MutualCollision,
                ..
            }
        ));
        assert_eq!(mode.metrics.rounds_played, 1);
    }

    #[test]
    fn test_quit_key_sets_flag() {
        let mut mode = DuelMode::new(GameConfig::small(), None);

        mode.handle_event(key(KeyCode::Char('q')));

        assert!(mode.should_quit);
    }
}
