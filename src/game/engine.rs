use super::{
    action::{Action, Direction, Player},
    config::GameConfig,
    state::{GameOverReason, GameState, Grid, MoveResult, Position, Snake},
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Information about a completed tick
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Whether snake one ate the food this tick
    pub ate_food_one: bool,
    /// Whether snake two ate the food this tick
    pub ate_food_two: bool,
    /// Set when this tick ended the round
    pub outcome: Option<GameOverReason>,
}

/// Result of a tick
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the round has terminated
    pub terminated: bool,
    /// Additional information about the tick
    pub info: StepInfo,
}

/// The engine that advances a duel one tick at a time
pub struct GameEngine<R: Rng> {
    config: GameConfig,
    rng: R,
}

impl GameEngine<SmallRng> {
    /// Create an engine with an OS-seeded generator, for live play
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, SmallRng::from_entropy())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine with a caller-provided generator, so food placement
    /// can be reproduced from a fixed seed
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Start a fresh round: both snakes at their spawn cells facing right,
    /// scores zeroed, food placed randomly
    pub fn reset(&mut self) -> GameState {
        let grid = Grid::new(self.config.grid_width, self.config.grid_height);
        let (x1, y1) = self.config.spawn_one;
        let (x2, y2) = self.config.spawn_two;

        let snake_one = Snake::new(
            Position::new(x1, y1),
            Direction::Right,
            self.config.initial_snake_length,
        );
        let snake_two = Snake::new(
            Position::new(x2, y2),
            Direction::Right,
            self.config.initial_snake_length,
        );
        let food = self.random_cell(grid);

        GameState::new(snake_one, snake_two, food, grid)
    }

    /// Execute one tick of the duel
    pub fn step(&mut self, state: &mut GameState, one: Action, two: Action) -> StepResult {
        if let Some(reason) = state.outcome {
            return StepResult {
                terminated: true,
                info: StepInfo {
                    ate_food_one: false,
                    ate_food_two: false,
                    outcome: Some(reason),
                },
            };
        }

        state.ticks += 1;

        // Latest intent wins; reversals are dropped by the snake itself
        if let Action::Move(direction) = one {
            state.snake_one.steer(direction);
        }
        if let Action::Move(direction) = two {
            state.snake_two.steer(direction);
        }

        // Snake one moves first; if it dies, snake two stays put this tick
        let grid = state.grid;
        let head_one = match state.snake_one.advance(grid) {
            MoveResult::Moved(head) => head,
            MoveResult::Collided => {
                return finish(state, false, false, GameOverReason::SelfCollision(Player::One));
            }
        };
        let head_two = match state.snake_two.advance(grid) {
            MoveResult::Moved(head) => head,
            MoveResult::Collided => {
                return finish(state, false, false, GameOverReason::SelfCollision(Player::Two));
            }
        };

        // Food resolves in player order: snake one eats and the food respawns
        // before snake two is checked, so a same-tick double score requires
        // the respawn to land exactly on snake two's new head.
        let ate_food_one = head_one == state.food;
        if ate_food_one {
            state.snake_one.grow();
            state.food = self.random_cell(grid);
            state.score_one += 1;
        }

        let ate_food_two = head_two == state.food;
        if ate_food_two {
            state.snake_two.grow();
            state.food = self.random_cell(grid);
            state.score_two += 1;
        }

        // Cross-collision last, on the post-move bodies, heads included
        if state.snake_two.occupies(head_one) || state.snake_one.occupies(head_two) {
            return finish(state, ate_food_one, ate_food_two, GameOverReason::MutualCollision);
        }

        StepResult {
            terminated: false,
            info: StepInfo {
                ate_food_one,
                ate_food_two,
                outcome: None,
            },
        }
    }

    /// Pick a uniformly random cell. Occupied cells are not excluded, so the
    /// food can land under a snake.
    fn random_cell(&mut self, grid: Grid) -> Position {
        Position::new(
            self.rng.gen_range(0..grid.width),
            self.rng.gen_range(0..grid.height),
        )
    }
}

fn finish(
    state: &mut GameState,
    ate_food_one: bool,
    ate_food_two: bool,
    reason: GameOverReason,
) -> StepResult {
    state.outcome = Some(reason);
    StepResult {
        terminated: true,
        info: StepInfo {
            ate_food_one,
            ate_food_two,
            outcome: Some(reason),
        },
    }
}
