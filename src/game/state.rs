use super::action::{Direction, Player};

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta, without wrapping
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one cell in a direction, without wrapping
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The toroidal coordinate space the duel is played on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width as i32,
            height: height as i32,
        }
    }

    /// Map any integer pair into [0, width) x [0, height).
    ///
    /// rem_euclid is a floor-mod, so negative coordinates come back in on the
    /// opposite edge instead of truncating towards zero.
    pub fn wrap(&self, pos: Position) -> Position {
        Position::new(pos.x.rem_euclid(self.width), pos.y.rem_euclid(self.height))
    }
}

/// Outcome of advancing a snake by one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// The snake moved; payload is the new head cell
    Moved(Position),
    /// The new head landed on the snake's own body
    Collided,
}

/// One snake: its body cells, its heading and its pending growth
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
    growing: bool,
}

impl Snake {
    /// Create a new snake with given head position, direction and length;
    /// extra segments trail out behind the head
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let mut body = vec![head];
        let (dx, dy) = direction.delta();

        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_by(-dx, -dy));
        }

        Self {
            body,
            direction,
            growing: false,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Check if any segment, head and tail included, sits on `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Queue a one-cell growth; it is applied on the next advance, not
    /// immediately
    pub fn grow(&mut self) {
        self.growing = true;
    }

    pub fn is_growing(&self) -> bool {
        self.growing
    }

    /// Turn the snake, unless the new heading is the exact reverse of the
    /// current one; a reversal is silently dropped
    pub fn steer(&mut self, direction: Direction) {
        if !self.direction.is_opposite(direction) {
            self.direction = direction;
        }
    }

    /// Advance one cell in the current direction, wrapping at the grid edges.
    ///
    /// The membership test runs against the whole current body, so moving
    /// into the cell the tail is about to vacate still counts as a collision.
    pub fn advance(&mut self, grid: Grid) -> MoveResult {
        let new_head = grid.wrap(self.head().moved_in_direction(self.direction));

        if self.occupies(new_head) {
            return MoveResult::Collided;
        }

        self.body.insert(0, new_head);
        if self.growing {
            self.growing = false;
        } else {
            self.body.pop();
        }

        MoveResult::Moved(new_head)
    }
}

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// A snake ran into its own body
    SelfCollision(Player),
    /// A head landed on the other snake
    MutualCollision,
}

/// Complete state of one duel round
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake_one: Snake,
    pub snake_two: Snake,
    pub food: Position,
    pub grid: Grid,
    pub score_one: u32,
    pub score_two: u32,
    pub ticks: u32,
    /// Set once the round has ended; terminal states are absorbing
    pub outcome: Option<GameOverReason>,
}

impl GameState {
    /// Create a new round state with zeroed scores
    pub fn new(snake_one: Snake, snake_two: Snake, food: Position, grid: Grid) -> Self {
        Self {
            snake_one,
            snake_two,
            food,
            grid,
            score_one: 0,
            score_two: 0,
            ticks: 0,
            outcome: None,
        }
    }

    /// Whether the round is still live
    pub fn is_running(&self) -> bool {
        self.outcome.is_none()
    }

    pub fn snake(&self, player: Player) -> &Snake {
        match player {
            Player::One => &self.snake_one,
            Player::Two => &self.snake_two,
        }
    }

    pub fn score(&self, player: Player) -> u32 {
        match player {
            Player::One => self.score_one,
            Player::Two => self.score_two,
        }
    }
}
