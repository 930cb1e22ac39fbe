use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Difficulty level; only the simulation tick rate changes with it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Easy,
    Medium,
    Hard,
}

impl Level {
    /// Simulation ticks per second at this level
    pub fn ticks_per_second(&self) -> u64 {
        match self {
            Level::Easy => 8,
            Level::Medium => 12,
            Level::Hard => 16,
        }
    }

    /// Wall-clock delay between two simulation ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(1000 / self.ticks_per_second())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Level::Easy => "Easy",
            Level::Medium => "Medium",
            Level::Hard => "Hard",
        }
    }
}

/// Configuration for a duel round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: usize,
    /// Height of the game grid in cells
    pub grid_height: usize,
    /// Starting length of both snakes
    pub initial_snake_length: usize,
    /// Spawn cell for snake one
    pub spawn_one: (i32, i32),
    /// Spawn cell for snake two
    pub spawn_two: (i32, i32),
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 40,
            grid_height: 30,
            initial_snake_length: 1,
            spawn_one: (5, 5),
            spawn_two: (15, 5),
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
            spawn_one: (2, 2),
            spawn_two: (7, 7),
            ..Self::new(10, 10)
        }
    }
}
