use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use super::{
    action::{Command, Direction},
    config::{GameConfig, Rgb},
    food::Food,
    grid::{Grid, Position},
    state::Snake,
};

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Paused,
    /// The snake bit itself; only a restart leaves this state
    Ended,
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing, nothing changed
    Idle,
    /// The pending move would hit the body; the session is now over
    Died,
    /// The snake moved one cell
    Moved,
    /// The snake moved onto the food and scored
    Ate,
}

/// Something the renderer should paint as one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drawable {
    pub position: Position,
    pub color: Rgb,
    pub size: i32,
}

/// A single game from first move to game over
#[derive(Debug)]
pub struct Session {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    food: Food,
    score: u32,
    status: GameStatus,
    rng: StdRng,
}

impl Session {
    /// Start a session; `seed` makes food placement reproducible
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let grid = config.grid();
        let snake = Self::initial_snake(grid);
        let food = Food::new(grid, config.food_value, &mut rng);
        info!(
            cols = grid.cols,
            rows = grid.rows,
            food = ?food.position(),
            "session started"
        );

        Self {
            config,
            grid,
            snake,
            food,
            score: 0,
            status: GameStatus::Playing,
            rng,
        }
    }

    fn initial_snake(grid: Grid) -> Snake {
        Snake::new(grid, Position::new(0, 0), Direction::Right)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Apply a player command. Commands that make no sense in the current
    /// status are ignored.
    pub fn handle(&mut self, command: Command) {
        match (command, self.status) {
            (Command::Turn(direction), GameStatus::Playing) => {
                debug!(?direction, "turn");
                self.snake.turn(direction);
            }
            (Command::TogglePause, GameStatus::Playing) => {
                info!(score = self.score, "paused");
                self.status = GameStatus::Paused;
            }
            (Command::TogglePause, GameStatus::Paused) => {
                info!("resumed");
                self.status = GameStatus::Playing;
            }
            (Command::Restart, _) => self.restart(),
            _ => {}
        }
    }

    /// Throw away the snake and score and play again on the same RNG stream
    pub fn restart(&mut self) {
        info!(previous_score = self.score, "restarting");
        self.snake = Self::initial_snake(self.grid);
        self.food = Food::new(self.grid, self.config.food_value, &mut self.rng);
        self.score = 0;
        self.status = GameStatus::Playing;
    }

    /// Advance the simulation by one tick.
    ///
    /// Death is checked against the pending move before it is committed, so a
    /// collision ends the game with the head still one cell short of the body.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Playing {
            return TickOutcome::Idle;
        }

        if self.snake.is_dead() {
            info!(score = self.score, length = self.snake.len(), "game over");
            self.status = GameStatus::Ended;
            return TickOutcome::Died;
        }

        self.snake.advance();

        if self.snake.eat(&mut self.food, &mut self.rng) {
            self.score += self.food.value();
            debug!(
                score = self.score,
                length = self.snake.len(),
                next_food = ?self.food.position(),
                "food eaten"
            );
            return TickOutcome::Ate;
        }

        TickOutcome::Moved
    }

    /// Everything to paint this frame, bottom layer first: body, food, head
    pub fn drawables(&self) -> Vec<Drawable> {
        let palette = &self.config.palette;
        let size = self.grid.cell_size;
        let cell = |position, color| Drawable {
            position,
            color,
            size,
        };

        let mut drawables: Vec<Drawable> = self
            .snake
            .segments()
            .iter()
            .map(|segment| cell(segment.position, palette.snake))
            .collect();
        drawables.push(cell(self.food.position(), palette.food));
        drawables.push(cell(self.snake.head(), palette.snake));
        drawables
    }

    #[cfg(test)]
    pub(crate) fn set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, position: Position) {
        self.food = Food::at(self.grid, position, self.config.food_value);
    }
}
