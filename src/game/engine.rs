use super::{
    config::GameConfig,
    direction::Direction,
    state::{Position, Snake, StepOutcome},
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

/// The snake simulation: grid, snake, apple and score
///
/// Advances one discrete step per [`SnakeGame::advance`] call and never
/// looks at anything outside the board.
#[derive(Debug)]
pub struct SnakeGame {
    grid_width: usize,
    grid_height: usize,
    snake: Snake,
    /// `None` only once the snake covers every cell
    apple: Option<Position>,
    score: u32,
    game_over: bool,
    rng: StdRng,
}

impl SnakeGame {
    /// Create a simulation and set up a fresh game
    pub fn new(config: &GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Same as [`SnakeGame::new`] with a fixed apple sequence
    pub fn with_seed(config: &GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &GameConfig, rng: StdRng) -> Self {
        let mut game = Self {
            grid_width: config.grid_width,
            grid_height: config.grid_height,
            snake: Snake::new(Position::new(0, 0), Direction::Right, 1),
            apple: None,
            score: 0,
            game_over: false,
            rng,
        };
        game.reset(config.initial_snake_length);
        game
    }

    /// Reset the game to initial state
    ///
    /// The snake lies on the middle row heading Right, its head on the centre
    /// column (or further right if the body would not fit otherwise).
    pub fn reset(&mut self, initial_length: usize) {
        let length = initial_length.clamp(1, self.grid_width.max(1));
        let center_x = (self.grid_width / 2).max(length - 1) as i32;
        let center_y = (self.grid_height / 2) as i32;

        self.snake = Snake::new(Position::new(center_x, center_y), Direction::Right, length);
        self.score = 0;
        self.game_over = false;
        self.apple = self.spawn_apple();
    }

    /// Queue a heading change for the next advance; reversals are ignored
    pub fn set_heading(&mut self, direction: Direction) {
        if !self.snake.steer(direction) {
            debug!(?direction, current = ?self.snake.direction, "Rejected reversal");
        }
    }

    /// Execute one step of the game
    pub fn advance(&mut self) -> StepOutcome {
        if self.game_over {
            return StepOutcome::Collision;
        }

        let vacated = self.snake.slither();
        let head = self.snake.head();

        if self.apple == Some(head) {
            self.snake.grow_into(vacated);
            self.score += 1;
            self.apple = self.spawn_apple();
            return StepOutcome::Ate;
        }

        // The body is already shifted, so the vacated tail cell is not in it.
        if !self.is_in_bounds(head) || self.snake.collides_with_body(head) {
            self.game_over = true;
            return StepOutcome::Collision;
        }

        StepOutcome::Continue
    }

    pub fn current_score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> Option<Position> {
        self.apple
    }

    pub fn grid_width(&self) -> usize {
        self.grid_width
    }

    pub fn grid_height(&self) -> usize {
        self.grid_height
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.grid_width as i32
            && pos.y >= 0
            && pos.y < self.grid_height as i32
    }

    /// Spawn the apple at a random cell not covered by the snake
    fn spawn_apple(&mut self) -> Option<Position> {
        if self.snake.len() >= self.grid_width * self.grid_height {
            return None;
        }

        loop {
            let x = self.rng.gen_range(0..self.grid_width) as i32;
            let y = self.rng.gen_range(0..self.grid_height) as i32;
            let pos = Position::new(x, y);

            if !self.snake.occupies(pos) {
                return Some(pos);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn place_apple(&mut self, pos: Position) {
        self.apple = Some(pos);
    }

    #[cfg(test)]
    pub(crate) fn place_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }
}
