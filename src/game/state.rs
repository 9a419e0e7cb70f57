use super::direction::Direction;

/// A cell on the game grid, as (column, row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Heading applied on the last advance
    pub direction: Direction,
    /// Heading to apply on the next advance
    pub pending_direction: Option<Direction>,
}

impl Snake {
    /// Create a new snake with given starting position and direction
    ///
    /// Segments trail behind the head, opposite to `direction`.
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let (back_dx, back_dy) = direction.opposite().delta();
        let mut body = Vec::with_capacity(length.max(1));
        body.push(head);

        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_by(back_dx, back_dy));
        }

        Self {
            body,
            direction,
            pending_direction: None,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Body segments behind the head
    fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Record a heading for the next advance. Reversals of the current
    /// heading are ignored; returns whether the heading was accepted.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    /// Move one cell along the pending (or current) heading, keeping length.
    ///
    /// Returns the cell vacated by the tail so the caller can grow into it.
    pub fn slither(&mut self) -> Position {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let vacated = self.tail();
        let new_head = self.head().moved_in_direction(self.direction);
        self.body.pop();
        self.body.insert(0, new_head);
        vacated
    }

    /// Append a segment at the given cell
    pub fn grow_into(&mut self, pos: Position) {
        self.body.push(pos);
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }
}

/// Result of a single simulation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Snake moved onto an empty cell
    Continue,
    /// Snake ate the apple and grew by one
    Ate,
    /// Snake left the grid or ran into itself
    Collision,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_by(0, 1), Position::new(5, 6));
        assert_eq!(pos.moved_by(0, -1), Position::new(5, 4));
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(5, 4));
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.body[1], Position::new(4, 5));
        assert_eq!(snake.body[2], Position::new(3, 5));
        assert_eq!(snake.tail(), Position::new(3, 5));
    }

    #[test]
    fn test_snake_slither() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        let vacated = snake.slither();
        assert_eq!(vacated, Position::new(3, 5));
        assert_eq!(snake.len(), 3);
        assert_eq!(
            snake.body,
            vec![Position::new(6, 5), Position::new(5, 5), Position::new(4, 5)]
        );

        snake.grow_into(vacated);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.tail(), Position::new(3, 5));
    }

    #[test]
    fn test_steer_rejects_reversal() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        assert!(!snake.steer(Direction::Left));
        assert_eq!(snake.pending_direction, None);

        assert!(snake.steer(Direction::Up));
        assert_eq!(snake.direction, Direction::Right);
        assert_eq!(snake.pending_direction, Some(Direction::Up));

        // Still judged against the applied heading, not the pending one
        assert!(!snake.steer(Direction::Left));
        assert_eq!(snake.pending_direction, Some(Direction::Up));

        snake.slither();
        assert_eq!(snake.direction, Direction::Up);
        assert_eq!(snake.pending_direction, None);
        assert_eq!(snake.head(), Position::new(5, 4));
    }

    #[test]
    fn test_collision_detection() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        assert!(!snake.collides_with_body(Position::new(5, 5))); // head
        assert!(snake.collides_with_body(Position::new(4, 5))); // body
        assert!(!snake.collides_with_body(Position::new(10, 10))); // empty
        assert!(snake.occupies(Position::new(5, 5)));
    }
}
