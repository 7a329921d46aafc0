use super::types::{Direction, Point};

pub const START_LENGTH: usize = 3;

/// Ordered body, head first. An empty body means the snake does not exist.
#[derive(Clone, Debug, Default)]
pub struct Snake {
    segments: Vec<Point>,
}

impl Snake {
    pub fn new() -> Self {
        Self::default()
    }

    /// Body of `START_LENGTH` cells trailing away from `direction`.
    pub fn spawn(&mut self, head: Point, direction: Direction) {
        let trail = direction.opposite();
        self.segments.clear();
        let mut position = head;
        for _ in 0..START_LENGTH {
            self.segments.push(position);
            position = position.step(trail);
        }
    }

    #[cfg(test)]
    pub(crate) fn from_segments(segments: Vec<Point>) -> Self {
        Self { segments }
    }

    pub fn destroy(&mut self) {
        self.segments.clear();
    }

    pub fn exists(&self) -> bool {
        !self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Point] {
        &self.segments
    }

    pub fn head(&self) -> Point {
        *self.segments.first().expect("Snake body should never be empty")
    }

    pub fn head_mut(&mut self) -> &mut Point {
        self.segments.first_mut().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.segments.last().expect("Snake body should never be empty")
    }

    /// One step: the head moves one cell, every other segment takes the
    /// position its predecessor had before this step.
    pub fn advance(&mut self, direction: Direction) {
        if self.segments.is_empty() {
            return;
        }
        let previous = self.segments.clone();
        self.segments[0] = previous[0].step(direction);
        for i in 1..self.segments.len() {
            self.segments[i] = previous[i - 1];
        }
    }

    /// Appends a segment on top of the current tail; the next `advance`
    /// pulls them apart.
    pub fn grow_up(&mut self) {
        let tail = self.tail();
        self.segments.push(tail);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(raw: &[(i32, i32)]) -> Vec<Point> {
        raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_advance_shifts_segments_to_predecessor_positions() {
        let mut snake = Snake::from_segments(points(&[(5, 5), (5, 4), (5, 3)]));
        snake.advance(Direction::Up);
        assert_eq!(snake.segments(), points(&[(5, 4), (5, 5), (5, 4)]).as_slice());
    }

    #[test]
    fn test_advance_keeps_length() {
        let mut snake = Snake::new();
        snake.spawn(Point::new(5, 10), Direction::Up);
        for direction in [Direction::Left, Direction::Left, Direction::Down] {
            snake.advance(direction);
            assert_eq!(snake.len(), START_LENGTH);
        }
        assert_eq!(snake.head(), Point::new(3, 11));
        assert_eq!(snake.segments()[1], Point::new(3, 10));
        assert_eq!(snake.segments()[2], Point::new(4, 10));
    }

    #[test]
    fn test_spawn_trails_opposite_to_direction() {
        let mut snake = Snake::new();
        snake.spawn(Point::new(5, 10), Direction::Up);
        assert_eq!(snake.segments(), points(&[(5, 10), (5, 11), (5, 12)]).as_slice());
        assert!(snake.exists());
    }

    #[test]
    fn test_grow_up_appends_on_tail() {
        let mut snake = Snake::new();
        snake.spawn(Point::new(5, 10), Direction::Up);
        let tail = snake.tail();
        snake.grow_up();
        assert_eq!(snake.len(), START_LENGTH + 1);
        assert_eq!(snake.tail(), tail);

        snake.advance(Direction::Up);
        assert_eq!(snake.tail(), tail);
        assert_ne!(snake.segments()[START_LENGTH - 1], tail);
    }

    #[test]
    fn test_destroy_clears_body() {
        let mut snake = Snake::new();
        snake.spawn(Point::new(5, 10), Direction::Up);
        snake.destroy();
        assert!(!snake.exists());
        snake.advance(Direction::Up);
        assert!(snake.is_empty());
    }

    #[test]
    #[should_panic(expected = "Snake body should never be empty")]
    fn test_grow_up_on_destroyed_snake_panics() {
        let mut snake = Snake::new();
        snake.grow_up();
    }
}
