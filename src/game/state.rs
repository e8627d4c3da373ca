use rand::Rng;

use super::action::Direction;
use super::food::Food;
use super::grid::{Grid, Position};

/// One unit of body trailing the head
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub position: Position,
    pub previous_position: Position,
}

impl Segment {
    fn new(position: Position) -> Self {
        Self {
            position,
            previous_position: position,
        }
    }

    fn follow(&mut self, target: Position) {
        self.previous_position = self.position;
        self.position = target;
    }
}

/// The snake the player controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    grid: Grid,
    head: Position,
    previous_head: Position,
    direction: Direction,
    /// Ordered from the segment nearest the head to the tail
    segments: Vec<Segment>,
}

impl Snake {
    /// Create a bare head at `head` moving in `direction`
    pub fn new(grid: Grid, head: Position, direction: Direction) -> Self {
        debug_assert!(grid.contains(head), "snake placed off grid: {head:?}");
        Self {
            grid,
            head,
            previous_head: head,
            direction,
            segments: Vec::new(),
        }
    }

    /// Create a snake with an explicit body, nearest segment first
    pub fn with_body(grid: Grid, head: Position, direction: Direction, body: &[Position]) -> Self {
        let mut snake = Self::new(grid, head, direction);
        snake.segments = body.iter().copied().map(Segment::new).collect();
        snake
    }

    pub fn head(&self) -> Position {
        self.head
    }

    pub fn previous_head(&self) -> Position {
        self.previous_head
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of body segments (head excluded)
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Change heading unless it would reverse straight into the body
    pub fn turn(&mut self, direction: Direction) {
        if !self.direction.is_opposite(direction) {
            self.direction = direction;
        }
    }

    /// Where the head will be after the next move
    pub fn next_head(&self) -> Position {
        self.grid.wrap(self.head, self.direction)
    }

    /// Move one cell forward. Each segment takes the spot the one ahead of it
    /// held before this move, so the chain must be walked head to tail.
    pub fn advance(&mut self) {
        self.previous_head = self.head;
        self.head = self.next_head();
        debug_assert!(self.grid.contains(self.head));

        let mut target = self.previous_head;
        for segment in &mut self.segments {
            segment.follow(target);
            target = segment.previous_position;
        }
    }

    /// Append a segment on top of the current tail (or the head when bodiless).
    /// It separates from the tail on the following moves.
    pub fn grow(&mut self) {
        let at = self
            .segments
            .last()
            .map_or(self.head, |tail| tail.position);
        self.segments.push(Segment::new(at));
    }

    /// Eat `food` if the head is on it: the food jumps to a new cell and the
    /// snake grows. Returns whether anything was eaten.
    pub fn eat<R: Rng + ?Sized>(&mut self, food: &mut Food, rng: &mut R) -> bool {
        if self.head != food.position() {
            return false;
        }
        food.relocate(rng);
        self.grow();
        true
    }

    /// Look-ahead self collision: true if the next move would land on a segment
    pub fn is_dead(&self) -> bool {
        let next = self.next_head();
        self.segments.iter().any(|segment| segment.position == next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn grid() -> Grid {
        Grid::new(30, 30, 20)
    }

    fn positions(snake: &Snake) -> Vec<Position> {
        snake.segments().iter().map(|s| s.position).collect()
    }

    #[test]
    fn test_first_move() {
        let mut snake = Snake::new(grid(), Position::new(0, 0), Direction::Right);
        snake.advance();
        assert_eq!(snake.head(), Position::new(20, 0));
        assert_eq!(snake.previous_head(), Position::new(0, 0));
    }

    #[test]
    fn test_move_wraps_right_edge() {
        let mut snake = Snake::new(grid(), Position::new(580, 0), Direction::Right);
        snake.advance();
        assert_eq!(snake.head(), Position::new(0, 0));
    }

    #[test]
    fn test_segments_follow_chain() {
        let mut snake = Snake::with_body(
            grid(),
            Position::new(40, 0),
            Direction::Right,
            &[Position::new(20, 0), Position::new(0, 0)],
        );

        snake.advance();

        assert_eq!(snake.head(), Position::new(60, 0));
        assert_eq!(
            positions(&snake),
            vec![Position::new(40, 0), Position::new(20, 0)]
        );
        assert_eq!(snake.segments()[0].previous_position, Position::new(20, 0));
        assert_eq!(snake.segments()[1].previous_position, Position::new(0, 0));
    }

    #[test]
    fn test_segments_follow_around_corner() {
        let mut snake = Snake::with_body(
            grid(),
            Position::new(40, 40),
            Direction::Right,
            &[Position::new(20, 40), Position::new(0, 40)],
        );

        snake.turn(Direction::Down);
        snake.advance();
        snake.advance();

        assert_eq!(snake.head(), Position::new(40, 80));
        assert_eq!(
            positions(&snake),
            vec![Position::new(40, 60), Position::new(40, 40)]
        );
    }

    #[test]
    fn test_turn_rejects_reversal() {
        let mut snake = Snake::new(grid(), Position::new(0, 0), Direction::Right);
        snake.turn(Direction::Left);
        assert_eq!(snake.direction(), Direction::Right);

        snake.turn(Direction::Up);
        assert_eq!(snake.direction(), Direction::Up);
        snake.turn(Direction::Down);
        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn test_turn_is_idempotent() {
        let mut snake = Snake::new(grid(), Position::new(0, 0), Direction::Right);
        snake.turn(Direction::Down);
        let once = snake.clone();
        snake.turn(Direction::Down);
        assert_eq!(snake, once);
    }

    #[test]
    fn test_grow_from_head() {
        let mut snake = Snake::new(grid(), Position::new(100, 100), Direction::Right);
        snake.grow();
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.segments()[0].position, Position::new(100, 100));
    }

    #[test]
    fn test_grow_from_tail() {
        let mut snake = Snake::with_body(
            grid(),
            Position::new(40, 0),
            Direction::Right,
            &[Position::new(20, 0), Position::new(0, 0)],
        );
        snake.grow();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.segments()[2].position, Position::new(0, 0));

        // The new segment trails one move behind
        snake.advance();
        assert_eq!(
            positions(&snake),
            vec![Position::new(40, 0), Position::new(20, 0), Position::new(0, 0)]
        );
        snake.advance();
        assert_eq!(
            positions(&snake),
            vec![Position::new(60, 0), Position::new(40, 0), Position::new(20, 0)]
        );
    }

    #[test]
    fn test_eat_on_food() {
        let grid = grid();
        let mut rng = StdRng::seed_from_u64(9);
        let mut snake = Snake::new(grid, Position::new(100, 100), Direction::Right);
        let mut food = Food::at(grid, Position::new(100, 100), 50);

        assert!(snake.eat(&mut food, &mut rng));
        assert_eq!(snake.len(), 1);
        assert!(grid.contains(food.position()));
    }

    #[test]
    fn test_eat_elsewhere_has_no_effect() {
        let grid = grid();
        let mut rng = StdRng::seed_from_u64(9);
        let mut snake = Snake::new(grid, Position::new(100, 100), Direction::Right);
        let mut food = Food::at(grid, Position::new(120, 100), 50);

        assert!(!snake.eat(&mut food, &mut rng));
        assert_eq!(snake.len(), 0);
        assert_eq!(food.position(), Position::new(120, 100));
    }

    #[test]
    fn test_eat_moves_food_eventually() {
        let grid = grid();
        let mut rng = StdRng::seed_from_u64(5);
        let spot = Position::new(100, 100);
        let moved = (0..50)
            .filter(|_| {
                let mut snake = Snake::new(grid, spot, Direction::Right);
                let mut food = Food::at(grid, spot, 50);
                snake.eat(&mut food, &mut rng);
                food.position() != spot
            })
            .count();
        assert!(moved > 40);
    }

    #[test]
    fn test_no_segments_never_dead() {
        let snake = Snake::new(grid(), Position::new(0, 0), Direction::Right);
        assert!(!snake.is_dead());
    }

    #[test]
    fn test_is_dead_looks_ahead() {
        // Head at (40,40) heading Up, body curls so (40,20) is occupied
        let snake = Snake::with_body(
            grid(),
            Position::new(40, 40),
            Direction::Up,
            &[
                Position::new(60, 40),
                Position::new(60, 20),
                Position::new(40, 20),
            ],
        );
        assert!(snake.is_dead());
    }

    #[test]
    fn test_is_dead_false_when_next_cell_free() {
        let snake = Snake::with_body(
            grid(),
            Position::new(40, 40),
            Direction::Right,
            &[Position::new(20, 40), Position::new(0, 40)],
        );
        assert!(!snake.is_dead());
    }

    #[test]
    fn test_is_dead_across_wrap() {
        let snake = Snake::with_body(
            grid(),
            Position::new(580, 0),
            Direction::Right,
            &[Position::new(560, 0), Position::new(0, 0)],
        );
        assert!(snake.is_dead());
    }
}
