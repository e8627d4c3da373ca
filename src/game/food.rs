use rand::Rng;

use super::grid::{Grid, Position};

/// Food the player needs to eat.
///
/// A session owns a single `Food` for its whole lifetime; eating it only moves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Food {
    grid: Grid,
    position: Position,
    value: u32,
}

impl Food {
    /// Place food worth `value` points on a random cell
    pub fn new<R: Rng + ?Sized>(grid: Grid, value: u32, rng: &mut R) -> Self {
        let mut food = Self::at(grid, Position::default(), value);
        food.relocate(rng);
        food
    }

    /// Place food on a known cell
    pub fn at(grid: Grid, position: Position, value: u32) -> Self {
        debug_assert!(grid.contains(position), "food placed off grid: {position:?}");
        Self {
            grid,
            position,
            value,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Move to a uniformly random cell. The snake is not avoided, so food may
    /// land under the body.
    pub fn relocate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let col = rng.gen_range(0..self.grid.cols);
        let row = rng.gen_range(0..self.grid.rows);
        self.position = self.grid.cell(col, row);
    }
}
