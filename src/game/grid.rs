use super::action::Direction;

/// A position on the play area, in the same units as the cell size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Fixed grid of square cells with toroidal edges.
///
/// Positions are stored scaled by `cell_size`, so the top-left corner of column 3
/// on a grid with 20-unit cells is `x = 60`. Wrapping works on cell indices and
/// the result is always a valid cell corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub cols: i32,
    pub rows: i32,
    pub cell_size: i32,
}

impl Grid {
    pub fn new(cols: i32, rows: i32, cell_size: i32) -> Self {
        debug_assert!(cols > 0 && rows > 0 && cell_size > 0);
        Self {
            cols,
            rows,
            cell_size,
        }
    }

    /// Extent of the play area along x
    pub fn width(&self) -> i32 {
        self.cols * self.cell_size
    }

    /// Extent of the play area along y
    pub fn height(&self) -> i32 {
        self.rows * self.cell_size
    }

    /// Position of the cell at (`col`, `row`), wrapped onto the grid
    pub fn cell(&self, col: i32, row: i32) -> Position {
        Position::new(
            col.rem_euclid(self.cols) * self.cell_size,
            row.rem_euclid(self.rows) * self.cell_size,
        )
    }

    /// Column and row of a position, or `None` if it lies off the grid
    pub fn cell_of(&self, pos: Position) -> Option<(u16, u16)> {
        if !self.contains(pos) {
            return None;
        }
        let col = u16::try_from(pos.x / self.cell_size).ok()?;
        let row = u16::try_from(pos.y / self.cell_size).ok()?;
        Some((col, row))
    }

    /// True if `pos` is a cell corner inside `[0, width) x [0, height)`
    pub fn contains(&self, pos: Position) -> bool {
        (0..self.width()).contains(&pos.x)
            && (0..self.height()).contains(&pos.y)
            && pos.x % self.cell_size == 0
            && pos.y % self.cell_size == 0
    }

    /// Step one cell from `pos` in `direction`, re-entering at the opposite edge
    pub fn wrap(&self, pos: Position, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        self.cell(pos.x / self.cell_size + dx, pos.y / self.cell_size + dy)
    }
}
