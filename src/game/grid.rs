use super::state::Position;

/// Pixel playfield divided into square cells of `cell_size`.
///
/// Every position in the game is a pixel coordinate; the grid only knows how
/// those map onto cells. The height does not have to be a multiple of the cell
/// size: a trailing partial row is inside the playfield but never used for
/// apple placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    /// Whole columns available for apple placement
    pub fn placement_cols(&self) -> i32 {
        self.width / self.cell_size
    }

    /// Whole rows available for apple placement
    pub fn placement_rows(&self) -> i32 {
        self.height / self.cell_size
    }

    /// Columns a renderer must draw, counting a partial trailing column
    pub fn visible_cols(&self) -> usize {
        ceil_div(self.width, self.cell_size)
    }

    /// Rows a renderer must draw, counting a partial trailing row
    pub fn visible_rows(&self) -> usize {
        ceil_div(self.height, self.cell_size)
    }

    /// Pixel bounds check used for boundary collisions
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    pub fn is_aligned(&self, pos: Position) -> bool {
        pos.x % self.cell_size == 0 && pos.y % self.cell_size == 0
    }

    /// (column, row) of the cell holding `pos`, or None outside the playfield
    pub fn cell_of(&self, pos: Position) -> Option<(usize, usize)> {
        if !self.contains(pos) {
            return None;
        }
        Some((
            (pos.x / self.cell_size) as usize,
            (pos.y / self.cell_size) as usize,
        ))
    }
}

fn ceil_div(value: i32, divisor: i32) -> usize {
    ((value + divisor - 1) / divisor).max(0) as usize
}
