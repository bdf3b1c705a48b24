use crate::{Cell, GridInt};

/// The playing field, measured in grid cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: GridInt,
    height: GridInt,
}

impl Board {
    pub const fn new(width: GridInt, height: GridInt) -> Self {
        Board { width, height }
    }

    /// Number of whole tiles that fit on a screen of the given pixel size.
    /// Panics on a non-positive tile size, which fails the build when used in a const.
    pub const fn from_screen(screen_width: GridInt, screen_height: GridInt, tile_size: GridInt) -> Self {
        assert!(tile_size > 0, "tile size must be positive");
        Board::new(screen_width / tile_size, screen_height / tile_size)
    }

    pub fn width(&self) -> GridInt {
        self.width
    }

    pub fn height(&self) -> GridInt {
        self.height
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.0) && (0..self.height).contains(&cell.1)
    }

    pub fn cell_count(&self) -> usize {
        self.width.max(0) as usize * self.height.max(0) as usize
    }

    /// All cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }
}
