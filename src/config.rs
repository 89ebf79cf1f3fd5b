use crate::builder::BuilderKind;
use crate::{Maze, MazeError};

/// Canvas dimensions and the size of a single cell on it. The grid gets
/// `width / w` rows and `height / h` columns, each forced down to an odd number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
    pub w: u32,
    pub h: u32,
}

impl Size {
    /// Square cells of side `cell_width`.
    pub fn new(canvas_width: u32, canvas_height: u32, cell_width: u32) -> Size {
        Size {
            width: canvas_width,
            height: canvas_height,
            w: cell_width,
            h: cell_width,
        }
    }
    pub fn with_cell_height(mut self, cell_height: u32) -> Size {
        self.h = cell_height;
        self
    }
    /// Rows and columns of the grid, both odd. Fails if any dimension is zero or if the grid
    /// would be too small to hold the start at (1, 0) and the end at (rows - 2, cols - 1).
    pub fn grid_dimensions(&self) -> Result<(usize, usize), MazeError> {
        for (what, value) in [
            ("canvas width", self.width),
            ("canvas height", self.height),
            ("cell width", self.w),
            ("cell height", self.h),
        ] {
            if value == 0 {
                return Err(MazeError::ZeroDimension { what });
            }
        }
        let rows = force_odd((self.width / self.w) as usize);
        let cols = force_odd((self.height / self.h) as usize);
        if rows < 3 || cols < 1 {
            return Err(MazeError::GridTooSmall { rows, cols });
        }
        Ok((rows, cols))
    }
}

impl Default for Size {
    fn default() -> Size {
        Size::new(DEFAULT_CANVAS, DEFAULT_CANVAS, DEFAULT_CELL)
    }
}

pub const DEFAULT_CANVAS: u32 = 400;
pub const DEFAULT_CELL: u32 = 20;

fn force_odd(n: usize) -> usize {
    if n % 2 == 0 {
        n.saturating_sub(1)
    } else {
        n
    }
}

/// Everything needed to construct a [Maze] without wiring a builder by hand.
/// A `seed` of `None` draws the builder's randomness from entropy.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct MazeConfig {
    pub size: Size,
    pub builder: BuilderKind,
    pub seed: Option<u64>,
}

impl MazeConfig {
    pub fn build(&self) -> Result<Maze, MazeError> {
        let mut builder = self.builder.instantiate(self.seed)?;
        Maze::new(self.size, builder.as_mut())
    }
}
