use thiserror::Error;

/// Failures detected while building a [Maze](crate::Maze). Searching itself never fails;
/// an unreachable end is reported as [Step::Exhausted](crate::Step::Exhausted).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MazeError {
    #[error("{what} must be positive")]
    ZeroDimension { what: &'static str },
    #[error("a {rows}x{cols} grid has no room for the start (1, 0) and end (rows - 2, cols - 1)")]
    GridTooSmall { rows: usize, cols: usize },
    #[error("builder produced a {rows}x{cols} grid, expected {expected_rows}x{expected_cols}")]
    BuilderShape {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },
    #[error("cell at ({i}, {j}) reports position ({cell_i}, {cell_j})")]
    MisplacedCell {
        i: usize,
        j: usize,
        cell_i: usize,
        cell_j: usize,
    },
    #[error("builder guarantees a path but start {start:?} and end {end:?} are disconnected")]
    Disconnected {
        start: (usize, usize),
        end: (usize, usize),
    },
    #[error("wall probability {0} is outside [0, 1]")]
    InvalidWallProbability(f64),
}
