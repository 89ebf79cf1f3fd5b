use core::fmt;
use log::{info, warn};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::search::SearchState;
use crate::{Cell, CellState, GridBuilder, MazeError, Size};

/// A grid maze together with the state of the A* search running on it.
///
/// The cells are stored row-major in a flat arena; neighbours and back-references are arena
/// indices (see [Maze::index]). The start is fixed at (1, 0) and the end at
/// (rows - 2, cols - 1), and both are always open regardless of what the builder produced.
#[derive(Clone, Debug)]
pub struct Maze {
    size: Size,
    rows: usize,
    cols: usize,
    pub(crate) cells: Vec<Cell>,
    pub(crate) start: usize,
    pub(crate) end: usize,
    components: UnionFind<usize>,
    pub(crate) search: SearchState,
}

impl Maze {
    /// Builds the grid with `builder`, wires up the neighbours and prepares a fresh search
    /// with only the start in the open set.
    pub fn new<B>(size: Size, builder: &mut B) -> Result<Maze, MazeError>
    where
        B: GridBuilder + ?Sized,
    {
        let (rows, cols) = size.grid_dimensions()?;
        let mut cells = Maze::flatten(builder.build(rows, cols), rows, cols)?;
        Maze::wire_neighbors(&mut cells, rows, cols);

        let start = cols;
        let end = (rows - 2) * cols + cols - 1;
        cells[start].wall = false;
        cells[end].wall = false;

        let mut maze = Maze {
            size,
            rows,
            cols,
            cells,
            start,
            end,
            components: UnionFind::new(0),
            search: SearchState::new(start),
        };
        maze.generate_components();
        if builder.guarantees_path() && !maze.reachable(start, end) {
            warn!("Builder promised a path but the end is cut off from the start");
            return Err(MazeError::Disconnected {
                start: maze.cells[start].position(),
                end: maze.cells[end].position(),
            });
        }
        maze.reset_search();
        info!(
            "Built {}x{} maze with {} walls",
            rows,
            cols,
            maze.cells.iter().filter(|c| c.wall).count()
        );
        Ok(maze)
    }

    /// Checks the builder's output against the requested shape and lays it out row-major.
    fn flatten(grid: Vec<Vec<Cell>>, rows: usize, cols: usize) -> Result<Vec<Cell>, MazeError> {
        let shape_error = |found_rows, found_cols| MazeError::BuilderShape {
            expected_rows: rows,
            expected_cols: cols,
            rows: found_rows,
            cols: found_cols,
        };
        if grid.len() != rows {
            return Err(shape_error(grid.len(), grid.first().map_or(0, Vec::len)));
        }
        if let Some(row) = grid.iter().find(|row| row.len() != cols) {
            return Err(shape_error(rows, row.len()));
        }
        let mut cells = Vec::with_capacity(rows * cols);
        for (i, row) in grid.into_iter().enumerate() {
            for (j, cell) in row.into_iter().enumerate() {
                if cell.position() != (i, j) {
                    return Err(MazeError::MisplacedCell {
                        i,
                        j,
                        cell_i: cell.i,
                        cell_j: cell.j,
                    });
                }
                cells.push(cell);
            }
        }
        Ok(cells)
    }

    /// Gives every cell its in-bounds orthogonal neighbours, in the order
    /// down, up, right, left.
    fn wire_neighbors(cells: &mut [Cell], rows: usize, cols: usize) {
        for i in 0..rows {
            for j in 0..cols {
                let mut neighbors = SmallVec::new();
                if i + 1 < rows {
                    neighbors.push((i + 1) * cols + j);
                }
                if i > 0 {
                    neighbors.push((i - 1) * cols + j);
                }
                if j + 1 < cols {
                    neighbors.push(i * cols + j + 1);
                }
                if j > 0 {
                    neighbors.push(i * cols + j - 1);
                }
                cells[i * cols + j].neighbors = neighbors;
            }
        }
    }

    /// Links every open cell to its open neighbours below and to the right, so that two cells
    /// share a component exactly when a route exists between them.
    fn generate_components(&mut self) {
        self.components = UnionFind::new(self.cells.len());
        for ix in 0..self.cells.len() {
            if self.cells[ix].wall {
                continue;
            }
            let (i, j) = self.cells[ix].position();
            for (ni, nj) in [(i + 1, j), (i, j + 1)] {
                if ni < self.rows && nj < self.cols && !self.cells[ni * self.cols + nj].wall {
                    self.components.union(ix, ni * self.cols + nj);
                }
            }
        }
    }

    /// Checks whether open cells `a` and `b` (arena indices) are connected.
    pub fn reachable(&self, a: usize, b: usize) -> bool {
        a < self.cells.len()
            && b < self.cells.len()
            && !self.cells[a].wall
            && !self.cells[b].wall
            && self.components.equiv(a, b)
    }

    /// Whether any route from the start to the end exists at all.
    pub fn solvable(&self) -> bool {
        self.reachable(self.start, self.end)
    }

    /// Euclidean distance between two cells. Serves both as the cost of a single move and as
    /// the estimate of the remaining distance.
    pub fn heuristics(a: &Cell, b: &Cell) -> f64 {
        (a.i as f64 - b.i as f64).hypot(a.j as f64 - b.j as f64)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn size(&self) -> Size {
        self.size
    }
    pub fn index(&self, i: usize, j: usize) -> usize {
        i * self.cols + j
    }
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
    pub fn cell(&self, i: usize, j: usize) -> Option<&Cell> {
        if i < self.rows && j < self.cols {
            self.cells.get(self.index(i, j))
        } else {
            None
        }
    }
    pub fn start(&self) -> &Cell {
        &self.cells[self.start]
    }
    pub fn end(&self) -> &Cell {
        &self.cells[self.end]
    }
    pub fn start_index(&self) -> usize {
        self.start
    }
    pub fn end_index(&self) -> usize {
        self.end
    }

    /// How a renderer should show the cell at arena index `ix`, `None` if `ix` is out of range.
    pub fn cell_state(&self, ix: usize) -> Option<CellState> {
        (ix < self.cells.len()).then(|| self.state_of(ix))
    }

    fn state_of(&self, ix: usize) -> CellState {
        if ix == self.start {
            CellState::Start
        } else if ix == self.end {
            CellState::End
        } else if self.search.path.contains(&ix) {
            CellState::Path
        } else if self.cells[ix].wall {
            CellState::Wall
        } else if self.search.closed_set.contains(&ix) {
            CellState::Visited
        } else if self.search.open_set.contains(&ix) {
            CellState::Frontier
        } else {
            CellState::Default
        }
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for i in 0..self.rows {
            let line = (0..self.cols)
                .map(|j| match self.state_of(self.index(i, j)) {
                    CellState::Start => 'S',
                    CellState::End => 'E',
                    CellState::Path => '*',
                    CellState::Wall => '#',
                    CellState::Visited => 'x',
                    CellState::Frontier => 'o',
                    CellState::Default => '.',
                })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
