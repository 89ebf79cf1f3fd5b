//! Randomized [Prim's algorithm](https://en.wikipedia.org/wiki/Maze_generation_algorithm#Iterative_randomized_Prim's_algorithm_(without_stack,_without_sets))
//! over the lattice of cells with an odd row and an odd column. Every other cell starts as a
//! wall and is only opened to join two lattice cells, so the result is a perfect maze: exactly
//! one route between any two open cells.
use log::debug;
use rand::prelude::*;
use smallvec::SmallVec;

use super::{cells_from_walls, GridBuilder};
use crate::{Cell, FxIndexSet};

#[derive(Clone, Debug)]
pub struct SpanningTree {
    rng: StdRng,
}

impl SpanningTree {
    pub fn new() -> SpanningTree {
        SpanningTree {
            rng: StdRng::from_entropy(),
        }
    }
    pub fn seeded(seed: u64) -> SpanningTree {
        SpanningTree {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SpanningTree {
    fn default() -> SpanningTree {
        SpanningTree::new()
    }
}

/// Lattice cells two steps away from `(i, j)`.
fn lattice_neighbors(
    i: usize,
    j: usize,
    rows: usize,
    cols: usize,
) -> SmallVec<[(usize, usize); 4]> {
    let mut neighbors = SmallVec::new();
    if i >= 3 {
        neighbors.push((i - 2, j));
    }
    if i + 3 < rows {
        neighbors.push((i + 2, j));
    }
    if j >= 3 {
        neighbors.push((i, j - 2));
    }
    if j + 3 < cols {
        neighbors.push((i, j + 2));
    }
    neighbors
}

impl GridBuilder for SpanningTree {
    fn build(&mut self, rows: usize, cols: usize) -> Vec<Vec<Cell>> {
        let mut walls = vec![vec![true; cols]; rows];
        if rows < 3 || cols < 3 {
            debug!("{}x{} grid has no lattice cells to carve", rows, cols);
            return cells_from_walls(walls);
        }
        walls[1][1] = false;
        let mut frontier: FxIndexSet<(usize, usize)> = FxIndexSet::default();
        frontier.extend(lattice_neighbors(1, 1, rows, cols));
        while !frontier.is_empty() {
            let pick = self.rng.gen_range(0..frontier.len());
            let Some((i, j)) = frontier.swap_remove_index(pick) else {
                break;
            };
            let (carved, unvisited): (SmallVec<[_; 4]>, SmallVec<[_; 4]>) =
                lattice_neighbors(i, j, rows, cols)
                    .into_iter()
                    .partition(|&(a, b)| !walls[a][b]);
            // Frontier cells were added by a carved neighbour, so `carved` is never empty.
            if let Some(&(a, b)) = carved.choose(&mut self.rng) {
                walls[(i + a) / 2][(j + b) / 2] = false;
                walls[i][j] = false;
            }
            frontier.extend(unvisited);
        }
        cells_from_walls(walls)
    }

    fn guarantees_path(&self) -> bool {
        true
    }
}
