//! Step-wise A*. Each call to [Maze::step] expands at most one cell, after which control goes
//! back to the caller; all state that has to survive between calls lives in [Maze].
use itertools::Itertools;
use log::{debug, info};

use crate::{FxIndexSet, Maze};

/// Outcome of a single [Maze::step].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// One cell was expanded; call again.
    Continue,
    /// The end was selected from the open set.
    Found,
    /// The open set ran dry before the end was reached.
    Exhausted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchStatus {
    Searching,
    Found,
    Exhausted,
}

#[derive(Clone, Debug)]
pub(crate) struct SearchState {
    pub(crate) open_set: FxIndexSet<usize>,
    pub(crate) closed_set: FxIndexSet<usize>,
    pub(crate) current: Option<usize>,
    /// Current back to the start.
    pub(crate) path: Vec<usize>,
    pub(crate) status: SearchStatus,
    pub(crate) expansions: usize,
}

impl SearchState {
    pub(crate) fn new(start: usize) -> SearchState {
        let mut open_set = FxIndexSet::default();
        open_set.insert(start);
        SearchState {
            open_set,
            closed_set: FxIndexSet::default(),
            current: None,
            path: Vec::new(),
            status: SearchStatus::Searching,
            expansions: 0,
        }
    }
}

impl Maze {
    /// Throws away all search progress: cost fields and back-references are cleared and the
    /// open set holds only the start again.
    pub fn reset_search(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.reset_search();
        }
        let h = Maze::heuristics(&self.cells[self.start], &self.cells[self.end]);
        let start = &mut self.cells[self.start];
        start.g = 0.0;
        start.h = h;
        start.f = h;
        self.search = SearchState::new(self.start);
    }

    /// Position in the open set of the cell with the lowest `f`. Ties go to the earliest entry.
    fn best_open(&self) -> Option<usize> {
        self.search
            .open_set
            .iter()
            .position_min_by(|&&a, &&b| self.cells[a].f.total_cmp(&self.cells[b].f))
    }

    /// Performs one A* expansion.
    ///
    /// Returns [Step::Continue] after expanding a cell. Once the end is selected or the open set
    /// is empty the path is finalized and [Step::Found] or [Step::Exhausted] is returned; every
    /// later call returns that same result without touching any state.
    pub fn step(&mut self) -> Step {
        match self.search.status {
            SearchStatus::Found => {
                debug!("Search already finished, the end was found");
                return Step::Found;
            }
            SearchStatus::Exhausted => {
                debug!("Search already finished, the end is unreachable");
                return Step::Exhausted;
            }
            SearchStatus::Searching => {}
        }
        let Some(best) = self.best_open() else {
            return self.finish(SearchStatus::Exhausted);
        };
        let current = self.search.open_set[best];
        self.search.current = Some(current);
        if current == self.end {
            return self.finish(SearchStatus::Found);
        }

        // Keep the order of the remaining entries, it decides ties.
        self.search.open_set.shift_remove_index(best);
        self.search.closed_set.insert(current);
        self.search.expansions += 1;

        let current_g = self.cells[current].g;
        for neighbor in self.cells[current].neighbors.clone() {
            if self.search.closed_set.contains(&neighbor) || self.cells[neighbor].wall {
                continue;
            }
            let temp_g =
                current_g + Maze::heuristics(&self.cells[neighbor], &self.cells[current]);
            let new_path = if self.search.open_set.contains(&neighbor) {
                temp_g < self.cells[neighbor].g
            } else {
                self.search.open_set.insert(neighbor);
                true
            };
            if new_path {
                let h = Maze::heuristics(&self.cells[neighbor], &self.cells[self.end]);
                let cell = &mut self.cells[neighbor];
                cell.g = temp_g;
                cell.h = h;
                cell.f = temp_g + h;
                cell.previous = Some(current);
            }
        }

        self.update_path();
        Step::Continue
    }

    fn finish(&mut self, status: SearchStatus) -> Step {
        self.search.status = status;
        self.update_path();
        match status {
            SearchStatus::Found => {
                info!(
                    "Path found after {} expansions, {} cells long",
                    self.search.expansions,
                    self.search.path.len()
                );
                Step::Found
            }
            _ => {
                info!(
                    "No path to the end, gave up after {} expansions",
                    self.search.expansions
                );
                Step::Exhausted
            }
        }
    }

    /// Steps until the search finishes and returns how it ended.
    pub fn run(&mut self) -> Step {
        loop {
            match self.step() {
                Step::Continue => continue,
                done => return done,
            }
        }
    }

    /// Rebuilds the path by following back-references from the current cell to the start.
    /// The result runs from the current cell to the start.
    pub fn update_path(&mut self) {
        let cells = &self.cells;
        self.search.path = std::iter::successors(self.search.current, |&ix| cells[ix].previous)
            .collect();
    }

    /// The lines printed by [print_path](Self::print_path): `"<n>º (<row>, <col>)"`, numbered
    /// from 1 at the start. The head of the path (the current cell) is not listed.
    pub fn path_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.search
            .path
            .iter()
            .skip(1)
            .rev()
            .enumerate()
            .map(|(q, &ix)| {
                let cell = &self.cells[ix];
                format!("{}º ({}, {})", q + 1, cell.i, cell.j)
            })
    }

    pub fn print_path(&self) {
        for line in self.path_lines() {
            println!("{}", line);
        }
    }

    pub fn status(&self) -> SearchStatus {
        self.search.status
    }
    /// Number of cells expanded so far.
    pub fn expansions(&self) -> usize {
        self.search.expansions
    }
    pub fn current(&self) -> Option<&crate::Cell> {
        self.search.current.map(|ix| &self.cells[ix])
    }
    /// Arena indices of the last reconstructed path, from the current cell back to the start.
    pub fn path(&self) -> &[usize] {
        &self.search.path
    }
    /// Positions along the last reconstructed path, from the start to the current cell.
    pub fn path_positions(&self) -> Vec<(usize, usize)> {
        self.search
            .path
            .iter()
            .rev()
            .map(|&ix| self.cells[ix].position())
            .collect()
    }
    /// Cells waiting to be expanded, in the order they were discovered.
    pub fn open_set(&self) -> impl Iterator<Item = &crate::Cell> + '_ {
        self.search.open_set.iter().map(|&ix| &self.cells[ix])
    }
    /// Cells already expanded, in expansion order.
    pub fn closed_set(&self) -> impl Iterator<Item = &crate::Cell> + '_ {
        self.search.closed_set.iter().map(|&ix| &self.cells[ix])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CellState, MapLayout, RandomWalls, Size};

    fn open_maze(n: u32) -> Maze {
        Maze::new(Size::new(n, n, 1), &mut RandomWalls::open()).unwrap()
    }

    fn layout_maze(lines: &[&str]) -> Maze {
        let mut layout = MapLayout::new(lines);
        Maze::new(
            Size::new(layout.rows() as u32, layout.cols() as u32, 1),
            &mut layout,
        )
        .unwrap()
    }

    fn assert_valid_path(maze: &Maze) {
        let path = maze.path();
        assert_eq!(path.first(), Some(&maze.end_index()));
        assert_eq!(path.last(), Some(&maze.start_index()));
        for pair in path.windows(2) {
            let (a, b) = (&maze.cells()[pair[0]], &maze.cells()[pair[1]]);
            assert!(a.is_adjacent(b));
            assert!(!a.wall && !b.wall);
        }
    }

    #[test]
    fn fresh_search_state() {
        let maze = open_maze(5);
        assert_eq!(maze.status(), SearchStatus::Searching);
        assert!(maze.current().is_none());
        assert!(maze.path().is_empty());
        let open: Vec<_> = maze.open_set().map(|c| c.position()).collect();
        assert_eq!(open, vec![(1, 0)]);
        assert_eq!(maze.closed_set().count(), 0);
        assert_eq!(maze.start().g, 0.0);
    }

    /// An open 5x5 grid: the route from (1, 0) to (3, 4) takes six unit moves.
    #[test]
    fn solves_open_grid() {
        let mut maze = open_maze(5);
        assert_eq!(maze.run(), Step::Found);
        assert_eq!(maze.status(), SearchStatus::Found);
        assert_eq!(maze.path().len(), 7);
        assert_valid_path(&maze);
        assert_eq!(maze.end().g, 6.0);
    }

    #[test]
    fn start_equal_to_end() {
        let mut maze = Maze::new(Size::new(3, 1, 1), &mut RandomWalls::open()).unwrap();
        assert_eq!(maze.start_index(), maze.end_index());
        assert_eq!(maze.step(), Step::Found);
        assert_eq!(maze.expansions(), 0);
        assert_eq!(maze.path(), &[maze.start_index()]);
        assert_eq!(maze.path_lines().count(), 0);
    }

    #[test]
    fn ties_go_to_the_earliest_open_entry() {
        let mut maze = layout_maze(&["...", "S#E", "..."]);
        let mut continues = 0;
        while maze.step() == Step::Continue {
            continues += 1;
        }
        assert_eq!(continues, 7);
        assert_eq!(maze.status(), SearchStatus::Found);
        let visited: Vec<_> = maze.closed_set().map(|c| c.position()).collect();
        assert_eq!(
            visited,
            vec![(1, 0), (2, 0), (0, 0), (2, 1), (0, 1), (2, 2), (0, 2)]
        );
        assert_eq!(
            maze.path_positions(),
            vec![(1, 0), (2, 0), (2, 1), (2, 2), (1, 2)]
        );
    }

    #[test]
    fn isolated_end_exhausts() {
        let mut maze = layout_maze(&[".....", "S....", "....#", "...#E", "....#"]);
        assert!(!maze.solvable());
        let mut continues = 0;
        while maze.step() == Step::Continue {
            continues += 1;
        }
        assert_eq!(maze.status(), SearchStatus::Exhausted);
        assert_eq!(continues, 21);
        assert!(!maze.path().is_empty());
        assert!(!maze.path().contains(&maze.end_index()));
        assert_eq!(maze.path().last(), Some(&maze.start_index()));
        assert!(maze.end().previous.is_none());
    }

    #[test]
    fn terminal_state_is_sticky() {
        let mut maze = open_maze(7);
        assert_eq!(maze.run(), Step::Found);
        let path = maze.path().to_vec();
        let expansions = maze.expansions();
        for _ in 0..3 {
            assert_eq!(maze.step(), Step::Found);
        }
        assert_eq!(maze.path(), path.as_slice());
        assert_eq!(maze.expansions(), expansions);
    }

    #[test]
    fn update_path_is_idempotent() {
        let mut maze = open_maze(9);
        for _ in 0..10 {
            maze.step();
        }
        maze.update_path();
        let first = maze.path().to_vec();
        maze.update_path();
        assert_eq!(maze.path(), first.as_slice());
        let current = maze.current().map(|c| maze.index(c.i, c.j));
        assert_eq!(maze.path().first().copied(), current);
    }

    #[test]
    fn reset_allows_a_second_identical_search() {
        let mut maze = open_maze(11);
        maze.run();
        let first = maze.path().to_vec();
        maze.reset_search();
        assert_eq!(maze.status(), SearchStatus::Searching);
        assert!(maze.path().is_empty());
        assert!(maze.cells().iter().all(|c| c.previous.is_none()));
        assert_eq!(maze.run(), Step::Found);
        assert_eq!(maze.path(), first.as_slice());
    }

    #[test]
    fn path_lines_list_start_first() {
        let mut maze = open_maze(5);
        maze.run();
        let lines: Vec<String> = maze.path_lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "1º (1, 0)");
        assert!(lines[5].starts_with("6º ("));
    }

    #[test]
    fn cell_states_track_the_search() {
        let mut maze = open_maze(5);
        maze.step();
        maze.step();
        let visited = maze.closed_set().nth(1).unwrap();
        let visited_ix = maze.index(visited.i, visited.j);
        assert_eq!(maze.cell_state(maze.start_index()), Some(CellState::Start));
        assert_eq!(maze.cell_state(visited_ix), Some(CellState::Path));
        let frontier = maze.open_set().next().unwrap();
        let frontier_ix = maze.index(frontier.i, frontier.j);
        assert_eq!(maze.cell_state(frontier_ix), Some(CellState::Frontier));
        assert_eq!(maze.cell_state(maze.index(4, 4)), Some(CellState::Default));
        assert_eq!(maze.cell_state(maze.cells().len()), None);
    }
}
