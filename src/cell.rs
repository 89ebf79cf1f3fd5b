use smallvec::SmallVec;

use crate::N_SMALLVEC_SIZE;

/// A single grid position. Identity is fixed at creation; the cost fields and `previous` are
/// owned by the search and read back by renderers.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub i: usize,
    pub j: usize,
    pub wall: bool,
    /// Cost of the best known route from the start, `+inf` while unvisited.
    pub g: f64,
    /// Estimated remaining cost to the end.
    pub h: f64,
    pub f: f64,
    /// Arena index of the predecessor on the best known route.
    pub previous: Option<usize>,
    /// Arena indices of the in-bounds orthogonal neighbours.
    pub neighbors: SmallVec<[usize; N_SMALLVEC_SIZE]>,
}

impl Cell {
    pub fn new(i: usize, j: usize) -> Cell {
        Cell::with_wall(i, j, false)
    }
    pub fn with_wall(i: usize, j: usize, wall: bool) -> Cell {
        Cell {
            i,
            j,
            wall,
            g: f64::INFINITY,
            h: 0.0,
            f: f64::INFINITY,
            previous: None,
            neighbors: SmallVec::new(),
        }
    }
    /// Forgets everything a previous search wrote into this cell.
    pub(crate) fn reset_search(&mut self) {
        self.g = f64::INFINITY;
        self.h = 0.0;
        self.f = f64::INFINITY;
        self.previous = None;
    }
    pub fn position(&self) -> (usize, usize) {
        (self.i, self.j)
    }
    /// True if `other` is one orthogonal step away.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.i.abs_diff(other.i) + self.j.abs_diff(other.j) == 1
    }
}

/// The named palette a renderer draws cells with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
    Blue,
    Yellow,
    GreenYellow,
    Grey,
    Red,
}

impl Color {
    pub const ALL: [Color; 7] = [
        Color::White,
        Color::Black,
        Color::Blue,
        Color::Yellow,
        Color::GreenYellow,
        Color::Grey,
        Color::Red,
    ];

    pub fn rgb(self) -> [u8; 3] {
        match self {
            Color::White => [240, 240, 240],
            Color::Black => [0, 0, 0],
            Color::Blue => [0, 255, 255],
            Color::Yellow => [255, 255, 0],
            Color::GreenYellow => [200, 255, 0],
            Color::Grey => [161, 161, 161],
            Color::Red => [255, 0, 0],
        }
    }
}

/// What a cell currently means to the search, as seen by a renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    Default,
    Wall,
    /// In the open set.
    Frontier,
    /// In the closed set.
    Visited,
    /// On the most recently reconstructed path.
    Path,
    Start,
    End,
}

impl CellState {
    pub fn color(self) -> Color {
        match self {
            CellState::Default => Color::White,
            CellState::Wall => Color::Black,
            CellState::Frontier => Color::GreenYellow,
            CellState::Visited => Color::Grey,
            CellState::Path => Color::Blue,
            CellState::Start => Color::Yellow,
            CellState::End => Color::Red,
        }
    }
}
