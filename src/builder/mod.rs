use crate::{Cell, MazeError, DEFAULT_WALL_PROBABILITY};

pub mod layout;
pub mod random_walls;
pub mod spanning_tree;

pub use layout::MapLayout;
pub use random_walls::RandomWalls;
pub use spanning_tree::SpanningTree;

/// Produces the cells of a maze and decides which of them are walls. Adjacency is wired by
/// [Maze::new](crate::Maze::new) afterwards, so builders only need to fill in positions and
/// wall flags.
pub trait GridBuilder {
    /// Returns `rows` vectors of `cols` cells each, with cell `(i, j)` at `grid[i][j]`.
    fn build(&mut self, rows: usize, cols: usize) -> Vec<Vec<Cell>>;

    /// Builders that promise a route between start and end get it verified during
    /// construction.
    fn guarantees_path(&self) -> bool {
        false
    }
}

/// Converts a grid of wall flags into cells.
pub(crate) fn cells_from_walls(walls: Vec<Vec<bool>>) -> Vec<Vec<Cell>> {
    walls
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            row.into_iter()
                .enumerate()
                .map(|(j, wall)| Cell::with_wall(i, j, wall))
                .collect()
        })
        .collect()
}

/// Selects a builder by name, e.g. from a [MazeConfig](crate::MazeConfig).
#[derive(Clone, Debug, PartialEq, Default)]
pub enum BuilderKind {
    RandomWalls {
        wall_probability: f64,
    },
    #[default]
    SpanningTree,
    Layout(Vec<String>),
}

impl BuilderKind {
    pub fn random_walls() -> BuilderKind {
        BuilderKind::RandomWalls {
            wall_probability: DEFAULT_WALL_PROBABILITY,
        }
    }
    /// Creates the builder, seeding its generator when a seed is given.
    pub fn instantiate(&self, seed: Option<u64>) -> Result<Box<dyn GridBuilder>, MazeError> {
        let builder: Box<dyn GridBuilder> = match self {
            BuilderKind::RandomWalls { wall_probability } => Box::new(match seed {
                Some(seed) => RandomWalls::seeded(*wall_probability, seed)?,
                None => RandomWalls::new(*wall_probability)?,
            }),
            BuilderKind::SpanningTree => Box::new(match seed {
                Some(seed) => SpanningTree::seeded(seed),
                None => SpanningTree::new(),
            }),
            BuilderKind::Layout(lines) => Box::new(MapLayout::new(lines.iter())),
        };
        Ok(builder)
    }
}
