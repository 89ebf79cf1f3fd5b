//! # maze_pathfinding
//!
//! A grid maze with an incremental [A*](https://en.wikipedia.org/wiki/A*_search_algorithm)
//! search that advances one expansion per [Maze::step] call, so a driver can animate the
//! frontier as it grows. The underlying grid is produced by a pluggable [GridBuilder]:
//! random walls, a randomized Prim spanning tree, or a fixed text layout.
//!
//! Cells live in a flat arena and refer to each other by index, both for adjacency and for
//! the back-references the path is reconstructed from.
//!
//! ```
//! use maze_pathfinding::{Maze, RandomWalls, Size, Step};
//!
//! let mut maze = Maze::new(Size::new(5, 5, 1), &mut RandomWalls::open()).unwrap();
//! while maze.step() == Step::Continue {}
//! assert_eq!(maze.path().len(), 7);
//! ```
pub mod builder;
pub mod cell;
pub mod config;
pub mod error;
pub mod maze;
pub mod search;

pub use builder::{BuilderKind, GridBuilder, MapLayout, RandomWalls, SpanningTree};
pub use cell::{Cell, CellState, Color};
pub use config::{MazeConfig, Size};
pub use error::MazeError;
pub use maze::Maze;
pub use search::{SearchStatus, Step};

use fxhash::FxBuildHasher;
use indexmap::IndexSet;

/// Insertion-ordered set used for the frontier and visited sets.
pub(crate) type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// Orthogonal neighbours only, so a cell never has more than four.
pub const N_SMALLVEC_SIZE: usize = 4;

/// Probability that [RandomWalls] turns a cell into a wall when none is given.
pub const DEFAULT_WALL_PROBABILITY: f64 = 0.3;
