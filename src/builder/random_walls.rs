use rand::prelude::*;

use super::{cells_from_walls, GridBuilder};
use crate::{Cell, MazeError, DEFAULT_WALL_PROBABILITY};

/// Fills the grid with independent random walls. No route between start and end is promised.
#[derive(Clone, Debug)]
pub struct RandomWalls {
    wall_probability: f64,
    rng: StdRng,
}

impl RandomWalls {
    pub fn new(wall_probability: f64) -> Result<RandomWalls, MazeError> {
        RandomWalls::with_rng(wall_probability, StdRng::from_entropy())
    }
    pub fn seeded(wall_probability: f64, seed: u64) -> Result<RandomWalls, MazeError> {
        RandomWalls::with_rng(wall_probability, StdRng::seed_from_u64(seed))
    }
    /// A builder that never places walls.
    pub fn open() -> RandomWalls {
        RandomWalls {
            wall_probability: 0.0,
            rng: StdRng::seed_from_u64(0),
        }
    }
    pub fn wall_probability(&self) -> f64 {
        self.wall_probability
    }
    fn with_rng(wall_probability: f64, rng: StdRng) -> Result<RandomWalls, MazeError> {
        if !(0.0..=1.0).contains(&wall_probability) {
            return Err(MazeError::InvalidWallProbability(wall_probability));
        }
        Ok(RandomWalls {
            wall_probability,
            rng,
        })
    }
}

impl Default for RandomWalls {
    fn default() -> RandomWalls {
        RandomWalls {
            wall_probability: DEFAULT_WALL_PROBABILITY,
            rng: StdRng::from_entropy(),
        }
    }
}

impl GridBuilder for RandomWalls {
    fn build(&mut self, rows: usize, cols: usize) -> Vec<Vec<Cell>> {
        let walls: Vec<Vec<bool>> = (0..rows)
            .map(|_| {
                (0..cols)
                    .map(|_| self.rng.gen_bool(self.wall_probability))
                    .collect::<Vec<bool>>()
            })
            .collect();
        cells_from_walls(walls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_requested_shape() {
        let mut builder = RandomWalls::seeded(0.5, 7).unwrap();
        let grid = builder.build(5, 9);
        assert_eq!(grid.len(), 5);
        assert!(grid.iter().all(|row| row.len() == 9));
    }

    #[test]
    fn extreme_probabilities() {
        let open = RandomWalls::open().build(3, 3);
        assert!(open.iter().flatten().all(|c| !c.wall));
        let closed = RandomWalls::seeded(1.0, 0).unwrap().build(3, 3);
        assert!(closed.iter().flatten().all(|c| c.wall));
    }

    #[test]
    fn same_seed_same_walls() {
        let a = RandomWalls::seeded(0.4, 42).unwrap().build(7, 7);
        let b = RandomWalls::seeded(0.4, 42).unwrap().build(7, 7);
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_out_of_range_probability() {
        assert!(RandomWalls::seeded(-0.1, 0).is_err());
        assert!(RandomWalls::new(f64::NAN).is_err());
    }

    #[test]
    fn probability_only_set_through_validation() {
        let builder = RandomWalls::seeded(0.25, 3).unwrap();
        assert_eq!(builder.wall_probability(), 0.25);
        assert_eq!(RandomWalls::open().wall_probability(), 0.0);
        assert_eq!(
            RandomWalls::seeded(2.0, 3).unwrap_err(),
            MazeError::InvalidWallProbability(2.0)
        );
    }
}
