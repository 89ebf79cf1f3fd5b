use super::{cells_from_walls, GridBuilder};
use crate::Cell;

/// Characters that can be walked through; anything else is a wall.
const OPEN_TILES: [char; 5] = ['.', 'G', 'S', 'E', ' '];

/// A fixed maze read from text, one line per row. The requested dimensions are ignored:
/// the layout is returned as written and [Maze::new](crate::Maze::new) rejects it if its
/// shape does not match.
#[derive(Clone, Debug, PartialEq)]
pub struct MapLayout {
    walls: Vec<Vec<bool>>,
}

impl MapLayout {
    pub fn new<I, S>(lines: I) -> MapLayout
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let walls: Vec<Vec<bool>> = lines
            .into_iter()
            .map(|line| {
                line.as_ref()
                    .chars()
                    .map(|tile| !OPEN_TILES.contains(&tile))
                    .collect::<Vec<bool>>()
            })
            .collect();
        MapLayout { walls }
    }
    /// Parses a multi-line string. Blank lines are skipped and the indentation shared by the
    /// remaining lines is removed; any other space is an open tile.
    pub fn parse(map: &str) -> MapLayout {
        let lines: Vec<&str> = map
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect();
        let indent = lines
            .iter()
            .map(|line| line.len() - line.trim_start_matches(' ').len())
            .min()
            .unwrap_or(0);
        MapLayout::new(lines.iter().map(|line| &line[indent..]))
    }
    pub fn rows(&self) -> usize {
        self.walls.len()
    }
    pub fn cols(&self) -> usize {
        self.walls.first().map_or(0, |row| row.len())
    }
}

impl GridBuilder for MapLayout {
    fn build(&mut self, _rows: usize, _cols: usize) -> Vec<Vec<Cell>> {
        cells_from_walls(self.walls.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_walls_and_open_tiles() {
        let mut layout = MapLayout::parse(
            "
            #.#
            S.G
            ",
        );
        assert_eq!((layout.rows(), layout.cols()), (2, 3));
        let grid = layout.build(2, 3);
        assert!(grid[0][0].wall);
        assert!(!grid[0][1].wall);
        assert!(!grid[1][0].wall);
        assert!(!grid[1][2].wall);
    }

    #[test]
    fn spaces_are_open_tiles() {
        let grid = MapLayout::new(["S E"]).build(1, 3);
        assert!(!grid[0][1].wall);

        // Only the shared indentation goes; inner and deeper-indented spaces stay as tiles.
        let mut layout = MapLayout::parse(
            "
            # #
             S#
            ",
        );
        assert_eq!((layout.rows(), layout.cols()), (2, 3));
        let grid = layout.build(2, 3);
        assert!(grid[0][0].wall);
        assert!(!grid[0][1].wall);
        assert!(!grid[1][0].wall);
        assert!(!grid[1][1].wall);
        assert!(grid[1][2].wall);
    }
}
