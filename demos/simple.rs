use maze_pathfinding::{MapLayout, Maze, Size, Step};

// In this example a path is found through a fixed 7x7 maze
// #######
// S.#...#
// #.#.#.#
// #...#.#
// #####.#
// #.....E
// #######
// where
// - # marks a wall
// - S marks the start
// - E marks the end

fn main() {
    let mut layout = MapLayout::parse(
        "
        #######
        S.#...#
        #.#.#.#
        #...#.#
        #####.#
        #.....E
        #######
        ",
    );
    let mut maze = match Maze::new(Size::new(7, 7, 1), &mut layout) {
        Ok(maze) => maze,
        Err(err) => {
            eprintln!("Could not build maze: {}", err);
            return;
        }
    };
    match maze.run() {
        Step::Found => {
            println!("A path has been found:");
            maze.print_path();
            println!("{}", maze);
        }
        _ => println!("There is no way to the end"),
    }
}
