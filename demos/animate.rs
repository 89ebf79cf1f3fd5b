use maze_pathfinding::{BuilderKind, MazeConfig, Size, Step};
use std::{thread, time::Duration};

// Steps the search one expansion at a time and redraws the maze after each one, the way a
// renderer would drive it. Legend: # wall, o frontier, x visited, * current path.
fn main() {
    let config = MazeConfig {
        size: Size::new(21, 41, 1),
        builder: BuilderKind::SpanningTree,
        seed: None,
    };
    let mut maze = match config.build() {
        Ok(maze) => maze,
        Err(err) => {
            eprintln!("Could not build maze: {}", err);
            return;
        }
    };
    let outcome = loop {
        let step = maze.step();
        print!("\x1B[2J\x1B[H{}", maze);
        println!("expansions: {}", maze.expansions());
        if step != Step::Continue {
            break step;
        }
        thread::sleep(Duration::from_millis(30));
    };
    match outcome {
        Step::Found => println!("Done, there is a way!"),
        _ => println!("There is no way to the end"),
    }
}
