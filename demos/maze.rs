//! Random-maze pathfinding demo.
//!
//! Generates a 20x20 maze with roughly one cell in five blocked, picks a
//! random open start and goal, and runs A* with unit-cost 4-way movement
//! and a Manhattan estimate. Prints the maze with `#` blocked, `.` open,
//! `S` start, `G` goal and `*` for the path.
//!
//! Run: cargo run --bin maze
//! Set RUST_LOG=trace to see the engine's per-search summary.

use std::collections::HashSet;

use pathwise_search::{FnSpace, astar};
use rand::{Rng, RngExt};

const WIDTH: i32 = 20;
const HEIGHT: i32 = 20;

struct Maze {
    blocked: Vec<bool>,
}

impl Maze {
    fn random(rng: &mut impl Rng) -> Self {
        let blocked = (0..WIDTH * HEIGHT)
            .map(|_| rng.random_range(0..5) == 0)
            .collect();
        Self { blocked }
    }

    fn open(&self, (x, y): (i32, i32)) -> bool {
        x >= 0 && x < WIDTH && y >= 0 && y < HEIGHT && !self.blocked[(y * WIDTH + x) as usize]
    }

    /// Every open cell, in row order.
    fn open_cells(&self) -> Vec<(i32, i32)> {
        (0..HEIGHT)
            .flat_map(|y| (0..WIDTH).map(move |x| (x, y)))
            .filter(|&cell| self.open(cell))
            .collect()
    }
}

fn manhattan(a: (i32, i32), b: (i32, i32)) -> i32 {
    (a.0 - b.0).abs() + (a.1 - b.1).abs()
}

fn render(maze: &Maze, start: (i32, i32), goal: (i32, i32), path: &[(i32, i32)]) {
    let on_path: HashSet<(i32, i32)> = path.iter().copied().collect();
    for y in 0..HEIGHT {
        let mut line = String::with_capacity(WIDTH as usize);
        for x in 0..WIDTH {
            let cell = (x, y);
            line.push(if cell == start {
                'S'
            } else if cell == goal {
                'G'
            } else if on_path.contains(&cell) {
                '*'
            } else if maze.open(cell) {
                '.'
            } else {
                '#'
            });
        }
        println!("{line}");
    }
}

fn main() {
    env_logger::init();

    let mut rng = rand::rng();
    let maze = Maze::random(&mut rng);
    let open = maze.open_cells();
    if open.is_empty() {
        eprintln!("maze generation left no open cells");
        std::process::exit(1);
    }
    let start = open[rng.random_range(0..open.len())];
    let goal = open[rng.random_range(0..open.len())];

    let space = FnSpace::new(
        |&(x, y): &(i32, i32), buf: &mut Vec<((i32, i32), i32)>| {
            for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
                let next = (x + dx, y + dy);
                if maze.open(next) {
                    buf.push((next, 1));
                }
            }
        },
        |&cell: &(i32, i32)| cell == goal,
        |&cell: &(i32, i32)| manhattan(cell, goal),
    );

    match astar(&space, start) {
        Some(path) => {
            render(&maze, start, goal, path.nodes());
            println!("cost {} in {} steps", path.cost(), path.len() - 1);
        }
        None => {
            render(&maze, start, goal, &[]);
            println!("no path from {start:?} to {goal:?}");
        }
    }
}
