#![deny(clippy::all)]
#![forbid(unsafe_code)]

use life_grid::{GridError, LifeGrid, display_string, random_state};
use log::{debug, info};
use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

const TICK_MILLIS: u64 = 100;
const GRID_HEIGHT: u32 = 32;
const GRID_WIDTH: u32 = 72;
const LIFE_DENSITY: f64 = 0.5;

fn main() -> Result<(), GridError> {
    env_logger::init();

    let mut grid = random_state(GRID_HEIGHT, GRID_WIDTH, LIFE_DENSITY)?;
    info!(
        "seeded {GRID_HEIGHT}x{GRID_WIDTH} grid, {} cells alive",
        grid.live_count()
    );

    let mut generation: u64 = 0;
    let mut next_update = Instant::now();
    loop {
        draw(&grid);
        grid.step();
        generation += 1;
        debug!("generation {generation}: {} cells alive", grid.live_count());

        next_update += Duration::from_millis(TICK_MILLIS);
        while next_update < Instant::now() {
            next_update += Duration::from_millis(TICK_MILLIS);
        }
        thread::sleep(next_update.saturating_duration_since(Instant::now()));
    }
}

fn draw(grid: &LifeGrid) {
    let mut stdout = io::stdout().lock();
    write!(stdout, "\x1b[2J\x1b[H{}", display_string(grid)).unwrap();
    stdout.flush().unwrap();
}
