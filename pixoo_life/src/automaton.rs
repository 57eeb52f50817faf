// automaton.rs - Conway's Game of Life on a toroidal 64x64 board

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::grid::{Grid, TGrid, TRow, GRID_SIZE, wrap};
use crate::patterns::{self, Seed, Shape};

/// Computes one row of the next generation from the current board.
fn next_row(grid: &TGrid, y: usize) -> TRow {
    let mut row = [false; GRID_SIZE];
    for (x, cell) in row.iter_mut().enumerate() {
        let count = count_neighbors(grid, x as i32, y as i32);
        *cell = match (grid[y][x], count) {
            (true, 2) | (true, 3) => true,   // Survival
            (false, 3)            => true,   // Birth
            _                     => false,  // Death or stays dead
        };
    }
    row
}

fn count_neighbors(grid: &TGrid, x: i32, y: i32) -> u8 {
    let mut count = 0;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            if grid[wrap(y + dy)][wrap(x + dx)] {
                count += 1;
            }
        }
    }
    count
}

pub struct Automaton {
    grid: Grid,
    generation: u64,
    rng: SmallRng,
}

impl Automaton {
    pub fn new(rng: SmallRng) -> Self {
        Self { grid: Grid::new(), generation: 0, rng }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Advances one generation: every row of `next` is computed from
    /// `current`, then the buffers swap.
    pub fn step(&mut self) {
        for y in 0..GRID_SIZE {
            self.grid.next[y] = next_row(&self.grid.current, y);
        }
        self.grid.swap();
        self.generation += 1;
    }

    /// Clears the board and applies the named pattern. Unknown names leave
    /// the board empty.
    pub fn load_pattern(&mut self, name: &str) {
        self.clear();
        match patterns::find(name) {
            Some(pattern) => match pattern.seed {
                Seed::Cells { shape, anchors } => {
                    for &(x, y) in anchors {
                        self.stamp(shape, x, y);
                    }
                }
                Seed::Random { density } => self.random_seed(density),
            },
            None => debug!(pattern = name, "unknown pattern, board left empty"),
        }
        self.generation = 0;
    }

    /// Each cell becomes alive independently with probability `density`.
    pub fn random_seed(&mut self, density: f64) {
        for row in self.grid.current.iter_mut() {
            for cell in row.iter_mut() {
                *cell = self.rng.random::<f64>() < density;
            }
        }
        self.generation = 0;
    }

    /// Sets every cell of `shape` alive, offset by (x, y). Off-board cells are dropped.
    pub fn stamp(&mut self, shape: Shape, x: i32, y: i32) {
        for &(dx, dy) in shape {
            self.set_alive(x + dx, y + dy, true);
        }
    }

    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    pub fn set_alive(&mut self, x: i32, y: i32, alive: bool) {
        if in_bounds(x, y) {
            self.grid.current[y as usize][x as usize] = alive;
        }
    }

    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        in_bounds(x, y) && self.grid.current[y as usize][x as usize]
    }

    pub fn count_neighbors(&self, x: i32, y: i32) -> u8 {
        count_neighbors(&self.grid.current, x, y)
    }

    pub fn count_alive(&self) -> usize {
        self.grid.current.iter().flatten().filter(|&&c| c).count()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cells(&self) -> &TGrid {
        self.grid.cells()
    }
}

fn in_bounds(x: i32, y: i32) -> bool {
    (0..GRID_SIZE as i32).contains(&x) && (0..GRID_SIZE as i32).contains(&y)
}
