// grid.rs - Grid types for the 64x64 toroidal board

// Compile-time grid size configuration
pub const GRID_SIZE: usize = 64;                      // Device panel is 64x64, nothing else is accepted
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;  // 4096 cells

pub type TRow = [bool; GRID_SIZE];
pub type TGrid = [TRow; GRID_SIZE];

/// Per-cell age counters, indexed `[y][x]` like the grid itself.
pub type AgeGrid = [[u32; GRID_SIZE]; GRID_SIZE];

pub const EMPTY_GRID: TGrid = [[false; GRID_SIZE]; GRID_SIZE];
pub const ZERO_AGES: AgeGrid = [[0; GRID_SIZE]; GRID_SIZE];

/// Double-buffered board. `current` is authoritative; `next` is scratch
/// space that only `Automaton::step` writes before the two are swapped.
#[derive(Clone)]
pub struct Grid {
    pub(crate) current: TGrid,
    pub(crate) next: TGrid,
}

impl Grid {
    pub fn new() -> Self {
        Self { current: EMPTY_GRID, next: EMPTY_GRID }
    }

    pub fn cells(&self) -> &TGrid {
        &self.current
    }

    pub fn clear(&mut self) {
        self.current = EMPTY_GRID;
    }

    pub(crate) fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

/// Wraps a possibly negative coordinate onto the torus.
pub fn wrap(v: i32) -> usize {
    v.rem_euclid(GRID_SIZE as i32) as usize
}

/// Advances every age counter: alive cells grow one older, dead cells reset.
pub fn update_ages(ages: &mut AgeGrid, cells: &TGrid) {
    for (age_row, cell_row) in ages.iter_mut().zip(cells.iter()) {
        for (age, &alive) in age_row.iter_mut().zip(cell_row.iter()) {
            *age = if alive { age.saturating_add(1) } else { 0 };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_maps_edges_onto_the_torus() {
        assert_eq!(wrap(-1), 63);
        assert_eq!(wrap(64), 0);
        assert_eq!(wrap(10), 10);
    }

    #[test]
    fn ages_grow_for_alive_cells_and_reset_for_dead_ones() {
        let mut ages = ZERO_AGES;
        let mut cells = EMPTY_GRID;
        cells[3][4] = true;
        update_ages(&mut ages, &cells);
        update_ages(&mut ages, &cells);
        assert_eq!(ages[3][4], 2);

        cells[3][4] = false;
        update_ages(&mut ages, &cells);
        assert_eq!(ages[3][4], 0);
        assert!(ages.iter().flatten().all(|&a| a == 0));
    }
}
