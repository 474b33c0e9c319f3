use crate::grid::{CellState, LifeGrid, Loc};
use crate::neighborhood::neighbors;

impl LifeGrid {
    /// Advances the grid by one generation. Every next state is computed
    /// from the pre-step generation; the coordinates that change are
    /// collected first and flipped only after the full scan, so cells later
    /// in scan order never see a partially-updated neighborhood.
    pub fn step(&mut self) {
        let mut changed: Vec<Loc> = Vec::new();
        for row in 0..self.height() {
            for col in 0..self.width() {
                let loc = Loc::new(row, col);
                if self.next_state(loc) != self[loc] {
                    changed.push(loc);
                }
            }
        }
        for loc in changed {
            self[loc] = self[loc].toggled();
        }
    }

    fn next_state(&self, loc: Loc) -> CellState {
        let live = self.num_live_neighbors(loc);
        match self[loc] {
            CellState::Alive if live == 2 || live == 3 => CellState::Alive,
            CellState::Alive => CellState::Dead,
            CellState::Dead if live == 3 => CellState::Alive,
            CellState::Dead => CellState::Dead,
        }
    }

    fn num_live_neighbors(&self, loc: Loc) -> u32 {
        let mut result = 0;
        for neighbor in neighbors(loc, self.height(), self.width()) {
            if self[neighbor].is_alive() {
                result += 1;
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::{CellState, LifeGrid, Loc};
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn grid_with_live(height: u32, width: u32, live: &[(u32, u32)]) -> LifeGrid {
        let mut grid = LifeGrid::new(height, width).unwrap();
        for &(row, col) in live {
            grid.set(Loc::new(row, col), CellState::Alive).unwrap();
        }
        grid
    }

    fn live_cells(grid: &LifeGrid) -> Vec<(u32, u32)> {
        let mut result = Vec::new();
        for row in 0..grid.height() {
            for col in 0..grid.width() {
                if grid[Loc::new(row, col)].is_alive() {
                    result.push((row, col));
                }
            }
        }
        result
    }

    /// Computes the whole next generation into a fresh grid. The stepper
    /// must agree with this on every input.
    fn buffered_step(grid: &LifeGrid) -> LifeGrid {
        let mut next = LifeGrid::new(grid.height(), grid.width()).unwrap();
        for row in 0..grid.height() {
            for col in 0..grid.width() {
                let loc = Loc::new(row, col);
                next.set(loc, grid.next_state(loc)).unwrap();
            }
        }
        next
    }

    /// Writes each next state back immediately during the scan, so later
    /// cells read already-updated neighbors. Used to show the stepper does
    /// not do this.
    fn naive_in_place_step(grid: &mut LifeGrid) {
        for row in 0..grid.height() {
            for col in 0..grid.width() {
                let loc = Loc::new(row, col);
                grid[loc] = grid.next_state(loc);
            }
        }
    }

    #[test]
    fn blinker_oscillates_with_period_2() {
        let horizontal = grid_with_live(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let mut grid = horizontal.clone();

        grid.step();
        assert_eq!(live_cells(&grid), vec![(1, 2), (2, 2), (3, 2)]);

        grid.step();
        assert_eq!(grid, horizontal);
    }

    #[test]
    fn block_is_a_still_life() {
        let block = grid_with_live(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        let mut grid = block.clone();
        for _ in 0..3 {
            grid.step();
            assert_eq!(grid, block);
        }
    }

    #[test]
    fn glider_advances_one_phase() {
        let mut grid = grid_with_live(6, 6, &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
        grid.step();
        assert_eq!(
            live_cells(&grid),
            vec![(1, 0), (1, 2), (2, 1), (2, 2), (3, 1)]
        );
    }

    #[test]
    fn empty_grid_stays_empty() {
        let mut grid = LifeGrid::new(3, 3).unwrap();
        grid.step();
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn lone_cell_dies() {
        let mut grid = grid_with_live(3, 3, &[(1, 1)]);
        grid.step();
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn step_matches_buffered_result_not_in_place_result() {
        let start = grid_with_live(5, 5, &[(2, 1), (2, 2), (2, 3)]);

        let mut stepped = start.clone();
        stepped.step();
        assert_eq!(stepped, buffered_step(&start));

        let mut corrupted = start.clone();
        naive_in_place_step(&mut corrupted);
        assert_ne!(stepped, corrupted);
    }

    #[test]
    fn step_matches_buffered_result_on_random_grids() {
        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut grid = LifeGrid::new(9, 7).unwrap();
            for row in 0..9 {
                for col in 0..7 {
                    if rng.random_bool(0.4) {
                        grid.set(Loc::new(row, col), CellState::Alive).unwrap();
                    }
                }
            }

            let expected = buffered_step(&grid);
            grid.step();
            assert_eq!(grid, expected, "divergence for seed {seed}");
        }
    }
}
