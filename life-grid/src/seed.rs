use crate::error::GridError;
use crate::grid::{CellState, LifeGrid, Loc};
use crate::rng::{Clock, Random};

/// Builds a starting generation with roughly `height * width * density`
/// live cells, seeded from the wall clock.
pub fn random_state(height: u32, width: u32, density: f64) -> Result<LifeGrid, GridError> {
    random_state_with(height, width, density, &Random::new())
}

/// Same as [`random_state`] with a caller-supplied generator. Draws one raw
/// index per target cell, seed offset equal to the 1-based draw number.
/// Duplicate draws collapse onto one cell, so the live count may fall short
/// of the target.
pub fn random_state_with<C: Clock>(
    height: u32,
    width: u32,
    density: f64,
    rand: &Random<C>,
) -> Result<LifeGrid, GridError> {
    let mut grid = LifeGrid::new(height, width)?;
    let total_cells = i64::from(height) * i64::from(width);
    let target_live = (total_cells as f64 * density).floor() as i64;

    for draw in 1..=target_live {
        let raw = rand.next_in_range(draw, 0, total_cells - 1)?;
        let row = (raw / i64::from(width)) as u32;
        let col = (raw - i64::from(row) * i64::from(width)) as u32;
        grid.set(Loc::new(row, col), CellState::Alive)?;
    }
    Ok(grid)
}
