use crate::grid::LifeGrid;

pub const ALIVE_GLYPH: char = 'O';
pub const DEAD_GLYPH: char = '\u{00a0}';

const ROW_TERMINATOR: &str = "\r\n";

/// Renders a generation in the legacy text format: `O` for a live cell, a
/// non-breaking space for a dead one, CRLF after every row.
pub fn display_string(grid: &LifeGrid) -> String {
    let width = grid.width() as usize;
    let mut result = String::with_capacity(grid.num_cells() * 2 + grid.height() as usize * 2);
    for (index, cell) in grid.cells_iter().enumerate() {
        result.push(if cell.is_alive() {
            ALIVE_GLYPH
        } else {
            DEAD_GLYPH
        });
        if (index + 1) % width == 0 {
            result.push_str(ROW_TERMINATOR);
        }
    }
    result
}
