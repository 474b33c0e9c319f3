use std::ops::{Index, IndexMut};

use crate::error::GridError;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    pub(crate) fn toggled(self) -> Self {
        match self {
            CellState::Dead => CellState::Alive,
            CellState::Alive => CellState::Dead,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Loc {
    pub row: u32,
    pub col: u32,
}

impl Loc {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    pub fn grid_index(&self, height: u32, width: u32) -> Option<usize> {
        if self.row < height && self.col < width {
            Some(self.row as usize * width as usize + self.col as usize)
        } else {
            None
        }
    }
}

/// A fixed-size generation of cells, row-major.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LifeGrid {
    cells: Vec<CellState>,
    height: u32,
    width: u32,
}

impl LifeGrid {
    pub fn new(height: u32, width: u32) -> Result<Self, GridError> {
        if height == 0 || width == 0 {
            return Err(GridError::InvalidDimensions { height, width });
        }
        Ok(Self {
            cells: vec![CellState::Dead; height as usize * width as usize],
            height,
            width,
        })
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.height, self.width)
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, loc: Loc) -> Result<CellState, GridError> {
        self.cell(loc).copied().ok_or(GridError::OutOfBounds {
            row: loc.row,
            col: loc.col,
        })
    }

    pub fn set(&mut self, loc: Loc, state: CellState) -> Result<(), GridError> {
        match self.cell_mut(loc) {
            Some(cell) => {
                *cell = state;
                Ok(())
            }
            None => Err(GridError::OutOfBounds {
                row: loc.row,
                col: loc.col,
            }),
        }
    }

    pub fn cells_iter(&self) -> impl DoubleEndedIterator<Item = &CellState> + Clone {
        self.cells.iter()
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    fn cell(&self, loc: Loc) -> Option<&CellState> {
        loc.grid_index(self.height, self.width)
            .map(|index| &self.cells[index])
    }

    fn cell_mut(&mut self, loc: Loc) -> Option<&mut CellState> {
        loc.grid_index(self.height, self.width)
            .map(|index| &mut self.cells[index])
    }
}

impl Index<Loc> for LifeGrid {
    type Output = CellState;

    fn index(&self, loc: Loc) -> &Self::Output {
        self.cell(loc)
            .unwrap_or_else(|| panic!("Index indices {}, {} out of bounds", loc.row, loc.col))
    }
}

impl IndexMut<Loc> for LifeGrid {
    fn index_mut(&mut self, loc: Loc) -> &mut Self::Output {
        self.cell_mut(loc)
            .unwrap_or_else(|| panic!("Index_mut indices {}, {} out of bounds", loc.row, loc.col))
    }
}
