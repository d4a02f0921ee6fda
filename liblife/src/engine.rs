use itertools::Itertools;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use super::{
    board::{CellState, Grid},
    pos::Cell,
    rule,
};

/// Counts live cells among the up to 8 neighbors of `pos`. The board does not
/// wrap, so border cells have fewer neighbors.
pub fn neighbor_count<P>(grid: &Grid, pos: P) -> usize
where
    P: Into<Cell>,
{
    let center = pos.into();
    debug_assert!(center.row < grid.height() && center.col < grid.width());

    let rows = center.row.saturating_sub(1)..(center.row + 2).min(grid.height());
    let cols = center.col.saturating_sub(1)..(center.col + 2).min(grid.width());

    rows.cartesian_product(cols)
        .map(Cell::from)
        .filter(|&neighbor| neighbor != center)
        .filter_map(|neighbor| grid.cell(neighbor))
        .map(|cell| cell.value() as usize)
        .sum()
}

/// Computes the next generation. Every cell is evaluated against `current`
/// only; the result is a new grid with the same dimensions.
pub fn step(current: &Grid) -> Grid {
    let next_cells = current
        .enumerate_cells()
        .map(|(pos, &cell)| next_cell(current, pos, cell))
        .collect();

    finish(current, next_cells)
}

/// [`step`] with the per-cell work spread over the rayon thread pool.
pub fn step_parallel(current: &Grid) -> Grid {
    let width = current.width();
    let cells = current.cells();

    let next_cells = (0..cells.len())
        .into_par_iter()
        .map(|index| {
            let pos = Cell::new(index / width, index % width);
            next_cell(current, pos, cells[index])
        })
        .collect();

    finish(current, next_cells)
}

fn next_cell(current: &Grid, pos: Cell, cell: CellState) -> CellState {
    rule::next_state(cell, neighbor_count(current, pos))
}

fn finish(current: &Grid, next_cells: Vec<CellState>) -> Grid {
    let next = Grid::from_raw(current.height(), current.width(), next_cells);

    log::trace!("Stepped, population {}", next.population());
    next
}

/// Holds the current generation and replaces it wholesale on every tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Life {
    grid: Grid,
}

impl Life {
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tick(&mut self) {
        self.grid = step(&self.grid);
    }

    pub fn tick_parallel(&mut self) {
        self.grid = step_parallel(&self.grid);
    }

    pub fn tick_n(&mut self, times: usize) {
        for _ in 0..times {
            self.tick();
        }
    }

    /// Swaps in a new grid, returning the old one.
    pub fn replace(&mut self, grid: Grid) -> Grid {
        std::mem::replace(&mut self.grid, grid)
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}
