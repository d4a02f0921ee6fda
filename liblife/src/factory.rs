use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::{
    board::Grid,
    error::{BoardError, Result},
};

/// Builds the starting grid, either all dead or a fair coin flip per cell.
pub fn create(height: usize, width: usize, randomize: bool) -> Grid {
    log::debug!("Creating {height}x{width} grid (randomize: {randomize})");

    if randomize {
        Grid::random_with(height, width, &mut rand::rng())
    } else {
        Grid::new(height, width)
    }
}

/// Same as a randomized [`create`], but reproducible for a given seed.
pub fn create_seeded(height: usize, width: usize, seed: u64) -> Grid {
    log::debug!("Creating {height}x{width} grid from seed {seed}");

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Grid::random_with(height, width, &mut rng)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSize {
    pub height: usize,
    pub width: usize,
}

impl BoardSize {
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    pub fn try_new(height: i64, width: i64) -> Result<Self> {
        let invalid = || BoardError::InvalidDimension { height, width };

        let height_cells = usize::try_from(height).map_err(|_| invalid())?;
        let width_cells = usize::try_from(width).map_err(|_| invalid())?;

        height_cells.checked_mul(width_cells).ok_or_else(invalid)?;

        Ok(Self::new(height_cells, width_cells))
    }

    /// Number of whole cells that fit on a display. Leftover pixels are unused margin.
    pub fn from_display(display_width: u32, display_height: u32, cell_size: u32) -> Result<Self> {
        if cell_size == 0 {
            return Err(BoardError::ZeroCellSize);
        }

        Ok(Self::new(
            (display_height / cell_size) as usize,
            (display_width / cell_size) as usize,
        ))
    }

    pub fn create(self, randomize: bool) -> Grid {
        create(self.height, self.width, randomize)
    }

    pub fn create_seeded(self, seed: u64) -> Grid {
        create_seeded(self.height, self.width, seed)
    }
}
