use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use liblife::{BoardSize, Grid, Life};

pub struct State {
    pub life: Life,
    pub generation: u64,
    pub board_size: BoardSize,
    pub parallel: bool,
}

impl State {
    pub fn new(grid: Grid, parallel: bool) -> Self {
        let board_size = BoardSize::new(grid.height(), grid.width());

        Self {
            life: Life::new(grid),
            generation: 0,
            board_size,
            parallel,
        }
    }

    pub fn advance(&mut self, times: usize) {
        for _ in 0..times {
            if self.parallel {
                self.life.tick_parallel();
            } else {
                self.life.tick();
            }
            self.generation += 1;
        }
    }

    /// Starts over from a fresh random grid of the same size.
    pub fn reseed(&mut self, seed: Option<u64>) {
        let grid = match seed {
            Some(seed) => self.board_size.create_seeded(seed),
            None => self.board_size.create(true),
        };
        self.restart(grid);
    }

    pub fn clear(&mut self) {
        self.restart(self.board_size.create(false));
    }

    fn restart(&mut self, grid: Grid) {
        self.life.replace(grid);
        self.generation = 0;
    }
}

/// State shared between the window, the ticker thread and the console.
#[derive(Clone)]
pub struct SharedState(Arc<RwLock<State>>);

impl SharedState {
    pub fn new(state: State) -> Self {
        Self(Arc::new(RwLock::new(state)))
    }

    // The grid is only ever swapped wholesale, so a poisoned lock still holds a whole generation.
    pub fn read(&self) -> RwLockReadGuard<'_, State> {
        self.0.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.0.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Advances one generation per lock, letting readers in between generations.
    pub fn advance(&self, times: usize) {
        for _ in 0..times {
            self.write().advance(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_counts_generations() {
        let mut state = State::new(Grid::with_alive(5, 5, [(2, 1), (2, 2), (2, 3)]), false);

        state.advance(3);
        assert_eq!(state.generation, 3);
        assert_eq!(state.life.grid().population(), 3);
        assert_eq!(state.life.grid().cell((1, 2)).map(|cell| cell.is_alive()), Some(true));
    }

    #[test]
    fn test_parallel_advance_matches() {
        let grid = BoardSize::new(24, 31).create_seeded(11);
        let mut sequential = State::new(grid.clone(), false);
        let mut parallel = State::new(grid, true);

        sequential.advance(5);
        parallel.advance(5);
        assert_eq!(sequential.life.grid(), parallel.life.grid());
    }

    #[test]
    fn test_shared_advance_matches_single_lock() {
        let grid = BoardSize::new(16, 16).create_seeded(2);
        let shared = SharedState::new(State::new(grid.clone(), false));
        let mut local = State::new(grid, false);

        shared.advance(7);
        local.advance(7);

        assert_eq!(shared.read().generation, 7);
        assert_eq!(shared.read().life.grid(), local.life.grid());
    }

    #[test]
    fn test_reseed_and_clear_restart() {
        let mut state = State::new(Grid::new(6, 8), false);
        state.advance(2);

        state.reseed(Some(4));
        assert_eq!(state.generation, 0);
        assert_eq!(state.life.grid(), &BoardSize::new(6, 8).create_seeded(4));

        state.clear();
        assert_eq!(state.life.grid(), &Grid::new(6, 8));
    }
}
