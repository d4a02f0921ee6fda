use super::board::CellState;

/// Conway's B3/S23: a dead cell is born with exactly 3 live neighbors,
/// a live cell survives with 2 or 3.
pub fn next_state(state: CellState, alive_neighbor_count: usize) -> CellState {
    match (state, alive_neighbor_count) {
        (CellState::Alive, 2..=3) | (CellState::Dead, 3) => CellState::Alive,
        _ => CellState::Dead,
    }
}
