use std::str::FromStr;

use liblife::{BoardSize, CellState, Grid, Life, create_grid, create_grid_seeded, neighbor_count, step};

fn grid(pattern: &str) -> Grid {
    Grid::from_str(pattern).unwrap()
}

#[test]
fn test_dimensions_preserved() {
    for (height, width) in [(0, 0), (0, 5), (5, 0), (1, 1), (1, 9), (9, 1), (17, 23)] {
        let start = create_grid_seeded(height, width, 3);
        let next = step(&start);
        assert_eq!((next.height(), next.width()), (height, width));
    }
}

#[test]
fn test_step_does_not_mutate() {
    let start = create_grid_seeded(20, 20, 42);
    let snapshot = start.clone();

    let first = step(&start);
    let second = step(&start);

    assert_eq!(start, snapshot);
    assert_eq!(first, second);
}

#[test]
fn test_block_is_still_life() {
    let block = grid(
        "
        ....
        .oo.
        .oo.
        ....
        ",
    );
    assert_eq!(step(&block), block);
}

#[test]
fn test_birth_on_exactly_three() {
    let start = Grid::with_alive(5, 5, [(1, 1), (1, 2), (1, 3)]);
    assert_eq!(neighbor_count(&start, (0, 2)), 3);
    assert_eq!(neighbor_count(&start, (0, 1)), 2);

    let next = step(&start);
    assert_eq!(next.cell((0, 2)), Some(&CellState::Alive));
    assert_eq!(next.cell((2, 2)), Some(&CellState::Alive));
    assert_eq!(next.cell((0, 1)), Some(&CellState::Dead));
}

#[test]
fn test_no_birth_on_four() {
    let start = grid(
        "
        .....
        .o.o.
        .....
        .o.o.
        .....
        ",
    );
    assert_eq!(neighbor_count(&start, (2, 2)), 4);

    let next = step(&start);
    assert_eq!(next.cell((2, 2)), Some(&CellState::Dead));
    assert_eq!(next.population(), 0);
}

#[test]
fn test_death_by_isolation() {
    let start = Grid::with_alive(3, 3, [(1, 1)]);
    assert_eq!(step(&start).population(), 0);
}

#[test]
fn test_death_by_overcrowding() {
    let start = grid(
        "
        .....
        ..o..
        .ooo.
        ..o..
        .....
        ",
    );
    assert_eq!(neighbor_count(&start, (2, 2)), 4);
    assert_eq!(step(&start).cell((2, 2)), Some(&CellState::Dead));
}

#[test]
fn test_corner_cell_is_clamped() {
    let start = Grid::with_alive(4, 4, [(0, 0)]);
    assert_eq!(neighbor_count(&start, (0, 0)), 0);
    assert_eq!(neighbor_count(&start, (1, 1)), 1);
    assert_eq!(neighbor_count(&start, (3, 3)), 0);
    assert_eq!(step(&start).population(), 0);
}

#[test]
fn test_no_wraparound() {
    // On a torus the right column would count as a neighbor of the left one.
    let start = grid(
        "
        ....o
        ....o
        ....o
        ",
    );
    assert_eq!(neighbor_count(&start, (1, 0)), 0);
    assert_eq!(step(&start).to_string(), ".....\n...oo\n.....");
}

#[test]
fn test_all_dead_fixed_point() {
    let dead = create_grid(8, 13, false);
    assert_eq!(step(&dead), dead);
}

#[test]
fn test_glider_moves_diagonally() {
    let start = grid(
        "
        .o......
        ..o.....
        ooo.....
        ........
        ........
        ........
        ........
        ........
        ",
    );
    let shifted = grid(
        "
        ........
        ..o.....
        ...o....
        .ooo....
        ........
        ........
        ........
        ........
        ",
    );

    let mut life = Life::new(start);
    life.tick_n(4);
    assert_eq!(life.grid(), &shifted);
}

#[test]
fn test_seeded_grids_match() {
    let size = BoardSize::from_display(640, 480, 10).unwrap();
    assert_eq!(size.create_seeded(5), size.create_seeded(5));
    assert_eq!(size.create(false).population(), 0);
}
