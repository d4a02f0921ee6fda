use std::{
    fmt::{self, Display, Write},
    str::FromStr,
};

use rand::Rng;

use super::{
    error::{BoardError, Result},
    pos::Cell,
};

/// Dense, row-major rectangular grid of cells.
///
/// The dimensions are fixed at construction. There is no way to change a
/// cell after that; the next generation is always a new `Grid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<CellState>,
}

/// Number of cells in a `height` x `width` board, unless that overflows `usize`.
fn cell_count(height: usize, width: usize) -> Result<usize> {
    height
        .checked_mul(width)
        .ok_or(BoardError::TooManyCells { height, width })
}

impl Grid {
    /// # Panics
    ///
    /// If `height * width` overflows `usize`, like `Vec` does on capacity overflow.
    pub fn new(height: usize, width: usize) -> Self {
        let cells = vec![CellState::default(); Self::infallible_cell_count(height, width)];
        Self {
            height,
            width,
            cells,
        }
    }

    /// Every cell is independently alive with probability 0.5.
    ///
    /// # Panics
    ///
    /// If `height * width` overflows `usize`.
    pub fn random_with<R>(height: usize, width: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let cells = (0..Self::infallible_cell_count(height, width))
            .map(|_| CellState::from(rng.random_bool(0.5)))
            .collect();

        Self {
            height,
            width,
            cells,
        }
    }

    pub fn with_cells(height: usize, width: usize, cells: Vec<CellState>) -> Result<Self> {
        let expected = cell_count(height, width)?;
        if cells.len() != expected {
            return Err(BoardError::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }

        Ok(Self {
            height,
            width,
            cells,
        })
    }

    fn infallible_cell_count(height: usize, width: usize) -> usize {
        match cell_count(height, width) {
            Ok(count) => count,
            Err(e) => panic!("{e}"),
        }
    }

    pub(crate) fn from_raw(height: usize, width: usize, cells: Vec<CellState>) -> Self {
        debug_assert_eq!(cells.len(), height * width);
        Self {
            height,
            width,
            cells,
        }
    }

    pub fn from_rows<I, R>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = CellState>,
    {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (row_index, row) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(row);
            let row_len = cells.len() - before;

            match width {
                None => width = Some(row_len),
                Some(expected) if expected != row_len => {
                    return Err(BoardError::MalformedGrid {
                        row: row_index,
                        expected,
                        actual: row_len,
                    });
                }
                Some(_) => {}
            }

            height += 1;
        }

        Ok(Self {
            height,
            width: width.unwrap_or(0),
            cells,
        })
    }

    /// Builds a grid with exactly the given cells alive. Out of bounds cells are ignored.
    pub fn with_alive<I, P>(height: usize, width: usize, alive: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Cell>,
    {
        let mut grid = Self::new(height, width);
        for pos in alive {
            if let Some(index) = grid.pos_to_index(pos) {
                grid.cells[index] = CellState::Alive;
            }
        }
        grid
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell<P>(&self, pos: P) -> Option<&CellState>
    where
        P: Into<Cell>,
    {
        let index = self.pos_to_index(pos)?;
        self.cells.get(index)
    }

    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub fn enumerate_cells(&self) -> impl Iterator<Item = (Cell, &CellState)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (self.index_to_pos(index), cell))
    }

    /// Yields exactly `height` rows, empty ones for a zero-width grid.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        (0..self.height).map(move |row| &self.cells[row * self.width..(row + 1) * self.width])
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Cell>,
    {
        let Cell { row, col } = pos.into();

        if row >= self.height {
            return None;
        }

        if col >= self.width {
            return None;
        }

        Some(col + row * self.width)
    }

    fn index_to_pos(&self, index: usize) -> Cell {
        let row = index / self.width;
        let col = index % self.width;
        Cell { row, col }
    }
}

impl FromStr for Grid {
    type Err = BoardError;

    /// One line per row, `o` for alive and `.` for dead. Blank lines and
    /// surrounding whitespace are skipped, so the rows of a zero-width grid
    /// don't survive a trip through text.
    fn from_str(s: &str) -> Result<Self> {
        let mut rows = Vec::new();

        for (line_index, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let row = line
                .chars()
                .map(|character| match character {
                    'o' | 'O' | '#' | '1' => Ok(CellState::Alive),
                    '.' | '_' | '0' => Ok(CellState::Dead),
                    _ => Err(BoardError::Parse {
                        line: line_index + 1,
                        character,
                    }),
                })
                .collect::<Result<Vec<_>>>()?;

            rows.push(row);
        }

        Self::from_rows(rows)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.rows().enumerate() {
            if row_index > 0 {
                f.write_char('\n')?;
            }
            for cell in row {
                f.write_char(match cell {
                    CellState::Alive => 'o',
                    CellState::Dead => '.',
                })?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    Alive,

    #[default]
    Dead,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    /// 1 when alive, 0 when dead.
    pub fn value(self) -> u8 {
        match self {
            CellState::Alive => 1,
            CellState::Dead => 0,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}
