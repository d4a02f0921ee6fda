use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("invalid board dimensions {height}x{width}")]
    InvalidDimension { height: i64, width: i64 },

    #[error("a {height}x{width} board has more cells than fit in memory")]
    TooManyCells { height: usize, width: usize },

    #[error("cell size must be non-zero")]
    ZeroCellSize,

    #[error("row {row} has {actual} cells, expected {expected}")]
    MalformedGrid {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("board needs {expected} cells but {actual} were given")]
    CellCountMismatch { expected: usize, actual: usize },

    #[error("unexpected character {character:?} on line {line}")]
    Parse { line: usize, character: char },
}
