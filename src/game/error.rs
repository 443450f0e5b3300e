#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GameError {
    #[error("invalid row (expected: 0-{max_expected}, found: {found})")]
    InvalidGridRow { max_expected: usize, found: usize },
    #[error("invalid column (expected: 0-{max_expected}, found: {found})")]
    InvalidGridCol { max_expected: usize, found: usize },
    #[error("cell ({row}, {col}) is occupied")]
    CellIsOccupied { row: usize, col: usize },
    #[error("can't make turn on a finished game")]
    GameIsFinished,
    #[error("failed to switch players in the pool")]
    PlayerPoolCorrupted,
}

impl GameError {
    pub fn cell_is_occupied(row: usize, col: usize) -> Self {
        Self::CellIsOccupied { row, col }
    }

    pub fn invalid_grid_row(max_expected: usize, found: usize) -> Self {
        Self::InvalidGridRow {
            max_expected,
            found,
        }
    }

    pub fn invalid_grid_col(max_expected: usize, found: usize) -> Self {
        Self::InvalidGridCol {
            max_expected,
            found,
        }
    }
}
