//! Error types for board construction, player input, and game orchestration.
//!
//! The search engine itself never fails: degenerate positions are absorbed by
//! sentinel scores. Errors only arise at the edges, where a board comes from
//! outside or a player hands back a column.

/// Errors raised when building or mutating a board through a checked path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("column {0} is out of range (0..{max})", max = crate::constants::COLS)]
    ColumnOutOfRange(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("invalid cell value {value} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, value: u8 },

    #[error("invalid cell character '{ch}' at row {row}, column {col}")]
    InvalidChar { row: usize, col: usize, ch: char },

    #[error("floating piece at row {row}, column {col}")]
    FloatingPiece { row: usize, col: usize },

    #[error("expected {expected} rows, got {got}")]
    BadShape { expected: usize, got: usize },

    #[error("row {row} has {got} cells, expected {cols}", cols = crate::constants::COLS)]
    BadRow { row: usize, got: usize },
}

/// Errors raised when validating search or game configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors a player can raise while choosing a move.
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input ended before a move was entered")]
    EndOfInput,

    #[error("no legal moves available")]
    NoLegalMoves,
}

/// Errors that stop a game in progress.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("{player} selected illegal column {column} (legal: {legal:?})")]
    IllegalMove {
        player: String,
        column: usize,
        legal: Vec<usize>,
    },

    #[error("player error: {0}")]
    Player(#[from] PlayerError),

    #[error("board error: {0}")]
    Board(#[from] BoardError),
}
