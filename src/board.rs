//! Connect Four board model.
//!
//! A fixed `ROWS x COLS` grid where row 0 is the top. Pieces obey gravity: a
//! column fills bottom-up, and no empty cell ever sits below an occupied one.
//!
//! The search engine mutates a board in place and restores it on backtrack.
//! [`Board::apply_move`] and [`Board::undo_move`] must be strictly nested;
//! [`Board::with_move`] wraps the pair in a guard so the undo happens on every
//! return path.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use crate::constants::{COLS, COLUMNS, EMPTY_CHAR, PLAYER_ONE_CHAR, PLAYER_TWO_CHAR, ROWS};
use crate::error::BoardError;

/// One of the two player markers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    One,
    Two,
}

impl Marker {
    /// The other player's marker.
    #[inline]
    pub fn opponent(self) -> Marker {
        match self {
            Marker::One => Marker::Two,
            Marker::Two => Marker::One,
        }
    }

    /// External cell value (1 or 2).
    #[inline]
    pub fn value(self) -> u8 {
        match self {
            Marker::One => 1,
            Marker::Two => 2,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Marker::One => PLAYER_ONE_CHAR,
            Marker::Two => PLAYER_TWO_CHAR,
        }
    }
}

impl TryFrom<u8> for Marker {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Marker::One),
            2 => Ok(Marker::Two),
            other => Err(other),
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.value())
    }
}

/// A board cell: `None` is empty.
pub type Cell = Option<Marker>;

/// External value of a cell (0 = empty, 1/2 = marker).
#[inline]
pub fn cell_value(cell: Cell) -> u8 {
    cell.map_or(0, Marker::value)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[None; COLS]; ROWS],
        }
    }

    /// Build a board from its external representation, validating cell
    /// values and the gravity invariant.
    pub fn from_grid(grid: &[[u8; COLS]; ROWS]) -> Result<Self, BoardError> {
        let mut board = Board::new();
        for (row, values) in grid.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                board.cells[row][col] = match value {
                    0 => None,
                    v => Some(
                        Marker::try_from(v)
                            .map_err(|value| BoardError::InvalidCell { row, col, value })?,
                    ),
                };
            }
        }
        board.check_gravity()?;
        Ok(board)
    }

    /// External representation: 0 = empty, 1/2 = marker, row 0 on top.
    pub fn to_grid(&self) -> [[u8; COLS]; ROWS] {
        let mut grid = [[0u8; COLS]; ROWS];
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                grid[row][col] = cell_value(cell);
            }
        }
        grid
    }

    /// Get the cell at a position. Row 0 is the top, row `ROWS - 1` the bottom.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Raw grid access for the line scanner.
    #[inline]
    pub fn cells(&self) -> &[[Cell; COLS]; ROWS] {
        &self.cells
    }

    /// Row index of the topmost piece in a column, if any.
    pub fn top_row(&self, col: usize) -> Option<usize> {
        (0..ROWS).find(|&row| self.cells[row][col].is_some())
    }

    /// Check if a column is full. Out-of-range columns count as full.
    #[inline]
    pub fn is_column_full(&self, col: usize) -> bool {
        col >= COLS || self.cells[0][col].is_some()
    }

    /// Columns that can still take a piece, in ascending order.
    pub fn legal_moves(&self) -> Vec<usize> {
        COLUMNS
            .iter()
            .copied()
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        COLUMNS.iter().all(|&col| self.is_column_full(col))
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Drop `marker` into `col`, landing on the lowest empty cell.
    ///
    /// Callers must check [`Board::is_column_full`] first; a full column is
    /// left untouched.
    pub fn apply_move(&mut self, col: usize, marker: Marker) {
        debug_assert!(!self.is_column_full(col), "apply_move on full column {col}");
        if let Some(row) = (0..ROWS).rev().find(|&row| self.cells[row][col].is_none()) {
            self.cells[row][col] = Some(marker);
        }
    }

    /// Clear the most recently filled cell in `col`.
    ///
    /// Only valid as the undo of the immediately preceding [`Board::apply_move`]
    /// on this column. An empty column clears row 0, which is a no-op.
    pub fn undo_move(&mut self, col: usize) {
        let row = self.top_row(col).unwrap_or(0);
        self.cells[row][col] = None;
    }

    /// Checked placement used by the game loop. Returns the landing row.
    pub fn try_apply_move(&mut self, col: usize, marker: Marker) -> Result<usize, BoardError> {
        if col >= COLS {
            return Err(BoardError::ColumnOutOfRange(col));
        }
        if self.is_column_full(col) {
            return Err(BoardError::ColumnFull(col));
        }
        self.apply_move(col, marker);
        Ok(self.top_row(col).unwrap_or(ROWS - 1))
    }

    /// Apply a move for the lifetime of the returned guard.
    ///
    /// The guard dereferences to the board, so nested moves can be stacked
    /// on top of it; each one is undone when its guard drops.
    pub fn with_move(&mut self, col: usize, marker: Marker) -> MoveGuard<'_> {
        self.apply_move(col, marker);
        MoveGuard { board: self, col }
    }

    fn check_gravity(&self) -> Result<(), BoardError> {
        for col in 0..COLS {
            for row in 0..ROWS - 1 {
                if self.cells[row][col].is_some() && self.cells[row + 1][col].is_none() {
                    return Err(BoardError::FloatingPiece { row, col });
                }
            }
        }
        Ok(())
    }
}

/// A move applied to a board, undone on drop.
pub struct MoveGuard<'a> {
    board: &'a mut Board,
    col: usize,
}

impl MoveGuard<'_> {
    pub fn column(&self) -> usize {
        self.col
    }
}

impl Deref for MoveGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.board.undo_move(self.col);
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse six non-empty lines of seven cells each. Whitespace inside a line
    /// is ignored. `.`/`0` is empty, `X`/`1` is player one, `O`/`2` player two.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if lines.len() != ROWS {
            return Err(BoardError::BadShape {
                expected: ROWS,
                got: lines.len(),
            });
        }

        let mut board = Board::new();
        for (row, line) in lines.iter().enumerate() {
            let chars: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if chars.len() != COLS {
                return Err(BoardError::BadRow {
                    row,
                    got: chars.len(),
                });
            }
            for (col, &ch) in chars.iter().enumerate() {
                board.cells[row][col] = match ch.to_ascii_uppercase() {
                    '.' | '0' => None,
                    'X' | '1' => Some(Marker::One),
                    'O' | '2' => Some(Marker::Two),
                    _ => return Err(BoardError::InvalidChar { row, col, ch }),
                };
            }
        }
        board.check_gravity()?;
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                let ch = cell.map_or(EMPTY_CHAR, Marker::to_char);
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        for col in 0..COLS {
            write!(f, "{col} ")?;
        }
        writeln!(f)
    }
}
