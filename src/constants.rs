//! Constants for board dimensions, search parameters, and heuristic weights.
//!
//! The board is the standard Connect Four grid. Row 0 is the top of the board,
//! so pieces fall towards row `ROWS - 1`. The line scanner and the heuristic
//! templates assume this fixed shape.

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of rows on the board.
pub const ROWS: usize = 6;

/// Number of columns on the board (and the number of possible moves).
pub const COLS: usize = 7;

/// Length of a winning run, and of every heuristic pattern template.
pub const WIN_LENGTH: usize = 4;

/// The full static move set, in ascending column order.
pub const COLUMNS: [usize; COLS] = [0, 1, 2, 3, 4, 5, 6];

// =============================================================================
// Search Parameters
// =============================================================================

/// Default search depth for both search strategies.
pub const DEFAULT_DEPTH: usize = 4;

// =============================================================================
// Heuristic Weights
// =============================================================================

/// Weight of an open three-in-a-row (`m m m _`).
pub const THREE_WEIGHT: f64 = 1000.0;

/// Weight of an open two-in-a-row (`m m _ _`).
pub const TWO_WEIGHT: f64 = 100.0;

// =============================================================================
// Display
// =============================================================================

/// Character used for an empty cell when rendering a board.
pub const EMPTY_CHAR: char = '.';

/// Character used for player one's pieces.
pub const PLAYER_ONE_CHAR: char = 'X';

/// Character used for player two's pieces.
pub const PLAYER_TWO_CHAR: char = 'O';
