//! Connect4-Search: a Connect Four engine built on adversarial game-tree search.
//!
//! The engine plays against a human or a random opponent, choosing moves with
//! either depth-limited alpha-beta minimax or expectimax.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions, search depth, and heuristic weights
//! - [`board`] - Board state, gravity placement, and scoped apply/undo
//! - [`scanner`] - Pattern matching along rows, columns, and diagonals
//! - [`eval`] - Static evaluation of a position
//! - [`search`] - Shared search configuration, statistics, and cutoff test
//! - [`alphabeta`] - Minimax with alpha-beta pruning
//! - [`expectimax`] - Expectimax against a uniformly random opponent
//! - [`player`] - Human, random, and search-driven players
//! - [`game`] - Turn alternation and result detection
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use connect4_search::alphabeta::AlphaBetaSearch;
//! use connect4_search::board::{Board, Marker};
//! use connect4_search::search::{MoveSearch, SearchConfig};
//!
//! let mut board = Board::new();
//! board.apply_move(3, Marker::One);
//!
//! let mut search = AlphaBetaSearch::new(Marker::Two, SearchConfig::with_depth(2));
//! let col = search.choose_move(&board);
//! assert!(board.legal_moves().contains(&col));
//! ```

pub mod alphabeta;
pub mod board;
pub mod constants;
pub mod error;
pub mod eval;
pub mod expectimax;
pub mod game;
pub mod player;
pub mod scanner;
pub mod search;
