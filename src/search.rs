//! Shared search machinery: configuration, statistics, and the cutoff test.
//!
//! Two strategies implement [`MoveSearch`]:
//! - [`AlphaBetaSearch`](crate::alphabeta::AlphaBetaSearch): depth-limited
//!   minimax with alpha-beta pruning, assuming an optimal opponent.
//! - [`ExpectimaxSearch`](crate::expectimax::ExpectimaxSearch): the opponent
//!   is modelled as picking uniformly among its moves.
//!
//! Both search on a private copy of the caller's board, so a move decision
//! never leaks its scratch mutations.

use crate::board::{Board, Marker};
use crate::constants::DEFAULT_DEPTH;
use crate::error::ConfigError;
use crate::scanner::has_four_in_a_row;

/// Which columns a chance node sums over.
///
/// The probability of each branch is always `1 / |legal moves|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ChanceBranching {
    /// Sum over the legal columns only, so the weights add up to one.
    #[default]
    LegalOnly,
    /// Sum over all seven columns. A full column contributes the unchanged
    /// position, so the weights add up to more than one once a column fills.
    AllColumns,
}

/// Search strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Strategy {
    #[default]
    AlphaBeta,
    Expectimax,
}

/// Configurable knobs shared by both strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Remaining depth handed to the first layer below the root.
    pub depth: usize,
    /// Chance-node branching rule (expectimax only).
    pub chance_branching: ChanceBranching,
    /// Seed for the random fallback move. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            chance_branching: ChanceBranching::default(),
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(depth: usize) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::Validation("search depth must be >= 1".into()));
        }
        Ok(())
    }

    pub(crate) fn rng(&self) -> fastrand::Rng {
        match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        }
    }
}

/// Basic counters for a single move decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, root children included.
    pub nodes: u64,
    /// Nodes scored by the evaluation function.
    pub leaves: u64,
    /// Alpha or beta cutoffs taken.
    pub prunes: u64,
}

/// A strategy that picks a column for its player.
pub trait MoveSearch {
    /// Choose a column for the current position. The board must have at
    /// least one legal move.
    fn choose_move(&mut self, board: &Board) -> usize;

    /// The marker this search plays for.
    fn player(&self) -> Marker;

    /// Counters from the most recent [`MoveSearch::choose_move`] call.
    fn stats(&self) -> SearchStats;
}

/// Stop expanding: depth exhausted, no moves left, or someone has won.
#[inline]
pub fn cutoff(board: &Board, depth: usize, legal: &[usize]) -> bool {
    depth == 0 || legal.is_empty() || has_four_in_a_row(board)
}

/// Pick the first root move whose value is strictly greater than everything
/// before it, starting from `default` with a value of `-inf`.
///
/// When every value is `-inf` (or NaN) the default survives.
pub fn select_best(values: &[(usize, f64)], default: usize) -> usize {
    let mut best = default;
    let mut v_max = f64::NEG_INFINITY;
    for &(col, v) in values {
        if v > v_max {
            v_max = v;
            best = col;
        }
    }
    best
}

/// Uniformly random legal column, used as the fallback move.
pub(crate) fn random_default(rng: &mut fastrand::Rng, legal: &[usize]) -> usize {
    debug_assert!(!legal.is_empty(), "move requested on a full board");
    rng.choice(legal.iter().copied()).unwrap_or(0)
}
