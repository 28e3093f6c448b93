//! Depth-limited minimax with alpha-beta pruning.
//!
//! MAX layers place the searching player's marker, MIN layers the opponent's.
//! Every leaf is scored from the searching player's point of view, whichever
//! layer it is reached from.
//!
//! The root does not narrow the window between its children: each root move
//! is searched with `(-inf, +inf)`, so its value is exact and ties resolve to
//! the lowest column.

use tracing::{debug, trace};

use crate::board::{Board, Marker};
use crate::eval::evaluate;
use crate::search::{
    MoveSearch, SearchConfig, SearchStats, cutoff, random_default, select_best,
};

pub struct AlphaBetaSearch {
    player: Marker,
    config: SearchConfig,
    rng: fastrand::Rng,
    stats: SearchStats,
}

impl AlphaBetaSearch {
    pub fn new(player: Marker, config: SearchConfig) -> Self {
        Self {
            player,
            rng: config.rng(),
            config,
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Value of every legal root move, in ascending column order.
    pub fn root_values(&mut self, board: &Board) -> Vec<(usize, f64)> {
        let mut scratch = *board;
        let depth = self.config.depth;
        let mut values = Vec::new();

        for col in scratch.legal_moves() {
            let mut child = scratch.with_move(col, self.player);
            let v = self.min_value(&mut child, depth, f64::NEG_INFINITY, f64::INFINITY);
            trace!(column = col, value = v, "alpha-beta root move");
            values.push((col, v));
        }

        debug_assert_eq!(scratch, *board, "search leaked a move");
        values
    }

    /// MAX layer: the searching player moves.
    pub fn max_value(&mut self, board: &mut Board, depth: usize, mut alpha: f64, beta: f64) -> f64 {
        self.stats.nodes += 1;
        let legal = board.legal_moves();
        if cutoff(board, depth, &legal) {
            self.stats.leaves += 1;
            return evaluate(board, self.player);
        }

        let mut v_max = f64::NEG_INFINITY;
        for col in legal {
            let mut child = board.with_move(col, self.player);
            v_max = v_max.max(self.min_value(&mut child, depth - 1, alpha, beta));
            if v_max >= beta {
                self.stats.prunes += 1;
                return v_max;
            }
            alpha = alpha.max(v_max);
        }
        v_max
    }

    /// MIN layer: the opponent moves.
    pub fn min_value(&mut self, board: &mut Board, depth: usize, alpha: f64, mut beta: f64) -> f64 {
        self.stats.nodes += 1;
        let legal = board.legal_moves();
        if cutoff(board, depth, &legal) {
            self.stats.leaves += 1;
            return evaluate(board, self.player);
        }

        let opponent = self.player.opponent();
        let mut v_min = f64::INFINITY;
        for col in legal {
            let mut child = board.with_move(col, opponent);
            v_min = v_min.min(self.max_value(&mut child, depth - 1, alpha, beta));
            if v_min <= alpha {
                self.stats.prunes += 1;
                return v_min;
            }
            beta = beta.min(v_min);
        }
        v_min
    }
}

impl MoveSearch for AlphaBetaSearch {
    fn choose_move(&mut self, board: &Board) -> usize {
        self.stats = SearchStats::default();
        let default = random_default(&mut self.rng, &board.legal_moves());
        let values = self.root_values(board);
        let best = select_best(&values, default);

        debug!(
            player = %self.player,
            depth = self.config.depth,
            nodes = self.stats.nodes,
            leaves = self.stats.leaves,
            prunes = self.stats.prunes,
            ?values,
            best,
            "alpha-beta decision"
        );
        best
    }

    fn player(&self) -> Marker {
        self.player
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }
}
