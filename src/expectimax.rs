//! Expectimax search against a uniformly random opponent.
//!
//! MAX layers place the searching player's marker; chance layers average over
//! the opponent's replies with weight `1 / |legal moves|`. There is no pruning.
//!
//! A root move is scored by the chance layer one level below the configured
//! depth, so expectimax looks one ply less deep than alpha-beta at the same
//! setting.

use tracing::{debug, trace};

use crate::board::{Board, Marker};
use crate::constants::COLUMNS;
use crate::eval::evaluate;
use crate::search::{
    ChanceBranching, MoveSearch, SearchConfig, SearchStats, cutoff, random_default, select_best,
};

pub struct ExpectimaxSearch {
    player: Marker,
    config: SearchConfig,
    rng: fastrand::Rng,
    stats: SearchStats,
}

impl ExpectimaxSearch {
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
        let depth = self.config.depth.saturating_sub(1);
        let mut values = Vec::new();

        for col in scratch.legal_moves() {
            let mut child = scratch.with_move(col, self.player);
            let v = self.chance_value(&mut child, depth);
            trace!(column = col, value = v, "expectimax root move");
            values.push((col, v));
        }

        debug_assert_eq!(scratch, *board, "search leaked a move");
        values
    }

    /// MAX layer: the searching player moves.
    pub fn max_value(&mut self, board: &mut Board, depth: usize) -> f64 {
        self.stats.nodes += 1;
        let legal = board.legal_moves();
        if cutoff(board, depth, &legal) {
            self.stats.leaves += 1;
            return evaluate(board, self.player);
        }

        let mut v_max = f64::NEG_INFINITY;
        for col in legal {
            let mut child = board.with_move(col, self.player);
            v_max = v_max.max(self.chance_value(&mut child, depth - 1));
        }
        v_max
    }

    /// Chance layer: the opponent moves at random.
    ///
    /// Under [`ChanceBranching::AllColumns`] a full column is counted as a
    /// reply that leaves the board unchanged, weighted like the others.
    pub fn chance_value(&mut self, board: &mut Board, depth: usize) -> f64 {
        self.stats.nodes += 1;
        let legal = board.legal_moves();
        if cutoff(board, depth, &legal) {
            self.stats.leaves += 1;
            return evaluate(board, self.player);
        }

        let probability = 1.0 / legal.len() as f64;
        let opponent = self.player.opponent();
        let mut v_chance = 0.0;
        for col in COLUMNS {
            let v = if !board.is_column_full(col) {
                let mut child = board.with_move(col, opponent);
                self.max_value(&mut child, depth - 1)
            } else if self.config.chance_branching == ChanceBranching::AllColumns {
                self.max_value(board, depth - 1)
            } else {
                continue;
            };
            v_chance += v * probability;
        }
        v_chance
    }
}

impl MoveSearch for ExpectimaxSearch {
    fn choose_move(&mut self, board: &Board) -> usize {
        self.stats = SearchStats::default();
        let default = random_default(&mut self.rng, &board.legal_moves());
        let values = self.root_values(board);
        let best = select_best(&values, default);

        debug!(
            player = %self.player,
            depth = self.config.depth,
            branching = ?self.config.chance_branching,
            nodes = self.stats.nodes,
            leaves = self.stats.leaves,
            ?values,
            best,
            "expectimax decision"
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
