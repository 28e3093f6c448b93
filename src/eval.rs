//! Static evaluation of a position.
//!
//! A win or loss saturates to `+inf` / `-inf`. Otherwise the score adds a
//! fixed bonus for each open-ended pattern a player holds anywhere on the
//! board (not per occurrence):
//!
//! | Template  | Weight |
//! |-----------|--------|
//! | `m m m _` | 1000   |
//! | `m m _ _` | 100    |
//!
//! and subtracts the same amounts for the opponent's patterns.

use crate::board::{Board, Cell, Marker};
use crate::constants::{THREE_WEIGHT, TWO_WEIGHT, WIN_LENGTH};
use crate::scanner::{contains_pattern, contains_run};

/// `m m _ _`
#[inline]
fn two_template(m: Marker) -> [Cell; 4] {
    [Some(m), Some(m), None, None]
}

/// `m m m _`
#[inline]
fn three_template(m: Marker) -> [Cell; 4] {
    [Some(m), Some(m), Some(m), None]
}

/// Weighted pattern score for one side, without win detection.
pub fn pattern_score(board: &Board, marker: Marker) -> f64 {
    let mut score = 0.0;
    if contains_pattern(board, &three_template(marker)) {
        score += THREE_WEIGHT;
    }
    if contains_pattern(board, &two_template(marker)) {
        score += TWO_WEIGHT;
    }
    score
}

/// Score `board` from `player`'s point of view.
///
/// An opponent win is checked first, so a board where both sides hold four
/// in a row evaluates to `-inf`.
pub fn evaluate(board: &Board, player: Marker) -> f64 {
    let opponent = player.opponent();
    if contains_run(board, opponent, WIN_LENGTH) {
        return f64::NEG_INFINITY;
    }
    if contains_run(board, player, WIN_LENGTH) {
        return f64::INFINITY;
    }
    pattern_score(board, player) - pattern_score(board, opponent)
}
