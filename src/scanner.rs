//! Line scanner: fixed-template matching along rows, columns, and diagonals.
//!
//! Every line of the board is precomputed once as a list of coordinates:
//! rows left-to-right, columns top-to-bottom, and both diagonal directions
//! (`\` running down-right, `/` running down-left). A pattern matches when
//! some window of a line equals it cell for cell, so `X X X X` is found
//! inside a longer run of `X`, and `X X _ _` requires the two empty cells.

use std::sync::OnceLock;

use crate::board::{Board, Cell, Marker};
use crate::constants::{COLS, ROWS, WIN_LENGTH};

/// A line of the board as `(row, col)` coordinates in scan order.
type Line = Vec<(usize, usize)>;

/// Static storage for the precomputed lines.
static LINES: OnceLock<Vec<Line>> = OnceLock::new();

fn lines() -> &'static [Line] {
    LINES.get_or_init(build_lines)
}

/// Walk from `(row, col)` in direction `(dr, dc)` until leaving the board.
fn walk(row: usize, col: usize, dr: isize, dc: isize) -> Line {
    let mut line = Vec::new();
    let (mut r, mut c) = (row as isize, col as isize);
    while (0..ROWS as isize).contains(&r) && (0..COLS as isize).contains(&c) {
        line.push((r as usize, c as usize));
        r += dr;
        c += dc;
    }
    line
}

fn build_lines() -> Vec<Line> {
    let mut lines = Vec::new();

    // Rows
    for row in 0..ROWS {
        lines.push(walk(row, 0, 0, 1));
    }
    // Columns
    for col in 0..COLS {
        lines.push(walk(0, col, 1, 0));
    }
    // `\` diagonals start on the top edge or the left edge
    for col in 0..COLS {
        lines.push(walk(0, col, 1, 1));
    }
    for row in 1..ROWS {
        lines.push(walk(row, 0, 1, 1));
    }
    // `/` diagonals start on the top edge or the right edge
    for col in 0..COLS {
        lines.push(walk(0, col, 1, -1));
    }
    for row in 1..ROWS {
        lines.push(walk(row, COLS - 1, 1, -1));
    }

    lines
}

/// Check whether `pattern` appears contiguously along any line of the board.
///
/// Lines shorter than the pattern are skipped. An empty pattern always matches.
pub fn contains_pattern(board: &Board, pattern: &[Cell]) -> bool {
    if pattern.is_empty() {
        return true;
    }
    lines()
        .iter()
        .filter(|line| line.len() >= pattern.len())
        .any(|line| {
            line.windows(pattern.len()).any(|window| {
                window
                    .iter()
                    .zip(pattern)
                    .all(|(&(r, c), &want)| board.get(r, c) == want)
            })
        })
}

/// Check whether `run_length` consecutive `marker` pieces appear on any line.
pub fn contains_run(board: &Board, marker: Marker, run_length: usize) -> bool {
    let pattern = vec![Some(marker); run_length];
    contains_pattern(board, &pattern)
}

/// True if either player has four in a row anywhere.
pub fn has_four_in_a_row(board: &Board) -> bool {
    winner(board).is_some()
}

/// The player holding a four-in-a-row, if any. Player one is reported first
/// on the (unreachable in real play) board where both do.
pub fn winner(board: &Board) -> Option<Marker> {
    [Marker::One, Marker::Two]
        .into_iter()
        .find(|&m| contains_run(board, m, WIN_LENGTH))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    /// Brute-force check: start at every cell and walk all four directions.
    fn brute_force_run(board: &Board, marker: Marker, n: usize) -> bool {
        const DIRS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];
        for row in 0..ROWS as isize {
            for col in 0..COLS as isize {
                for (dr, dc) in DIRS {
                    let hit = (0..n as isize).all(|i| {
                        let (r, c) = (row + dr * i, col + dc * i);
                        (0..ROWS as isize).contains(&r)
                            && (0..COLS as isize).contains(&c)
                            && board.get(r as usize, c as usize) == Some(marker)
                    });
                    if hit {
                        return true;
                    }
                }
            }
        }
        false
    }

    #[test]
    fn test_line_inventory() {
        let lines = lines();
        assert_eq!(lines.len(), ROWS + COLS + 2 * (ROWS + COLS - 1));
        let long_enough = lines.iter().filter(|l| l.len() >= WIN_LENGTH).count();
        // 6 rows, 7 columns, 6 diagonals in each direction
        assert_eq!(long_enough, 6 + 7 + 6 + 6);
    }

    #[test]
    fn test_horizontal_win() {
        let b = board(
            "
            .......
            .......
            .......
            .......
            OOO....
            XXXX...
            ",
        );
        assert!(contains_run(&b, Marker::One, 4));
        assert!(!contains_run(&b, Marker::Two, 4));
        assert!(has_four_in_a_row(&b));
        assert_eq!(winner(&b), Some(Marker::One));
    }

    #[test]
    fn test_vertical_win() {
        let b = board(
            "
            .......
            .......
            O......
            O......
            OX.....
            OXX....
            ",
        );
        assert!(has_four_in_a_row(&b));
        assert_eq!(winner(&b), Some(Marker::Two));
    }

    #[test]
    fn test_down_right_diagonal_win() {
        let b = board(
            "
            .......
            .......
            X......
            OX.....
            OOX....
            OOOX...
            ",
        );
        assert!(has_four_in_a_row(&b));
        assert_eq!(winner(&b), Some(Marker::One));
    }

    #[test]
    fn test_down_left_diagonal_win() {
        let b = board(
            "
            .......
            .......
            ......X
            .....XO
            ....XOO
            ...XOOO
            ",
        );
        assert!(has_four_in_a_row(&b));
        assert_eq!(winner(&b), Some(Marker::One));
    }

    #[test]
    fn test_three_in_a_row_is_not_a_win() {
        let b = board(
            "
            .......
            .......
            .......
            X......
            XO.....
            XOO.OOX
            ",
        );
        assert!(contains_run(&b, Marker::One, 3));
        assert!(contains_run(&b, Marker::Two, 2));
        assert!(!has_four_in_a_row(&b));
        assert_eq!(winner(&b), None);
    }

    #[test]
    fn test_longer_run_contains_shorter_pattern() {
        let b = board(
            "
            .......
            .......
            .......
            .......
            .OOOO..
            XXXXXO.
            ",
        );
        assert!(contains_run(&b, Marker::One, 5));
        assert!(contains_run(&b, Marker::One, 4));
        assert!(!contains_run(&b, Marker::One, 6));
    }

    #[test]
    fn test_template_requires_empty_cells() {
        let x = Some(Marker::One);
        let blocked = board(
            "
            .......
            .......
            .......
            .......
            .......
            XXO...O
            ",
        );
        assert!(!contains_pattern(&blocked, &[x, x, None]));

        let open = board(
            "
            .......
            .......
            .......
            .......
            .......
            ..XX..O
            ",
        );
        assert!(contains_pattern(&open, &[x, x, None, None]));
    }

    #[test]
    fn test_templates_read_in_scan_order() {
        let x = Some(Marker::One);
        // Open only to the left: `_ _ X X` is on the row, `X X _ _` is not.
        let right_edge = board(
            "
            .......
            .......
            .......
            .......
            .......
            .....XX
            ",
        );
        assert!(contains_pattern(&right_edge, &[None, None, x, x]));
        assert!(!contains_pattern(&right_edge, &[x, x, None, None]));

        // Columns read top-to-bottom, so a vertical pair reads `_ _ X X`.
        let stacked = board(
            "
            .......
            .......
            .......
            .......
            ...X...
            ...X...
            ",
        );
        assert!(!contains_pattern(&stacked, &[x, x, None, None]));
        assert!(contains_pattern(&stacked, &[None, None, x, x]));
    }

    #[test]
    fn test_empty_pattern_matches() {
        assert!(contains_pattern(&Board::new(), &[]));
        assert!(!contains_run(&Board::new(), Marker::One, 1));
    }

    #[test]
    fn test_matches_brute_force_on_random_games() {
        let mut rng = fastrand::Rng::with_seed(42);
        for _ in 0..200 {
            let mut b = Board::new();
            let mut marker = Marker::One;
            let plies = rng.usize(0..=ROWS * COLS);
            for _ in 0..plies {
                let legal = b.legal_moves();
                if legal.is_empty() {
                    break;
                }
                b.apply_move(legal[rng.usize(..legal.len())], marker);
                marker = marker.opponent();
            }
            for m in [Marker::One, Marker::Two] {
                for n in 2..=4 {
                    assert_eq!(
                        contains_run(&b, m, n),
                        brute_force_run(&b, m, n),
                        "run {n} of {m} disagrees on\n{b}"
                    );
                }
            }
        }
    }
}
