//! Game orchestration: the authoritative board and turn alternation.
//!
//! The game hands each player a shared reference to the board, checks the
//! returned column, and applies it. Play stops at the first four-in-a-row or
//! when the board fills up.

use tracing::{debug, info};

use crate::board::{Board, Marker};
use crate::error::GameError;
use crate::player::Player;
use crate::scanner::winner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Marker),
    Draw,
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Winner(m) => write!(f, "{m} wins"),
            GameOutcome::Draw => write!(f, "draw"),
        }
    }
}

/// A finished game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub outcome: GameOutcome,
    /// Moves in play order.
    pub moves: Vec<(Marker, usize)>,
    pub board: Board,
}

pub struct Game {
    board: Board,
    players: [Box<dyn Player>; 2],
    to_move: Marker,
    moves: Vec<(Marker, usize)>,
}

/// Slot of a marker in the players array.
#[inline]
fn slot(marker: Marker) -> usize {
    match marker {
        Marker::One => 0,
        Marker::Two => 1,
    }
}

impl Game {
    /// A new game on an empty board, player one to move.
    pub fn new(player_one: Box<dyn Player>, player_two: Box<dyn Player>) -> Self {
        Self::with_board(Board::new(), Marker::One, player_one, player_two)
    }

    /// Resume from an existing position.
    pub fn with_board(
        board: Board,
        to_move: Marker,
        player_one: Box<dyn Player>,
        player_two: Box<dyn Player>,
    ) -> Self {
        debug_assert_eq!(player_one.marker(), Marker::One);
        debug_assert_eq!(player_two.marker(), Marker::Two);
        Self {
            board,
            players: [player_one, player_two],
            to_move,
            moves: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Marker {
        self.to_move
    }

    pub fn moves(&self) -> &[(Marker, usize)] {
        &self.moves
    }

    pub fn player_name(&self, marker: Marker) -> String {
        self.players[slot(marker)].name()
    }

    /// Result of the current position, if play is over.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if let Some(m) = winner(&self.board) {
            Some(GameOutcome::Winner(m))
        } else if self.board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    /// Ask the player to move for one column and apply it.
    ///
    /// Returns the outcome once the game is over; stepping a finished game
    /// does nothing.
    pub fn step(&mut self) -> Result<Option<GameOutcome>, GameError> {
        if let Some(outcome) = self.outcome() {
            return Ok(Some(outcome));
        }

        let marker = self.to_move;
        let player = &mut self.players[slot(marker)];
        let col = player.choose_move(&self.board)?;
        if self.board.is_column_full(col) {
            return Err(GameError::IllegalMove {
                player: player.name(),
                column: col,
                legal: self.board.legal_moves(),
            });
        }
        let row = self.board.try_apply_move(col, marker)?;
        info!(player = %player.name(), column = col, row, "move played");

        self.moves.push((marker, col));
        self.to_move = marker.opponent();

        let outcome = self.outcome();
        if let Some(outcome) = outcome {
            info!(%outcome, moves = self.moves.len(), "game over");
        } else {
            debug!(pieces = self.board.piece_count(), "next turn: {}", self.to_move);
        }
        Ok(outcome)
    }

    /// Play until the game ends.
    pub fn play(mut self) -> Result<GameRecord, GameError> {
        loop {
            if let Some(outcome) = self.step()? {
                return Ok(GameRecord {
                    outcome,
                    moves: self.moves,
                    board: self.board,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlayerError;
    use crate::player::{AiPlayer, PlayerKind, RandomPlayer};
    use crate::search::{SearchConfig, Strategy};

    /// Plays a fixed list of columns.
    struct Scripted {
        marker: Marker,
        columns: Vec<usize>,
    }

    impl Player for Scripted {
        fn choose_move(&mut self, _board: &Board) -> Result<usize, PlayerError> {
            if self.columns.is_empty() {
                return Err(PlayerError::EndOfInput);
            }
            Ok(self.columns.remove(0))
        }

        fn marker(&self) -> Marker {
            self.marker
        }

        fn kind(&self) -> PlayerKind {
            PlayerKind::Human
        }
    }

    fn scripted(marker: Marker, columns: &[usize]) -> Box<dyn Player> {
        Box::new(Scripted {
            marker,
            columns: columns.to_vec(),
        })
    }

    #[test]
    fn test_vertical_win_ends_game() {
        let game = Game::new(
            scripted(Marker::One, &[0, 0, 0, 0]),
            scripted(Marker::Two, &[1, 1, 1]),
        );
        let record = game.play().unwrap();
        assert_eq!(record.outcome, GameOutcome::Winner(Marker::One));
        assert_eq!(record.moves.len(), 7);
        assert_eq!(record.moves[0], (Marker::One, 0));
        assert_eq!(record.moves[1], (Marker::Two, 1));
        assert_eq!(record.board.piece_count(), 7);
    }

    #[test]
    fn test_illegal_column_is_rejected() {
        let mut game = Game::new(
            scripted(Marker::One, &[0, 0, 0, 7]),
            scripted(Marker::Two, &[0, 0, 0]),
        );
        for _ in 0..6 {
            assert_eq!(game.step().unwrap(), None);
        }
        assert!(game.board().is_column_full(0));
        let err = game.step().unwrap_err();
        assert!(matches!(err, GameError::IllegalMove { column: 7, .. }));

        let mut game = Game::new(
            scripted(Marker::One, &[0, 0, 0, 0]),
            scripted(Marker::Two, &[0, 0, 0]),
        );
        for _ in 0..6 {
            game.step().unwrap();
        }
        let err = game.step().unwrap_err();
        match err {
            GameError::IllegalMove { player, column, legal } => {
                assert_eq!(player, "Player 1:human");
                assert_eq!(column, 0);
                assert_eq!(legal, vec![1, 2, 3, 4, 5, 6]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_player_errors_propagate() {
        let mut game = Game::new(scripted(Marker::One, &[]), scripted(Marker::Two, &[]));
        assert!(matches!(
            game.step(),
            Err(GameError::Player(PlayerError::EndOfInput))
        ));
    }

    #[test]
    fn test_random_games_finish_consistently() {
        for seed in 0..20 {
            let game = Game::new(
                Box::new(RandomPlayer::new(Marker::One, Some(seed))),
                Box::new(RandomPlayer::new(Marker::Two, Some(seed + 100))),
            );
            let record = game.play().unwrap();
            assert_eq!(record.moves.len(), record.board.piece_count());
            match record.outcome {
                GameOutcome::Winner(m) => {
                    assert_eq!(winner(&record.board), Some(m));
                    assert_eq!(record.moves.last().map(|&(mover, _)| mover), Some(m));
                }
                GameOutcome::Draw => {
                    assert!(record.board.is_full());
                    assert_eq!(winner(&record.board), None);
                }
            }
        }
    }

    #[test]
    fn test_stepping_finished_game_is_noop() {
        let mut game = Game::new(
            scripted(Marker::One, &[3, 3, 3, 3]),
            scripted(Marker::Two, &[4, 4, 4]),
        );
        while game.step().unwrap().is_none() {}
        let board = *game.board();
        assert_eq!(game.step().unwrap(), Some(GameOutcome::Winner(Marker::One)));
        assert_eq!(*game.board(), board);
    }

    #[test]
    fn test_alpha_beta_beats_random_player() {
        let mut wins = 0;
        for seed in 0..6 {
            let config = SearchConfig {
                depth: 2,
                seed: Some(seed),
                ..SearchConfig::default()
            };
            let game = Game::new(
                Box::new(AiPlayer::new(Marker::One, Strategy::AlphaBeta, config)),
                Box::new(RandomPlayer::new(Marker::Two, Some(seed))),
            );
            if game.play().unwrap().outcome == GameOutcome::Winner(Marker::One) {
                wins += 1;
            }
        }
        assert!(wins >= 4, "alpha-beta won only {wins} of 6 games");
    }
}
