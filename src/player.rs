//! Player adapters: everything that can hand the game loop a column.
//!
//! - [`HumanPlayer`] reads a column from a text prompt and re-prompts until it
//!   gets a legal one.
//! - [`RandomPlayer`] picks uniformly among the legal columns.
//! - [`AiPlayer`] delegates to one of the search strategies.

use std::io::{self, BufRead, Write};

use crate::alphabeta::AlphaBetaSearch;
use crate::board::{Board, Marker};
use crate::error::PlayerError;
use crate::expectimax::ExpectimaxSearch;
use crate::search::{MoveSearch, SearchConfig, Strategy};

/// Kind of player selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PlayerKind {
    Human,
    Random,
    Ai,
}

impl PlayerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PlayerKind::Human => "human",
            PlayerKind::Random => "random",
            PlayerKind::Ai => "ai",
        }
    }
}

pub trait Player {
    /// Pick a column for the current position.
    fn choose_move(&mut self, board: &Board) -> Result<usize, PlayerError>;

    fn marker(&self) -> Marker;

    fn kind(&self) -> PlayerKind;

    /// Display name, e.g. `Player 1:ai`.
    fn name(&self) -> String {
        format!("Player {}:{}", self.marker().value(), self.kind().as_str())
    }
}

pub struct RandomPlayer {
    marker: Marker,
    rng: fastrand::Rng,
}

impl RandomPlayer {
    pub fn new(marker: Marker, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Self { marker, rng }
    }
}

impl Player for RandomPlayer {
    fn choose_move(&mut self, board: &Board) -> Result<usize, PlayerError> {
        let legal = board.legal_moves();
        self.rng
            .choice(legal.iter().copied())
            .ok_or(PlayerError::NoLegalMoves)
    }

    fn marker(&self) -> Marker {
        self.marker
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Random
    }
}

/// A human at a text prompt.
pub struct HumanPlayer<R, W> {
    marker: Marker,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(marker: Marker, input: R, output: W) -> Self {
        Self {
            marker,
            input,
            output,
        }
    }
}

impl HumanPlayer<io::StdinLock<'static>, io::Stdout> {
    /// A human reading from stdin and prompting on stdout.
    pub fn stdio(marker: Marker) -> Self {
        Self::new(marker, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn choose_move(&mut self, board: &Board) -> Result<usize, PlayerError> {
        let legal = board.legal_moves();
        if legal.is_empty() {
            return Err(PlayerError::NoLegalMoves);
        }

        loop {
            write!(self.output, "Enter your move: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PlayerError::EndOfInput);
            }

            match line.trim().parse::<usize>() {
                Ok(col) if legal.contains(&col) => return Ok(col),
                Ok(col) => writeln!(self.output, "Column {col} unavailable, choose from: {legal:?}")?,
                Err(_) => writeln!(self.output, "Not a column number, choose from: {legal:?}")?,
            }
        }
    }

    fn marker(&self) -> Marker {
        self.marker
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }
}

/// A search-driven player.
pub struct AiPlayer {
    search: Box<dyn MoveSearch>,
    strategy: Strategy,
}

impl AiPlayer {
    pub fn new(marker: Marker, strategy: Strategy, config: SearchConfig) -> Self {
        let search: Box<dyn MoveSearch> = match strategy {
            Strategy::AlphaBeta => Box::new(AlphaBetaSearch::new(marker, config)),
            Strategy::Expectimax => Box::new(ExpectimaxSearch::new(marker, config)),
        };
        Self { search, strategy }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl Player for AiPlayer {
    fn choose_move(&mut self, board: &Board) -> Result<usize, PlayerError> {
        if board.legal_moves().is_empty() {
            return Err(PlayerError::NoLegalMoves);
        }
        Ok(self.search.choose_move(board))
    }

    fn marker(&self) -> Marker {
        self.search.player()
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Ai
    }
}

/// Build a boxed player of the given kind. Humans use stdin/stdout.
pub fn make_player(
    kind: PlayerKind,
    marker: Marker,
    strategy: Strategy,
    config: SearchConfig,
) -> Box<dyn Player> {
    match kind {
        PlayerKind::Human => Box::new(HumanPlayer::stdio(marker)),
        PlayerKind::Random => Box::new(RandomPlayer::new(marker, config.seed)),
        PlayerKind::Ai => Box::new(AiPlayer::new(marker, strategy, config)),
    }
}
