//! Connect4-Search: play Connect Four against a search engine.
//!
//! ## Usage
//!
//! - `connect4-search` - Show a demo
//! - `connect4-search play --player1 human --player2 ai` - Play a game
//! - `connect4-search demo` - Run the search demo

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use connect4_search::alphabeta::AlphaBetaSearch;
use connect4_search::board::{Board, Marker};
use connect4_search::constants::DEFAULT_DEPTH;
use connect4_search::expectimax::ExpectimaxSearch;
use connect4_search::game::{Game, GameOutcome};
use connect4_search::player::{PlayerKind, make_player};
use connect4_search::search::{ChanceBranching, MoveSearch, SearchConfig, Strategy};

/// Connect4-Search: Connect Four with alpha-beta and expectimax players
#[derive(Parser)]
#[command(name = "connect4-search")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log filter used when RUST_LOG is not set (e.g. "info", "debug")
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game between two players
    Play(PlayArgs),
    /// Run a simple demo of both search strategies
    Demo,
}

#[derive(clap::Args)]
struct PlayArgs {
    /// Player one (moves first)
    #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
    player1: PlayerKind,

    /// Player two
    #[arg(long, value_enum, default_value_t = PlayerKind::Ai)]
    player2: PlayerKind,

    /// Search strategy used by AI players
    #[arg(long, value_enum, default_value_t = Strategy::AlphaBeta)]
    strategy: Strategy,

    /// Search depth
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: usize,

    /// Which columns expectimax chance nodes sum over
    #[arg(long, value_enum, default_value_t = ChanceBranching::LegalOnly)]
    chance_branching: ChanceBranching,

    /// Seed for AI fallback moves and random players
    #[arg(long)]
    seed: Option<u64>,
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Some(Commands::Play(args)) => run_game(args),
        Some(Commands::Demo) | None => {
            run_demo();
            Ok(())
        }
    }
}

fn run_game(args: PlayArgs) -> Result<()> {
    let config = SearchConfig {
        depth: args.depth,
        chance_branching: args.chance_branching,
        seed: args.seed,
    };
    config.validate()?;
    info!(?config, strategy = ?args.strategy, "starting game");

    // Offset the second player's seed so two seeded players differ.
    let config_two = SearchConfig {
        seed: config.seed.map(|s| s.wrapping_add(1)),
        ..config
    };
    let mut game = Game::new(
        make_player(args.player1, Marker::One, args.strategy, config),
        make_player(args.player2, Marker::Two, args.strategy, config_two),
    );

    println!("{}", game.board());
    let outcome = loop {
        let mover = game.to_move();
        let name = game.player_name(mover);
        let result = game.step()?;
        if let Some(&(_, col)) = game.moves().last() {
            println!("{name} plays column {col}");
        }
        println!("{}", game.board());
        if let Some(outcome) = result {
            break outcome;
        }
    };

    match outcome {
        GameOutcome::Winner(m) => println!("{} wins!", game.player_name(m)),
        GameOutcome::Draw => println!("Draw: the board is full."),
    }
    Ok(())
}

fn run_demo() {
    println!("Connect4-Search: alpha-beta and expectimax demo\n");

    let mut board = Board::new();
    board.apply_move(3, Marker::One);
    board.apply_move(3, Marker::Two);
    board.apply_move(2, Marker::One);
    println!("{board}");

    let config = SearchConfig::default();

    let mut alphabeta = AlphaBetaSearch::new(Marker::Two, config);
    let col = alphabeta.choose_move(&board);
    let stats = alphabeta.stats();
    println!(
        "Alpha-beta (depth {}): column {col} ({} nodes, {} prunes)",
        config.depth, stats.nodes, stats.prunes
    );

    let mut expectimax = ExpectimaxSearch::new(Marker::Two, config);
    let col = expectimax.choose_move(&board);
    let stats = expectimax.stats();
    println!(
        "Expectimax (depth {}): column {col} ({} nodes)",
        config.depth, stats.nodes
    );
}
