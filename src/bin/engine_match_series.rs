//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --games 20 --p1-depth 3 --p2-depth 1 --verbose`

use clap::Parser;
use tracing_subscriber::EnvFilter;

use breakthrough::engines::engine_minimax::MinimaxEngine;
use breakthrough::engines::engine_random::RandomEngine;
use breakthrough::engines::engine_trait::Engine;
use breakthrough::errors::BreakthroughResult;
use breakthrough::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

#[derive(Debug, Parser)]
#[command(about = "Play a series of engine-vs-engine Breakthrough games")]
struct Args {
    #[arg(long, default_value_t = 10)]
    games: u16,

    #[arg(long, default_value_t = 1234)]
    seed: u64,

    /// Player 1 minimax depth.
    #[arg(long, default_value_t = 3)]
    p1_depth: u8,

    /// Player 2 minimax depth; 0 plays uniformly random moves.
    #[arg(long, default_value_t = 2)]
    p2_depth: u8,

    #[arg(long, default_value_t = 300)]
    max_plies: u16,

    #[arg(short, long)]
    verbose: bool,
}

fn engine_for(depth: u8, seed: u64) -> Box<dyn Engine> {
    if depth == 0 {
        Box::new(RandomEngine::seeded(seed))
    } else {
        Box::new(MinimaxEngine::new(depth))
    }
}

fn main() -> BreakthroughResult<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let (p1_depth, p2_depth, seed) = (args.p1_depth, args.p2_depth, args.seed);
    let stats = play_engine_match_series(
        || engine_for(p1_depth, seed),
        || engine_for(p2_depth, seed.wrapping_add(1)),
        MatchSeriesConfig {
            games: args.games,
            base_seed: seed,
            per_game: MatchConfig {
                max_plies: args.max_plies,
                ..MatchConfig::default()
            },
            verbose: args.verbose,
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
