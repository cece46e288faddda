//! Terminal Breakthrough: play against the minimax engine.
//!
//! Enter moves as `a2a3` (or `a2-a3`). `moves a2` lists the destinations of a
//! piece, `quit` leaves the game.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use breakthrough::engines::ai_worker::AiWorker;
use breakthrough::game_state::board_types::{Color, Square};
use breakthrough::game_state::game_state::GameState;
use breakthrough::interface::core_api::{is_over, new_game, square_moves, try_apply_move, winner};
use breakthrough::interface::difficulty::{Difficulty, SearchConfig};
use breakthrough::search::search_events::SearchEvent;
use breakthrough::utils::metrics_report::format_report;
use breakthrough::utils::render_game_state::render_game_state;
use breakthrough::utils::square_notation::parse_move;

const POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum HumanSide {
    White,
    Black,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Preset {
    Easy,
    Medium,
    Hard,
}

impl From<Preset> for Difficulty {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Easy => Difficulty::Easy,
            Preset::Medium => Difficulty::Medium,
            Preset::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "breakthrough", about = "Play Breakthrough against a minimax engine")]
struct Cli {
    /// Engine search depth (1-6). Overrides --difficulty.
    #[arg(long)]
    depth: Option<u8>,

    #[arg(long, value_enum, default_value_t = Preset::Medium)]
    difficulty: Preset,

    /// Which color you play. White always moves first.
    #[arg(long, value_enum, default_value_t = HumanSide::Random)]
    human: HumanSide,

    /// Seed for the random color choice.
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter directive, e.g. `info` or `breakthrough=debug`.
    #[arg(long, default_value = "warn")]
    log: String,
}

enum Command {
    Play(Square, Square),
    Moves(Square),
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
        return Ok(Command::Quit);
    }
    if let Some(square) = line.strip_prefix("moves ") {
        let from: Square = square.parse().map_err(|e| format!("{e}"))?;
        return Ok(Command::Moves(from));
    }
    let mv = parse_move(line).map_err(|e| format!("{e}"))?;
    Ok(Command::Play(mv.from, mv.to))
}

fn choose_human(side: HumanSide, seed: Option<u64>) -> Color {
    match side {
        HumanSide::White => Color::White,
        HumanSide::Black => Color::Black,
        HumanSide::Random => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            if rng.random_bool(0.5) {
                Color::White
            } else {
                Color::Black
            }
        }
    }
}

fn engine_turn(state: &mut GameState, depth: u8) -> Result<(), Box<dyn Error>> {
    let engine = state.orientation.engine();
    println!("Engine ({engine}) is thinking...");

    let mut handle = AiWorker::spawn(state, engine, depth);
    let mut considered = 0usize;
    let report = loop {
        for event in handle.progress().try_iter() {
            if let SearchEvent::MoveConsidered(mv) = event {
                considered += 1;
                debug!(%mv, considered, "move considered");
            }
        }
        if let Some(report) = handle.try_result()? {
            break report;
        }
        thread::sleep(POLL_INTERVAL);
    };

    println!("{}", format_report(&report));
    let Some(mv) = report.best_move else {
        warn!("engine found no move");
        return Ok(());
    };
    try_apply_move(state, mv.from, mv.to)?;
    println!("Engine plays {mv}");
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log)),
        )
        .with_writer(io::stderr)
        .init();

    let config = match cli.depth {
        Some(depth) => SearchConfig::clamped(depth),
        None => SearchConfig::clamped(Difficulty::from(cli.difficulty).depth()),
    };
    let human = choose_human(cli.human, cli.seed);
    let mut state = new_game(human);

    info!(%human, depth = config.depth, "new game");
    println!(
        "You play {human}. Difficulty: {}. White moves first.",
        config.difficulty()
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !is_over(&mut state) {
        println!("\n{}\n", render_game_state(&state));

        if state.current_player != human {
            engine_turn(&mut state, config.depth)?;
            continue;
        }

        print!("{human} to move> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Quit) => return Ok(()),
            Ok(Command::Moves(from)) => {
                let targets: Vec<String> = square_moves(&state, from.row as i8, from.col as i8)
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                if targets.is_empty() {
                    println!("No moves from {from}");
                } else {
                    println!("{from}: {}", targets.join(" "));
                }
            }
            Ok(Command::Play(from, to)) => {
                if let Err(err) = try_apply_move(&mut state, from, to) {
                    println!("{err}");
                }
            }
            Err(err) => println!("{err}"),
        }
    }

    println!("\n{}\n", render_game_state(&state));
    match winner(&state) {
        Some(color) if color == human => println!("{color} wins. Well played!"),
        Some(color) => println!("{color} wins. The engine takes this one."),
        None => println!("Game ended without a winner."),
    }
    Ok(())
}
