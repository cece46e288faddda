//! Head-to-head engine matches for local tuning.
//!
//! Two `Engine` implementations play from the standard setup, optionally
//! after a seeded random opening so a series does not replay one game.
//! Breakthrough has no draws; `max_plies` only guards against a stalled
//! harness.

use std::time::Instant;

use chrono::{DateTime, Local};
use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info};

use crate::engines::engine_trait::Engine;
use crate::errors::{BreakthroughError, BreakthroughResult};
use crate::game_state::board_types::{Color, Move};
use crate::game_state::game_state::GameState;
use crate::interface::core_api::new_game;
use crate::move_generation::move_validator::all_moves;
use crate::rules::game_rules::{execute_move, is_game_over};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Win(Color),
    MaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, color: Color },
    MaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    /// Color placed on the bottom edge (the "human" side of the orientation).
    pub bottom_color: Color,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            opening_min_plies: 2,
            opening_max_plies: 6,
            bottom_color: Color::White,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub started_at: DateTime<Local>,
    pub final_state: GameState,
    pub opening_moves: Vec<Move>,
    pub played_moves: Vec<Move>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub unfinished: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} unfinished={} p1_avg_ms={:.3} p2_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.unfinished,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms
        )
    }
}

/// Play one seeded match. `engine_white` moves first.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    seed: u64,
    config: &MatchConfig,
) -> BreakthroughResult<MatchResult> {
    let started_at = Local::now();
    engine_white.new_game();
    engine_black.new_game();

    let mut state = new_game(config.bottom_color);
    let opening_moves = apply_seeded_random_opening(
        &mut state,
        seed,
        config.opening_min_plies,
        config.opening_max_plies,
    );

    let mut played_moves = Vec::new();
    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    let mut outcome = MatchOutcome::MaxPlies;
    for _ in 0..config.max_plies {
        if is_game_over(&mut state) {
            break;
        }

        let mover = state.current_player;
        let engine: &mut dyn Engine = match mover {
            Color::White => &mut *engine_white,
            Color::Black => &mut *engine_black,
        };

        let clock = Instant::now();
        let output = engine.choose_move(&state)?;
        let elapsed_ns = clock.elapsed().as_nanos();

        let mv = output
            .best_move
            .ok_or_else(|| BreakthroughError::NoMoveFromEngine(engine.name().to_owned()))?;
        if !execute_move(&mut state, mv.from, mv.to) {
            return Err(BreakthroughError::IllegalMove {
                from: mv.from,
                to: mv.to,
            });
        }
        debug!(%mover, %mv, "match ply");

        played_moves.push(mv);
        match mover {
            Color::White => {
                white_move_count += 1;
                white_total_time_ns += elapsed_ns;
            }
            Color::Black => {
                black_move_count += 1;
                black_total_time_ns += elapsed_ns;
            }
        }
    }

    if let Some(winner) = state.winner {
        outcome = MatchOutcome::Win(winner);
    } else if is_game_over(&mut state) {
        outcome = state.winner.map_or(MatchOutcome::MaxPlies, MatchOutcome::Win);
    }

    Ok(MatchResult {
        outcome,
        started_at,
        final_state: state,
        opening_moves,
        played_moves,
        white_move_count,
        black_move_count,
        white_total_time_ns,
        black_total_time_ns,
    })
}

/// Play `config.games` matches, alternating colors: player 1 is White in
/// even-numbered games.
pub fn play_engine_match_series<F1, F2>(
    player1: F1,
    player2: F2,
    config: MatchSeriesConfig,
) -> BreakthroughResult<MatchSeriesStats>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };

    for game_idx in 0..config.games {
        let seed = config.base_seed.wrapping_add(u64::from(game_idx));
        let player1_is_white = game_idx % 2 == 0;

        let mut p1 = player1();
        let mut p2 = player2();
        let result = if player1_is_white {
            play_engine_match(p1.as_mut(), p2.as_mut(), seed, &config.per_game)?
        } else {
            play_engine_match(p2.as_mut(), p1.as_mut(), seed, &config.per_game)?
        };

        let (p1_moves, p1_ns, p2_moves, p2_ns) = if player1_is_white {
            (
                result.white_move_count,
                result.white_total_time_ns,
                result.black_move_count,
                result.black_total_time_ns,
            )
        } else {
            (
                result.black_move_count,
                result.black_total_time_ns,
                result.white_move_count,
                result.white_total_time_ns,
            )
        };
        stats.player1_moves += p1_moves;
        stats.player1_total_time_ns += p1_ns;
        stats.player2_moves += p2_moves;
        stats.player2_total_time_ns += p2_ns;

        let series_outcome = match result.outcome {
            MatchOutcome::Win(color) => {
                let player1_color = if player1_is_white {
                    Color::White
                } else {
                    Color::Black
                };
                let player = if color == player1_color {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWin { player, color }
            }
            MatchOutcome::MaxPlies => {
                stats.unfinished += 1;
                SeriesOutcome::MaxPlies
            }
        };
        stats.outcomes.push(series_outcome);

        if config.verbose {
            info!(
                game = game_idx + 1,
                started_at = %result.started_at.format("%Y-%m-%d %H:%M:%S"),
                outcome = ?series_outcome,
                plies = result.played_moves.len() + result.opening_moves.len(),
                "match finished"
            );
        }
    }

    stats.player1_avg_move_time_ms = average_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms = average_ms(stats.player2_total_time_ns, stats.player2_moves);

    Ok(stats)
}

fn average_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        total_ns as f64 / f64::from(moves) / 1_000_000.0
    }
}

/// Play between `min_plies` and `max_plies` uniformly random moves.
fn apply_seeded_random_opening(
    state: &mut GameState,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> Vec<Move> {
    let mut rng = StdRng::seed_from_u64(seed);
    let plies = if max_plies > min_plies {
        rng.random_range(min_plies..=max_plies)
    } else {
        min_plies
    };

    let mut opening = Vec::with_capacity(usize::from(plies));
    for _ in 0..plies {
        if is_game_over(state) {
            break;
        }
        let moves = all_moves(state, state.current_player);
        let Some(mv) = moves.as_slice().choose(&mut rng).copied() else {
            break;
        };
        if execute_move(state, mv.from, mv.to) {
            opening.push(mv);
        }
    }
    opening
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_minimax::MinimaxEngine;
    use crate::engines::engine_random::RandomEngine;

    #[test]
    fn random_engines_finish_a_game() {
        let mut white = RandomEngine::seeded(1);
        let mut black = RandomEngine::seeded(2);
        let result = play_engine_match(&mut white, &mut black, 42, &MatchConfig::default())
            .expect("match should run");

        let MatchOutcome::Win(winner) = result.outcome else {
            panic!("a Breakthrough game always ends, got {:?}", result.outcome);
        };
        assert_eq!(result.final_state.winner, Some(winner));
        assert_eq!(
            result.final_state.move_history.len(),
            result.opening_moves.len() + result.played_moves.len()
        );
        assert!((2..=6).contains(&result.opening_moves.len()));
    }

    #[test]
    fn same_seed_same_opening() {
        let config = MatchConfig::default();
        let mut a = new_game(config.bottom_color);
        let mut b = new_game(config.bottom_color);
        let first = apply_seeded_random_opening(&mut a, 7, 2, 6);
        let second = apply_seeded_random_opening(&mut b, 7, 2, 6);
        assert_eq!(first, second);
        assert_eq!(a, b);
    }

    #[test]
    fn shallow_minimax_beats_random_mover() {
        let stats = play_engine_match_series(
            || Box::new(MinimaxEngine::new(2)) as Box<dyn Engine>,
            || Box::new(RandomEngine::seeded(5)) as Box<dyn Engine>,
            MatchSeriesConfig {
                games: 2,
                base_seed: 11,
                ..MatchSeriesConfig::default()
            },
        )
        .expect("series should run");

        assert_eq!(stats.outcomes.len(), 2);
        assert_eq!(stats.player1_wins + stats.player2_wins + stats.unfinished, 2);
        assert!(stats.player1_wins >= 1);
        assert!(stats.report().starts_with("games=2"));
    }
}
