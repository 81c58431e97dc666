//! Benchmark command
//!
//! Plays random games against the engine and measures transition latency.

use crate::core::WordIndex;
use crate::engine::{Engine, Position, WordBuilderState};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Configuration of a benchmark run
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    pub games: usize,
    /// Transitions per game before it is abandoned
    pub max_steps: usize,
    pub seed: u64,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            games: 50,
            max_steps: 12,
            seed: 42,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub games: usize,
    pub transitions: usize,
    /// Transitions whose answer was a complete word
    pub words_formed: usize,
    /// States where no letter could be added on either side
    pub dead_ends: usize,
    pub average_latency: Duration,
    pub worst_latency: Duration,
    pub duration: Duration,
    pub transitions_per_second: f64,
}

/// Play `config.games` random games
///
/// Each step picks a random candidate letter and side; on a dead end a random
/// letter is removed instead. A game stops after `max_steps` transitions or
/// when the empty answer has no candidates at all.
pub fn run_benchmark<D: WordIndex + ?Sized>(engine: &Engine<'_, D>, config: &BenchmarkConfig) -> BenchmarkResult {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let progress = if config.show_progress {
        ProgressBar::new(config.games as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        progress.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut transitions = 0;
    let mut words_formed = 0;
    let mut dead_ends = 0;
    let mut total_latency = Duration::ZERO;
    let mut worst_latency = Duration::ZERO;

    for game in 0..config.games {
        let mut state = engine.reset();

        for _ in 0..config.max_steps {
            let moves = candidate_moves(&state);
            let started = Instant::now();
            let transition = if let Some(&(letter, position)) = moves.choose(&mut rng) {
                engine.add_letter_at(&state, letter, position)
            } else {
                dead_ends += 1;
                let len = state.answer().chars().count();
                if len == 0 {
                    break;
                }
                engine.remove_letter(&state, rng.random_range(0..len))
            };
            let latency = started.elapsed();

            // Moves come from the state's own sets, so a rejection never happens
            let Ok(transition) = transition else { break };

            transitions += 1;
            total_latency += latency;
            worst_latency = worst_latency.max(latency);
            if transition.state.is_valid_word() {
                words_formed += 1;
            }
            state = transition.state;
        }

        progress.set_message(format!("game {} | {transitions} transitions", game + 1));
        progress.inc(1);
    }

    progress.finish_and_clear();
    let duration = start.elapsed();

    BenchmarkResult {
        games: config.games,
        transitions,
        words_formed,
        dead_ends,
        average_latency: if transitions == 0 {
            Duration::ZERO
        } else {
            total_latency / transitions as u32
        },
        worst_latency,
        duration,
        transitions_per_second: transitions as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

/// Every legal single-letter addition, in a stable order
fn candidate_moves(state: &WordBuilderState) -> Vec<(char, Position)> {
    [Position::Prefix, Position::Suffix]
        .into_iter()
        .flat_map(|position| {
            state
                .letters_for(position)
                .sorted()
                .into_iter()
                .map(move |letter| (letter, position))
        })
        .collect()
}
