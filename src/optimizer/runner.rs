use crate::alphabet::Alphabet;
use crate::config::Config;
use crate::error::{AfResult, AlphaForgeError};
use crate::optimizer::tracker::BestTracker;
use crate::optimizer::SearchState;
use crate::scorer::Scorer;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub struct OptimizationOptions {
    pub workers: usize,
    pub stagnation_limit: u32,
    pub perturbation_swaps: u32,
    pub max_iterations: u64,
    pub max_time: Option<Duration>,
    pub target_score: Option<u64>,
}

impl From<&Config> for OptimizationOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            workers: cfg.search.workers,
            stagnation_limit: cfg.search.stagnation_limit,
            perturbation_swaps: cfg.search.perturbation_swaps,
            max_iterations: cfg.search.max_iterations,
            max_time: None, // Set manually if needed
            target_score: None,
        }
    }
}

pub struct OptimizationResult {
    pub score: u64,
    pub alphabet: Alphabet,
    pub iterations: u64,
}

/// Receives every new global best during a search.
/// Boolean return value indicates if the search should continue (true) or
/// abort (false).
pub trait ProgressCallback: Send + Sync {
    fn on_new_best(&self, iteration: u64, score: u64, alphabet: &Alphabet) -> bool;
}

struct SharedProgress<'a, CB: ProgressCallback> {
    callback: &'a CB,
    published_best: AtomicU64,
    abort: AtomicBool,
}

pub struct Optimizer {
    scorer: Arc<Scorer>,
    options: OptimizationOptions,
}

impl Optimizer {
    pub fn new(scorer: Arc<Scorer>, options: OptimizationOptions) -> AfResult<Self> {
        if options.workers == 0 {
            return Err(AlphaForgeError::Config(
                "workers must be at least 1".to_string(),
            ));
        }
        Ok(Self { scorer, options })
    }

    /// Runs until a stop condition fires and returns the best result seen.
    ///
    /// With one worker this is the exact sequential reference loop. With
    /// more, each worker runs an independent seeded search (worker i gets
    /// `seed + i`) over the shared corpus and the results reduce by max;
    /// the only cross-worker traffic is the published-best watermark that
    /// keeps the callback's event stream monotonic, and the abort flag.
    pub fn run<CB: ProgressCallback>(&self, seed: Option<u64>, callback: CB) -> OptimizationResult {
        let shared = SharedProgress {
            callback: &callback,
            published_best: AtomicU64::new(0),
            abort: AtomicBool::new(false),
        };

        if self.options.workers == 1 {
            return self.run_worker(seed, &shared);
        }

        (0..self.options.workers)
            .into_par_iter()
            .map(|i| self.run_worker(seed.map(|s| s + i as u64), &shared))
            .max_by_key(|result| result.score)
            .expect("at least one worker")
    }

    fn run_worker<CB: ProgressCallback>(
        &self,
        seed: Option<u64>,
        shared: &SharedProgress<'_, CB>,
    ) -> OptimizationResult {
        let opts = &self.options;
        let mut state = SearchState::new(
            self.scorer.clone(),
            seed,
            opts.stagnation_limit,
            opts.perturbation_swaps,
        );
        let mut tracker = BestTracker::new(state.alphabet);

        let started = Instant::now();
        let mut iterations = 0u64;

        while iterations < opts.max_iterations {
            if shared.abort.load(Ordering::Relaxed) {
                break;
            }
            if let Some(limit) = opts.max_time {
                if started.elapsed() >= limit {
                    break;
                }
            }

            let outcome = state.step();
            iterations += 1;

            if outcome.accepted && tracker.record(outcome.score, &state.alphabet) {
                let published = shared.published_best.fetch_max(outcome.score, Ordering::Relaxed);
                if outcome.score > published
                    && !shared
                        .callback
                        .on_new_best(iterations, outcome.score, &state.alphabet)
                {
                    shared.abort.store(true, Ordering::Relaxed);
                    break;
                }
            }

            if let Some(target) = opts.target_score {
                if tracker.best_score() >= target {
                    shared.abort.store(true, Ordering::Relaxed);
                    break;
                }
            }
        }

        OptimizationResult {
            score: tracker.best_score(),
            alphabet: *tracker.best_alphabet(),
            iterations,
        }
    }
}
