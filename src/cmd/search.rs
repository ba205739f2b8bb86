use crate::reports;
use alphaforge::alphabet::Alphabet;
use alphaforge::config::Config;
use alphaforge::optimizer::runner::{OptimizationOptions, Optimizer, ProgressCallback};
use alphaforge::scorer::Scorer;
use clap::Args;
use serde::Serialize;
use std::process;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short = 'T', long)]
    pub time: Option<u64>,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    #[arg(short = 't', long)]
    pub target: Option<u64>,

    #[arg(long)]
    pub json: Option<String>,
}

struct LogReporter;

impl ProgressCallback for LogReporter {
    fn on_new_best(&self, iteration: u64, score: u64, alphabet: &Alphabet) -> bool {
        info!("🏆 New best: {} {} (iteration {})", alphabet, score, iteration);
        true
    }
}

#[derive(Serialize)]
struct SearchSummary {
    alphabet: String,
    score: u64,
    max_score: u64,
    iterations: u64,
    elapsed_secs: f64,
}

pub fn run(args: SearchArgs, scorer: Arc<Scorer>, debug: bool) {
    let mut options = OptimizationOptions::from(&args.config);
    options.max_time = args.time.map(Duration::from_secs);
    options.target_score = args.target;

    if let Some(target) = args.target {
        if target > scorer.max_score() {
            warn!(
                "⚠️  Target score {} exceeds the total corpus weight {}; it can never be reached.",
                target,
                scorer.max_score()
            );
        }
    }

    info!(
        "🔎 Searching with {} worker(s), stagnation limit {}, {} kick swaps",
        options.workers, options.stagnation_limit, options.perturbation_swaps
    );

    let optimizer = Optimizer::new(scorer.clone(), options).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    let started = Instant::now();
    let result = optimizer.run(args.seed, LogReporter);
    let elapsed = started.elapsed().as_secs_f64();

    if debug {
        let ips = result.iterations as f64 / elapsed.max(1e-9) / 1_000_000.0;
        info!(
            "   {} iterations in {:.1}s ({:.2}M/s)",
            result.iterations, elapsed, ips
        );
    }

    reports::print_search_summary(&result, scorer.max_score(), elapsed);

    if let Some(path) = args.json {
        let summary = SearchSummary {
            alphabet: result.alphabet.to_string(),
            score: result.score,
            max_score: scorer.max_score(),
            iterations: result.iterations,
            elapsed_secs: elapsed,
        };
        match serde_json::to_string_pretty(&summary) {
            Ok(body) => {
                if let Err(e) = std::fs::write(&path, body) {
                    error!("❌ Could not write result to '{}': {}", path, e);
                } else {
                    info!("💾 Result written to {}", path);
                }
            }
            Err(e) => error!("❌ Could not serialize result: {}", e),
        }
    }
}
