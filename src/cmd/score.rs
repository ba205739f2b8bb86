use crate::reports;
use alphaforge::alphabet::Alphabet;
use alphaforge::scorer::Scorer;
use clap::Args;
use std::process;
use std::sync::Arc;
use tracing::error;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[arg(short, long)]
    pub alphabet: String,

    #[arg(long, default_value_t = false)]
    pub breakdown: bool,
}

pub fn run(args: ScoreArgs, scorer: Arc<Scorer>) {
    let alphabet: Alphabet = args.alphabet.parse().unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    let matched = scorer.matched_flags(&alphabet);
    let score = scorer.total_score(&alphabet);

    reports::print_score_audit(&alphabet, score, scorer.max_score(), &matched);

    if args.breakdown {
        reports::print_word_breakdown(scorer.corpus(), &matched);
    }
}
