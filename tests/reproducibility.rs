use alphaforge::alphabet::Alphabet;
use alphaforge::corpus::Corpus;
use alphaforge::optimizer::runner::{OptimizationOptions, Optimizer, ProgressCallback};
use alphaforge::scorer::Scorer;
use std::sync::Arc;

struct Quiet;

impl ProgressCallback for Quiet {
    fn on_new_best(&self, _iteration: u64, _score: u64, _alphabet: &Alphabet) -> bool {
        true
    }
}

fn wordlist() -> Vec<String> {
    [
        "THE", "BE", "TO", "OF", "AND", "IN", "THAT", "HAVE", "IT", "FOR", "NOT", "ON", "WITH",
        "HE", "AS", "YOU", "DO", "AT", "THIS", "BUT", "HIS", "BY", "FROM", "THEY", "WE", "SAY",
        "HER", "SHE", "OR", "AN", "WILL", "MY", "ONE", "ALL", "WOULD", "THERE", "THEIR",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect()
}

fn run_once(seed: u64) -> (u64, String, u64) {
    let corpus = Corpus::build(&wordlist()).expect("corpus should build");
    let scorer = Arc::new(Scorer::new(corpus));
    let options = OptimizationOptions {
        workers: 1,
        stagnation_limit: 100,
        perturbation_swaps: 10,
        max_iterations: 20_000,
        max_time: None,
        target_score: None,
    };

    let optimizer = Optimizer::new(scorer, options).unwrap();
    let result = optimizer.run(Some(seed), Quiet);
    (result.score, result.alphabet.to_string(), result.iterations)
}

#[test]
fn same_seed_reproduces_the_same_search() {
    let a = run_once(12345);
    let b = run_once(12345);
    assert_eq!(a, b, "seeded search is not reproducible");
}

#[test]
fn any_seed_stays_within_the_weight_bound() {
    let corpus = Corpus::build(&wordlist()).unwrap();
    let max = corpus.total_weight();

    for seed in 0..5 {
        let (score, rendered, _) = run_once(seed);
        assert!(score <= max, "seed {} scored {} over bound {}", seed, score, max);
        let reparsed: Alphabet = rendered.parse().expect("result is a permutation");
        assert_eq!(reparsed.to_string(), rendered);
    }
}
