// ===== alphaforge/benches/scoring_bench.rs =====
use alphaforge::alphabet::Alphabet;
use alphaforge::corpus::Corpus;
use alphaforge::optimizer::SearchState;
use alphaforge::scorer::Scorer;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::sync::Arc;

fn setup_corpus() -> Corpus {
    // Deterministic synthetic wordlist, roughly dictionary-shaped lengths
    let mut rng = fastrand::Rng::with_seed(42);
    let mut raw = Vec::with_capacity(4000);
    for _ in 0..4000 {
        let len = rng.usize(3..9);
        let word: String = (0..len).map(|_| (b'A' + rng.u8(0..26)) as char).collect();
        raw.push(word);
    }
    Corpus::build(&raw).expect("corpus should build")
}

fn bench_total_score(c: &mut Criterion) {
    let scorer = Scorer::new(setup_corpus());
    let alphabet = Alphabet::identity();

    c.bench_function("total_score_4k_words", |b| {
        b.iter(|| black_box(scorer.total_score(black_box(&alphabet))))
    });
}

fn bench_search_step(c: &mut Criterion) {
    let scorer = Arc::new(Scorer::new(setup_corpus()));
    let mut state = SearchState::new(scorer, Some(7), 100, 10);

    c.bench_function("search_step", |b| b.iter(|| black_box(state.step())));
}

criterion_group!(benches, bench_total_score, bench_search_step);
criterion_main!(benches);
