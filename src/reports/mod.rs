// ===== alphaforge/src/reports/mod.rs =====
use alphaforge::alphabet::Alphabet;
use alphaforge::corpus::Corpus;
use alphaforge::optimizer::runner::OptimizationResult;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Table};

fn coverage_pct(score: u64, max_score: u64) -> f64 {
    if max_score == 0 {
        return 0.0;
    }
    score as f64 / max_score as f64 * 100.0
}

pub fn print_search_summary(result: &OptimizationResult, max_score: u64, elapsed_secs: f64) {
    println!("\n=== 🏆 FINAL RESULT ===");

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["Alphabet", "Score", "Max", "Coverage", "Iterations", "Time"]);
    table.add_row(vec![
        Cell::new(result.alphabet.to_string()),
        Cell::new(result.score).set_alignment(CellAlignment::Right),
        Cell::new(max_score).set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.2}%", coverage_pct(result.score, max_score)))
            .set_alignment(CellAlignment::Right),
        Cell::new(result.iterations).set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.1}s", elapsed_secs)).set_alignment(CellAlignment::Right),
    ]);
    println!("{table}");
}

pub fn print_score_audit(alphabet: &Alphabet, score: u64, max_score: u64, matched: &[bool]) {
    let matched_words = matched.iter().filter(|&&hit| hit).count();

    println!("\n🔎 === ALPHABET AUDIT === 🔎");

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["Alphabet", "Score", "Max", "Coverage", "Words matched"]);
    table.add_row(vec![
        Cell::new(alphabet.to_string()),
        Cell::new(score).set_alignment(CellAlignment::Right),
        Cell::new(max_score).set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.2}%", coverage_pct(score, max_score)))
            .set_alignment(CellAlignment::Right),
        Cell::new(format!("{}/{}", matched_words, matched.len()))
            .set_alignment(CellAlignment::Right),
    ]);
    println!("{table}");
}

pub fn print_word_breakdown(corpus: &Corpus, matched: &[bool]) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["Word", "Weight", "Matched"]);

    for ((word, &weight), &hit) in corpus.words().iter().zip(corpus.weights()).zip(matched) {
        table.add_row(vec![
            Cell::new(word),
            Cell::new(weight).set_alignment(CellAlignment::Right),
            Cell::new(if hit { "yes" } else { "-" }).set_alignment(CellAlignment::Center),
        ]);
    }
    println!("{table}");
}
