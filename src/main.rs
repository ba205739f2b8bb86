// ===== alphaforge/src/main.rs =====
use alphaforge::corpus::{loader, Corpus};
use alphaforge::scorer::Scorer;
use clap::{Parser, Subcommand};
use std::process;
use std::sync::Arc;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "data/english_words.txt")]
    words: String,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Search(cmd::search::SearchArgs),
    Score(cmd::score::ScoreArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    info!("🚀 Initializing AlphaForge...");
    info!("📖 Loading wordlist: {}", cli.words);

    let raw_words = loader::load_wordlist(&cli.words).unwrap_or_else(|e| {
        error!("❌ Could not read wordlist '{}': {}", cli.words, e);
        process::exit(1);
    });

    let corpus = Corpus::build(&raw_words).unwrap_or_else(|e| {
        error!("❌ FATAL ERROR BUILDING CORPUS: {}", e);
        process::exit(1);
    });

    info!(
        "   {} raw lines -> {} unique words (total weight {})",
        raw_words.len(),
        corpus.len(),
        corpus.total_weight()
    );

    let scorer = Arc::new(Scorer::new(corpus));

    match cli.command {
        Commands::Search(args) => cmd::search::run(args, scorer, cli.debug),
        Commands::Score(args) => cmd::score::run(args, scorer),
    }
}
