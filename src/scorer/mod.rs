pub mod engine;

use crate::alphabet::Alphabet;
use crate::corpus::Corpus;

/// Read-only scoring facade over an immutable corpus.
///
/// Pure integer lookups, no interior state: one `Scorer` can serve any
/// number of concurrent evaluations as long as each caller scores its own
/// alphabet snapshot.
pub struct Scorer {
    corpus: Corpus,
}

impl Scorer {
    pub fn new(corpus: Corpus) -> Self {
        Self { corpus }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Weighted sum over all words matching `alphabet`.
    #[inline(always)]
    pub fn total_score(&self, alphabet: &Alphabet) -> u64 {
        engine::total_score(&self.corpus, alphabet)
    }

    /// Per-word match mask, in corpus order. Used by the audit report.
    pub fn matched_flags(&self, alphabet: &Alphabet) -> Vec<bool> {
        engine::matched_flags(&self.corpus, alphabet)
    }

    /// Upper bound on any achievable score: the total corpus weight.
    pub fn max_score(&self) -> u64 {
        self.corpus.total_weight()
    }
}
