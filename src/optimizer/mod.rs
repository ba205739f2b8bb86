// ===== alphaforge/src/optimizer/mod.rs =====
pub mod runner;
pub mod tracker;

use crate::alphabet::{Alphabet, ALPHABET_LEN};
use crate::scorer::Scorer;
use std::sync::Arc;

/// Result of one evaluated swap.
#[derive(Debug, Clone, Copy)]
pub struct StepOutcome {
    pub score: u64,
    pub accepted: bool,
}

/// One hill-climbing search over alphabet permutations.
///
/// Owns the current alphabet exclusively and mutates it in place; the
/// corpus behind `scorer` is shared read-only. `local_best` anchors the
/// strict-improvement acceptance rule and resets to zero on every plateau
/// kick, so the climb can re-grow from wherever the perturbation landed.
pub struct SearchState {
    pub scorer: Arc<Scorer>,
    pub alphabet: Alphabet,
    pub local_best: u64,
    pub stagnation: u32,
    pub stagnation_limit: u32,
    pub perturbation_swaps: u32,
    pub rng: fastrand::Rng,
}

impl SearchState {
    pub fn new(
        scorer: Arc<Scorer>,
        seed: Option<u64>,
        stagnation_limit: u32,
        perturbation_swaps: u32,
    ) -> Self {
        let mut rng = if let Some(s) = seed {
            fastrand::Rng::with_seed(s)
        } else {
            fastrand::Rng::new()
        };

        let alphabet = Alphabet::shuffled(&mut rng);

        Self {
            scorer,
            alphabet,
            local_best: 0,
            stagnation: 0,
            stagnation_limit,
            perturbation_swaps,
            rng,
        }
    }

    /// One propose/evaluate/accept-or-revert iteration.
    ///
    /// Proposes a uniform random swap (a self-swap is a legal no-op move),
    /// scores the whole corpus, and accepts only strict improvements over
    /// `local_best`. Rejected swaps are reverted and counted; hitting the
    /// stagnation limit triggers the unscored plateau kick before the next
    /// iteration.
    pub fn step(&mut self) -> StepOutcome {
        let p1 = self.rng.usize(0..ALPHABET_LEN);
        let p2 = self.rng.usize(0..ALPHABET_LEN);

        self.alphabet.swap(p1, p2);
        let score = self.scorer.total_score(&self.alphabet);

        let accepted = score > self.local_best;
        if accepted {
            self.local_best = score;
            self.stagnation = 0;
        } else {
            self.alphabet.swap(p1, p2);
            self.stagnation += 1;
        }

        if self.stagnation >= self.stagnation_limit {
            self.perturb();
        }

        StepOutcome { score, accepted }
    }

    /// Plateau escape: forget the local anchor and batter the alphabet with
    /// unscored random swaps. The alphabet is perturbed, not re-rolled, so
    /// the next climb starts near the old optimum.
    pub fn perturb(&mut self) {
        self.stagnation = 0;
        self.local_best = 0;
        for _ in 0..self.perturbation_swaps {
            let p1 = self.rng.usize(0..ALPHABET_LEN);
            let p2 = self.rng.usize(0..ALPHABET_LEN);
            self.alphabet.swap(p1, p2);
        }
    }
}
