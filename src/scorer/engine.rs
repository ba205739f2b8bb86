// ===== alphaforge/src/scorer/engine.rs =====
use crate::alphabet::Alphabet;
use crate::corpus::{Corpus, EncodedWord};

/// Single left-to-right pass over the alphabet with a running pointer into
/// the word's distinct-letter sequence. A present letter must sit exactly
/// at the pointer or the word fails immediately; 26 array lookups worst
/// case, no backtracking. Correct because encoded positions are contiguous
/// `0..k`.
#[inline(always)]
pub fn word_matches(word: &EncodedWord, alphabet: &Alphabet) -> bool {
    let mut expect = 0i8;
    for &letter in alphabet.letters() {
        let slot = word.slot(letter);
        if slot == EncodedWord::ABSENT {
            continue;
        }
        if slot != expect {
            return false;
        }
        expect += 1;
    }
    true
}

pub fn total_score(corpus: &Corpus, alphabet: &Alphabet) -> u64 {
    let mut sum = 0u64;
    for (word, &weight) in corpus.encodings().iter().zip(corpus.weights()) {
        if word_matches(word, alphabet) {
            sum += weight as u64;
        }
    }
    sum
}

pub fn matched_flags(corpus: &Corpus, alphabet: &Alphabet) -> Vec<bool> {
    corpus
        .encodings()
        .iter()
        .map(|word| word_matches(word, alphabet))
        .collect()
}
