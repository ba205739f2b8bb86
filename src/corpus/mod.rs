// ===== alphaforge/src/corpus/mod.rs =====
pub mod loader;

use crate::alphabet::{letter_char, letter_index, ALPHABET_LEN};
use crate::error::{AfResult, AlphaForgeError};
use std::collections::BTreeMap;

/// Per-letter position encoding of a canonical word.
///
/// Slot `c` holds the zero-based position of letter `c` within the word's
/// left-to-right distinct-letter sequence, or `ABSENT` when the letter does
/// not occur. The occupied slots of any constructible value are exactly
/// `{0, 1, ..., k-1}` for `k` distinct letters; the scoring scan depends on
/// that contiguity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedWord {
    slots: [i8; ALPHABET_LEN],
}

impl EncodedWord {
    pub const ABSENT: i8 = -1;

    /// Encodes a sequence of letter identifiers. A letter that recurs keeps
    /// the position of its first occurrence; later occurrences are ignored.
    pub fn from_letters(letters: &[u8]) -> Self {
        let mut slots = [Self::ABSENT; ALPHABET_LEN];
        let mut next = 0i8;
        for &letter in letters {
            let slot = &mut slots[letter as usize];
            if *slot == Self::ABSENT {
                *slot = next;
                next += 1;
            }
        }
        Self { slots }
    }

    #[inline(always)]
    pub fn slot(&self, letter: u8) -> i8 {
        self.slots[letter as usize]
    }

    /// Number of distinct letters in the encoded word.
    pub fn distinct_len(&self) -> usize {
        self.slots.iter().filter(|&&s| s != Self::ABSENT).count()
    }
}

/// The immutable, weighted word set every scoring call reads.
///
/// Entries are unique canonical words in lexicographic order; the weight of
/// an entry counts how many raw input words collapsed onto it.
pub struct Corpus {
    words: Vec<String>,
    encodings: Vec<EncodedWord>,
    weights: Vec<u32>,
    total_weight: u64,
}

impl Corpus {
    /// Indexes raw words into a corpus.
    ///
    /// Each line is validated (letters only, case-normalized to uppercase),
    /// run-collapsed, grouped with its duplicates and encoded. Blank lines
    /// are dropped before indexing. Fails fast on the first malformed line
    /// and on an input that leaves no words at all.
    pub fn build(raw_words: &[String]) -> AfResult<Self> {
        let mut counts: BTreeMap<Vec<u8>, u32> = BTreeMap::new();

        for (i, raw) in raw_words.iter().enumerate() {
            match canonicalize(i + 1, raw)? {
                Some(canonical) => *counts.entry(canonical).or_insert(0) += 1,
                None => continue,
            }
        }

        if counts.is_empty() {
            return Err(AlphaForgeError::EmptyCorpus);
        }

        let mut words = Vec::with_capacity(counts.len());
        let mut encodings = Vec::with_capacity(counts.len());
        let mut weights = Vec::with_capacity(counts.len());
        let mut total_weight = 0u64;

        for (letters, count) in counts {
            words.push(letters.iter().map(|&id| letter_char(id)).collect());
            encodings.push(EncodedWord::from_letters(&letters));
            weights.push(count);
            total_weight += count as u64;
        }

        Ok(Self {
            words,
            encodings,
            weights,
            total_weight,
        })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn encodings(&self) -> &[EncodedWord] {
        &self.encodings
    }

    pub fn weights(&self) -> &[u32] {
        &self.weights
    }

    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }
}

/// Replaces each maximal run (length >= 2) of one repeated letter with a
/// single instance. Runs only: a letter recurring non-adjacently survives,
/// so `ABBA` stays `ABA`.
pub fn collapse_runs(letters: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(letters.len());
    for &letter in letters {
        if out.last() != Some(&letter) {
            out.push(letter);
        }
    }
    out
}

/// Validates one raw line into run-collapsed letter identifiers.
/// `None` marks a blank line, dropped by the indexer.
fn canonicalize(line: usize, raw: &str) -> AfResult<Option<Vec<u8>>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let mut letters = Vec::with_capacity(trimmed.len());
    for &byte in trimmed.as_bytes() {
        let id = letter_index(byte).ok_or_else(|| AlphaForgeError::MalformedWord {
            line,
            word: trimmed.to_string(),
        })?;
        letters.push(id);
    }

    Ok(Some(collapse_runs(&letters)))
}
