use crate::error::AfResult;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads a line-oriented wordlist, one raw word per line.
///
/// Lines come back untrimmed and unvalidated; `Corpus::build` owns the
/// letters-only policy so that in-memory word sets go through the same
/// checks as files.
pub fn load_wordlist<P: AsRef<Path>>(path: P) -> AfResult<Vec<String>> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);

    let mut words = Vec::new();
    for line in reader.lines() {
        words.push(line?);
    }
    Ok(words)
}
