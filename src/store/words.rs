//! Word list input

use crate::Result;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Read one string per line
///
/// Trailing whitespace (including `\r`) is trimmed and blank lines are
/// skipped. Leading whitespace is kept, since matching is exact.
pub fn read_words(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);

    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim_end();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }

    debug!(path = %path.display(), words = words.len(), "read word list");
    Ok(words)
}
