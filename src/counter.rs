//! src/counter.rs
use crate::error::CountError;
use crate::tokenizer::split_on_non_letters;
use crate::word_count::WordCount;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Longest UTF-8 encoding of a single scalar value.
const UTF8_MAX: usize = 4;

// Drops one-letter tokens such as "a" or "I" along with stray punctuation
// leftovers. Whether real one-letter words should count is still open.
fn keep_token(token: &str) -> bool {
    token.len() > UTF8_MAX || token.chars().count() > 1
}

/// Tokenize one line and count every surviving token, lowercased.
/// Returns how many tokens were counted.
pub fn tally_line(line: &str, words: &mut WordCount) -> usize {
    let mut counted = 0;
    for token in split_on_non_letters(line.trim()).filter(|t| keep_token(t)) {
        words.increment(&token.to_lowercase());
        counted += 1;
    }
    counted
}

/// Count every line of `reader` into `words`.
///
/// Bytes that are not valid UTF-8 become U+FFFD, which separates words like
/// any other non-letter. On an I/O error the lines already seen stay counted
/// and the error is returned.
pub fn count_reader<R: BufRead>(mut reader: R, words: &mut WordCount) -> std::io::Result<usize> {
    let mut line = Vec::new();
    let mut counted = 0;
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(counted);
        }
        counted += tally_line(&String::from_utf8_lossy(&line), words);
    }
}

/// Count the words of the file at `path` into `words`.
#[tracing::instrument(name = "Count file", skip(words, path), fields(path = %path.display()))]
pub fn count_into(path: &Path, words: &mut WordCount) -> Result<usize, CountError> {
    let file = File::open(path).map_err(|source| CountError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let counted =
        count_reader(BufReader::new(file), words).map_err(|source| CountError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(counted, distinct = words.len(), "finished counting");
    Ok(counted)
}

/// Count the file at `path` into a fresh map. The map holds whatever was
/// counted before a failure.
pub fn count(path: &Path) -> (WordCount, Result<usize, CountError>) {
    let mut words = WordCount::new();
    let result = count_into(path, &mut words);
    (words, result)
}
