use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use itertools::Itertools;

use crate::config::Policy;
use crate::error::PuzzleError;
use crate::letters::LetterSet;

/// A word kept for matching, with its letters precomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub word: String,
    pub letters: LetterSet,
}

/// Filtered word list, read once and shared read-only by every matcher.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<Entry>,
}

impl Dictionary {
    pub fn load(path: &Path, max_letters: usize, policy: &Policy) -> Result<Self, PuzzleError> {
        let dictionary_error = |source: io::Error| PuzzleError::Dictionary {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(dictionary_error)?;
        let dictionary =
            Self::from_reader(BufReader::new(file), max_letters, policy).map_err(dictionary_error)?;
        tracing::info!(words = dictionary.len(), "loaded dictionary");
        Ok(dictionary)
    }

    /// Reads one word per line, keeping only the words a puzzle of
    /// `max_letters` letters could ever accept.
    ///
    /// Lines that are not UTF-8 are skipped like any other rejected word;
    /// only I/O failures are errors.
    pub fn from_reader<R: BufRead>(reader: R, max_letters: usize, policy: &Policy) -> io::Result<Self> {
        let lines: Vec<Vec<u8>> = reader.split(b'\n').try_collect()?;
        let entries = lines
            .iter()
            .filter_map(|line| std::str::from_utf8(line).ok())
            .filter_map(|line| accept(line.trim(), max_letters, policy))
            .collect_vec();
        Ok(Self { entries })
    }

    pub fn from_words<'a>(
        words: impl IntoIterator<Item = &'a str>,
        max_letters: usize,
        policy: &Policy,
    ) -> Self {
        let entries = words
            .into_iter()
            .filter_map(|w| accept(w.trim(), max_letters, policy))
            .collect_vec();
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.word.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Words must be long enough, lowercase with no punctuation, and use at most
/// `max_letters` distinct letters.
fn accept(word: &str, max_letters: usize, policy: &Policy) -> Option<Entry> {
    if word.len() < policy.min_word_len {
        return None;
    }
    let letters = LetterSet::from_word(word)?;
    (letters.count() <= max_letters).then(|| Entry {
        word: word.to_string(),
        letters,
    })
}
