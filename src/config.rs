use std::path::PathBuf;
use std::time::Duration;

use crate::error::PuzzleError;

/// Letters puzzles are drawn from, in generation order.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Acceptance and scoring policy applied to every rotation variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    /// Shortest word kept in the dictionary.
    pub min_word_len: usize,
    /// Fewest qualifying words a puzzle may have.
    pub min_words: usize,
    /// Points for a word using every letter of the variant.
    pub pangram_points: u32,
    /// Points for any other qualifying word.
    pub word_points: u32,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            min_word_len: 5,
            min_words: 10,
            pangram_points: 3,
            word_points: 1,
        }
    }
}

/// Runtime configuration for a generation run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Line-oriented word list.
    pub words_file: PathBuf,
    /// Letters per puzzle.
    pub num_letters: usize,
    /// Size of the matcher pool.
    pub workers: usize,
    /// Existing directory receiving one file per puzzle.
    pub output_dir: PathBuf,
    /// Strictly increasing lowercase letters to combine.
    pub alphabet: String,
    /// Bound of each channel between stages. Zero means rendezvous.
    pub channel_capacity: usize,
    /// How often the writer reports progress while idle.
    pub progress_interval: Duration,
    pub verbose: bool,
    pub policy: Policy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words_file: PathBuf::from("./dict.txt"),
            num_letters: 7,
            workers: 100,
            output_dir: PathBuf::from("./puzzles"),
            alphabet: ALPHABET.to_string(),
            channel_capacity: 1000,
            progress_interval: Duration::from_secs(1),
            verbose: false,
            policy: Policy::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), PuzzleError> {
        if self.num_letters == 0 {
            return Err(PuzzleError::InvalidConfig(
                "num_letters must be at least 1".into(),
            ));
        }
        if self.workers == 0 {
            return Err(PuzzleError::InvalidConfig(
                "worker pool needs at least one worker".into(),
            ));
        }
        if self.alphabet.is_empty() {
            return Err(PuzzleError::InvalidConfig("alphabet is empty".into()));
        }
        if !self.alphabet.bytes().all(|c| c.is_ascii_lowercase()) {
            return Err(PuzzleError::InvalidConfig(format!(
                "alphabet {:?} must only contain letters a-z",
                self.alphabet
            )));
        }
        let ascending = self
            .alphabet
            .as_bytes()
            .windows(2)
            .all(|pair| pair[0] < pair[1]);
        if !ascending {
            return Err(PuzzleError::InvalidConfig(format!(
                "alphabet {:?} must be strictly increasing",
                self.alphabet
            )));
        }
        Ok(())
    }
}
