//! Wires the stages together:
//!
//! ```text
//! combinations -> rotations -> matcher pool (fan-out) -> writer (fan-in)
//! ```
//!
//! Each stage owns the only sender of its output channel and drops it when
//! it finishes, which is how the next stage learns its input is complete.
//! The matcher pool drops the puzzle sender only once every worker has
//! returned.

use std::thread;

use crossbeam_channel::bounded;

use crate::combinations;
use crate::config::Config;
use crate::dictionary::Dictionary;
use crate::error::PuzzleError;
use crate::matcher::{self, Matcher};
use crate::rotations;
use crate::writer::PuzzleWriter;

/// What a finished run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub combinations: usize,
    pub variants: usize,
    pub accepted: usize,
    pub too_few_words: usize,
    pub no_pangram: usize,
    pub written: usize,
}

/// Loads the dictionary named by `config` and runs the whole pipeline.
pub fn run(config: &Config) -> Result<RunSummary, PuzzleError> {
    config.validate()?;
    if !config.output_dir.is_dir() {
        return Err(PuzzleError::MissingOutputDir(config.output_dir.clone()));
    }
    let dictionary = Dictionary::load(&config.words_file, config.num_letters, &config.policy)?;
    run_with(config, &dictionary)
}

/// Runs the pipeline against an already loaded dictionary.
pub fn run_with(config: &Config, dictionary: &Dictionary) -> Result<RunSummary, PuzzleError> {
    config.validate()?;
    let pool = matcher::build_pool(config.workers)?;
    let matcher = Matcher::new(dictionary, config.policy);
    let writer = PuzzleWriter::new(&config.output_dir, config.progress_interval);
    if dictionary.is_empty() {
        tracing::warn!("dictionary has no usable words, no puzzles will be accepted");
    }

    let (combination_tx, combination_rx) = bounded(config.channel_capacity);
    let (variant_tx, variant_rx) = bounded(config.channel_capacity);
    let (puzzle_tx, puzzle_rx) = bounded(config.channel_capacity);

    tracing::info!(
        letters = config.num_letters,
        workers = config.workers,
        words = dictionary.len(),
        "generating puzzles"
    );

    thread::scope(|s| {
        let alphabet = config.alphabet.as_str();
        let len = config.num_letters;
        let generator = thread::Builder::new()
            .name("combinations".into())
            .spawn_scoped(s, move || combinations::generate(alphabet, len, combination_tx))
            .map_err(PuzzleError::Spawn)?;
        let expander = thread::Builder::new()
            .name("rotations".into())
            .spawn_scoped(s, move || rotations::expand(combination_rx, variant_tx))
            .map_err(PuzzleError::Spawn)?;
        let sink = thread::Builder::new()
            .name("writer".into())
            .spawn_scoped(s, move || writer.drain(puzzle_rx))
            .map_err(PuzzleError::Spawn)?;

        let tally = matcher.run(&pool, variant_rx, puzzle_tx);

        let written = sink
            .join()
            .map_err(|_| PuzzleError::StagePanicked("writer"))??;
        let combinations = generator
            .join()
            .map_err(|_| PuzzleError::StagePanicked("combinations"))?;
        let variants = expander
            .join()
            .map_err(|_| PuzzleError::StagePanicked("rotations"))?;

        let summary = RunSummary {
            combinations,
            variants,
            accepted: tally.accepted,
            too_few_words: tally.too_few_words,
            no_pangram: tally.no_pangram,
            written,
        };
        tracing::info!(?summary, "pipeline finished");
        Ok(summary)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Policy;
    use crate::test_logs::captured_logs;
    use std::time::Duration;

    #[test]
    fn counts_add_up() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            num_letters: 3,
            workers: 4,
            output_dir: dir.path().to_path_buf(),
            alphabet: "abcd".into(),
            channel_capacity: 0,
            progress_interval: Duration::from_millis(50),
            ..Config::default()
        };
        let words = [
            "aaaaa", "aaaab", "aaabb", "aabbb", "abbbb", "aaaac", "aaacc", "aaccc", "acccc", "abcab",
        ];
        let dictionary = Dictionary::from_words(words, 3, &Policy::default());

        let summary = run_with(&config, &dictionary).unwrap();
        assert_eq!(summary.combinations, 4);
        assert_eq!(summary.variants, 12);
        assert_eq!(summary.accepted + summary.too_few_words + summary.no_pangram, 12);
        assert_eq!(summary.written, summary.accepted);
        assert_eq!(summary.accepted, 1);
        assert!(dir.path().join("abc.txt").exists());
    }

    #[test]
    fn empty_dictionary_warns_and_accepts_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            num_letters: 2,
            workers: 2,
            output_dir: dir.path().to_path_buf(),
            alphabet: "abc".into(),
            ..Config::default()
        };
        let (summary, logs) = captured_logs(|| run_with(&config, &Dictionary::default()));
        let summary = summary.unwrap();
        assert_eq!(summary.variants, 6);
        assert_eq!(summary.too_few_words, 6);
        assert_eq!(summary.written, 0);
        assert!(logs.contains("WARN"), "{logs}");
        assert!(logs.contains("no usable words"), "{logs}");
    }

    #[test]
    fn missing_output_dir_is_reported_before_loading() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            output_dir: dir.path().join("missing"),
            words_file: dir.path().join("also-missing.txt"),
            ..Config::default()
        };
        assert!(matches!(run(&config), Err(PuzzleError::MissingOutputDir(_))));
    }
}
