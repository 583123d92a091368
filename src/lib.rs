//! Spelling bee puzzle generation.
//!
//! Every combination of N distinct letters is rotated so that each letter
//! takes a turn as the mandatory letter, matched against a filtered word
//! list on a pool of workers, and written out when it makes a playable
//! puzzle: enough answers, at least one of which uses every letter.

pub mod combinations;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod letters;
pub mod matcher;
pub mod pipeline;
pub mod puzzle;
pub mod rotations;
pub mod writer;

#[cfg(test)]
mod test_logs;

pub use config::{Config, Policy, ALPHABET};
pub use dictionary::Dictionary;
pub use error::PuzzleError;
pub use matcher::{Matcher, Verdict};
pub use pipeline::{run, run_with, RunSummary};
pub use puzzle::Puzzle;
