//! Spelling bee matching: which dictionary words a rotation variant accepts,
//! whether that makes a playable puzzle, and what it scores.

use std::sync::atomic::{AtomicUsize, Ordering};

use crossbeam_channel::{Receiver, Sender};
use itertools::Itertools;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::config::Policy;
use crate::dictionary::{Dictionary, Entry};
use crate::error::PuzzleError;
use crate::letters::LetterSet;
use crate::puzzle::Puzzle;

/// Outcome of matching one rotation variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted(Puzzle),
    /// Fewer qualifying words than the policy minimum; holds the count.
    TooFewWords(usize),
    /// Enough words, but none uses every letter.
    NoPangram,
}

/// Per-outcome counts for a pool run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchTally {
    pub accepted: usize,
    pub too_few_words: usize,
    pub no_pangram: usize,
}

impl MatchTally {
    pub fn variants(&self) -> usize {
        self.accepted + self.too_few_words + self.no_pangram
    }
}

#[derive(Default)]
struct Counters {
    accepted: AtomicUsize,
    too_few_words: AtomicUsize,
    no_pangram: AtomicUsize,
}

impl Counters {
    fn tally(&self) -> MatchTally {
        MatchTally {
            accepted: self.accepted.load(Ordering::Relaxed),
            too_few_words: self.too_few_words.load(Ordering::Relaxed),
            no_pangram: self.no_pangram.load(Ordering::Relaxed),
        }
    }
}

pub struct Matcher<'a> {
    dictionary: &'a Dictionary,
    policy: Policy,
}

impl<'a> Matcher<'a> {
    pub fn new(dictionary: &'a Dictionary, policy: Policy) -> Self {
        Self { dictionary, policy }
    }

    /// Words must contain the first letter of `variant` and use no letter
    /// outside it.
    pub fn qualifying(&self, variant: &str) -> Vec<&'a Entry> {
        let (Some(&mandatory), Some(letters)) = (variant.as_bytes().first(), LetterSet::from_word(variant)) else {
            return Vec::new();
        };
        self.dictionary
            .entries()
            .iter()
            .filter(|e| e.letters.contains(mandatory) && e.letters.is_subset_of(letters))
            .collect_vec()
    }

    pub fn evaluate(&self, variant: &str) -> Verdict {
        let words = self.qualifying(variant);
        if words.len() < self.policy.min_words {
            tracing::trace!(%variant, found = words.len(), "too few words");
            return Verdict::TooFewWords(words.len());
        }

        // Qualifying words are subsets of the variant, so equal sets mean
        // every letter is used.
        let letters = LetterSet::from_word(variant).unwrap_or_default();
        let pangrams = words.iter().filter(|e| e.letters == letters).count();
        if pangrams == 0 {
            tracing::debug!(%variant, "no pangram");
            return Verdict::NoPangram;
        }

        let others = words.len() - pangrams;
        let max_points = points(pangrams, self.policy.pangram_points)
            .saturating_add(points(others, self.policy.word_points));
        Verdict::Accepted(Puzzle {
            letters: variant.to_string(),
            words: words.into_iter().map(|e| e.word.clone()).collect(),
            max_points,
        })
    }

    /// Matches every variant from `variants` on `pool`, sending accepted
    /// puzzles to `puzzles`.
    ///
    /// Returns once `variants` is disconnected and drained, or as soon as the
    /// puzzle consumer has gone away. `puzzles` is dropped on return, so the
    /// consumer sees the end of the stream once every worker is done.
    pub fn run(&self, pool: &ThreadPool, variants: Receiver<String>, puzzles: Sender<Puzzle>) -> MatchTally {
        let counters = Counters::default();
        let outcome = pool.install(|| {
            variants
                .into_iter()
                .par_bridge()
                .try_for_each_with(puzzles, |out, variant| match self.evaluate(&variant) {
                    Verdict::Accepted(puzzle) => {
                        counters.accepted.fetch_add(1, Ordering::Relaxed);
                        out.send(puzzle)
                    }
                    Verdict::TooFewWords(_) => {
                        counters.too_few_words.fetch_add(1, Ordering::Relaxed);
                        Ok(())
                    }
                    Verdict::NoPangram => {
                        counters.no_pangram.fetch_add(1, Ordering::Relaxed);
                        Ok(())
                    }
                })
        });
        if outcome.is_err() {
            tracing::debug!("puzzle consumer disconnected, stopping matchers");
        }
        counters.tally()
    }
}

fn points(words: usize, each: u32) -> u64 {
    (words as u64).saturating_mul(u64::from(each))
}

/// Fixed-size pool the matchers run on.
pub fn build_pool(workers: usize) -> Result<ThreadPool, PuzzleError> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("matcher-{i}"))
        .build()?;
    Ok(pool)
}
