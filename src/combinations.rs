//! Duplicate-free enumeration of letter combinations.

use crossbeam_channel::Sender;
use itertools::Itertools;

/// Every combination of `len` distinct letters of `alphabet`, each in
/// alphabet order.
///
/// Letters only ever follow letters that sort before them, so no set of
/// letters is produced twice (no permutations). `alphabet` must be strictly
/// increasing lowercase ASCII and `len` must be at least one. A `len` longer
/// than the alphabet produces nothing.
pub fn combinations(alphabet: &str, len: usize) -> impl Iterator<Item = String> + '_ {
    alphabet
        .bytes()
        .combinations(len)
        .map(|letters| letters.into_iter().map(char::from).collect())
}

/// Feeds every combination into `out`. Returns how many were sent.
///
/// Stops early if the receiving side has gone away.
pub fn generate(alphabet: &str, len: usize, out: Sender<String>) -> usize {
    let mut sent = 0;
    for combination in combinations(alphabet, len) {
        if out.send(combination).is_err() {
            tracing::debug!(sent, "combination consumer disconnected");
            break;
        }
        sent += 1;
    }
    sent
}
