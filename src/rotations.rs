use crossbeam_channel::{Receiver, Sender};

/// Every cyclic rotation of `letters`, starting with `letters` itself.
///
/// For "abcdefg" this yields "abcdefg", "bcdefga", "cdefgab", ... "gabcdef",
/// so each letter gets a turn in front as the mandatory letter. `letters`
/// must be ASCII.
pub fn rotations(letters: &str) -> impl Iterator<Item = String> + '_ {
    (0..letters.len()).map(move |i| {
        let (first, rest) = letters.split_at(i);
        [rest, first].concat()
    })
}

/// Forwards every rotation of every incoming combination. Returns the number
/// of variants sent.
pub fn expand(input: Receiver<String>, out: Sender<String>) -> usize {
    let mut sent = 0;
    for combination in input {
        for variant in rotations(&combination) {
            if out.send(variant).is_err() {
                tracing::debug!(sent, "variant consumer disconnected");
                return sent;
            }
            sent += 1;
        }
    }
    sent
}
