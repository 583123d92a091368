use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Duration;

use crossbeam_channel::{select, tick, Receiver};

use crate::error::PuzzleError;
use crate::puzzle::Puzzle;

/// Single consumer persisting accepted puzzles, one file each.
pub struct PuzzleWriter {
    output_dir: PathBuf,
    progress_interval: Duration,
}

impl PuzzleWriter {
    pub fn new(output_dir: impl Into<PathBuf>, progress_interval: Duration) -> Self {
        Self {
            output_dir: output_dir.into(),
            progress_interval,
        }
    }

    /// Creates (or truncates) `<letters>.txt` in the output directory.
    pub fn write(&self, puzzle: &Puzzle) -> Result<(), PuzzleError> {
        let path = puzzle.path_in(&self.output_dir);
        let file = File::create(&path).map_err(|source| PuzzleError::CreateOutput {
            path: path.clone(),
            source,
        })?;
        puzzle
            .write_to(BufWriter::new(file))
            .map_err(|source| PuzzleError::WriteOutput { path, source })?;
        tracing::debug!(letters = %puzzle.letters, "wrote {}", puzzle.letters);
        Ok(())
    }

    /// Writes puzzles until every sender is gone. Returns how many were
    /// written; the first failure stops the drain and drops `puzzles`.
    pub fn drain(&self, puzzles: Receiver<Puzzle>) -> Result<usize, PuzzleError> {
        let heartbeat = tick(self.progress_interval);
        let mut written = 0;
        loop {
            select! {
                recv(puzzles) -> msg => match msg {
                    Ok(puzzle) => {
                        self.write(&puzzle)?;
                        written += 1;
                    }
                    Err(_) => return Ok(written),
                },
                recv(heartbeat) -> _ => tracing::debug!(written, "still matching"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn puzzle(letters: &str) -> Puzzle {
        Puzzle {
            letters: letters.into(),
            words: vec!["abcab".into(), "aabbc".into()],
            max_points: 6,
        }
    }

    #[test]
    fn drains_until_closed() {
        let dir = tempfile::tempdir().unwrap();
        let writer = PuzzleWriter::new(dir.path(), Duration::from_millis(10));
        let (tx, rx) = crossbeam_channel::bounded(0);
        let sender = std::thread::spawn(move || {
            for letters in ["abc", "bca"] {
                tx.send(puzzle(letters)).unwrap();
            }
        });

        assert_eq!(writer.drain(rx).unwrap(), 2);
        sender.join().unwrap();
        let contents = fs::read_to_string(dir.path().join("bca.txt")).unwrap();
        assert_eq!(contents, "abcab\naabbc\n6\n");
        assert!(dir.path().join("abc.txt").exists());
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("abc.txt");
        fs::write(&path, "stale\nstale\nstale\nstale\n").unwrap();

        let writer = PuzzleWriter::new(dir.path(), Duration::from_secs(1));
        writer.write(&puzzle("abc")).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "abcab\naabbc\n6\n");
    }

    #[test]
    fn missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let writer = PuzzleWriter::new(dir.path().join("gone"), Duration::from_secs(1));
        let err = writer.write(&puzzle("abc")).unwrap_err();
        assert!(matches!(err, PuzzleError::CreateOutput { .. }));
    }
}
