use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// An accepted rotation variant and its answers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Puzzle {
    /// Puzzle letters, mandatory letter first.
    pub letters: String,
    /// Qualifying words in dictionary order.
    pub words: Vec<String>,
    pub max_points: u64,
}

impl Puzzle {
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.letters)
    }

    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }

    /// One word per line, then the score.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        for word in &self.words {
            writeln!(out, "{word}")?;
        }
        writeln!(out, "{}", self.max_points)?;
        out.flush()
    }
}
