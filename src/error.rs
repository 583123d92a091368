use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PuzzleError {
    /// Dictionary could not be opened or read.
    #[error("cannot read dictionary {path:?}: {source}")]
    Dictionary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("output directory {0:?} does not exist")]
    MissingOutputDir(PathBuf),

    #[error("cannot create puzzle file {path:?}: {source}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write puzzle file {path:?}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("cannot build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    #[error("cannot spawn pipeline thread: {0}")]
    Spawn(#[source] io::Error),

    /// A pipeline thread panicked.
    #[error("{0} stage panicked")]
    StagePanicked(&'static str),
}
