use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bee_puzzles::{Config, Policy};

/// Generate every spelling bee puzzle a word list supports.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// File containing valid words, one per line.
    #[arg(long, default_value = "./dict.txt")]
    words_file: PathBuf,

    /// Number of letters in resulting puzzles.
    #[arg(long, default_value_t = 7)]
    num_letters: usize,

    /// Number of matcher threads.
    #[arg(long, default_value_t = 100)]
    parallel: usize,

    /// Existing directory puzzles are written to.
    #[arg(long, default_value = "./puzzles")]
    output_dir: PathBuf,

    /// Fewest answers a puzzle may have.
    #[arg(long, default_value_t = 10)]
    min_words: usize,

    /// Shortest word accepted as an answer.
    #[arg(long, default_value_t = 5)]
    min_word_len: usize,

    /// Points for an answer using every letter.
    #[arg(long, default_value_t = 3)]
    pangram_points: u32,

    /// Points for any other answer.
    #[arg(long, default_value_t = 1)]
    word_points: u32,

    /// Verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            words_file: cli.words_file,
            num_letters: cli.num_letters,
            workers: cli.parallel,
            output_dir: cli.output_dir,
            verbose: cli.verbose,
            policy: Policy {
                min_word_len: cli.min_word_len,
                min_words: cli.min_words,
                pangram_points: cli.pangram_points,
                word_points: cli.word_points,
            },
            ..Config::default()
        }
    }
}

fn main() -> Result<()> {
    let start = Instant::now();
    let config: Config = Cli::parse().into();

    let level = if config.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(format!("bee_puzzles={level}").parse()?),
        )
        .init();

    let summary = bee_puzzles::run(&config)
        .with_context(|| format!("generating puzzles from {}", config.words_file.display()))?;

    tracing::info!(
        written = summary.written,
        variants = summary.variants,
        "run took {}s",
        start.elapsed().as_secs()
    );
    Ok(())
}
