use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Difficulty scoring and vocabulary extraction for song lyrics
#[derive(Parser, Debug)]
#[command(name = "cadence")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Score song lyrics for language learners")]
pub struct Cli {
    /// JSON profile; CADENCE_* environment variables still override it
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Language code, defaults to the configured language
    #[arg(short, long, global = true)]
    pub language: Option<String>,

    /// Baseline JSON to score against instead of the built-in one
    #[arg(long, global = true)]
    pub baseline: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Tokenize, tag and lemmatize every line
    Analyze(InputArgs),

    /// Raw metrics plus a 1-10 difficulty score
    Score(InputArgs),

    /// Words worth studying, ranked
    Vocab(VocabArgs),

    /// Full conjugation table for an infinitive
    Conjugate { lemma: String },

    /// Rebuild the baseline from a JSON array of song metrics
    Recalibrate(RecalibrateArgs),

    /// Score many lyric files concurrently against one baseline
    Batch(BatchArgs),

    /// List registered language packs
    Languages,
}

#[derive(Args, Debug)]
pub struct InputArgs {
    /// Lyric file, one lyric line per line; `-` reads stdin
    pub file: PathBuf,
}

#[derive(Args, Debug)]
pub struct VocabArgs {
    pub file: PathBuf,

    /// Translation file, line-parallel to the lyrics
    #[arg(short, long)]
    pub translation: Option<PathBuf>,

    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Args, Debug)]
pub struct RecalibrateArgs {
    pub metrics: PathBuf,

    /// Where to write the new baseline
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct BatchArgs {
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}
