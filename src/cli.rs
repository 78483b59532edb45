use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "essay-overlap")]
#[command(about = "Compare two essays by shared vocabulary", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Output format.
    #[arg(long, value_enum, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List words used in both essays with their counts.
    Common(EssayArgs),
    /// Count one word in each essay.
    Search(SearchArgs),
    /// Jaccard word-overlap percentage and verdict.
    Similarity(SimilarityArgs),
    /// Full comparison report.
    Report(ReportArgs),
    /// Explain how the percentage is calculated.
    Explain,
}

#[derive(Args, Debug, Clone)]
pub struct EssayArgs {
    /// First essay text file.
    #[arg(long, default_value = "essay1.txt")]
    pub essay1: PathBuf,
    /// Second essay text file.
    #[arg(long, default_value = "essay2.txt")]
    pub essay2: PathBuf,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    #[command(flatten)]
    pub essays: EssayArgs,
    /// Word to look up (letters only).
    #[arg(long)]
    pub word: String,
}

#[derive(Args, Debug)]
pub struct SimilarityArgs {
    #[command(flatten)]
    pub essays: EssayArgs,
    /// Percentage at or above which essays count as plagiarized.
    #[arg(long)]
    pub threshold: Option<f64>,
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub essays: EssayArgs,
    /// Percentage at or above which essays count as plagiarized.
    #[arg(long)]
    pub threshold: Option<f64>,
    /// Also look up this word.
    #[arg(long)]
    pub word: Option<String>,
    /// Write the JSON report to this file.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
