//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "quiz-compare")]
#[command(version, about = "Compare two sets of multiple-choice quiz questions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (overrides QUIZ_COMPARE_FORMAT)
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,
}

/// The two question files every command works on.
#[derive(Debug, Clone, Args)]
pub struct QuestionSets {
    /// Candidate set (set 1)
    pub candidates: PathBuf,

    /// Reference set (set 2)
    pub reference: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Match the candidate set against the reference set and print every result
    Match {
        #[command(flatten)]
        sets: QuestionSets,
    },

    /// Print only the match statistics
    Stats {
        #[command(flatten)]
        sets: QuestionSets,
    },

    /// Accept or reject each review candidate interactively
    Review {
        #[command(flatten)]
        sets: QuestionSets,
    },

    /// Remove matched questions from the reference set and write what is left
    Prune {
        #[command(flatten)]
        sets: QuestionSets,

        /// Only remove the question matched by this result (0-based)
        #[arg(long)]
        result: Option<usize>,

        /// Write the pruned reference set here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
