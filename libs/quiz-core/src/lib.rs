//! Core library for comparing two sets of multiple-choice quiz questions.
//!
//! Provides:
//! - Parser and serializer for `==` delimited question text
//! - Arabic-aware text normalization
//! - Question comparison (strict match, needs-review, extra-option repair)
//! - Matching of a candidate set against a reference set, with review actions
//! - Aggregate statistics over match results

pub mod comparator;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod parser;
pub mod stats;
pub mod types;

#[cfg(test)]
mod fixtures;

pub use error::{MatchError, Result};
pub use matcher::{
    accept_review, delete_all_single_matches, delete_matched_question, match_questions,
    reject_review, MANUAL_MATCH_DETAILS,
};
pub use normalize::{normalize, normalize_script};
pub use parser::{parse, serialize};
pub use stats::calculate_statistics;
pub use types::{MatchResult, MatchStatistics, MatchStatus, Question, QuestionOption};
