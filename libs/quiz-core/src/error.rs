//! Error types for quiz-core.

use thiserror::Error;

/// Result type alias using MatchError.
pub type Result<T> = std::result::Result<T, MatchError>;

/// Errors raised by the post-processing actions on match results.
///
/// Parsing and matching themselves never fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("result index {index} is out of range ({len} results)")]
    ResultIndexOutOfRange { index: usize, len: usize },

    #[error("result {index} is not awaiting review")]
    NotUnderReview { index: usize },

    #[error("question is not a review candidate of result {index}")]
    UnknownReviewQuestion { index: usize },

    #[error("result {index} is not a single match")]
    NotSingleMatch { index: usize },
}
