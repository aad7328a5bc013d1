//! Core types for quiz set comparison.

use serde::{Deserialize, Serialize};

/// One answer choice of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub text: String,
    pub is_correct: bool,
}

impl QuestionOption {
    pub fn new(text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            text: text.into(),
            is_correct,
        }
    }
}

/// Multiple-choice question parsed from a `==` delimited block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: Vec<QuestionOption>,
    /// Original block, trimmed.
    pub raw: String,
}

impl Question {
    /// First option flagged as correct, if any.
    pub fn first_correct(&self) -> Option<&QuestionOption> {
        self.options.iter().find(|opt| opt.is_correct)
    }

    /// Options not flagged as correct.
    pub fn incorrect_options(&self) -> impl Iterator<Item = &QuestionOption> {
        self.options.iter().filter(|opt| !opt.is_correct)
    }
}

/// Classification of a candidate question against the reference set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    NoMatch,
    SingleMatch,
    MultipleMatches,
    NeedsReview,
}

impl MatchStatus {
    /// Derive the status from the number of strict matches and review candidates.
    /// Review candidates take priority over the match count.
    pub fn classify(match_count: usize, review_count: usize) -> Self {
        if review_count > 0 {
            Self::NeedsReview
        } else {
            match match_count {
                0 => Self::NoMatch,
                1 => Self::SingleMatch,
                _ => Self::MultipleMatches,
            }
        }
    }

    /// Get the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoMatch => "NO_MATCH",
            Self::SingleMatch => "SINGLE_MATCH",
            Self::MultipleMatches => "MULTIPLE_MATCHES",
            Self::NeedsReview => "NEEDS_REVIEW",
        }
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of matching one candidate question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub question1: Question,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question2: Option<Question>,
    pub match_count: usize,
    pub match_status: MatchStatus,
    #[serde(default)]
    pub match_details: String,
    #[serde(default)]
    pub review_questions: Vec<Question>,
}

/// Aggregate counts over a set of match results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchStatistics {
    pub total_questions1: usize,
    /// Distinct reference question texts that appear as `question2`.
    pub total_questions2: usize,
    pub single_match_count: usize,
    pub multiple_match_count: usize,
    pub no_match_count: usize,
    pub needs_review_count: usize,
    pub match_percentage: f64,
}
