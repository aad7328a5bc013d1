//! Aggregate statistics over match results.

use std::collections::HashSet;

use crate::types::{MatchResult, MatchStatistics, MatchStatus};

/// Calculate statistics from match results.
pub fn calculate_statistics(results: &[MatchResult]) -> MatchStatistics {
    let count = |status: MatchStatus| results.iter().filter(|r| r.match_status == status).count();

    let single_match_count = count(MatchStatus::SingleMatch);
    let multiple_match_count = count(MatchStatus::MultipleMatches);
    let total_questions1 = results.len();

    let total_questions2 = results
        .iter()
        .filter_map(|r| r.question2.as_ref())
        .map(|q| q.text.as_str())
        .collect::<HashSet<_>>()
        .len();

    let match_percentage = if total_questions1 == 0 {
        0.0
    } else {
        (single_match_count + multiple_match_count) as f64 / total_questions1 as f64 * 100.0
    };

    MatchStatistics {
        total_questions1,
        total_questions2,
        single_match_count,
        multiple_match_count,
        no_match_count: count(MatchStatus::NoMatch),
        needs_review_count: count(MatchStatus::NeedsReview),
        match_percentage,
    }
}
