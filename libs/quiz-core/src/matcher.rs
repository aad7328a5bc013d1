//! Matching of a candidate set against a reference set, plus the follow-up
//! actions a reviewer can take on the results.

use std::borrow::Cow;
use std::collections::HashSet;

use tracing::debug;

use crate::comparator::{is_strict_match, needs_review, repair_extra_option};
use crate::error::{MatchError, Result};
use crate::types::{MatchResult, MatchStatus, Question};

/// Note attached to a result accepted by a reviewer.
pub const MANUAL_MATCH_DETAILS: &str = "تمت المطابقة يدويًا";

/// Match every candidate question against the whole reference set.
///
/// Produces one result per candidate, in candidate order. Reference order
/// decides which question becomes `question2`.
pub fn match_questions(candidates: &[Question], reference: &[Question]) -> Vec<MatchResult> {
    let results: Vec<MatchResult> = candidates
        .iter()
        .map(|candidate| match_one(candidate, reference))
        .collect();

    debug!(
        candidates = candidates.len(),
        reference = reference.len(),
        matched = results
            .iter()
            .filter(|r| r.match_status != MatchStatus::NoMatch)
            .count(),
        "matched question sets"
    );

    results
}

fn match_one(candidate: &Question, reference: &[Question]) -> MatchResult {
    let mut matched: Vec<&Question> = Vec::new();
    let mut review: Vec<&Question> = Vec::new();

    for other in reference {
        let repaired = match repair_extra_option(candidate, other) {
            Cow::Owned(q) => Some(q),
            Cow::Borrowed(_) => None,
        };

        if is_strict_match(candidate, other)
            || repaired.as_ref().is_some_and(|q| is_strict_match(q, other))
        {
            matched.push(other);
            continue;
        }

        if needs_review(candidate, other) || repaired.as_ref().is_some_and(|q| needs_review(q, other)) {
            review.push(other);
        }
    }

    build_result(
        candidate.clone(),
        matched.len(),
        matched.into_iter().chain(review.iter().copied()).next().cloned(),
        review.into_iter().cloned().collect(),
    )
}

fn build_result(
    question1: Question,
    match_count: usize,
    question2: Option<Question>,
    review_questions: Vec<Question>,
) -> MatchResult {
    let match_status = MatchStatus::classify(match_count, review_questions.len());
    MatchResult {
        question1,
        question2,
        match_count,
        match_status,
        match_details: details_for(match_status, match_count, review_questions.len()),
        review_questions,
    }
}

fn details_for(status: MatchStatus, match_count: usize, review_count: usize) -> String {
    match status {
        MatchStatus::MultipleMatches => {
            format!("يطابق {match_count} أسئلة من المجموعة الثانية (المرجعية)")
        }
        MatchStatus::NeedsReview => {
            format!("يحتاج إلى مراجعة يدوية: {review_count} سؤال مشابه في المجموعة الثانية (المرجعية)")
        }
        MatchStatus::NoMatch | MatchStatus::SingleMatch => String::new(),
    }
}

fn review_result_mut(results: &mut [MatchResult], index: usize) -> Result<&mut MatchResult> {
    let len = results.len();
    let result = results
        .get_mut(index)
        .ok_or(MatchError::ResultIndexOutOfRange { index, len })?;
    if result.match_status != MatchStatus::NeedsReview {
        return Err(MatchError::NotUnderReview { index });
    }
    Ok(result)
}

/// Accept a review candidate as the match for result `index`.
pub fn accept_review(results: &mut [MatchResult], index: usize, chosen: &Question) -> Result<()> {
    let result = review_result_mut(results, index)?;
    if !result.review_questions.contains(chosen) {
        return Err(MatchError::UnknownReviewQuestion { index });
    }

    *result = MatchResult {
        question1: result.question1.clone(),
        question2: Some(chosen.clone()),
        match_count: 1,
        match_status: MatchStatus::SingleMatch,
        match_details: MANUAL_MATCH_DETAILS.to_string(),
        review_questions: vec![],
    };
    Ok(())
}

/// Reject a review candidate of result `index`.
///
/// The result stays under review while candidates remain and falls back to
/// no match once the last one is rejected.
pub fn reject_review(results: &mut [MatchResult], index: usize, rejected: &Question) -> Result<()> {
    let result = review_result_mut(results, index)?;
    let position = result
        .review_questions
        .iter()
        .position(|q| q == rejected)
        .ok_or(MatchError::UnknownReviewQuestion { index })?;

    let mut remaining = result.review_questions.clone();
    remaining.remove(position);

    *result = build_result(
        result.question1.clone(),
        0,
        remaining.first().cloned(),
        remaining,
    );
    Ok(())
}

/// Remove the reference question matched by result `index` and re-match
/// every candidate against what is left.
///
/// Returns the updated reference set and the fresh results.
pub fn delete_matched_question(
    candidates: &[Question],
    reference: &[Question],
    results: &[MatchResult],
    index: usize,
) -> Result<(Vec<Question>, Vec<MatchResult>)> {
    let result = results.get(index).ok_or(MatchError::ResultIndexOutOfRange {
        index,
        len: results.len(),
    })?;
    let matched = match (&result.match_status, &result.question2) {
        (MatchStatus::SingleMatch, Some(q)) => q,
        _ => return Err(MatchError::NotSingleMatch { index }),
    };

    let texts = HashSet::from([matched.text.as_str()]);
    Ok(remove_and_rematch(candidates, reference, &texts))
}

/// Remove every reference question that is the single match of some result,
/// then re-match every candidate.
pub fn delete_all_single_matches(
    candidates: &[Question],
    reference: &[Question],
    results: &[MatchResult],
) -> (Vec<Question>, Vec<MatchResult>) {
    let texts: HashSet<&str> = results
        .iter()
        .filter(|r| r.match_status == MatchStatus::SingleMatch)
        .filter_map(|r| r.question2.as_ref())
        .map(|q| q.text.as_str())
        .collect();

    remove_and_rematch(candidates, reference, &texts)
}

fn remove_and_rematch(
    candidates: &[Question],
    reference: &[Question],
    texts: &HashSet<&str>,
) -> (Vec<Question>, Vec<MatchResult>) {
    let remaining: Vec<Question> = reference
        .iter()
        .filter(|q| !texts.contains(q.text.as_str()))
        .cloned()
        .collect();

    debug!(
        removed = reference.len() - remaining.len(),
        remaining = remaining.len(),
        "removed matched reference questions"
    );

    let results = match_questions(candidates, &remaining);
    (remaining, results)
}
