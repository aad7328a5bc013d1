//! Pairwise question comparison.
//!
//! Every predicate takes the candidate question first and the reference
//! question second. The roles matter for the incorrect-option check and the
//! extra-option repair.

use std::borrow::Cow;

use crate::normalize::{normalize, normalized_eq};
use crate::types::Question;

/// Option counts for which the extra-option repair applies.
const REPAIR_CANDIDATE_OPTIONS: usize = 5;
const REPAIR_REFERENCE_OPTIONS: usize = 4;

/// Both questions flag a correct option and the first ones agree after normalization.
pub fn same_correct_answer(candidate: &Question, reference: &Question) -> bool {
    match (candidate.first_correct(), reference.first_correct()) {
        (Some(a), Some(b)) => normalized_eq(&a.text, &b.text),
        _ => false,
    }
}

/// Question texts agree after normalization.
pub fn same_question_text(candidate: &Question, reference: &Question) -> bool {
    normalized_eq(&candidate.text, &reference.text)
}

/// Every incorrect option of `reference` appears among the options of `candidate`.
pub fn all_incorrect_options_present(candidate: &Question, reference: &Question) -> bool {
    let candidate_texts: Vec<String> = candidate
        .options
        .iter()
        .map(|opt| normalize(&opt.text))
        .collect();

    reference
        .incorrect_options()
        .all(|opt| candidate_texts.contains(&normalize(&opt.text)))
}

/// Drop the first candidate option that has no counterpart in the reference.
///
/// Only applies to a 5-option candidate checked against a 4-option reference.
/// Returns [`Cow::Owned`] when an option was removed and the candidate
/// unchanged otherwise.
pub fn repair_extra_option<'a>(candidate: &'a Question, reference: &Question) -> Cow<'a, Question> {
    if candidate.options.len() != REPAIR_CANDIDATE_OPTIONS
        || reference.options.len() != REPAIR_REFERENCE_OPTIONS
    {
        return Cow::Borrowed(candidate);
    }

    let reference_texts: Vec<String> = reference
        .options
        .iter()
        .map(|opt| normalize(&opt.text))
        .collect();

    let extra = candidate
        .options
        .iter()
        .position(|opt| !reference_texts.contains(&normalize(&opt.text)));

    match extra {
        Some(index) => {
            let mut repaired = candidate.clone();
            repaired.options.remove(index);
            Cow::Owned(repaired)
        }
        None => Cow::Borrowed(candidate),
    }
}

/// The only acceptance criterion for a true match.
pub fn is_strict_match(candidate: &Question, reference: &Question) -> bool {
    same_correct_answer(candidate, reference)
        && same_question_text(candidate, reference)
        && all_incorrect_options_present(candidate, reference)
}

/// Everything agrees except the question text: a likely rephrased duplicate.
pub fn needs_review(candidate: &Question, reference: &Question) -> bool {
    same_correct_answer(candidate, reference)
        && all_incorrect_options_present(candidate, reference)
        && !same_question_text(candidate, reference)
}
