//! Session state: the current reference set and the current results.

use std::fs;
use std::path::Path;

use quiz_core::{MatchResult, MatchStatistics, MatchStatus, Question};
use tracing::info;

use crate::error::{CliError, Result};

/// Owns the two question sets and the latest match results.
///
/// Every edit either patches a single result (review actions) or re-matches
/// the whole candidate set (reference deletions).
#[derive(Debug, Clone)]
pub struct Session {
    candidates: Vec<Question>,
    reference: Vec<Question>,
    results: Vec<MatchResult>,
}

impl Session {
    /// Parse both sets and run the initial match.
    pub fn from_text(candidate_text: &str, reference_text: &str) -> Result<Self> {
        let candidates = quiz_core::parse(candidate_text);
        if candidates.is_empty() {
            return Err(CliError::EmptySet("candidate"));
        }
        let reference = quiz_core::parse(reference_text);
        if reference.is_empty() {
            return Err(CliError::EmptySet("reference"));
        }

        info!(
            candidates = candidates.len(),
            reference = reference.len(),
            "Parsed question sets"
        );

        let results = quiz_core::match_questions(&candidates, &reference);
        Ok(Self {
            candidates,
            reference,
            results,
        })
    }

    /// Read both sets from disk.
    pub fn load(candidates_path: &Path, reference_path: &Path) -> Result<Self> {
        let candidate_text =
            fs::read_to_string(candidates_path).map_err(|e| CliError::io(candidates_path, e))?;
        let reference_text =
            fs::read_to_string(reference_path).map_err(|e| CliError::io(reference_path, e))?;
        Self::from_text(&candidate_text, &reference_text)
    }

    pub fn candidates(&self) -> &[Question] {
        &self.candidates
    }

    pub fn reference(&self) -> &[Question] {
        &self.reference
    }

    pub fn results(&self) -> &[MatchResult] {
        &self.results
    }

    pub fn statistics(&self) -> MatchStatistics {
        quiz_core::calculate_statistics(&self.results)
    }

    /// The reference set in editable text form.
    pub fn reference_text(&self) -> String {
        quiz_core::serialize(&self.reference)
    }

    /// First result still awaiting review, with the review candidate to show next.
    pub fn next_review(&self) -> Option<(usize, &Question)> {
        self.results.iter().enumerate().find_map(|(index, result)| {
            if result.match_status == MatchStatus::NeedsReview {
                result.review_questions.first().map(|q| (index, q))
            } else {
                None
            }
        })
    }

    pub fn accept_review(&mut self, index: usize, chosen: &Question) -> Result<()> {
        quiz_core::accept_review(&mut self.results, index, chosen)?;
        info!(index, "Accepted review candidate");
        Ok(())
    }

    pub fn reject_review(&mut self, index: usize, rejected: &Question) -> Result<()> {
        quiz_core::reject_review(&mut self.results, index, rejected)?;
        info!(index, "Rejected review candidate");
        Ok(())
    }

    /// Delete the reference question matched by result `index`.
    pub fn delete_match(&mut self, index: usize) -> Result<()> {
        let (reference, results) = quiz_core::delete_matched_question(
            &self.candidates,
            &self.reference,
            &self.results,
            index,
        )?;
        info!(
            index,
            removed = self.reference.len() - reference.len(),
            "Deleted matched reference question"
        );
        self.reference = reference;
        self.results = results;
        Ok(())
    }

    /// Delete every singly-matched reference question.
    pub fn delete_all_matches(&mut self) {
        let (reference, results) =
            quiz_core::delete_all_single_matches(&self.candidates, &self.reference, &self.results);
        info!(
            removed = self.reference.len() - reference.len(),
            "Deleted all singly-matched reference questions"
        );
        self.reference = reference;
        self.results = results;
    }
}
