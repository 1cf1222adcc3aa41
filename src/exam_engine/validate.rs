//! Release gate over a built pool.
//!
//! The sanitizer drops bad input silently so the pipeline keeps moving; a
//! publish step needs the opposite: an enumerable list of every defect.
//! Callers treat a non-empty result as fatal and abort publishing.

use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::exam_engine::models::Question;
use crate::exam_engine::patterns::needs_image;

/// One structural defect found in a pool. The `Display` form is the
/// human-readable message a publish log shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("question has no text: {id}")]
    MissingText { id: String },

    #[error("duplicate question id: {id}")]
    DuplicateId { id: String },

    #[error("question has fewer than 2 answers: {id}")]
    TooFewAnswers { id: String },

    #[error("question has {count} correct answer(s): {id}")]
    WrongCorrectCount { id: String, count: usize },

    #[error("visual question without image: {id}")]
    MissingImage { id: String },
}

impl ValidationIssue {
    /// Composite id of the offending question.
    pub fn question_id(&self) -> &str {
        match self {
            ValidationIssue::MissingText { id }
            | ValidationIssue::DuplicateId { id }
            | ValidationIssue::TooFewAnswers { id }
            | ValidationIssue::WrongCorrectCount { id, .. }
            | ValidationIssue::MissingImage { id } => id,
        }
    }
}

/// Inspect every question and report every defect. Empty means the pool is
/// release-ready.
pub fn validate_pool(pool: &[Question]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut seen_ids = HashSet::new();

    for question in pool {
        if question.text.is_empty() {
            issues.push(ValidationIssue::MissingText {
                id: question.id.clone(),
            });
        }
        if !seen_ids.insert(question.id.as_str()) {
            issues.push(ValidationIssue::DuplicateId {
                id: question.id.clone(),
            });
        }
        if question.answers.len() < 2 {
            issues.push(ValidationIssue::TooFewAnswers {
                id: question.id.clone(),
            });
            // Answer-level checks are meaningless on a broken answer list.
            continue;
        }
        let correct_count = question.answers.iter().filter(|a| a.correct).count();
        if correct_count != 1 {
            issues.push(ValidationIssue::WrongCorrectCount {
                id: question.id.clone(),
                count: correct_count,
            });
        }
        if needs_image(&question.text) && question.image.is_none() {
            issues.push(ValidationIssue::MissingImage {
                id: question.id.clone(),
            });
        }
    }

    debug!(pool = pool.len(), issues = issues.len(), "validated pool");
    issues
}
