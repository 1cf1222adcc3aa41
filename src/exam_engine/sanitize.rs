//! Usability filtering for raw question banks.
//!
//! Banks are hand- and scrape-curated, so broken entries are routine. This
//! pass silently drops anything unusable instead of failing the pipeline;
//! the release gate in [`validate`](crate::exam_engine::validate) is the
//! place that reports defects loudly.

use crate::exam_engine::models::{Category, RawAnswer, RawQuestion};
use crate::exam_engine::patterns::needs_image;

/// Minimum trimmed prompt length, in characters.
const MIN_TEXT_LEN: usize = 8;

pub(crate) fn has_exactly_one_correct(answers: &[RawAnswer]) -> bool {
    answers.iter().filter(|a| a.correct).count() == 1
}

fn has_image(question: &RawQuestion) -> bool {
    matches!(question.image.as_deref(), Some(image) if !image.is_empty())
}

/// A raw question survives iff its prompt is long enough to mean something,
/// it has at least two answers exactly one of which is correct, and any
/// visual-context phrasing is backed by an actual image reference.
pub fn is_question_usable(question: &RawQuestion) -> bool {
    if question.text.trim().chars().count() < MIN_TEXT_LEN {
        return false;
    }
    if question.answers.len() < 2 {
        return false;
    }
    if !has_exactly_one_correct(&question.answers) {
        return false;
    }
    if needs_image(&question.text) && !has_image(question) {
        return false;
    }
    true
}

pub fn sanitize_questions(questions: &[RawQuestion]) -> Vec<RawQuestion> {
    questions
        .iter()
        .filter(|q| is_question_usable(q))
        .cloned()
        .collect()
}

/// Rebuild every category around its usable questions and drop categories
/// left empty. The output is always well-formed.
pub fn sanitize_categories(categories: &[Category]) -> Vec<Category> {
    categories
        .iter()
        .map(|category| Category {
            questions: sanitize_questions(&category.questions),
            ..category.clone()
        })
        .filter(|category| !category.questions.is_empty())
        .collect()
}
