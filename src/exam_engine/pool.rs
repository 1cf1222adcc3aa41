use tracing::debug;

use crate::exam_engine::models::{Answer, Category, Question, QuestionBank, RawQuestion};
use crate::exam_engine::sanitize::sanitize_categories;

/// Turn a raw question into an immutable pool member.
///
/// The composite id `"<categoryId>:<rawId>"` keeps the pool free of
/// collisions even when two categories reuse a raw id. Difficulty defaults
/// to 1 when absent or zero; answer ids default to the answer's index.
pub fn normalize_question(raw: &RawQuestion, category: &Category) -> Question {
    let answers = raw
        .answers
        .iter()
        .enumerate()
        .map(|(index, answer)| Answer {
            id: answer
                .id
                .as_deref()
                .filter(|id| !id.is_empty())
                .map(str::to_owned)
                .unwrap_or_else(|| index.to_string()),
            text: answer.text.clone(),
            correct: answer.correct,
        })
        .collect();

    Question {
        id: format!("{}:{}", category.id, raw.id),
        source_id: raw.id.clone(),
        category_id: category.id.clone(),
        category_name: category.name.clone(),
        module_id: category.module,
        text: raw.text.clone(),
        image: raw.image.clone().filter(|image| !image.is_empty()),
        difficulty: raw.difficulty.filter(|d| *d != 0).unwrap_or(1),
        answers,
        explanation: raw.explanation.clone(),
        tags: raw.tags.clone(),
    }
}

/// Sanitize the bank and flatten it into the working pool, in category order
/// then per-category question order. No implicit shuffling happens here; a
/// fresh pool is built on every call and never mutated in place.
pub fn build_question_pool(bank: &QuestionBank) -> Vec<Question> {
    let raw_total: usize = bank.categories.iter().map(|c| c.questions.len()).sum();
    let categories = sanitize_categories(&bank.categories);

    let pool: Vec<Question> = categories
        .iter()
        .flat_map(|category| {
            category
                .questions
                .iter()
                .map(|question| normalize_question(question, category))
        })
        .collect();

    debug!(
        pool = pool.len(),
        dropped = raw_total - pool.len(),
        categories = categories.len(),
        "built question pool"
    );
    pool
}
