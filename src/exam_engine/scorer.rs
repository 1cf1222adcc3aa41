use crate::exam_engine::models::{Question, ScoreReport};

/// Tally a learner's answer sheet against a question list.
///
/// `selections[i]` is the index the learner picked for question `i`; `None`
/// (or a missing entry, when the sheet is shorter than the question list)
/// counts as an error. No partial credit, no negative marking.
pub fn score_questions(questions: &[Question], selections: &[Option<usize>]) -> ScoreReport {
    let total = questions.len();
    if total == 0 {
        return ScoreReport {
            total: 0,
            correct: 0,
            errors: 0,
            score: 0,
        };
    }

    let correct = questions
        .iter()
        .enumerate()
        .filter(|(index, question)| {
            let picked = selections.get(*index).copied().flatten();
            match (picked, question.correct_index()) {
                (Some(picked), Some(expected)) => picked == expected,
                _ => false,
            }
        })
        .count();

    ScoreReport {
        total,
        correct,
        errors: total - correct,
        score: ((correct as f64 / total as f64) * 100.0).round() as u32,
    }
}
