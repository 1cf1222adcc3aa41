use tracing::debug;

use crate::exam_engine::balance::{distribution_by_module, pick_balanced_questions};
use crate::exam_engine::models::{Question, Series, SeriesOptions};
use crate::exam_engine::rng::RandomSource;

/// Generate `series_count` independent exam series from one pool.
///
/// Every series is a balanced draw against the same random stream; the
/// stream is deliberately not reset in between, which is what makes the
/// whole *sequence* of series reproducible from one recorded seed rather
/// than each series individually.
pub fn generate_exam_series<R: RandomSource + ?Sized>(
    pool: &[Question],
    options: &SeriesOptions,
    rng: &mut R,
) -> Vec<Series> {
    let series_count = options.series_count.max(1);

    (1..=series_count as u32)
        .map(|id| {
            let questions = pick_balanced_questions(pool, &options.draw, rng);
            let distribution = distribution_by_module(&questions);
            debug!(series = id, questions = questions.len(), "generated series");
            Series {
                id,
                name: format!("Serie {id}"),
                question_ids: questions.iter().map(|q| q.id.clone()).collect(),
                distribution_by_module: distribution,
                questions,
            }
        })
        .collect()
}
