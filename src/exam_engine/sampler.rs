use crate::exam_engine::models::{DrawOptions, Question};
use crate::exam_engine::rng::RandomSource;

/// Fisher–Yates over an injected float source.
///
/// The index is derived as `floor(draw * (i + 1))`, one draw per position
/// from the back of the slice. The draw-per-index mapping is part of the
/// reproducibility contract: published series were shuffled exactly this
/// way, so the loop shape cannot change.
pub fn shuffle_in_place<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = (rng.next_f64() * (i as f64 + 1.0)).floor() as usize;
        items.swap(i, j);
    }
}

/// Shuffled copy, leaving the input untouched.
pub fn shuffled<T: Clone, R: RandomSource + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = items.to_vec();
    shuffle_in_place(&mut copy, rng);
    copy
}

/// Keep questions matching the module/category filters. An absent filter
/// matches everything.
pub fn filter_questions(pool: &[Question], options: &DrawOptions) -> Vec<Question> {
    pool.iter()
        .filter(|question| {
            options
                .module_id
                .map_or(true, |module_id| question.module_id == module_id)
        })
        .filter(|question| {
            options
                .category_id
                .as_deref()
                .map_or(true, |category_id| question.category_id == category_id)
        })
        .cloned()
        .collect()
}

/// Draw up to `count` questions at random from the filtered pool.
///
/// Never fails: a pool shorter than `count` yields a shorter result, and
/// callers are expected to check the returned length.
pub fn pick_questions<R: RandomSource + ?Sized>(
    pool: &[Question],
    options: &DrawOptions,
    rng: &mut R,
) -> Vec<Question> {
    let mut randomized = filter_questions(pool, options);
    shuffle_in_place(&mut randomized, rng);
    randomized.truncate(options.effective_count());
    randomized
}
