//! Module-balanced question allocation.
//!
//! A fair draw spreads `count` questions as evenly as possible across every
//! module present in the filtered pool, then hides the module ordering with
//! a final shuffle. Modules that cannot fill their quota hand the shortfall
//! to whoever has the most questions left.

use std::collections::BTreeMap;

use crate::exam_engine::models::{DrawOptions, Question};
use crate::exam_engine::rng::RandomSource;
use crate::exam_engine::sampler::{filter_questions, shuffle_in_place};

/// Per-module question counts, keyed by module id.
pub fn distribution_by_module(questions: &[Question]) -> BTreeMap<u32, usize> {
    let mut distribution = BTreeMap::new();
    for question in questions {
        *distribution.entry(question.module_id).or_insert(0) += 1;
    }
    distribution
}

/// Draw up to `count` questions distributed as evenly as the per-module
/// availability allows.
///
/// Quota rules, with modules always ranked in ascending numeric id order:
/// 1. every module starts at `floor(count / modules)`, the first
///    `count % modules` of them get one extra;
/// 2. each quota is capped at the module's available question count;
/// 3. any shortfall is handed out one slot per pass to the modules with the
///    most headroom (`available - quota`), ties broken by ascending id,
///    until absorbed or nobody has headroom left.
///
/// Like the plain sampler this never fails: when the whole filtered pool is
/// smaller than `count`, the result is simply shorter.
pub fn pick_balanced_questions<R: RandomSource + ?Sized>(
    pool: &[Question],
    options: &DrawOptions,
    rng: &mut R,
) -> Vec<Question> {
    let count = options.effective_count();
    let filtered = filter_questions(pool, options);
    if filtered.is_empty() {
        return Vec::new();
    }

    // Group by module; BTreeMap iteration gives the ascending id order every
    // later step relies on. Groups are shuffled in that same order so the
    // random stream is consumed deterministically.
    let mut by_module: BTreeMap<u32, Vec<Question>> = BTreeMap::new();
    let total_available = filtered.len();
    for question in filtered {
        by_module.entry(question.module_id).or_default().push(question);
    }
    let mut groups: Vec<(u32, Vec<Question>)> = by_module.into_iter().collect();
    for (_, group) in groups.iter_mut() {
        shuffle_in_place(group, rng);
    }

    let effective_count = count.min(total_available);
    let base = effective_count / groups.len();
    let remainder = effective_count % groups.len();

    let mut quotas: Vec<usize> = groups
        .iter()
        .enumerate()
        .map(|(index, (_, group))| {
            let target = base + usize::from(index < remainder);
            target.min(group.len())
        })
        .collect();

    let mut leftover = effective_count - quotas.iter().sum::<usize>();
    while leftover > 0 {
        let mut progressed = false;

        let mut order: Vec<usize> = (0..groups.len()).collect();
        order.sort_by_key(|&index| {
            let headroom = groups[index].1.len() - quotas[index];
            (std::cmp::Reverse(headroom), groups[index].0)
        });

        for index in order {
            if quotas[index] < groups[index].1.len() {
                quotas[index] += 1;
                leftover -= 1;
                progressed = true;
                if leftover == 0 {
                    break;
                }
            }
        }
        if !progressed {
            // Every module exhausted: a silent partial result.
            break;
        }
    }

    let mut selected: Vec<Question> = groups
        .into_iter()
        .zip(quotas)
        .flat_map(|((_, group), quota)| group.into_iter().take(quota))
        .collect();

    // One more pass so module order is not visible in the output sequence.
    shuffle_in_place(&mut selected, rng);
    selected
}
