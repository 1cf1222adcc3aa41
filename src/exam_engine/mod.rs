//! Core exam engine — pool construction, sampling, balancing, and scoring.
//!
//! ## Module overview
//!
//! | Module     | Purpose |
//! |------------|---------|
//! | `models`   | All shared types: raw bank schema, normalized questions, series, options |
//! | `rng`      | Injected random sources: published LCG, entropy adapter, closure adapter |
//! | `patterns` | Compiled needs-image phrase set shared by sanitize and validate |
//! | `sanitize` | Silent usability filter over raw categories |
//! | `pool`     | Normalization into the flat, collision-free working pool |
//! | `sampler`  | Filters, Fisher–Yates shuffle, plain random draws |
//! | `balance`  | Module-balanced draws with quota shortfall redistribution |
//! | `series`   | Repeated balanced draws forming a reproducible exam batch |
//! | `validate` | Release gate: every structural defect, enumerated |
//! | `scorer`   | Answer-sheet tally and rounded percentage score |

pub mod balance;
pub mod models;
pub mod patterns;
pub mod pool;
pub mod rng;
pub mod sampler;
pub mod sanitize;
pub mod scorer;
pub mod series;
pub mod validate;

// Re-export the public API surface so callers can use
// `exam_engine::build_question_pool` without reaching into sub-modules.
pub use balance::{distribution_by_module, pick_balanced_questions};
pub use models::{
    Answer, Category, DrawOptions, Question, QuestionBank, RawAnswer, RawQuestion, ScoreReport,
    Series, SeriesOptions,
};
pub use patterns::needs_image;
pub use pool::{build_question_pool, normalize_question};
pub use rng::{EntropySource, FnSource, Lcg, RandomSource};
pub use sampler::{filter_questions, pick_questions, shuffle_in_place, shuffled};
pub use sanitize::{is_question_usable, sanitize_categories, sanitize_questions};
pub use scorer::score_questions;
pub use series::generate_exam_series;
pub use validate::{validate_pool, ValidationIssue};
