//! # nautic_exam_gen
//!
//! A fully offline, deterministic exam engine for boating-licence
//! multiple-choice training.
//!
//! Given a raw bank of questions organized by syllabus module, this library
//! filters out unusable entries, builds a normalized question pool, draws
//! module-balanced exam series from an injected random source, gates
//! releases on structural validation, and scores a learner's answer sheet.
//! Everything is a pure, synchronous transformation of in-memory data — no
//! I/O, no globals, no hidden randomness.
//!
//! ## How it works
//!
//! 1. Deserialize a raw [`QuestionBank`] (the curation pipeline's JSON) and
//!    call [`build_question_pool`] — unusable questions are silently
//!    dropped, survivors get collision-free composite ids.
//! 2. Call [`validate_pool`] as a release gate: every structural defect is
//!    reported, and a non-empty list means "do not publish".
//! 3. Draw questions: [`pick_questions`] for a plain filtered sample,
//!    [`pick_balanced_questions`] for a draw spread evenly across modules,
//!    or [`generate_exam_series`] for a whole reproducible batch.
//! 4. Call [`score_questions`] with the learner's selected answer indexes.
//!
//! ## Key features
//!
//! - **Deterministic**: every draw takes a [`RandomSource`]; seed an
//!   [`Lcg`] to reproduce a previously published series byte-for-byte, or
//!   use [`EntropySource`] for throwaway quiz sessions.
//! - **Fair**: balanced draws give every module a floor of one question and
//!   redistribute quota shortfalls to the modules with the most headroom.
//! - **Forgiving input, strict output**: scraped banks with missing ids,
//!   `options` instead of `answers`, or absent difficulties normalize
//!   cleanly; the validator is where defects become fatal.
//!
//! ## Quick start
//!
//! ```rust
//! use nautic_exam_gen::{
//!     build_question_pool, generate_exam_series, score_questions, validate_pool,
//!     Lcg, QuestionBank, SeriesOptions,
//! };
//!
//! let bank: QuestionBank = serde_json::from_str(r#"{
//!     "categories": [{
//!         "id": "balisage", "name": "Balisage", "module": 1,
//!         "questions": [{
//!             "id": 1,
//!             "text": "Quelle est la couleur d'une marque de danger isole ?",
//!             "answers": [
//!                 { "text": "Noire et rouge", "correct": true },
//!                 { "text": "Jaune et bleue", "correct": false }
//!             ]
//!         }]
//!     }]
//! }"#).unwrap();
//!
//! let pool = build_question_pool(&bank);
//! assert!(validate_pool(&pool).is_empty());
//!
//! // Same seed, same pool -> the exact same series, every time.
//! let mut rng = Lcg::new(42);
//! let series = generate_exam_series(&pool, &SeriesOptions::new(1, 1), &mut rng);
//! assert_eq!(series[0].questions.len(), 1);
//!
//! let result = score_questions(&series[0].questions, &[Some(0)]);
//! assert_eq!(result.score, 100);
//! ```

pub mod artifact;
pub mod exam_engine;

// Convenience re-exports so callers can use `nautic_exam_gen::build_question_pool`
// directly without reaching into `exam_engine::`.
pub use artifact::{generate_artifact, PoolRejected, SeriesArtifact, BALANCED_ALGORITHM};
pub use exam_engine::{
    build_question_pool, distribution_by_module, generate_exam_series, is_question_usable,
    needs_image, normalize_question, pick_balanced_questions, pick_questions, sanitize_categories,
    sanitize_questions, score_questions, validate_pool, Answer, Category, DrawOptions,
    EntropySource, FnSource, Lcg, Question, QuestionBank, RandomSource, RawAnswer, RawQuestion,
    ScoreReport, Series, SeriesOptions, ValidationIssue,
};
