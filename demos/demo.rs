//! End-to-end walkthrough of the exam engine.
//!
//! Run with: `cargo run --example demo`
//!
//! This example shows how `nautic_exam_gen` works from raw bank to scored
//! answer sheet:
//!
//! 1. **Pool construction** — a small raw bank (including two deliberately
//!    broken questions) is sanitized and flattened into the working pool.
//! 2. **Validation** — the release gate confirms the pool is publishable.
//! 3. **Series generation** — two balanced series are drawn from a fixed
//!    seed, so the output is deterministic and reproducible.
//! 4. **Scoring** — a simulated learner answers the first series.
//!
//! ## Key concepts demonstrated
//!
//! - `Lcg::new(seed)` makes every draw fully deterministic.
//! - The sanitizer silently drops the short prompt and the image-less
//!   visual question; the pool only ever contains usable entries.
//! - `distributionByModule` shows the fairness guarantee: both modules are
//!   represented in every series.

use nautic_exam_gen::{
    build_question_pool, generate_exam_series, score_questions, validate_pool, Lcg, QuestionBank,
    SeriesOptions,
};

fn sample_bank() -> QuestionBank {
    serde_json::from_str(
        r#"{
            "categories": [
                {
                    "id": "balisage", "name": "Balisage", "module": 1,
                    "questions": [
                        {
                            "id": 1,
                            "text": "Quelle est la couleur d'une marque laterale babord ?",
                            "answers": [
                                { "text": "Rouge", "correct": true },
                                { "text": "Verte", "correct": false },
                                { "text": "Jaune", "correct": false }
                            ]
                        },
                        {
                            "id": 2,
                            "text": "Que signifie cette bouée ?",
                            "image": "img/bouee-cardinale-nord.png",
                            "answers": [
                                { "text": "Danger au sud", "correct": false },
                                { "text": "Passez au nord", "correct": true }
                            ]
                        },
                        {
                            "id": 3,
                            "text": "Que signifie cette bouée ?",
                            "answers": [
                                { "text": "Sans image, impossible a poser", "correct": true },
                                { "text": "Autre", "correct": false }
                            ]
                        }
                    ]
                },
                {
                    "id": "securite", "name": "Sécurité", "module": 2,
                    "questions": [
                        {
                            "id": 1,
                            "text": "Quel equipement est obligatoire a bord en zone cotiere ?",
                            "answers": [
                                { "text": "Un gilet par personne", "correct": true },
                                { "text": "Un radeau de survie", "correct": false }
                            ]
                        },
                        {
                            "id": 2,
                            "text": "Court ?",
                            "answers": [
                                { "text": "Oui", "correct": true },
                                { "text": "Non", "correct": false }
                            ]
                        },
                        {
                            "id": 3,
                            "text": "Quel est le numero d'urgence en mer ?",
                            "answers": [
                                { "text": "Le 196", "correct": true },
                                { "text": "Le 112 uniquement", "correct": false }
                            ]
                        }
                    ]
                }
            ]
        }"#,
    )
    .expect("embedded bank is well-formed JSON")
}

fn main() {
    // ── Pool construction ──────────────────────────────────────────────────
    // Six raw questions go in; the short prompt and the image-less visual
    // question are silently dropped.
    let bank = sample_bank();
    let pool = build_question_pool(&bank);
    println!();
    println!("══ Pool: {} usable questions ══", pool.len());
    for question in &pool {
        println!("  [{}] module {}  {}", question.id, question.module_id, question.text);
    }

    // ── Validation ─────────────────────────────────────────────────────────
    let issues = validate_pool(&pool);
    println!();
    println!("══ Validation: {} issue(s) ══", issues.len());

    // ── Series generation ──────────────────────────────────────────────────
    // Fixed seed: run the demo twice and the series are identical.
    let mut rng = Lcg::new(4004);
    let series = generate_exam_series(&pool, &SeriesOptions::new(3, 2), &mut rng);
    println!();
    println!("══ Two balanced series of three (seed 4004) ══");
    for item in &series {
        println!();
        println!("  {} — {} questions", item.name, item.questions.len());
        for (module, count) in &item.distribution_by_module {
            println!("    module {module}: {count}");
        }
        for question in &item.questions {
            println!("    {}  {}", question.id, question.text);
        }
    }

    // ── Scoring ────────────────────────────────────────────────────────────
    // The simulated learner nails every question but the last.
    let exam = &series[0].questions;
    let mut selections: Vec<Option<usize>> =
        exam.iter().map(|q| q.correct_index()).collect();
    if let Some(last) = selections.last_mut() {
        *last = None;
    }
    let report = score_questions(exam, &selections);
    println!();
    println!("══ Score ══");
    println!("  {report}  ({} correct, {} errors)", report.correct, report.errors);
    println!();
}
