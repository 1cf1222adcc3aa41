//! Prints the publish artifact for a sample bank.
//!
//! Run with: `cargo run --example artifact`
//!
//! This is the shape the build step persists next to the site data: batch
//! metadata (timestamp, algorithm, seed, pool size) plus the generated
//! series. Rerunning with the same seed reproduces the same series; only
//! `generatedAt` changes.

use chrono::Utc;
use nautic_exam_gen::{build_question_pool, generate_artifact, QuestionBank, SeriesOptions};

fn main() {
    let bank: QuestionBank = serde_json::from_str(
        r#"{
            "categories": [
                {
                    "id": "navigation", "name": "Navigation", "module": 1,
                    "questions": [
                        {
                            "id": 1,
                            "text": "Quel cote du chenal devez-vous tenir ?",
                            "answers": [
                                { "text": "Tribord", "correct": true },
                                { "text": "Babord", "correct": false }
                            ]
                        },
                        {
                            "id": 2,
                            "text": "Qui est prioritaire dans un chenal etroit ?",
                            "answers": [
                                { "text": "Le navire sortant", "correct": true },
                                { "text": "Le navire entrant", "correct": false }
                            ]
                        }
                    ]
                },
                {
                    "id": "meteo", "name": "Météo", "module": 2,
                    "questions": [
                        {
                            "id": 1,
                            "text": "Que signale un avis de grand frais ?",
                            "answers": [
                                { "text": "Vent de force 7", "correct": true },
                                { "text": "Mer calme", "correct": false }
                            ]
                        }
                    ]
                }
            ]
        }"#,
    )
    .expect("embedded bank is well-formed JSON");

    let pool = build_question_pool(&bank);

    match generate_artifact(&pool, &SeriesOptions::new(3, 2), 20_260_212, Utc::now()) {
        Ok(artifact) => {
            let json = artifact.to_json().expect("artifact serializes");
            print!("{json}");
        }
        Err(rejected) => {
            eprintln!("{rejected}");
            for issue in &rejected.issues {
                eprintln!("- {issue}");
            }
            std::process::exit(1);
        }
    }
}
