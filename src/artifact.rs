//! Publish-step payload for generated exam series.
//!
//! The build pipeline validates the pool, draws a batch of balanced series
//! from a recorded seed, and persists the result as JSON next to the site
//! data. This module shapes that payload; reading the bank and writing the
//! file stay with the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::exam_engine::{
    generate_exam_series, validate_pool, Lcg, Question, Series, SeriesOptions, ValidationIssue,
};

/// Name recorded in every artifact so a regenerated file can be checked
/// against the allocator that produced the original.
pub const BALANCED_ALGORITHM: &str = "balanced_under_constraints_v1";

/// The persisted artifact: batch metadata plus the series themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesArtifact {
    pub generated_at: DateTime<Utc>,
    pub algorithm: String,
    pub seed: u32,
    pub total_questions_in_pool: usize,
    pub series: Vec<Series>,
}

impl SeriesArtifact {
    /// JSON in the published file format: two-space pretty print plus a
    /// trailing newline.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self).map(|json| json + "\n")
    }
}

/// The pool failed the release gate. Publishing must not proceed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("question pool rejected: {} ({} issue(s))", first_message(.issues), .issues.len())]
pub struct PoolRejected {
    pub issues: Vec<ValidationIssue>,
}

fn first_message(issues: &[ValidationIssue]) -> String {
    issues
        .first()
        .map(ToString::to_string)
        .unwrap_or_default()
}

/// Run the release gate, then draw the whole batch from a fresh `Lcg(seed)`.
///
/// This is the one fallible operation in the crate: it fails exactly when
/// `validate_pool` reports defects, carrying the full list so the publish
/// log can print every message.
pub fn generate_artifact(
    pool: &[Question],
    options: &SeriesOptions,
    seed: u32,
    generated_at: DateTime<Utc>,
) -> Result<SeriesArtifact, PoolRejected> {
    let issues = validate_pool(pool);
    if !issues.is_empty() {
        return Err(PoolRejected { issues });
    }

    let mut rng = Lcg::new(seed);
    let series = generate_exam_series(pool, options, &mut rng);

    Ok(SeriesArtifact {
        generated_at,
        algorithm: BALANCED_ALGORITHM.to_string(),
        seed,
        total_questions_in_pool: pool.len(),
        series,
    })
}
