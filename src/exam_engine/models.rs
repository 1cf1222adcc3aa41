use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Raw bank input (author/scraper supplied, read-only)
// ---------------------------------------------------------------------------

/// A whole raw question bank as delivered by the content-curation pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionBank {
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// One syllabus category. Belongs to exactly one module; a module usually
/// spans several categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub module: u32,
    #[serde(default)]
    pub questions: Vec<RawQuestion>,
}

/// An author-supplied question before normalization. The id is only unique
/// within its category. Banks in the wild spell the prompt as `text` or
/// `question` and the answer list as `answers` or `options`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawQuestion {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    #[serde(alias = "question", default)]
    pub text: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub difficulty: Option<u32>,
    #[serde(alias = "options", default)]
    pub answers: Vec<RawAnswer>,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAnswer {
    #[serde(default, deserialize_with = "de_opt_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub correct: bool,
}

/// Scraped banks carry ids as JSON numbers or strings, depending on the
/// harvester that produced them. Both map to `String`.
fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum LenientId {
        Num(u64),
        Text(String),
    }

    Ok(match LenientId::deserialize(deserializer)? {
        LenientId::Num(n) => n.to_string(),
        LenientId::Text(s) => s,
    })
}

fn de_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum LenientId {
        Num(u64),
        Text(String),
    }

    Ok(Option::<LenientId>::deserialize(deserializer)?.map(|id| match id {
        LenientId::Num(n) => n.to_string(),
        LenientId::Text(s) => s,
    }))
}

// ---------------------------------------------------------------------------
// Normalized pool types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub id: String,
    pub text: String,
    pub correct: bool,
}

/// A pool member. Immutable once built; the composite `id`
/// (`"<categoryId>:<rawId>"`) is unique across the whole pool even when two
/// categories reuse a raw id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub source_id: String,
    pub category_id: String,
    pub category_name: String,
    pub module_id: u32,
    pub text: String,
    pub image: Option<String>,
    pub difficulty: u32,
    pub answers: Vec<Answer>,
    pub explanation: String,
    pub tags: Vec<String>,
}

impl Question {
    /// Position of the correct answer, if the question carries one.
    pub fn correct_index(&self) -> Option<usize> {
        self.answers.iter().position(|a| a.correct)
    }
}

// ---------------------------------------------------------------------------
// Draw / series configuration
// ---------------------------------------------------------------------------

/// Filters and target size for one draw. `count` below 1 is treated as 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOptions {
    pub module_id: Option<u32>,
    pub category_id: Option<String>,
    pub count: usize,
}

impl DrawOptions {
    pub fn new(count: usize) -> Self {
        DrawOptions {
            module_id: None,
            category_id: None,
            count,
        }
    }

    pub fn for_module(mut self, module_id: u32) -> Self {
        self.module_id = Some(module_id);
        self
    }

    pub fn for_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub(crate) fn effective_count(&self) -> usize {
        self.count.max(1)
    }
}

impl Default for DrawOptions {
    /// The exam format: 30 questions, no filter.
    fn default() -> Self {
        DrawOptions::new(30)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesOptions {
    pub draw: DrawOptions,
    pub series_count: usize,
}

impl SeriesOptions {
    pub fn new(count: usize, series_count: usize) -> Self {
        SeriesOptions {
            draw: DrawOptions::new(count),
            series_count,
        }
    }
}

impl Default for SeriesOptions {
    /// The published batch: six series of thirty questions.
    fn default() -> Self {
        SeriesOptions::new(30, 6)
    }
}

// ---------------------------------------------------------------------------
// Series / scoring output
// ---------------------------------------------------------------------------

/// One generated exam instance. Serializes in the camelCase shape the site
/// templates consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub id: u32,
    pub name: String,
    pub question_ids: Vec<String>,
    pub questions: Vec<Question>,
    pub distribution_by_module: BTreeMap<u32, usize>,
}

/// Tally of a learner's answer sheet. `score` is a rounded percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub total: usize,
    pub correct: usize,
    pub errors: usize,
    pub score: u32,
}

impl fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({}%)", self.correct, self.total, self.score)
    }
}
