//! Heuristic text analysis for photo-query synthesis.
//!
//! Extracts keywords, entity-like phrases and themes from prose, and
//! classifies its writing style. Everything here is pure and never fails:
//! degenerate input yields empty results.

pub mod content_type;
pub mod entities;
pub mod keywords;
pub mod normalize;
pub mod themes;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use content_type::detect_content_type;
pub use entities::extract_entities;
pub use keywords::extract_keywords;
pub use normalize::normalize;
pub use themes::classify_themes;

/// Sentences kept on an analysis.
pub const MAX_SENTENCES: usize = 10;
/// Sentences this short (in characters, after trimming) are discarded.
const MIN_SENTENCE_CHARS: usize = 10;

/// A salient word and its document-local importance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordData {
    pub word: String,
    pub frequency: usize,
    pub importance: f64,
}

/// The shared artifact consumed by every downstream stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextAnalysis {
    /// Importance-descending, unique by word.
    pub keywords: Vec<KeywordData>,
    /// Theme tags from [`themes::THEME_TAXONOMY`], at most three.
    pub themes: Vec<String>,
    /// At most five entity phrases.
    pub entities: Vec<String>,
    /// Up to ten sentences longer than ten characters.
    pub sentences: Vec<String>,
}

impl TextAnalysis {
    pub fn keyword_words(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(|k| k.word.as_str())
    }

    /// Importance of a keyword, if the analysis contains it.
    pub fn importance_of(&self, word: &str) -> Option<f64> {
        self.keywords
            .iter()
            .find(|k| k.word == word)
            .map(|k| k.importance)
    }
}

/// Writing style of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Narrative,
    Technical,
    Descriptive,
    Mixed,
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Narrative => write!(f, "narrative"),
            Self::Technical => write!(f, "technical"),
            Self::Descriptive => write!(f, "descriptive"),
            Self::Mixed => write!(f, "mixed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeIndicators {
    pub narrative_score: f64,
    pub technical_score: f64,
    pub descriptive_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContentTypeAnalysis {
    #[serde(rename = "type")]
    pub content_type: ContentType,
    /// Always within `[0, 1]`.
    pub confidence: f64,
    pub indicators: ContentTypeIndicators,
}

/// Analyse a block of prose.
pub fn analyze(text: &str) -> TextAnalysis {
    let sentences: Vec<String> = normalize::split_sentences(text)
        .into_iter()
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .take(MAX_SENTENCES)
        .map(str::to_string)
        .collect();

    let keywords = extract_keywords(text, keywords::DEFAULT_MAX_KEYWORDS);
    let entities = extract_entities(text, entities::MAX_ENTITIES);
    let themes = classify_themes(text, &keywords);

    debug!(
        "Analysed text: keywords={}, themes={:?}, entities={:?}, sentences={}",
        keywords.len(),
        themes,
        entities,
        sentences.len()
    );

    TextAnalysis {
        keywords,
        themes,
        entities,
        sentences,
    }
}
