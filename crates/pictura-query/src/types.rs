//! Candidate query types.

use serde::{Deserialize, Serialize};

/// How a candidate query was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryStrategy {
    Keyword,
    Theme,
    Entity,
    Combined,
    Contextual,
}

impl std::fmt::Display for QueryStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keyword => write!(f, "keyword"),
            Self::Theme => write!(f, "theme"),
            Self::Entity => write!(f, "entity"),
            Self::Combined => write!(f, "combined"),
            Self::Contextual => write!(f, "contextual"),
        }
    }
}

/// The signals a candidate was assembled from. Empty means absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryComponents {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub themes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub descriptors: Vec<String>,
}

/// A candidate search query. `relevance_score` is zero until scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub query: String,
    pub relevance_score: f64,
    pub strategy: QueryStrategy,
    pub components: QueryComponents,
}

impl SearchQuery {
    pub fn new(query: String, strategy: QueryStrategy, components: QueryComponents) -> Self {
        Self {
            query,
            relevance_score: 0.0,
            strategy,
            components,
        }
    }

    /// A bare single-keyword query.
    pub fn keyword(word: &str) -> Self {
        Self::new(
            word.to_string(),
            QueryStrategy::Keyword,
            QueryComponents {
                keywords: vec![word.to_string()],
                ..Default::default()
            },
        )
    }

    pub fn word_count(&self) -> usize {
        self.query.split_whitespace().count()
    }
}

/// Deduplication key: trimmed and lower-cased.
pub fn normalized_key(query: &str) -> String {
    query.trim().to_lowercase()
}
