//! Relevance scoring of candidate queries against an analysis.

use pictura_analyze::TextAnalysis;
use pictura_core::QueryGenerationConfig;

use crate::types::SearchQuery;

/// Raw keyword importances rarely exceed 0.5; this maps them onto `[0, 1]`.
pub const IMPORTANCE_SCALE: f64 = 2.0;

/// Word count at which specificity saturates, minus one.
const SPECIFICITY_SPAN: f64 = 4.0;

/// The three signals behind a relevance score, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelevanceSignals {
    pub keyword_importance: f64,
    pub theme_strength: f64,
    pub query_specificity: f64,
}

pub fn relevance_signals(query: &SearchQuery, analysis: &TextAnalysis) -> RelevanceSignals {
    let keywords = &query.components.keywords;
    let mean_importance = if keywords.is_empty() {
        0.0
    } else {
        keywords
            .iter()
            .map(|kw| analysis.importance_of(kw).unwrap_or(0.0))
            .sum::<f64>()
            / keywords.len() as f64
    };

    let themes = &query.components.themes;
    let theme_strength = if themes.is_empty() || analysis.themes.is_empty() {
        0.0
    } else {
        let matching = themes.iter().filter(|t| analysis.themes.contains(t)).count();
        matching as f64 / analysis.themes.len() as f64
    };

    let words = query.word_count() as f64;

    RelevanceSignals {
        keyword_importance: (mean_importance * IMPORTANCE_SCALE).clamp(0.0, 1.0),
        theme_strength: theme_strength.clamp(0.0, 1.0),
        query_specificity: ((words - 1.0) / SPECIFICITY_SPAN).clamp(0.0, 1.0),
    }
}

/// Weighted relevance of a candidate, clamped to `[0, 1]`.
pub fn relevance_score(
    query: &SearchQuery,
    analysis: &TextAnalysis,
    config: &QueryGenerationConfig,
) -> f64 {
    let s = relevance_signals(query, analysis);
    let w = &config.weights;
    let score = s.keyword_importance * w.keyword_importance
        + s.theme_strength * w.theme_strength
        + s.query_specificity * w.query_specificity;
    score.clamp(0.0, 1.0)
}
