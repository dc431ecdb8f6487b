//! Candidate filtering, deduplication and ranking.

use std::collections::HashSet;

use pictura_analyze::TextAnalysis;
use pictura_core::{pick, Error, Picker, QueryGenerationConfig, Result};

use crate::scoring::relevance_score;
use crate::types::{normalized_key, SearchQuery};

/// Scores this close to a group's leader rank as tied.
pub const TIE_WINDOW: f64 = 0.1;

/// Generic candidates shorter than this get a descriptor prepended.
const ENHANCE_BELOW_WORDS: usize = 3;

/// Drop single-word candidates that are just a generic term.
pub fn filter_generic(queries: Vec<SearchQuery>, config: &QueryGenerationConfig) -> Vec<SearchQuery> {
    queries
        .into_iter()
        .filter(|q| {
            let lower = q.query.to_lowercase();
            let words: Vec<&str> = lower.split_whitespace().collect();
            !(words.len() == 1 && config.is_generic(words[0]))
        })
        .collect()
}

/// Prefix a random color/mood/setting to short queries containing a generic
/// term. Other queries are returned unchanged.
pub fn enhance_generic(
    query: &str,
    config: &QueryGenerationConfig,
    picker: &mut dyn Picker,
) -> Result<String> {
    let lower = query.to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();
    let has_generic = words.iter().any(|w| config.is_generic(w));

    if !has_generic || words.len() >= ENHANCE_BELOW_WORDS {
        return Ok(query.to_string());
    }

    let general = config.visual_descriptors.general();
    let descriptor = pick(picker, &general)
        .ok_or_else(|| Error::Generation("no descriptors to enhance generic query".into()))?;
    Ok(format!("{} {}", descriptor, query))
}

/// Keep the first occurrence of each trimmed, case-insensitive query.
pub fn deduplicate(queries: Vec<SearchQuery>) -> Vec<SearchQuery> {
    let mut seen = HashSet::new();
    queries
        .into_iter()
        .filter(|q| seen.insert(normalized_key(&q.query)))
        .collect()
}

/// Assign a relevance score to every candidate.
pub fn score_queries(
    mut queries: Vec<SearchQuery>,
    analysis: &TextAnalysis,
    config: &QueryGenerationConfig,
) -> Vec<SearchQuery> {
    for q in &mut queries {
        q.relevance_score = relevance_score(q, analysis, config);
    }
    queries
}

/// Sort by descending score. Candidates within [`TIE_WINDOW`] of their
/// group's top score are tied and ordered by word count, most first.
pub fn rank_queries(queries: &mut [SearchQuery]) {
    queries.sort_by(|a, b| {
        b.relevance_score
            .partial_cmp(&a.relevance_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut start = 0;
    while start < queries.len() {
        let leader = queries[start].relevance_score;
        let end = queries[start..]
            .iter()
            .position(|q| leader - q.relevance_score > TIE_WINDOW)
            .map_or(queries.len(), |offset| start + offset);
        queries[start..end].sort_by_key(|q| std::cmp::Reverse(q.word_count()));
        start = end;
    }
}

/// Score, drop below `min_relevance`, rank and truncate to `maxQueries`.
pub fn optimize_search_queries(
    queries: &[SearchQuery],
    analysis: &TextAnalysis,
    config: &QueryGenerationConfig,
    min_relevance: f64,
) -> Vec<SearchQuery> {
    let mut kept: Vec<SearchQuery> = score_queries(queries.to_vec(), analysis, config)
        .into_iter()
        .filter(|q| q.relevance_score >= min_relevance)
        .collect();
    rank_queries(&mut kept);
    kept.truncate(config.thresholds.max_queries);
    kept
}
