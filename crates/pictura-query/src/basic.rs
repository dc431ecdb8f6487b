//! Simple keyword/theme/entity concatenation, used when the optimized path
//! fails.

use std::collections::HashSet;

use pictura_analyze::TextAnalysis;

use crate::types::normalized_key;

pub const BASIC_QUERY_LIMIT: usize = 6;

/// Top keywords, themes, leading entities and two combinations, deduplicated.
pub fn basic_queries(analysis: &TextAnalysis) -> Vec<String> {
    let mut queries: Vec<String> = Vec::new();

    queries.extend(analysis.keyword_words().take(3).map(str::to_string));
    queries.extend(analysis.themes.iter().cloned());
    queries.extend(analysis.entities.iter().take(2).cloned());

    if let [first, second, ..] = analysis.keywords.as_slice() {
        queries.push(format!("{} {}", first.word, second.word));
    }
    if let (Some(theme), Some(kw)) = (analysis.themes.first(), analysis.keywords.first()) {
        queries.push(format!("{} {}", theme, kw.word));
    }

    let mut seen = HashSet::new();
    queries.retain(|q| seen.insert(normalized_key(q)));
    queries.truncate(BASIC_QUERY_LIMIT);
    queries
}
