//! Synthesizes ranked photo-search queries from a text analysis.
//!
//! Pipeline: content-type detection, three strategy generators blended by the
//! detected type, generic-term filtering and enhancement, deduplication, and
//! relevance ranking with a degradation ladder. The caller always gets
//! something usable back; failures inside the optimized path fall back to
//! [`basic_queries`].

pub mod basic;
pub mod optimizer;
pub mod scoring;
pub mod strategies;
pub mod types;

use std::collections::HashSet;

use pictura_analyze::{detect_content_type, TextAnalysis};
use pictura_core::{
    load_config, shuffle, ConfigOverride, Picker, QueryGenerationConfig, RandomPicker, Result,
};
use tracing::{debug, error, info, warn};

pub use basic::basic_queries;
pub use optimizer::{optimize_search_queries, rank_queries};
pub use scoring::relevance_score;
pub use types::{normalized_key, QueryComponents, QueryStrategy, SearchQuery};

/// Lower bound on returned queries when optimization produced results.
pub const MIN_RESULT_QUERIES: usize = 6;
/// Upper bound on returned queries.
pub const MAX_RESULT_QUERIES: usize = 10;
/// Amount the relevance threshold is lowered on the single retry.
pub const THRESHOLD_RELAXATION: f64 = 0.1;
/// Keywords returned when optimization yields nothing at all.
pub const KEYWORD_FALLBACK_COUNT: usize = 6;

/// Generate queries with the default random source. `overrides` is validated
/// and merged onto the built-in configuration.
pub fn generate_queries(analysis: &TextAnalysis, overrides: Option<&ConfigOverride>) -> Vec<String> {
    let config = load_config(overrides);
    generate_queries_with(analysis, &config, &mut RandomPicker::new())
}

/// Generate queries with an explicit configuration and random source.
pub fn generate_queries_with(
    analysis: &TextAnalysis,
    config: &QueryGenerationConfig,
    picker: &mut dyn Picker,
) -> Vec<String> {
    match optimized_queries(analysis, config, picker) {
        Ok(queries) => queries,
        Err(e) => {
            error!("Error generating optimized queries: {}", e);
            basic_queries(analysis)
        }
    }
}

fn optimized_queries(
    analysis: &TextAnalysis,
    config: &QueryGenerationConfig,
    picker: &mut dyn Picker,
) -> Result<Vec<String>> {
    let content_type = detect_content_type(analysis);
    info!(
        "Detected content type: {} (confidence: {:.2})",
        content_type.content_type, content_type.confidence
    );

    let pool = strategies::blend_candidates(content_type.content_type, analysis, config, picker)?;
    let mut pool = optimizer::filter_generic(pool, config);
    for q in &mut pool {
        q.query = optimizer::enhance_generic(&q.query, config, picker)?;
    }
    let candidates = optimizer::deduplicate(pool);

    let threshold = config.thresholds.min_relevance_score;
    let mut optimized = optimize_search_queries(&candidates, analysis, config, threshold);

    if optimized.is_empty() {
        warn!("All queries filtered out, retrying with lower threshold");
        let relaxed = (threshold - THRESHOLD_RELAXATION).max(0.0);
        optimized = optimize_search_queries(&candidates, analysis, config, relaxed);
    }

    if optimized.is_empty() {
        warn!("No optimized queries generated, falling back to basic keywords");
        return Ok(analysis
            .keyword_words()
            .take(KEYWORD_FALLBACK_COUNT)
            .map(str::to_string)
            .collect());
    }

    optimized.truncate(MAX_RESULT_QUERIES);
    for q in &optimized {
        debug!(
            "  - \"{}\" (score: {:.3}, strategy: {})",
            q.query, q.relevance_score, q.strategy
        );
    }

    let mut result: Vec<String> = optimized.into_iter().map(|q| q.query).collect();
    if result.len() < MIN_RESULT_QUERIES {
        top_up(&mut result, &candidates, analysis, config, picker);
    }

    info!("Generated {} optimized queries", result.len());
    Ok(result)
}

/// Fill `result` up to [`MIN_RESULT_QUERIES`] from the ranked candidates that
/// missed the threshold (long enough per `minQueryWords`), then from bare
/// non-generic keywords, then from keywords prefixed with a shuffled
/// color/mood/setting descriptor.
fn top_up(
    result: &mut Vec<String>,
    candidates: &[SearchQuery],
    analysis: &TextAnalysis,
    config: &QueryGenerationConfig,
    picker: &mut dyn Picker,
) {
    let mut seen: HashSet<String> = result.iter().map(|q| normalized_key(q)).collect();
    let mut push = |filler: String, result: &mut Vec<String>| {
        if result.len() < MIN_RESULT_QUERIES && seen.insert(normalized_key(&filler)) {
            debug!("  + \"{}\" (filler)", filler);
            result.push(filler);
        }
    };

    let mut ranked = optimizer::score_queries(candidates.to_vec(), analysis, config);
    rank_queries(&mut ranked);

    let fillers = ranked
        .into_iter()
        .filter(|q| q.word_count() >= config.thresholds.min_query_words)
        .map(|q| q.query)
        .chain(
            analysis
                .keyword_words()
                .filter(|w| !config.is_generic(w))
                .map(str::to_string),
        );
    for filler in fillers {
        push(filler, result);
    }
    if result.len() >= MIN_RESULT_QUERIES {
        return;
    }

    let mut descriptors = config.visual_descriptors.general();
    shuffle(picker, &mut descriptors);
    for descriptor in &descriptors {
        for kw in analysis.keyword_words() {
            push(format!("{} {}", descriptor, kw), result);
        }
        if result.len() >= MIN_RESULT_QUERIES {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pictura_analyze::analyze;

    const FOREST: &str = "The quiet forest stood beneath a golden sunset. \
                          The old Mountain Lodge welcomed every weary traveler. \
                          Wildlife moved through the trees near the river while the sky darkened.";

    #[test]
    fn test_generate_queries_bounds() {
        let analysis = analyze(FOREST);
        for seed in 0..20 {
            let config = QueryGenerationConfig::default();
            let queries =
                generate_queries_with(&analysis, &config, &mut RandomPicker::with_seed(seed));
            assert!(queries.len() >= MIN_RESULT_QUERIES, "seed {seed}: {queries:?}");
            assert!(queries.len() <= MAX_RESULT_QUERIES);
        }
    }

    #[test]
    fn test_top_up_under_small_max_queries() {
        let analysis = analyze(FOREST);
        let mut config = QueryGenerationConfig::default();
        config.thresholds.max_queries = 1;
        config.thresholds.min_relevance_score = 0.0;
        let queries = generate_queries_with(&analysis, &config, &mut RandomPicker::with_seed(3));
        assert_eq!(queries.len(), MIN_RESULT_QUERIES);
    }

    #[test]
    fn test_generation_failure_falls_back_to_basic() {
        let analysis = analyze(FOREST);
        let mut config = QueryGenerationConfig::default();
        config.visual_descriptors.lighting.clear();
        let queries = generate_queries_with(&analysis, &config, &mut RandomPicker::with_seed(1));
        assert_eq!(queries, basic_queries(&analysis));
    }

    #[test]
    fn test_strict_config_falls_back_to_keywords() {
        let analysis = analyze(FOREST);
        let mut config = QueryGenerationConfig::default();
        config.weights.keyword_importance = 0.0;
        config.weights.theme_strength = 0.0;
        config.weights.query_specificity = 0.0;
        config.thresholds.min_relevance_score = 0.5;
        let queries = generate_queries_with(&analysis, &config, &mut RandomPicker::with_seed(1));
        let expected: Vec<String> = analysis
            .keyword_words()
            .take(KEYWORD_FALLBACK_COUNT)
            .map(str::to_string)
            .collect();
        assert_eq!(queries, expected);
    }

    #[test]
    fn test_relaxed_threshold_recovers() {
        let analysis = analyze(FOREST);
        let mut config = QueryGenerationConfig::default();
        // Theme queries score exactly 0.5: rejected at 0.55, accepted at 0.45.
        config.weights.keyword_importance = 0.0;
        config.weights.theme_strength = 0.5;
        config.weights.query_specificity = 0.0;
        config.thresholds.min_relevance_score = 0.55;
        let queries = generate_queries_with(&analysis, &config, &mut RandomPicker::with_seed(5));
        let fallback: Vec<String> = analysis
            .keyword_words()
            .take(KEYWORD_FALLBACK_COUNT)
            .map(str::to_string)
            .collect();
        assert!(queries.len() >= MIN_RESULT_QUERIES);
        assert_ne!(queries, fallback);
    }

    #[test]
    fn test_single_keyword_still_reaches_minimum() {
        let analysis = analyze("Forest.");
        assert_eq!(analysis.keywords.len(), 1);
        for seed in 0..10 {
            let config = QueryGenerationConfig::default();
            let queries =
                generate_queries_with(&analysis, &config, &mut RandomPicker::with_seed(seed));
            assert_eq!(queries.len(), MIN_RESULT_QUERIES, "seed {seed}: {queries:?}");
            let keys: HashSet<String> = queries.iter().map(|q| normalized_key(q)).collect();
            assert_eq!(keys.len(), queries.len());
            assert!(queries.iter().all(|q| q.contains("forest")));
        }
    }

    #[test]
    fn test_degenerate_analysis() {
        assert!(generate_queries(&analyze("ok"), None).is_empty());
    }
}
