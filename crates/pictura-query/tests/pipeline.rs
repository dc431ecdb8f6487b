//! End-to-end checks of text analysis feeding query generation. Descriptor
//! choice is random, so these assert properties rather than exact strings.

use std::collections::HashSet;

use pictura_analyze::{analyze, detect_content_type, ContentType};
use pictura_core::{ConfigOverride, QueryGenerationConfig, RandomPicker};
use pictura_query::{
    generate_queries, generate_queries_with, normalized_key, MAX_RESULT_QUERIES,
    MIN_RESULT_QUERIES,
};
use serde_json::json;

const TEXTS: &[&str] = &[
    "The quiet forest stood beneath a golden sunset. The old Mountain Lodge welcomed \
     every weary traveler. Wildlife moved through the trees near the river.",
    "The system provides a data interface for every software process. The framework \
     supports the protocol, and the architecture enables optimization of performance. \
     Engineers at Acme Robotics deploy the algorithm on digital hardware.",
    "She walked along the harbor and felt hopeful. \"We made it,\" Daniel said, and they \
     laughed. The city lights were warm, and the journey had been long. They explored \
     the market and tasted every local flavor at a small restaurant.",
    "The canyon walls rise 300 feet above the dark river. Smooth red stone curves left \
     and right, bright where sunlight touches the top. Inside the cave the air is cold, \
     and the ocean is far to the west beyond the large mountain.",
];

fn assert_no_duplicates(queries: &[String]) {
    let mut seen = HashSet::new();
    for q in queries {
        assert!(seen.insert(normalized_key(q)), "duplicate query {q:?} in {queries:?}");
    }
}

#[test]
fn queries_are_bounded_and_unique() {
    for text in TEXTS {
        let analysis = analyze(text);
        assert!(!analysis.keywords.is_empty());
        for seed in 0..10 {
            let config = QueryGenerationConfig::default();
            let queries =
                generate_queries_with(&analysis, &config, &mut RandomPicker::with_seed(seed));
            assert!(
                (MIN_RESULT_QUERIES..=MAX_RESULT_QUERIES).contains(&queries.len()),
                "{} queries for {text:?}: {queries:?}",
                queries.len()
            );
            assert_no_duplicates(&queries);
            assert!(queries.iter().all(|q| !q.trim().is_empty()));
        }
    }
}

#[test]
fn default_random_source_stays_bounded() {
    let analysis = analyze(TEXTS[0]);
    for _ in 0..10 {
        let queries = generate_queries(&analysis, None);
        assert!(queries.len() >= MIN_RESULT_QUERIES && queries.len() <= MAX_RESULT_QUERIES);
        assert_no_duplicates(&queries);
    }
}

#[test]
fn strict_override_activates_degradation_ladder() {
    let analysis = analyze(TEXTS[1]);
    assert!(analysis.keywords.len() >= MIN_RESULT_QUERIES);

    let strict = ConfigOverride::from_json(&json!({
        "weights": {
            "keywordImportance": 0.0,
            "themeStrength": 0.3,
            "querySpecificity": 0.3
        },
        "thresholds": { "minRelevanceScore": 1.0 }
    }))
    .unwrap();
    let queries = generate_queries(&analysis, Some(&strict));
    assert_eq!(queries.len(), MIN_RESULT_QUERIES);
    let keywords: Vec<&str> = analysis.keyword_words().collect();
    assert_eq!(queries, keywords[..MIN_RESULT_QUERIES]);
}

#[test]
fn out_of_range_override_uses_defaults() {
    let analysis = analyze(TEXTS[0]);
    let invalid = ConfigOverride::from_json(&json!({
        "thresholds": { "minRelevanceScore": 2.0 }
    }))
    .unwrap();
    // Had 2.0 been applied, every candidate would be rejected.
    let queries = generate_queries(&analysis, Some(&invalid));
    let fallback: Vec<String> = analysis.keyword_words().take(6).map(String::from).collect();
    assert!(queries.len() >= MIN_RESULT_QUERIES);
    assert_ne!(queries, fallback);
}

#[test]
fn incomplete_weights_override_uses_defaults() {
    let analysis = analyze(TEXTS[1]);
    // Applied alone, a zero keyword weight with a 1.0 threshold would force
    // the keyword fallback. The incomplete weights discard the whole override.
    let incomplete = ConfigOverride::from_json(&json!({
        "weights": { "keywordImportance": 0.0 },
        "thresholds": { "minRelevanceScore": 1.0 }
    }))
    .unwrap();
    let queries = generate_queries(&analysis, Some(&incomplete));
    let fallback: Vec<String> = analysis.keyword_words().take(6).map(String::from).collect();
    assert!(queries.len() >= MIN_RESULT_QUERIES);
    assert_ne!(queries, fallback);
}

#[test]
fn single_keyword_text_reaches_minimum() {
    let analysis = analyze("Forest.");
    for _ in 0..10 {
        let queries = generate_queries(&analysis, None);
        assert_eq!(queries.len(), MIN_RESULT_QUERIES, "{queries:?}");
        assert_no_duplicates(&queries);
    }
}

#[test]
fn lodge_example() {
    let analysis = analyze(
        "The quiet forest stood beneath a golden sunset. \
         The old Mountain Lodge welcomed every weary traveler.",
    );
    assert!(analysis.themes.iter().any(|t| t == "nature"));
    assert!(analysis.entities.iter().any(|e| e == "Mountain Lodge"));
    assert!(analysis
        .keyword_words()
        .any(|w| matches!(w, "forest" | "sunset" | "mountain" | "lodge")));

    let queries = generate_queries(&analysis, None);
    assert!(queries.len() >= MIN_RESULT_QUERIES);
    assert_no_duplicates(&queries);
}

#[test]
fn content_type_confidence_in_range() {
    for text in TEXTS {
        let result = detect_content_type(&analyze(text));
        assert!((0.0..=1.0).contains(&result.confidence));
        let mut scores = [
            result.indicators.narrative_score,
            result.indicators.technical_score,
            result.indicators.descriptive_score,
        ];
        scores.sort_by(|a, b| b.partial_cmp(a).unwrap());
        if scores[0] - scores[1] < 0.15 {
            assert_eq!(result.content_type, ContentType::Mixed);
        }
    }
}

#[test]
fn technical_text_is_classified_technical() {
    let result = detect_content_type(&analyze(TEXTS[1]));
    assert_eq!(result.content_type, ContentType::Technical);
}

#[test]
fn analysis_is_deterministic() {
    for text in TEXTS {
        assert_eq!(analyze(text), analyze(text));
    }
}

#[test]
fn short_input_yields_nothing() {
    let analysis = analyze("ok");
    assert!(analysis.keywords.is_empty());
    assert!(analysis.themes.is_empty());
    assert!(analysis.entities.is_empty());
    assert!(generate_queries(&analysis, None).is_empty());
}
