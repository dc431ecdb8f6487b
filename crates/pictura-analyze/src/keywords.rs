//! Keyword extraction with a TF-IDF-like importance score computed over a
//! single document.

use std::collections::HashMap;

use super::normalize::normalize;
use super::KeywordData;

pub const DEFAULT_MAX_KEYWORDS: usize = 10;

/// Words longer than this get a small salience boost.
const LONG_WORD_LEN: usize = 5;
const LONG_WORD_BOOST: f64 = 1.2;

/// Extract up to `max_keywords` keywords, most important first.
///
/// `importance = tf * (1 + ln(unique / (1 + freq)))`, boosted for long words
/// and floored at zero. Equal scores keep first-occurrence order.
pub fn extract_keywords(text: &str, max_keywords: usize) -> Vec<KeywordData> {
    let tokens = normalize(text);
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for token in &tokens {
        let i = *index.entry(token.as_str()).or_insert_with(|| {
            counts.push((token.as_str(), 0));
            counts.len() - 1
        });
        counts[i].1 += 1;
    }

    let total = tokens.len() as f64;
    let unique = counts.len() as f64;

    let mut keywords: Vec<KeywordData> = counts
        .into_iter()
        .map(|(word, freq)| {
            let tf = freq as f64 / total;
            let idf = (unique / (1.0 + freq as f64)).ln();
            let boost = if word.chars().count() > LONG_WORD_LEN {
                LONG_WORD_BOOST
            } else {
                1.0
            };
            KeywordData {
                word: word.to_string(),
                frequency: freq,
                importance: (tf * (1.0 + idf) * boost).max(0.0),
            }
        })
        .collect();

    // sort_by is stable, so ties stay in first-occurrence order
    keywords.sort_by(|a, b| {
        b.importance
            .partial_cmp(&a.importance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    keywords.truncate(max_keywords);
    keywords
}
