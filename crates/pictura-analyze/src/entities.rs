//! Capitalization-based entity extraction. A cheap stand-in for NER that will
//! both over- and under-generate.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::normalize::{clean_word, is_stop_word, split_sentences};

pub const MAX_ENTITIES: usize = 5;

static CAPITALIZED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][a-z]+").unwrap());

fn is_capitalized(word: &str) -> bool {
    CAPITALIZED.is_match(word)
}

/// Extract single capitalized words (never a sentence's first word) and runs
/// of consecutive capitalized words, deduplicated in first-seen order.
pub fn extract_entities(text: &str, max_entities: usize) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut entities: Vec<String> = Vec::new();
    let mut add = |entity: String| {
        if seen.insert(entity.clone()) {
            entities.push(entity);
        }
    };

    for sentence in split_sentences(text) {
        let words: Vec<String> = sentence.split_whitespace().map(clean_word).collect();

        for (i, word) in words.iter().enumerate() {
            if i > 0
                && word.chars().count() > 2
                && is_capitalized(word)
                && !is_stop_word(&word.to_lowercase())
            {
                add(word.clone());
            }
        }

        let mut run: Vec<&str> = Vec::new();
        for word in &words {
            if is_capitalized(word) {
                run.push(word.as_str());
                continue;
            }
            if run.len() > 1 {
                add(run.join(" "));
            }
            run.clear();
        }
        if run.len() > 1 {
            add(run.join(" "));
        }
    }

    entities.truncate(max_entities);
    entities
}
