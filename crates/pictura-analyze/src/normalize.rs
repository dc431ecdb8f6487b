//! Lexical normalization: tokenizing, stop-word removal, sentence splitting.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Function words, pronouns and auxiliaries that never count as keywords.
pub static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with",
        "by", "from", "up", "about", "into", "through", "during", "before", "after",
        "above", "below", "between", "among", "this", "that", "these", "those", "i",
        "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
        "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers",
        "herself", "it", "its", "itself", "they", "them", "their", "theirs", "themselves",
        "what", "which", "who", "whom", "whose", "am", "is", "are", "was", "were", "be",
        "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing",
        "will", "would", "could", "should", "may", "might", "must", "can", "shall",
        "very", "really", "just", "too", "only", "now", "then", "here", "there", "where",
        "when", "why", "how", "all", "any", "both", "each", "few", "more", "most",
        "other", "some", "such", "than", "so", "also",
    ]
    .into_iter()
    .collect()
});

static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Strip every non-word character from a single token.
pub fn clean_word(word: &str) -> String {
    word.chars().filter(|&c| is_word_char(c)).collect()
}

/// Lower-case, strip punctuation, and drop short, stop-word and numeric tokens.
pub fn normalize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if is_word_char(c) || c.is_whitespace() { c } else { ' ' })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|w| w.chars().count() > 2)
        .filter(|w| !is_stop_word(w))
        .filter(|w| !w.chars().all(|c| c.is_ascii_digit()))
        .map(str::to_string)
        .collect()
}

/// Naive sentence split on runs of `.`, `!` and `?`. Pieces are trimmed;
/// empty pieces are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
