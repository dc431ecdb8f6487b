//! Theme classification against a fixed topic taxonomy.

use super::KeywordData;

pub const MAX_THEMES: usize = 3;

/// A category needs at least this many vocabulary hits to be selected.
const MIN_THEME_MATCHES: usize = 2;

/// Theme taxonomy, in selection order.
pub const THEME_TAXONOMY: &[(&str, &[&str])] = &[
    ("nature", &[
        "tree", "forest", "mountain", "river", "ocean", "sky", "flower", "animal",
        "wildlife", "landscape", "sunset", "sunrise",
    ]),
    ("technology", &[
        "computer", "software", "digital", "internet", "data", "algorithm", "artificial",
        "intelligence", "robot", "innovation",
    ]),
    ("business", &[
        "company", "market", "finance", "money", "investment", "strategy", "growth",
        "profit", "economy", "entrepreneur",
    ]),
    ("health", &[
        "medical", "doctor", "patient", "treatment", "medicine", "hospital", "fitness",
        "nutrition", "wellness", "therapy",
    ]),
    ("education", &[
        "student", "teacher", "school", "university", "learning", "knowledge", "study",
        "research", "academic", "course",
    ]),
    ("travel", &[
        "journey", "destination", "adventure", "culture", "country", "city", "explore",
        "vacation", "tourism", "flight",
    ]),
    ("food", &[
        "cooking", "recipe", "restaurant", "chef", "ingredient", "cuisine", "meal", "taste",
        "flavor", "dining",
    ]),
    ("art", &[
        "creative", "design", "painting", "music", "artist", "gallery", "exhibition",
        "performance", "cultural", "aesthetic",
    ]),
];

/// All theme tags in taxonomy order.
pub fn theme_names() -> impl Iterator<Item = &'static str> {
    THEME_TAXONOMY.iter().map(|(name, _)| *name)
}

/// Select themes whose vocabulary appears in the text (substring match on the
/// lower-cased text) or among the extracted keywords.
pub fn classify_themes(text: &str, keywords: &[KeywordData]) -> Vec<String> {
    let text_lower = text.to_lowercase();

    THEME_TAXONOMY
        .iter()
        .filter(|(_, vocabulary)| {
            let hits = vocabulary
                .iter()
                .filter(|word| {
                    text_lower.contains(**word) || keywords.iter().any(|k| k.word == **word)
                })
                .count();
            hits >= MIN_THEME_MATCHES
        })
        .take(MAX_THEMES)
        .map(|(name, _)| name.to_string())
        .collect()
}
