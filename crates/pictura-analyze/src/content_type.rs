//! Writing-style classification from regex evidence densities.
//!
//! Each style score is a weighted sum of pattern matches per sentence,
//! capped at 1. The winner must clear [`MIN_DOMINANT_SCORE`] and beat the
//! runner-up by at least [`MIXED_MARGIN`]; otherwise the text is `Mixed`.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{ContentType, ContentTypeAnalysis, ContentTypeIndicators, TextAnalysis};

/// Below this top score no style is considered dominant.
pub const MIN_DOMINANT_SCORE: f64 = 0.3;
/// Top two scores closer than this are reported as `Mixed`.
pub const MIXED_MARGIN: f64 = 0.15;
/// Floor for the confidence denominator.
pub const CONFIDENCE_EPSILON: f64 = 0.01;

pub const LOW_EVIDENCE_CONFIDENCE: f64 = 0.5;
pub const CLOSE_CALL_CONFIDENCE: f64 = 0.6;

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap()
}

// Narrative
static PAST_TENSE: Lazy<Regex> = Lazy::new(|| {
    re(r"\b(was|were|had|did|went|came|saw|felt|thought|said|told|walked|ran|looked)\b")
});
static EMOTIONAL: Lazy<Regex> = Lazy::new(|| {
    re(r"\b(happy|sad|angry|lonely|peaceful|anxious|excited|worried|joyful|fearful|hopeful|desperate)\b")
});
static DIALOGUE: Lazy<Regex> = Lazy::new(|| re(r#""[^"]*"|'[^']*'"#));

// Technical
static PRESENT_TENSE: Lazy<Regex> = Lazy::new(|| {
    re(r"\b(is|are|can|will|should|must|enables|provides|allows|supports|implements)\b")
});
static TECHNICAL_TERMS: Lazy<Regex> = Lazy::new(|| {
    re(r"\b(system|process|method|function|algorithm|data|software|hardware|interface|protocol|framework|architecture)\b")
});
static ABSTRACT_CONCEPTS: Lazy<Regex> = Lazy::new(|| {
    re(r"\b(concept|principle|theory|approach|methodology|strategy|optimization|efficiency|performance)\b")
});

// Descriptive
static SENSORY: Lazy<Regex> = Lazy::new(|| {
    re(r"\b(bright|dark|soft|rough|smooth|loud|quiet|warm|cold|sweet|bitter|fragrant|colorful|vivid)\b")
});
static MEASUREMENTS: Lazy<Regex> = Lazy::new(|| {
    re(r"\b\d+\s*(feet|meters|inches|cm|mm|miles|km|pounds|kg|degrees|celsius|fahrenheit)\b")
});
static SPATIAL: Lazy<Regex> = Lazy::new(|| {
    re(r"\b(above|below|beside|near|far|left|right|front|back|top|bottom|inside|outside|north|south|east|west)\b")
});
static ADJECTIVES: Lazy<Regex> = Lazy::new(|| {
    re(r"\b(beautiful|large|small|old|new|good|bad|great|little|long|short|high|low|big|young)\b")
});

/// Pattern matches per sentence.
struct Density<'a> {
    text: &'a str,
    sentences: f64,
}

impl Density<'_> {
    fn count(&self, pattern: &Regex) -> usize {
        pattern.find_iter(self.text).count()
    }

    fn of(&self, pattern: &Regex) -> f64 {
        self.count(pattern) as f64 / self.sentences
    }
}

/// Compute the three style indicators for an analysis.
pub fn score_indicators(analysis: &TextAnalysis) -> ContentTypeIndicators {
    let full_text = analysis.sentences.join(" ").to_lowercase();
    let d = Density {
        text: &full_text,
        sentences: analysis.sentences.len().max(1) as f64,
    };

    let entity_bonus = if analysis.entities.is_empty() { 0.0 } else { 0.1 };
    let narrative_score = (d.of(&PAST_TENSE) * 0.4
        + d.of(&EMOTIONAL) * 0.3
        + d.of(&DIALOGUE) * 0.2
        + entity_bonus)
        .min(1.0);

    let technical_score = (d.of(&PRESENT_TENSE) * 0.3
        + d.of(&TECHNICAL_TERMS) * 0.4
        + d.of(&ABSTRACT_CONCEPTS) * 0.3)
        .min(1.0);

    let adjective_ratio = if analysis.keywords.is_empty() {
        0.0
    } else {
        d.count(&ADJECTIVES) as f64 / analysis.keywords.len() as f64
    };
    let descriptive_score = (d.of(&SENSORY) * 0.3
        + d.of(&MEASUREMENTS) * 0.2
        + d.of(&SPATIAL) * 0.2
        + (adjective_ratio * 0.3).min(0.3))
        .min(1.0);

    ContentTypeIndicators {
        narrative_score,
        technical_score,
        descriptive_score,
    }
}

/// Pick the dominant style from a set of indicators.
pub fn classify_indicators(indicators: ContentTypeIndicators) -> ContentTypeAnalysis {
    let ContentTypeIndicators {
        narrative_score: n,
        technical_score: t,
        descriptive_score: d,
    } = indicators;

    let max = n.max(t).max(d);
    let total = n + t + d;

    if max < MIN_DOMINANT_SCORE || total == 0.0 {
        return ContentTypeAnalysis {
            content_type: ContentType::Mixed,
            confidence: LOW_EVIDENCE_CONFIDENCE,
            indicators,
        };
    }

    let content_type = if n == max {
        ContentType::Narrative
    } else if t == max {
        ContentType::Technical
    } else {
        ContentType::Descriptive
    };

    let mut sorted = [n, t, d];
    sorted.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    if max - sorted[1] < MIXED_MARGIN {
        return ContentTypeAnalysis {
            content_type: ContentType::Mixed,
            confidence: CLOSE_CALL_CONFIDENCE,
            indicators,
        };
    }

    ContentTypeAnalysis {
        content_type,
        confidence: (max / total.max(CONFIDENCE_EPSILON)).clamp(0.0, 1.0),
        indicators,
    }
}

/// Classify the writing style of an analysed text.
pub fn detect_content_type(analysis: &TextAnalysis) -> ContentTypeAnalysis {
    classify_indicators(score_indicators(analysis))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze;

    fn indicators(n: f64, t: f64, d: f64) -> ContentTypeIndicators {
        ContentTypeIndicators {
            narrative_score: n,
            technical_score: t,
            descriptive_score: d,
        }
    }

    #[test]
    fn test_low_evidence_is_mixed() {
        let result = classify_indicators(indicators(0.2, 0.1, 0.0));
        assert_eq!(result.content_type, ContentType::Mixed);
        assert_eq!(result.confidence, 0.5);

        let result = classify_indicators(indicators(0.0, 0.0, 0.0));
        assert_eq!(result.content_type, ContentType::Mixed);
    }

    #[test]
    fn test_close_scores_override_winner() {
        let result = classify_indicators(indicators(0.8, 0.7, 0.1));
        assert_eq!(result.content_type, ContentType::Mixed);
        assert_eq!(result.confidence, 0.6);
    }

    #[test]
    fn test_clear_winner() {
        let result = classify_indicators(indicators(0.1, 0.9, 0.2));
        assert_eq!(result.content_type, ContentType::Technical);
        assert!((result.confidence - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_technical_text() {
        let analysis = analyze(
            "The system provides a data interface. The framework supports the protocol \
             and the architecture enables optimization of every process.",
        );
        let result = detect_content_type(&analysis);
        assert_eq!(result.content_type, ContentType::Technical);
        assert!(result.confidence > 0.0 && result.confidence <= 1.0);
    }

    #[test]
    fn test_narrative_text() {
        let analysis = analyze(
            "She walked home and felt lonely. He said nothing and looked away. \
             They were sad and anxious when the night came.",
        );
        let result = detect_content_type(&analysis);
        assert_eq!(result.content_type, ContentType::Narrative);
    }

    #[test]
    fn test_empty_analysis() {
        let result = detect_content_type(&analyze(""));
        assert_eq!(result.content_type, ContentType::Mixed);
        assert_eq!(result.indicators.narrative_score, 0.0);
    }
}
