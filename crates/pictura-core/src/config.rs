//! Query-generation configuration: built-in defaults, partial overrides,
//! validation and merging.
//!
//! Loading is a two-stage pipeline. [`validate`] decides whether an override
//! is acceptable as a whole; [`merge`] lays an accepted override over the
//! defaults. A rejected override is discarded entirely, never applied in part.

use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};

pub const DEFAULT_GENERIC_TERMS: &[&str] = &[
    "thing", "stuff", "item", "object", "place", "area", "way", "time", "person", "people",
    "work", "life", "world", "day", "year", "part", "number", "group", "problem", "fact",
    "hand", "eye", "case", "point",
];

pub const DEFAULT_COLORS: &[&str] = &[
    "vibrant", "muted", "warm", "cool", "bright", "dark", "colorful", "monochrome",
];
pub const DEFAULT_MOODS: &[&str] = &[
    "peaceful", "dramatic", "energetic", "calm", "mysterious", "serene", "dynamic",
    "contemplative",
];
pub const DEFAULT_SETTINGS: &[&str] = &[
    "natural", "urban", "indoor", "outdoor", "minimal", "rustic", "modern", "vintage",
];
pub const DEFAULT_LIGHTING: &[&str] = &[
    "sunset", "sunrise", "golden hour", "soft light", "dramatic light", "natural light",
    "backlit", "silhouette",
];

/// Relative weight of each relevance signal. Sums are not required to equal 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weights {
    pub keyword_importance: f64,
    pub theme_strength: f64,
    pub query_specificity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thresholds {
    /// Candidates scoring below this are dropped.
    pub min_relevance_score: f64,
    /// Upper bound on ranked candidates kept by the optimizer.
    pub max_queries: usize,
    /// Minimum words for a below-threshold candidate to be used as filler.
    pub min_query_words: usize,
}

/// Descriptor vocabulary buckets used to decorate candidate queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualDescriptors {
    pub colors: Vec<String>,
    pub moods: Vec<String>,
    pub settings: Vec<String>,
    pub lighting: Vec<String>,
}

impl VisualDescriptors {
    /// Colors, moods and settings concatenated, in that order.
    pub fn general(&self) -> Vec<String> {
        self.colors
            .iter()
            .chain(&self.moods)
            .chain(&self.settings)
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentTypeWeights {
    pub narrative: f64,
    pub technical: f64,
    pub descriptive: f64,
}

/// Complete configuration for one query-generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryGenerationConfig {
    pub weights: Weights,
    pub thresholds: Thresholds,
    pub generic_terms: Vec<String>,
    pub visual_descriptors: VisualDescriptors,
    pub content_type_weights: ContentTypeWeights,
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

static DEFAULT_CONFIG: Lazy<QueryGenerationConfig> = Lazy::new(|| QueryGenerationConfig {
    weights: Weights {
        keyword_importance: 0.4,
        theme_strength: 0.3,
        query_specificity: 0.3,
    },
    thresholds: Thresholds {
        min_relevance_score: 0.3,
        max_queries: 8,
        min_query_words: 2,
    },
    generic_terms: owned(DEFAULT_GENERIC_TERMS),
    visual_descriptors: VisualDescriptors {
        colors: owned(DEFAULT_COLORS),
        moods: owned(DEFAULT_MOODS),
        settings: owned(DEFAULT_SETTINGS),
        lighting: owned(DEFAULT_LIGHTING),
    },
    content_type_weights: ContentTypeWeights {
        narrative: 0.33,
        technical: 0.33,
        descriptive: 0.34,
    },
});

impl QueryGenerationConfig {
    /// The shared built-in defaults.
    pub fn defaults() -> &'static QueryGenerationConfig {
        &DEFAULT_CONFIG
    }

    /// Whether a word is one of the configured generic terms.
    pub fn is_generic(&self, word: &str) -> bool {
        self.generic_terms.iter().any(|t| t == word)
    }
}

impl Default for QueryGenerationConfig {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}

// ---------------------------------------------------------------------------
// Partial overrides
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightsOverride {
    pub keyword_importance: Option<f64>,
    pub theme_strength: Option<f64>,
    pub query_specificity: Option<f64>,
}

/// Integer thresholds are signed so out-of-range values reach [`validate`]
/// instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdsOverride {
    pub min_relevance_score: Option<f64>,
    pub max_queries: Option<i64>,
    pub min_query_words: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisualDescriptorsOverride {
    pub colors: Option<Vec<String>>,
    pub moods: Option<Vec<String>>,
    pub settings: Option<Vec<String>>,
    pub lighting: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentTypeWeightsOverride {
    pub narrative: Option<f64>,
    pub technical: Option<f64>,
    pub descriptive: Option<f64>,
}

/// A partial configuration in the shape of [`QueryGenerationConfig`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverride {
    pub weights: Option<WeightsOverride>,
    pub thresholds: Option<ThresholdsOverride>,
    pub generic_terms: Option<Vec<String>>,
    pub visual_descriptors: Option<VisualDescriptorsOverride>,
    pub content_type_weights: Option<ContentTypeWeightsOverride>,
}

impl ConfigOverride {
    /// Parse an override from JSON. Wrong field types are an error.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        Self::deserialize(value).map_err(|e| Error::Config(e.to_string()))
    }
}

fn unit_interval(v: Option<f64>) -> bool {
    v.map_or(true, |v| v.is_finite() && (0.0..=1.0).contains(&v))
}

/// A weight that must be present. `weights` overrides are all-or-nothing.
fn required_unit(v: Option<f64>) -> bool {
    v.is_some() && unit_interval(v)
}

fn at_least_one(v: Option<i64>) -> bool {
    v.map_or(true, |v| v >= 1)
}

fn non_negative(v: Option<f64>) -> bool {
    v.map_or(true, |v| v.is_finite() && v >= 0.0)
}

fn non_empty(v: &Option<Vec<String>>) -> bool {
    v.as_ref().map_or(true, |items| !items.is_empty())
}

/// Check an override without applying it.
pub fn validate(o: &ConfigOverride) -> bool {
    if let Some(w) = &o.weights {
        if !(required_unit(w.keyword_importance)
            && required_unit(w.theme_strength)
            && required_unit(w.query_specificity))
        {
            warn!("Invalid weight values, must be numbers between 0 and 1");
            return false;
        }
    }

    if let Some(t) = &o.thresholds {
        if !(unit_interval(t.min_relevance_score)
            && at_least_one(t.max_queries)
            && at_least_one(t.min_query_words))
        {
            warn!("Invalid threshold values");
            return false;
        }
    }

    if let Some(d) = &o.visual_descriptors {
        if !(non_empty(&d.colors)
            && non_empty(&d.moods)
            && non_empty(&d.settings)
            && non_empty(&d.lighting))
        {
            warn!("visualDescriptors buckets must be non-empty arrays");
            return false;
        }
    }

    if let Some(c) = &o.content_type_weights {
        if !(non_negative(c.narrative) && non_negative(c.technical) && non_negative(c.descriptive))
        {
            warn!("contentTypeWeights must be finite non-negative numbers");
            return false;
        }
    }

    true
}

/// Lay an override over `defaults`, field by field. Does not validate.
pub fn merge(o: &ConfigOverride, defaults: &QueryGenerationConfig) -> QueryGenerationConfig {
    let mut config = defaults.clone();

    if let Some(w) = &o.weights {
        let target = &mut config.weights;
        target.keyword_importance = w.keyword_importance.unwrap_or(target.keyword_importance);
        target.theme_strength = w.theme_strength.unwrap_or(target.theme_strength);
        target.query_specificity = w.query_specificity.unwrap_or(target.query_specificity);
    }

    if let Some(t) = &o.thresholds {
        let target = &mut config.thresholds;
        target.min_relevance_score = t.min_relevance_score.unwrap_or(target.min_relevance_score);
        if let Some(n) = t.max_queries {
            target.max_queries = n.max(1) as usize;
        }
        if let Some(n) = t.min_query_words {
            target.min_query_words = n.max(1) as usize;
        }
    }

    if let Some(terms) = &o.generic_terms {
        config.generic_terms = terms.clone();
    }

    if let Some(d) = &o.visual_descriptors {
        let target = &mut config.visual_descriptors;
        for (src, dst) in [
            (&d.colors, &mut target.colors),
            (&d.moods, &mut target.moods),
            (&d.settings, &mut target.settings),
            (&d.lighting, &mut target.lighting),
        ] {
            if let Some(words) = src {
                *dst = words.clone();
            }
        }
    }

    if let Some(c) = &o.content_type_weights {
        let target = &mut config.content_type_weights;
        target.narrative = c.narrative.unwrap_or(target.narrative);
        target.technical = c.technical.unwrap_or(target.technical);
        target.descriptive = c.descriptive.unwrap_or(target.descriptive);
    }

    config
}

/// Resolve the configuration for a run: defaults, or a validated override
/// merged onto them.
pub fn load_config(o: Option<&ConfigOverride>) -> QueryGenerationConfig {
    let Some(o) = o else {
        debug!("Using default query configuration");
        return QueryGenerationConfig::default();
    };

    if !validate(o) {
        warn!("Invalid custom configuration provided, using defaults");
        return QueryGenerationConfig::default();
    }

    debug!("Custom query configuration loaded");
    merge(o, QueryGenerationConfig::defaults())
}

/// Like [`load_config`], starting from untyped JSON. A value that does not
/// fit the override shape falls back to defaults.
pub fn load_config_json(value: &serde_json::Value) -> QueryGenerationConfig {
    match ConfigOverride::from_json(value) {
        Ok(o) => load_config(Some(&o)),
        Err(e) => {
            warn!("Malformed configuration override ({}), using defaults", e);
            QueryGenerationConfig::default()
        }
    }
}

/// Read a JSON override file. IO and JSON syntax errors are returned; a
/// well-formed but invalid override falls back to defaults.
pub fn load_config_file(path: &Path) -> Result<QueryGenerationConfig> {
    let raw = std::fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    info!("Loaded query configuration from {}", path.display());
    Ok(load_config_json(&value))
}
