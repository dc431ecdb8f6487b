//! Style-specific candidate generators and the policy that blends them.
//!
//! Each generator combines the top keywords, themes and (for narrative and
//! descriptive text) the first entity with descriptor vocabulary. None of
//! them depends on another's output.

use pictura_analyze::{ContentType, TextAnalysis};
use pictura_core::{pick, Error, Picker, QueryGenerationConfig, Result};

use crate::types::{QueryComponents, QueryStrategy, SearchQuery};

/// Modifiers that give technical subjects a clean, conceptual look.
pub const PROFESSIONAL_MODIFIERS: &[&str] = &[
    "modern", "minimal", "abstract", "clean", "professional", "conceptual",
];

/// Percentage of a non-dominant generator's candidates kept when blending.
pub const MINOR_SHARE_PERCENT: usize = 30;

/// Bare keyword candidates appended to every pool.
pub const BARE_KEYWORD_COUNT: usize = 2;

fn draw(picker: &mut dyn Picker, bucket: &[String], name: &str) -> Result<String> {
    pick(picker, bucket)
        .cloned()
        .ok_or_else(|| Error::Generation(format!("descriptor bucket '{}' is empty", name)))
}

/// Emotional and atmospheric queries.
pub fn narrative_queries(
    analysis: &TextAnalysis,
    config: &QueryGenerationConfig,
    picker: &mut dyn Picker,
) -> Result<Vec<SearchQuery>> {
    let descriptors = &config.visual_descriptors;
    let emotional: Vec<String> = descriptors
        .moods
        .iter()
        .chain(&descriptors.lighting)
        .cloned()
        .collect();
    let mut queries = Vec::new();

    for kw in analysis.keywords.iter().take(2) {
        let descriptor = draw(picker, &emotional, "moods+lighting")?;
        queries.push(SearchQuery::new(
            format!("{} {}", descriptor, kw.word),
            QueryStrategy::Contextual,
            QueryComponents {
                keywords: vec![kw.word.clone()],
                descriptors: vec![descriptor],
                ..Default::default()
            },
        ));
    }

    if let (Some(entity), Some(theme)) = (analysis.entities.first(), analysis.themes.first()) {
        let mood = draw(picker, &descriptors.moods, "moods")?;
        queries.push(SearchQuery::new(
            format!("{} {} {}", mood, entity, theme),
            QueryStrategy::Entity,
            QueryComponents {
                entities: vec![entity.clone()],
                themes: vec![theme.clone()],
                descriptors: vec![mood],
                ..Default::default()
            },
        ));
    }

    for theme in &analysis.themes {
        let lighting = draw(picker, &descriptors.lighting, "lighting")?;
        queries.push(SearchQuery::new(
            format!("{} {}", theme, lighting),
            QueryStrategy::Theme,
            QueryComponents {
                themes: vec![theme.clone()],
                descriptors: vec![lighting],
                ..Default::default()
            },
        ));
    }

    Ok(queries)
}

/// Clean, professional and abstract queries.
pub fn technical_queries(
    analysis: &TextAnalysis,
    config: &QueryGenerationConfig,
    picker: &mut dyn Picker,
) -> Result<Vec<SearchQuery>> {
    let mut queries = Vec::new();

    for kw in analysis.keywords.iter().take(2) {
        let modifier = pick(picker, PROFESSIONAL_MODIFIERS)
            .copied()
            .unwrap_or("modern")
            .to_string();
        queries.push(SearchQuery::new(
            format!("{} {}", modifier, kw.word),
            QueryStrategy::Keyword,
            QueryComponents {
                keywords: vec![kw.word.clone()],
                descriptors: vec![modifier],
                ..Default::default()
            },
        ));
    }

    let setting = if config.visual_descriptors.settings.iter().any(|s| s == "minimal") {
        "minimal"
    } else {
        "modern"
    };
    for theme in &analysis.themes {
        queries.push(SearchQuery::new(
            format!("{} {}", setting, theme),
            QueryStrategy::Theme,
            QueryComponents {
                themes: vec![theme.clone()],
                descriptors: vec![setting.to_string()],
                ..Default::default()
            },
        ));
    }

    if let [first, second, ..] = analysis.keywords.as_slice() {
        queries.push(SearchQuery::new(
            format!("abstract {} {}", first.word, second.word),
            QueryStrategy::Combined,
            QueryComponents {
                keywords: vec![first.word.clone(), second.word.clone()],
                descriptors: vec!["abstract".to_string()],
                ..Default::default()
            },
        ));
    }

    Ok(queries)
}

/// Concrete scene queries with colors, settings and lighting.
pub fn descriptive_queries(
    analysis: &TextAnalysis,
    config: &QueryGenerationConfig,
    picker: &mut dyn Picker,
) -> Result<Vec<SearchQuery>> {
    let descriptors = &config.visual_descriptors;
    let mut queries = Vec::new();

    for kw in analysis.keywords.iter().take(3) {
        let color = draw(picker, &descriptors.colors, "colors")?;
        let setting = draw(picker, &descriptors.settings, "settings")?;
        queries.push(SearchQuery::new(
            format!("{} {} {}", color, kw.word, setting),
            QueryStrategy::Contextual,
            QueryComponents {
                keywords: vec![kw.word.clone()],
                descriptors: vec![color, setting],
                ..Default::default()
            },
        ));
    }

    if let Some(entity) = analysis.entities.first() {
        let setting = draw(picker, &descriptors.settings, "settings")?;
        queries.push(SearchQuery::new(
            format!("{} {}", entity, setting),
            QueryStrategy::Entity,
            QueryComponents {
                entities: vec![entity.clone()],
                descriptors: vec![setting],
                ..Default::default()
            },
        ));
    }

    for theme in &analysis.themes {
        let color = draw(picker, &descriptors.colors, "colors")?;
        let lighting = draw(picker, &descriptors.lighting, "lighting")?;
        queries.push(SearchQuery::new(
            format!("{} {} {}", color, theme, lighting),
            QueryStrategy::Theme,
            QueryComponents {
                themes: vec![theme.clone()],
                descriptors: vec![color, lighting],
                ..Default::default()
            },
        ));
    }

    Ok(queries)
}

/// First ⌈30%⌉ of a non-dominant generator's output.
fn minor_share(mut queries: Vec<SearchQuery>) -> Vec<SearchQuery> {
    let keep = (queries.len() * MINOR_SHARE_PERCENT).div_ceil(100);
    queries.truncate(keep);
    queries
}

/// Run all three generators and blend them for the detected content type.
///
/// The dominant generator contributes everything, the other two their minor
/// share; `Mixed` takes all three in full. The top keywords are appended as
/// bare candidates.
pub fn blend_candidates(
    content_type: ContentType,
    analysis: &TextAnalysis,
    config: &QueryGenerationConfig,
    picker: &mut dyn Picker,
) -> Result<Vec<SearchQuery>> {
    let narrative = narrative_queries(analysis, config, picker)?;
    let technical = technical_queries(analysis, config, picker)?;
    let descriptive = descriptive_queries(analysis, config, picker)?;

    let (major, first_minor, second_minor) = match content_type {
        ContentType::Narrative => (narrative, minor_share(technical), minor_share(descriptive)),
        ContentType::Technical => (technical, minor_share(narrative), minor_share(descriptive)),
        ContentType::Descriptive => (descriptive, minor_share(narrative), minor_share(technical)),
        ContentType::Mixed => (narrative, technical, descriptive),
    };

    let mut pool: Vec<SearchQuery> = major
        .into_iter()
        .chain(first_minor)
        .chain(second_minor)
        .collect();
    pool.extend(
        analysis
            .keyword_words()
            .take(BARE_KEYWORD_COUNT)
            .map(SearchQuery::keyword),
    );
    Ok(pool)
}
