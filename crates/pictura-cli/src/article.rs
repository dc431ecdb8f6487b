//! Full text-to-images run: analysis, queries, image gathering and a title.

use pictura_analyze::{analyze, detect_content_type, ContentType, KeywordData};
use pictura_core::{Picker, QueryGenerationConfig};
use pictura_images::{gather_images, Image, ImageSource, PhotoSearch};
use pictura_query::generate_queries_with;
use serde::Serialize;
use tracing::info;

/// Shortest accepted input, in characters after trimming.
pub const MIN_TEXT_CHARS: usize = 50;
/// First sentences at least this long are not used as titles.
const MAX_TITLE_CHARS: usize = 100;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleReport {
    pub title: String,
    pub keywords: Vec<String>,
    pub themes: Vec<String>,
    pub content_type: ContentType,
    pub queries: Vec<String>,
    pub image_source: ImageSource,
    pub image_count: usize,
    pub images: Vec<Image>,
}

/// Title from a short first sentence, else from the top three keywords.
pub fn generate_title(text: &str, keywords: &[KeywordData]) -> String {
    let first = text
        .split(['.', '!', '?'])
        .map(str::trim)
        .find(|s| !s.is_empty());

    if let Some(sentence) = first {
        if sentence.chars().count() < MAX_TITLE_CHARS
            && !sentence.to_lowercase().contains("the following")
        {
            return sentence.to_string();
        }
    }

    if keywords.is_empty() {
        return "Untitled Article".to_string();
    }

    let words: Vec<String> = keywords.iter().take(3).map(|k| capitalize(&k.word)).collect();
    format!("Exploring {}", words.join(", "))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn build_report(
    text: &str,
    config: &QueryGenerationConfig,
    provider: &dyn PhotoSearch,
    picker: &mut dyn Picker,
) -> anyhow::Result<ArticleReport> {
    if text.trim().chars().count() < MIN_TEXT_CHARS {
        anyhow::bail!("Please provide at least {} characters of text", MIN_TEXT_CHARS);
    }

    let analysis = analyze(text);
    let content_type = detect_content_type(&analysis).content_type;
    let queries = generate_queries_with(&analysis, config, picker);
    let (images, image_source) = gather_images(provider, &queries, picker);
    info!("Using {} images for article generation", image_source);

    Ok(ArticleReport {
        title: generate_title(text, &analysis.keywords),
        keywords: analysis.keyword_words().map(str::to_string).collect(),
        themes: analysis.themes,
        content_type,
        queries,
        image_source,
        image_count: images.len(),
        images,
    })
}
