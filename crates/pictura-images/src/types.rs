//! Image types matching the photo provider's search API.

use serde::{Deserialize, Serialize};

/// Rendition URLs for one photo, largest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrls {
    pub raw: String,
    pub full: String,
    pub regular: String,
    pub small: String,
    pub thumb: String,
}

/// Photographer credit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUser {
    pub name: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub id: String,
    pub description: Option<String>,
    pub alt_description: Option<String>,
    pub urls: ImageUrls,
    pub user: ImageUser,
    pub width: u32,
    pub height: u32,
}

/// Search response envelope returned by the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub total: u64,
    pub total_pages: u64,
    pub results: Vec<Image>,
}

/// Where a set of images came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSource {
    Provider,
    Fallback,
}

impl std::fmt::Display for ImageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageSource::Provider => write!(f, "provider"),
            ImageSource::Fallback => write!(f, "fallback"),
        }
    }
}
