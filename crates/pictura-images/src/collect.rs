//! Query-driven image collection through a [`PhotoSearch`] provider.

use std::collections::HashSet;

use pictura_core::{Picker, Result};
use tracing::{debug, info, warn};

use crate::fallback::fallback_images;
use crate::types::{Image, ImageSource};

/// Images requested per query.
pub const IMAGES_PER_QUERY: usize = 3;
/// Stop issuing queries once this many images have been gathered.
pub const GATHER_LIMIT: usize = 12;
/// Most images returned from a collection run.
pub const MAX_IMAGES: usize = 10;

/// A photo search backend.
pub trait PhotoSearch {
    /// Search for up to `per_page` landscape photos matching `query`.
    fn search(&self, query: &str, per_page: usize) -> Result<Vec<Image>>;
}

/// Provider used when no credentials are configured. Always empty.
pub struct NoopSearch;

impl PhotoSearch for NoopSearch {
    fn search(&self, _query: &str, _per_page: usize) -> Result<Vec<Image>> {
        Ok(Vec::new())
    }
}

/// Run `queries` in order, keeping the first copy of each image id.
///
/// Provider errors are logged and the query skipped.
pub fn collect_images<S: AsRef<str>>(provider: &dyn PhotoSearch, queries: &[S]) -> Vec<Image> {
    let mut images: Vec<Image> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    info!("Starting image search for {} queries", queries.len());

    for query in queries {
        let query = query.as_ref();
        if images.len() >= GATHER_LIMIT {
            debug!("Reached image limit, stopping search");
            break;
        }

        match provider.search(query, IMAGES_PER_QUERY) {
            Ok(found) if found.is_empty() => debug!("No images found for query \"{}\"", query),
            Ok(found) => {
                let before = images.len();
                images.extend(found.into_iter().filter(|img| seen.insert(img.id.clone())));
                debug!(
                    "Added {} unique images from query \"{}\"",
                    images.len() - before,
                    query
                );
            }
            Err(e) => warn!("Image search failed for query \"{}\": {}", query, e),
        }
    }

    images.truncate(MAX_IMAGES);
    info!("Final image collection: {} images", images.len());
    images
}

/// Collected images, or the curated fallback when the provider found none.
pub fn gather_images<S: AsRef<str>>(
    provider: &dyn PhotoSearch,
    queries: &[S],
    picker: &mut dyn Picker,
) -> (Vec<Image>, ImageSource) {
    let images = collect_images(provider, queries);
    if images.is_empty() {
        info!("No provider images, using curated fallback");
        (fallback_images(picker), ImageSource::Fallback)
    } else {
        (images, ImageSource::Provider)
    }
}
