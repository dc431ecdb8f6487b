//! Curated landscape photos served when the provider returns nothing.

use pictura_core::{shuffle, Picker};

use crate::types::{Image, ImageUrls, ImageUser};

/// Fewest curated images returned; one more is added at random.
pub const MIN_FALLBACK_IMAGES: usize = 3;

const PHOTO_BASE: &str = "https://images.unsplash.com";
const IXLIB: &str = "ixlib=rb-4.0.3";
const RENDITION: &str = "fm=jpg&crop=entropy&cs=srgb";

// (id, description, alt description, photo slug, author name, author username)
const CURATED: &[(&str, &str, &str, &str, &str, &str)] = &[
    (
        "fallback-1",
        "Beautiful mountain landscape at sunset",
        "Stunning mountain peaks with golden sunset light",
        "photo-1506905925346-21bda4d32df4",
        "Luca Bravo",
        "lucabravo",
    ),
    (
        "fallback-2",
        "Modern minimalist workspace setup",
        "Clean desk with laptop, coffee, and plants",
        "photo-1497366216548-37526070297c",
        "Domenico Loia",
        "domenicoloia",
    ),
    (
        "fallback-3",
        "Ocean waves crashing on rocky shore",
        "Dramatic seascape with waves and rocks",
        "photo-1505142468610-359e7d316be0",
        "Jeremy Bishop",
        "jeremybishop",
    ),
    (
        "fallback-4",
        "Abstract colorful geometric shapes",
        "Modern abstract art with vibrant colors",
        "photo-1558618047-3c8c76ca7d13",
        "Pawel Czerwinski",
        "pawel_czerwinski",
    ),
    (
        "fallback-5",
        "Urban city skyline at night",
        "City buildings illuminated at dusk",
        "photo-1449824913935-59a10b8d2000",
        "Pedro Lastra",
        "peterlaster",
    ),
];

fn urls_for(slug: &str) -> ImageUrls {
    let base = format!("{PHOTO_BASE}/{slug}?{IXLIB}");
    let sized = |w: u32| format!("{base}&q=80&{RENDITION}&w={w}&fit=max");
    ImageUrls {
        raw: base.clone(),
        full: format!("{base}&q=85&{RENDITION}"),
        regular: sized(1080),
        small: sized(400),
        thumb: sized(200),
    }
}

/// All curated images in their canonical order.
pub fn curated_images() -> Vec<Image> {
    CURATED
        .iter()
        .map(|&(id, description, alt, slug, name, username)| Image {
            id: id.to_string(),
            description: Some(description.to_string()),
            alt_description: Some(alt.to_string()),
            urls: urls_for(slug),
            user: ImageUser {
                name: name.to_string(),
                username: username.to_string(),
            },
            width: 1920,
            height: 1080,
        })
        .collect()
}

/// A shuffled selection of three or four curated images.
pub fn fallback_images(picker: &mut dyn Picker) -> Vec<Image> {
    let mut images = curated_images();
    shuffle(picker, &mut images);
    let count = MIN_FALLBACK_IMAGES + picker.pick_index(2);
    images.truncate(count);
    images
}

#[cfg(test)]
mod tests {
    use super::*;
    use pictura_core::RandomPicker;
    use std::collections::HashSet;

    #[test]
    fn test_curated_urls() {
        let images = curated_images();
        assert_eq!(images.len(), 5);
        let first = &images[0];
        assert_eq!(
            first.urls.raw,
            "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?ixlib=rb-4.0.3"
        );
        assert_eq!(
            first.urls.thumb,
            "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?ixlib=rb-4.0.3\
             &q=80&fm=jpg&crop=entropy&cs=srgb&w=200&fit=max"
        );
        assert_eq!(first.user.username, "lucabravo");
    }

    #[test]
    fn test_fallback_selection_size() {
        for seed in 0..20 {
            let images = fallback_images(&mut RandomPicker::with_seed(seed));
            assert!((3..=4).contains(&images.len()), "seed {seed}");
            let ids: HashSet<&str> = images.iter().map(|i| i.id.as_str()).collect();
            assert_eq!(ids.len(), images.len());
            assert!(ids.iter().all(|id| id.starts_with("fallback-")));
        }
    }
}
