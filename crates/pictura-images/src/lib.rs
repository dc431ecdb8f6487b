//! Photo search seam with query-driven collection and curated fallbacks.

pub mod collect;
pub mod fallback;
pub mod types;

pub use collect::{collect_images, gather_images, NoopSearch, PhotoSearch};
pub use fallback::{curated_images, fallback_images};
pub use types::{Image, ImageSource, ImageUrls, ImageUser, SearchResponse};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_wire_format() {
        let body = r#"{
            "total": 1,
            "total_pages": 1,
            "results": [{
                "id": "abc123",
                "description": null,
                "alt_description": "green hills",
                "urls": {
                    "raw": "r", "full": "f", "regular": "g", "small": "s", "thumb": "t"
                },
                "user": { "name": "Ana", "username": "ana" },
                "width": 4000,
                "height": 3000
            }]
        }"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        let image = &response.results[0];
        assert_eq!(image.id, "abc123");
        assert_eq!(image.description, None);
        assert_eq!(image.alt_description.as_deref(), Some("green hills"));
        assert_eq!(image.urls.thumb, "t");
        assert_eq!(image.width, 4000);

        let value = serde_json::to_value(image).unwrap();
        assert!(value.get("alt_description").is_some());
    }
}
