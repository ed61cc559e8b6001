use serde::Deserialize;

/// Batch response from the catalog. Entries come back in request order,
/// with an explicit `null` for every id the catalog could not resolve.
#[derive(Debug, Deserialize)]
pub(crate) struct EpisodesResponse {
    pub episodes: Vec<Option<CatalogEpisode>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEpisode {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Artwork renditions, ordered largest-first.
    #[serde(default)]
    pub images: Vec<CatalogImage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogImage {
    pub url: String,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub width: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_batch_with_null_entries() {
        let raw = r#"{
            "episodes": [
                {
                    "id": "ep_1",
                    "name": "Pilot",
                    "images": [
                        { "url": "https://img.example/640.jpg", "height": 640, "width": 640 },
                        { "url": "https://img.example/300.jpg", "height": 300, "width": 300 },
                        { "url": "https://img.example/64.jpg", "height": 64, "width": 64 }
                    ]
                },
                null
            ]
        }"#;

        let response: EpisodesResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.episodes.len(), 2);

        let first = response.episodes[0].as_ref().unwrap();
        assert_eq!(first.id, "ep_1");
        assert_eq!(first.images[1].url, "https://img.example/300.jpg");

        assert!(response.episodes[1].is_none());
    }

    #[test]
    fn tolerates_missing_optional_fields() {
        let raw = r#"{ "episodes": [ { "id": "ep_2" } ] }"#;

        let response: EpisodesResponse = serde_json::from_str(raw).unwrap();
        let episode = response.episodes[0].as_ref().unwrap();
        assert!(episode.name.is_none());
        assert!(episode.images.is_empty());
    }
}
