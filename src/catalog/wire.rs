//! Decoding of the catalog API response envelope
//!
//! The envelope looks like `{ "code": 200, "status": "Ok", "data": { "results": [...] } }`.
//! Error responses carry a string `code` such as `"InvalidCredentials"` and a
//! `message` instead of `data`.

use serde::Deserialize;

use super::types::{CharacterRef, ComicRecord};
use crate::error::ComiqError;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StatusCode {
    Number(i64),
    Text(String),
}

impl StatusCode {
    fn is_ok(&self) -> bool {
        matches!(self, StatusCode::Number(200))
    }

    fn label(&self) -> String {
        match self {
            StatusCode::Number(n) => n.to_string(),
            StatusCode::Text(s) => s.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    code: StatusCode,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<DataContainer>,
}

#[derive(Debug, Deserialize)]
struct DataContainer {
    #[serde(default)]
    results: Vec<RawComic>,
}

#[derive(Debug, Deserialize)]
struct RawComic {
    id: u64,
    #[serde(default)]
    title: Option<String>,
    #[serde(rename = "type", default)]
    comic_type: Option<String>,
    #[serde(default)]
    format: Option<String>,
    #[serde(rename = "pageCount", default)]
    page_count: Option<u32>,
    #[serde(default)]
    characters: ResourceList,
    #[serde(default)]
    creators: ResourceList,
    #[serde(default)]
    stories: ResourceList,
    #[serde(default)]
    thumbnail: Option<Image>,
}

#[derive(Debug, Deserialize, Default)]
struct ResourceList {
    #[serde(default)]
    available: u32,
    #[serde(default)]
    items: Vec<ResourceSummary>,
}

#[derive(Debug, Deserialize)]
struct ResourceSummary {
    #[serde(rename = "resourceURI", default)]
    resource_uri: Option<String>,
    name: String,
}

#[derive(Debug, Deserialize)]
struct Image {
    path: String,
    extension: String,
}

impl ResourceSummary {
    /// Resource URIs end in the numeric id, e.g. `.../characters/1009610`
    fn id(&self) -> u64 {
        self.resource_uri
            .as_deref()
            .and_then(|uri| uri.rsplit('/').next())
            .and_then(|segment| segment.parse().ok())
            .unwrap_or(0)
    }
}

impl From<RawComic> for ComicRecord {
    fn from(raw: RawComic) -> Self {
        let thumbnail_url = raw
            .thumbnail
            .map(|img| format!("{}.{}", img.path, img.extension))
            .unwrap_or_default();

        ComicRecord {
            id: raw.id,
            title: raw.title.unwrap_or_default(),
            comic_type: raw.comic_type.or(raw.format).unwrap_or_default(),
            character_count: raw.characters.available,
            characters: raw
                .characters
                .items
                .into_iter()
                .map(|item| CharacterRef {
                    id: item.id(),
                    name: item.name,
                })
                .collect(),
            thumbnail_url,
            page_count: raw.page_count.unwrap_or(0),
            creator_count: raw.creators.available,
            story_count: raw.stories.available,
        }
    }
}

/// Decode a catalog response body into comic records
///
/// Returns `ComiqError::Api` when the envelope reports anything other than 200.
pub fn parse_catalog(json: &str) -> Result<Vec<ComicRecord>, ComiqError> {
    let envelope: Envelope = serde_json::from_str(json)?;

    if !envelope.code.is_ok() {
        let message = envelope
            .message
            .or(envelope.status)
            .unwrap_or_else(|| "Unknown error".to_string());
        return Err(ComiqError::Api {
            code: envelope.code.label(),
            message,
        });
    }

    let results = envelope.data.map(|d| d.results).unwrap_or_default();
    Ok(results.into_iter().map(ComicRecord::from).collect())
}
