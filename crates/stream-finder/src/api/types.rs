//! Response payloads of the streaming-metadata mirrors.
//!
//! All list fields default to empty: a mirror answering without the
//! expected key is a successful, empty response, not a failure.

use serde::Deserialize;
use shared::{Episode, MirrorSearchHit, StreamSource};

/// `GET {base}/{title}` response
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchHitPayload>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHitPayload {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub sub_or_dub: Option<String>,
}

impl From<SearchHitPayload> for MirrorSearchHit {
    fn from(payload: SearchHitPayload) -> Self {
        Self {
            id: payload.id,
            title: payload.title,
            url: payload.url,
            image: payload.image,
            release_date: payload.release_date,
            sub_or_dub: payload.sub_or_dub,
        }
    }
}

/// `GET {base}/info/{id}` response
#[derive(Debug, Clone, Deserialize)]
pub struct InfoResponse {
    #[serde(default)]
    pub episodes: Vec<EpisodePayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EpisodePayload {
    pub id: String,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl From<EpisodePayload> for Episode {
    fn from(payload: EpisodePayload) -> Self {
        Self {
            id: payload.id,
            number: payload.number,
            title: payload.title,
            url: payload.url,
        }
    }
}

/// `GET {base}/watch/{episodeId}` response
#[derive(Debug, Clone, Deserialize)]
pub struct WatchResponse {
    #[serde(default)]
    pub sources: Vec<SourcePayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourcePayload {
    pub url: String,
    #[serde(default)]
    pub quality: Option<String>,
    #[serde(rename = "isM3U8", default)]
    pub is_m3u8: bool,
}

impl From<SourcePayload> for StreamSource {
    fn from(payload: SourcePayload) -> Self {
        Self {
            url: payload.url,
            quality: payload.quality,
            is_adaptive: payload.is_m3u8,
        }
    }
}
