//! Typed client for the streaming-metadata mirror service.

use super::rotator::{AttemptError, EndpointRotator, MirrorError};
use super::types::{InfoResponse, SearchResponse, WatchResponse};
use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{Episode, MirrorSearchHit, MirrorsConfig, StreamSource};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Probe path used for mirror health checks
const HEALTH_PROBE_QUERY: &str = "naruto";

/// Health status of one configured mirror
#[derive(Debug, Clone, Serialize)]
pub struct EndpointHealth {
    pub endpoint: String,
    pub healthy: bool,
}

/// Streaming-metadata client with mirror failover.
///
/// All listing operations return `Ok` with an empty collection when the
/// backend genuinely has no matches, and [`MirrorError::Exhausted`] when
/// no mirror could be reached at all.
pub struct MirrorClient {
    client: Client,
    rotator: EndpointRotator,
    health_timeout: Duration,
}

impl MirrorClient {
    /// Create a client from the mirror configuration
    pub fn new(config: &MirrorsConfig) -> Result<Self> {
        // Deadlines are enforced per attempt by the rotator, so the HTTP
        // client itself only bounds connection establishment.
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .user_agent(concat!("animesensei/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        let rotator = EndpointRotator::new(
            config.endpoints.clone(),
            Duration::from_secs(config.request_timeout_secs),
            config.sticky_cursor,
        )?;

        Ok(Self {
            client,
            rotator,
            health_timeout: Duration::from_secs(config.health_timeout_secs),
        })
    }

    /// The rotator backing this client
    pub fn rotator(&self) -> &EndpointRotator {
        &self.rotator
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, AttemptError> {
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AttemptError::Http(status));
        }

        Ok(response.json::<T>().await?)
    }

    /// Search the mirrors for a title
    pub async fn search(&self, title: &str) -> Result<Vec<MirrorSearchHit>, MirrorError> {
        let encoded = urlencoding::encode(title).into_owned();

        let response: SearchResponse = self
            .rotator
            .perform_with_failover("search", None, |base| {
                self.get_json(format!("{}/{}", base, encoded))
            })
            .await?;

        info!(title, hits = response.results.len(), "Mirror search complete");
        Ok(response.results.into_iter().map(Into::into).collect())
    }

    /// List episodes for a mirror anime id
    pub async fn episodes(&self, anime_id: &str) -> Result<Vec<Episode>, MirrorError> {
        let response: InfoResponse = self
            .rotator
            .perform_with_failover("episodes", None, |base| {
                self.get_json(format!("{}/info/{}", base, anime_id))
            })
            .await?;

        debug!(anime_id, episodes = response.episodes.len(), "Fetched episode list");
        Ok(response.episodes.into_iter().map(Into::into).collect())
    }

    /// List stream sources for a mirror episode id
    pub async fn stream_sources(&self, episode_id: &str) -> Result<Vec<StreamSource>, MirrorError> {
        let response: WatchResponse = self
            .rotator
            .perform_with_failover("stream-sources", None, |base| {
                self.get_json(format!("{}/watch/{}", base, episode_id))
            })
            .await?;

        debug!(episode_id, sources = response.sources.len(), "Fetched stream sources");
        Ok(response.sources.into_iter().map(Into::into).collect())
    }

    /// Resolve a stream URL for the first episode of the best-matching
    /// title: search, take the first hit, take its first episode, and
    /// prefer an adaptive source.
    ///
    /// `Ok(None)` means some step came back empty; `Err` means the mirrors
    /// were unreachable.
    pub async fn first_episode_stream(&self, title: &str) -> Result<Option<String>, MirrorError> {
        let hits = self.search(title).await?;
        let Some(first) = hits.first() else {
            info!(title, "No mirror entry found for title");
            return Ok(None);
        };

        debug!(title, selected = %first.title, id = %first.id, "Selected mirror entry");

        let episodes = self.episodes(&first.id).await?;
        let Some(episode) = episodes.first() else {
            info!(title, anime_id = %first.id, "No episodes listed");
            return Ok(None);
        };

        let sources = self.stream_sources(&episode.id).await?;
        let url = pick_stream_url(&sources);
        if url.is_none() {
            info!(title, episode_id = %episode.id, "No stream sources listed");
        }

        Ok(url)
    }

    /// Probe every configured mirror with a short deadline.
    ///
    /// Bypasses rotation on purpose: health checks report on all mirrors,
    /// not just the active one, and do not move the cursor.
    pub async fn health_check(&self) -> Vec<EndpointHealth> {
        let mut results = Vec::with_capacity(self.rotator.len());

        for endpoint in self.rotator.endpoints() {
            let url = format!("{}/{}", endpoint, HEALTH_PROBE_QUERY);
            let healthy = match tokio::time::timeout(
                self.health_timeout,
                self.client.get(&url).send(),
            )
            .await
            {
                Ok(Ok(response)) => response.status().is_success(),
                Ok(Err(error)) => {
                    warn!(endpoint = %endpoint, error = %error, "Health probe failed");
                    false
                }
                Err(_) => {
                    warn!(endpoint = %endpoint, "Health probe timed out");
                    false
                }
            };

            results.push(EndpointHealth {
                endpoint: endpoint.clone(),
                healthy,
            });
        }

        results
    }
}

/// Best stream out of a source list: the first adaptive (HLS) entry, or
/// the first entry of any kind
pub fn pick_stream_url(sources: &[StreamSource]) -> Option<String> {
    sources
        .iter()
        .find(|source| source.is_adaptive)
        .or_else(|| sources.first())
        .map(|source| source.url.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(url: &str, adaptive: bool) -> StreamSource {
        StreamSource {
            url: url.to_string(),
            quality: None,
            is_adaptive: adaptive,
        }
    }

    #[test]
    fn test_pick_stream_prefers_adaptive() {
        let sources = vec![
            source("https://cdn.example/a.mp4", false),
            source("https://cdn.example/b.m3u8", true),
        ];
        assert_eq!(
            pick_stream_url(&sources).as_deref(),
            Some("https://cdn.example/b.m3u8")
        );
    }

    #[test]
    fn test_pick_stream_falls_back_to_first() {
        let sources = vec![
            source("https://cdn.example/a.mp4", false),
            source("https://cdn.example/b.mp4", false),
        ];
        assert_eq!(
            pick_stream_url(&sources).as_deref(),
            Some("https://cdn.example/a.mp4")
        );
    }

    #[test]
    fn test_pick_stream_empty() {
        assert_eq!(pick_stream_url(&[]), None);
    }

    #[test]
    fn test_client_creation() {
        let config = MirrorsConfig {
            endpoints: vec!["https://a.example".to_string()],
            request_timeout_secs: 15,
            health_timeout_secs: 5,
            sticky_cursor: true,
        };
        assert!(MirrorClient::new(&config).is_ok());
    }

    #[test]
    fn test_client_rejects_empty_mirror_list() {
        let config = MirrorsConfig {
            endpoints: Vec::new(),
            request_timeout_secs: 15,
            health_timeout_secs: 5,
            sticky_cursor: true,
        };
        assert!(MirrorClient::new(&config).is_err());
    }
}
