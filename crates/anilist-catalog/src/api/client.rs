//! AniList GraphQL client.

use super::queries;
use super::types::{GraphQlResponse, MediaData, PageData};
use crate::season::Season;
use anyhow::{anyhow, Context, Result};
use chrono::{Datelike, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::json;
use shared::{AnilistConfig, AnimeDetails, AnimeSummary};
use std::time::Duration;
use tracing::{debug, info};

/// Client for the AniList metadata service
pub struct AnilistClient {
    /// HTTP client
    client: Client,
    /// GraphQL endpoint URL
    base_url: String,
}

impl AnilistClient {
    /// Create a new AniList client
    pub fn new(config: &AnilistConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("animesensei/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// POST a query document with its variables and unwrap the envelope
    async fn post_query<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T> {
        debug!(url = %self.base_url, "Sending GraphQL request");

        let response = self
            .client
            .post(&self.base_url)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await
            .context("AniList request failed")?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("AniList request failed with status {}", status));
        }

        let envelope: GraphQlResponse<T> = response
            .json()
            .await
            .context("Failed to parse AniList response")?;

        if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
            let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
            return Err(anyhow!("AniList returned errors: {}", messages.join("; ")));
        }

        envelope
            .data
            .ok_or_else(|| anyhow!("AniList response carried no data"))
    }

    async fn listing(&self, query: &str, variables: serde_json::Value) -> Result<Vec<AnimeSummary>> {
        let data: PageData = self.post_query(query, variables).await?;
        Ok(data.page.media.into_iter().map(Into::into).collect())
    }

    /// Currently airing anime of the running season, newest updates first
    pub async fn recent_episodes(&self, page: u32, per_page: u32) -> Result<Vec<AnimeSummary>> {
        let today = Utc::now().date_naive();
        let season = Season::current(today);

        info!(page, per_page, season = %season, year = today.year(), "Fetching recent episodes");
        self.listing(
            queries::RECENT_EPISODES,
            json!({
                "page": page,
                "perPage": per_page,
                "season": season.as_graphql(),
                "seasonYear": today.year(),
            }),
        )
        .await
    }

    /// Trending ranking
    pub async fn trending(&self, page: u32, per_page: u32) -> Result<Vec<AnimeSummary>> {
        info!(page, per_page, "Fetching trending anime");
        self.listing(
            queries::TRENDING,
            json!({ "page": page, "perPage": per_page }),
        )
        .await
    }

    /// Keyword search, most popular first
    pub async fn search(&self, term: &str, per_page: u32) -> Result<Vec<AnimeSummary>> {
        info!(term, per_page, "Searching anime");
        self.listing(
            queries::SEARCH,
            json!({ "search": term, "perPage": per_page }),
        )
        .await
    }

    /// Most popular anime of the running season
    pub async fn popular_this_season(&self, page: u32, per_page: u32) -> Result<Vec<AnimeSummary>> {
        let today = Utc::now().date_naive();
        let season = Season::current(today);

        info!(page, per_page, season = %season, year = today.year(), "Fetching popular anime of the season");
        self.listing(
            queries::POPULAR_THIS_SEASON,
            json!({
                "page": page,
                "perPage": per_page,
                "season": season.as_graphql(),
                "seasonYear": today.year(),
            }),
        )
        .await
    }

    /// Full details for one title
    pub async fn details(&self, id: u32) -> Result<AnimeDetails> {
        debug!(id, "Fetching anime details");
        let data: MediaData = self
            .post_query(queries::DETAILS, json!({ "id": id }))
            .await?;
        Ok(data.media.into())
    }
}
