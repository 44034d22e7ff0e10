//! Normalized domain models for the AnimeSensei toolkit.
//!
//! These are the flat records handed to presentation code, after the
//! upstream JSON shapes (AniList GraphQL, Consumet mirrors) have been
//! normalized by the API clients.

use serde::{Deserialize, Serialize};

/// Catalog entry from AniList (listing, trending, search results)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimeSummary {
    pub id: u32,

    // Titles
    pub title_romaji: String,
    pub title_english: Option<String>,

    // Artwork
    pub cover_image: Option<String>,
    pub banner_image: Option<String>,

    pub description: Option<String>,
    pub genres: Vec<String>,

    /// Community score out of 100
    pub average_score: Option<u32>,
    pub episodes: Option<u32>,
    pub status: Option<String>,
    pub season: Option<String>,
    pub season_year: Option<i32>,
    pub format: Option<String>,

    /// Present for currently-airing entries
    pub next_airing: Option<NextAiring>,
}

/// Upcoming episode of a releasing series
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NextAiring {
    pub episode: u32,
    /// Unix timestamp of the airing time
    pub airing_at: i64,
}

/// Full per-title details from AniList
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimeDetails {
    pub id: u32,

    pub title_romaji: String,
    pub title_english: Option<String>,
    pub title_native: Option<String>,

    pub cover_image: Option<String>,
    pub banner_image: Option<String>,

    pub description: Option<String>,
    pub genres: Vec<String>,

    pub average_score: Option<u32>,
    pub episodes: Option<u32>,
    /// Episode duration in minutes
    pub duration: Option<u32>,
    pub status: Option<String>,
    pub season: Option<String>,
    pub season_year: Option<i32>,
    pub format: Option<String>,
    pub source: Option<String>,

    pub start_date: Option<FuzzyDate>,
    pub end_date: Option<FuzzyDate>,

    pub studios: Vec<String>,
    pub characters: Vec<CharacterCredit>,
    pub recommendations: Vec<Recommendation>,
}

/// Date with potentially unknown month/day components
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FuzzyDate {
    pub year: i32,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl std::fmt::Display for FuzzyDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const MONTHS: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        match (self.month, self.day) {
            (Some(m), Some(d)) if (1..=12).contains(&m) => {
                write!(f, "{} {}, {}", MONTHS[(m - 1) as usize], d, self.year)
            }
            (Some(m), None) if (1..=12).contains(&m) => {
                write!(f, "{} {}", MONTHS[(m - 1) as usize], self.year)
            }
            _ => write!(f, "{}", self.year),
        }
    }
}

/// Character with its Japanese voice actor, if any
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterCredit {
    pub name: String,
    pub image: Option<String>,
    pub role: Option<String>,
    pub voice_actor: Option<String>,
}

/// "You might also like" entry on the details view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: u32,
    pub title_romaji: String,
    pub title_english: Option<String>,
    pub cover_image: Option<String>,
    pub average_score: Option<u32>,
}

/// Search hit from a streaming-metadata mirror
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MirrorSearchHit {
    pub id: String,
    pub title: String,
    pub url: Option<String>,
    pub image: Option<String>,
    pub release_date: Option<String>,
    pub sub_or_dub: Option<String>,
}

/// Episode entry from a streaming-metadata mirror
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Episode {
    pub id: String,
    pub number: u32,
    pub title: Option<String>,
    pub url: Option<String>,
}

/// Stream source for one episode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamSource {
    pub url: String,
    pub quality: Option<String>,
    /// True for adaptive (HLS/m3u8) streams
    pub is_adaptive: bool,
}

impl AnimeSummary {
    /// Preferred display title: English when available, romaji otherwise
    pub fn display_title(&self) -> &str {
        self.title_english.as_deref().unwrap_or(&self.title_romaji)
    }
}

impl AnimeDetails {
    /// Preferred display title: English when available, romaji otherwise
    pub fn display_title(&self) -> &str {
        self.title_english.as_deref().unwrap_or(&self.title_romaji)
    }

    /// Synopsis with AniList's embedded HTML markup removed
    pub fn plain_description(&self) -> Option<String> {
        self.description.as_deref().map(strip_html)
    }
}

/// Remove HTML tags from a description string
pub fn strip_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for c in input.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}
