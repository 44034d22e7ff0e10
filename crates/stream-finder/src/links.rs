//! Outbound watch links.
//!
//! No API calls here: each streaming site gets a plain search-page URL
//! with the title percent-encoded into its known query parameter, so the
//! user can pick the right entry themselves even when title formatting
//! differs between catalogs.

use serde::Serialize;

/// One external place to watch an anime
#[derive(Debug, Clone, Serialize)]
pub struct StreamingOption {
    pub site: String,
    pub url: String,
    pub quality: String,
    pub notes: String,
}

fn hianime_search_url(title: &str) -> String {
    format!(
        "https://hianime.to/search?keyword={}",
        urlencoding::encode(title)
    )
}

fn nine_anime_search_url(title: &str) -> String {
    format!(
        "https://9animetv.to/search?keyword={}",
        urlencoding::encode(title)
    )
}

fn zoro_search_url(title: &str) -> String {
    format!(
        "https://zoro.to/search?keyword={}",
        urlencoding::encode(title)
    )
}

fn crunchyroll_search_url(title: &str) -> String {
    format!(
        "https://www.crunchyroll.com/search?q={}",
        urlencoding::encode(title)
    )
}

/// Search-page links for all supported streaming sites, primary site
/// first, the legal option last
pub fn streaming_options(title: &str) -> Vec<StreamingOption> {
    vec![
        StreamingOption {
            site: "HiAnime".to_string(),
            url: hianime_search_url(title),
            quality: "HD • Sub & Dub".to_string(),
            notes: "Search results will show - click your anime and select episode".to_string(),
        },
        StreamingOption {
            site: "9anime".to_string(),
            url: nine_anime_search_url(title),
            quality: "HD • Multiple Servers".to_string(),
            notes: "Multiple streaming servers available after selecting anime".to_string(),
        },
        StreamingOption {
            site: "Zoro.to".to_string(),
            url: zoro_search_url(title),
            quality: "HD • No Ads".to_string(),
            notes: "Clean interface - select your anime from results".to_string(),
        },
        StreamingOption {
            site: "Crunchyroll".to_string(),
            url: crunchyroll_search_url(title),
            quality: "HD • Official".to_string(),
            notes: "Legal streaming (free with ads) - choose from search results".to_string(),
        },
    ]
}

/// Primary site homepage, for general browsing
pub fn hianime_homepage() -> &'static str {
    "https://hianime.to"
}
