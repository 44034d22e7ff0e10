//! AniList GraphQL response types.
//!
//! Wire shapes for the `{data, errors}` envelope and the Media selections
//! used by the fixed query documents, plus conversions into the shared
//! domain models.

use serde::Deserialize;
use shared::{
    AnimeDetails, AnimeSummary, CharacterCredit, FuzzyDate, NextAiring, Recommendation,
};

/// Top-level GraphQL envelope
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// `data` payload for paged listing queries
#[derive(Debug, Deserialize)]
pub struct PageData {
    #[serde(rename = "Page")]
    pub page: Page,
}

#[derive(Debug, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub media: Vec<Media>,
}

/// `data` payload for the single-title details query
#[derive(Debug, Deserialize)]
pub struct MediaData {
    #[serde(rename = "Media")]
    pub media: Media,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: u32,
    pub title: Title,
    #[serde(default)]
    pub cover_image: Option<CoverImage>,
    #[serde(default)]
    pub banner_image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub average_score: Option<u32>,
    #[serde(default)]
    pub episodes: Option<u32>,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub season_year: Option<i32>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub start_date: Option<DatePayload>,
    #[serde(default)]
    pub end_date: Option<DatePayload>,
    #[serde(default)]
    pub studios: Option<Studios>,
    #[serde(default)]
    pub characters: Option<Characters>,
    #[serde(default)]
    pub recommendations: Option<Recommendations>,
    #[serde(default)]
    pub next_airing_episode: Option<NextAiringPayload>,
}

#[derive(Debug, Deserialize)]
pub struct Title {
    #[serde(default)]
    pub romaji: Option<String>,
    #[serde(default)]
    pub english: Option<String>,
    #[serde(default)]
    pub native: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverImage {
    #[serde(default)]
    pub extra_large: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
}

impl CoverImage {
    /// Best available artwork, largest first
    fn best(self) -> Option<String> {
        self.extra_large.or(self.large).or(self.medium)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextAiringPayload {
    pub episode: u32,
    pub airing_at: i64,
}

#[derive(Debug, Deserialize)]
pub struct DatePayload {
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub day: Option<u32>,
}

impl DatePayload {
    /// A date is usable once at least the year is known
    fn into_fuzzy(self) -> Option<FuzzyDate> {
        self.year.map(|year| FuzzyDate {
            year,
            month: self.month,
            day: self.day,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct Studios {
    #[serde(default)]
    pub nodes: Vec<StudioNode>,
}

#[derive(Debug, Deserialize)]
pub struct StudioNode {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct Characters {
    #[serde(default)]
    pub edges: Vec<CharacterEdge>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterEdge {
    #[serde(default)]
    pub role: Option<String>,
    pub node: CharacterNode,
    #[serde(default)]
    pub voice_actors: Vec<VoiceActorNode>,
}

#[derive(Debug, Deserialize)]
pub struct CharacterNode {
    pub name: NameNode,
    #[serde(default)]
    pub image: Option<ImageNode>,
}

#[derive(Debug, Deserialize)]
pub struct NameNode {
    pub full: String,
}

#[derive(Debug, Deserialize)]
pub struct ImageNode {
    #[serde(default)]
    pub large: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VoiceActorNode {
    pub name: NameNode,
}

#[derive(Debug, Deserialize)]
pub struct Recommendations {
    #[serde(default)]
    pub nodes: Vec<RecommendationNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationNode {
    #[serde(default)]
    pub media_recommendation: Option<RecommendedMedia>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedMedia {
    pub id: u32,
    pub title: Title,
    #[serde(default)]
    pub cover_image: Option<CoverImage>,
    #[serde(default)]
    pub average_score: Option<u32>,
}

impl From<Media> for AnimeSummary {
    fn from(media: Media) -> Self {
        Self {
            id: media.id,
            title_romaji: media.title.romaji.unwrap_or_else(|| "Unknown".to_string()),
            title_english: media.title.english,
            cover_image: media.cover_image.and_then(CoverImage::best),
            banner_image: media.banner_image,
            description: media.description,
            genres: media.genres,
            average_score: media.average_score,
            episodes: media.episodes,
            status: media.status,
            season: media.season,
            season_year: media.season_year,
            format: media.format,
            next_airing: media.next_airing_episode.map(|next| NextAiring {
                episode: next.episode,
                airing_at: next.airing_at,
            }),
        }
    }
}

impl From<Media> for AnimeDetails {
    fn from(media: Media) -> Self {
        let studios = media
            .studios
            .map(|studios| studios.nodes.into_iter().map(|node| node.name).collect())
            .unwrap_or_default();

        let characters = media
            .characters
            .map(|characters| {
                characters
                    .edges
                    .into_iter()
                    .map(|edge| CharacterCredit {
                        name: edge.node.name.full,
                        image: edge.node.image.and_then(|image| image.large),
                        role: edge.role,
                        voice_actor: edge
                            .voice_actors
                            .into_iter()
                            .next()
                            .map(|actor| actor.name.full),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let recommendations = media
            .recommendations
            .map(|recommendations| {
                recommendations
                    .nodes
                    .into_iter()
                    .filter_map(|node| node.media_recommendation)
                    .map(|rec| Recommendation {
                        id: rec.id,
                        title_romaji: rec.title.romaji.unwrap_or_else(|| "Unknown".to_string()),
                        title_english: rec.title.english,
                        cover_image: rec.cover_image.and_then(CoverImage::best),
                        average_score: rec.average_score,
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            id: media.id,
            title_romaji: media.title.romaji.unwrap_or_else(|| "Unknown".to_string()),
            title_english: media.title.english,
            title_native: media.title.native,
            cover_image: media.cover_image.and_then(CoverImage::best),
            banner_image: media.banner_image,
            description: media.description,
            genres: media.genres,
            average_score: media.average_score,
            episodes: media.episodes,
            duration: media.duration,
            status: media.status,
            season: media.season,
            season_year: media.season_year,
            format: media.format,
            source: media.source,
            start_date: media.start_date.and_then(DatePayload::into_fuzzy),
            end_date: media.end_date.and_then(DatePayload::into_fuzzy),
            studios,
            characters,
            recommendations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_listing_payload() {
        let json = serde_json::json!({
            "Page": {
                "media": [{
                    "id": 16498,
                    "title": { "romaji": "Shingeki no Kyojin", "english": "Attack on Titan" },
                    "coverImage": { "large": "https://img.example/l.png", "medium": "https://img.example/m.png" },
                    "bannerImage": null,
                    "description": "Humanity fights.",
                    "genres": ["Action", "Drama"],
                    "averageScore": 85,
                    "episodes": 25,
                    "status": "FINISHED",
                    "season": "SPRING",
                    "seasonYear": 2013,
                    "format": "TV",
                    "nextAiringEpisode": null
                }]
            }
        });

        let data: PageData = serde_json::from_value(json).unwrap();
        assert_eq!(data.page.media.len(), 1);

        let summary = AnimeSummary::from(data.page.media.into_iter().next().unwrap());
        assert_eq!(summary.id, 16498);
        assert_eq!(summary.display_title(), "Attack on Titan");
        assert_eq!(summary.cover_image.as_deref(), Some("https://img.example/l.png"));
        assert_eq!(summary.average_score, Some(85));
        assert!(summary.next_airing.is_none());
    }

    #[test]
    fn test_parse_airing_entry() {
        let json = serde_json::json!({
            "id": 1,
            "title": { "romaji": "Ongoing" },
            "nextAiringEpisode": { "episode": 7, "airingAt": 1754500000 }
        });

        let media: Media = serde_json::from_value(json).unwrap();
        let summary = AnimeSummary::from(media);
        let next = summary.next_airing.unwrap();
        assert_eq!(next.episode, 7);
        assert_eq!(next.airing_at, 1754500000);
    }

    #[test]
    fn test_parse_details_payload() {
        let json = serde_json::json!({
            "Media": {
                "id": 101,
                "title": { "romaji": "Frieren", "english": null, "native": "フリーレン" },
                "coverImage": { "extraLarge": "https://img.example/xl.png", "large": "https://img.example/l.png" },
                "description": "An elf <i>mage</i>.",
                "genres": ["Adventure"],
                "averageScore": 91,
                "episodes": 28,
                "duration": 24,
                "status": "FINISHED",
                "season": "FALL",
                "seasonYear": 2023,
                "format": "TV",
                "source": "MANGA",
                "startDate": { "year": 2023, "month": 9, "day": 29 },
                "endDate": { "year": null, "month": null, "day": null },
                "studios": { "nodes": [{ "name": "Madhouse" }] },
                "characters": {
                    "edges": [{
                        "role": "MAIN",
                        "node": {
                            "id": 5,
                            "name": { "full": "Frieren" },
                            "image": { "large": "https://img.example/c.png" }
                        },
                        "voiceActors": [{ "id": 9, "name": { "full": "Atsumi Tanezaki" }, "language": "Japanese" }]
                    }]
                },
                "recommendations": {
                    "nodes": [
                        { "mediaRecommendation": { "id": 7, "title": { "romaji": "Mushishi" }, "coverImage": { "large": "https://img.example/r.png" }, "averageScore": 86 } },
                        { "mediaRecommendation": null }
                    ]
                }
            }
        });

        let data: MediaData = serde_json::from_value(json).unwrap();
        let details = AnimeDetails::from(data.media);

        assert_eq!(details.display_title(), "Frieren");
        assert_eq!(details.title_native.as_deref(), Some("フリーレン"));
        assert_eq!(details.cover_image.as_deref(), Some("https://img.example/xl.png"));
        assert_eq!(details.plain_description().as_deref(), Some("An elf mage."));
        assert_eq!(details.studios, vec!["Madhouse".to_string()]);
        assert_eq!(details.start_date.unwrap().to_string(), "Sep 29, 2023");
        assert!(details.end_date.is_none());

        assert_eq!(details.characters.len(), 1);
        assert_eq!(details.characters[0].name, "Frieren");
        assert_eq!(details.characters[0].voice_actor.as_deref(), Some("Atsumi Tanezaki"));

        // Null recommendations are dropped during normalization
        assert_eq!(details.recommendations.len(), 1);
        assert_eq!(details.recommendations[0].id, 7);
    }

    #[test]
    fn test_envelope_with_errors() {
        let json = serde_json::json!({
            "data": null,
            "errors": [{ "message": "Not Found.", "status": 404 }]
        });

        let envelope: GraphQlResponse<MediaData> = serde_json::from_value(json).unwrap();
        assert!(envelope.data.is_none());
        assert_eq!(envelope.errors.unwrap()[0].message, "Not Found.");
    }
}
