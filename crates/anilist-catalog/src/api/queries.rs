//! Fixed GraphQL query documents.
//!
//! Kept as plain strings, stable and explicit, so they can be inspected
//! and replayed against the API directly.

/// Currently airing anime of the running season, newest updates first
pub const RECENT_EPISODES: &str = r#"
query ($page: Int, $perPage: Int, $season: MediaSeason, $seasonYear: Int) {
  Page(page: $page, perPage: $perPage) {
    media(
      type: ANIME,
      status: RELEASING,
      sort: UPDATED_AT_DESC,
      season: $season,
      seasonYear: $seasonYear
    ) {
      id
      title {
        romaji
        english
      }
      coverImage {
        large
        medium
      }
      bannerImage
      description
      genres
      averageScore
      episodes
      status
      season
      seasonYear
      format
      nextAiringEpisode {
        episode
        airingAt
      }
    }
  }
}
"#;

/// Global trending ranking
pub const TRENDING: &str = r#"
query ($page: Int, $perPage: Int) {
  Page(page: $page, perPage: $perPage) {
    media(type: ANIME, sort: TRENDING_DESC) {
      id
      title {
        romaji
        english
      }
      coverImage {
        large
        medium
      }
      bannerImage
      description
      genres
      averageScore
      episodes
      status
      season
      seasonYear
      format
    }
  }
}
"#;

/// Keyword search, most popular first
pub const SEARCH: &str = r#"
query ($search: String, $perPage: Int) {
  Page(perPage: $perPage) {
    media(type: ANIME, search: $search, sort: POPULARITY_DESC) {
      id
      title {
        romaji
        english
      }
      coverImage {
        large
        medium
      }
      bannerImage
      description
      genres
      averageScore
      episodes
      status
      season
      seasonYear
      format
    }
  }
}
"#;

/// Most popular anime of the running season
pub const POPULAR_THIS_SEASON: &str = r#"
query ($page: Int, $perPage: Int, $season: MediaSeason, $seasonYear: Int) {
  Page(page: $page, perPage: $perPage) {
    media(
      type: ANIME,
      season: $season,
      seasonYear: $seasonYear,
      sort: POPULARITY_DESC
    ) {
      id
      title {
        romaji
        english
      }
      coverImage {
        large
        medium
      }
      bannerImage
      description
      genres
      averageScore
      episodes
      status
      season
      seasonYear
      format
    }
  }
}
"#;

/// Full per-title details, including characters with their Japanese
/// voice actors and rating-sorted recommendations
pub const DETAILS: &str = r#"
query ($id: Int) {
  Media(id: $id, type: ANIME) {
    id
    title {
      romaji
      english
      native
    }
    coverImage {
      extraLarge
      large
    }
    bannerImage
    description
    genres
    averageScore
    episodes
    duration
    status
    season
    seasonYear
    format
    source
    startDate {
      year
      month
      day
    }
    endDate {
      year
      month
      day
    }
    studios {
      nodes {
        name
      }
    }
    characters(perPage: 8, sort: ROLE) {
      edges {
        role
        node {
          id
          name {
            full
          }
          image {
            large
          }
        }
        voiceActors(language: JAPANESE, sort: RELEVANCE) {
          id
          name {
            full
          }
          language
        }
      }
    }
    recommendations(perPage: 6, sort: RATING_DESC) {
      nodes {
        mediaRecommendation {
          id
          title {
            romaji
            english
          }
          coverImage {
            large
          }
          averageScore
        }
      }
    }
  }
}
"#;
