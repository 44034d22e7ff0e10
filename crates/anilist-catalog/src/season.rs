//! Broadcast season bucketing.

use chrono::{Datelike, NaiveDate};

/// Anime broadcast season, as AniList's `MediaSeason` labels it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    /// GraphQL enum value for this season
    pub fn as_graphql(&self) -> &'static str {
        match self {
            Season::Winter => "WINTER",
            Season::Spring => "SPRING",
            Season::Summer => "SUMMER",
            Season::Fall => "FALL",
        }
    }

    /// Season containing the given date: Jan-Mar is winter, Apr-Jun
    /// spring, Jul-Sep summer, Oct-Dec fall.
    pub fn current(date: NaiveDate) -> Self {
        match date.month() {
            4..=6 => Season::Spring,
            7..=9 => Season::Summer,
            10..=12 => Season::Fall,
            _ => Season::Winter,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_graphql())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_season_boundaries() {
        assert_eq!(Season::current(date(2026, 1, 1)), Season::Winter);
        assert_eq!(Season::current(date(2026, 3, 31)), Season::Winter);
        assert_eq!(Season::current(date(2026, 4, 1)), Season::Spring);
        assert_eq!(Season::current(date(2026, 6, 30)), Season::Spring);
        assert_eq!(Season::current(date(2026, 7, 1)), Season::Summer);
        assert_eq!(Season::current(date(2026, 9, 30)), Season::Summer);
        assert_eq!(Season::current(date(2026, 10, 1)), Season::Fall);
        assert_eq!(Season::current(date(2026, 12, 31)), Season::Fall);
    }

    #[test]
    fn test_graphql_labels() {
        assert_eq!(Season::Winter.as_graphql(), "WINTER");
        assert_eq!(Season::Fall.to_string(), "FALL");
    }
}
