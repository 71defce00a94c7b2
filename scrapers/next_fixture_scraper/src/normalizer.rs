use chrono::Datelike;

use crate::{
    config::ClubConfig,
    types::{ExtractionStrategy, FixtureRecord, RawFixture, ResolvedFixture, DEFAULT_KICKOFF, UNKNOWN_DATE},
    utils,
};

/// Fills in the club's side of a scraped fixture and resolves the
/// displayed date and kickoff.
pub struct FixtureNormalizer {
    club: ClubConfig,
    current_year: i32,
}

impl FixtureNormalizer {
    pub fn new(club: ClubConfig, current_year: i32) -> Self {
        Self { club, current_year }
    }

    pub fn for_today(club: ClubConfig) -> Self {
        Self::new(club, chrono::Local::now().year())
    }

    pub fn normalize(&self, raw: &RawFixture) -> ResolvedFixture {
        let (home_team, away_team, venue) = if raw.is_away {
            (
                raw.opponent.clone(),
                self.club.name.clone(),
                format!("{}'s Ground", raw.opponent),
            )
        } else {
            (
                self.club.name.clone(),
                raw.opponent.clone(),
                self.club.home_ground.clone(),
            )
        };

        let (time, time_defaulted) = self.resolve_time(raw);
        let (date, date_defaulted) = match &raw.date {
            // The full fixtures table prints its dates as they are
            Some(date) if raw.strategy == ExtractionStrategy::ResultlessTable => (date.clone(), false),
            Some(date) => (utils::with_year(date, self.current_year), false),
            None => (UNKNOWN_DATE.to_string(), true),
        };

        ResolvedFixture {
            record: FixtureRecord {
                home_team,
                away_team,
                date,
                time,
                venue,
            },
            time_defaulted,
            date_defaulted,
            strategy: raw.strategy,
        }
    }

    fn resolve_time(&self, raw: &RawFixture) -> (String, bool) {
        if let Some(time) = &raw.time {
            return (time.clone(), false);
        }

        match raw.kickoff_text.as_deref().and_then(utils::parse_kickoff) {
            Some(time) => (time, false),
            None => (DEFAULT_KICKOFF.to_string(), true),
        }
    }
}
