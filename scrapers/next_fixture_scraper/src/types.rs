use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Kickoff used when the page gives no usable time.
pub const DEFAULT_KICKOFF: &str = "3:00 PM";

/// Date shown when the page gives no date at all.
pub const UNKNOWN_DATE: &str = "TBA";

/// The record published as `next-fixture.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FixtureRecord {
    pub home_team: String,
    pub away_team: String,
    pub date: String,
    pub time: String,
    pub venue: String,
}

/// Fields as scraped, before the club side and defaults are filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFixture {
    pub opponent: String,
    pub is_away: bool,
    pub date: Option<String>,
    pub time: Option<String>,
    // Text that may carry a "KO: HH:MM" marker
    pub kickoff_text: Option<String>,
    pub strategy: ExtractionStrategy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFixture {
    pub record: FixtureRecord,
    pub time_defaulted: bool,
    pub date_defaulted: bool,
    pub strategy: ExtractionStrategy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractionStrategy {
    /// Table rows whose date cell names a month
    MonthTable,
    /// Text around the "Next match" heading
    NextMatch,
    /// First table's rows with an empty result cell
    ResultlessTable,
}

impl ExtractionStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionStrategy::MonthTable => "month-table",
            ExtractionStrategy::NextMatch => "next-match",
            ExtractionStrategy::ResultlessTable => "resultless-table",
        }
    }
}

impl fmt::Display for ExtractionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtractionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "month-table" => Ok(ExtractionStrategy::MonthTable),
            "next-match" => Ok(ExtractionStrategy::NextMatch),
            "resultless-table" => Ok(ExtractionStrategy::ResultlessTable),
            other => Err(format!("Unknown extraction strategy: {}", other)),
        }
    }
}
