use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf};
use tracing::warn;

use crate::types::ExtractionStrategy;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScrapingConfig {
    pub fixtures_url: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
}

impl Default for ScrapingConfig {
    fn default() -> Self {
        Self {
            fixtures_url: "https://www.afcwhyteleafe.com/mens-first-team/mens-first-team-fixtures/"
                .to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36"
                .to_string(),
            request_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClubConfig {
    pub name: String,
    pub home_ground: String,
}

impl Default for ClubConfig {
    fn default() -> Self {
        Self {
            name: "AFC Whyteleafe".to_string(),
            home_ground: "Church Road".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("next-fixture.json"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScraperConfig {
    pub scraping: ScrapingConfig,
    pub club: ClubConfig,
    pub output: OutputConfig,
    pub strategies: Vec<ExtractionStrategy>,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            scraping: ScrapingConfig::default(),
            club: ClubConfig::default(),
            output: OutputConfig::default(),
            strategies: vec![ExtractionStrategy::MonthTable, ExtractionStrategy::NextMatch],
        }
    }
}

impl ScraperConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = env::var("FIXTURES_URL") {
            config.scraping.fixtures_url = url;
        }
        if let Ok(user_agent) = env::var("SCRAPER_USER_AGENT") {
            config.scraping.user_agent = user_agent;
        }
        if let Ok(timeout) = env::var("SCRAPER_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(timeout) => config.scraping.request_timeout_secs = timeout,
                Err(_) => warn!("Ignoring invalid SCRAPER_TIMEOUT_SECS: {}", timeout),
            }
        }
        if let Ok(name) = env::var("CLUB_NAME") {
            config.club.name = name;
        }
        if let Ok(ground) = env::var("CLUB_HOME_GROUND") {
            config.club.home_ground = ground;
        }
        if let Ok(path) = env::var("FIXTURE_OUTPUT_PATH") {
            config.output.path = PathBuf::from(path);
        }
        if let Ok(list) = env::var("FIXTURE_STRATEGIES") {
            match parse_strategy_list(&list) {
                Ok(strategies) if !strategies.is_empty() => config.strategies = strategies,
                Ok(_) => warn!("FIXTURE_STRATEGIES is empty, keeping defaults"),
                Err(e) => warn!("Ignoring invalid FIXTURE_STRATEGIES: {}", e),
            }
        }

        config
    }

    /// Applies command line values on top of the environment.
    pub fn with_overrides(
        mut self,
        output: Option<PathBuf>,
        strategies: &[ExtractionStrategy],
        fixtures_url: Option<String>,
    ) -> Self {
        if let Some(path) = output {
            self.output.path = path;
        }
        if !strategies.is_empty() {
            self.strategies = strategies.to_vec();
        }
        if let Some(url) = fixtures_url {
            self.scraping.fixtures_url = url;
        }
        self
    }
}

/// Parses a comma separated list such as `month-table,next-match`.
pub fn parse_strategy_list(list: &str) -> Result<Vec<ExtractionStrategy>, String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}
