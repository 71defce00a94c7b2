use scraper::Html;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::{
    config::ScraperConfig,
    error::ScrapeError,
    fetcher::HtmlFetcher,
    month_table::MonthTableParser,
    next_match::NextMatchParser,
    normalizer::FixtureNormalizer,
    resultless_table::ResultlessTableParser,
    types::{ExtractionStrategy, RawFixture, ResolvedFixture},
    writer,
};

/// One heuristic for spotting the next fixture in a page.
pub trait FixtureParser {
    fn strategy(&self) -> ExtractionStrategy;
    fn parse(&self, document: &Html) -> Option<RawFixture>;
}

pub fn parser_for(strategy: ExtractionStrategy) -> Box<dyn FixtureParser> {
    match strategy {
        ExtractionStrategy::MonthTable => Box::new(MonthTableParser::new()),
        ExtractionStrategy::NextMatch => Box::new(NextMatchParser::new()),
        ExtractionStrategy::ResultlessTable => Box::new(ResultlessTableParser::new()),
    }
}

#[derive(Debug)]
pub struct RunOutcome {
    pub fixture: ResolvedFixture,
    pub json: String,
    /// `None` on a dry run
    pub written_to: Option<PathBuf>,
}

pub struct FixtureScraper<F: HtmlFetcher> {
    html_fetcher: F,
    config: ScraperConfig,
    normalizer: FixtureNormalizer,
}

impl<F: HtmlFetcher> FixtureScraper<F> {
    pub fn new(html_fetcher: F, config: ScraperConfig) -> Self {
        let normalizer = FixtureNormalizer::for_today(config.club.clone());
        Self {
            html_fetcher,
            config,
            normalizer,
        }
    }

    /// Pins the year appended to scraped dates.
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.normalizer = FixtureNormalizer::new(self.config.club.clone(), year);
        self
    }

    /// Tries each configured strategy in order and returns the first hit.
    pub fn extract(&self, html: &str) -> Option<RawFixture> {
        let document = Html::parse_document(html);

        for parser in self.config.strategies.iter().copied().map(parser_for) {
            match parser.parse(&document) {
                Some(fixture) => {
                    info!("Found next fixture using {} strategy", parser.strategy());
                    return Some(fixture);
                }
                None => debug!("{} strategy found nothing", parser.strategy()),
            }
        }

        None
    }

    pub fn find_next_fixture(&self) -> Result<ResolvedFixture, ScrapeError> {
        let html = self
            .html_fetcher
            .fetch_html(&self.config.scraping.fixtures_url)?;

        let raw = self.extract(&html).ok_or_else(|| {
            warn!("No upcoming fixtures found");
            ScrapeError::NoFixture {
                tried: self
                    .config
                    .strategies
                    .iter()
                    .map(|s| s.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            }
        })?;

        let fixture = self.normalizer.normalize(&raw);
        if fixture.time_defaulted {
            debug!("No kickoff found, using default time");
        }
        if fixture.date_defaulted {
            warn!("No date found for fixture against {}", raw.opponent);
        }
        Ok(fixture)
    }

    /// Fetch, extract, normalize and (unless `dry_run`) write the record.
    /// Nothing is written when any step fails.
    pub fn run(&self, dry_run: bool) -> Result<RunOutcome, ScrapeError> {
        let fixture = self.find_next_fixture()?;

        if dry_run {
            let json = writer::render_json(&fixture.record)?;
            return Ok(RunOutcome {
                fixture,
                json,
                written_to: None,
            });
        }

        let path = self.config.output.path.clone();
        let json = writer::write_fixture(&fixture.record, &path)?;
        Ok(RunOutcome {
            fixture,
            json,
            written_to: Some(path),
        })
    }
}
