use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::{
    fixture_scraper::FixtureParser,
    types::{ExtractionStrategy, RawFixture},
    utils,
};

/// Reads the club's full fixtures table, where played games carry a score
/// in the result column and the next game's result cell is blank (or only
/// shows its kickoff, e.g. "KO: 15:00").
///
/// Columns: date, H/A, opponent, result, then competition details.
pub struct ResultlessTableParser;

const MIN_CELLS: usize = 6;

impl ResultlessTableParser {
    pub fn new() -> Self {
        Self
    }

    fn parse_row(&self, cells: &[ElementRef]) -> Option<RawFixture> {
        if cells.len() < MIN_CELLS {
            return None;
        }

        let result = utils::cell_text(&cells[3]);
        if !result.is_empty() && !utils::has_kickoff_marker(&result) {
            return None;
        }

        let date = utils::cell_text(&cells[0]);
        let home_away = utils::cell_text(&cells[1]);

        Some(RawFixture {
            opponent: utils::cell_text(&cells[2]),
            is_away: home_away != "H",
            date: Some(date).filter(|d| !d.is_empty()),
            time: None,
            kickoff_text: Some(result).filter(|r| !r.is_empty()),
            strategy: ExtractionStrategy::ResultlessTable,
        })
    }
}

impl Default for ResultlessTableParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureParser for ResultlessTableParser {
    fn strategy(&self) -> ExtractionStrategy {
        ExtractionStrategy::ResultlessTable
    }

    fn parse(&self, document: &Html) -> Option<RawFixture> {
        let table_selector = Selector::parse("table").unwrap();
        let row_selector = Selector::parse("tr").unwrap();
        let cell_selector = Selector::parse("td").unwrap();

        let table = document.select(&table_selector).next()?;

        for row in table.select(&row_selector).skip(1) { // Skip header row
            let cells: Vec<_> = row.select(&cell_selector).collect();
            if let Some(fixture) = self.parse_row(&cells) {
                debug!("Resultless table row matched: {:?}", fixture);
                return Some(fixture);
            }
        }

        None
    }
}
