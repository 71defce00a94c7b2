use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::{
    fixture_scraper::FixtureParser,
    types::{ExtractionStrategy, RawFixture},
    utils,
};

/// Finds the first table row whose date cell names a month.
///
/// Cell 0 holds the opponent. The date sits in cell 1 or cell 2, and the
/// home/away indicator in whichever of the two is left.
pub struct MonthTableParser;

impl MonthTableParser {
    pub fn new() -> Self {
        Self
    }

    fn parse_row(&self, cells: &[ElementRef]) -> Option<RawFixture> {
        if cells.len() < 3 {
            return None;
        }

        let opponent = utils::cell_text(&cells[0]);
        let second = utils::cell_text(&cells[1]);
        let third = utils::cell_text(&cells[2]);

        let (date, indicator) = if utils::contains_month_abbreviation(&second) {
            (second, third)
        } else if utils::contains_month_abbreviation(&third) {
            (third, second)
        } else {
            return None;
        };

        Some(RawFixture {
            opponent,
            is_away: utils::is_away_indicator(&indicator),
            kickoff_text: Some(date.clone()),
            date: Some(date),
            time: None,
            strategy: ExtractionStrategy::MonthTable,
        })
    }
}

impl Default for MonthTableParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureParser for MonthTableParser {
    fn strategy(&self) -> ExtractionStrategy {
        ExtractionStrategy::MonthTable
    }

    fn parse(&self, document: &Html) -> Option<RawFixture> {
        let table_selector = Selector::parse("table").unwrap();
        let row_selector = Selector::parse("tr").unwrap();
        let cell_selector = Selector::parse("td").unwrap();

        for table in document.select(&table_selector) {
            for row in table.select(&row_selector) {
                let cells: Vec<_> = row.select(&cell_selector).collect();
                if let Some(fixture) = self.parse_row(&cells) {
                    debug!("Month table row matched: {:?}", fixture);
                    return Some(fixture);
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(html: &str) -> Option<RawFixture> {
        MonthTableParser::new().parse(&Html::parse_document(html))
    }

    #[test]
    fn test_away_row_with_indicator_before_date() {
        let fixture = parse(
            "<table><tr><td>Opponent X</td><td>A</td><td>Tue 6 Jan</td></tr></table>",
        )
        .unwrap();

        assert_eq!(fixture.opponent, "Opponent X");
        assert!(fixture.is_away);
        assert_eq!(fixture.date.as_deref(), Some("Tue 6 Jan"));
        assert_eq!(fixture.time, None);
    }

    #[test]
    fn test_home_row_with_date_before_indicator() {
        let fixture = parse(
            "<table><tr><td>Opponent Y</td><td>Wed 10 Feb</td><td>HOME</td></tr></table>",
        )
        .unwrap();

        assert_eq!(fixture.opponent, "Opponent Y");
        assert!(!fixture.is_away);
        assert_eq!(fixture.date.as_deref(), Some("Wed 10 Feb"));
    }

    #[test]
    fn test_skips_short_and_dateless_rows() {
        let html = r#"
            <table>
                <tr><th>Opponent</th><th>H/A</th><th>Date</th></tr>
                <tr><td>Too short</td><td>Mon 1 Sep</td></tr>
                <tr><td>Played</td><td>H</td><td>3-1</td></tr>
                <tr><td>Opponent Y</td><td>H</td><td>Wed 10 Feb</td></tr>
                <tr><td>Later</td><td>A</td><td>Sat 20 Feb</td></tr>
            </table>"#;
        let fixture = parse(html).unwrap();

        assert_eq!(fixture.opponent, "Opponent Y");
        assert!(!fixture.is_away);
    }

    #[test]
    fn test_scans_every_table() {
        let html = r#"
            <table><tr><td>League</td><td>P</td><td>12</td></tr></table>
            <table><tr><td>Opponent Q</td><td>Away</td><td>Sat 3 Oct KO: 14:00</td></tr></table>"#;
        let fixture = parse(html).unwrap();

        assert_eq!(fixture.opponent, "Opponent Q");
        assert!(fixture.is_away);
        assert_eq!(fixture.kickoff_text.as_deref(), Some("Sat 3 Oct KO: 14:00"));
    }

    #[test]
    fn test_no_tables() {
        assert_eq!(parse("<div>No fixtures scheduled</div>"), None);
    }
}
