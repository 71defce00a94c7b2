use scraper::{node::Node, ElementRef, Html};
use tracing::debug;

use crate::{
    fixture_scraper::FixtureParser,
    types::{ExtractionStrategy, RawFixture},
};

const HEADING_TEXT: &str = "next match";
const FRAGMENT_DELIMITER: &str = "|";

/// Fallback for pages that show a "Next match" panel instead of a table.
pub struct NextMatchParser;

impl NextMatchParser {
    pub fn new() -> Self {
        Self
    }

    /// Parent element of the first text node mentioning the heading.
    fn find_panel<'a>(&self, document: &'a Html) -> Option<ElementRef<'a>> {
        document
            .root_element()
            .descendants()
            .find(|node| match node.value() {
                Node::Text(text) => text.to_lowercase().contains(HEADING_TEXT),
                _ => false,
            })
            .and_then(|node| node.parent())
            .and_then(ElementRef::wrap)
    }

    pub fn tokens(&self, panel: &ElementRef) -> Vec<String> {
        panel
            .text()
            .collect::<Vec<_>>()
            .join(FRAGMENT_DELIMITER)
            .split(FRAGMENT_DELIMITER)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Picks the opponent, venue type and "time, date" pair out of the
    /// panel's text tokens. The first token of each kind wins.
    pub fn classify_tokens(&self, tokens: &[String]) -> Option<RawFixture> {
        let mut opponent: Option<&str> = None;
        let mut venue_type: Option<&str> = None;
        let mut time_and_date: Option<&str> = None;

        for (i, token) in tokens.iter().enumerate() {
            let upper = token.to_uppercase();

            if opponent.is_none() && i > 0 && (upper.contains("VS") || token.contains("The Leafe")) {
                opponent = Some(tokens[i - 1].as_str());
            }
            if venue_type.is_none() && (upper.contains("AWAY") || upper.contains("HOME")) {
                venue_type = Some(token.as_str());
            }
            if time_and_date.is_none()
                && token.contains(':')
                && token.chars().any(|c| c.is_ascii_digit())
            {
                time_and_date = Some(token.as_str());
            }
        }

        let opponent = opponent?;
        let is_away = venue_type.is_some_and(|v| v.to_uppercase().contains("AWAY"));

        let (time, date) = match time_and_date {
            Some(token) => match token.split_once(',') {
                Some((time, date)) => (Some(time.trim().to_string()), Some(date.trim().to_string())),
                None => (Some(token.trim().to_string()), None),
            },
            None => (None, None),
        };

        Some(RawFixture {
            opponent: opponent.to_string(),
            is_away,
            date: date.filter(|d| !d.is_empty()),
            time: time.filter(|t| !t.is_empty()),
            kickoff_text: None,
            strategy: ExtractionStrategy::NextMatch,
        })
    }
}

impl Default for NextMatchParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureParser for NextMatchParser {
    fn strategy(&self) -> ExtractionStrategy {
        ExtractionStrategy::NextMatch
    }

    fn parse(&self, document: &Html) -> Option<RawFixture> {
        let panel = self.find_panel(document)?;
        let tokens = self.tokens(&panel);
        debug!("Next match panel tokens: {:?}", tokens);
        self.classify_tokens(&tokens)
    }
}
