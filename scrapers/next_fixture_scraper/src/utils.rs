use chrono::NaiveTime;
use regex::Regex;
use scraper::ElementRef;
use std::sync::OnceLock;

const KICKOFF_MARKER: &str = "KO:";

fn month_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec")
            .expect("month pattern is valid")
    })
}

/// Text of an element with surrounding whitespace removed.
pub fn cell_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

pub fn contains_month_abbreviation(text: &str) -> bool {
    month_pattern().is_match(text)
}

/// Table indicator cells use "A"/"Away" for away games and "H"/"Home" otherwise.
pub fn is_away_indicator(text: &str) -> bool {
    // "AWAY" contains 'A' too
    text.to_uppercase().contains('A')
}

pub fn has_kickoff_marker(text: &str) -> bool {
    text.contains(KICKOFF_MARKER)
}

/// Reads the kickoff out of text like "KO: 15:30".
///
/// Returns `None` when there is no marker or nothing follows it. A 24-hour
/// time after the last marker comes back in 12-hour form ("3:30 PM");
/// anything else after the marker is returned as written.
pub fn parse_kickoff(text: &str) -> Option<String> {
    let (_, after) = text.rsplit_once(KICKOFF_MARKER)?;
    let raw = after.trim();
    if raw.is_empty() {
        return None;
    }
    match NaiveTime::parse_from_str(raw, "%H:%M") {
        Ok(time) => Some(time.format("%-I:%M %p").to_string()),
        Err(_) => Some(raw.to_string()),
    }
}

/// Appends `year` unless the date already mentions it.
pub fn with_year(date: &str, year: i32) -> String {
    let year = year.to_string();
    if date.contains(&year) {
        date.to_string()
    } else {
        format!("{} {}", date, year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_month_abbreviation() {
        assert!(contains_month_abbreviation("Tue 6 Jan"));
        assert!(contains_month_abbreviation("Saturday 14 March"));
        assert!(!contains_month_abbreviation("A"));
        assert!(!contains_month_abbreviation("HOME"));
        assert!(!contains_month_abbreviation("3-1"));
    }

    #[test]
    fn test_is_away_indicator() {
        assert!(is_away_indicator("A"));
        assert!(is_away_indicator("away"));
        assert!(is_away_indicator("AWAY"));
        assert!(!is_away_indicator("H"));
        assert!(!is_away_indicator("Home"));
        assert!(!is_away_indicator(""));
    }

    #[test]
    fn test_parse_kickoff() {
        assert_eq!(parse_kickoff("KO: 15:30"), Some("3:30 PM".to_string()));
        assert_eq!(parse_kickoff("KO:19:45"), Some("7:45 PM".to_string()));
        assert_eq!(parse_kickoff("KO: 12:00"), Some("12:00 PM".to_string()));
        assert_eq!(parse_kickoff("KO: not-a-time"), Some("not-a-time".to_string()));
        assert_eq!(parse_kickoff("Sat 14 Mar"), None);
        assert_eq!(parse_kickoff("KO:"), None);
        assert_eq!(parse_kickoff("KO:   "), None);
    }

    #[test]
    fn test_with_year() {
        assert_eq!(with_year("Tue 6 Jan", 2026), "Tue 6 Jan 2026");
        assert_eq!(with_year("Tue 6 Jan 2026", 2026), "Tue 6 Jan 2026");
        assert_eq!(with_year("Tue 6 Jan 2027", 2026), "Tue 6 Jan 2027 2026");
    }
}
