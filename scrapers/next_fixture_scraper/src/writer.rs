use std::{fs, path::Path};
use tracing::info;

use crate::{error::ScrapeError, types::FixtureRecord};

pub fn render_json(record: &FixtureRecord) -> Result<String, ScrapeError> {
    Ok(serde_json::to_string_pretty(record)?)
}

/// Overwrites `path` with the record as 2-space indented JSON.
pub fn write_fixture(record: &FixtureRecord, path: &Path) -> Result<String, ScrapeError> {
    let json = render_json(record)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ScrapeError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, &json).map_err(|source| ScrapeError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Saved fixture data to {:?}", path);
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn record() -> FixtureRecord {
        FixtureRecord {
            home_team: "Opponent X".to_string(),
            away_team: "AFC Whyteleafe".to_string(),
            date: "Tue 6 Jan 2026".to_string(),
            time: "3:00 PM".to_string(),
            venue: "Opponent X's Ground".to_string(),
        }
    }

    #[test]
    fn test_render_json_layout() {
        let expected = r#"{
  "homeTeam": "Opponent X",
  "awayTeam": "AFC Whyteleafe",
  "date": "Tue 6 Jan 2026",
  "time": "3:00 PM",
  "venue": "Opponent X's Ground"
}"#;
        assert_eq!(render_json(&record()).unwrap(), expected);
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("next-fixture.json");
        fs::write(&path, "stale contents that are much longer than the new record ...............................................................................................................").unwrap();

        let json = write_fixture(&record(), &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), json);
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("public").join("data").join("next-fixture.json");

        write_fixture(&record(), &path).unwrap();

        assert!(path.exists());
    }
}
