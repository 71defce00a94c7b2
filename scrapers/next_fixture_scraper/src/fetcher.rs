use std::{fs, path::PathBuf, time::Duration};
use tracing::{debug, info};

use crate::{config::ScrapingConfig, error::FetchError};

pub trait HtmlFetcher {
    fn fetch_html(&self, url: &str) -> Result<String, FetchError>;
}

pub struct WebHtmlFetcher {
    client: reqwest::blocking::Client,
}

impl WebHtmlFetcher {
    pub fn new(config: &ScrapingConfig) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self { client })
    }
}

impl HtmlFetcher for WebHtmlFetcher {
    fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        info!("Fetching {}", url);
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let text = response.text()?;
        debug!("Got response from {} ({} bytes)", url, text.len());
        Ok(text)
    }
}

/// Serves a saved page from disk, whatever URL is asked for.
pub struct FileHtmlFetcher {
    path: PathBuf,
}

impl FileHtmlFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HtmlFetcher for FileHtmlFetcher {
    fn fetch_html(&self, _url: &str) -> Result<String, FetchError> {
        info!("Reading saved page {:?}", self.path);
        fs::read_to_string(&self.path).map_err(|source| FetchError::File {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ScrapingConfig {
        ScrapingConfig {
            user_agent: "FixtureBot/1.0".to_string(),
            request_timeout_secs: 5,
            ..ScrapingConfig::default()
        }
    }

    #[test]
    fn test_fetch_sends_user_agent() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/fixtures")
            .match_header("user-agent", "FixtureBot/1.0")
            .with_status(200)
            .with_body("<html><body>fixtures</body></html>")
            .create();

        let fetcher = WebHtmlFetcher::new(&test_config()).unwrap();
        let html = fetcher.fetch_html(&format!("{}/fixtures", server.url())).unwrap();

        mock.assert();
        assert_eq!(html, "<html><body>fixtures</body></html>");
    }

    #[test]
    fn test_fetch_rejects_non_success_status() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("GET", "/fixtures").with_status(403).create();

        let fetcher = WebHtmlFetcher::new(&test_config()).unwrap();
        let err = fetcher
            .fetch_html(&format!("{}/fixtures", server.url()))
            .unwrap_err();

        match err {
            FetchError::Status { status, .. } => assert_eq!(status.as_u16(), 403),
            other => panic!("Expected status error, got {:?}", other),
        }
    }

    #[test]
    fn test_file_fetcher_missing_file() {
        let fetcher = FileHtmlFetcher::new("does/not/exist.html");
        assert!(matches!(
            fetcher.fetch_html("ignored"),
            Err(FetchError::File { .. })
        ));
    }
}
