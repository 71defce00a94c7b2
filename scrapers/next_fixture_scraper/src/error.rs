use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("Could not read {path:?}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("No upcoming fixture found (tried: {tried})")]
    NoFixture { tried: String },
    #[error("Could not serialize fixture: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Could not write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScrapeError {
    /// Process exit code reported by the binary for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScrapeError::Fetch(_) => 2,
            ScrapeError::NoFixture { .. } => 3,
            ScrapeError::Serialize(_) | ScrapeError::Write { .. } => 4,
        }
    }
}
