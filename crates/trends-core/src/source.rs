// File: crates/trends-core/src/source.rs
// Summary: Data file location (injected per deployment) and fetchers for HTTP(S) and local files.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::FetchError;

/// Where the figure's data file lives. `base` is resolved by deployment configuration
/// (a production storage URL or a local directory), never by inspecting the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSource {
    pub base: String,
    pub file: String,
}

impl Default for DataSource {
    fn default() -> Self {
        Self {
            base: "./".to_string(),
            file: "assets/data/2023-global_trade_trends_3_figure2.csv".to_string(),
        }
    }
}

impl DataSource {
    pub fn new(base: impl Into<String>, file: impl Into<String>) -> Self {
        Self { base: base.into(), file: file.into() }
    }

    /// Base and file joined with exactly one `/` between them.
    pub fn location(&self) -> String {
        let base = self.base.trim_end_matches('/');
        let file = self.file.trim_start_matches('/');
        if base.is_empty() {
            file.to_string()
        } else {
            format!("{base}/{file}")
        }
    }

    pub fn is_remote(&self) -> bool { is_http(&self.base) }
}

fn is_http(location: &str) -> bool {
    let lower = location.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Retrieves the raw text of a data file.
pub trait Fetcher {
    fn fetch_text(&self, location: &str) -> Result<String, FetchError>;
}

/// Blocking HTTP(S) GET. Any non-2xx status is an error; the body is not read.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| FetchError::Http { location: String::new(), source })?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch_text(&self, location: &str) -> Result<String, FetchError> {
        let http = |source: reqwest::Error| FetchError::Http { location: location.to_string(), source };
        let response = self.client.get(location).send().map_err(http)?;
        let status = response.status();
        debug!(%location, %status, "data file response");
        if !status.is_success() {
            return Err(FetchError::Status { location: location.to_string(), status: status.as_u16() });
        }
        response.text().map_err(http)
    }
}

/// Reads data files from the local filesystem (development deployments).
#[derive(Clone, Copy, Debug, Default)]
pub struct FileFetcher;

impl Fetcher for FileFetcher {
    fn fetch_text(&self, location: &str) -> Result<String, FetchError> {
        std::fs::read_to_string(Path::new(location))
            .map_err(|source| FetchError::Io { location: location.to_string(), source })
    }
}

/// Picks HTTP or filesystem by the location's scheme.
pub struct SourceFetcher {
    http: HttpFetcher,
    file: FileFetcher,
}

impl SourceFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        Ok(Self { http: HttpFetcher::new(timeout)?, file: FileFetcher })
    }
}

impl Fetcher for SourceFetcher {
    fn fetch_text(&self, location: &str) -> Result<String, FetchError> {
        if is_http(location) {
            self.http.fetch_text(location)
        } else {
            self.file.fetch_text(location)
        }
    }
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch_text(&self, location: &str) -> Result<String, FetchError> {
        (**self).fetch_text(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_joins_once() {
        assert_eq!(DataSource::new("https://host/dir/", "/a.csv").location(), "https://host/dir/a.csv");
        assert_eq!(DataSource::new("./", "assets/a.csv").location(), "./assets/a.csv");
        assert_eq!(DataSource::new("", "a.csv").location(), "a.csv");
    }

    #[test]
    fn scheme_detection() {
        assert!(DataSource::new("HTTPS://storage.example.org/", "a.csv").is_remote());
        assert!(!DataSource::default().is_remote());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = FileFetcher.fetch_text("target/does/not/exist.csv").unwrap_err();
        assert!(matches!(err, FetchError::Io { .. }));
    }
}
