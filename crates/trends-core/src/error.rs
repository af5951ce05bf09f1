// File: crates/trends-core/src/error.rs
// Summary: Error types for each pipeline stage (table parsing, series building, fetching, loading).

use thiserror::Error;

/// Failures while turning delimited text into records.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("csv read failed: {0}")]
    Csv(#[from] csv::Error),

    /// A row whose field count differs from the header row.
    #[error("row {line} has {found} fields, expected {expected}")]
    Ragged { line: usize, expected: usize, found: usize },
}

/// Input format violations detected by the series builder.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeriesError {
    #[error("record {record} has no `Name` field")]
    MissingName { record: usize },
}

/// Failures while retrieving the raw data file.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("GET {location} returned {status}")]
    Status { location: String, status: u16 },

    #[error("request to {location} failed: {source}")]
    Http {
        location: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("reading {location} failed: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },
}

/// Terminal outcome of a single load attempt.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Series(#[from] SeriesError),

    /// The file was fetched and parsed but produced no series.
    #[error("data file {location} contained no series")]
    NoData { location: String },

    /// `load` was called after a successful load; the pipeline runs once.
    #[error("figure data already loaded")]
    AlreadyLoaded,
}
