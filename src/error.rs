//! Error types for loading and rendering draw history.

use std::path::PathBuf;

use thiserror::Error;

use crate::draw::DrawError;

#[derive(Debug, Error)]
pub enum LotoError {
    /// The remote CSV could not be downloaded.
    #[error("failed to fetch draw history from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The local CSV could not be read.
    #[error("failed to read draw history from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row parsed but does not describe a valid draw.
    #[error("malformed draw on line {line}: {source}")]
    MalformedRecord {
        line: u64,
        #[source]
        source: DrawError,
    },

    /// A number column holds something that is not an integer.
    #[error("line {line}, column {column}: cannot parse '{value}' as a number")]
    UnparsableField {
        line: u64,
        column: usize,
        value: String,
    },

    #[error("chart rendering failed: {0}")]
    Chart(String),
}

pub type LotoResult<T> = Result<T, LotoError>;
