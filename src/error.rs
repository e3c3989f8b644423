// src/error.rs
// =============================================================================
// Error types for the audit pipeline.
//
// Only two things can abort a request:
// - fetching the page (bad URL, non-2xx status, network failure)
// - writing the spreadsheet
//
// A failed link probe is NOT an error here: it becomes an `Unreachable`
// record (see checker::status).
//
// The Display text of PipelineError is exactly what a websocket client
// receives in the `{"error": ...}` reply.
// =============================================================================

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Page retrieval failed
#[derive(Error, Debug)]
pub enum FetchError {
    /// The submitted string is not an absolute URL
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// The server answered, but not with a 2xx
    #[error("HTTP {status} for url: {url}")]
    Status { url: String, status: StatusCode },
    /// Connection, DNS, TLS or body decoding failure
    #[error("Failed to fetch {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Writing the spreadsheet failed
#[derive(Error, Debug)]
#[error("Failed to write {}: {source}", .path.display())]
pub struct ExportError {
    pub path: PathBuf,
    #[source]
    pub source: rust_xlsxwriter::XlsxError,
}

/// Anything that aborts one pipeline run
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Rejected configuration values
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Invalid container class '{0}'")]
    InvalidContainerClass(String),
}
