// src/checker/status.rs
// =============================================================================
// Link classification and the record produced for each qualifying link.
//
// On the wire (JSON reply and spreadsheet) a status is a plain string:
//   "OK"                       -> 200
//   "Erro 404"                 -> 404
//   "Status inesperado: 503"   -> any other code
//   "Status inesperado: None"  -> the probe never got a status code
//
// Aggregation (report::totals) relies on these exact labels, so they are
// produced in one place only: `LinkStatus::label`.
// =============================================================================

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

const OK_LABEL: &str = "OK";
const NOT_FOUND_LABEL: &str = "Erro 404";
const UNEXPECTED_PREFIX: &str = "Status inesperado: ";
const NO_CODE: &str = "None";

/// Outcome of probing one link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum LinkStatus {
    /// 200
    Ok,
    /// 404
    NotFound,
    /// Any other status code
    Unexpected(u16),
    /// Timeout, connection refused, DNS, TLS, redirect loop...
    Unreachable,
}

impl LinkStatus {
    pub fn from_code(code: u16) -> Self {
        match code {
            200 => LinkStatus::Ok,
            404 => LinkStatus::NotFound,
            other => LinkStatus::Unexpected(other),
        }
    }

    pub fn label(&self) -> String {
        match self {
            LinkStatus::Ok => OK_LABEL.to_string(),
            LinkStatus::NotFound => NOT_FOUND_LABEL.to_string(),
            LinkStatus::Unexpected(code) => format!("{}{}", UNEXPECTED_PREFIX, code),
            LinkStatus::Unreachable => format!("{}{}", UNEXPECTED_PREFIX, NO_CODE),
        }
    }
}

impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for LinkStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            OK_LABEL => return Ok(LinkStatus::Ok),
            NOT_FOUND_LABEL => return Ok(LinkStatus::NotFound),
            _ => {}
        }

        match s.strip_prefix(UNEXPECTED_PREFIX) {
            Some(NO_CODE) => Ok(LinkStatus::Unreachable),
            Some(code) => code
                .parse::<u16>()
                .map(LinkStatus::Unexpected)
                .map_err(|_| format!("unknown link status: {}", s)),
            None => Err(format!("unknown link status: {}", s)),
        }
    }
}

impl From<LinkStatus> for String {
    fn from(status: LinkStatus) -> Self {
        status.label()
    }
}

impl TryFrom<String> for LinkStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One qualifying link and how it answered
///
/// Serialized as `{"URL": ..., "Status": ...}`, the column names of the export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Status")]
    pub status: LinkStatus,
}

impl LinkRecord {
    pub fn new(url: impl Into<String>, status: LinkStatus) -> Self {
        LinkRecord {
            url: url.into(),
            status,
        }
    }

    /// Counted as `ok` in the totals
    pub fn is_ok(&self) -> bool {
        self.status.label() == OK_LABEL
    }

    /// Counted as `error` in the totals
    pub fn is_error(&self) -> bool {
        self.status.label().starts_with("Erro")
    }
}
