// src/config.rs
// =============================================================================
// Runtime configuration.
//
// One Config value is built at startup (from the CLI, see cli.rs) and handed
// to every component when it is constructed. Nothing reads process-wide
// state after that.
//
// Defaults match the stock deployment:
// `div.paginas-internas` containers, pdf/png/jpeg/jpg assets, 10 second probe
// timeout and a `records.xlsx` export next to the working directory.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

/// Class that marks the content regions worth scanning
pub const DEFAULT_CONTAINER_CLASS: &str = "paginas-internas";

/// Asset suffixes a link must end with (compared lowercased)
pub const DEFAULT_EXTENSIONS: [&str; 4] = [".pdf", ".png", ".jpeg", ".jpg"];

pub const DEFAULT_CHECK_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_MAX_REDIRECTS: usize = 10;
pub const DEFAULT_EXPORT_PATH: &str = "records.xlsx";
pub const DEFAULT_WS_ADDR: &str = "localhost:8765";
pub const DEFAULT_HTTP_ADDR: &str = "localhost:8080";

#[derive(Debug, Clone)]
pub struct Config {
    /// Prefix for relative links. Concatenated verbatim, never joined.
    pub base_url: String,
    /// Only `div` elements with this class are scanned
    pub container_class: String,
    /// Lowercase suffixes that make a link qualifying
    pub extensions: Vec<String>,
    /// Upper bound for each HEAD probe
    pub check_timeout: Duration,
    /// Redirect hops followed by a probe before it gives up
    pub max_redirects: usize,
    /// Spreadsheet written after each successful run
    pub export_path: PathBuf,
    /// Websocket listen address
    pub ws_addr: String,
    /// Download endpoint listen address
    pub http_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: String::new(),
            container_class: DEFAULT_CONTAINER_CLASS.to_string(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            check_timeout: DEFAULT_CHECK_TIMEOUT,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
            ws_addr: DEFAULT_WS_ADDR.to_string(),
            http_addr: DEFAULT_HTTP_ADDR.to_string(),
        }
    }
}

impl Config {
    // Rejects values that would only blow up later, in the middle of a request.
    //
    // An empty base URL is allowed: relative links then stay relative and
    // their probe fails, exactly like an unconfigured deployment.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_url.is_empty() {
            Url::parse(&self.base_url).map_err(|source| ConfigError::InvalidBaseUrl {
                url: self.base_url.clone(),
                source,
            })?;
        }

        let class_ok = !self.container_class.is_empty()
            && self
                .container_class
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !class_ok {
            return Err(ConfigError::InvalidContainerClass(
                self.container_class.clone(),
            ));
        }

        Ok(())
    }
}
