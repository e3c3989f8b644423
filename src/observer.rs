// src/observer.rs
// =============================================================================
// Diagnostics hook shared by every pipeline component.
//
// Components never print. They report events to an `Observer` they were
// given at construction time. The default `LogObserver` turns each event into
// a `log` record, so verbosity is controlled by env_logger / RUST_LOG.
//
// Every method has an empty default body: an observer only overrides the
// events it cares about.
// =============================================================================

use std::path::Path;
use std::sync::Arc;

use log::{debug, info, warn};

use crate::checker::LinkRecord;

pub trait Observer: Send + Sync {
    /// A websocket client (or the CLI) submitted a page
    fn request_received(&self, _url: &str) {}

    /// The page GET is about to be sent
    fn fetching_page(&self, _url: &str) {}

    /// Number of content containers found on the page
    fn containers_found(&self, _count: usize, _class: &str) {}

    /// A HEAD probe is about to be sent
    fn checking_link(&self, _url: &str) {}

    /// A probe failed before any status code was received
    fn check_failed(&self, _url: &str, _error: &reqwest::Error) {}

    /// A link was classified
    fn link_checked(&self, _record: &LinkRecord) {}

    /// The spreadsheet was written
    fn exported(&self, _path: &Path, _rows: usize) {}
}

/// Shared handle type used by all components
pub type SharedObserver = Arc<dyn Observer>;

/// Forwards every event to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl LogObserver {
    pub fn shared() -> SharedObserver {
        Arc::new(LogObserver)
    }
}

impl Observer for LogObserver {
    fn request_received(&self, url: &str) {
        info!("URL received: {}", url);
    }

    fn fetching_page(&self, url: &str) {
        info!("Fetching page: {}", url);
    }

    fn containers_found(&self, count: usize, class: &str) {
        info!("Found {} div(s) with class \"{}\"", count, class);
    }

    fn checking_link(&self, url: &str) {
        debug!("Checking status of {}", url);
    }

    fn check_failed(&self, url: &str, error: &reqwest::Error) {
        warn!("Could not check {}: {}", url, error);
    }

    fn link_checked(&self, record: &LinkRecord) {
        info!("URL: {} - {}", record.url, record.status);
    }

    fn exported(&self, path: &Path, rows: usize) {
        info!("Saved {} row(s) to {}", rows, path.display());
    }
}
