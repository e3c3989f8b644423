// src/checker/http.rs
// =============================================================================
// This module checks if asset URLs are alive by making HTTP requests.
//
// Key functionality:
// - Makes HTTP HEAD requests (lightweight, no body download)
// - Follows redirects, up to a configured number of hops
// - Bounds every probe with its own timeout
// - Classifies the final status code (200 / 404 / anything else)
//
// Checks are made one at a time by the caller: the pipeline awaits each
// probe before sending the next one.
//
// Rust concepts:
// - async/await: For network I/O
// - Result<T, E>: The client builder can fail
// - Enums: LinkStatus (see status.rs)
// =============================================================================

use std::time::Duration;

use reqwest::{redirect, Client};

use super::status::LinkStatus;
use crate::config::Config;
use crate::observer::SharedObserver;

// Issues one HEAD probe per link and classifies the answer
//
// The reqwest Client is reused for every probe (connection pooling).
// Cloning a LinkStatusChecker is cheap: Client and the observer are both
// reference counted internally.
#[derive(Clone)]
pub struct LinkStatusChecker {
    client: Client,
    timeout: Duration,
    observer: SharedObserver,
}

impl LinkStatusChecker {
    // Builds the HTTP client from the configuration
    //
    // The timeout is applied per request (not on the client) so the same
    // settings stay visible in one place: `check`.
    pub fn new(config: &Config, observer: SharedObserver) -> reqwest::Result<Self> {
        let client = Client::builder()
            .redirect(redirect::Policy::limited(config.max_redirects))
            .build()?;

        Ok(LinkStatusChecker {
            client,
            timeout: config.check_timeout,
            observer,
        })
    }

    // Probes a single URL
    //
    // Never fails: a probe that did not produce a status code (timeout,
    // refused connection, bad URL, too many redirects...) is reported to the
    // observer and classified as `Unreachable`.
    pub async fn check(&self, url: &str) -> LinkStatus {
        self.observer.checking_link(url);

        let result = self
            .client
            .head(url)
            .timeout(self.timeout)
            .send()
            .await;

        match result {
            Ok(response) => LinkStatus::from_code(response.status().as_u16()),
            Err(e) => {
                self.observer.check_failed(url, &e);
                LinkStatus::Unreachable
            }
        }
    }
}
