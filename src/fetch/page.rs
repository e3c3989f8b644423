// src/fetch/page.rs
// =============================================================================
// This module downloads the page whose links are audited.
//
// Strategy:
// - Validate the submitted string as an absolute URL first
// - One GET request, no explicit timeout, no retries
// - Any non-2xx status is an error carrying that status
//
// Rust concepts:
// - async functions: For network I/O
// - Result + ?: Errors bubble up to the pipeline, which turns them into the
//   `{"error": ...}` reply
// =============================================================================

use reqwest::Client;
use url::Url;

use crate::error::FetchError;
use crate::observer::SharedObserver;

#[derive(Clone)]
pub struct PageFetcher {
    client: Client,
    observer: SharedObserver,
}

impl PageFetcher {
    pub fn new(observer: SharedObserver) -> Self {
        PageFetcher {
            client: Client::new(),
            observer,
        }
    }

    // Fetches a web page and returns its HTML content
    //
    // Parameters:
    //   url: absolute http(s) URL submitted by the caller
    //
    // Returns: the response body as text, or a FetchError
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        self.observer.fetching_page(url);

        let network = |source| FetchError::Network {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(network)?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        response.text().await.map_err(network)
    }
}
