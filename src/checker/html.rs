// src/checker/html.rs
// =============================================================================
// This module extracts asset links from HTML pages and checks them.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Only part of the page is scanned: the `div` containers carrying the
// configured class. Inside them, every <a> whose href ends with one of the
// configured extensions (case-insensitive) is a qualifying link.
//
// Relative links are resolved by plain string concatenation with the base
// URL. No path joining, no slash normalization: "https://example.com" +
// "/files/a.pdf" is "https://example.com/files/a.pdf", and a base with a
// trailing slash yields a double slash.
//
// Rust concepts:
// - Iterators: For walking containers and anchors in document order
// - Ownership: scraper's Html is not Send, so it is dropped before any .await
// =============================================================================

use scraper::{Html, Selector};

use super::http::LinkStatusChecker;
use super::status::LinkRecord;
use crate::config::Config;
use crate::error::ConfigError;
use crate::observer::SharedObserver;

pub struct LinkExtractor {
    container: Selector,
    anchor: Selector,
    container_class: String,
    extensions: Vec<String>,
    base_url: String,
    checker: LinkStatusChecker,
    observer: SharedObserver,
}

impl LinkExtractor {
    pub fn new(
        config: &Config,
        checker: LinkStatusChecker,
        observer: SharedObserver,
    ) -> Result<Self, ConfigError> {
        let container = Selector::parse(&format!("div.{}", config.container_class))
            .map_err(|_| ConfigError::InvalidContainerClass(config.container_class.clone()))?;

        // Constant selector, known to be valid
        let anchor = Selector::parse("a").expect("static selector");

        Ok(LinkExtractor {
            container,
            anchor,
            container_class: config.container_class.clone(),
            extensions: config
                .extensions
                .iter()
                .map(|e| e.to_lowercase())
                .collect(),
            base_url: config.base_url.clone(),
            checker,
            observer,
        })
    }

    // Finds every qualifying link, resolved to an absolute URL
    //
    // Order: containers in document order, then anchors in document order
    // within each container. Nested containers are visited on their own as
    // well, so an anchor inside two matching divs appears twice.
    pub fn qualifying_links(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);

        let containers: Vec<_> = document.select(&self.container).collect();
        self.observer
            .containers_found(containers.len(), &self.container_class);

        let mut links = Vec::new();
        for container in containers {
            for anchor in container.select(&self.anchor) {
                // A missing href behaves like an empty one: it never qualifies
                let href = anchor.value().attr("href").unwrap_or("");

                if self.is_qualifying(href) {
                    links.push(self.resolve(href));
                }
            }
        }

        links
    }

    // Extracts the qualifying links and probes each one, sequentially
    //
    // Returns one record per qualifying link, in discovery order. A page
    // without containers or anchors gives an empty Vec.
    pub async fn extract(&self, html: &str) -> Vec<LinkRecord> {
        // The parsed document is gone once this returns, so the future
        // below stays Send.
        let links = self.qualifying_links(html);

        let mut records = Vec::with_capacity(links.len());
        for url in links {
            let status = self.checker.check(&url).await;
            let record = LinkRecord::new(url, status);
            self.observer.link_checked(&record);
            records.push(record);
        }

        records
    }

    fn is_qualifying(&self, href: &str) -> bool {
        let href = href.to_lowercase();
        self.extensions.iter().any(|ext| href.ends_with(ext.as_str()))
    }

    fn resolve(&self, href: &str) -> String {
        if href.starts_with("http") {
            href.to_string()
        } else {
            format!("{}{}", self.base_url, href)
        }
    }
}
