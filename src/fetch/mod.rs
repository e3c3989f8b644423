// src/fetch/mod.rs
// =============================================================================
// This module handles fetching the audited page.
//
// Only a single page is fetched per request: links found on it are probed,
// never followed.
// =============================================================================

mod page;

pub use page::PageFetcher;
