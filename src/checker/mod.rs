// src/checker/mod.rs
// =============================================================================
// This module contains all link checking logic.
//
// Submodules:
// - status: LinkStatus classification and the LinkRecord it ends up in
// - http: Probes a single URL with a HEAD request
// - html: Finds qualifying asset links in a page and probes each of them
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
// =============================================================================

mod html;
mod http;
mod status;

pub use html::LinkExtractor;
pub use http::LinkStatusChecker;
pub use status::{LinkRecord, LinkStatus};
