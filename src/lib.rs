// src/lib.rs
// =============================================================================
// asset-guardian: audits the document/image links of a web page.
//
// Pipeline, leaf-first:
// - fetch::PageFetcher          downloads the page
// - checker::LinkStatusChecker  probes one link with HEAD
// - checker::LinkExtractor      finds qualifying links and probes each one
// - report::StatusTotals        counts ok / error / total
// - report::Exporter            writes the .xlsx file
// - pipeline::Pipeline          runs all of the above for one URL
//
// server exposes the pipeline over a websocket plus a /download endpoint.
// =============================================================================

pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod logger;
pub mod observer;
pub mod pipeline;
pub mod report;
pub mod server;

pub use checker::{LinkExtractor, LinkRecord, LinkStatus, LinkStatusChecker};
pub use config::Config;
pub use error::{ConfigError, ExportError, FetchError, PipelineError};
pub use fetch::PageFetcher;
pub use observer::{LogObserver, Observer, SharedObserver};
pub use pipeline::{CheckRequest, Pipeline, PipelineResult, Reply};
pub use report::{Exporter, StatusTotals};
