// src/pipeline.rs
// =============================================================================
// Runs one audit from start to finish:
//
//   fetch page -> extract + probe links -> count -> export -> result
//
// Any failure in fetch or export aborts the run. Individual probe failures
// never do: they are already folded into the records as `Unreachable`.
//
// The transports (websocket, CLI) only deal with `Pipeline::respond`, which
// never fails: errors become a `Reply::Failure`.
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::checker::{LinkExtractor, LinkRecord, LinkStatusChecker};
use crate::config::Config;
use crate::error::PipelineError;
use crate::fetch::PageFetcher;
use crate::observer::SharedObserver;
use crate::report::{Exporter, StatusTotals};

/// Outcome of one successful run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineResult {
    pub records: Vec<LinkRecord>,
    /// The URL exactly as submitted
    pub url: String,
    pub totals: StatusTotals,
}

/// Body of a `{"url": ...}` request
///
/// A missing `url` is treated as the empty string, which then fails to fetch.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub url: String,
}

/// Exactly one reply is sent per request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reply {
    Success(PipelineResult),
    Failure { error: String },
}

pub struct Pipeline {
    fetcher: PageFetcher,
    extractor: LinkExtractor,
    exporter: Exporter,
    observer: SharedObserver,
}

impl Pipeline {
    // Builds every component from the configuration
    pub fn new(config: &Config, observer: SharedObserver) -> anyhow::Result<Self> {
        config.validate()?;

        let checker = LinkStatusChecker::new(config, observer.clone())?;

        Ok(Pipeline {
            fetcher: PageFetcher::new(observer.clone()),
            extractor: LinkExtractor::new(config, checker, observer.clone())?,
            exporter: Exporter::new(config.export_path.clone(), observer.clone()),
            observer,
        })
    }

    pub fn exporter(&self) -> &Exporter {
        &self.exporter
    }

    pub async fn run(&self, url: &str) -> Result<PipelineResult, PipelineError> {
        let html = self.fetcher.fetch(url).await?;
        let records = self.extractor.extract(&html).await;
        let totals = StatusTotals::from_records(&records);

        self.exporter.save(&records)?;

        Ok(PipelineResult {
            records,
            url: url.to_string(),
            totals,
        })
    }

    // Runs the pipeline and folds any failure into the reply
    pub async fn respond(&self, request: &CheckRequest) -> Reply {
        self.observer.request_received(&request.url);

        match self.run(&request.url).await {
            Ok(result) => Reply::Success(result),
            Err(e) => Reply::Failure {
                error: e.to_string(),
            },
        }
    }

    // Handles one raw websocket text frame and returns the JSON reply
    pub async fn respond_to_message(&self, message: &str) -> String {
        let reply = match serde_json::from_str::<CheckRequest>(message) {
            Ok(request) => self.respond(&request).await,
            Err(e) => Reply::Failure {
                error: format!("Invalid request: {}", e),
            },
        };

        // A Reply only holds strings and integers, it always serializes
        serde_json::to_string(&reply).unwrap_or_else(|e| {
            format!("{{\"error\":\"{}\"}}", e.to_string().replace('"', "'"))
        })
    }
}
