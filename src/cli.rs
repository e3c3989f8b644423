// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Every flag has a default matching the stock deployment, so
// `asset-guardian serve` with no arguments listens on the stock ports.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::config::{
    Config, DEFAULT_CHECK_TIMEOUT, DEFAULT_CONTAINER_CLASS, DEFAULT_EXPORT_PATH,
    DEFAULT_HTTP_ADDR, DEFAULT_WS_ADDR,
};

#[derive(Parser, Debug)]
#[command(
    name = "asset-guardian",
    version,
    about = "Audit the document and image links of a web page",
    long_about = "asset-guardian fetches a page, finds the pdf/png/jpeg/jpg links inside its \
                  content containers, checks each one with a HEAD request and exports the \
                  results to an .xlsx spreadsheet. It runs either as a websocket service or \
                  as a one-shot command."
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the websocket service and the /download endpoint
    ///
    /// Example: asset-guardian serve --base-url https://example.com
    Serve {
        /// Websocket listen address
        #[arg(long, default_value = DEFAULT_WS_ADDR)]
        ws_addr: String,

        /// Listen address of the /download endpoint
        #[arg(long, default_value = DEFAULT_HTTP_ADDR)]
        http_addr: String,

        #[command(flatten)]
        audit: AuditArgs,
    },

    /// Audit a single page and exit
    ///
    /// Example: asset-guardian check https://example.com/docs --json
    Check {
        /// Page to audit
        url: String,

        /// Print the JSON reply instead of a table
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        audit: AuditArgs,
    },
}

/// Settings shared by both subcommands
#[derive(Args, Debug, Clone)]
pub struct AuditArgs {
    /// Prefix for relative links (plain concatenation)
    #[arg(long, default_value = "")]
    pub base_url: String,

    /// Class of the div elements whose links are checked
    #[arg(long, default_value = DEFAULT_CONTAINER_CLASS)]
    pub container_class: String,

    /// Where the spreadsheet is written
    #[arg(long, default_value = DEFAULT_EXPORT_PATH)]
    pub export_path: PathBuf,

    /// Timeout for each link check, in seconds
    #[arg(long, default_value_t = DEFAULT_CHECK_TIMEOUT.as_secs())]
    pub timeout: u64,
}

impl AuditArgs {
    pub fn to_config(&self) -> Config {
        Config {
            base_url: self.base_url.clone(),
            container_class: self.container_class.clone(),
            export_path: self.export_path.clone(),
            check_timeout: Duration::from_secs(self.timeout),
            ..Config::default()
        }
    }
}

impl Commands {
    // Resolves the subcommand's flags into a Config
    pub fn config(&self) -> Config {
        match self {
            Commands::Serve {
                ws_addr,
                http_addr,
                audit,
            } => Config {
                ws_addr: ws_addr.clone(),
                http_addr: http_addr.clone(),
                ..audit.to_config()
            },
            Commands::Check { audit, .. } => audit.to_config(),
        }
    }
}
