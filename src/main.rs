// src/main.rs
// =============================================================================
// This is the entry point of our application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging
// 3. Either run the websocket service, or audit a single page
// 4. Exit with proper code (0 = all links OK, 1 = some links not OK, 2 = error)
// =============================================================================

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use asset_guardian::cli::{Cli, Commands};
use asset_guardian::{logger, server, LinkRecord, LogObserver, Pipeline, Reply, StatusTotals};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let config = cli.command.config();
    let pipeline = Pipeline::new(&config, LogObserver::shared())?;

    match cli.command {
        Commands::Serve { .. } => {
            server::run(&config, Arc::new(pipeline)).await?;
            Ok(0)
        }
        Commands::Check { url, json, .. } => handle_check(&pipeline, &url, json).await,
    }
}

// Handles the 'check' subcommand
async fn handle_check(pipeline: &Pipeline, url: &str, json: bool) -> Result<i32> {
    let reply = match pipeline.run(url).await {
        Ok(result) => Reply::Success(result),
        Err(e) => Reply::Failure {
            error: e.to_string(),
        },
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&reply)?);
    }

    match reply {
        Reply::Success(result) => {
            if !json {
                print_table(&result.records);
                print_summary(&result.totals);
                println!(
                    "📁 Saved to {}",
                    pipeline.exporter().path().display()
                );
            }

            if result.totals.ok < result.totals.total {
                Ok(1)
            } else {
                Ok(0)
            }
        }
        Reply::Failure { error } => {
            if !json {
                eprintln!("Error: {}", error);
            }
            Ok(2)
        }
    }
}

// Prints results as a human-readable table in the terminal
fn print_table(records: &[LinkRecord]) {
    println!("{:<80} {:<25}", "URL", "STATUS");
    println!("{}", "=".repeat(105));

    for record in records {
        // Truncate URL if too long for display
        let url_display = if record.url.chars().count() > 77 {
            let head: String = record.url.chars().take(77).collect();
            format!("{}...", head)
        } else {
            record.url.clone()
        };

        println!("{:<80} {:<25}", url_display, record.status.label());
    }

    println!();
}

fn print_summary(totals: &StatusTotals) {
    println!("📊 Summary:");
    println!("   ✅ OK: {}", totals.ok);
    println!("   ❌ Errors: {}", totals.error);
    println!("   ⚠️  Other: {}", totals.other());
    println!("   📋 Total: {}", totals.total);
}
