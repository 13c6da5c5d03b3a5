// src/main.rs
// =============================================================================
// This is the entry point of the scraping-scripts starter.
//
// What happens here:
// 1. Set up diagnostics (stderr only, quiet unless RUST_LOG says otherwise)
// 2. Parse command-line arguments using clap
// 3. Either print the greeting, or fetch the sample target once
// 4. Exit with proper code (0 = done, 1 = the request failed)
//
// Whatever the server answers (200, 404, 500...) counts as success: the point
// of --scrape is only to prove the network path works.
// =============================================================================

mod cli;
mod fetch;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;
use url::Url;

/// Printed when the binary runs without --scrape.
pub const GREETING: &str = "Hello, world! This is the scraping_scripts starter.";

// One request at most, so a single-threaded runtime is all we need
#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();

    let code = exit_code(run().await, &mut io::stderr());
    std::process::exit(code);
}

// Diagnostics go to stderr so stdout only ever carries the greeting or the
// summary line.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

// Maps the outcome of run() to the process exit code
//
// Returns:
//   the code from run() on success
//   1 after reporting the error, for any failure
fn exit_code(result: Result<i32>, err: &mut impl Write) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            // {:?} on anyhow::Error prints the whole cause chain
            // (and a backtrace when RUST_BACKTRACE is set)
            let _ = writeln!(err, "Error: {:?}", e);
            1
        }
    }
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    let target = fetch::target_url()?;

    execute(&cli, &target, &mut io::stdout()).await
}

// Does the work for one invocation, writing the greeting or the summary
// line to `out`.
async fn execute(cli: &Cli, target: &Url, out: &mut impl Write) -> Result<i32> {
    if cli.scrape {
        let summary = sample_scrape(target).await?;
        writeln!(out, "{}", summary)?;
    } else {
        write_greeting(out)?;
    }

    Ok(0)
}

fn write_greeting(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", GREETING)
}

// Fetches the target once. Errors bubble straight up to main.
async fn sample_scrape(target: &Url) -> Result<fetch::PageSummary> {
    let client = fetch::build_client(fetch::REQUEST_TIMEOUT)?;

    tracing::info!(url = %target, "running sample scrape");
    fetch::fetch_page(&client, target).await
}
