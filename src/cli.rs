// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The starter has exactly one switch: --scrape. Without it the binary just
// prints a greeting; with it the binary makes one HTTP request as a
// connectivity check. clap gives us --help and --version for free and
// rejects anything else it doesn't recognise.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "hello-world",
    version,
    about = "Hello world + sample scraper",
    long_about = "Starter script for the scraping-scripts project. \
                  Prints a greeting, or with --scrape fetches the sample target once \
                  and reports the HTTP status and body size."
)]
pub struct Cli {
    /// Run a sample fetch of the target URL
    ///
    /// Prints the HTTP status code and the number of bytes in the body.
    #[arg(long)]
    pub scrape: bool,
}
