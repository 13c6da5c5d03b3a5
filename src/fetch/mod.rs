// src/fetch/mod.rs
// =============================================================================
// This module holds the HTTP side of the starter.
//
// Submodules:
// - http: Builds the client and performs the single GET request
//
// The rest of the application only needs `fetch::build_client`,
// `fetch::fetch_page` and the constants describing the sample target.
// =============================================================================

mod http;

pub use http::{build_client, fetch_page, target_url, PageSummary, REQUEST_TIMEOUT};
