// src/cdx/mod.rs
// =============================================================================
// Everything that talks to, or prepares a request for, the Wayback Machine
// CDX API.
//
// Submodules:
// - query: domain normalization and request URL construction
// - fetch: the HTTP request, retries and body parsing
// - record: the two record shapes the API can return
// =============================================================================

mod fetch;
mod query;
mod record;

pub use fetch::{FetchConfig, Fetcher};
pub use query::{build_cdx_url, normalize_domain, OutputMode, DEFAULT_CDX_ENDPOINT};
pub use record::{CdxRecord, HEADER};
