// src/error.rs
// =============================================================================
// Error types for the parts of the pipeline that can fail.
//
// Only two stages can fail: fetching (network or decoding) and saving the
// output file. Everything else is total. main.rs turns these into a user
// message and exit code 1.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Errors from querying the CDX API
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure: timeout, refused connection, DNS, TLS...
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server kept answering with a retryable status
    #[error("giving up on {url} after {attempts} attempts (last status: HTTP {status})")]
    RetriesExhausted {
        url: String,
        status: u16,
        attempts: u32,
    },

    /// A non-success status that is not worth retrying
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// The body claimed to be JSON but wasn't a list of string rows
    #[error("could not decode JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A JSON row with fewer than the three expected fields
    #[error("row {index} has {fields} field(s), expected 3")]
    MalformedRecord { index: usize, fields: usize },
}

impl FetchError {
    /// True for errors that came from the network rather than the payload
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            FetchError::Request(_) | FetchError::RetriesExhausted { .. } | FetchError::Status { .. }
        )
    }
}

/// Errors from writing the formatted output
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// stdout is gone or full; a closed pipe is not reported as this
    #[error("could not write to stdout: {0}")]
    Stdout(#[source] std::io::Error),
}

impl SinkError {
    /// The output file, when the failure was writing one
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            SinkError::Write { path, .. } => Some(path),
            SinkError::Stdout(_) => None,
        }
    }
}
