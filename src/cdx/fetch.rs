// src/cdx/fetch.rs
// =============================================================================
// Sends the CDX request and turns the response body into records.
//
// How it works:
// 1. GET the URL with a 30 second timeout
// 2. On 429/500/502/503/504, a timeout or a connection failure, wait and
//    try again (1s, then 2s), up to 3 attempts in total
// 3. Any other non-2xx status fails straight away
// 4. If the response says it is JSON, decode a list of string rows and
//    drop the leading column-header row; otherwise split the body into
//    lines
//
// One reqwest Client is built per Fetcher and reused across retries so
// the connection can be kept alive.
//
// Rust concepts:
// - async/await: the request and the backoff sleep are awaited in turn
// - thiserror enums: every failure is a FetchError variant
// - Drop guards: the spinner is cleared on every exit path
// =============================================================================

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, info};

use super::record::{CdxRecord, HEADER};
use crate::error::FetchError;
use crate::ui::Spinner;

/// Status codes that are retried instead of failing immediately
pub const RETRYABLE_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];

/// Timeout and retry settings for the CDX request
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Per-request timeout
    pub timeout: Duration,
    /// Total number of attempts, including the first one
    pub max_attempts: u32,
    /// Delay before the second attempt
    pub initial_backoff: Duration,
    /// Each following delay is the previous one times this
    pub backoff_multiplier: u32,
    pub retry_statuses: Vec<u16>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            timeout: Duration::from_secs(30),
            max_attempts: 3,
            initial_backoff: Duration::from_secs(1),
            backoff_multiplier: 2,
            retry_statuses: RETRYABLE_STATUSES.to_vec(),
        }
    }
}

impl FetchConfig {
    fn is_retryable_status(&self, status: u16) -> bool {
        self.retry_statuses.contains(&status)
    }
}

pub struct Fetcher {
    client: Client,
    config: FetchConfig,
    show_spinner: bool,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Fetcher {
            client,
            config,
            show_spinner: false,
        })
    }

    /// Show a spinner while waiting on the network and while parsing
    pub fn with_spinner(mut self, enabled: bool) -> Self {
        self.show_spinner = enabled;
        self
    }

    // Fetches and parses the records behind a CDX URL
    //
    // Errors are returned as-is; the spinner guard makes sure the status
    // line is gone before the caller prints anything about them.
    pub async fn fetch(&self, url: &str) -> Result<Vec<CdxRecord>, FetchError> {
        debug!(url, "making request");

        let spinner = Spinner::start("Fetching data from Wayback Machine", self.show_spinner);
        let response = self.get_with_retry(url).await?;

        let is_json = is_json_response(&response);
        let status = response.status().as_u16();
        let body = response.text().await?;
        spinner.stop();

        debug!(status, "HTTP status");
        debug!(bytes = body.len(), "response size");

        let _spinner = Spinner::start("Processing results", self.show_spinner);
        parse_body(&body, is_json)
    }

    async fn get_with_retry(&self, url: &str) -> Result<Response, FetchError> {
        let max_attempts = self.config.max_attempts.max(1);
        let mut attempt = 1;
        let mut delay = self.config.initial_backoff;

        loop {
            match self.client.get(url).send().await {
                Ok(response) if response.status().is_success() => {
                    if attempt > 1 {
                        info!(attempts = attempt, "request succeeded after retry");
                    }
                    return Ok(response);
                }
                Ok(response) => {
                    let status = response.status().as_u16();

                    if !self.config.is_retryable_status(status) {
                        return Err(FetchError::Status {
                            url: url.to_string(),
                            status,
                        });
                    }
                    if attempt >= max_attempts {
                        return Err(FetchError::RetriesExhausted {
                            url: url.to_string(),
                            status,
                            attempts: attempt,
                        });
                    }

                    info!(
                        status,
                        attempt,
                        max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        "retryable status, retrying"
                    );
                }
                Err(e) if is_transient(&e) && attempt < max_attempts => {
                    info!(
                        error = %e,
                        attempt,
                        max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        "request failed, retrying"
                    );
                }
                Err(e) => {
                    debug!(error = %e, "request failed");
                    return Err(FetchError::Request(e));
                }
            }

            tokio::time::sleep(delay).await;
            delay *= self.config.backoff_multiplier;
            attempt += 1;
        }
    }
}

fn is_transient(error: &reqwest::Error) -> bool {
    error.is_timeout() || error.is_connect()
}

fn is_json_response(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map_or(false, |value| value.contains("application/json"))
}

// Parses a CDX response body
//
// JSON bodies must be a list of string rows with at least three fields;
// only the first three are kept. If the first row is the column header
// it is removed. Only that first row is checked, so a repeated header
// further down stays in the data.
//
// Text bodies are split into lines, trimmed, and blank lines dropped.
pub fn parse_body(body: &str, is_json: bool) -> Result<Vec<CdxRecord>, FetchError> {
    if !is_json {
        return Ok(body
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(CdxRecord::text)
            .collect());
    }

    let mut rows: Vec<Vec<String>> = serde_json::from_str(body)?;

    if rows.first().is_some_and(|row| is_header_row(row)) {
        rows.remove(0);
    }

    rows.into_iter()
        .enumerate()
        .map(|(index, row)| {
            let fields = row.len();
            let mut cells = row.into_iter();
            match (cells.next(), cells.next(), cells.next()) {
                (Some(url), Some(timestamp), Some(status)) => {
                    Ok(CdxRecord::structured(url, timestamp, status))
                }
                _ => Err(FetchError::MalformedRecord { index, fields }),
            }
        })
        .collect()
}

fn is_header_row(row: &[String]) -> bool {
    row.len() == HEADER.len() && row.iter().zip(HEADER).all(|(cell, name)| cell == name)
}
