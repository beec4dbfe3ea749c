//! Page fetching over HTTP
//!
//! One GET with a browser User-Agent and a fixed timeout. Servers that
//! serve different content to obvious bots get the same page a browser
//! would see.

use std::time::{Duration, Instant};

use reqwest::StatusCode;
use thiserror::Error;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Why a page could not be loaded
#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS, connect, TLS, or timeout failure from the client
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP status {0}")]
    Status(StatusCode),
}

/// A successfully fetched page body plus the time the request took
#[derive(Debug)]
pub struct FetchedPage {
    pub body: String,
    pub elapsed: Duration,
}

/// Fetch `url`, timing the request from send through body read.
pub async fn fetch_page(url: &str) -> Result<FetchedPage, FetchError> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .build()?;

    let start = Instant::now();
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let body = response.text().await?;
    let elapsed = start.elapsed();

    Ok(FetchedPage { body, elapsed })
}
