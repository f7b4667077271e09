//! k-anonymity breach lookup against a range-query service.
//!
//! Only the first five hex characters of the password digest are ever sent;
//! the password and the full digest never leave the process.

use std::time::Duration;

use data_encoding::HEXUPPER;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};
use thiserror::Error;

use crate::report::BreachStatus;

const RANGE_ENDPOINT: &str = "https://api.pwnedpasswords.com/range/";
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(15);
const USER_AGENT: &str = concat!("passguard/", env!("CARGO_PKG_VERSION"));

/// How many hex characters of the digest are disclosed to the service.
const PREFIX_LEN: usize = 5;

#[derive(Error, Debug)]
pub enum BreachError {
    #[error("range query failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("range service responded with status {0}")]
    Status(StatusCode),
    #[error("malformed range response line")]
    MalformedResponse,
    #[error("lookup cancelled")]
    Cancelled,
}

/// Client for the k-anonymity range API.
///
/// Holds a reusable HTTP client; cloning shares the connection pool.
#[derive(Debug, Clone)]
pub struct BreachChecker {
    client: reqwest::Client,
    endpoint: String,
}

impl Default for BreachChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl BreachChecker {
    /// Checker pointed at the public Pwned Passwords range API.
    pub fn new() -> Self {
        Self::with_endpoint(RANGE_ENDPOINT)
    }

    /// Checker pointed at a custom range endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Looks the password up in the breach corpus. One attempt, no retries.
    ///
    /// Never returns an error past this boundary: every network, status or
    /// parse failure collapses into [`BreachStatus::Unavailable`], so a
    /// failed lookup can not masquerade as a clean one.
    pub async fn check(&self, password: &SecretString) -> BreachStatus {
        match self.lookup(password).await {
            Ok(count) => BreachStatus::Checked(count),
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("breach lookup unavailable: {}", e);
                BreachStatus::Unavailable(e.to_string())
            }
        }
    }

    async fn lookup(&self, password: &SecretString) -> Result<u64, BreachError> {
        let digest = HEXUPPER.encode(Sha1::digest(password.expose_secret().as_bytes()).as_slice());
        let (prefix, suffix) = digest.split_at(PREFIX_LEN);

        let url = format!("{}{}", self.endpoint, prefix);
        let resp = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Add-Padding", "true")
            .timeout(LOOKUP_TIMEOUT)
            .send()
            .await?;

        match resp.status() {
            StatusCode::OK => scan_range_body(&resp.text().await?, suffix),
            status => Err(BreachError::Status(status)),
        }
    }
}

/// Scans a `SUFFIX:COUNT` range body for the digest suffix.
///
/// Matching is case-insensitive. A line without a separator, or an
/// unparseable count on the matching line, is a malformed response.
fn scan_range_body(body: &str, suffix: &str) -> Result<u64, BreachError> {
    for line in body.lines() {
        if line.is_empty() {
            continue;
        }
        let (line_suffix, count) = line.split_once(':').ok_or(BreachError::MalformedResponse)?;
        if line_suffix.eq_ignore_ascii_case(suffix) {
            return count
                .trim()
                .parse::<u64>()
                .map_err(|_| BreachError::MalformedResponse);
        }
    }
    Ok(0)
}
