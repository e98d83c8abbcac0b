//! Blocking HTTP + JSON fetch helper
//!
//! Every satchel tool performs at most a couple of sequential GETs per run,
//! so a single blocking call with no retry policy is all we need. A failed
//! fetch is fatal to that run.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

const USER_AGENT: &str = concat!("satchel/", env!("CARGO_PKG_VERSION"));

/// Fetch a URL and decode its body as JSON.
///
/// Non-2xx statuses and decode failures are reported as errors carrying the
/// URL, so the caller can just propagate them.
pub fn get_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    tracing::debug!(url, "fetching");

    let client = reqwest::blocking::Client::new();
    let response = client
        .get(url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()
        .with_context(|| format!("Failed to fetch {}", url))?;

    let status = response.status();
    let response = response
        .error_for_status()
        .with_context(|| format!("Got response code {} from {}", status, url))?;

    tracing::debug!(url, status = %status, "decoding response");

    response
        .json::<T>()
        .with_context(|| format!("Failed to parse JSON response from {}", url))
}
