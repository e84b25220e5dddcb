//! Network utilities

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Fetch and decode a JSON document over http(s)
pub async fn fetch_json<T: DeserializeOwned>(url: &str, timeout: Duration) -> Result<T> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;

    let response = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .with_context(|| format!("Request to {} failed", url))?;

    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("{} returned {}", url, status);
    }

    response
        .json::<T>()
        .await
        .with_context(|| format!("Invalid JSON from {}", url))
}
