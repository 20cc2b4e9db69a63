// src/core/net.rs

// One blocking GET; the whole tool is a single fetch.

use std::time::Duration;

use anyhow::{Context, Result, bail};

use crate::config::consts::HTTP_TIMEOUT_SECS;

const USER_AGENT: &str = concat!("nicar_scrape/", env!("CARGO_PKG_VERSION"));

/// Fetch `url` and hand back the raw body bytes. Non-2xx is an error; body
/// decoding is the caller's problem (see `core::encoding`).
pub fn http_get(url: &str) -> Result<Vec<u8>> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()?;

    log::debug!("GET {url}");
    let resp = client.get(url).send().with_context(|| format!("GET {url}"))?;
    let status = resp.status();
    if !status.is_success() {
        bail!("HTTP error: {status} {url}");
    }
    Ok(resp.bytes()?.to_vec())
}
