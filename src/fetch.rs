//! Single-shot HTTP fetcher wrapping reqwest.
//!
//! One best-effort GET per source, fixed identity header, fixed timeout,
//! no retries. Failures never propagate to the extractors: they surface as
//! `ok = false` with an empty body, plus a WARN line for the operator.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::warn;

/// Identity header sent with every request.
pub const USER_AGENT: &str = "bidwatch/1.0 (construction bid aggregator)";

/// Per-request timeout. A fetch exceeding it is treated like any other
/// fetch failure.
const TIMEOUT: Duration = Duration::from_secs(20);

/// Outcome of a single fetch. `ok` is false on any transport error,
/// timeout, or non-2xx status, in which case `body` is empty.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub body: String,
    pub ok: bool,
}

/// HTTP client for the scrape run.
#[derive(Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    /// Build the underlying client. This is the run's only pre-flight
    /// hard-fail point; everything after it degrades instead of erroring.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(TIMEOUT)
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(USER_AGENT)
            .build()
            .context("failed to construct HTTP client")?;
        Ok(Self { client })
    }

    /// Fetch a URL. Never returns an error; failures come back as
    /// `ok = false` and are logged.
    pub async fn get(&self, url: &str) -> FetchResult {
        match self.get_inner(url).await {
            Ok(body) => FetchResult { body, ok: true },
            Err(e) => {
                warn!("failed to fetch {url}: {e:#}");
                FetchResult {
                    body: String::new(),
                    ok: false,
                }
            }
        }
    }

    async fn get_inner(&self, url: &str) -> Result<String> {
        let resp = self.client.get(url).send().await?.error_for_status()?;
        Ok(resp.text().await?)
    }
}
