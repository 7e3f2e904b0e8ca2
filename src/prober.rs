use anyhow::{Context, Result};
use std::time::Duration;

use crate::models::ProbeOutcome;

/// Issues one bounded GET per call and classifies the outcome. Every
/// failure mode comes back as a `ProbeOutcome`; nothing propagates.
pub struct Prober {
    client: reqwest::Client,
}

impl Prober {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }

    pub async fn probe(&self, url: &str) -> ProbeOutcome {
        match self.client.get(url).send().await {
            Ok(response) if response.status() == reqwest::StatusCode::OK => {
                ProbeOutcome::online()
            }
            Ok(response) => {
                ProbeOutcome::offline(format!("HTTP {}", response.status().as_u16()))
            }
            Err(e) if e.is_timeout() => ProbeOutcome::offline("Timeout"),
            Err(e) => ProbeOutcome::offline(root_cause(&e)),
        }
    }
}

/// reqwest's top-level Display is wrapper noise ("error sending request");
/// the innermost source carries the useful text, e.g. "Connection refused".
fn root_cause(err: &reqwest::Error) -> String {
    let mut cause: &dyn std::error::Error = err;
    while let Some(source) = cause.source() {
        cause = source;
    }
    cause.to_string()
}
