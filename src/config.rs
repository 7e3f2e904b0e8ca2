use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::models::Target;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MonitorConfig {
    pub names: Vec<String>,
    pub urls: Vec<String>,
    #[serde(default = "default_check_interval")]
    pub check_interval_secs: u64,
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout_secs: u64,
    #[serde(default = "default_cycle_timeout")]
    pub cycle_timeout_secs: u64,
    #[serde(default = "default_api_port")]
    pub api_port: u16,
}

fn default_check_interval() -> u64 { 3600 }
fn default_probe_timeout() -> u64 { 10 }
fn default_cycle_timeout() -> u64 { 10 }
fn default_api_port() -> u16 { 3000 }

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("names/urls length mismatch: {names} names vs {urls} urls")]
    LengthMismatch { names: usize, urls: usize },
    #[error("invalid url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl MonitorConfig {
    /// Validate the name/url lists and pair them into targets.
    /// Any failure here aborts setup; no monitor is created.
    pub fn targets(&self) -> Result<Vec<Target>, ConfigError> {
        if self.names.len() != self.urls.len() {
            return Err(ConfigError::LengthMismatch {
                names: self.names.len(),
                urls: self.urls.len(),
            });
        }

        self.names
            .iter()
            .zip(&self.urls)
            .map(|(name, url)| {
                Url::parse(url).map_err(|source| ConfigError::InvalidUrl {
                    url: url.clone(),
                    source,
                })?;
                Ok(Target {
                    name: name.clone(),
                    url: url.clone(),
                })
            })
            .collect()
    }
}
