use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reachability of a single monitored URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetStatus {
    Unknown,
    Online,
    Offline,
}

/// One configured (name, URL) pair. Fixed at startup, never resized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub name: String,
    pub url: String,
}

/// Current observable state for one target. `last_updated` stays `None`
/// until the first completed check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetState {
    pub status: TargetStatus,
    pub detail: String,
    pub last_updated: Option<DateTime<Utc>>,
}

impl TargetState {
    pub fn unknown() -> Self {
        Self {
            status: TargetStatus::Unknown,
            detail: String::new(),
            last_updated: None,
        }
    }
}

/// Terminal classification of one probe attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub status: TargetStatus,
    pub detail: String,
}

impl ProbeOutcome {
    pub fn online() -> Self {
        Self {
            status: TargetStatus::Online,
            detail: "OK".into(),
        }
    }

    pub fn offline(detail: impl Into<String>) -> Self {
        Self {
            status: TargetStatus::Offline,
            detail: detail.into(),
        }
    }
}
