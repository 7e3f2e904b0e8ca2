use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::models::{ProbeOutcome, TargetState};

/// Current state for every target, indexed in parallel with the target
/// list. Sized once at construction; records are replaced wholesale so a
/// reader never sees a half-written status/detail pair.
pub struct StateStore {
    records: Mutex<Vec<TargetState>>,
}

impl StateStore {
    pub fn new(len: usize) -> Self {
        Self {
            records: Mutex::new(vec![TargetState::unknown(); len]),
        }
    }

    /// Replace the record at `index`. Out-of-range is a programming error
    /// and panics.
    pub async fn update(&self, index: usize, outcome: ProbeOutcome, now: DateTime<Utc>) {
        let mut records = self.records.lock().await;
        records[index] = TargetState {
            status: outcome.status,
            detail: outcome.detail,
            last_updated: Some(now),
        };
    }

    pub async fn snapshot(&self, index: usize) -> TargetState {
        self.records.lock().await[index].clone()
    }

    pub async fn snapshot_all(&self) -> Vec<TargetState> {
        self.records.lock().await.clone()
    }
}
