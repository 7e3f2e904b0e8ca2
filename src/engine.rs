use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::api::MonitorView;
use crate::config::MonitorConfig;
use crate::models::{Target, TargetStatus};
use crate::prober::Prober;
use crate::state::StateStore;

pub struct Monitor {
    targets: Arc<Vec<Target>>,
    store: Arc<StateStore>,
    prober: Prober,
    check_interval: Duration,
    cycle_timeout: Duration,
}

impl Monitor {
    pub fn new(config: &MonitorConfig) -> Result<Self> {
        let targets = config.targets()?;
        let store = Arc::new(StateStore::new(targets.len()));
        let prober = Prober::new(Duration::from_secs(config.probe_timeout_secs))?;

        Ok(Self {
            targets: Arc::new(targets),
            store,
            prober,
            check_interval: Duration::from_secs(config.check_interval_secs),
            cycle_timeout: Duration::from_secs(config.cycle_timeout_secs),
        })
    }

    /// Read-only handle for presentation layers.
    pub fn view(&self) -> MonitorView {
        MonitorView::new(Arc::clone(&self.targets), Arc::clone(&self.store))
    }

    /// One persistent loop for the lifetime of the process: the first cycle
    /// runs immediately, then the interval is measured from the end of each
    /// cycle, so cycles never overlap or stack.
    pub async fn run(self: Arc<Self>) -> Result<()> {
        info!(
            "URL monitor active: {} targets, interval {}s, cycle timeout {}s",
            self.targets.len(),
            self.check_interval.as_secs(),
            self.cycle_timeout.as_secs()
        );

        loop {
            let started = Instant::now();
            if self.run_cycle().await {
                info!(
                    "Cycle completed {} checks in {:.2}s",
                    self.targets.len(),
                    started.elapsed().as_secs_f64()
                );
            } else {
                warn!(
                    "Cycle deadline ({}s) hit; unchecked targets keep their previous state",
                    self.cycle_timeout.as_secs()
                );
            }

            tokio::time::sleep(self.check_interval).await;
        }
    }

    /// Probe every target once, in index order, under the cycle deadline.
    /// Returns false if the deadline cut the cycle short; targets not
    /// reached keep their previous records until the next cycle.
    pub async fn run_cycle(&self) -> bool {
        tokio::time::timeout(self.cycle_timeout, self.check_all())
            .await
            .is_ok()
    }

    async fn check_all(&self) {
        for (index, target) in self.targets.iter().enumerate() {
            let outcome = self.prober.probe(&target.url).await;
            if outcome.status != TargetStatus::Online {
                warn!("{} ({}) offline: {}", target.name, target.url, outcome.detail);
            }
            self.store.update(index, outcome, Utc::now()).await;
        }
    }
}
