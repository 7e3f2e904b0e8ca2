use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use crate::models::{Target, TargetStatus};
use crate::state::StateStore;

/// Read-only projection over targets + state store, handed to whatever
/// layer presents the monitor. No mutation surface.
#[derive(Clone)]
pub struct MonitorView {
    targets: Arc<Vec<Target>>,
    store: Arc<StateStore>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TargetAttributes {
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Last Updated")]
    pub last_updated: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TargetReport {
    pub name: String,
    pub state: TargetStatus,
    pub icon: String,
    pub attributes: TargetAttributes,
}

impl MonitorView {
    pub fn new(targets: Arc<Vec<Target>>, store: Arc<StateStore>) -> Self {
        Self { targets, store }
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn display_name(&self, index: usize) -> String {
        self.targets[index].name.clone()
    }

    pub async fn is_online(&self, index: usize) -> bool {
        self.store.snapshot(index).await.status == TargetStatus::Online
    }

    pub async fn attributes(&self, index: usize) -> TargetAttributes {
        let state = self.store.snapshot(index).await;
        TargetAttributes {
            url: self.targets[index].url.clone(),
            status: state.detail,
            last_updated: state
                .last_updated
                .map(|t| t.to_rfc3339())
                .unwrap_or_else(|| "never".into()),
        }
    }

    /// One report per target, in configured order.
    pub async fn report(&self) -> Vec<TargetReport> {
        let states = self.store.snapshot_all().await;
        self.targets
            .iter()
            .zip(states)
            .map(|(target, state)| TargetReport {
                name: target.name.clone(),
                state: state.status,
                icon: if state.status == TargetStatus::Online {
                    "mdi:link".into()
                } else {
                    "mdi:link-off".into()
                },
                attributes: TargetAttributes {
                    url: target.url.clone(),
                    status: state.detail,
                    last_updated: state
                        .last_updated
                        .map(|t| t.to_rfc3339())
                        .unwrap_or_else(|| "never".into()),
                },
            })
            .collect()
    }
}

pub async fn get_status(State(view): State<MonitorView>) -> Json<Vec<TargetReport>> {
    Json(view.report().await)
}

pub fn create_router(view: MonitorView) -> Router {
    Router::new()
        .route("/api/status", get(get_status))
        .with_state(view)
}

pub async fn start_server(port: u16, view: MonitorView) {
    let app = create_router(view);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Status API: http://localhost:{}/api/status", addr.port());
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind API port");
    axum::serve(listener, app).await.unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProbeOutcome;
    use chrono::Utc;

    fn view_for(targets: Vec<Target>) -> (MonitorView, Arc<StateStore>) {
        let store = Arc::new(StateStore::new(targets.len()));
        let view = MonitorView::new(Arc::new(targets), Arc::clone(&store));
        (view, store)
    }

    #[tokio::test]
    async fn unchecked_target_reports_never() {
        let (view, _store) = view_for(vec![Target {
            name: "A".into(),
            url: "https://a.example.com".into(),
        }]);

        assert_eq!(view.display_name(0), "A");
        assert!(!view.is_online(0).await);

        let attrs = view.attributes(0).await;
        assert_eq!(attrs.url, "https://a.example.com");
        assert_eq!(attrs.status, "");
        assert_eq!(attrs.last_updated, "never");
    }

    #[tokio::test]
    async fn report_reflects_store_updates() {
        let (view, store) = view_for(vec![
            Target {
                name: "A".into(),
                url: "https://a.example.com".into(),
            },
            Target {
                name: "B".into(),
                url: "https://b.example.com".into(),
            },
        ]);

        store.update(0, ProbeOutcome::online(), Utc::now()).await;
        store
            .update(1, ProbeOutcome::offline("HTTP 500"), Utc::now())
            .await;

        let reports = view.report().await;
        assert_eq!(reports.len(), 2);

        assert_eq!(reports[0].name, "A");
        assert_eq!(reports[0].state, TargetStatus::Online);
        assert_eq!(reports[0].icon, "mdi:link");
        assert_eq!(reports[0].attributes.status, "OK");
        assert_ne!(reports[0].attributes.last_updated, "never");

        assert_eq!(reports[1].name, "B");
        assert_eq!(reports[1].state, TargetStatus::Offline);
        assert_eq!(reports[1].icon, "mdi:link-off");
        assert_eq!(reports[1].attributes.status, "HTTP 500");

        assert!(view.is_online(0).await);
        assert!(!view.is_online(1).await);
    }

    #[tokio::test]
    async fn status_endpoint_serializes_reports() {
        let (view, store) = view_for(vec![Target {
            name: "A".into(),
            url: "https://a.example.com".into(),
        }]);
        store.update(0, ProbeOutcome::online(), Utc::now()).await;

        let Json(reports) = get_status(State(view)).await;
        let body = serde_json::to_value(&reports).unwrap();

        assert_eq!(body[0]["state"], "Online");
        assert_eq!(body[0]["attributes"]["URL"], "https://a.example.com");
        assert_eq!(body[0]["attributes"]["Status"], "OK");
    }
}
