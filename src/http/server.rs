//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request ID)
//! - Spawn the periodic driver next to the listener
//! - Serve until the shutdown signal, then drain

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::MonitorConfig;
use crate::health::{Checker, PeriodicDriver};
use crate::http::handlers::{get_check, get_root};
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub checker: Arc<Checker>,
}

/// HTTP server for the query interface.
pub struct HttpServer {
    router: Router,
    config: MonitorConfig,
    checker: Arc<Checker>,
}

impl HttpServer {
    pub fn new(config: MonitorConfig, checker: Arc<Checker>) -> Self {
        let state = AppState {
            checker: checker.clone(),
        };
        let router = Self::build_router(state);
        Self {
            router,
            config,
            checker,
        }
    }

    /// Build the Axum router with all middleware layers.
    pub fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", get(get_root))
            .route("/check", get(get_check))
            .route("/check/", get(get_check))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(set_request_id_layer())
                    .layer(TraceLayer::new_for_http())
                    .layer(propagate_request_id_layer()),
            )
    }

    /// Run the server, accepting connections on the given listener, until
    /// `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            groups = self.checker.registry().len(),
            "HTTP server starting"
        );

        let periodic = if self.config.schedule.enabled {
            let driver = PeriodicDriver::new(
                self.checker.clone(),
                Duration::from_secs(self.config.schedule.interval_secs),
            );
            Some(tokio::spawn(driver.run(shutdown.resubscribe())))
        } else {
            tracing::info!("Periodic checks disabled");
            None
        };

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        if let Some(periodic) = periodic {
            if let Err(e) = periodic.await {
                tracing::error!(error = %e, "Periodic driver task failed");
            }
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::checker::testing::{RecordingNotifier, ScriptedProbe};
    use crate::health::FailureTracker;
    use crate::probe::{ProbeError, ProbeOutcome};
    use crate::registry::Registry;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn router(probe: Arc<ScriptedProbe>) -> Router {
        let checker = Checker::new(
            Arc::new(Registry::from_groups([
                ("g1", vec!["http://a", "http://b"]),
                ("g2", vec!["http://c"]),
            ])),
            Arc::new(FailureTracker::default()),
            probe,
            Arc::new(RecordingNotifier::default()),
        );
        HttpServer::build_router(AppState {
            checker: Arc::new(checker),
        })
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        assert!(response.headers().contains_key(crate::http::X_REQUEST_ID));
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn root_reports_readiness() {
        let (status, body) = get_json(router(Arc::default()), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Service status checker"}));
    }

    #[tokio::test]
    async fn check_without_parameter_covers_all_groups() {
        let probe = Arc::new(ScriptedProbe::default());
        probe.push("http://b", [ProbeOutcome::Unreachable(ProbeError::Connect)]);

        let (status, body) = get_json(router(probe), "/check/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "g1": [
                    {"url": "http://a", "status": "UP"},
                    {"url": "http://b", "status": "DOWN", "error": "Unable to connect"},
                ],
                "g2": [{"url": "http://c", "status": "UP"}],
            })
        );
    }

    #[tokio::test]
    async fn check_omits_unknown_groups() {
        let probe = Arc::new(ScriptedProbe::default());
        let (status, body) = get_json(router(probe.clone()), "/check/?vps=g1&vps=ghost").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_object().unwrap().keys().collect::<Vec<_>>(), ["g1"]);
        assert_eq!(probe.calls(), ["http://a", "http://b"]);

        let (status, body) = get_json(router(Arc::default()), "/check?vps=ghost").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({}));
    }
}
