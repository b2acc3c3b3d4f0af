use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::config::BackendSettings;
use crate::services::MetricsRegistry;

/// Timeout for health probes, deliberately shorter than scoring calls
const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Liveness probe for the AI scoring backend.
///
/// Owns its own HTTP client so a probe can never queue behind an in-flight
/// scoring call. Connectivity failures are never propagated; they only flip
/// the healthy flag in the metrics registry.
pub struct HealthMonitor {
    client: Client,
    health_url: String,
    metrics: Arc<MetricsRegistry>,
}

impl HealthMonitor {
    pub fn new(base_url: &str, metrics: Arc<MetricsRegistry>) -> Self {
        let client = Client::builder()
            .timeout(PROBE_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            health_url: format!("{}/health", base_url.trim_end_matches('/')),
            metrics,
        }
    }

    pub fn from_settings(settings: &BackendSettings, metrics: Arc<MetricsRegistry>) -> Self {
        Self::new(&settings.url, metrics)
    }

    /// Probe the backend once; any 2xx response means healthy.
    ///
    /// Updates the healthy flag and the last-health-check timestamp on
    /// every call.
    pub async fn check(&self) -> bool {
        let healthy = match self.client.get(&self.health_url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::warn!("Scoring backend health check failed: {}", e);
                false
            }
        };

        self.metrics.record_health_check(healthy);
        healthy
    }

    /// Run periodic probes on a background task
    pub fn spawn(self: Arc<Self>, interval: Duration) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                let healthy = self.check().await;
                tracing::debug!(
                    "Scoring backend health: {}",
                    if healthy { "OK" } else { "FAILED" }
                );
            }
        })
    }
}
