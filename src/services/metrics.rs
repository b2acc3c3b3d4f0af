use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Thread-safe scoring metrics.
///
/// Counters live behind a single mutex that is only ever held for the
/// duration of an increment or a snapshot read, never across an await
/// point, so scoring tasks cannot block each other or the health monitor.
/// The healthy flag is a separate atomic updated by the health monitor.
pub struct MetricsRegistry {
    counters: Mutex<Counters>,
    healthy: AtomicBool,
}

#[derive(Default)]
struct Counters {
    request_count: u64,
    cumulative_latency_ms: u64,
    error_count: u64,
    last_health_check: Option<DateTime<Utc>>,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self {
            counters: Mutex::new(Counters::default()),
            healthy: AtomicBool::new(true),
        }
    }

    /// Record a successful scoring call and its latency
    pub fn record_success(&self, latency_ms: u64) {
        let mut counters = self.lock();
        counters.request_count += 1;
        counters.cumulative_latency_ms += latency_ms;
    }

    /// Record a failed scoring call.
    ///
    /// The attempt still counts towards the request total, with zero
    /// latency contribution.
    pub fn record_error(&self) {
        let mut counters = self.lock();
        counters.request_count += 1;
        counters.error_count += 1;
    }

    /// Record a health probe outcome and stamp the check time
    pub fn record_health_check(&self, healthy: bool) {
        self.healthy.store(healthy, Ordering::Relaxed);
        self.lock().last_health_check = Some(Utc::now());
    }

    pub fn is_healthy(&self) -> bool {
        self.healthy.load(Ordering::Relaxed)
    }

    /// Read-only derived view over the counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        let counters = self.lock();

        let average_response_time_ms = if counters.request_count > 0 {
            counters.cumulative_latency_ms as f64 / counters.request_count as f64
        } else {
            0.0
        };
        let error_rate = if counters.request_count > 0 {
            counters.error_count as f64 / counters.request_count as f64
        } else {
            0.0
        };

        MetricsSnapshot {
            total_requests: counters.request_count,
            average_response_time_ms,
            error_rate,
            is_healthy: self.is_healthy(),
            last_health_check: counters.last_health_check,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Counters> {
        // A poisoned lock only means a panic mid-increment; the counters
        // are still usable.
        self.counters.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Derived metrics view returned to callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    #[serde(rename = "totalRequests")]
    pub total_requests: u64,
    #[serde(rename = "averageResponseTimeMs")]
    pub average_response_time_ms: f64,
    #[serde(rename = "errorRate")]
    pub error_rate: f64,
    #[serde(rename = "isHealthy")]
    pub is_healthy: bool,
    #[serde(rename = "lastHealthCheck")]
    pub last_health_check: Option<DateTime<Utc>>,
}
