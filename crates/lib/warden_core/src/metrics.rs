//! Request metrics — counters recorded per response, exposed as a snapshot.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use serde_json::{Value, json};
use thiserror::Error;

/// Metrics provider errors.
///
/// The in-process registry cannot fail; the variant exists for providers
/// that consult an external metrics backend.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("metrics backend error: {0}")]
    Backend(String),
}

/// Source of application metrics.
#[async_trait]
pub trait MetricsProvider: Send + Sync {
    /// Record one completed response by HTTP status code.
    fn record_response(&self, status: u16);

    /// Render the current totals as a JSON object.
    async fn snapshot(&self) -> Result<Value, MetricsError>;
}

/// In-process metrics registry backed by atomic counters.
#[derive(Debug, Default)]
pub struct RequestMetrics {
    requests_total: AtomicU64,
    responses_2xx: AtomicU64,
    responses_4xx: AtomicU64,
    responses_5xx: AtomicU64,
}

impl RequestMetrics {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MetricsProvider for RequestMetrics {
    fn record_response(&self, status: u16) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        match status {
            200..=299 => self.responses_2xx.fetch_add(1, Ordering::Relaxed),
            400..=499 => self.responses_4xx.fetch_add(1, Ordering::Relaxed),
            500..=599 => self.responses_5xx.fetch_add(1, Ordering::Relaxed),
            _ => 0,
        };
    }

    async fn snapshot(&self) -> Result<Value, MetricsError> {
        Ok(json!({
            "requests_total": self.requests_total.load(Ordering::Relaxed),
            "responses_2xx": self.responses_2xx.load(Ordering::Relaxed),
            "responses_4xx": self.responses_4xx.load(Ordering::Relaxed),
            "responses_5xx": self.responses_5xx.load(Ordering::Relaxed),
        }))
    }
}
