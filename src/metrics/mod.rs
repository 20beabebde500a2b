//! Process-wide counters for provider requests and dispatch outcomes.
//!
//! A [`Metrics`] handle is cheap to clone; every clone feeds the same counters.
//! The summary is logged once at shutdown.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Default)]
struct Counters {
    http_requests: AtomicU64,
    http_errors: AtomicU64,
    http_duration_ms: AtomicU64,
    emails_sent: AtomicU64,
    dispatches_rejected: AtomicU64,
}

/// Shared handle on the dispatch counters.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    counters: Arc<Counters>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start timing one provider request.
    pub fn time_request(&self) -> RequestTimer {
        RequestTimer {
            start: Instant::now(),
            metrics: self.clone(),
        }
    }

    /// Record an email accepted by the provider.
    pub fn record_email_sent(&self) {
        self.counters.emails_sent.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a dispatch refused for configuration or validation reasons.
    pub fn record_dispatch_rejected(&self) {
        self.counters
            .dispatches_rejected
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Requests that reached the transport, successful or not.
    pub fn http_requests_total(&self) -> u64 {
        self.counters.http_requests.load(Ordering::Relaxed)
    }

    /// Requests that ended in a transport failure or a non-2xx answer.
    pub fn http_errors_total(&self) -> u64 {
        self.counters.http_errors.load(Ordering::Relaxed)
    }

    pub fn emails_sent_total(&self) -> u64 {
        self.counters.emails_sent.load(Ordering::Relaxed)
    }

    pub fn dispatches_rejected_total(&self) -> u64 {
        self.counters.dispatches_rejected.load(Ordering::Relaxed)
    }

    pub fn summary(&self) -> MetricsSummary {
        let requests = self.http_requests_total();
        let duration_ms = self.counters.http_duration_ms.load(Ordering::Relaxed);

        MetricsSummary {
            http_requests_total: requests,
            http_errors_total: self.http_errors_total(),
            http_duration_avg_ms: if requests == 0 {
                0.0
            } else {
                duration_ms as f64 / requests as f64
            },
            emails_sent_total: self.emails_sent_total(),
            dispatches_rejected_total: self.dispatches_rejected_total(),
        }
    }

    fn record_request(&self, started: Instant, failed: bool) {
        let counters = &self.counters;
        counters.http_requests.fetch_add(1, Ordering::Relaxed);
        counters
            .http_duration_ms
            .fetch_add(started.elapsed().as_millis() as u64, Ordering::Relaxed);
        if failed {
            counters.http_errors.fetch_add(1, Ordering::Relaxed);
        }
    }
}

/// A snapshot of the counters.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub http_duration_avg_ms: f64,
    pub emails_sent_total: u64,
    pub dispatches_rejected_total: u64,
}

impl fmt::Display for MetricsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "requests={}, errors={}, avg_ms={:.1}, sent={}, rejected={}",
            self.http_requests_total,
            self.http_errors_total,
            self.http_duration_avg_ms,
            self.emails_sent_total,
            self.dispatches_rejected_total
        )
    }
}

/// Times one request. Consumed by [`RequestTimer::finish`], so each request is
/// counted once, after its outcome is known.
#[must_use]
pub struct RequestTimer {
    start: Instant,
    metrics: Metrics,
}

impl RequestTimer {
    pub fn finish(self, succeeded: bool) {
        self.metrics.record_request(self.start, !succeeded);
    }
}
