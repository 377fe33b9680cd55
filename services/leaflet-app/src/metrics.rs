//! Application metrics collection and reporting.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use metrics::counter;
use serde::Serialize;

/// Metrics collector for the wizard service.
///
/// Counters are mirrored into the `metrics` facade, so they show up on
/// `/metrics` when a Prometheus recorder is installed.
#[derive(Debug)]
pub struct MetricsCollector {
    /// Connection outcomes
    pub connects_ok: AtomicU64,
    pub connects_unreachable: AtomicU64,
    pub connects_not_wms: AtomicU64,
    pub connects_rejected: AtomicU64,

    /// Rendered map documents
    pub maps_rendered: AtomicU64,

    /// Wizard transitions
    pub transitions_ok: AtomicU64,
    pub transitions_blocked: AtomicU64,

    start_time: Instant,
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub connects_ok: u64,
    pub connects_unreachable: u64,
    pub connects_not_wms: u64,
    pub connects_rejected: u64,
    pub maps_rendered: u64,
    pub transitions_ok: u64,
    pub transitions_blocked: u64,
    pub uptime_secs: u64,
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self {
            connects_ok: AtomicU64::new(0),
            connects_unreachable: AtomicU64::new(0),
            connects_not_wms: AtomicU64::new(0),
            connects_rejected: AtomicU64::new(0),
            maps_rendered: AtomicU64::new(0),
            transitions_ok: AtomicU64::new(0),
            transitions_blocked: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Record a connection attempt by its outcome label.
    pub fn record_connect(&self, outcome: &'static str) {
        let slot = match outcome {
            "connected" => &self.connects_ok,
            "unreachable" => &self.connects_unreachable,
            "not_wms" => &self.connects_not_wms,
            _ => &self.connects_rejected,
        };
        slot.fetch_add(1, Ordering::Relaxed);
        counter!("wms_connect_total", "outcome" => outcome).increment(1);
    }

    /// Record a rendered map document
    pub fn record_render(&self, view: &'static str) {
        self.maps_rendered.fetch_add(1, Ordering::Relaxed);
        counter!("map_render_total", "view" => view).increment(1);
    }

    /// Record a wizard transition attempt
    pub fn record_transition(&self, from: &'static str, allowed: bool) {
        let (slot, result) = if allowed {
            (&self.transitions_ok, "ok")
        } else {
            (&self.transitions_blocked, "blocked")
        };
        slot.fetch_add(1, Ordering::Relaxed);
        counter!("wizard_transition_total", "from" => from, "result" => result).increment(1);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            connects_ok: self.connects_ok.load(Ordering::Relaxed),
            connects_unreachable: self.connects_unreachable.load(Ordering::Relaxed),
            connects_not_wms: self.connects_not_wms.load(Ordering::Relaxed),
            connects_rejected: self.connects_rejected.load(Ordering::Relaxed),
            maps_rendered: self.maps_rendered.load(Ordering::Relaxed),
            transitions_ok: self.transitions_ok.load(Ordering::Relaxed),
            transitions_blocked: self.transitions_blocked.load(Ordering::Relaxed),
            uptime_secs: self.start_time.elapsed().as_secs(),
        }
    }
}
