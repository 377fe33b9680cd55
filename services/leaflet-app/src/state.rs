//! Application state shared across handlers.

use std::sync::Arc;

use anyhow::Result;
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::info;

use crate::config::AppConfig;
use crate::connector::{CapabilitiesFetcher, HttpFetcher, WmsConnector};
use crate::metrics::MetricsCollector;
use crate::session_cache::SessionCache;

/// Shared application state.
pub struct AppState {
    pub config: AppConfig,
    pub connector: WmsConnector,
    pub metrics: Arc<MetricsCollector>,
    /// Set when a Prometheus recorder is installed
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    /// State backed by a real HTTP client.
    pub fn new(config: AppConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(
            config.request_timeout(),
            config.connect_timeout(),
            config.max_capabilities_bytes,
        )?;
        Ok(Self::with_fetcher(config, Arc::new(fetcher)))
    }

    /// State with a custom capabilities source.
    pub fn with_fetcher(config: AppConfig, fetcher: Arc<dyn CapabilitiesFetcher>) -> Self {
        let metrics = Arc::new(MetricsCollector::new());
        let cache = SessionCache::new(config.session_cache_ttl_secs);
        info!(
            session_cache_ttl_secs = cache.ttl_secs(),
            enabled = cache.is_enabled(),
            "Session cache configured"
        );
        let connector = WmsConnector::new(fetcher, cache, metrics.clone());

        Self {
            config,
            connector,
            metrics,
            prometheus: None,
        }
    }

    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }
}
