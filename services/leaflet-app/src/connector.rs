//! WMS connection attempts.
//!
//! A connection is one GetCapabilities round trip. Its result is a
//! [`ConnectOutcome`]; call sites choose whether a failure is reported to
//! the user ([`ConnectOutcome::into_session`]) or quietly ignored
//! ([`ConnectOutcome::session`]).

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, instrument, warn};
use wms_common::{WmsError, WmsResult, WmsVersion};
use wms_protocol::{base_url, capabilities_url, parse_capabilities, Url};

use crate::error::{AppError, INVALID_URL_MESSAGE, NOT_WMS_MESSAGE};
use crate::metrics::MetricsCollector;
use crate::session::WmsSession;
use crate::session_cache::SessionCache;

/// Retrieves GetCapabilities response bodies.
#[async_trait]
pub trait CapabilitiesFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> WmsResult<String>;
}

/// Fetches capabilities over HTTP(S).
pub struct HttpFetcher {
    client: Client,
    max_body_bytes: usize,
}

impl HttpFetcher {
    pub fn new(
        request_timeout: Duration,
        connect_timeout: Duration,
        max_body_bytes: usize,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .user_agent(concat!("leaflet-app/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            max_body_bytes,
        })
    }
}

#[async_trait]
impl CapabilitiesFetcher for HttpFetcher {
    #[instrument(skip_all, fields(url = %url))]
    async fn fetch(&self, url: &Url) -> WmsResult<String> {
        let transport = |e: reqwest::Error| WmsError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        };

        let too_large = || WmsError::ResponseTooLarge {
            url: url.to_string(),
            limit: self.max_body_bytes,
        };

        let mut response = self.client.get(url.clone()).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(WmsError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        if response
            .content_length()
            .is_some_and(|len| len > self.max_body_bytes as u64)
        {
            return Err(too_large());
        }

        // Content-Length may be absent or wrong, so the limit is enforced while reading
        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(transport)? {
            if body.len() + chunk.len() > self.max_body_bytes {
                return Err(too_large());
            }
            body.extend_from_slice(&chunk);
        }

        debug!(bytes = body.len(), "Fetched capabilities");
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

/// Result of a connection attempt.
#[derive(Debug)]
pub enum ConnectOutcome {
    Connected(WmsSession),
    /// Malformed URL, unreachable host or HTTP error status
    Unreachable(WmsError),
    /// A body arrived but it is not a WMS capabilities document
    NotWms(WmsError),
    /// The service answered with a ServiceExceptionReport
    Rejected(WmsError),
}

impl From<WmsResult<WmsSession>> for ConnectOutcome {
    fn from(result: WmsResult<WmsSession>) -> Self {
        match result {
            Ok(session) => ConnectOutcome::Connected(session),
            Err(e) if e.is_transport() => ConnectOutcome::Unreachable(e),
            Err(e) if e.is_document() => ConnectOutcome::NotWms(e),
            Err(e) => ConnectOutcome::Rejected(e),
        }
    }
}

impl ConnectOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectOutcome::Connected(_) => "connected",
            ConnectOutcome::Unreachable(_) => "unreachable",
            ConnectOutcome::NotWms(_) => "not_wms",
            ConnectOutcome::Rejected(_) => "rejected",
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectOutcome::Connected(_))
    }

    /// The session, with any failure discarded.
    pub fn session(self) -> Option<WmsSession> {
        match self {
            ConnectOutcome::Connected(session) => Some(session),
            _ => None,
        }
    }

    /// The session, or the error to show for the failure.
    pub fn into_session(self) -> Result<WmsSession, AppError> {
        match self {
            ConnectOutcome::Connected(session) => Ok(session),
            ConnectOutcome::Unreachable(_) => Err(AppError::user(INVALID_URL_MESSAGE)),
            ConnectOutcome::NotWms(_) => Err(AppError::user(NOT_WMS_MESSAGE)),
            ConnectOutcome::Rejected(e) => Err(AppError::Upstream(e.to_string())),
        }
    }
}

/// Opens WMS sessions from a URL and version.
pub struct WmsConnector {
    fetcher: Arc<dyn CapabilitiesFetcher>,
    cache: SessionCache,
    metrics: Arc<MetricsCollector>,
}

impl WmsConnector {
    pub fn new(
        fetcher: Arc<dyn CapabilitiesFetcher>,
        cache: SessionCache,
        metrics: Arc<MetricsCollector>,
    ) -> Self {
        Self {
            fetcher,
            cache,
            metrics,
        }
    }

    pub fn cache(&self) -> &SessionCache {
        &self.cache
    }

    /// Attempt a GetCapabilities round trip. Never retries.
    #[instrument(skip(self))]
    pub async fn connect(&self, url: &str, version: WmsVersion) -> ConnectOutcome {
        let outcome = match self.cache.get(url, version).await {
            Some(session) => ConnectOutcome::Connected(session),
            None => {
                let outcome = ConnectOutcome::from(self.open_session(url, version).await);
                if let ConnectOutcome::Connected(session) = &outcome {
                    self.cache.insert(session.clone()).await;
                }
                outcome
            }
        };

        self.metrics.record_connect(outcome.label());
        match &outcome {
            ConnectOutcome::Connected(session) => info!(
                base_url = %session.base_url,
                layers = session.capabilities.layers.len(),
                "Connected to WMS"
            ),
            ConnectOutcome::Unreachable(e)
            | ConnectOutcome::NotWms(e)
            | ConnectOutcome::Rejected(e) => warn!(
                outcome = outcome.label(),
                kind = e.kind(),
                error = %e,
                "WMS connection failed"
            ),
        }
        outcome
    }

    async fn open_session(&self, url: &str, version: WmsVersion) -> WmsResult<WmsSession> {
        let request_url = capabilities_url(url, version)?;
        let body = self.fetcher.fetch(&request_url).await?;
        let capabilities = parse_capabilities(&body)?;

        Ok(WmsSession {
            url: url.trim().to_string(),
            base_url: base_url(url)?,
            version,
            capabilities,
        })
    }
}
