//! WMS session caching.
//!
//! Every view reconnects to the WMS by default, which costs one
//! GetCapabilities round trip per callback. With a TTL above zero, connected
//! sessions are kept for that long and reused by later callbacks for the
//! same URL and version. Failed connections are never cached.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::{debug, info};
use wms_common::WmsVersion;

use crate::session::WmsSession;

/// Cached session with connection timestamp.
struct CachedSession {
    session: WmsSession,
    connected_at: Instant,
}

type CacheKey = (String, WmsVersion);

/// TTL cache of connected sessions keyed by URL and version.
pub struct SessionCache {
    entries: RwLock<HashMap<CacheKey, CachedSession>>,
    ttl: Duration,
}

impl SessionCache {
    /// Create a new session cache with the specified TTL in seconds.
    /// A TTL of 0 disables caching.
    pub fn new(ttl_secs: u64) -> Self {
        if ttl_secs > 0 {
            info!(ttl_secs = ttl_secs, "Initializing WMS session cache");
        }
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl: Duration::from_secs(ttl_secs),
        }
    }

    pub fn disabled() -> Self {
        Self::new(0)
    }

    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    fn key(url: &str, version: WmsVersion) -> CacheKey {
        (url.trim().to_string(), version)
    }

    /// Get a cached session if still valid.
    pub async fn get(&self, url: &str, version: WmsVersion) -> Option<WmsSession> {
        if !self.is_enabled() {
            return None;
        }
        let guard = self.entries.read().await;
        if let Some(cached) = guard.get(&Self::key(url, version)) {
            if cached.connected_at.elapsed() < self.ttl {
                debug!(url = %url, version = %version, "WMS session cache hit");
                return Some(cached.session.clone());
            }
            debug!(url = %url, version = %version, "WMS session cache expired");
        }
        None
    }

    /// Store a connected session.
    pub async fn insert(&self, session: WmsSession) {
        if !self.is_enabled() {
            return;
        }
        let key = Self::key(&session.url, session.version);
        let mut guard = self.entries.write().await;
        guard.retain(|_, cached| cached.connected_at.elapsed() < self.ttl);
        guard.insert(
            key,
            CachedSession {
                session,
                connected_at: Instant::now(),
            },
        );
        debug!(entries = guard.len(), "WMS session cached");
    }

    /// Drop all cached sessions.
    pub async fn invalidate(&self) {
        self.entries.write().await.clear();
        debug!("WMS session cache invalidated");
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Get the configured TTL.
    pub fn ttl_secs(&self) -> u64 {
        self.ttl.as_secs()
    }
}
