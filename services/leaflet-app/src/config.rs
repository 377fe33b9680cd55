//! Service configuration.
//!
//! Every option is a command line flag with an environment variable
//! fallback. `.env` files are loaded before parsing.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::Level;
use wms_common::LatLng;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MAP_CENTER: LatLng = LatLng {
    lat: 51.922408,
    lng: 4.4695292,
};
pub const DEFAULT_MAP_ZOOM: u8 = 13;
pub const DEFAULT_MAX_CAPABILITIES_BYTES: usize = 10 * 1024 * 1024;

#[derive(Parser, Debug, Clone)]
#[command(name = "leaflet-app")]
#[command(about = "Wizard service that puts WMS layers on a Leaflet map")]
pub struct AppConfig {
    /// Listen address
    #[arg(short, long, default_value = DEFAULT_LISTEN_ADDR, env = "LISTEN_ADDR")]
    pub listen: String,

    /// Log level
    #[arg(long, default_value = "info", env = "LOG_LEVEL")]
    pub log_level: String,

    /// Total timeout for a GetCapabilities request
    #[arg(long, default_value_t = 30, env = "WMS_REQUEST_TIMEOUT_SECS")]
    pub request_timeout_secs: u64,

    /// Timeout for establishing the connection to a WMS
    #[arg(long, default_value_t = 10, env = "WMS_CONNECT_TIMEOUT_SECS")]
    pub connect_timeout_secs: u64,

    /// Largest GetCapabilities response accepted, in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_CAPABILITIES_BYTES, env = "WMS_MAX_CAPABILITIES_BYTES")]
    pub max_capabilities_bytes: usize,

    /// Keep connected sessions for this many seconds (0 disables caching)
    #[arg(long, default_value_t = 0, env = "SESSION_CACHE_TTL_SECS")]
    pub session_cache_ttl_secs: u64,

    #[arg(long, default_value_t = DEFAULT_MAP_CENTER.lat, env = "MAP_CENTER_LAT")]
    pub map_center_lat: f64,

    #[arg(long, default_value_t = DEFAULT_MAP_CENTER.lng, env = "MAP_CENTER_LON")]
    pub map_center_lon: f64,

    #[arg(long, default_value_t = DEFAULT_MAP_ZOOM, env = "MAP_ZOOM")]
    pub map_zoom: u8,

    /// HTML document served by the "What's next" step instead of the bundled one
    #[arg(long, env = "WHATS_NEXT_PATH")]
    pub whats_next_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen: DEFAULT_LISTEN_ADDR.to_string(),
            log_level: "info".to_string(),
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
            max_capabilities_bytes: DEFAULT_MAX_CAPABILITIES_BYTES,
            session_cache_ttl_secs: 0,
            map_center_lat: DEFAULT_MAP_CENTER.lat,
            map_center_lon: DEFAULT_MAP_CENTER.lng,
            map_zoom: DEFAULT_MAP_ZOOM,
            whats_next_path: None,
        }
    }
}

impl AppConfig {
    pub fn map_center(&self) -> LatLng {
        LatLng::new(self.map_center_lat, self.map_center_lon)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen
            .parse()
            .with_context(|| format!("Invalid listen address: {}", self.listen))
    }

    pub fn tracing_level(&self) -> Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }

    /// Reject settings the service cannot start with.
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !self.map_center().is_valid() {
            bail!(
                "Map center ({}, {}) is outside the valid latitude/longitude range",
                self.map_center_lat,
                self.map_center_lon
            );
        }
        if self.map_zoom > 20 {
            bail!("Map zoom {} exceeds the maximum of 20", self.map_zoom);
        }
        if self.request_timeout_secs == 0 || self.connect_timeout_secs == 0 {
            bail!("WMS timeouts must be at least one second");
        }
        if self.max_capabilities_bytes == 0 {
            bail!("Capabilities size limit must be greater than zero");
        }
        if let Some(path) = &self.whats_next_path {
            if !path.is_file() {
                bail!("What's next document not found: {}", path.display());
            }
        }
        Ok(())
    }
}
