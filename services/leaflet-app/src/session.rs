//! Connected WMS sessions and their inspection.

use serde::Serialize;
use wms_common::WmsVersion;
use wms_protocol::WmsCapabilities;

/// A successful GetCapabilities round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct WmsSession {
    /// URL as entered by the user
    pub url: String,
    /// URL without GetCapabilities parameters, used for GetMap
    pub base_url: String,
    pub version: WmsVersion,
    pub capabilities: WmsCapabilities,
}

/// What the wizard needs to know about a service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WmsDetails {
    pub base_url: String,
    /// Layer identifiers in the order the service reports them
    pub layers: Vec<String>,
    pub title: String,
}

impl WmsSession {
    pub fn details(&self) -> WmsDetails {
        WmsDetails {
            base_url: self.base_url.clone(),
            layers: self.capabilities.layer_names(),
            title: self.capabilities.service.title.clone(),
        }
    }
}
