//! WMS overlays (`L.tileLayer.wms`).

use serde::Serialize;
use serde_json::{json, Value};
use wms_common::{ImageFormat, WmsVersion};

/// A WMS layer rendered by the browser through GetMap requests.
///
/// Defaults match what the wizard needs: transparent, shown on load, listed
/// as an overlay in the layer switcher.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WmsOverlay {
    /// Service URL without GetCapabilities parameters
    pub base_url: String,
    /// Layer identifiers, drawn bottom to top
    pub layers: Vec<String>,
    pub format: ImageFormat,
    /// Name shown in the layer switcher
    pub title: String,
    pub version: WmsVersion,
    pub transparent: bool,
    pub show: bool,
    pub overlay: bool,
    /// Listed in the layer switcher
    pub control: bool,
    pub attribution: String,
}

impl WmsOverlay {
    pub fn new(base_url: impl Into<String>, layers: Vec<String>, title: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            layers,
            format: ImageFormat::default(),
            title: title.into(),
            version: WmsVersion::default(),
            transparent: true,
            show: true,
            overlay: true,
            control: true,
            attribution: String::new(),
        }
    }

    pub fn format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }

    pub fn version(mut self, version: WmsVersion) -> Self {
        self.version = version;
        self
    }

    /// Comma-separated LAYERS parameter.
    pub fn layers_param(&self) -> String {
        self.layers.join(",")
    }

    /// Options object passed to `L.tileLayer.wms`.
    pub fn leaflet_options(&self) -> Value {
        json!({
            "layers": self.layers_param(),
            "styles": "",
            "format": self.format.to_mime(),
            "transparent": self.transparent,
            "version": self.version.as_str(),
            "attribution": self.attribution,
        })
    }
}
