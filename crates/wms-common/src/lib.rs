//! Common types shared across the leaflet-wms workspace.

pub mod error;
pub mod format;
pub mod geo;
pub mod version;

pub use error::{WmsError, WmsResult};
pub use format::ImageFormat;
pub use geo::LatLng;
pub use version::WmsVersion;
