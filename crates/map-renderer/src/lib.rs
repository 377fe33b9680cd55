//! Leaflet map documents.
//!
//! A [`MapDocument`] is an ordered list of layers plus map controls. It is
//! serialized into a self-contained HTML page that loads Leaflet from a CDN:
//! - Background tile layers (OpenStreetMap and friends)
//! - WMS overlays (`L.tileLayer.wms`)
//! - Draw toolbar with GeoJSON export
//! - Layer switcher

pub mod html;
pub mod map;
pub mod tiles;
pub mod wms;

pub use html::{render_html, RenderError};
pub use map::{Control, MapDocument, MapLayer};
pub use tiles::TileLayer;
pub use wms::WmsOverlay;
