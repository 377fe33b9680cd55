//! In-memory map document.

use uuid::Uuid;
use wms_common::LatLng;

use crate::{html, RenderError, TileLayer, WmsOverlay};

/// A layer on the map, in drawing order.
#[derive(Debug, Clone, PartialEq)]
pub enum MapLayer {
    Tile(TileLayer),
    Wms(WmsOverlay),
}

impl MapLayer {
    pub fn name(&self) -> &str {
        match self {
            MapLayer::Tile(t) => &t.name,
            MapLayer::Wms(w) => &w.title,
        }
    }

    pub fn is_overlay(&self) -> bool {
        match self {
            MapLayer::Tile(t) => t.overlay,
            MapLayer::Wms(w) => w.overlay,
        }
    }

    pub fn is_shown(&self) -> bool {
        match self {
            MapLayer::Tile(t) => t.show,
            MapLayer::Wms(w) => w.show,
        }
    }

    pub fn in_control(&self) -> bool {
        match self {
            MapLayer::Tile(_) => true,
            MapLayer::Wms(w) => w.control,
        }
    }
}

/// Map controls, rendered after all layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Leaflet.draw toolbar, optionally with a GeoJSON export button
    Draw { export: bool },
    /// Layer switcher listing base layers and overlays
    Layers { collapsed: bool },
}

/// A Leaflet map: center, zoom, layers and controls.
///
/// Every document gets its own element id, so documents are built per
/// request and never shared.
#[derive(Debug, Clone, PartialEq)]
pub struct MapDocument {
    id: String,
    pub location: LatLng,
    pub zoom_start: u8,
    pub layers: Vec<MapLayer>,
    pub controls: Vec<Control>,
}

impl MapDocument {
    /// A map with the OpenStreetMap base layer.
    pub fn new(location: LatLng, zoom_start: u8) -> Self {
        let mut map = Self::without_base(location, zoom_start);
        map.add_tile_layer(TileLayer::openstreetmap());
        map
    }

    /// A map without any layer.
    pub fn without_base(location: LatLng, zoom_start: u8) -> Self {
        Self {
            id: format!("map_{}", Uuid::new_v4().simple()),
            location,
            zoom_start,
            layers: Vec::new(),
            controls: Vec::new(),
        }
    }

    /// DOM id of the map container, also used to scope script names.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn add_tile_layer(&mut self, layer: TileLayer) -> &mut Self {
        self.layers.push(MapLayer::Tile(layer));
        self
    }

    pub fn add_wms_layer(&mut self, overlay: WmsOverlay) -> &mut Self {
        self.layers.push(MapLayer::Wms(overlay));
        self
    }

    pub fn add_draw_control(&mut self, export: bool) -> &mut Self {
        self.controls.push(Control::Draw { export });
        self
    }

    pub fn add_layer_control(&mut self) -> &mut Self {
        self.controls.push(Control::Layers { collapsed: true });
        self
    }

    pub fn wms_overlays(&self) -> impl Iterator<Item = &WmsOverlay> {
        self.layers.iter().filter_map(|l| match l {
            MapLayer::Wms(w) => Some(w),
            MapLayer::Tile(_) => None,
        })
    }

    pub fn has_draw_control(&self) -> bool {
        self.controls
            .iter()
            .any(|c| matches!(c, Control::Draw { .. }))
    }

    /// Serialize to a standalone HTML page.
    pub fn to_html(&self) -> Result<String, RenderError> {
        html::render_html(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotterdam() -> LatLng {
        LatLng::new(51.922408, 4.4695292)
    }

    #[test]
    fn test_new_has_openstreetmap_base() {
        let map = MapDocument::new(rotterdam(), 13);
        assert_eq!(map.layers.len(), 1);
        assert_eq!(map.layers[0].name(), "OpenStreetMap");
        assert!(!map.layers[0].is_overlay());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = MapDocument::new(rotterdam(), 13);
        let b = MapDocument::new(rotterdam(), 13);
        assert_ne!(a.id(), b.id());
        assert!(a.id().starts_with("map_"));
    }

    #[test]
    fn test_layers_keep_insertion_order() {
        let mut map = MapDocument::without_base(rotterdam(), 10);
        map.add_tile_layer(TileLayer::cartodb_positron())
            .add_wms_layer(WmsOverlay::new("https://example.com/wms", vec!["a".into()], "A"))
            .add_tile_layer(TileLayer::esri_world_imagery());

        let names: Vec<&str> = map.layers.iter().map(|l| l.name()).collect();
        assert_eq!(names, vec!["CartoDB Positron", "A", "Esri WorldImagery"]);
        assert_eq!(map.wms_overlays().count(), 1);
    }

    #[test]
    fn test_controls() {
        let mut map = MapDocument::new(rotterdam(), 13);
        assert!(!map.has_draw_control());
        map.add_draw_control(true).add_layer_control();
        assert!(map.has_draw_control());
        assert_eq!(map.controls.len(), 2);
    }
}
