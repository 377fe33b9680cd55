//! Background tile layers.

use serde::Serialize;

/// An XYZ tile layer (`L.tileLayer`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileLayer {
    /// Name shown in the layer switcher
    pub name: String,
    /// URL template with `{z}`, `{x}`, `{y}` (and optionally `{s}`) placeholders
    pub url_template: String,
    pub attribution: String,
    pub max_zoom: u8,
    /// Overlays can be stacked, base layers are mutually exclusive
    pub overlay: bool,
    /// Added to the map on load
    pub show: bool,
}

impl TileLayer {
    pub fn new(name: impl Into<String>, url_template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url_template: url_template.into(),
            attribution: String::new(),
            max_zoom: 18,
            overlay: false,
            show: true,
        }
    }

    pub fn attribution(mut self, attribution: impl Into<String>) -> Self {
        self.attribution = attribution.into();
        self
    }

    pub fn max_zoom(mut self, max_zoom: u8) -> Self {
        self.max_zoom = max_zoom;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.show = false;
        self
    }

    pub fn openstreetmap() -> Self {
        Self::new(
            "OpenStreetMap",
            "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
        )
        .attribution(
            "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors",
        )
        .max_zoom(19)
    }

    pub fn cartodb_positron() -> Self {
        Self::new(
            "CartoDB Positron",
            "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}.png",
        )
        .attribution(
            "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors &copy; <a href=\"https://carto.com/attributions\">CARTO</a>",
        )
        .max_zoom(20)
    }

    pub fn esri_world_imagery() -> Self {
        Self::new(
            "Esri WorldImagery",
            "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}",
        )
        .attribution("Tiles &copy; Esri")
        .max_zoom(18)
    }

    /// Look up a preset by its display name (case-insensitive).
    pub fn preset(name: &str) -> Option<Self> {
        Self::presets()
            .into_iter()
            .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn presets() -> Vec<Self> {
        vec![
            Self::openstreetmap(),
            Self::cartodb_positron(),
            Self::esri_world_imagery(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_lookup() {
        assert_eq!(TileLayer::preset("openstreetmap"), Some(TileLayer::openstreetmap()));
        assert_eq!(
            TileLayer::preset(" CartoDB Positron ").map(|t| t.max_zoom),
            Some(20)
        );
        assert!(TileLayer::preset("Stamen Toner").is_none());
    }

    #[test]
    fn test_presets_are_base_layers() {
        for preset in TileLayer::presets() {
            assert!(!preset.overlay, "{} should be a base layer", preset.name);
            assert!(preset.url_template.contains("{z}"));
        }
    }
}
