//! End-to-end rendering of map documents.

use map_renderer::{render_html, MapDocument, TileLayer, WmsOverlay};
use test_utils::{assert_occurrences, fixtures};
use wms_common::{ImageFormat, LatLng, WmsVersion};

fn rotterdam() -> LatLng {
    LatLng::new(51.922408, 4.4695292)
}

fn hiking_overlay(layers: &[&str]) -> WmsOverlay {
    WmsOverlay::new(
        "https://service.pdok.nl/wandelnet/regionale-wandelnetwerken/wms/v1_0",
        layers.iter().map(|l| l.to_string()).collect(),
        fixtures::HIKING_TITLE,
    )
    .format(ImageFormat::Png)
    .version(WmsVersion::V1_3_0)
}

// ============================================================================
// Document structure
// ============================================================================

#[test]
fn test_introduction_map() {
    let mut doc = MapDocument::new(rotterdam(), 13);
    doc.add_draw_control(true).add_layer_control();
    let html = doc.to_html().unwrap();

    assert!(html.contains("center: [51.922408,4.4695292]"));
    assert!(html.contains("zoom: 13"));
    assert!(html.contains("leaflet.draw.js"));
    assert!(html.contains("new L.Control.Draw("));
    assert!(html.contains(&format!("id=\"export_{}\"", doc.id())));
    assert_occurrences!(html, "L.control.layers(", 1);
}

#[test]
fn test_map_id_used_for_container_and_script() {
    let doc = MapDocument::new(rotterdam(), 13);
    let html = render_html(&doc).unwrap();
    assert!(html.contains(&format!("<div class=\"leaflet-map\" id=\"{}\"></div>", doc.id())));
    assert!(html.contains(&format!("L.map(\"{}\"", doc.id())));
}

#[test]
fn test_output_is_complete_for_any_layer_count() {
    for count in 0..=fixtures::HIKING_LAYERS.len() {
        let mut doc = MapDocument::new(rotterdam(), 13);
        if count > 0 {
            doc.add_wms_layer(hiking_overlay(&fixtures::HIKING_LAYERS[..count]));
        }
        doc.add_layer_control();
        let html = render_html(&doc).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"), "layers={}", count);
        assert!(html.trim_end().ends_with("</html>"), "layers={}", count);
        assert_occurrences!(html, "<script>", 1);
        assert_occurrences!(html, "</body>", 1);
    }
}

// ============================================================================
// WMS overlay
// ============================================================================

#[test]
fn test_all_layers_render_one_wms_overlay() {
    let mut doc = MapDocument::new(rotterdam(), 13);
    doc.add_wms_layer(hiking_overlay(&fixtures::HIKING_LAYERS))
        .add_layer_control();
    let html = render_html(&doc).unwrap();

    assert_occurrences!(html, "L.tileLayer.wms(", 1);
    assert!(html.contains("\"transparent\":true"));
    assert!(html.contains("\"version\":\"1.3.0\""));
    assert!(html.contains("\"layers\":\"wandelknooppunten,wandelnetwerken,wandelroutes\""));
    assert!(html.contains("\"format\":\"image/png\""));
    assert!(html.contains("wms_layer_1.addTo(map);"));
}

#[test]
fn test_hostile_title_stays_inside_script() {
    let mut overlay = hiking_overlay(&["a"]);
    overlay.title = "</script><script>alert('x')</script>".to_string();
    let mut doc = MapDocument::new(rotterdam(), 13);
    doc.add_wms_layer(overlay).add_layer_control();
    let html = render_html(&doc).unwrap();

    // leaflet.js include and the map script, nothing from the title
    assert_occurrences!(html, "</script>", 2);
    assert!(html.contains("<\\/script>"));
}

#[test]
fn test_extra_background_layers() {
    let mut doc = MapDocument::new(rotterdam(), 13);
    doc.add_tile_layer(TileLayer::cartodb_positron().hidden())
        .add_tile_layer(TileLayer::esri_world_imagery().hidden())
        .add_layer_control();
    let html = render_html(&doc).unwrap();

    assert_occurrences!(html, "L.tileLayer(", 3);
    assert_occurrences!(html, ".addTo(map);", 2);
    assert!(html.contains("\"Esri WorldImagery\": tile_layer_2"));
}
