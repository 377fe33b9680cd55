//! Leaflet HTML serialization.
//!
//! The page is written into an in-memory byte buffer and decoded as UTF-8 at
//! the end. Every value that ends up inside `<script>` goes through
//! [`js_literal`], so user-supplied URLs and titles cannot break out of the
//! script block.

use std::io::Write;
use std::string::FromUtf8Error;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::map::{Control, MapDocument, MapLayer};

pub const LEAFLET_VERSION: &str = "1.9.3";
pub const LEAFLET_DRAW_VERSION: &str = "1.0.2";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to write map document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Map document is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),

    #[error("Failed to encode script value: {0}")]
    Json(#[from] serde_json::Error),
}

/// Encode a value as a JavaScript literal that is safe inside `<script>`.
pub fn js_literal<T: Serialize + ?Sized>(value: &T) -> Result<String, RenderError> {
    Ok(serde_json::to_string(value)?
        .replace("</", "<\\/")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029"))
}

/// Render a map document to a standalone HTML page.
pub fn render_html(doc: &MapDocument) -> Result<String, RenderError> {
    let mut buf: Vec<u8> = Vec::with_capacity(4096);
    write_document(&mut buf, doc)?;
    debug!(map_id = %doc.id(), bytes = buf.len(), layers = doc.layers.len(), "Rendered map document");
    Ok(String::from_utf8(buf)?)
}

fn write_document<W: Write>(out: &mut W, doc: &MapDocument) -> Result<(), RenderError> {
    let id = doc.id();
    let draw_export = doc
        .controls
        .iter()
        .any(|c| matches!(c, Control::Draw { export: true }));

    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "    <meta http-equiv=\"content-type\" content=\"text/html; charset=UTF-8\" />")?;
    writeln!(out, "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=no\" />")?;
    writeln!(
        out,
        "    <link rel=\"stylesheet\" href=\"https://cdn.jsdelivr.net/npm/leaflet@{v}/dist/leaflet.css\"/>",
        v = LEAFLET_VERSION
    )?;
    writeln!(
        out,
        "    <script src=\"https://cdn.jsdelivr.net/npm/leaflet@{v}/dist/leaflet.js\"></script>",
        v = LEAFLET_VERSION
    )?;
    if doc.has_draw_control() {
        writeln!(
            out,
            "    <link rel=\"stylesheet\" href=\"https://cdn.jsdelivr.net/npm/leaflet-draw@{v}/dist/leaflet.draw.css\"/>",
            v = LEAFLET_DRAW_VERSION
        )?;
        writeln!(
            out,
            "    <script src=\"https://cdn.jsdelivr.net/npm/leaflet-draw@{v}/dist/leaflet.draw.js\"></script>",
            v = LEAFLET_DRAW_VERSION
        )?;
    }
    writeln!(out, "    <style>")?;
    writeln!(out, "        html, body {{ width: 100%; height: 100%; margin: 0; padding: 0; }}")?;
    writeln!(out, "        #{id} {{ position: relative; width: 100%; height: 100%; left: 0; top: 0; }}")?;
    if draw_export {
        writeln!(
            out,
            "        #export_{id} {{ position: absolute; top: 90px; right: 10px; z-index: 999; background: white; color: black; padding: 6px; border-radius: 4px; font-family: Helvetica, Arial, sans-serif; font-size: 12px; text-decoration: none; }}"
        )?;
    }
    writeln!(out, "    </style>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "    <div class=\"leaflet-map\" id=\"{id}\"></div>")?;
    if draw_export {
        writeln!(out, "    <a href=\"#\" id=\"export_{id}\">Export</a>")?;
    }
    writeln!(out, "<script>")?;
    writeln!(out, "(function () {{")?;
    write_map(out, doc)?;
    let vars = write_layers(out, doc)?;
    for control in &doc.controls {
        match *control {
            Control::Draw { export } => write_draw_control(out, doc, export)?,
            Control::Layers { collapsed } => write_layer_control(out, doc, &vars, collapsed)?,
        }
    }
    writeln!(out, "}})();")?;
    writeln!(out, "</script>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;
    Ok(())
}

fn write_map<W: Write>(out: &mut W, doc: &MapDocument) -> Result<(), RenderError> {
    writeln!(
        out,
        "    var map = L.map({id}, {{ center: {center}, zoom: {zoom}, crs: L.CRS.EPSG3857, zoomControl: true, preferCanvas: false }});",
        id = js_literal(doc.id())?,
        center = js_literal(&doc.location.to_array())?,
        zoom = doc.zoom_start,
    )?;
    Ok(())
}

/// Writes one variable per layer and returns the variable names, index-aligned
/// with `doc.layers`.
fn write_layers<W: Write>(out: &mut W, doc: &MapDocument) -> Result<Vec<String>, RenderError> {
    let mut vars = Vec::with_capacity(doc.layers.len());

    for (index, layer) in doc.layers.iter().enumerate() {
        let var = match layer {
            MapLayer::Tile(tile) => {
                let var = format!("tile_layer_{}", index);
                let options = serde_json::json!({
                    "attribution": tile.attribution,
                    "maxZoom": tile.max_zoom,
                    "minZoom": 0,
                    "noWrap": false,
                    "opacity": 1,
                    "subdomains": "abc",
                    "tms": false,
                });
                writeln!(
                    out,
                    "    var {var} = L.tileLayer({url}, {options});",
                    url = js_literal(&tile.url_template)?,
                    options = js_literal(&options)?,
                )?;
                var
            }
            MapLayer::Wms(wms) => {
                let var = format!("wms_layer_{}", index);
                writeln!(
                    out,
                    "    var {var} = L.tileLayer.wms({url}, {options});",
                    url = js_literal(&wms.base_url)?,
                    options = js_literal(&wms.leaflet_options())?,
                )?;
                var
            }
        };
        if layer.is_shown() {
            writeln!(out, "    {var}.addTo(map);")?;
        }
        vars.push(var);
    }

    Ok(vars)
}

fn write_layer_control<W: Write>(
    out: &mut W,
    doc: &MapDocument,
    vars: &[String],
    collapsed: bool,
) -> Result<(), RenderError> {
    let mut base = Vec::new();
    let mut overlays = Vec::new();
    for (layer, var) in doc.layers.iter().zip(vars) {
        if !layer.in_control() {
            continue;
        }
        let entry = format!("{}: {}", js_literal(layer.name())?, var);
        if layer.is_overlay() {
            overlays.push(entry);
        } else {
            base.push(entry);
        }
    }

    writeln!(
        out,
        "    L.control.layers({{ {base} }}, {{ {overlays} }}, {{ collapsed: {collapsed}, position: \"topright\", autoZIndex: true }}).addTo(map);",
        base = base.join(", "),
        overlays = overlays.join(", "),
    )?;
    Ok(())
}

fn write_draw_control<W: Write>(
    out: &mut W,
    doc: &MapDocument,
    export: bool,
) -> Result<(), RenderError> {
    writeln!(out, "    var drawnItems = new L.FeatureGroup();")?;
    writeln!(out, "    map.addLayer(drawnItems);")?;
    writeln!(
        out,
        "    map.addControl(new L.Control.Draw({{ position: \"topleft\", edit: {{ featureGroup: drawnItems }} }}));"
    )?;
    writeln!(out, "    map.on(L.Draw.Event.CREATED, function (e) {{")?;
    writeln!(out, "        drawnItems.addLayer(e.layer);")?;
    writeln!(out, "    }});")?;
    if export {
        writeln!(
            out,
            "    document.getElementById({id}).onclick = function () {{",
            id = js_literal(&format!("export_{}", doc.id()))?,
        )?;
        writeln!(out, "        var data = JSON.stringify(drawnItems.toGeoJSON());")?;
        writeln!(
            out,
            "        this.setAttribute(\"href\", \"data:text/json;charset=utf-8,\" + encodeURIComponent(data));"
        )?;
        writeln!(out, "        this.setAttribute(\"download\", \"data.geojson\");")?;
        writeln!(out, "    }};")?;
    }
    Ok(())
}
