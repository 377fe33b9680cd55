//! WMS GetCapabilities document parsing.
//!
//! Only the parts the map wizard consumes are extracted: service metadata,
//! named layers in document order, and the GetMap operation (formats and
//! online resource). Everything else in the document is skipped.

use std::collections::HashSet;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::Serialize;
use wms_common::{WmsError, WmsResult};

use crate::exceptions::{parse_service_exception, EXCEPTION_ROOTS};

/// Root element names accepted as capabilities documents (1.3.0, 1.1.1).
pub const CAPABILITIES_ROOTS: [&str; 2] = ["WMS_Capabilities", "WMT_MS_Capabilities"];

/// Service-level metadata from the `<Service>` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ServiceInfo {
    pub name: Option<String>,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
}

/// A named layer advertised by the service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerInfo {
    /// Identifier used in the GetMap LAYERS parameter
    pub name: String,
    /// Human-readable title
    pub title: Option<String>,
    /// Whether GetFeatureInfo is supported for this layer
    pub queryable: bool,
    /// Nesting depth, 0 for the root layer
    pub depth: usize,
}

/// Parsed capabilities document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WmsCapabilities {
    /// Version attribute of the root element
    pub version: Option<String>,
    pub service: ServiceInfo,
    /// Named layers in document order, without duplicates
    pub layers: Vec<LayerInfo>,
    /// Output formats listed for GetMap
    pub get_map_formats: Vec<String>,
    /// GetMap HTTP GET online resource
    pub get_map_url: Option<String>,
}

impl WmsCapabilities {
    /// Layer identifiers in the order the service reports them.
    pub fn layer_names(&self) -> Vec<String> {
        self.layers.iter().map(|l| l.name.clone()).collect()
    }

    pub fn layer(&self, name: &str) -> Option<&LayerInfo> {
        self.layers.iter().find(|l| l.name == name)
    }

    pub fn supports_format(&self, mime: &str) -> bool {
        self.get_map_formats
            .iter()
            .any(|f| f.eq_ignore_ascii_case(mime))
    }
}

/// A `<Layer>` whose end tag has not been seen yet.
struct OpenLayer {
    slot: usize,
    name: Option<String>,
    title: Option<String>,
    queryable: bool,
}

fn local_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

fn attribute(e: &BytesStart<'_>, name: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.local_name().as_ref() == name)
        .and_then(|a| a.unescape_value().ok().map(|v| v.into_owned()))
}

fn path_ends_with(path: &[String], suffix: &[&str]) -> bool {
    path.len() >= suffix.len()
        && path[path.len() - suffix.len()..]
            .iter()
            .zip(suffix)
            .all(|(a, b)| a == b)
}

fn syntax_error(position: usize, message: impl Into<String>) -> WmsError {
    WmsError::XmlSyntax {
        position,
        message: message.into(),
    }
}

/// Parse a GetCapabilities response body.
///
/// Errors:
/// - [`WmsError::XmlSyntax`] when the body is not well-formed XML
/// - [`WmsError::NotCapabilities`] when it is XML but not a WMS capabilities document
/// - [`WmsError::ServiceException`] when the server answered with an exception report
pub fn parse_capabilities(xml: &str) -> WmsResult<WmsCapabilities> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut path: Vec<String> = Vec::new();
    let mut root_seen = false;
    let mut caps = WmsCapabilities::default();
    let mut open_layers: Vec<OpenLayer> = Vec::new();
    let mut slots: Vec<Option<LayerInfo>> = Vec::new();

    loop {
        buf.clear();
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| syntax_error(reader.buffer_position(), e.to_string()))?;

        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let is_empty = matches!(event, Event::Empty(_));
                let name = local_name(e);

                if !root_seen {
                    root_seen = true;
                    if EXCEPTION_ROOTS.contains(&name.as_str()) {
                        return Err(parse_service_exception(xml)?.into());
                    }
                    if !CAPABILITIES_ROOTS.contains(&name.as_str()) {
                        return Err(WmsError::NotCapabilities(name));
                    }
                    caps.version = attribute(e, b"version");
                } else if path.is_empty() {
                    return Err(syntax_error(
                        reader.buffer_position(),
                        "content after root element",
                    ));
                }

                if name == "OnlineResource"
                    && path_ends_with(&path, &["GetMap", "DCPType", "HTTP", "Get"])
                {
                    caps.get_map_url = attribute(e, b"href");
                }

                if !is_empty {
                    if name == "Layer" {
                        open_layers.push(OpenLayer {
                            slot: slots.len(),
                            name: None,
                            title: None,
                            queryable: attribute(e, b"queryable").as_deref() == Some("1"),
                        });
                        slots.push(None);
                    }
                    path.push(name);
                }
            }
            Event::Text(ref t) => {
                if path.is_empty() {
                    // Stray text outside any element, e.g. a plain-text error page.
                    return Err(syntax_error(reader.buffer_position(), "text outside root element"));
                }
                let text = t
                    .unescape()
                    .map_err(|e| syntax_error(reader.buffer_position(), e.to_string()))?
                    .into_owned();
                apply_text(&path, text, &mut caps, &mut open_layers);
            }
            Event::CData(ref t) => {
                if !path.is_empty() {
                    let text = String::from_utf8_lossy(t).trim().to_string();
                    apply_text(&path, text, &mut caps, &mut open_layers);
                }
            }
            Event::End(_) => {
                if path.pop().as_deref() == Some("Layer") {
                    if let Some(layer) = open_layers.pop() {
                        let depth = open_layers.len();
                        if let Some(name) = layer.name {
                            slots[layer.slot] = Some(LayerInfo {
                                name,
                                title: layer.title,
                                queryable: layer.queryable,
                                depth,
                            });
                        }
                    }
                }
            }
            Event::Eof => {
                if !root_seen {
                    return Err(syntax_error(
                        reader.buffer_position(),
                        "document has no root element",
                    ));
                }
                if let Some(open) = path.last() {
                    return Err(syntax_error(
                        reader.buffer_position(),
                        format!("unexpected end of document inside <{}>", open),
                    ));
                }
                break;
            }
            _ => {}
        }
    }

    let mut seen = HashSet::new();
    caps.layers = slots
        .into_iter()
        .flatten()
        .filter(|layer| seen.insert(layer.name.clone()))
        .collect();

    Ok(caps)
}

fn apply_text(
    path: &[String],
    text: String,
    caps: &mut WmsCapabilities,
    open_layers: &mut [OpenLayer],
) {
    if text.is_empty() {
        return;
    }

    if path.len() == 3 && path[1] == "Service" {
        match path[2].as_str() {
            "Name" => caps.service.name = Some(text),
            "Title" => caps.service.title = text,
            "Abstract" => caps.service.abstract_text = Some(text),
            _ => {}
        }
    } else if path_ends_with(path, &["Layer", "Name"]) {
        if let Some(layer) = open_layers.last_mut() {
            layer.name = Some(text);
        }
    } else if path_ends_with(path, &["Layer", "Title"]) {
        if let Some(layer) = open_layers.last_mut() {
            layer.title = Some(text);
        }
    } else if path_ends_with(path, &["GetMap", "Format"]) {
        caps.get_map_formats.push(text);
    }
}
