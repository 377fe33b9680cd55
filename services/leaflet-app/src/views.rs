//! Views shown next to the wizard steps.
//!
//! Map views return standalone HTML pages; `show_wms_details` returns a data
//! result. Views that need a WMS connect on every call and report connection
//! failures to the user.

use map_renderer::{MapDocument, WmsOverlay};
use tracing::{debug, instrument};

use crate::config::AppConfig;
use crate::connector::WmsConnector;
use crate::data::{DataItem, DataResult};
use crate::error::{AppError, INVALID_URL_MESSAGE};
use crate::options::is_placeholder;
use crate::params::FormParams;

/// Shown by the details view while the url field is empty.
pub const DETAILS_PLACEHOLDER: &str = "Please enter a WMS url";

/// Bundled "What's next" document.
pub const WHATS_NEXT_HTML: &str = include_str!("../assets/whats_next.html");

fn base_map(config: &AppConfig) -> MapDocument {
    MapDocument::new(config.map_center(), config.map_zoom)
}

/// Sample map with drawing tools and a layer switcher.
pub fn leaflet_introduction(config: &AppConfig) -> Result<String, AppError> {
    let mut map = base_map(config);
    map.add_draw_control(true).add_layer_control();
    Ok(map.to_html()?)
}

/// Base url, layers and title of the entered WMS.
#[instrument(skip_all)]
pub async fn show_wms_details(
    connector: &WmsConnector,
    params: &FormParams,
) -> Result<DataResult, AppError> {
    let Some(url) = params.wms_details.wms_url() else {
        return Ok(DataResult::new(vec![DataItem::label(DETAILS_PLACEHOLDER)]));
    };

    let details = connector
        .connect(url, params.wms_details.wms_version)
        .await
        .into_session()?
        .details();

    let layer_items = details
        .layers
        .iter()
        .enumerate()
        .map(|(i, layer)| DataItem::value(format!("Layer {}", i + 1), layer.as_str()))
        .collect();

    Ok(DataResult::new(vec![
        DataItem::value("Base url", details.base_url),
        DataItem::value("Layers", format!("{} layers", details.layers.len()))
            .with_subgroup(layer_items),
        DataItem::value("Name", details.title),
    ]))
}

/// Map with the selected layers of the entered WMS as one overlay.
#[instrument(skip_all)]
pub async fn custom_wms_map(
    connector: &WmsConnector,
    config: &AppConfig,
    params: &FormParams,
) -> Result<String, AppError> {
    let url = params
        .wms_details
        .wms_url()
        .ok_or_else(|| AppError::user(INVALID_URL_MESSAGE))?;

    let details = connector
        .connect(url, params.wms_details.wms_version)
        .await
        .into_session()?
        .details();

    let layers: Vec<String> = params
        .wms_map
        .layer_options
        .iter()
        .map(|layer| layer.trim())
        .filter(|layer| !layer.is_empty() && !is_placeholder(layer))
        .map(str::to_string)
        .collect();

    let mut map = base_map(config);
    if layers.is_empty() {
        // An empty LAYERS parameter is not a valid GetMap request
        debug!("No layers selected, rendering without overlay");
    } else {
        map.add_wms_layer(
            WmsOverlay::new(details.base_url, layers, details.title)
                .format(params.wms_details.fmt_format)
                .version(params.wms_details.wms_version),
        );
    }
    map.add_layer_control();
    Ok(map.to_html()?)
}

/// Closing page, from the configured file or the bundled document.
pub async fn whats_next(config: &AppConfig) -> Result<String, AppError> {
    match &config.whats_next_path {
        Some(path) => tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::Internal(format!("Failed to read {}: {}", path.display(), e))
        }),
        None => Ok(WHATS_NEXT_HTML.to_string()),
    }
}
