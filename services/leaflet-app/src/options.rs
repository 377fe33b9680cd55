//! Layer choices for the multi-select field.

use tracing::debug;

use crate::connector::WmsConnector;
use crate::params::FormParams;

/// Sole option offered while no working WMS is entered.
pub const LAYER_PLACEHOLDER: &str = "Please enter WMS url and version";

/// Layer identifiers of the entered WMS, or the placeholder.
///
/// Never fails and never returns an empty list. Connection errors are
/// swallowed: the user is still typing.
pub async fn layer_options(connector: &WmsConnector, params: &FormParams) -> Vec<String> {
    let Some(url) = params.wms_details.wms_url() else {
        return placeholder();
    };

    let layers = connector
        .connect(url, params.wms_details.wms_version)
        .await
        .session()
        .map(|session| session.details().layers)
        .unwrap_or_default();

    if layers.is_empty() {
        debug!(url, "No layers to offer");
        return placeholder();
    }
    layers
}

fn placeholder() -> Vec<String> {
    vec![LAYER_PLACEHOLDER.to_string()]
}

/// Whether a selected value is the placeholder rather than a layer.
pub fn is_placeholder(value: &str) -> bool {
    value == LAYER_PLACEHOLDER
}
