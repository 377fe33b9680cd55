//! GetCapabilities request construction.
//!
//! Users paste whatever they have: a bare service endpoint, or a full
//! GetCapabilities link copied from a catalogue. Both normalize to the same
//! base URL, and the capabilities URL is rebuilt from it for the chosen
//! version.

use url::Url;
use wms_common::{WmsError, WmsResult, WmsVersion};

/// Query parameters owned by the WMS protocol itself. Leaflet appends these
/// to the base URL for GetMap, so they must not linger there.
const PROTOCOL_PARAMS: [&str; 3] = ["service", "request", "version"];

/// Parse and validate a user-supplied WMS endpoint.
pub fn parse_endpoint(input: &str) -> WmsResult<Url> {
    let trimmed = input.trim();
    let invalid = |message: String| WmsError::InvalidUrl {
        url: trimmed.to_string(),
        message,
    };

    if trimmed.is_empty() {
        return Err(invalid("url is empty".to_string()));
    }

    let url = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme '{}'", other))),
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid("url has no host".to_string()));
    }

    Ok(url)
}

fn strip_protocol_params(url: &Url) -> Url {
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !PROTOCOL_PARAMS.iter().any(|p| key.eq_ignore_ascii_case(p)))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut stripped = url.clone();
    stripped.set_fragment(None);
    if kept.is_empty() {
        stripped.set_query(None);
    } else {
        stripped.query_pairs_mut().clear().extend_pairs(&kept);
    }
    stripped
}

/// The service URL without SERVICE/REQUEST/VERSION parameters.
///
/// Vendor parameters (e.g. MapServer's `map=`) are kept.
pub fn base_url(input: &str) -> WmsResult<String> {
    let url = parse_endpoint(input)?;
    Ok(strip_protocol_params(&url).to_string())
}

/// Build the GetCapabilities URL for `input` at `version`.
pub fn capabilities_url(input: &str, version: WmsVersion) -> WmsResult<Url> {
    let mut url = strip_protocol_params(&parse_endpoint(input)?);
    url.query_pairs_mut()
        .append_pair("SERVICE", "WMS")
        .append_pair("REQUEST", "GetCapabilities")
        .append_pair("VERSION", version.as_str());
    Ok(url)
}
