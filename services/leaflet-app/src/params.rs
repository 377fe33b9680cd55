//! Form parameters sent with every callback.
//!
//! The client owns the form state; each request carries the full current
//! values and nothing is remembered between requests.

use serde::{Deserialize, Serialize};
use wms_common::{ImageFormat, WmsVersion};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormParams {
    pub wms_details: WmsDetailsParams,
    pub wms_map: WmsMapParams,
}

/// Fields of the "WMS set-up" step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WmsDetailsParams {
    /// Endpoint URL as typed by the user, `null` while the field is empty
    pub wms_input: Option<String>,
    pub wms_version: WmsVersion,
    pub fmt_format: ImageFormat,
}

impl WmsDetailsParams {
    /// The entered URL, if it is not blank.
    pub fn wms_url(&self) -> Option<&str> {
        self.wms_input
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// Fields of the "Custom WMS" step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WmsMapParams {
    /// Selected layer identifiers, in selection order
    pub layer_options: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let params: FormParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params, FormParams::default());
        assert_eq!(params.wms_details.wms_version, WmsVersion::V1_3_0);
        assert_eq!(params.wms_details.fmt_format, ImageFormat::Png);
        assert!(params.wms_map.layer_options.is_empty());
    }

    #[test]
    fn test_full_params() {
        let params: FormParams = serde_json::from_str(
            r#"{
                "wms_details": {"wms_input": "https://example.com/wms", "wms_version": "1.1.1", "fmt_format": "image/jpeg"},
                "wms_map": {"layer_options": ["b", "a"]}
            }"#,
        )
        .unwrap();
        assert_eq!(params.wms_details.wms_url(), Some("https://example.com/wms"));
        assert_eq!(params.wms_details.wms_version, WmsVersion::V1_1_1);
        assert_eq!(params.wms_details.fmt_format, ImageFormat::Jpeg);
        assert_eq!(params.wms_map.layer_options, vec!["b", "a"]);
    }

    #[test]
    fn test_blank_url_is_none() {
        let params: FormParams =
            serde_json::from_str(r#"{"wms_details": {"wms_input": "   "}}"#).unwrap();
        assert_eq!(params.wms_details.wms_url(), None);

        let params: FormParams =
            serde_json::from_str(r#"{"wms_details": {"wms_input": null}}"#).unwrap();
        assert_eq!(params.wms_details.wms_url(), None);
    }

    #[test]
    fn test_unknown_version_is_rejected() {
        let result: Result<FormParams, _> =
            serde_json::from_str(r#"{"wms_details": {"wms_version": "2.0.0"}}"#);
        assert!(result.is_err());
    }
}
