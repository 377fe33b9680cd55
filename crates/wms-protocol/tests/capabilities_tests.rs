//! Capabilities parsing against realistic service documents.

use test_utils::fixtures;
use wms_common::{WmsError, WmsVersion};
use wms_protocol::{base_url, capabilities_url, parse_capabilities};

// ============================================================================
// Version-specific documents
// ============================================================================

#[test]
fn test_parse_1_3_0_document() {
    let caps = parse_capabilities(fixtures::CAPABILITIES_1_3_0).unwrap();
    assert_eq!(caps.version.as_deref(), Some("1.3.0"));
    assert_eq!(caps.service.title, fixtures::HIKING_TITLE);
    assert_eq!(caps.layer_names(), fixtures::HIKING_LAYERS.to_vec());
    assert!(caps.supports_format("image/png"));
    assert_eq!(
        caps.get_map_url.as_deref(),
        Some("https://service.pdok.nl/wandelnet/regionale-wandelnetwerken/wms/v1_0?")
    );
}

#[test]
fn test_parse_1_1_1_document() {
    let caps = parse_capabilities(fixtures::CAPABILITIES_1_1_1).unwrap();
    assert_eq!(caps.version.as_deref(), Some(WmsVersion::V1_1_1.as_str()));
    assert_eq!(caps.service.name.as_deref(), Some("OGC:WMS"));
    assert_eq!(caps.layer_names(), fixtures::HIKING_LAYERS.to_vec());
}

#[test]
fn test_both_versions_agree_on_layers() {
    let v13 = parse_capabilities(fixtures::CAPABILITIES_1_3_0).unwrap();
    let v11 = parse_capabilities(fixtures::CAPABILITIES_1_1_1).unwrap();
    assert_eq!(v13.layer_names(), v11.layer_names());
    assert_eq!(v13.service.title, v11.service.title);
}

#[test]
fn test_document_without_named_layers() {
    let caps = parse_capabilities(fixtures::CAPABILITIES_NO_LAYERS).unwrap();
    assert!(caps.layers.is_empty());
    assert_eq!(caps.service.title, "Empty service");
}

#[test]
fn test_capabilities_serialize_to_json() {
    let caps = parse_capabilities(fixtures::CAPABILITIES_1_3_0).unwrap();
    let json = serde_json::to_value(&caps).unwrap();
    assert_eq!(json["service"]["title"], fixtures::HIKING_TITLE);
    assert_eq!(json["layers"][0]["name"], "wandelknooppunten");
    assert!(json["service"]["abstract"].is_string());
}

// ============================================================================
// Bodies that are not capabilities
// ============================================================================

#[test]
fn test_non_capabilities_bodies_are_document_errors() {
    for body in [
        fixtures::ATOM_FEED,
        fixtures::HTML_PAGE,
        fixtures::PLAIN_TEXT,
        "",
    ] {
        let err = parse_capabilities(body).unwrap_err();
        assert!(err.is_document(), "expected document error for {:?}, got {:?}", body, err);
    }
}

#[test]
fn test_service_exception_is_reported_separately() {
    let err = parse_capabilities(fixtures::SERVICE_EXCEPTION).unwrap_err();
    assert!(!err.is_document());
    assert!(matches!(
        err,
        WmsError::ServiceException { code: Some(ref c), .. } if c == "InvalidParameterValue"
    ));
}

// ============================================================================
// URL handling
// ============================================================================

#[test]
fn test_capabilities_url_round_trips_through_base_url() {
    let input = "https://service.pdok.nl/wandelnet/regionale-wandelnetwerken/wms/v1_0?version=1.3.0&request=getcapabilities&service=wms";
    let base = base_url(input).unwrap();
    let from_input = capabilities_url(input, WmsVersion::V1_3_0).unwrap();
    let from_base = capabilities_url(&base, WmsVersion::V1_3_0).unwrap();
    assert_eq!(from_input, from_base);
}

// ============================================================================
// Document preambles seen in the wild
// ============================================================================

#[test]
fn test_parse_document_with_byte_order_mark() {
    let with_bom = format!("\u{feff}{}", fixtures::CAPABILITIES_1_3_0);
    let caps = parse_capabilities(&with_bom).unwrap();
    assert_eq!(caps.service.title, fixtures::HIKING_TITLE);
    assert_eq!(caps.layer_names(), fixtures::HIKING_LAYERS.to_vec());
}

#[test]
fn test_parse_1_1_1_doctype_with_internal_subset() {
    let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE WMT_MS_Capabilities SYSTEM "http://schemas.opengis.net/wms/1.1.1/WMS_MS_Capabilities.dtd"
 [
 <!ELEMENT VendorSpecificCapabilities EMPTY>
 ]>
<WMT_MS_Capabilities version="1.1.1">
  <Service>
    <Name>OGC:WMS</Name>
    <Title>Vendor service</Title>
  </Service>
  <Capability>
    <VendorSpecificCapabilities/>
    <Layer>
      <Title>Root</Title>
      <Layer><Name>roads</Name><Title>Roads</Title></Layer>
      <Layer><Name>rivers</Name><Title>Rivers</Title></Layer>
    </Layer>
  </Capability>
</WMT_MS_Capabilities>
"#;
    let caps = parse_capabilities(xml).unwrap();
    assert_eq!(caps.version.as_deref(), Some("1.1.1"));
    assert_eq!(caps.service.title, "Vendor service");
    assert_eq!(caps.layer_names(), vec!["roads", "rivers"]);
}
