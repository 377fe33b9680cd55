//! Response bodies a WMS endpoint may return.
//!
//! The capabilities documents mirror the shape of real services (PDOK
//! hiking networks) but are trimmed to what the tests need.

/// Layer names advertised by [`CAPABILITIES_1_3_0`], in document order.
pub const HIKING_LAYERS: [&str; 3] = ["wandelknooppunten", "wandelnetwerken", "wandelroutes"];

/// Service title of [`CAPABILITIES_1_3_0`] and [`CAPABILITIES_1_1_1`].
pub const HIKING_TITLE: &str = "Regionale wandelnetwerken";

/// WMS 1.3.0 capabilities with an unnamed root layer and three named children.
pub const CAPABILITIES_1_3_0: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<WMS_Capabilities xmlns="http://www.opengis.net/wms" xmlns:xlink="http://www.w3.org/1999/xlink" version="1.3.0">
  <Service>
    <Name>WMS</Name>
    <Title>Regionale wandelnetwerken</Title>
    <Abstract>Knooppunten en routes van regionale wandelnetwerken in Nederland.</Abstract>
    <OnlineResource xlink:type="simple" xlink:href="https://service.pdok.nl/"/>
  </Service>
  <Capability>
    <Request>
      <GetCapabilities>
        <Format>text/xml</Format>
      </GetCapabilities>
      <GetMap>
        <Format>image/png</Format>
        <Format>image/jpeg</Format>
        <Format>image/png; mode=8bit</Format>
        <DCPType>
          <HTTP>
            <Get><OnlineResource xlink:type="simple" xlink:href="https://service.pdok.nl/wandelnet/regionale-wandelnetwerken/wms/v1_0?"/></Get>
          </HTTP>
        </DCPType>
      </GetMap>
    </Request>
    <Exception>
      <Format>XML</Format>
    </Exception>
    <Layer>
      <Title>Regionale wandelnetwerken</Title>
      <CRS>EPSG:28992</CRS>
      <CRS>EPSG:3857</CRS>
      <Layer queryable="1">
        <Name>wandelknooppunten</Name>
        <Title>Wandelknooppunten</Title>
      </Layer>
      <Layer queryable="1">
        <Name>wandelnetwerken</Name>
        <Title>Wandelnetwerken</Title>
      </Layer>
      <Layer queryable="0">
        <Name>wandelroutes</Name>
        <Title>Wandelroutes</Title>
      </Layer>
    </Layer>
  </Capability>
</WMS_Capabilities>
"#;

/// WMS 1.1.1 capabilities for the same service.
pub const CAPABILITIES_1_1_1: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE WMT_MS_Capabilities SYSTEM "http://schemas.opengis.net/wms/1.1.1/WMS_MS_Capabilities.dtd">
<WMT_MS_Capabilities version="1.1.1">
  <Service>
    <Name>OGC:WMS</Name>
    <Title>Regionale wandelnetwerken</Title>
  </Service>
  <Capability>
    <Request>
      <GetMap>
        <Format>image/png</Format>
        <DCPType><HTTP><Get><OnlineResource xmlns:xlink="http://www.w3.org/1999/xlink" xlink:href="https://service.pdok.nl/wandelnet/regionale-wandelnetwerken/wms/v1_0?"/></Get></HTTP></DCPType>
      </GetMap>
    </Request>
    <Layer>
      <Title>Regionale wandelnetwerken</Title>
      <SRS>EPSG:28992</SRS>
      <Layer><Name>wandelknooppunten</Name><Title>Wandelknooppunten</Title></Layer>
      <Layer><Name>wandelnetwerken</Name><Title>Wandelnetwerken</Title></Layer>
      <Layer><Name>wandelroutes</Name><Title>Wandelroutes</Title></Layer>
    </Layer>
  </Capability>
</WMT_MS_Capabilities>
"#;

/// Well-formed capabilities without a single named layer.
pub const CAPABILITIES_NO_LAYERS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<WMS_Capabilities version="1.3.0">
  <Service><Name>WMS</Name><Title>Empty service</Title></Service>
  <Capability><Layer><Title>Nothing to see</Title></Layer></Capability>
</WMS_Capabilities>
"#;

/// Exception report for an unsupported VERSION.
pub const SERVICE_EXCEPTION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ServiceExceptionReport version="1.3.0" xmlns="http://www.opengis.net/ogc">
  <ServiceException code="InvalidParameterValue" locator="version">Invalid version: 9.9.9</ServiceException>
</ServiceExceptionReport>
"#;

/// Well-formed XML that is not a WMS document (an Atom feed).
pub const ATOM_FEED: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom"><title>Datasets</title></feed>
"#;

/// A typical web server landing page.
pub const HTML_PAGE: &str = "<!DOCTYPE html>\n<html><head><title>Welcome</title></head><body><h1>It works!</h1></body></html>\n";

/// Plain-text body, as returned by some proxies.
pub const PLAIN_TEXT: &str = "Service temporarily unavailable";
