//! OGC WMS client-side protocol support.
//!
//! Supports:
//! - WMS 1.1.1 and WMS 1.3.0 GetCapabilities requests
//! - Capabilities document parsing (service metadata, named layers, GetMap formats)
//! - ServiceExceptionReport parsing

pub mod capabilities;
pub mod exceptions;
pub mod request;

pub use capabilities::{parse_capabilities, LayerInfo, ServiceInfo, WmsCapabilities};
pub use exceptions::{parse_service_exception, service_exception_report, ServiceException};
pub use request::{base_url, capabilities_url, parse_endpoint};
pub use url::Url;
