//! WMS ServiceExceptionReport handling.
//!
//! Servers answer a bad GetCapabilities with an exception report instead of
//! a capabilities document. Both the WMS form
//! (`<ServiceExceptionReport><ServiceException code="..">`) and the OWS form
//! (`<ows:ExceptionReport><ows:Exception exceptionCode=".."><ows:ExceptionText>`)
//! are recognized.

use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::Serialize;
use wms_common::{WmsError, WmsResult};

/// Root element names of exception reports.
pub const EXCEPTION_ROOTS: [&str; 2] = ["ServiceExceptionReport", "ExceptionReport"];

/// First exception found in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceException {
    pub code: Option<String>,
    pub locator: Option<String>,
    pub message: String,
}

impl From<ServiceException> for WmsError {
    fn from(ex: ServiceException) -> Self {
        WmsError::ServiceException {
            code: ex.code,
            message: ex.message,
        }
    }
}

fn attribute(e: &BytesStart<'_>, names: &[&[u8]]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| names.contains(&a.key.local_name().as_ref()))
        .and_then(|a| a.unescape_value().ok().map(|v| v.into_owned()))
}

/// Parse the first exception of a ServiceExceptionReport.
pub fn parse_service_exception(xml: &str) -> WmsResult<ServiceException> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut current: Option<ServiceException> = None;
    let mut depth = 0usize;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if current.is_some() {
                    depth += 1;
                } else if matches!(e.local_name().as_ref(), b"ServiceException" | b"Exception") {
                    current = Some(ServiceException {
                        code: attribute(&e, &[b"code", b"exceptionCode"]),
                        locator: attribute(&e, &[b"locator"]),
                        message: String::new(),
                    });
                }
            }
            Ok(Event::Empty(e)) => {
                if current.is_none()
                    && matches!(e.local_name().as_ref(), b"ServiceException" | b"Exception")
                {
                    return Ok(ServiceException {
                        code: attribute(&e, &[b"code", b"exceptionCode"]),
                        locator: attribute(&e, &[b"locator"]),
                        message: String::new(),
                    });
                }
            }
            Ok(Event::Text(t)) => {
                if let Some(ex) = current.as_mut() {
                    let text = t.unescape().map_err(|e| WmsError::XmlSyntax {
                        position: reader.buffer_position(),
                        message: e.to_string(),
                    })?;
                    if !ex.message.is_empty() {
                        ex.message.push(' ');
                    }
                    ex.message.push_str(&text);
                }
            }
            Ok(Event::CData(t)) => {
                if let Some(ex) = current.as_mut() {
                    ex.message.push_str(String::from_utf8_lossy(&t).trim());
                }
            }
            Ok(Event::End(_)) => {
                if current.is_some() {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(WmsError::XmlSyntax {
                    position: reader.buffer_position(),
                    message: e.to_string(),
                })
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(current.unwrap_or(ServiceException {
        code: None,
        locator: None,
        message: String::new(),
    }))
}

/// Build a WMS 1.3.0 ServiceExceptionReport document.
pub fn service_exception_report(code: &str, message: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><ServiceExceptionReport version="1.3.0" xmlns="http://www.opengis.net/ogc"><ServiceException code="{}">{}</ServiceException></ServiceExceptionReport>"#,
        escape(code),
        escape(message)
    )
}
