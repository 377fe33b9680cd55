//! Error types for talking to remote WMS endpoints.

use thiserror::Error;

/// Result type alias using WmsError.
pub type WmsResult<T> = Result<T, WmsError>;

/// Everything that can go wrong between a user-supplied URL and a parsed
/// capabilities document.
#[derive(Debug, Clone, Error)]
pub enum WmsError {
    // === Input Errors ===
    #[error("Invalid WMS url '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Unsupported WMS version: {0}")]
    UnsupportedVersion(String),

    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    // === Transport Errors ===
    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("{url} responded with HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Response from {url} exceeds {limit} bytes")]
    ResponseTooLarge { url: String, limit: usize },

    // === Document Errors ===
    #[error("Malformed XML at position {position}: {message}")]
    XmlSyntax { position: usize, message: String },

    #[error("Not a WMS capabilities document (root element '{0}')")]
    NotCapabilities(String),

    #[error("Service exception: {message}")]
    ServiceException {
        code: Option<String>,
        message: String,
    },
}

impl WmsError {
    /// True for failures that happen before a response body is available:
    /// bad URLs, unreachable hosts, HTTP error statuses and oversized bodies.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            WmsError::InvalidUrl { .. }
                | WmsError::Transport { .. }
                | WmsError::HttpStatus { .. }
                | WmsError::ResponseTooLarge { .. }
        )
    }

    /// True when a body was received but is not a WMS capabilities document.
    pub fn is_document(&self) -> bool {
        matches!(
            self,
            WmsError::XmlSyntax { .. } | WmsError::NotCapabilities(_)
        )
    }

    /// Short machine-readable label, used for logs and metric labels.
    pub fn kind(&self) -> &'static str {
        match self {
            WmsError::InvalidUrl { .. } => "invalid_url",
            WmsError::UnsupportedVersion(_) => "unsupported_version",
            WmsError::UnsupportedFormat(_) => "unsupported_format",
            WmsError::Transport { .. } => "transport",
            WmsError::HttpStatus { .. } => "http_status",
            WmsError::ResponseTooLarge { .. } => "response_too_large",
            WmsError::XmlSyntax { .. } => "xml_syntax",
            WmsError::NotCapabilities(_) => "not_capabilities",
            WmsError::ServiceException { .. } => "service_exception",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_classification() {
        let err = WmsError::Transport {
            url: "http://localhost:1/wms".to_string(),
            message: "connection refused".to_string(),
        };
        assert!(err.is_transport());
        assert!(!err.is_document());

        let err = WmsError::HttpStatus {
            url: "http://example.com/wms".to_string(),
            status: 404,
        };
        assert!(err.is_transport());

        let err = WmsError::ResponseTooLarge {
            url: "http://example.com/wms".to_string(),
            limit: 1024,
        };
        assert!(err.is_transport());
        assert_eq!(err.kind(), "response_too_large");
    }

    #[test]
    fn test_document_classification() {
        let err = WmsError::XmlSyntax {
            position: 12,
            message: "unexpected end".to_string(),
        };
        assert!(err.is_document());
        assert!(!err.is_transport());
        assert!(WmsError::NotCapabilities("html".to_string()).is_document());
    }

    #[test]
    fn test_service_exception_is_neither() {
        let err = WmsError::ServiceException {
            code: Some("InvalidParameterValue".to_string()),
            message: "bad version".to_string(),
        };
        assert!(!err.is_transport());
        assert!(!err.is_document());
        assert_eq!(err.to_string(), "Service exception: bad version");
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(
            WmsError::UnsupportedVersion("2.0".to_string()).kind(),
            "unsupported_version"
        );
        assert_eq!(
            WmsError::NotCapabilities("html".to_string()).kind(),
            "not_capabilities"
        );
    }
}
