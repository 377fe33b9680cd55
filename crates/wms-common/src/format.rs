//! Image formats offered for WMS overlays.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::WmsError;

/// GetMap output formats the wizard lets users pick from.
///
/// Services usually advertise more, but png and jpeg are universally
/// supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ImageFormat {
    #[serde(rename = "image/png")]
    #[default]
    Png,
    #[serde(rename = "image/jpeg")]
    Jpeg,
}

impl ImageFormat {
    pub const ALL: [ImageFormat; 2] = [ImageFormat::Png, ImageFormat::Jpeg];

    /// Parse from MIME type string
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim().to_lowercase().as_str() {
            "image/png" => Some(ImageFormat::Png),
            "image/jpeg" | "image/jpg" => Some(ImageFormat::Jpeg),
            _ => None,
        }
    }

    /// Get MIME type string
    pub fn to_mime(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_mime())
    }
}

impl FromStr for ImageFormat {
    type Err = WmsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ImageFormat::from_mime(s).ok_or_else(|| WmsError::UnsupportedFormat(s.to_string()))
    }
}
