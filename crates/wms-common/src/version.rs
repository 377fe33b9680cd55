//! WMS protocol versions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::WmsError;

/// Supported WMS protocol versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WmsVersion {
    #[serde(rename = "1.1.1")]
    V1_1_1,
    #[serde(rename = "1.3.0")]
    #[default]
    V1_3_0,
}

impl WmsVersion {
    /// All versions, in the order they are offered to users.
    pub const ALL: [WmsVersion; 2] = [WmsVersion::V1_1_1, WmsVersion::V1_3_0];

    pub fn as_str(&self) -> &'static str {
        match self {
            WmsVersion::V1_1_1 => "1.1.1",
            WmsVersion::V1_3_0 => "1.3.0",
        }
    }

    /// Root element name of the capabilities document for this version.
    pub fn capabilities_root(&self) -> &'static str {
        match self {
            WmsVersion::V1_1_1 => "WMT_MS_Capabilities",
            WmsVersion::V1_3_0 => "WMS_Capabilities",
        }
    }
}

impl fmt::Display for WmsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WmsVersion {
    type Err = WmsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1.1.1" => Ok(WmsVersion::V1_1_1),
            "1.3.0" => Ok(WmsVersion::V1_3_0),
            other => Err(WmsError::UnsupportedVersion(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_versions() {
        assert_eq!("1.1.1".parse::<WmsVersion>().unwrap(), WmsVersion::V1_1_1);
        assert_eq!(" 1.3.0 ".parse::<WmsVersion>().unwrap(), WmsVersion::V1_3_0);
        assert!(matches!(
            "1.0.0".parse::<WmsVersion>(),
            Err(WmsError::UnsupportedVersion(v)) if v == "1.0.0"
        ));
    }

    #[test]
    fn test_default_is_1_3_0() {
        assert_eq!(WmsVersion::default(), WmsVersion::V1_3_0);
    }

    #[test]
    fn test_serde_uses_version_strings() {
        let json = serde_json::to_string(&WmsVersion::V1_1_1).unwrap();
        assert_eq!(json, "\"1.1.1\"");
        let v: WmsVersion = serde_json::from_str("\"1.3.0\"").unwrap();
        assert_eq!(v, WmsVersion::V1_3_0);
    }
}
