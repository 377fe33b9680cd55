//! Shared test utilities for the leaflet-wms workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Capabilities documents and other response bodies a WMS endpoint may return
//! - A mock WMS HTTP server bound to an ephemeral local port
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{fixtures, MockWmsServer};
//!
//! let server = MockWmsServer::capabilities(fixtures::CAPABILITIES_1_3_0).await;
//! let url = server.url();
//! ```

pub mod fixtures;
pub mod mock_server;

pub use mock_server::{unreachable_url, MockResponse, MockWmsServer};

/// Assert that `haystack` contains `needle` exactly `count` times.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_occurrences;
///
/// assert_occurrences!(html, "L.tileLayer.wms(", 1);
/// ```
#[macro_export]
macro_rules! assert_occurrences {
    ($haystack:expr, $needle:expr, $count:expr) => {{
        let haystack: &str = &$haystack;
        let needle: &str = $needle;
        let found = haystack.matches(needle).count();
        if found != $count {
            panic!(
                "assertion failed: expected {} occurrence(s) of `{}`, found {}",
                $count, needle, found
            );
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_assert_occurrences_passes() {
        assert_occurrences!("a,b,a", "a", 2);
        assert_occurrences!(String::from("xyz"), "q", 0);
    }

    #[test]
    #[should_panic(expected = "expected 1 occurrence(s)")]
    fn test_assert_occurrences_fails() {
        assert_occurrences!("aa", "a", 1);
    }
}
