//! Geographic coordinates.

use serde::{Deserialize, Serialize};

/// A WGS84 position in degrees, latitude first as Leaflet expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether both components fall inside the WGS84 range.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// `[lat, lng]` pair as used by `L.map({center})`.
    pub fn to_array(&self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}
