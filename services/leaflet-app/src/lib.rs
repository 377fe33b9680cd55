//! Leaflet WMS wizard service library.
//!
//! Walks a user from a WMS endpoint URL to an interactive Leaflet map:
//! - `connector`: GetCapabilities round trip, classified into outcomes
//! - `session`: inspection of a connected service (base url, layers, title)
//! - `options`: layer choices for the multi-select field
//! - `views`: HTML maps and the details data view
//! - `wizard`: step state machine and its schema

pub mod config;
pub mod connector;
pub mod data;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod options;
pub mod params;
pub mod session;
pub mod session_cache;
pub mod state;
pub mod views;
pub mod wizard;

pub use config::AppConfig;
pub use connector::{CapabilitiesFetcher, ConnectOutcome, HttpFetcher, WmsConnector};
pub use error::AppError;
pub use handlers::build_router;
pub use params::FormParams;
pub use session::{WmsDetails, WmsSession};
pub use state::AppState;
pub use wizard::Step;
