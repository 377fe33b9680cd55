//! HTTP request handlers.
//!
//! This module is organized into submodules:
//! - `wizard`: step schema, transitions, option provider and buttons
//! - `views`: map and data views
//! - `metrics`: health check, Prometheus metrics and counters snapshot
//! - `extract`: JSON body extractor with JSON error responses

pub mod extract;
pub mod metrics;
pub mod views;
pub mod wizard;

use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

pub use self::extract::FormJson;
pub use self::metrics::{api_metrics_handler, health_handler, metrics_handler};
pub use self::views::{
    custom_wms_map_handler, leaflet_introduction_handler, show_wms_details_handler,
    whats_next_handler,
};
pub use self::wizard::{
    layer_options_handler, next_step_handler, previous_step_handler, set_sample_wms_handler,
    steps_handler, LayerOptionsResponse, StepResponse,
};

/// Build the service router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Wizard
        .route("/api/steps", get(steps_handler))
        .route("/api/steps/:step/next", post(next_step_handler))
        .route("/api/steps/:step/previous", post(previous_step_handler))
        .route("/api/options/layer_options", post(layer_options_handler))
        .route("/api/buttons/set_sample_wms", post(set_sample_wms_handler))
        // Views
        .route(
            "/api/views/leaflet_introduction",
            post(leaflet_introduction_handler),
        )
        .route("/api/views/show_wms_details", post(show_wms_details_handler))
        .route("/api/views/custom_wms_map", post(custom_wms_map_handler))
        .route("/api/views/whats_next", get(whats_next_handler))
        // Health and metrics
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route("/api/metrics", get(api_metrics_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}
