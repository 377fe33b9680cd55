//! View endpoints.

use std::sync::Arc;

use axum::{extract::Extension, response::Html, Json};
use tracing::instrument;

use crate::data::DataResult;
use crate::error::AppError;
use crate::handlers::extract::FormJson;
use crate::params::FormParams;
use crate::state::AppState;
use crate::views;

/// POST /api/views/leaflet_introduction
#[instrument(skip_all)]
pub async fn leaflet_introduction_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Html<String>, AppError> {
    let html = views::leaflet_introduction(&state.config)?;
    state.metrics.record_render("leaflet_introduction");
    Ok(Html(html))
}

/// POST /api/views/show_wms_details
#[instrument(skip_all)]
pub async fn show_wms_details_handler(
    Extension(state): Extension<Arc<AppState>>,
    FormJson(params): FormJson<FormParams>,
) -> Result<Json<DataResult>, AppError> {
    Ok(Json(views::show_wms_details(&state.connector, &params).await?))
}

/// POST /api/views/custom_wms_map
#[instrument(skip_all)]
pub async fn custom_wms_map_handler(
    Extension(state): Extension<Arc<AppState>>,
    FormJson(params): FormJson<FormParams>,
) -> Result<Html<String>, AppError> {
    let html = views::custom_wms_map(&state.connector, &state.config, &params).await?;
    state.metrics.record_render("custom_wms_map");
    Ok(Html(html))
}

/// GET /api/views/whats_next
pub async fn whats_next_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Html<String>, AppError> {
    Ok(Html(views::whats_next(&state.config).await?))
}
