//! Wizard endpoints: schema, transitions, options and buttons.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    Json,
};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::AppError;
use crate::handlers::extract::FormJson;
use crate::options::layer_options;
use crate::params::FormParams;
use crate::state::AppState;
use crate::wizard::{self, ParamsPatch, Step, StepSchema};

#[derive(Debug, Serialize)]
pub struct StepResponse {
    pub step: Step,
}

#[derive(Debug, Serialize)]
pub struct LayerOptionsResponse {
    pub options: Vec<String>,
}

/// GET /api/steps - Wizard schema
pub async fn steps_handler() -> Json<Vec<StepSchema>> {
    Json(wizard::schema())
}

/// POST /api/steps/:step/next
#[instrument(skip_all)]
pub async fn next_step_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(step): Path<String>,
    FormJson(params): FormJson<FormParams>,
) -> Result<Json<StepResponse>, AppError> {
    let from: Step = step.parse()?;
    let result = wizard::advance(&state.connector, from, &params).await;
    state.metrics.record_transition(from.id(), result.is_ok());
    Ok(Json(StepResponse { step: result? }))
}

/// POST /api/steps/:step/previous
#[instrument(skip_all)]
pub async fn previous_step_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(step): Path<String>,
) -> Result<Json<StepResponse>, AppError> {
    let from: Step = step.parse()?;
    let result = wizard::retreat(from);
    state.metrics.record_transition(from.id(), result.is_ok());
    Ok(Json(StepResponse { step: result? }))
}

/// POST /api/options/layer_options - Never fails, an unreadable body counts as empty
#[instrument(skip_all)]
pub async fn layer_options_handler(
    Extension(state): Extension<Arc<AppState>>,
    body: Result<Json<FormParams>, JsonRejection>,
) -> Json<LayerOptionsResponse> {
    let params = match body {
        Ok(Json(params)) => params,
        Err(rejection) => {
            debug!(error = %rejection.body_text(), "Unreadable option request body");
            FormParams::default()
        }
    };
    Json(LayerOptionsResponse {
        options: layer_options(&state.connector, &params).await,
    })
}

/// POST /api/buttons/set_sample_wms
pub async fn set_sample_wms_handler() -> Json<ParamsPatch> {
    Json(wizard::set_sample_wms())
}
