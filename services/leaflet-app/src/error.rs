//! Service error type and its HTTP mapping.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use map_renderer::RenderError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Shown when the URL cannot be reached or is malformed.
pub const INVALID_URL_MESSAGE: &str =
    "The provided url seems to be incorrect. Please check input for WMS url.";

/// Shown when the URL answers with something other than a WMS capabilities document.
pub const NOT_WMS_MESSAGE: &str =
    "The provided url does not seem to point at a WMS-layer, please check input for WMS url.";

/// Shown when leaving the WMS set-up step without a working WMS.
pub const VALIDATION_MESSAGE: &str =
    "Please enter a valid WMS-url first. Click on the button 'Use sample WMS' for an example.";

#[derive(Debug, Error)]
pub enum AppError {
    /// Message meant for the person filling in the form
    #[error("{0}")]
    User(String),

    #[error("Cannot go {direction} from step '{step}'")]
    InvalidTransition {
        step: String,
        direction: &'static str,
    },

    #[error("Unknown step: {0}")]
    UnknownStep(String),

    #[error("WMS service rejected the request: {0}")]
    Upstream(String),

    #[error("Failed to render map: {0}")]
    Render(#[from] RenderError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn user(message: impl Into<String>) -> Self {
        AppError::User(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::User(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidTransition { .. } => StatusCode::CONFLICT,
            AppError::UnknownStep(_) => StatusCode::NOT_FOUND,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Render(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AppError::User(_) => "user_error",
            AppError::InvalidTransition { .. } => "invalid_transition",
            AppError::UnknownStep(_) => "unknown_step",
            AppError::Upstream(_) => "upstream_error",
            AppError::Render(_) => "render_error",
            AppError::Internal(_) => "internal_error",
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::User(format!("Invalid request body: {}", rejection.body_text()))
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }
        let body = ErrorBody {
            error: self.kind(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
