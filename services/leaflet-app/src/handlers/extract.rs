//! Request extractors.

use axum::{extract::FromRequest, Json};

use crate::error::AppError;

/// JSON body whose rejections answer with the service's error body.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct FormJson<T>(pub T);
