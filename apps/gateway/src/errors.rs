#![allow(dead_code)]

use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant becomes the uniform `{"status":"error","message":...}`
/// envelope: credential and payload problems are client errors (400),
/// anything that fails while generating a response is a server error (500).
#[derive(Debug, Error)]
pub enum AppError {
    /// The process was started without a provider credential.
    #[error("OpenAI API key not found. Please set it in the .env file.")]
    MissingCredential,

    /// A required field was absent or empty, or the body was not valid JSON.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The completion call failed after validation passed.
    #[error("{0}")]
    Completion(String),

    /// Any other failure during handling.
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingCredential => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Completion(msg) => {
                tracing::error!("completion failed: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            AppError::Internal(e) => {
                tracing::error!("internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "status": "error",
            "message": message
        }));

        (status, body).into_response()
    }
}

/// JSON extractor whose rejection is an [`AppError`], so a body that is
/// missing, unparsable, or lacking a required field answers with the same
/// 400 error envelope as every other validation failure.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}
