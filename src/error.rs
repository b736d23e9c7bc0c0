use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Invalid slot: {0}")]
    InvalidSlot(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error")]
    InternalError(String),
}

impl From<mealboard_shared::Error> for AppError {
    fn from(err: mealboard_shared::Error) -> Self {
        use mealboard_shared::Error;

        match err {
            Error::Validate(errors) => AppError::ValidationError(errors),
            Error::InvalidSlot(msg) => AppError::InvalidSlot(msg),
            Error::NotFound(msg) => AppError::NotFound(msg),
            Error::Server(msg) => AppError::InternalError(msg),
            Error::Unknown(e) => AppError::InternalError(e.to_string()),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<BTreeMap<String, Vec<String>>>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, body) = match self {
            AppError::ValidationError(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorBody {
                    error: "Validation Error",
                    message: "Please fix the highlighted fields.".to_string(),
                    details: Some(mealboard_shared::field_messages(&errors)),
                },
            ),
            AppError::InvalidSlot(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "Invalid Slot",
                    message: msg,
                    details: None,
                },
            ),
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: "Not Found",
                    message: msg,
                    details: None,
                },
            ),
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "Internal Server Error",
                        message: "An unexpected error occurred. Please try again later."
                            .to_string(),
                        details: None,
                    },
                )
            }
        };

        (status_code, Json(body)).into_response()
    }
}
