pub mod appointments;
pub mod export;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use hab_core::HabError;
use serde::Serialize;
use tracing::error;

/// Envelope around every JSON response
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        ApiResponse {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn data_with_message(message: impl Into<String>, data: T) -> Self {
        ApiResponse {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        ApiResponse {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        ApiResponse {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// Convert hab errors to HTTP responses. Clients only ever see the message.
pub struct AppError(HabError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            HabError::Validation(_) => StatusCode::BAD_REQUEST,
            HabError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        }

        (status, Json(ApiResponse::failure(self.0.to_string()))).into_response()
    }
}

impl From<HabError> for AppError {
    fn from(err: HabError) -> Self {
        Self(err)
    }
}
