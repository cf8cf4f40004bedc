use crate::app_error::{AppError, ErrorCode};
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidCredentials => {
                tracing::debug!("Request unauthorized");
                error_resp(StatusCode::UNAUTHORIZED, ErrorCode::Unauthorized, "unauthorized")
            }
            AppError::Internal(detail) => {
                // The detail stays in the logs; the caller gets a fixed message.
                tracing::error!(error = %detail, "Request failed");
                error_resp(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::InternalError,
                    "internal error",
                )
            }
        }
    }
}

fn error_resp(status: StatusCode, code: ErrorCode, message: &str) -> Response {
    let body = serde_json::json!({ "code": code.as_str(), "message": message });
    (status, Json(body)).into_response()
}
