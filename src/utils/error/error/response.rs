//! HTTP response handling for errors

use super::types::TrashError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl ResponseError for TrashError {
    fn status_code(&self) -> StatusCode {
        match self {
            TrashError::Auth(_) => StatusCode::UNAUTHORIZED,
            TrashError::Forbidden(_) => StatusCode::FORBIDDEN,
            TrashError::Serialization(_) => StatusCode::BAD_REQUEST,
            TrashError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (error_code, message) = match self {
            TrashError::Auth(_) => ("AUTH_ERROR", self.to_string()),
            TrashError::Forbidden(_) => ("FORBIDDEN", self.to_string()),
            TrashError::Serialization(_) => ("PARSING_ERROR", self.to_string()),
            TrashError::NotFound(_) => ("NOT_FOUND", self.to_string()),
            TrashError::Config(_) => ("CONFIG_ERROR", self.to_string()),
            TrashError::Store(_) => (
                "STORE_ERROR",
                "Content store operation failed".to_string(),
            ),
            _ => ("INTERNAL_ERROR", "An internal error occurred".to_string()),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
                request_id: None,
            },
        };

        HttpResponse::build(self.status_code()).json(error_response)
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
    pub request_id: Option<String>,
}
