//! HTTP error responses and their status code mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::error::EduforgeError;

/// Error body returned on every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Wrapper that turns crate errors into `{error}` JSON responses.
#[derive(Debug)]
pub struct ApiError(pub EduforgeError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<EduforgeError> for ApiError {
    fn from(err: EduforgeError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.0.to_string();
        if status.is_client_error() {
            warn!(%status, error = %message, "rejected request");
        } else {
            error!(%status, error = %message, "request failed");
        }
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let err = ApiError(EduforgeError::MissingField("topic"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err = ApiError(EduforgeError::CountOutOfRange {
            count: 40,
            min: 1,
            max: 20,
        });
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err = ApiError(EduforgeError::Config("broken".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_json_errors_are_bad_requests() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ApiError = EduforgeError::from(json_err).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.0.to_string().starts_with("Invalid JSON body"));
    }
}
