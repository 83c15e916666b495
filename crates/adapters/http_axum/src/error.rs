//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use cafeshop_domain::error::{CafeShopError, FieldError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    details: Vec<FieldError>,
}

/// Maps failures to an HTTP response with appropriate status code.
pub enum ApiError {
    /// A use-case failed.
    Domain(CafeShopError),
    /// The request body was not acceptable JSON.
    Body(JsonRejection),
}

impl From<CafeShopError> for ApiError {
    fn from(err: CafeShopError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            Self::Domain(CafeShopError::Validation(err)) => (
                StatusCode::BAD_REQUEST,
                err.to_string(),
                err.field_errors().to_vec(),
            ),
            Self::Domain(CafeShopError::NotFound(err)) => {
                (StatusCode::NOT_FOUND, err.to_string(), Vec::new())
            }
            Self::Domain(CafeShopError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                    Vec::new(),
                )
            }
            Self::Body(rejection) => (rejection.status(), rejection.body_text(), Vec::new()),
        };

        (status, Json(ErrorBody { error, details })).into_response()
    }
}
