use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Everything a request can fail with, mapped onto the HTTP surface.
///
/// Client input errors and not-found are ordinary outcomes; storage failures
/// carry the underlying sqlx error text through to the 500 body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Both 'url' and 'shortcode' are required")]
    MissingFields,

    #[error("Invalid shortcode format")]
    InvalidShortcode,

    #[error("Shortcode not found")]
    NotFound,

    #[error("Access denied")]
    AccessDenied,

    #[error("Stored URL is not a valid redirect target")]
    InvalidRedirectTarget,

    #[error("{0}")]
    Storage(#[from] sqlx::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingFields | ApiError::InvalidShortcode => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::AccessDenied => StatusCode::FORBIDDEN,
            ApiError::InvalidRedirectTarget => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Storage(ref e) = self {
            tracing::error!("storage error: {:?}", e);
        }

        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(ApiError::MissingFields.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidShortcode.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::AccessDenied.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError::InvalidRedirectTarget.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Storage(sqlx::Error::PoolClosed).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn messages_match_the_api_contract() {
        assert_eq!(
            ApiError::MissingFields.to_string(),
            "Both 'url' and 'shortcode' are required"
        );
        assert_eq!(ApiError::NotFound.to_string(), "Shortcode not found");
        assert_eq!(ApiError::AccessDenied.to_string(), "Access denied");
    }
}
