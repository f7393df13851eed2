//! HTTP response mapping for application errors
//!
//! Rejected image requests answer with a bare status code and an empty
//! body. Server-side failures are logged and answered with 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::errors::{AppError, ImageRequestError};

impl ImageRequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ImageRequestError::InvalidDimension { .. } => StatusCode::NOT_FOUND,
            ImageRequestError::DimensionTooLarge { .. } => StatusCode::FORBIDDEN,
            ImageRequestError::InvalidSquareValue { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ImageRequest(e) => e.status_code(),
            AppError::Render { .. }
            | AppError::Configuration { .. }
            | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        } else {
            warn!(error = %self, status = status.as_u16(), "Request rejected");
        }
        status.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::from(ImageRequestError::invalid_dimension("width", "0")).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(ImageRequestError::too_large("height", 2500, 2000)).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::from(ImageRequestError::invalid_square("-1")).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::render("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_error_body_is_empty() {
        let response = AppError::from(ImageRequestError::invalid_square("x")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }
}
