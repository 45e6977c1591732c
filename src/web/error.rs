use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::StorefrontError;

/// Storefront failure rendered as a plain-text response.
#[derive(Debug)]
pub struct AppError(pub StorefrontError);

impl<E> From<E> for AppError
where
    E: Into<StorefrontError>,
{
    fn from(error: E) -> Self { Self(error.into()) }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            StorefrontError::CartProviderMissing => StatusCode::INTERNAL_SERVER_ERROR,
            StorefrontError::ProductNotFound => StatusCode::NOT_FOUND,
            StorefrontError::OutOfStock => StatusCode::CONFLICT,
            StorefrontError::InvalidProductId(_) => StatusCode::BAD_REQUEST,
            StorefrontError::Checkout(_) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
            return (status, "Internal server error").into_response();
        }
        tracing::debug!(error = %self.0, %status, "request rejected");
        (status, self.0.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregates::CheckoutError;
    use crate::domain::value_objects::ProductId;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::from(StorefrontError::CartProviderMissing).status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(AppError::from(StorefrontError::ProductNotFound).status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::from(StorefrontError::OutOfStock).status(), StatusCode::CONFLICT);
        assert_eq!(AppError::from(CheckoutError::EmptyCart).status(), StatusCode::CONFLICT);
        let bad_id = ProductId::new("").unwrap_err();
        assert_eq!(AppError::from(bad_id).status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_wiring_defect_hides_details() {
        let response = AppError(StorefrontError::CartProviderMissing).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
