use super::dto::ErrorResponse;
use crate::error::ReceiptError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid JSON payload")]
    InvalidPayload,
    #[error(transparent)]
    Receipt(#[from] ReceiptError),
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            Self::InvalidPayload => (
                StatusCode::BAD_REQUEST,
                "INVALID_PAYLOAD",
                self.to_string(),
            ),
            Self::Receipt(e) => {
                let code = match e {
                    ReceiptError::InvalidTotal => "INVALID_TOTAL",
                    ReceiptError::InvalidItemPrice => "INVALID_ITEM_PRICE",
                    ReceiptError::InvalidDate => "INVALID_DATE",
                    ReceiptError::InvalidTime => "INVALID_TIME",
                    ReceiptError::PointsOverflow => "POINTS_OVERFLOW",
                    ReceiptError::NotFound(_) => {
                        return (StatusCode::NOT_FOUND, "NOT_FOUND", "Receipt not found".into());
                    }
                    ReceiptError::Store(_) => {
                        return (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            "INTERNAL_ERROR",
                            "Internal server error".into(),
                        );
                    }
                };
                (
                    StatusCode::BAD_REQUEST,
                    code,
                    format!("Error calculating points: {e}"),
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, error) = self.parts();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorResponse {
            error,
            code: code.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
