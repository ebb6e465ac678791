use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorPayload,
}

#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{message}")]
    Forbidden {
        status: StatusCode,
        code: &'static str,
        message: &'static str,
    },
    #[error("Resource does not exist.")]
    NotFound,
    #[error("Invalid request body.")]
    InvalidBody(String),
    /// A settings store write failed. Earlier writes of the same update stay
    /// persisted.
    #[error("settings write failed: {0:#}")]
    WriteFailed(anyhow::Error),
    #[error("internal error: {0:#}")]
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Forbidden { status, .. } => *status,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::WriteFailed(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Forbidden { code, .. } => code,
            ApiError::NotFound => "payment_gateway_invalid",
            ApiError::InvalidBody(_) => "payment_gateway_invalid_body",
            ApiError::WriteFailed(_) => "payment_gateway_write_failed",
            ApiError::Internal(_) => "internal_error",
        }
    }

    fn public_message(&self) -> String {
        match self {
            ApiError::WriteFailed(_) => "Could not save payment gateway settings.".to_string(),
            ApiError::Internal(_) => "Internal server error.".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if matches!(self, ApiError::WriteFailed(_) | ApiError::Internal(_)) {
            tracing::error!("{}", self);
        }

        let body = ErrorEnvelope {
            error: ErrorPayload {
                code: self.code().to_string(),
                message: self.public_message(),
                details: match &self {
                    ApiError::InvalidBody(reason) => Some(reason.clone()),
                    _ => None,
                },
            },
        };
        (self.status(), Json(body)).into_response()
    }
}
