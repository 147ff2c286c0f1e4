//! Typed errors and HTTP mapping.

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: {message}")]
    InvalidValue { var: &'static str, message: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("payload too large")]
    PayloadTooLarge,
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("storage: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Full text of a server-side failure, attached to 500 responses as an
/// extension. Only [`developer_diagnostics`] ever puts it on the wire.
#[derive(Clone, Debug)]
pub struct ErrorDiagnostic(pub String);

const INTERNAL_MESSAGE: &str = "An internal server error occurred.";

fn error_response(status: StatusCode, code: &str, message: String, details: Option<serde_json::Value>) -> Response {
    let body = ErrorBody {
        error: ErrorDetail {
            code: code.to_string(),
            message,
            details,
        },
    };
    (status, Json(body)).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = match &self {
            AppError::NotFound(_) | AppError::Db(sqlx::Error::RowNotFound) => {
                return StatusCode::NOT_FOUND.into_response();
            }
            AppError::Validation(_) => {
                return error_response(StatusCode::BAD_REQUEST, "validation_error", self.to_string(), None);
            }
            AppError::BadRequest(_) => {
                return error_response(StatusCode::BAD_REQUEST, "bad_request", self.to_string(), None);
            }
            AppError::PayloadTooLarge => {
                return error_response(StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large", self.to_string(), None);
            }
            AppError::Config(_) => "config_error",
            AppError::Db(_) => "database_error",
            AppError::Io(_) => "storage_error",
        };
        tracing::error!(error = %self, "request failed");
        let mut response = error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            code,
            INTERNAL_MESSAGE.to_string(),
            None,
        );
        response
            .extensions_mut()
            .insert(ErrorDiagnostic(self.to_string()));
        response
    }
}

/// Development-only layer: rewrites generic 500 bodies to include the
/// underlying error text.
pub async fn developer_diagnostics(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let response = next.run(req).await;
    let Some(ErrorDiagnostic(message)) = response.extensions().get::<ErrorDiagnostic>().cloned() else {
        return response;
    };
    error_response(
        response.status(),
        "internal_error",
        message,
        Some(serde_json::json!({
            "method": method.as_str(),
            "path": uri.path(),
        })),
    )
}
