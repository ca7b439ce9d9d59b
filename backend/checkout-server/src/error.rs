use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain_types::errors::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid configuration: {0}")]
    ConfigError(#[from] config::ConfigError),
    #[error("Error while setting up logging: {0}")]
    LoggerError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors of the JSON endpoints. The redirect endpoints never fail, they notify instead.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No basket found for the session")]
    BasketNotFound,
    #[error("Internal server error")]
    InternalServerError,
}

#[derive(Debug, serde::Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BasketNotFound => StatusCode::NOT_FOUND,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<error_stack::Report<StorageError>> for ApiError {
    fn from(report: error_stack::Report<StorageError>) -> Self {
        tracing::error!(error = ?report, "storefront storage failed");
        match report.current_context() {
            StorageError::BasketNotFound(_) => Self::BasketNotFound,
            StorageError::SessionNotFound(_) | StorageError::OrderFinalizationFailed(_) => {
                Self::InternalServerError
            }
        }
    }
}
