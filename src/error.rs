// src/error.rs
use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde_json::json;

use crate::repository::RepositoryError;

#[derive(Debug)]
pub enum AppError {
    /// Store failure. `message` is the fixed text the client sees; the source
    /// is only logged.
    DatabaseError {
        message: &'static str,
        source: RepositoryError,
    },
    NotFound(String),
    ValidationError(String),
}

impl AppError {
    pub fn db(message: &'static str, source: RepositoryError) -> Self {
        AppError::DatabaseError { message, source }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::ValidationError(msg.into())
    }

    /// Map a repository failure, keeping a distinct outcome for missing rows.
    pub fn from_repository(message: &'static str, err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(_) => AppError::not_found("Product not found"),
            other => AppError::db(message, other),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::DatabaseError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            AppError::DatabaseError { message, source } => {
                tracing::error!(error = %source, "{message}");
                message.to_string()
            }
            AppError::NotFound(msg) => msg,
            AppError::ValidationError(msg) => msg,
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
