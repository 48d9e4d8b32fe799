use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::utils::response::error_view;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    NotFound {
        id: i32,
        message: String,
        redirect: String,
    },

    #[error("{message}")]
    Conflict { message: String, redirect: String },

    #[error("Database error")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn not_found(id: i32, message: impl Into<String>, redirect: impl Into<String>) -> Self {
        AppError::NotFound {
            id,
            message: message.into(),
            redirect: redirect.into(),
        }
    }

    pub fn conflict(message: impl Into<String>, redirect: impl Into<String>) -> Self {
        AppError::Conflict {
            message: message.into(),
            redirect: redirect.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound { .. } => "NOT_FOUND",
            AppError::Conflict { .. } => "CONFLICT",
            AppError::Database(_) => "DATABASE_ERROR",
        }
    }

    fn log(&self) {
        match self {
            AppError::NotFound { message, .. } | AppError::Conflict { message, .. } => {
                error!(error = ?self, message = %message, "Request rejected");
            }
            AppError::Database(e) => {
                error!(error = ?e, "Database error");
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        // Log internal details
        self.log();

        // The rendered error view carries the message and the suggested next
        // action; database detail stays in the logs.
        let (public_message, redirect) = match self {
            AppError::NotFound {
                message, redirect, ..
            }
            | AppError::Conflict { message, redirect } => (message, redirect),
            AppError::Database(_) => (
                "A database error occurred".to_string(),
                "/events/index".to_string(),
            ),
        };

        error_view(code, public_message, redirect, status)
    }
}
