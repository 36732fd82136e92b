use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

/// Failures reported by a data store while reading rows.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("request to store failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("database error: {0}")]
    Database(String),

    #[error("failed to decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Database(e.to_string())
    }
}

impl From<r2d2::Error> for StoreError {
    fn from(e: r2d2::Error) -> Self {
        Self::Database(format!("connection pool: {}", e))
    }
}

/// Error returned from handlers; only `message` reaches the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// The read operations exposed over HTTP, each with a fixed failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingOperation {
    RegionalRanking,
    GlobalRanking,
    RankingHistory,
}

impl RankingOperation {
    fn label(self) -> &'static str {
        match self {
            Self::RegionalRanking => "regional ranking",
            Self::GlobalRanking => "global ranking",
            Self::RankingHistory => "ranking history",
        }
    }

    pub fn failure_message(self) -> String {
        format!("Failed to fetch {}", self.label())
    }

    /// Logs the store error and replaces it with a generic 500.
    pub fn backend_failure(self, error: StoreError) -> AppError {
        log::error!("Error fetching {}: {}", self.label(), error);
        AppError::internal(self.failure_message())
    }
}
