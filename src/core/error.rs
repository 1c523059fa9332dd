//! Typed error handling for the catalog service
//!
//! Every failure a request can hit is a [`CatalogError`]. Handlers return
//! it directly; the [`IntoResponse`] impl turns it into a status code and
//! an `{ "error": "..." }` body.
//!
//! # Error Categories
//!
//! - `StoreUnavailable`: the backing database or snapshot directory could
//!   not be opened. Only raised at startup and fatal there.
//! - `ReferentialGap`: a cross-entity reference does not resolve.
//! - `EmptyCatalog`: no pizza types to pick a pizza of the day from.
//! - `NotFound`: the requested entity does not exist.
//! - `Storage`: a read against a live backend failed mid-request.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog store '{location}' is unavailable: {reason}")]
    StoreUnavailable { location: String, reason: String },

    #[error("{referrer} references unknown {entity} '{key}'")]
    ReferentialGap {
        referrer: String,
        entity: &'static str,
        key: String,
    },

    #[error("No pizza types available")]
    EmptyCatalog,

    #[error("{entity} '{key}' not found")]
    NotFound { entity: &'static str, key: String },

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Error body returned to HTTP clients
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl CatalogError {
    pub fn store_unavailable(location: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        CatalogError::StoreUnavailable {
            location: location.into(),
            reason: reason.to_string(),
        }
    }

    pub fn order_not_found(key: impl Into<String>) -> Self {
        CatalogError::NotFound {
            entity: "Order",
            key: key.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::NotFound { .. } => StatusCode::NOT_FOUND,
            CatalogError::StoreUnavailable { .. }
            | CatalogError::ReferentialGap { .. }
            | CatalogError::EmptyCatalog
            | CatalogError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable code for logs and programmatic matching
    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::StoreUnavailable { .. } => "STORE_UNAVAILABLE",
            CatalogError::ReferentialGap { .. } => "REFERENTIAL_GAP",
            CatalogError::EmptyCatalog => "EMPTY_CATALOG",
            CatalogError::NotFound { .. } => "NOT_FOUND",
            CatalogError::Storage(_) => "STORAGE_ERROR",
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
        }
    }
}

impl From<anyhow::Error> for CatalogError {
    fn from(err: anyhow::Error) -> Self {
        CatalogError::Storage(format!("{:#}", err))
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(code = self.error_code(), "{}", self);
        } else {
            tracing::debug!(code = self.error_code(), "{}", self);
        }

        (status, Json(self.to_response())).into_response()
    }
}
