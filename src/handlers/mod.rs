// src/handlers/mod.rs

use axum::http::{Method, Uri};

use crate::error::AppError;

pub mod category;
pub mod question;
pub mod quiz;

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

/// Fallback for known routes called with an unsupported verb.
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed(format!("{} {}", method, uri.path()))
}
