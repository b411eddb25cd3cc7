//! Error-to-HTTP response conversion.
//!
//! Implements `IntoResponse` for [`rh_core::Error`] so that route handlers
//! can return `Result<T, AppError>` and use `?` on catalog calls.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::middleware::request_id::RequestId;

/// Wrapper so we can implement `IntoResponse` for an external type.
#[derive(Debug)]
pub struct AppError {
    inner: rh_core::Error,
    request_id: Option<String>,
}

impl AppError {
    pub fn new(inner: rh_core::Error) -> Self {
        Self {
            inner,
            request_id: None,
        }
    }

    pub fn with_request_id(mut self, id: String) -> Self {
        self.request_id = Some(id);
        self
    }

    /// Closure for `map_err` that tags an error with the current request id.
    pub fn tagged(request_id: &RequestId) -> impl Fn(rh_core::Error) -> AppError + '_ {
        move |e| AppError::new(e).with_request_id(request_id.0.clone())
    }
}

impl From<rh_core::Error> for AppError {
    fn from(e: rh_core::Error) -> Self {
        Self::new(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.inner.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Full detail goes to the log; the body only carries the public message.
        if status.is_server_error() {
            tracing::error!(
                status = %status,
                error = %self.inner,
                request_id = self.request_id.as_deref().unwrap_or("-"),
                "Server error in API handler"
            );
        }

        let body = json!({
            "error": self.inner.public_message(),
            "code": self.inner.code(),
            "request_id": self.request_id,
        });

        (status, axum::Json(body)).into_response()
    }
}
