//! HTTP adapter mapping for classified domain errors.
//!
//! Purpose: keep [`ClassifiedError`] HTTP-agnostic while allowing Actix
//! handlers to turn pipeline failures into responses. The status is taken
//! verbatim from the classification and the body is the message encoded as a
//! bare JSON string.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::warn;

use crate::domain::{ClassifiedError, TRACE_ID_HEADER, TraceId};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ClassifiedError>;

impl ResponseError for ClassifiedError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status()).unwrap_or_else(|_| {
            warn!(status = self.status(), "classified status is not a valid HTTP status");
            StatusCode::INTERNAL_SERVER_ERROR
        })
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = TraceId::current() {
            builder.insert_header((TRACE_ID_HEADER, id.to_string()));
        }
        builder.json(self.message())
    }
}
