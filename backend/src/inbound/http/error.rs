//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent JSON responses and status
//! codes. Malformed JSON bodies are routed through the same envelope by
//! [`json_config`].

use actix_web::error::JsonPayloadError;
use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};
use serde_json::{error::Category, json};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        let mut redacted = Error::internal("Internal server error");
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self.code(), ErrorCode::InternalError) {
            error!(error = %self, trace_id = ?self.trace_id(), "internal error");
        }
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact_if_internal(self))
    }
}

/// Recover the envelope from an extractor failure.
///
/// Body errors raised under [`json_config`] already wrap a domain [`Error`]
/// and come back unchanged. Anything else becomes a redacted internal error.
impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        if let Some(domain) = err.as_error::<Self>() {
            return domain.clone();
        }
        error!(error = %err, "actix error promoted to domain error");
        Self::internal("Internal server error")
    }
}

fn json_payload_error(err: &JsonPayloadError) -> Error {
    match err {
        JsonPayloadError::Deserialize(inner) => {
            let code = match inner.classify() {
                Category::Data => "invalid_field",
                Category::Io | Category::Syntax | Category::Eof => "malformed_json",
            };
            Error::invalid_request(inner.to_string()).with_details(json!({ "code": code }))
        }
        JsonPayloadError::ContentType => {
            Error::invalid_request("request body must be application/json")
                .with_details(json!({ "code": "unsupported_content_type" }))
        }
        other => Error::invalid_request(other.to_string())
            .with_details(json!({ "code": "invalid_body" })),
    }
}

/// JSON extractor configuration that reports body failures as
/// `invalid_request` errors using the shared envelope.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use recipe_api::inbound::http::json_config;
///
/// let app = App::new().app_data(json_config());
/// ```
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| actix_web::Error::from(json_payload_error(&err)))
}
