use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse,
};

use crate::core::AppError;

/// Helper function to create standardized error responses
pub fn error_response(status_code: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status_code).json(serde_json::json!({
        "error": {
            "code": status_code.as_u16(),
            "message": message.into(),
        }
    }))
}

/// Log an application error at a level matching its severity
pub fn log_error(err: &AppError) {
    match err {
        AppError::Validation(_) => tracing::warn!("Request rejected: {}", err),
        AppError::Configuration(_) => tracing::error!("Request failed: {}", err),
    }
}

/// Error handler for `web::JsonConfig`: malformed bodies get the same
/// envelope as every other error instead of actix's plain-text default
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let status = match &err {
        JsonPayloadError::ContentType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            StatusCode::PAYLOAD_TOO_LARGE
        }
        _ => StatusCode::BAD_REQUEST,
    };

    tracing::warn!(path = %req.path(), "Invalid JSON body: {}", err);

    let response = error_response(status, format!("Invalid request body: {}", err));
    InternalError::from_response(err, response).into()
}
