//! HTTP mapping of engine errors
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cable_core::{CableError, ErrorKind};
use serde::Serialize;

/// Error returned by every engine endpoint
#[derive(Debug)]
pub struct ApiError(pub CableError);

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: ErrorDetail<'a>,
}

#[derive(Serialize)]
struct ErrorDetail<'a> {
    kind: ErrorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'a str>,
    message: String,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        self.0.kind()
    }

    pub fn status(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Lookup | ErrorKind::NoConformingSize => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::Config => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CableError> for ApiError {
    fn from(err: CableError) -> Self {
        Self(err)
    }
}

/// Malformed JSON, missing fields and unknown enum values are all bad input
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(CableError::validation("body", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (field, message) = match &self.0 {
            CableError::Validation { field, message } => (Some(field.as_str()), message.clone()),
            CableError::Lookup(detail)
            | CableError::NoConformingSize(detail)
            | CableError::Config(detail) => (None, detail.clone()),
        };
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::debug!(error = %self.0, "request rejected");
        }
        let body = ErrorBody {
            error: ErrorDetail {
                kind: self.kind(),
                field,
                message,
            },
        };
        (status, Json(body)).into_response()
    }
}
