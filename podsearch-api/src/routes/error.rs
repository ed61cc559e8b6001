use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use crate::domain::pipeline::PipelineError;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    EmptyQuery,
    MetadataJoinFailed,
    SearchUnavailable,
    CatalogUnavailable,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<ErrorCode>,
}

pub struct ApiError {
    status: StatusCode,
    message: String,
    code: Option<ErrorCode>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
            code: self.code,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        match &err {
            PipelineError::EmptyQuery => {
                Self::bad_request(err.to_string()).with_code(ErrorCode::EmptyQuery)
            }
            PipelineError::MetadataMissing(_) => {
                tracing::error!("metadata join failed: {}", err);
                Self::internal(err.to_string()).with_code(ErrorCode::MetadataJoinFailed)
            }
            PipelineError::SearchUnavailable(_) => {
                tracing::error!("search provider failure: {}", err);
                Self::bad_gateway(err.to_string()).with_code(ErrorCode::SearchUnavailable)
            }
            PipelineError::CatalogUnavailable(_) => {
                tracing::error!("episode catalog failure: {}", err);
                Self::bad_gateway(err.to_string()).with_code(ErrorCode::CatalogUnavailable)
            }
        }
    }
}
