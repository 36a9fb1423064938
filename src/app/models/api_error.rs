use std::collections::HashMap;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::error_response::ErrorResponse;

#[derive(Debug)]
pub struct ApiError {
    pub code: StatusCode,
    pub message: String,
    pub validation: HashMap<String, String>,
}

impl ApiError {
    pub fn new(code: StatusCode, message: &str) -> Self {
        Self {
            code,
            message: message.to_string(),
            validation: HashMap::new(),
        }
    }

    pub fn add_validation(&mut self, field: &str, message: &str) {
        self.validation
            .insert(field.to_string(), message.to_string());
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.code.as_u16().to_string(),
            message: self.message.to_string(),
            validation: self.validation.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code, Json(self.to_response())).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(%rejection);
        ApiError::new(StatusCode::BAD_REQUEST, &rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(%rejection);
        ApiError::new(StatusCode::BAD_REQUEST, "Invalid path parameter.")
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(%rejection);
        ApiError::new(StatusCode::BAD_REQUEST, &rejection.body_text())
    }
}
