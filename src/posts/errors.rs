use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum PostsApiError {
    PostNotFound,
    InvalidRequest {
        field: &'static str,
        message: &'static str,
    },
}

impl PostsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::PostNotFound => ApiError::new(StatusCode::NOT_FOUND, "Post does not exist."),
            Self::InvalidRequest { field, message } => {
                let mut api_error = ApiError::new(StatusCode::BAD_REQUEST, "Invalid request.");
                api_error.add_validation(field, message);
                api_error
            }
        }
    }
}
