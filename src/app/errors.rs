use axum::http::StatusCode;
use validator::ValidationErrors;

use super::models::api_error::ApiError;

#[derive(Debug)]
pub enum DefaultApiError {
    InternalServerError,
    InvalidRequest(ValidationErrors),
}

impl DefaultApiError {
    pub fn value(&self) -> ApiError {
        match self {
            Self::InternalServerError => ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal server error occurred.",
            ),
            Self::InvalidRequest(errors) => {
                let mut api_error = ApiError::new(StatusCode::BAD_REQUEST, "Invalid request.");

                for (field, field_errors) in errors.field_errors() {
                    // first failing rule wins
                    let Some(error) = field_errors.first()
                    else {
                        continue;
                    };

                    match &error.message {
                        Some(message) => api_error.add_validation(field, message),
                        None => api_error.add_validation(field, &error.code),
                    }
                }

                api_error
            }
        }
    }
}
