use crate::app::models::api_error::ApiError;
use axum::extract::Path;
use axum_macros::FromRequestParts;

#[derive(FromRequestParts)]
#[from_request(via(Path), rejection(ApiError))]
pub struct PathFromRequest<T>(pub T);
