use axum::{extract::State, Json};
use serde_json::{json, Value};
use validator::Validate;

use crate::{
    app::{
        errors::DefaultApiError,
        models::api_error::ApiError,
        structs::{
            json_from_request::JsonFromRequest, path_from_request::PathFromRequest,
            query_from_request::QueryFromRequest,
        },
    },
    AppState,
};

use super::{
    dtos::{
        create_post_dto::CreatePostDto, edit_post_dto::EditPostDto,
        get_posts_filter_dto::GetPostsFilterDto,
    },
    models::post_response::PostResponse,
    service,
};

// GET with a body only runs the structural validation of a create payload.
pub async fn validate_post(
    JsonFromRequest(dto): JsonFromRequest<CreatePostDto>,
) -> Result<Json<Value>, ApiError> {
    if let Err(e) = dto.validate() {
        return Err(DefaultApiError::InvalidRequest(e).value());
    }

    Ok(Json(json!({})))
}

pub async fn create_post(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<CreatePostDto>,
) -> Result<(), ApiError> {
    if let Err(e) = dto.validate() {
        return Err(DefaultApiError::InvalidRequest(e).value());
    }

    if let Err(e) = dto.validate_title() {
        return Err(e.value());
    }

    match service::create_post(&dto, state.repository.as_ref()).await {
        Ok(_) => Ok(()),
        Err(e) => Err(e),
    }
}

pub async fn get_post_by_id(
    State(state): State<AppState>,
    PathFromRequest(id): PathFromRequest<i64>,
) -> Result<Json<PostResponse>, ApiError> {
    match service::get_post_by_id(id, state.repository.as_ref()).await {
        Ok(post) => Ok(Json(post)),
        Err(e) => Err(e),
    }
}

pub async fn get_posts(
    State(state): State<AppState>,
    QueryFromRequest(dto): QueryFromRequest<GetPostsFilterDto>,
) -> Result<Json<Vec<PostResponse>>, ApiError> {
    match service::get_posts(&dto, state.repository.as_ref()).await {
        Ok(posts) => Ok(Json(posts)),
        Err(e) => Err(e),
    }
}

pub async fn edit_post_by_id(
    State(state): State<AppState>,
    PathFromRequest(id): PathFromRequest<i64>,
    JsonFromRequest(dto): JsonFromRequest<EditPostDto>,
) -> Result<(), ApiError> {
    service::edit_post_by_id(id, &dto, state.repository.as_ref()).await
}

pub async fn delete_post_by_id(
    State(state): State<AppState>,
    PathFromRequest(id): PathFromRequest<i64>,
) -> Result<(), ApiError> {
    service::delete_post_by_id(id, state.repository.as_ref()).await
}
