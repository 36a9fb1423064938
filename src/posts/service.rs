use super::{
    dtos::{
        create_post_dto::CreatePostDto, edit_post_dto::EditPostDto,
        get_posts_filter_dto::GetPostsFilterDto,
    },
    errors::PostsApiError,
    models::{post::NewPost, post_response::PostResponse},
    repository::PostRepository,
};
use crate::app::models::api_error::ApiError;

pub async fn create_post(
    dto: &CreatePostDto,
    repository: &dyn PostRepository,
) -> Result<i64, ApiError> {
    let post = repository.create(&NewPost::new(dto)).await?;

    tracing::debug!(id = post.id, "created post");

    Ok(post.id)
}

pub async fn get_post_by_id(
    id: i64,
    repository: &dyn PostRepository,
) -> Result<PostResponse, ApiError> {
    match repository.find_by_id(id).await? {
        Some(post) => Ok(PostResponse::from_post(post)),
        None => Err(PostsApiError::PostNotFound.value()),
    }
}

pub async fn get_posts(
    dto: &GetPostsFilterDto,
    repository: &dyn PostRepository,
) -> Result<Vec<PostResponse>, ApiError> {
    let order = dto.sort_order()?;

    let posts = repository
        .find_page(dto.offset(), dto.limit(), order)
        .await?;

    Ok(posts.into_iter().map(PostResponse::from_post).collect())
}

pub async fn edit_post_by_id(
    id: i64,
    dto: &EditPostDto,
    repository: &dyn PostRepository,
) -> Result<(), ApiError> {
    match repository.update(id, dto).await? {
        Some(_) => Ok(()),
        None => Err(PostsApiError::PostNotFound.value()),
    }
}

pub async fn delete_post_by_id(id: i64, repository: &dyn PostRepository) -> Result<(), ApiError> {
    match repository.delete(id).await? {
        true => Ok(()),
        false => Err(PostsApiError::PostNotFound.value()),
    }
}
