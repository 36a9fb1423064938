use std::sync::Arc;

use async_trait::async_trait;

use crate::app::models::api_error::ApiError;

use super::{
    dtos::edit_post_dto::EditPostDto,
    enums::sort_order::SortOrder,
    models::post::{NewPost, Post},
};

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub type DynPostRepository = Arc<dyn PostRepository>;

/// Storage seam for posts. Implementations assign ids and never reuse them.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, post: &NewPost) -> Result<Post, ApiError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, ApiError>;

    /// Posts ordered by id, skipping `offset` rows and returning at most `limit`.
    async fn find_page(
        &self,
        offset: i64,
        limit: i64,
        order: SortOrder,
    ) -> Result<Vec<Post>, ApiError>;

    /// Merges `dto` onto the stored post as one atomic step.
    /// Returns `None` when no post has this id.
    async fn update(&self, id: i64, dto: &EditPostDto) -> Result<Option<Post>, ApiError>;

    /// Returns `false` when no post has this id.
    async fn delete(&self, id: i64) -> Result<bool, ApiError>;

    async fn count(&self) -> Result<i64, ApiError>;
}
