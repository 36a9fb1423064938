use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    app::models::api_error::ApiError,
    posts::{
        dtos::edit_post_dto::EditPostDto,
        enums::sort_order::SortOrder,
        models::post::{NewPost, Post},
    },
};

use super::PostRepository;

#[derive(Default)]
struct MemoryState {
    posts: BTreeMap<i64, Post>,
    last_id: i64,
}

/// `PostRepository` kept in process memory. Writers hold the lock for the
/// whole read-modify-write so edits and deletes stay atomic.
#[derive(Default)]
pub struct MemoryPostRepository {
    state: RwLock<MemoryState>,
}

impl MemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for MemoryPostRepository {
    async fn create(&self, post: &NewPost) -> Result<Post, ApiError> {
        let mut state = self.state.write().await;
        state.last_id += 1;

        let post = Post {
            id: state.last_id,
            title: post.title.to_string(),
            content: post.content.to_owned(),
        };
        state.posts.insert(post.id, post.clone());

        Ok(post)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, ApiError> {
        Ok(self.state.read().await.posts.get(&id).cloned())
    }

    async fn find_page(
        &self,
        offset: i64,
        limit: i64,
        order: SortOrder,
    ) -> Result<Vec<Post>, ApiError> {
        let state = self.state.read().await;
        let skip = offset.max(0) as usize;
        let take = limit.max(0) as usize;

        let posts: Vec<Post> = match order {
            SortOrder::Asc => state
                .posts
                .values()
                .skip(skip)
                .take(take)
                .cloned()
                .collect(),
            SortOrder::Desc => state
                .posts
                .values()
                .rev()
                .skip(skip)
                .take(take)
                .cloned()
                .collect(),
        };

        Ok(posts)
    }

    async fn update(&self, id: i64, dto: &EditPostDto) -> Result<Option<Post>, ApiError> {
        let mut state = self.state.write().await;

        let Some(current) = state.posts.remove(&id)
        else {
            return Ok(None);
        };

        let editor = current.to_editor().merge(dto);
        let post = current.edit(editor);
        state.posts.insert(id, post.clone());

        Ok(Some(post))
    }

    async fn delete(&self, id: i64) -> Result<bool, ApiError> {
        Ok(self.state.write().await.posts.remove(&id).is_some())
    }

    async fn count(&self) -> Result<i64, ApiError> {
        Ok(self.state.read().await.posts.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_post(i: usize) -> NewPost {
        NewPost {
            title: format!("title {}", i),
            content: Some(format!("content {}", i)),
        }
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let repository = MemoryPostRepository::new();
        let first = repository.create(&new_post(0)).await.unwrap();

        assert!(repository.delete(first.id).await.unwrap());

        let second = repository.create(&new_post(1)).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn find_page_orders_by_id() {
        let repository = MemoryPostRepository::new();
        for i in 0..5 {
            repository.create(&new_post(i)).await.unwrap();
        }

        let desc = repository.find_page(1, 2, SortOrder::Desc).await.unwrap();
        let asc = repository.find_page(0, 2, SortOrder::Asc).await.unwrap();

        assert_eq!(desc.iter().map(|p| p.id).collect::<Vec<_>>(), vec![4, 3]);
        assert_eq!(asc.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);
    }
}
