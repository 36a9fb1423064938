use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError},
    posts::{
        dtos::edit_post_dto::EditPostDto,
        enums::sort_order::SortOrder,
        models::post::{NewPost, Post},
    },
};

use super::PostRepository;

pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn internal_error(e: sqlx::Error) -> ApiError {
    tracing::error!(%e);
    DefaultApiError::InternalServerError.value()
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn create(&self, post: &NewPost) -> Result<Post, ApiError> {
        let sqlx_result = sqlx::query_as::<_, Post>(
            "
            INSERT INTO posts (
                title, content
            )
            VALUES ($1, $2)
            RETURNING *
            ",
        )
        .bind(&post.title)
        .bind(&post.content)
        .fetch_one(&self.pool)
        .await;

        match sqlx_result {
            Ok(post) => Ok(post),
            Err(e) => Err(internal_error(e)),
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, ApiError> {
        sqlx::query_as::<_, Post>(
            "
            SELECT * FROM posts
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(internal_error)
    }

    async fn find_page(
        &self,
        offset: i64,
        limit: i64,
        order: SortOrder,
    ) -> Result<Vec<Post>, ApiError> {
        let sql = [
            "SELECT * FROM posts ORDER BY id ",
            order.value(),
            " LIMIT $1 OFFSET $2",
        ]
        .concat();

        tracing::debug!(%sql);

        sqlx::query_as::<_, Post>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(internal_error)
    }

    async fn update(&self, id: i64, dto: &EditPostDto) -> Result<Option<Post>, ApiError> {
        let mut tx = self.pool.begin().await.map_err(internal_error)?;

        let current = sqlx::query_as::<_, Post>(
            "
            SELECT * FROM posts
            WHERE id = $1
            FOR UPDATE
            ",
        )
        .bind(id)
        .fetch_optional(&mut tx)
        .await
        .map_err(internal_error)?;

        // dropping the transaction rolls it back
        let Some(current) = current
        else {
            return Ok(None);
        };

        let editor = current.to_editor().merge(dto);

        let post = sqlx::query_as::<_, Post>(
            "
            UPDATE posts
            SET title = $1, content = $2
            WHERE id = $3
            RETURNING *
            ",
        )
        .bind(&editor.title)
        .bind(&editor.content)
        .bind(id)
        .fetch_one(&mut tx)
        .await
        .map_err(internal_error)?;

        tx.commit().await.map_err(internal_error)?;

        Ok(Some(post))
    }

    async fn delete(&self, id: i64) -> Result<bool, ApiError> {
        let mut tx = self.pool.begin().await.map_err(internal_error)?;

        let current = sqlx::query_as::<_, Post>(
            "
            SELECT * FROM posts
            WHERE id = $1
            FOR UPDATE
            ",
        )
        .bind(id)
        .fetch_optional(&mut tx)
        .await
        .map_err(internal_error)?;

        if current.is_none() {
            return Ok(false);
        }

        sqlx::query(
            "
            DELETE FROM posts
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&mut tx)
        .await
        .map_err(internal_error)?;

        tx.commit().await.map_err(internal_error)?;

        Ok(true)
    }

    async fn count(&self) -> Result<i64, ApiError> {
        let sqlx_result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await;

        match sqlx_result {
            Ok(count) => Ok(count),
            Err(e) => Err(internal_error(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use sqlx::postgres::PgPoolOptions;

    use super::*;

    async fn repository() -> PgPostRepository {
        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for this test");
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .connect(&database_url)
            .await
            .expect("failed to connect to database");

        PgPostRepository::new(pool)
    }

    #[tokio::test]
    #[ignore = "Requires PostgreSQL database"]
    async fn update_merges_inside_transaction() {
        let repository = repository().await;
        let post = repository
            .create(&NewPost {
                title: "title".to_string(),
                content: Some("content".to_string()),
            })
            .await
            .unwrap();

        let dto = EditPostDto {
            title: Some("edited title".to_string()),
            content: None,
        };
        let edited = repository.update(post.id, &dto).await.unwrap().unwrap();

        assert_eq!(edited.id, post.id);
        assert_eq!(edited.title, "edited title");
        assert_eq!(edited.content.as_deref(), Some("content"));

        assert!(repository.delete(post.id).await.unwrap());
    }

    #[tokio::test]
    #[ignore = "Requires PostgreSQL database"]
    async fn delete_of_missing_post_changes_nothing() {
        let repository = repository().await;
        let before = repository.count().await.unwrap();

        assert!(!repository.delete(i64::MAX).await.unwrap());
        assert_eq!(repository.count().await.unwrap(), before);
    }
}
