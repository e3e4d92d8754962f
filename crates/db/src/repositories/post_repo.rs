//! Repository for the `posts` table.

use scribble_core::types::DbId;
use sqlx::PgPool;

use crate::models::post::{CreatePost, Post, UpdatePost};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, body, author_id, created_at";

/// Provides CRUD operations for posts.
pub struct PostRepo;

impl PostRepo {
    /// Insert a new post, returning the created row. Passing an
    /// `author_id` appends the post to that author's collection.
    pub async fn create(pool: &PgPool, input: &CreatePost) -> Result<Post, sqlx::Error> {
        let query = format!(
            "INSERT INTO posts (title, body, author_id) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(&input.title)
            .bind(&input.body)
            .bind(input.author_id)
            .fetch_one(pool)
            .await
    }

    /// Find a post by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE id = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all posts in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts ORDER BY id");
        sqlx::query_as::<_, Post>(&query).fetch_all(pool).await
    }

    /// List an author's posts in insertion order.
    pub async fn list_for_author(pool: &PgPool, author_id: DbId) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE author_id = $1 ORDER BY id");
        sqlx::query_as::<_, Post>(&query)
            .bind(author_id)
            .fetch_all(pool)
            .await
    }

    /// Update a post. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePost,
    ) -> Result<Option<Post>, sqlx::Error> {
        let query = format!(
            "UPDATE posts SET
                title = COALESCE($2, title),
                body = COALESCE($3, body)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.body)
            .fetch_optional(pool)
            .await
    }

    /// Point a post at an author. Returns `true` if the post exists.
    pub async fn set_author(
        pool: &PgPool,
        id: DbId,
        author_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE posts SET author_id = $2 WHERE id = $1")
            .bind(id)
            .bind(author_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a post by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
