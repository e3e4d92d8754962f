//! Post model and DTOs.

use scribble_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `posts` table.
///
/// `author_id` is nullable and unconstrained: a post may exist without an
/// author, and deleting an author leaves the id dangling.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    pub id: DbId,
    pub title: String,
    pub body: String,
    pub author_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// DTO for creating a post.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePost {
    pub title: String,
    pub body: String,
    pub author_id: Option<DbId>,
}

/// DTO for updating a post. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePost {
    pub title: Option<String>,
    pub body: Option<String>,
}
