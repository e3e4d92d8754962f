//! Author model and DTOs.

use scribble_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `authors` table. Owns zero or more posts via
/// `posts.author_id`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Author {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// DTO for creating an author.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAuthor {
    pub name: String,
}

/// DTO for updating an author. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAuthor {
    pub name: Option<String>,
}
