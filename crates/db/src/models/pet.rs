//! Pet model and DTOs.

use scribble_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `pets` table. `owner_id` is nullable and unconstrained,
/// mirroring `posts.author_id`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Pet {
    pub id: DbId,
    pub name: String,
    pub owner_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// DTO for creating a pet.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePet {
    pub name: String,
    pub owner_id: Option<DbId>,
}

/// DTO for updating a pet. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePet {
    pub name: Option<String>,
    pub owner_id: Option<DbId>,
}
