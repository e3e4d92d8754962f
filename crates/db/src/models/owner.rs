//! Owner model and DTOs.

use scribble_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `owners` table. Owns zero or more pets via
/// `pets.owner_id`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Owner {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// DTO for creating an owner.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOwner {
    pub name: String,
}

/// DTO for updating an owner. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateOwner {
    pub name: Option<String>,
}
