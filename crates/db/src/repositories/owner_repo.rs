//! Repository for the `owners` table.

use scribble_core::types::DbId;
use sqlx::PgPool;

use crate::models::owner::{CreateOwner, Owner, UpdateOwner};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at";

/// Provides CRUD operations for owners.
pub struct OwnerRepo;

impl OwnerRepo {
    /// Insert a new owner, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateOwner) -> Result<Owner, sqlx::Error> {
        let query = format!("INSERT INTO owners (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Owner>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find an owner by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Owner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM owners WHERE id = $1");
        sqlx::query_as::<_, Owner>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all owners in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Owner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM owners ORDER BY id");
        sqlx::query_as::<_, Owner>(&query).fetch_all(pool).await
    }

    /// Update an owner. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOwner,
    ) -> Result<Option<Owner>, sqlx::Error> {
        let query = format!(
            "UPDATE owners SET name = COALESCE($2, name)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Owner>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete an owner by ID. Returns `true` if a row was removed.
    ///
    /// Pets referencing the owner are not touched; their `owner_id` is
    /// left dangling.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM owners WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
