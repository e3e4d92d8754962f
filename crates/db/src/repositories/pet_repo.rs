//! Repository for the `pets` table.
//!
//! Pets are only ever written through the owners controller, but the
//! repository carries the full CRUD surface like every other entity.

use scribble_core::types::DbId;
use sqlx::PgPool;

use crate::models::pet::{CreatePet, Pet, UpdatePet};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, owner_id, created_at";

/// Provides CRUD operations for pets.
pub struct PetRepo;

impl PetRepo {
    /// Insert a new pet, returning the created row. Passing an `owner_id`
    /// appends the pet to that owner's collection.
    pub async fn create(pool: &PgPool, input: &CreatePet) -> Result<Pet, sqlx::Error> {
        let query =
            format!("INSERT INTO pets (name, owner_id) VALUES ($1, $2) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Pet>(&query)
            .bind(&input.name)
            .bind(input.owner_id)
            .fetch_one(pool)
            .await
    }

    /// Find a pet by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Pet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pets WHERE id = $1");
        sqlx::query_as::<_, Pet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all pets in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Pet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pets ORDER BY id");
        sqlx::query_as::<_, Pet>(&query).fetch_all(pool).await
    }

    /// List an owner's pets in insertion order.
    pub async fn list_for_owner(pool: &PgPool, owner_id: DbId) -> Result<Vec<Pet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pets WHERE owner_id = $1 ORDER BY id");
        sqlx::query_as::<_, Pet>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Update a pet. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePet,
    ) -> Result<Option<Pet>, sqlx::Error> {
        let query = format!(
            "UPDATE pets SET
                name = COALESCE($2, name),
                owner_id = COALESCE($3, owner_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pet>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a pet by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
