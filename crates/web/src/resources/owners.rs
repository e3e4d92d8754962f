//! The owners resource. An owner form may carry a `pet` group; a non-empty
//! pet name appends a new pet to the owner's collection.

use async_trait::async_trait;
use sqlx::PgPool;
use tera::Context;

use scribble_core::types::DbId;
use scribble_db::models::owner::{CreateOwner, Owner, UpdateOwner};
use scribble_db::models::pet::CreatePet;
use scribble_db::repositories::{OwnerRepo, PetRepo};

use crate::error::AppResult;
use crate::forms::FieldGroup;
use crate::resource::{Resource, View};

pub struct Owners;

#[async_trait]
impl Resource for Owners {
    const SINGULAR: &'static str = "owner";
    const PLURAL: &'static str = "owners";
    const ENTITY: &'static str = "Owner";
    const NESTED: &'static str = "pet";
    const NESTED_GATE: &'static str = "name";

    type Row = Owner;

    fn id(row: &Owner) -> DbId {
        row.id
    }

    async fn create(pool: &PgPool, form: &FieldGroup<'_>) -> AppResult<Owner> {
        let input = CreateOwner {
            name: form.require("name")?.to_string(),
        };
        Ok(OwnerRepo::create(pool, &input).await?)
    }

    async fn find(pool: &PgPool, id: DbId) -> Result<Option<Owner>, sqlx::Error> {
        OwnerRepo::find_by_id(pool, id).await
    }

    async fn all(pool: &PgPool) -> Result<Vec<Owner>, sqlx::Error> {
        OwnerRepo::list_all(pool).await
    }

    async fn update(pool: &PgPool, id: DbId, form: &FieldGroup<'_>) -> AppResult<Option<Owner>> {
        let input = UpdateOwner {
            name: form.get("name").map(str::to_string),
        };
        Ok(OwnerRepo::update(pool, id, &input).await?)
    }

    async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        OwnerRepo::delete(pool, id).await
    }

    async fn attach_nested(pool: &PgPool, row: &Owner, nested: &FieldGroup<'_>) -> AppResult<()> {
        let input = CreatePet {
            name: nested.require("name")?.to_string(),
            owner_id: Some(row.id),
        };
        PetRepo::create(pool, &input).await?;
        Ok(())
    }

    async fn extend_context(
        pool: &PgPool,
        view: View,
        row: Option<&Owner>,
        ctx: &mut Context,
    ) -> AppResult<()> {
        if let (View::Show, Some(owner)) = (view, row) {
            ctx.insert("pets", &PetRepo::list_for_owner(pool, owner.id).await?);
        }
        Ok(())
    }
}
