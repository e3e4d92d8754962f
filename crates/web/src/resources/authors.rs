//! The authors resource. An author form may carry a `post` group; a
//! non-empty title appends a new post to the author's collection.

use async_trait::async_trait;
use sqlx::PgPool;
use tera::Context;

use scribble_core::types::DbId;
use scribble_db::models::author::{Author, CreateAuthor, UpdateAuthor};
use scribble_db::models::post::CreatePost;
use scribble_db::repositories::{AuthorRepo, PostRepo};

use crate::error::AppResult;
use crate::forms::FieldGroup;
use crate::resource::{Resource, View};

pub struct Authors;

#[async_trait]
impl Resource for Authors {
    const SINGULAR: &'static str = "author";
    const PLURAL: &'static str = "authors";
    const ENTITY: &'static str = "Author";
    const NESTED: &'static str = "post";
    const NESTED_GATE: &'static str = "title";

    type Row = Author;

    fn id(row: &Author) -> DbId {
        row.id
    }

    async fn create(pool: &PgPool, form: &FieldGroup<'_>) -> AppResult<Author> {
        let input = CreateAuthor {
            name: form.require("name")?.to_string(),
        };
        Ok(AuthorRepo::create(pool, &input).await?)
    }

    async fn find(pool: &PgPool, id: DbId) -> Result<Option<Author>, sqlx::Error> {
        AuthorRepo::find_by_id(pool, id).await
    }

    async fn all(pool: &PgPool) -> Result<Vec<Author>, sqlx::Error> {
        AuthorRepo::list_all(pool).await
    }

    async fn update(pool: &PgPool, id: DbId, form: &FieldGroup<'_>) -> AppResult<Option<Author>> {
        let input = UpdateAuthor {
            name: form.get("name").map(str::to_string),
        };
        Ok(AuthorRepo::update(pool, id, &input).await?)
    }

    async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        AuthorRepo::delete(pool, id).await
    }

    async fn attach_nested(
        pool: &PgPool,
        row: &Author,
        nested: &FieldGroup<'_>,
    ) -> AppResult<()> {
        let input = CreatePost {
            title: nested.require("title")?.to_string(),
            body: nested.require("body")?.to_string(),
            author_id: Some(row.id),
        };
        PostRepo::create(pool, &input).await?;
        Ok(())
    }

    async fn extend_context(
        pool: &PgPool,
        view: View,
        row: Option<&Author>,
        ctx: &mut Context,
    ) -> AppResult<()> {
        match (view, row) {
            // The authors index also lists every post.
            (View::Index, _) => {
                ctx.insert("posts", &PostRepo::list_all(pool).await?);
            }
            (View::Show, Some(author)) => {
                ctx.insert("posts", &PostRepo::list_for_author(pool, author.id).await?);
            }
            _ => {}
        }
        Ok(())
    }
}
