//! The posts resource. Here the nested group is the `author`: a non-empty
//! author name creates an author row and points the post at it.

use async_trait::async_trait;
use sqlx::PgPool;
use tera::Context;

use scribble_core::types::DbId;
use scribble_db::models::author::CreateAuthor;
use scribble_db::models::post::{CreatePost, Post, UpdatePost};
use scribble_db::repositories::{AuthorRepo, PostRepo};

use crate::error::AppResult;
use crate::forms::FieldGroup;
use crate::resource::{Resource, View};

pub struct Posts;

#[async_trait]
impl Resource for Posts {
    const SINGULAR: &'static str = "post";
    const PLURAL: &'static str = "posts";
    const ENTITY: &'static str = "Post";
    const NESTED: &'static str = "author";
    const NESTED_GATE: &'static str = "name";

    type Row = Post;

    fn id(row: &Post) -> DbId {
        row.id
    }

    fn view_title(view: View) -> Option<&'static str> {
        match view {
            View::New => Some("New Post"),
            _ => None,
        }
    }

    async fn create(pool: &PgPool, form: &FieldGroup<'_>) -> AppResult<Post> {
        let input = CreatePost {
            title: form.require("title")?.to_string(),
            body: form.require("body")?.to_string(),
            author_id: None,
        };
        Ok(PostRepo::create(pool, &input).await?)
    }

    async fn find(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        PostRepo::find_by_id(pool, id).await
    }

    async fn all(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
        PostRepo::list_all(pool).await
    }

    async fn update(pool: &PgPool, id: DbId, form: &FieldGroup<'_>) -> AppResult<Option<Post>> {
        let input = UpdatePost {
            title: form.get("title").map(str::to_string),
            body: form.get("body").map(str::to_string),
        };
        Ok(PostRepo::update(pool, id, &input).await?)
    }

    async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        PostRepo::delete(pool, id).await
    }

    async fn attach_nested(pool: &PgPool, row: &Post, nested: &FieldGroup<'_>) -> AppResult<()> {
        let input = CreateAuthor {
            name: nested.require("name")?.to_string(),
        };
        let author = AuthorRepo::create(pool, &input).await?;
        PostRepo::set_author(pool, row.id, author.id).await?;
        Ok(())
    }

    async fn extend_context(
        pool: &PgPool,
        view: View,
        _row: Option<&Post>,
        ctx: &mut Context,
    ) -> AppResult<()> {
        // The show view resolves the post's author from the full list.
        if view == View::Show {
            ctx.insert("authors", &AuthorRepo::list_all(pool).await?);
        }
        Ok(())
    }
}
