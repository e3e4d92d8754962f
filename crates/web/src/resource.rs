//! Generic CRUD controller.
//!
//! Every resource exposes the same eight routes; the only per-resource
//! behavior is how rows are persisted and which nested form group may be
//! turned into an associated record on create/update. [`Resource`] captures
//! those customization points and [`router`] instantiates the full route
//! set for one implementation.

use async_trait::async_trait;
use axum::extract::{Path, RawForm, State};
use axum::response::{Html, Redirect};
use axum::routing::get;
use axum::Router;
use serde::Serialize;
use sqlx::PgPool;
use tera::Context;

use scribble_core::error::CoreError;
use scribble_core::types::DbId;

use crate::error::AppResult;
use crate::forms::{FieldGroup, FormParams};
use crate::state::AppState;
use crate::views;

/// Which view of a resource is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Index,
    New,
    Show,
    Edit,
    Delete,
}

impl View {
    fn template(self, plural: &str) -> String {
        let name = match self {
            View::Index => "index",
            View::New => "new",
            View::Show => "show",
            View::Edit => "edit",
            View::Delete => "delete",
        };
        format!("{plural}/{name}.html")
    }
}

/// One CRUD resource and its nested-child rule.
///
/// Implementations delegate to the repository layer; the generic handlers
/// below supply the identical route behavior.
#[async_trait]
pub trait Resource: Send + Sync + 'static {
    /// Form group key for the entity's own fields, e.g. `"author"`.
    const SINGULAR: &'static str;
    /// Path segment and template directory, e.g. `"authors"`.
    const PLURAL: &'static str;
    /// Entity name used in error messages.
    const ENTITY: &'static str;
    /// Form group key of the nested record, e.g. `"post"`. The group must
    /// be submitted on every create/update even when unused.
    const NESTED: &'static str;
    /// Field inside the nested group that gates nested creation: when it
    /// is empty no nested record is created.
    const NESTED_GATE: &'static str;

    type Row: Serialize + Send + Sync;

    fn id(row: &Self::Row) -> DbId;

    /// Title for a view, formatted into the page title by the layout.
    fn view_title(_view: View) -> Option<&'static str> {
        None
    }

    async fn create(pool: &PgPool, form: &FieldGroup<'_>) -> AppResult<Self::Row>;
    async fn find(pool: &PgPool, id: DbId) -> Result<Option<Self::Row>, sqlx::Error>;
    async fn all(pool: &PgPool) -> Result<Vec<Self::Row>, sqlx::Error>;
    async fn update(pool: &PgPool, id: DbId, form: &FieldGroup<'_>)
        -> AppResult<Option<Self::Row>>;
    async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error>;

    /// Create the nested record and associate it with `row`. Appends to the
    /// row's collection; existing children are never touched.
    async fn attach_nested(
        pool: &PgPool,
        row: &Self::Row,
        nested: &FieldGroup<'_>,
    ) -> AppResult<()>;

    /// Add view-specific context (e.g. the authors index also lists posts).
    /// `row` is `None` on collection views.
    async fn extend_context(
        _pool: &PgPool,
        _view: View,
        _row: Option<&Self::Row>,
        _ctx: &mut Context,
    ) -> AppResult<()> {
        Ok(())
    }
}

/// The standard route set for one resource, to be nested under `/<plural>`.
///
/// ```text
/// GET  /             -> index
/// POST /             -> create (redirects to show)
/// GET  /new          -> empty form
/// GET  /{id}         -> show
/// POST /{id}         -> update (redirects to show)
/// GET  /{id}/edit    -> edit form
/// GET  /{id}/delete  -> delete confirmation
/// POST /{id}/delete  -> destroy (redirects to /)
/// ```
pub fn router<R: Resource>() -> Router<AppState> {
    Router::new()
        .route("/", get(index::<R>).post(create::<R>))
        .route("/new", get(new_form::<R>))
        .route("/{id}", get(show::<R>).post(update::<R>))
        .route("/{id}/edit", get(edit::<R>))
        .route("/{id}/delete", get(delete_confirm::<R>).post(destroy::<R>))
}

/// Route ids are opaque strings; anything non-numeric behaves like a miss,
/// not a malformed request.
fn parse_id<R: Resource>(raw: &str) -> Result<DbId, CoreError> {
    raw.parse().map_err(|_| CoreError::not_found(R::ENTITY, raw))
}

fn show_path<R: Resource>(id: DbId) -> String {
    format!("/{}/{}", R::PLURAL, id)
}

fn render<R: Resource>(state: &AppState, view: View, ctx: &Context) -> AppResult<Html<String>> {
    Ok(Html(state.views.render(&view.template(R::PLURAL), ctx)?))
}

async fn load<R: Resource>(pool: &PgPool, raw_id: &str) -> AppResult<(DbId, R::Row)> {
    let id = parse_id::<R>(raw_id)?;
    let row = R::find(pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found(R::ENTITY, id))?;
    Ok((id, row))
}

/// Render a detail-style view (show, edit, delete confirmation).
async fn detail<R: Resource>(
    state: &AppState,
    raw_id: &str,
    view: View,
    path_suffix: &str,
) -> AppResult<Html<String>> {
    let (id, row) = load::<R>(&state.pool, raw_id).await?;
    let path = format!("{}{}", show_path::<R>(id), path_suffix);
    let mut ctx = views::base_context(&path, R::view_title(view));
    ctx.insert(R::SINGULAR, &row);
    R::extend_context(&state.pool, view, Some(&row), &mut ctx).await?;
    render::<R>(state, view, &ctx)
}

pub async fn index<R: Resource>(State(state): State<AppState>) -> AppResult<Html<String>> {
    let rows = R::all(&state.pool).await?;
    let mut ctx = views::base_context(&format!("/{}", R::PLURAL), R::view_title(View::Index));
    ctx.insert(R::PLURAL, &rows);
    R::extend_context(&state.pool, View::Index, None, &mut ctx).await?;
    render::<R>(&state, View::Index, &ctx)
}

pub async fn new_form<R: Resource>(State(state): State<AppState>) -> AppResult<Html<String>> {
    let ctx = views::base_context(&format!("/{}/new", R::PLURAL), R::view_title(View::New));
    render::<R>(&state, View::New, &ctx)
}

pub async fn create<R: Resource>(
    State(state): State<AppState>,
    RawForm(body): RawForm,
) -> AppResult<Redirect> {
    let params = FormParams::parse(&body)?;
    let parent = params.group(R::SINGULAR)?;
    // The nested group and its gate field are required even when blank,
    // and are resolved up front so a rejected request persists nothing.
    let nested = params.group(R::NESTED)?;
    let gate = nested.require(R::NESTED_GATE)?;

    let row = R::create(&state.pool, &parent).await?;
    if !gate.is_empty() {
        R::attach_nested(&state.pool, &row, &nested).await?;
    }

    tracing::info!(entity = R::ENTITY, id = R::id(&row), "created");
    Ok(Redirect::to(&show_path::<R>(R::id(&row))))
}

pub async fn show<R: Resource>(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Html<String>> {
    detail::<R>(&state, &raw_id, View::Show, "").await
}

pub async fn edit<R: Resource>(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Html<String>> {
    detail::<R>(&state, &raw_id, View::Edit, "/edit").await
}

pub async fn update<R: Resource>(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    RawForm(body): RawForm,
) -> AppResult<Redirect> {
    let id = parse_id::<R>(&raw_id)?;
    let params = FormParams::parse(&body)?;
    let parent = params.group(R::SINGULAR)?;
    let nested = params.group(R::NESTED)?;
    let gate = nested.require(R::NESTED_GATE)?;

    let row = R::update(&state.pool, id, &parent)
        .await?
        .ok_or_else(|| CoreError::not_found(R::ENTITY, id))?;
    if !gate.is_empty() {
        R::attach_nested(&state.pool, &row, &nested).await?;
    }

    tracing::info!(entity = R::ENTITY, id, "updated");
    Ok(Redirect::to(&show_path::<R>(id)))
}

pub async fn delete_confirm<R: Resource>(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Html<String>> {
    detail::<R>(&state, &raw_id, View::Delete, "/delete").await
}

pub async fn destroy<R: Resource>(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Redirect> {
    let id = parse_id::<R>(&raw_id)?;
    if !R::delete(&state.pool, id).await? {
        return Err(CoreError::not_found(R::ENTITY, id).into());
    }

    tracing::info!(entity = R::ENTITY, id, "deleted");
    Ok(Redirect::to("/"))
}
