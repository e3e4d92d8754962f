pub mod health;
pub mod pages;

use axum::Router;

use crate::resource;
use crate::resources::{Authors, Owners, Posts};
use crate::state::AppState;

/// Build the full route tree.
///
/// ```text
/// /                 redirect to /posts
/// /about            static page
/// /health           JSON health check
/// /authors ...      authors CRUD (nested post group)
/// /posts ...        posts CRUD (nested author group)
/// /owners ...       owners CRUD (nested pet group)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(pages::router())
        .merge(health::router())
        .nest("/authors", resource::router::<Authors>())
        .nest("/posts", resource::router::<Posts>())
        .nest("/owners", resource::router::<Owners>())
}
