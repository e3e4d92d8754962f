//! Root redirect and static pages.

use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::routing::get;
use axum::Router;

use crate::error::AppResult;
use crate::state::AppState;
use crate::views;

/// GET / — the front page is the posts index.
async fn root() -> Redirect {
    Redirect::to("/posts")
}

/// GET /about
async fn about(State(state): State<AppState>) -> AppResult<Html<String>> {
    let ctx = views::base_context("/about", Some("About Me"));
    Ok(Html(state.views.render("pages/about.html", &ctx)?))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/about", get(about))
}
