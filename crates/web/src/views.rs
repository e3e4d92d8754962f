//! Template engine and view helpers.
//!
//! Templates are embedded at compile time so the binary carries its own
//! views and tests need no filesystem layout to run.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use tera::{Context, Tera, Value};

/// All template sources, keyed by the name used in `render` calls.
const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../templates/layout.html")),
    ("pages/about.html", include_str!("../templates/pages/about.html")),
    ("authors/index.html", include_str!("../templates/authors/index.html")),
    ("authors/new.html", include_str!("../templates/authors/new.html")),
    ("authors/show.html", include_str!("../templates/authors/show.html")),
    ("authors/edit.html", include_str!("../templates/authors/edit.html")),
    ("authors/delete.html", include_str!("../templates/authors/delete.html")),
    ("posts/index.html", include_str!("../templates/posts/index.html")),
    ("posts/new.html", include_str!("../templates/posts/new.html")),
    ("posts/show.html", include_str!("../templates/posts/show.html")),
    ("posts/edit.html", include_str!("../templates/posts/edit.html")),
    ("posts/delete.html", include_str!("../templates/posts/delete.html")),
    ("owners/index.html", include_str!("../templates/owners/index.html")),
    ("owners/new.html", include_str!("../templates/owners/new.html")),
    ("owners/show.html", include_str!("../templates/owners/show.html")),
    ("owners/edit.html", include_str!("../templates/owners/edit.html")),
    ("owners/delete.html", include_str!("../templates/owners/delete.html")),
];

/// Compiled Tera instance with the `post_date` filter registered.
pub struct ViewEngine {
    tera: Tera,
}

impl ViewEngine {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.to_vec())?;
        tera.register_filter("post_date", post_date);
        Ok(Self { tera })
    }

    pub fn render(&self, template: &str, ctx: &Context) -> Result<String, tera::Error> {
        self.tera.render(template, ctx)
    }
}

/// Build the per-request template context: the formatted page title plus
/// the show-page predicates the layout checks.
pub fn base_context(path: &str, title: Option<&str>) -> Context {
    let mut ctx = Context::new();
    ctx.insert("title", &page_title(title));
    ctx.insert("post_show_page", &post_show_page(path));
    ctx.insert("author_show_page", &author_show_page(path));
    ctx
}

/// `"{title} -- Blogs"`, or the site default when the view sets no title.
pub fn page_title(title: Option<&str>) -> String {
    match title {
        Some(t) => format!("{t} -- Blogs"),
        None => "This is the blog".to_string(),
    }
}

/// True on a post detail page (`/posts/{id}`).
pub fn post_show_page(path: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^/posts/\d+$").expect("valid pattern"))
        .is_match(path)
}

/// True on an author detail page (`/authors/{id}`).
pub fn author_show_page(path: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^/authors/\d+$").expect("valid pattern"))
        .is_match(path)
}

/// Tera filter: format an RFC 3339 timestamp as `%d %b %Y`, e.g.
/// `30 Aug 2026`.
fn post_date(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let raw = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("post_date expects a datetime string"))?;
    let parsed = chrono::DateTime::parse_from_rfc3339(raw)
        .map_err(|e| tera::Error::msg(format!("post_date: {e}")))?;
    Ok(Value::String(parsed.format("%d %b %Y").to_string()))
}
