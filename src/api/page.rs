//! Browser voice UI
//!
//! Speech capture and playback run entirely in the browser; the server only
//! ever receives transcribed text.

use axum::{Router, response::Html, routing::get};

/// The single-page voice UI, embedded at build time
pub const INDEX_HTML: &str = include_str!("../../static/index.html");

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Build page router
pub fn router() -> Router {
    Router::new().route("/", get(index))
}
