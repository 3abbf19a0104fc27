use axum::body::Body;
use axum::extract::{Request, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;

use crate::app::state::App;
use crate::Error;

pub const PREFIX: &str = "/videos";

/// Serves a file below the current root.
///
/// The request reaching this handler has [`PREFIX`] already stripped, so its path is relative
/// to the root. Range and conditional headers are honored by [`ServeDir`].
async fn handler(State(app): State<App>, request: Request) -> Result<Response, Error> {
    let root = app.folder.root().await;
    Ok(ServeDir::new(root.as_str())
        .append_index_html_on_directories(false)
        .try_call(request)
        .await?
        .map(Body::new)
        .into_response())
}

pub fn router() -> Router<App> {
    Router::new().nest(PREFIX, Router::new().route("/{*path}", get(handler)))
}
