use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::app::state::{App, Folder};
use crate::filesystem::path;
use crate::scan::{self, Course};
use crate::Error;

pub type Response = Vec<Course>;

pub async fn handler(folder: &Folder) -> Result<Response, Error> {
    let root = folder.root().await;
    let span = tracing::Span::current();
    tokio::task::spawn_blocking(move || {
        let _enter = span.enter();
        scan::scan(&root, path::Relative::new(""))
    })
    .await
    .map_err(Error::from)
}

async fn axum_handler(State(app): State<App>) -> Result<Json<Response>, Error> {
    handler(&app.folder).await.map(Json)
}

pub fn router() -> Router<App> {
    Router::new().route("/api/courses", get(axum_handler))
}
