use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::app::state::{App, Folder};
use crate::filesystem::path;
use crate::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Response {
    pub path: String,
}

pub async fn handler(folder: &Folder) -> Result<Response, Error> {
    let root = folder.root().await;
    Ok(Response { path: path::absolute(&root)?.into_string() })
}

pub(super) async fn axum_handler(State(app): State<App>) -> Result<Json<Response>, Error> {
    handler(&app.folder).await.map(Json)
}
