use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::app::state::{App, Folder};
use crate::Error;

#[derive(Debug, Default, Deserialize)]
pub struct Request {
    pub path: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Response {
    pub success: bool,
    pub path: String,
}

/// Replaces the current root with `path` if it exists.
///
/// Existence is the only requirement, a path to a regular file is accepted as well.
pub async fn handler(folder: &Folder, request: Request) -> Result<Response, Error> {
    let path = request.path.filter(|path| !path.is_empty()).ok_or(Error::InvalidFolderPath)?;

    if !matches!(tokio::fs::try_exists(&path).await, Ok(true)) {
        tracing::warn!(%path, "folder does not exist");
        return Err(Error::InvalidFolderPath);
    }

    folder.set(path.as_str().into()).await;
    tracing::info!(root = %path, "folder changed");
    Ok(Response { success: true, path })
}

pub(super) async fn axum_handler(
    State(app): State<App>,
    query: Result<Query<Request>, QueryRejection>,
) -> Result<Json<Response>, Error> {
    let Query(request) = query.map_err(|rejection| {
        tracing::warn!(set_folder_query_rejection = %rejection);
        Error::InvalidFolderPath
    })?;
    handler(&app.folder, request).await.map(Json)
}
